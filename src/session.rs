//! The single session shared by every browser tab talking to this server:
//! listing, form and the pending notice.

use tracing::error;

use crate::error::ClientError;
use crate::form::NoteForm;
use crate::pagination::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Log `err` and turn it into a user-facing notice. Validation failures
    /// carry their own text; everything else gets `context`.
    pub fn from_error(context: &str, err: &ClientError) -> Self {
        error!(error = %err, "{context}");
        if err.is_local() {
            Self::error(err.to_string())
        } else {
            Self::error(context)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub listing: Listing,
    pub form: NoteForm,
    notice: Option<Notice>,
}

impl Session {
    pub fn new(page_size: u32) -> Self {
        Self {
            listing: Listing::new(page_size),
            form: NoteForm::new(),
            notice: None,
        }
    }

    pub fn flash(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Take the pending notice, leaving none behind.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
