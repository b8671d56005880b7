//! Note form: create/edit mode and submission payloads.
//!
//! The form never talks to the browser's editing API directly. Formatting
//! goes through [`RichTextSurface`], which the browser editor and
//! [`MarkupSurface`] both provide.

use crate::error::{ClientError, Result};
use crate::models::{join_tags, parse_tags, Note, NotePayload};
use crate::sanitize::visible_text;

// ============================================================================
// Rich Text Surface
// ============================================================================

/// Editing capabilities the form relies on.
pub trait RichTextSurface {
    fn html(&self) -> String;
    fn set_html(&mut self, html: &str);
    fn apply_bold(&mut self);
    fn insert_ordered_list(&mut self);
    fn insert_unordered_list(&mut self);

    fn clear(&mut self) {
        self.set_html("");
    }
}

/// Toolbar commands, one per formatting capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    OrderedList,
    UnorderedList,
}

impl FormatCommand {
    pub const ALL: [FormatCommand; 3] = [
        FormatCommand::Bold,
        FormatCommand::OrderedList,
        FormatCommand::UnorderedList,
    ];

    pub fn apply<S: RichTextSurface + ?Sized>(self, surface: &mut S) {
        match self {
            FormatCommand::Bold => surface.apply_bold(),
            FormatCommand::OrderedList => surface.insert_ordered_list(),
            FormatCommand::UnorderedList => surface.insert_unordered_list(),
        }
    }

    /// Command name understood by the browser's editing surface.
    pub fn browser_command(self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::OrderedList => "insertOrderedList",
            FormatCommand::UnorderedList => "insertUnorderedList",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatCommand::Bold => "B",
            FormatCommand::OrderedList => "1.",
            FormatCommand::UnorderedList => "•",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormatCommand::Bold => "Bold",
            FormatCommand::OrderedList => "Numbered list",
            FormatCommand::UnorderedList => "Bullet list",
        }
    }
}

/// In-memory surface over an HTML string. With no selection to act on,
/// commands apply to the whole buffer; lists take one item per `<br>`
/// separated line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupSurface {
    html: String,
}

impl MarkupSurface {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    fn wrap_lines(&mut self, list_tag: &str) {
        let items: String = self
            .html
            .split("<br>")
            .map(|line| format!("<li>{}</li>", line.trim()))
            .collect();
        self.html = format!("<{list_tag}>{items}</{list_tag}>");
    }
}

impl RichTextSurface for MarkupSurface {
    fn html(&self) -> String {
        self.html.clone()
    }

    fn set_html(&mut self, html: &str) {
        self.html = html.to_string();
    }

    fn apply_bold(&mut self) {
        self.html = format!("<b>{}</b>", self.html);
    }

    fn insert_ordered_list(&mut self) {
        self.wrap_lines("ol");
    }

    fn insert_unordered_list(&mut self) {
        self.wrap_lines("ul");
    }
}

// ============================================================================
// Form State
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(i64),
}

/// A validated submission ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub target: SubmitTarget,
    pub payload: NotePayload,
}

impl Submission {
    pub fn success_message(&self) -> &'static str {
        match self.target {
            SubmitTarget::Create => "Note saved successfully!",
            SubmitTarget::Update(_) => "Note updated successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self.target {
            SubmitTarget::Create => "Failed to save note",
            SubmitTarget::Update(_) => "Failed to update note",
        }
    }
}

pub const EMPTY_CONTENT_MESSAGE: &str = "Note content cannot be empty";

/// Form contents plus create/edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    mode: FormMode,
    /// Raw editor HTML, unsanitized.
    content: String,
    /// Tag input exactly as shown in the field.
    tags: String,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "New note",
            FormMode::Editing(_) => "Edit note",
        }
    }

    /// Creating -> Editing(id), with the note's raw content and tags loaded.
    pub fn begin_edit(&mut self, note: &Note) {
        self.mode = FormMode::Editing(note.id);
        self.content = note.content.clone();
        self.tags = join_tags(&note.tags);
    }

    /// Back to an empty Creating form. Used on cancel and after a
    /// successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Remember what the user typed so a rejected or failed submit doesn't
    /// lose it. The mode is left alone.
    pub fn keep_draft(&mut self, content: &str, tags: &str) {
        self.content = content.to_string();
        self.tags = tags.to_string();
    }

    /// Read the surface and tag input into a submission. Content with no
    /// visible text is rejected without contacting the backend.
    pub fn prepare<S: RichTextSurface + ?Sized>(
        &self,
        surface: &S,
        raw_tags: &str,
    ) -> Result<Submission> {
        let content = surface.html();
        if visible_text(&content).trim().is_empty() {
            return Err(ClientError::validation(EMPTY_CONTENT_MESSAGE));
        }
        let target = match self.mode {
            FormMode::Creating => SubmitTarget::Create,
            FormMode::Editing(id) => SubmitTarget::Update(id),
        };
        Ok(Submission {
            target,
            payload: NotePayload::new(content, parse_tags(raw_tags)),
        })
    }
}
