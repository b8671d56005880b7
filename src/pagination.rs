//! Listing state: current page, page size and the active filter.
//!
//! Transitions are pure. Each produces a candidate [`ListingState`] that the
//! caller fetches and only commits once the backend has answered, so a failed
//! request never moves the page or the filter. [`Listing`] adds request
//! sequencing on top: every fetch takes a [`Ticket`] and only the most
//! recently issued ticket may commit.

use crate::models::{parse_tags, Page};

/// Search constraint applied to the note listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    None,
    /// Normalized tag list, never empty.
    Tags(Vec<String>),
    /// Trimmed title term, never empty.
    Title(String),
}

impl Filter {
    pub fn is_active(&self) -> bool {
        !matches!(self, Filter::None)
    }

    /// Value to prefill the search box with.
    pub fn display_term(&self) -> String {
        match self {
            Filter::None => String::new(),
            Filter::Tags(tags) => tags.join(", "),
            Filter::Title(title) => title.clone(),
        }
    }
}

/// Backend request derived from a listing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Path relative to the API root.
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

pub const LIST_PATH: &str = "notes/paginated";
pub const SEARCH_PATH: &str = "notes/search/paginated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub page: u32,
    pub page_size: u32,
    pub filter: Filter,
    /// Page count from the last committed response, `None` before the
    /// first successful fetch.
    pub total_pages: Option<u32>,
}

impl ListingState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            filter: Filter::None,
            total_pages: None,
        }
    }

    /// Replace the filter with the tags in `raw_term`, back on page 0.
    /// A term with no tags in it clears the filter.
    pub fn with_tag_filter(&self, raw_term: &str) -> Self {
        let tags = parse_tags(raw_term);
        let filter = if tags.is_empty() {
            Filter::None
        } else {
            Filter::Tags(tags)
        };
        self.with_filter(filter)
    }

    /// Replace the filter with a title search, back on page 0.
    pub fn with_title_filter(&self, raw_term: &str) -> Self {
        let term = raw_term.trim();
        let filter = if term.is_empty() {
            Filter::None
        } else {
            Filter::Title(term.to_string())
        };
        self.with_filter(filter)
    }

    pub fn cleared(&self) -> Self {
        self.with_filter(Filter::None)
    }

    /// Same filter, page 0. Used after every successful mutation.
    pub fn first_page(&self) -> Self {
        Self {
            page: 0,
            ..self.clone()
        }
    }

    /// Move to page `n` if it exists according to the last response.
    pub fn at_page(&self, n: u32) -> Option<Self> {
        let total = self.total_pages?;
        (n < total).then(|| Self {
            page: n,
            ..self.clone()
        })
    }

    fn with_filter(&self, filter: Filter) -> Self {
        Self {
            page: 0,
            filter,
            ..self.clone()
        }
    }

    pub fn build_query(&self) -> ListingQuery {
        let mut params = Vec::with_capacity(3);
        let path = match &self.filter {
            Filter::None => LIST_PATH,
            Filter::Tags(tags) => {
                params.push(("tags", tags.join(",")));
                SEARCH_PATH
            }
            Filter::Title(title) => {
                params.push(("title", title.clone()));
                SEARCH_PATH
            }
        };
        params.push(("page", self.page.to_string()));
        params.push(("size", self.page_size.to_string()));
        ListingQuery { path, params }
    }

    /// "11 to 20 of 25" for page 1 of size 10 with 25 notes.
    pub fn range_label(&self, total_elements: u64) -> String {
        let size = u64::from(self.page_size);
        let first = u64::from(self.page) * size + 1;
        let last = ((u64::from(self.page) + 1) * size).min(total_elements);
        format!("{first} to {last} of {total_elements}")
    }
}

// ============================================================================
// Request Sequencing
// ============================================================================

/// Handle for one in-flight listing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Committed listing state plus the request sequence counter.
#[derive(Debug, Clone)]
pub struct Listing {
    current: ListingState,
    issued: u64,
}

impl Listing {
    pub fn new(page_size: u32) -> Self {
        Self {
            current: ListingState::new(page_size),
            issued: 0,
        }
    }

    pub fn current(&self) -> &ListingState {
        &self.current
    }

    /// Reserve the next sequence number. Any ticket issued earlier becomes
    /// stale.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Commit `candidate` together with the page count from `response`.
    /// Returns false and changes nothing when `ticket` is stale.
    pub fn commit<T>(&mut self, ticket: Ticket, candidate: ListingState, response: &Page<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.current = ListingState {
            total_pages: Some(response.total_pages),
            ..candidate
        };
        true
    }

    /// Set state directly without a fetch, e.g. back to page 0 after a
    /// mutation; the next render fetches and commits it. Fetches already in
    /// flight become stale so they cannot overwrite the reset.
    pub fn reset_to(&mut self, state: ListingState) {
        self.issue();
        self.current = state;
    }
}
