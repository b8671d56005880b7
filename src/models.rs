//! Data models for the note client.
//!
//! These mirror the JSON records exchanged with the notes backend: notes,
//! tags, paginated listings and the statistics aggregate.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Separators accepted when a user types a tag list: ASCII comma and the
/// ideographic enumeration comma.
pub const TAG_SEPARATORS: [char; 2] = [',', '、'];

/// Separator used when a tag list is written back into a form field.
pub const TAG_JOIN_SEPARATOR: &str = "、";

// ============================================================================
// Core Note Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Request body for creating or updating a note.
///
/// The title is always sent empty; the backend keeps the column but the
/// client never edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NotePayload {
    pub fn new(content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: String::new(),
            content: content.into(),
            tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagPayload {
    pub name: String,
}

// ============================================================================
// Listings and Aggregates
// ============================================================================

/// One page of results as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_notes: u64,
    pub total_tags: u64,
    pub days_tracked: u64,
}

// ============================================================================
// Tag Parsing
// ============================================================================

/// Split a raw tag string on either separator, trim each part and drop the
/// empty ones. Order and duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATORS)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags for display in an input field.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_JOIN_SEPARATOR)
}
