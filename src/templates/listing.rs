//! Note cards and pagination controls.

use chrono::NaiveDateTime;

use crate::models::{Note, Page};
use crate::pagination::ListingState;
use crate::sanitize::{html_escape, sanitize_html};

pub const NO_NOTES_PLACEHOLDER: &str =
    r#"<p class="no-notes">No notes found. Create your first note above!</p>"#;

fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn render_note(note: &Note) -> String {
    let tags_html = if note.tags.is_empty() {
        String::new()
    } else {
        let chips: String = note
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
            .collect();
        format!(r#"<div class="note-tags">{chips}</div>"#)
    };

    format!(
        r#"<div class="note-card" data-id="{id}">
            <div class="note-content">{content}</div>
            <div class="note-meta">
                <span>Created: {created}</span>
                <span>Updated: {updated}</span>
            </div>
            {tags_html}
            <div class="note-actions">
                <a class="btn" href="/notes/{id}/edit">Edit</a>
                <form method="post" action="/notes/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this note?')">
                    <button type="submit" class="danger">Delete</button>
                </form>
            </div>
        </div>"#,
        id = note.id,
        content = sanitize_html(&note.content),
        created = html_escape(&format_timestamp(note.created_at)),
        updated = html_escape(&format_timestamp(note.updated_at)),
        tags_html = tags_html,
    )
}

/// Note cards, or the placeholder when there are none.
pub fn render_notes(notes: &[Note]) -> String {
    if notes.is_empty() {
        return NO_NOTES_PLACEHOLDER.to_string();
    }
    notes.iter().map(render_note).collect()
}

fn page_link(label: &str, target: Option<u32>) -> String {
    match target {
        Some(n) => format!(r#"<a class="btn" href="/page/{n}">{label}</a>"#),
        None => format!(r#"<span class="btn disabled">{label}</span>"#),
    }
}

/// Pagination bar for `response`, empty when everything fits on one page.
pub fn render_pagination(response: &Page<Note>, state: &ListingState) -> String {
    if response.total_pages <= 1 {
        return String::new();
    }
    let page = state.page;
    let last = response.total_pages - 1;
    let prev = response.has_previous.then(|| page.saturating_sub(1));
    let next = response.has_next.then(|| page + 1);

    format!(
        r#"<div class="pagination">
            <div class="pagination-info">Showing {range} notes</div>
            {first}
            {prev}
            <span>Page {current} of {total}</span>
            {next}
            {last}
        </div>"#,
        range = state.range_label(response.total_elements),
        first = page_link("&laquo; First", response.has_previous.then_some(0)),
        prev = page_link("Previous", prev),
        current = page + 1,
        total = response.total_pages,
        next = page_link("Next", next),
        last = page_link("Last &raquo;", response.has_next.then_some(last)),
    )
}
