//! Main page: form, note listing and sidebar panels.

use crate::calendar::CalendarCell;
use crate::form::NoteForm;
use crate::models::{Note, Page, Statistics, Tag};
use crate::pagination::{Filter, ListingState};
use crate::sanitize::html_escape;
use crate::session::Notice;

use super::components::base_html;
use super::editor::render_note_form;
use super::listing::{render_notes, render_pagination};
use super::sidebar::{render_calendar, render_statistics, render_tags};

const LOAD_FAILED: &str = r#"<p class="no-notes">Notes could not be loaded.</p>"#;

/// Outcome of loading one sidebar panel.
#[derive(Debug, Clone, Copy)]
pub enum Panel<T> {
    /// Switched off by configuration.
    Disabled,
    /// The fetch failed.
    Unavailable,
    Loaded(T),
}

pub struct IndexView<'a> {
    pub state: &'a ListingState,
    /// `None` when the listing fetch failed.
    pub notes: Option<&'a Page<Note>>,
    pub form: &'a NoteForm,
    pub tags: Panel<&'a [Tag]>,
    pub statistics: Panel<&'a Statistics>,
    pub calendar: Panel<&'a [CalendarCell]>,
    /// Shown in order: fetch failures first, then the flashed notice.
    pub notices: &'a [Notice],
}

fn listing_heading(filter: &Filter) -> String {
    match filter {
        Filter::None => "All notes".to_string(),
        Filter::Tags(tags) => format!("Notes tagged {}", html_escape(&tags.join(", "))),
        Filter::Title(title) => format!("Notes titled &ldquo;{}&rdquo;", html_escape(title)),
    }
}

fn render_panel<T>(panel: Panel<T>, render: impl FnOnce(Option<T>) -> String) -> String {
    match panel {
        Panel::Disabled => String::new(),
        Panel::Unavailable => render(None),
        Panel::Loaded(value) => render(Some(value)),
    }
}

pub fn render_index(view: &IndexView<'_>) -> String {
    let listing = match view.notes {
        Some(page) => format!(
            "{}{}",
            render_notes(&page.content),
            render_pagination(page, view.state)
        ),
        None => LOAD_FAILED.to_string(),
    };

    let main = format!(
        r#"{form}
        <section class="notes-section">
            <h2>{heading}</h2>
            <div id="notesContainer">{listing}</div>
        </section>"#,
        form = render_note_form(view.form),
        heading = listing_heading(&view.state.filter),
        listing = listing,
    );

    let sidebar = [
        render_panel(view.tags, |tags| render_tags(tags.unwrap_or_default())),
        render_panel(view.statistics, render_statistics),
        render_panel(view.calendar, |cells| render_calendar(cells.unwrap_or_default())),
    ]
    .concat();

    base_html("Notes", &main, &sidebar, &view.state.filter, view.notices)
}
