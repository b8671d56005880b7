//! HTTP route handlers for the browser UI.
//!
//! Each handler follows the same order: update session state, release the
//! lock, call the backend, then lock again to commit the outcome. Mutating
//! routes flash a notice and redirect to the index; listing routes render
//! directly.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::{debug, info};

use crate::calendar::{build_calendar, parse_activity_dates, CalendarCell};
use crate::error::{ClientError, Result};
use crate::form::{FormMode, MarkupSurface, SubmitTarget};
use crate::models::{Note, Statistics, Tag};
use crate::pagination::{ListingState, Ticket};
use crate::session::Notice;
use crate::templates::{render_index, IndexView, Panel};
use crate::AppState;

type SharedState = Arc<AppState>;

// ============================================================================
// Listing
// ============================================================================

async fn when<T, F>(enabled: bool, fetch: F) -> Option<Result<T>>
where
    F: Future<Output = Result<T>>,
{
    if enabled {
        Some(fetch.await)
    } else {
        None
    }
}

fn panel<'a, T: ?Sized>(
    loaded: &'a Option<Result<Box<T>>>,
    context: &str,
    failures: &mut Vec<Notice>,
) -> Panel<&'a T> {
    match loaded {
        None => Panel::Disabled,
        Some(Ok(value)) => Panel::Loaded(&**value),
        Some(Err(err)) => {
            failures.push(Notice::from_error(context, err));
            Panel::Unavailable
        }
    }
}

/// Fetch `candidate` and the sidebar panels, commit the listing if `ticket`
/// is still current, and render the page.
async fn render_listing(state: &AppState, candidate: ListingState, ticket: Ticket) -> Html<String> {
    let caps = state.config.capabilities;
    let query = candidate.build_query();

    let (notes, tags, statistics, dates) = tokio::join!(
        state.api.list_notes(&query),
        when(caps.tags, state.api.list_tags()),
        when(caps.statistics, state.api.statistics()),
        when(caps.calendar, state.api.note_dates()),
    );

    let tags: Option<Result<Box<[Tag]>>> = tags.map(|r| r.map(Vec::into_boxed_slice));
    let statistics: Option<Result<Box<Statistics>>> = statistics.map(|r| r.map(Box::new));
    let today = Local::now().date_naive();
    let calendar: Option<Result<Box<[CalendarCell]>>> = dates.map(|r| {
        r.map(|dates| build_calendar(today, &parse_activity_dates(&dates)).into_boxed_slice())
    });

    let mut failures = Vec::new();
    let (shown, notes, form, pending) = {
        let mut session = state.session();
        let (shown, notes) = match notes {
            Ok(page) => {
                if !session.listing.commit(ticket, candidate.clone(), &page) {
                    debug!(?ticket, "discarding stale listing response");
                }
                let shown = ListingState {
                    total_pages: Some(page.total_pages),
                    ..candidate
                };
                (shown, Some(page))
            }
            Err(err) => {
                failures.push(Notice::from_error("Failed to load notes", &err));
                (session.listing.current().clone(), None)
            }
        };
        (shown, notes, session.form.clone(), session.take_notice())
    };

    let tags_panel = panel(&tags, "Failed to load tags", &mut failures);
    let statistics_panel = panel(&statistics, "Failed to load statistics", &mut failures);
    let calendar_panel = panel(&calendar, "Failed to load note dates", &mut failures);

    // Only the first failure is shown; the flashed notice always survives.
    let notices: Vec<Notice> = failures.into_iter().take(1).chain(pending).collect();

    Html(render_index(&IndexView {
        state: &shown,
        notes: notes.as_ref(),
        form: &form,
        tags: tags_panel,
        statistics: statistics_panel,
        calendar: calendar_panel,
        notices: &notices,
    }))
}

pub async fn index(State(state): State<SharedState>) -> Html<String> {
    let (candidate, ticket) = {
        let mut session = state.session();
        let candidate = session.listing.current().clone();
        (candidate, session.listing.issue())
    };
    render_listing(&state, candidate, ticket).await
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub tags: Option<String>,
    pub title: Option<String>,
}

pub async fn search(
    Query(query): Query<SearchQuery>,
    State(state): State<SharedState>,
) -> Html<String> {
    let (candidate, ticket) = {
        let mut session = state.session();
        let current = session.listing.current();
        let candidate = match (&query.title, &query.tags) {
            (Some(title), _) if !title.trim().is_empty() => current.with_title_filter(title),
            (_, Some(tags)) => current.with_tag_filter(tags),
            _ => current.cleared(),
        };
        (candidate, session.listing.issue())
    };
    info!(filter = ?candidate.filter, "search");
    render_listing(&state, candidate, ticket).await
}

pub async fn clear_search(State(state): State<SharedState>) -> Html<String> {
    let (candidate, ticket) = {
        let mut session = state.session();
        let candidate = session.listing.current().cleared();
        (candidate, session.listing.issue())
    };
    render_listing(&state, candidate, ticket).await
}

pub async fn go_to_page(Path(page): Path<u32>, State(state): State<SharedState>) -> Response {
    let next = {
        let mut session = state.session();
        let target = session.listing.current().at_page(page);
        match target {
            Some(candidate) => Some((candidate, session.listing.issue())),
            None => {
                session.flash(Notice::error(format!(
                    "Page {} does not exist",
                    u64::from(page) + 1
                )));
                None
            }
        }
    };
    match next {
        Some((candidate, ticket)) => render_listing(&state, candidate, ticket)
            .await
            .into_response(),
        None => Redirect::to("/").into_response(),
    }
}

// ============================================================================
// Note Form
// ============================================================================

#[derive(Deserialize)]
pub struct NoteFormInput {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

pub async fn submit_note(
    State(state): State<SharedState>,
    Form(input): Form<NoteFormInput>,
) -> Redirect {
    let prepared = {
        let mut session = state.session();
        let surface = MarkupSurface::from_html(input.content.as_str());
        let prepared = session.form.prepare(&surface, &input.tags);
        if let Err(err) = &prepared {
            session.form.keep_draft(&input.content, &input.tags);
            session.flash(Notice::from_error("Failed to save note", err));
        }
        prepared
    };
    let Ok(submission) = prepared else {
        return Redirect::to("/");
    };

    let result = match submission.target {
        SubmitTarget::Create => state.api.create_note(&submission.payload).await,
        SubmitTarget::Update(id) => state.api.update_note(id, &submission.payload).await,
    };

    let mut session = state.session();
    match result {
        Ok(note) => {
            info!(id = note.id, "note saved");
            session.form.reset();
            let first = session.listing.current().first_page();
            session.listing.reset_to(first);
            session.flash(Notice::success(submission.success_message()));
        }
        Err(err) => {
            session.form.keep_draft(&input.content, &input.tags);
            session.flash(Notice::from_error(submission.failure_message(), &err));
        }
    }
    Redirect::to("/")
}

pub async fn edit_note(Path(id): Path<i64>, State(state): State<SharedState>) -> Redirect {
    let result: Result<Note> = state.api.get_note(id).await;
    let mut session = state.session();
    match result {
        Ok(note) => session.form.begin_edit(&note),
        Err(err) => session.flash(Notice::from_error("Failed to load note for editing", &err)),
    }
    Redirect::to("/")
}

pub async fn cancel_edit(State(state): State<SharedState>) -> Redirect {
    state.session().form.reset();
    Redirect::to("/")
}

pub async fn delete_note(Path(id): Path<i64>, State(state): State<SharedState>) -> Redirect {
    let result = state.api.delete_note(id).await;
    let mut session = state.session();
    match result {
        Ok(()) => {
            info!(id, "note deleted");
            if session.form.mode() == FormMode::Editing(id) {
                session.form.reset();
            }
            let first = session.listing.current().first_page();
            session.listing.reset_to(first);
            session.flash(Notice::success("Note deleted successfully!"));
        }
        Err(err) => session.flash(Notice::from_error("Failed to delete note", &err)),
    }
    Redirect::to("/")
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Deserialize)]
pub struct TagFormInput {
    #[serde(default)]
    pub name: String,
}

pub async fn create_tag(
    State(state): State<SharedState>,
    Form(input): Form<TagFormInput>,
) -> Redirect {
    let name = input.name.trim();
    let result = if name.is_empty() {
        Err(ClientError::validation("Tag name cannot be empty"))
    } else {
        state.api.create_tag(name).await
    };
    let mut session = state.session();
    match result {
        Ok(tag) => session.flash(Notice::success(format!("Tag \"{}\" created", tag.name))),
        Err(err) => session.flash(Notice::from_error("Failed to create tag", &err)),
    }
    Redirect::to("/")
}

pub async fn delete_tag(Path(id): Path<i64>, State(state): State<SharedState>) -> Redirect {
    let result = state.api.delete_tag(id).await;
    let mut session = state.session();
    match result {
        Ok(()) => {
            info!(id, "tag deleted");
            let first = session.listing.current().first_page();
            session.listing.reset_to(first);
            session.flash(Notice::success("Tag deleted successfully!"));
        }
        Err(err) => session.flash(Notice::from_error("Failed to delete tag", &err)),
    }
    Redirect::to("/")
}

// ============================================================================
// Calendar API
// ============================================================================

pub async fn calendar_api(State(state): State<SharedState>) -> Response {
    match state.api.note_dates().await {
        Ok(dates) => {
            let today = Local::now().date_naive();
            Json(build_calendar(today, &parse_activity_dates(&dates))).into_response()
        }
        Err(err) => {
            let notice = Notice::from_error("Failed to load note dates", &err);
            (StatusCode::BAD_GATEWAY, notice.message).into_response()
        }
    }
}
