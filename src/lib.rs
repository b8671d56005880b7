//! Tagnote library - re-exports for testing and external use.
//!
//! The application is a server-rendered browser client for a tagged-notes
//! REST backend. The browser talks to this process; this process talks to the
//! backend and owns the session state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod sanitize;
pub mod session;
pub mod templates;

use api::ApiClient;
use session::Session;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub config: ClientConfig,
    pub api: ApiClient,
    session: Mutex<Session>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> error::Result<Self> {
        let api = ApiClient::new(&config)?;
        let session = Mutex::new(Session::new(config.page_size));
        Ok(Self {
            config,
            api,
            session,
        })
    }

    /// Lock the session. Never hold the guard across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route("/search/clear", get(handlers::clear_search))
        .route("/page/{page}", get(handlers::go_to_page))
        .route("/notes", post(handlers::submit_note))
        .route("/notes/cancel", post(handlers::cancel_edit))
        .route("/notes/{id}/edit", get(handlers::edit_note))
        .route("/notes/{id}/delete", post(handlers::delete_note))
        .route("/tags", post(handlers::create_tag))
        .route("/tags/{id}/delete", post(handlers::delete_tag))
        .route("/api/calendar", get(handlers::calendar_api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use calendar::{build_calendar, parse_activity_dates, CalendarCell, CALENDAR_DAYS};
pub use config::{Capabilities, ClientConfig, ConfigError};
pub use error::ClientError;
pub use form::{FormMode, FormatCommand, MarkupSurface, NoteForm, RichTextSurface, Submission, SubmitTarget};
pub use models::{parse_tags, Note, NotePayload, Page, Statistics, Tag};
pub use pagination::{Filter, Listing, ListingQuery, ListingState, Ticket};
pub use sanitize::{html_escape, sanitize_html, visible_text};
pub use session::{Notice, NoticeKind};
