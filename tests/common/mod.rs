//! In-process stand-in for the notes backend, served on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::Deserialize;

use tagnote::{ClientConfig, Note, Page, Statistics, Tag};

pub const CREATED_AT: &str = "2024-05-01T10:20:30";

#[derive(Default)]
pub struct Store {
    pub notes: Vec<Note>,
    pub tags: Vec<Tag>,
    pub next_id: i64,
    /// When set, every listing request answers 500.
    pub fail_listings: bool,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn ensure_tags(&mut self, names: &[String]) {
        for name in names {
            if !self.tags.iter().any(|t| &t.name == name) {
                let id = self.next_id();
                self.tags.push(Tag {
                    id,
                    name: name.clone(),
                });
            }
        }
    }

    pub fn insert(&mut self, content: &str, tags: &[&str]) -> i64 {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        self.ensure_tags(&tags);
        let id = self.next_id();
        let created: NaiveDateTime = CREATED_AT.parse().unwrap();
        self.notes.push(Note {
            id,
            title: Some(String::new()),
            content: content.to_string(),
            tags,
            created_at: Some(created),
            updated_at: Some(created),
        });
        id
    }
}

pub type SharedStore = Arc<Mutex<Store>>;

#[derive(Deserialize)]
struct PageParams {
    #[serde(default)]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
    tags: Option<String>,
    title: Option<String>,
}

fn default_size() -> u32 {
    5
}

#[derive(Deserialize)]
struct NoteBody {
    #[serde(default)]
    content: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct TagBody {
    name: String,
}

fn paginate(notes: Vec<Note>, page: u32, size: u32) -> Page<Note> {
    let size = size.max(1);
    let total_elements = notes.len() as u64;
    let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
    let content = notes
        .into_iter()
        .skip((page * size) as usize)
        .take(size as usize)
        .collect();
    Page {
        content,
        current_page: page,
        page_size: size,
        total_elements,
        total_pages,
        has_next: page + 1 < total_pages,
        has_previous: page > 0,
    }
}

async fn list(State(store): State<SharedStore>, Query(p): Query<PageParams>) -> Response {
    let store = store.lock().unwrap();
    if store.fail_listings {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(paginate(store.notes.clone(), p.page, p.size)).into_response()
}

async fn search(State(store): State<SharedStore>, Query(p): Query<PageParams>) -> Response {
    let store = store.lock().unwrap();
    if store.fail_listings {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let wanted: Vec<String> = p
        .tags
        .as_deref()
        .map(|t| t.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    let notes = store
        .notes
        .iter()
        .filter(|n| match &p.title {
            Some(title) => n.title.as_deref().unwrap_or("").contains(title.as_str()),
            None => n.tags.iter().any(|t| wanted.contains(t)),
        })
        .cloned()
        .collect();
    Json(paginate(notes, p.page, p.size)).into_response()
}

async fn get_note(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.notes.iter().find(|n| n.id == id) {
        Some(note) => Json(note.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_note(State(store): State<SharedStore>, Json(body): Json<NoteBody>) -> Response {
    let mut store = store.lock().unwrap();
    let tags: Vec<&str> = body.tags.iter().map(String::as_str).collect();
    let id = store.insert(&body.content, &tags);
    let note = store.notes.iter().find(|n| n.id == id).cloned();
    (StatusCode::CREATED, Json(note)).into_response()
}

async fn update_note(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(body): Json<NoteBody>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.ensure_tags(&body.tags);
    match store.notes.iter_mut().find(|n| n.id == id) {
        Some(note) => {
            note.content = body.content;
            note.tags = body.tags;
            Json(note.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_note(State(store): State<SharedStore>, Path(id): Path<i64>) -> StatusCode {
    store.lock().unwrap().notes.retain(|n| n.id != id);
    StatusCode::NO_CONTENT
}

async fn statistics(State(store): State<SharedStore>) -> Json<Statistics> {
    let store = store.lock().unwrap();
    Json(Statistics {
        total_notes: store.notes.len() as u64,
        total_tags: store.tags.len() as u64,
        days_tracked: 1,
    })
}

async fn dates(State(store): State<SharedStore>) -> Json<Vec<String>> {
    let store = store.lock().unwrap();
    Json(
        store
            .notes
            .iter()
            .filter_map(|n| n.created_at)
            .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
            .collect(),
    )
}

async fn list_tags(State(store): State<SharedStore>) -> Json<Vec<Tag>> {
    Json(store.lock().unwrap().tags.clone())
}

async fn create_tag(State(store): State<SharedStore>, Json(body): Json<TagBody>) -> Json<Tag> {
    let mut store = store.lock().unwrap();
    store.ensure_tags(std::slice::from_ref(&body.name));
    let tag = store
        .tags
        .iter()
        .find(|t| t.name == body.name)
        .cloned()
        .unwrap();
    Json(tag)
}

async fn delete_tag(State(store): State<SharedStore>, Path(id): Path<i64>) -> StatusCode {
    let mut store = store.lock().unwrap();
    let Some(pos) = store.tags.iter().position(|t| t.id == id) else {
        return StatusCode::NOT_FOUND;
    };
    let tag = store.tags.remove(pos);
    store.notes.retain(|n| !n.tags.contains(&tag.name));
    StatusCode::NO_CONTENT
}

pub fn backend_router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/notes", axum::routing::post(create_note))
        .route("/api/notes/paginated", get(list))
        .route("/api/notes/search/paginated", get(search))
        .route("/api/notes/statistics", get(statistics))
        .route("/api/notes/dates", get(dates))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/api/tags", get(list_tags).post(create_tag))
        .route("/api/tags/{id}", delete(delete_tag))
        .with_state(store)
}

pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Start a backend and return its store plus a client config pointing at it.
pub async fn start_backend() -> (SharedStore, ClientConfig) {
    let store: SharedStore = Arc::new(Mutex::new(Store::default()));
    let addr = serve(backend_router(store.clone())).await;
    let config = ClientConfig::for_api_base(&format!("http://{addr}/api")).unwrap();
    (store, config)
}
