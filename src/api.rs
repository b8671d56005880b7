//! HTTP client for the notes backend.
//!
//! Every call resolves a path against the configured API root, treats any
//! non-2xx status as a failure and decodes JSON bodies into the types in
//! [`crate::models`].

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{Note, NotePayload, Page, Statistics, Tag, TagPayload};
use crate::pagination::ListingQuery;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base: config.api_base.clone(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(method = method.as_str(), url = url.as_str(), "backend request");
        Ok(self.http.request(method, url))
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, path, "backend rejected request");
            return Err(ClientError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<T> {
        let body = self.send(path, request).await?.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    /// Fetch one page of notes, filtered or not, as described by `query`.
    pub async fn list_notes(&self, query: &ListingQuery) -> Result<Page<Note>> {
        let request = self
            .request(Method::GET, query.path)?
            .query(&query.params);
        self.json(query.path, request).await
    }

    pub async fn get_note(&self, id: i64) -> Result<Note> {
        let path = format!("notes/{id}");
        let request = self.request(Method::GET, &path)?;
        self.json(&path, request).await
    }

    pub async fn create_note(&self, payload: &NotePayload) -> Result<Note> {
        let request = self.request(Method::POST, "notes")?.json(payload);
        self.json("notes", request).await
    }

    pub async fn update_note(&self, id: i64, payload: &NotePayload) -> Result<Note> {
        let path = format!("notes/{id}");
        let request = self.request(Method::PUT, &path)?.json(payload);
        self.json(&path, request).await
    }

    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let path = format!("notes/{id}");
        let request = self.request(Method::DELETE, &path)?;
        self.send(&path, request).await.map(drop)
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        let request = self.request(Method::GET, "notes/statistics")?;
        self.json("notes/statistics", request).await
    }

    /// Creation dates of all notes, as the backend formats them.
    pub async fn note_dates(&self) -> Result<Vec<String>> {
        let request = self.request(Method::GET, "notes/dates")?;
        self.json("notes/dates", request).await
    }

    // ------------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------------

    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let request = self.request(Method::GET, "tags")?;
        self.json("tags", request).await
    }

    pub async fn create_tag(&self, name: &str) -> Result<Tag> {
        let payload = TagPayload {
            name: name.to_string(),
        };
        let request = self.request(Method::POST, "tags")?.json(&payload);
        self.json("tags", request).await
    }

    /// Delete a tag. The backend also removes the notes that depend on it.
    pub async fn delete_tag(&self, id: i64) -> Result<()> {
        let path = format!("tags/{id}");
        let request = self.request(Method::DELETE, &path)?;
        self.send(&path, request).await.map(drop)
    }
}
