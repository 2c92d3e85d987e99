//! Blog API client.
//!
//! Wraps the three REST operations the UI needs. Every call is one-shot:
//! no retries, no backoff, no deduplication of concurrent calls. Status is
//! checked on every path, so a non-2xx response is always an error rather
//! than a body that fails to parse further down.

use std::fmt;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{BlogError, BlogResult, NetworkError};
use crate::models::{NewPost, Post, PostId};
use crate::traits::{Clock, Headers, HttpClient, Response, SystemClock};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Collection path on the server.
const POSTS_PATH: &str = "/blogs";

/// Client for the blog REST API.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct BlogApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
}

impl BlogApi {
    /// Create a client for `base_url` backed by reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] implementation.
    pub fn with_http_client(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to stamp new posts.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn posts_url(&self) -> String {
        format!("{}{}", self.base_url, POSTS_PATH)
    }

    pub fn post_url(&self, id: PostId) -> String {
        format!("{}{}/{}", self.base_url, POSTS_PATH, id)
    }

    /// Fetch every post.
    ///
    /// `GET /blogs`
    pub async fn list_posts(&self) -> BlogResult<Vec<Post>> {
        let url = self.posts_url();
        tracing::debug!(%url, "listing posts");

        let response = self.send_get(&url).await?;
        let response = ensure_success(response, &url)?;
        let posts: Vec<Post> = decode(&response, &url)?;

        tracing::debug!(count = posts.len(), "posts loaded");
        Ok(posts)
    }

    /// Fetch one post by id.
    ///
    /// `GET /blogs/{id}`. A 404 becomes [`BlogError::NotFound`].
    pub async fn get_post(&self, id: PostId) -> BlogResult<Post> {
        let url = self.post_url(id);
        tracing::debug!(%url, "fetching post");

        let response = self.send_get(&url).await?;
        if response.status == 404 {
            tracing::warn!(%id, "post not found");
            return Err(BlogError::NotFound { id });
        }
        let response = ensure_success(response, &url)?;
        decode(&response, &url)
    }

    /// Create a post from the form's partial record.
    ///
    /// `POST /blogs`. Unset category defaults to `["FINANCE"]`; `date` is
    /// stamped with the current time and `coverImage` with the default URL.
    /// Returns the record the server created, including its assigned id.
    pub async fn create_post(&self, new_post: NewPost) -> BlogResult<Post> {
        let url = self.posts_url();
        let payload = new_post.into_payload(self.clock.now());
        let body = serde_json::to_string(&payload)?;
        tracing::debug!(%url, title = %payload.title, "creating post");

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = self
            .http
            .post(&url, &body, &headers)
            .await
            .map_err(|e| log_failure(NetworkError::from_http(e, &url)))?;
        let response = ensure_success(response, &url)?;
        let created: Post = decode(&response, &url)?;

        tracing::info!(id = %created.id, "post created");
        Ok(created)
    }

    async fn send_get(&self, url: &str) -> Result<Response, NetworkError> {
        self.http
            .get(url, &Headers::new())
            .await
            .map_err(|e| log_failure(NetworkError::from_http(e, url)))
    }
}

impl fmt::Debug for BlogApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Default for BlogApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn log_failure(err: NetworkError) -> NetworkError {
    tracing::warn!(code = err.error_code(), "{}", err);
    err
}

fn ensure_success(response: Response, url: &str) -> Result<Response, NetworkError> {
    if response.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    tracing::warn!(%url, status = response.status, "request failed");
    Err(NetworkError::status(response.status, &body))
}

fn decode<T: serde::de::DeserializeOwned>(response: &Response, url: &str) -> BlogResult<T> {
    response.json().map_err(|e| {
        let err = NetworkError::InvalidResponse {
            message: e.to_string(),
        };
        tracing::warn!(%url, code = err.error_code(), "{}", err);
        BlogError::Network(err)
    })
}
