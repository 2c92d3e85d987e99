//! Local fixture server for the blog API.
//!
//! Serves the same REST contract the client talks to, from an in-memory
//! store seeded by a json-server style `db.json`:
//!
//! | Route | Result |
//! |-------|--------|
//! | `GET /blogs` | all posts |
//! | `GET /blogs/:id` | one post, 404 when absent |
//! | `POST /blogs` | 201 with the stored post, id = max + 1 |

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::error::BlogResult;
use crate::models::{Post, PostId};

/// Shape of a json-server database file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Database { blogs: Vec<Post> },
    Bare(Vec<Post>),
}

/// Body accepted by `POST /blogs`. Any `id` sent by the client is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Vec<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    cover_image: String,
    #[serde(default)]
    content: String,
}

/// Posts shared between request handlers.
#[derive(Debug, Clone, Default)]
pub struct Store {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl Store {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    /// Seed from a `db.json` holding `{"blogs": [...]}` or a bare array.
    pub fn load(path: &Path) -> BlogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let posts = match serde_json::from_str(&raw)? {
            SeedFile::Database { blogs } => blogs,
            SeedFile::Bare(posts) => posts,
        };
        tracing::info!(path = %path.display(), count = posts.len(), "seeded store");
        Ok(Self::new(posts))
    }

    /// Copy of every stored post.
    pub async fn snapshot(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }
}

/// Router serving the blog routes over `store`.
pub fn router(store: Store) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/blogs", get(list_posts).post(create_post))
        .route("/blogs/:id", get(get_post))
        .layer(cors)
        .with_state(store)
}

/// Serve on an already bound listener until the future is dropped.
pub async fn run(listener: TcpListener, store: Store) -> std::io::Result<()> {
    axum::serve(listener, router(store)).await
}

/// Serve on `127.0.0.1:port` until Ctrl+C.
pub async fn serve(port: u16, store: Store) -> color_eyre::Result<()> {
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    tracing::info!("blog API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}

/// Start the server on `addr` in a background task.
///
/// Bind to port 0 to get a free port; the bound address is returned.
pub async fn spawn(addr: SocketAddr, store: Store) -> color_eyre::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::debug!(%local_addr, "fixture server started");

    let handle = tokio::spawn(async move {
        if let Err(e) = run(listener, store).await {
            tracing::error!("fixture server error: {}", e);
        }
    });

    Ok((local_addr, handle))
}

async fn list_posts(State(store): State<Store>) -> Json<Vec<Post>> {
    Json(store.snapshot().await)
}

async fn get_post(
    State(store): State<Store>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Post>, StatusCode> {
    // Non-numeric ids can never match, same as an unknown id
    let id: PostId = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let posts = store.posts.read().await;
    posts
        .iter()
        .find(|post| post.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_post(
    State(store): State<Store>,
    Json(input): Json<CreateRequest>,
) -> (StatusCode, Json<Post>) {
    let mut posts = store.posts.write().await;
    let next_id = posts.iter().map(|post| post.id.0).max().unwrap_or(0) + 1;

    let post = Post {
        id: PostId(next_id),
        title: input.title,
        description: input.description,
        category: input.category,
        date: input
            .date
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        cover_image: input.cover_image,
        content: input.content,
    };
    posts.push(post.clone());
    tracing::info!(id = %post.id, title = %post.title, "post stored");

    (StatusCode::CREATED, Json(post))
}
