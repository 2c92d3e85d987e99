//! Common test utilities for integration tests.
//!
//! Fixtures for posts, apps wired to a mock HTTP client, helpers that pump
//! the app's message channel, and a `TestBackend` renderer.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use blogdeck::adapters::mock::{MockHttpClient, MockResponse};
use blogdeck::api::BlogApi;
use blogdeck::app::{App, AppMessage};
use blogdeck::models::{Post, PostId};
use blogdeck::traits::Response;
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

/// Base URL used with [`MockHttpClient`].
pub const MOCK_BASE: &str = "http://mock";

/// How long to wait for a spawned request before failing the test.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// A post as the server would send it.
pub fn post_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("About {}", title),
        "category": ["TECH", "FINANCE"],
        "date": "2026-10-13T09:30:00.000Z",
        "coverImage": "https://example.com/cover.jpg",
        "content": format!("{} body text.", title),
    })
}

pub fn sample_post(id: u64, title: &str) -> Post {
    serde_json::from_value(post_json(id, title)).unwrap()
}

/// Mock client answering `GET /blogs` with `posts` and each
/// `GET /blogs/{id}` with the matching post.
pub fn mock_with_posts(posts: &[serde_json::Value]) -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_response(
        "GET",
        &format!("{}/blogs", MOCK_BASE),
        MockResponse::Success(Response::json_body(200, &serde_json::Value::from(posts.to_vec()))),
    );
    for post in posts {
        let id = post["id"].as_u64().unwrap();
        mock.set_response(
            "GET",
            &format!("{}/blogs/{}", MOCK_BASE, id),
            MockResponse::Success(Response::json_body(200, post)),
        );
    }
    mock
}

/// App over a mock client, with its receiver taken out for the test.
pub fn mock_app(mock: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>) {
    let api = BlogApi::with_http_client(MOCK_BASE, Arc::new(mock.clone()));
    app_with_api(api)
}

/// App over a real reqwest client pointed at `base_url`.
pub fn http_app(base_url: &str) -> (App, UnboundedReceiver<AppMessage>) {
    app_with_api(BlogApi::new(base_url))
}

fn app_with_api(api: BlogApi) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(api);
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

/// Wait for the next message from a spawned request.
pub async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(MESSAGE_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for a request to finish")
        .expect("message channel closed")
}

/// Receive and apply `count` messages.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for _ in 0..count {
        let msg = next_message(rx).await;
        app.handle_message(msg);
    }
}

/// Sync once and apply the single message the sync produced.
pub async fn sync_and_pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    app.sync_queries();
    pump(app, rx, 1).await;
}

/// Render the app into a `width` x `height` buffer and return its text.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| blogdeck::ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn id(n: u64) -> PostId {
    PostId(n)
}
