//! View-layer state transitions: list loading, selection-gated detail,
//! out-of-order responses and the create flow.

mod common;

use std::time::Duration;

use blogdeck::adapters::mock::{MockHttpClient, MockResponse};
use blogdeck::app::{AppMessage, DetailState, FormField, MutationStatus};
use blogdeck::query::QueryState;
use blogdeck::traits::{HttpError, Response};
use bytes::Bytes;
use common::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fill_form(app: &mut blogdeck::app::App, title: &str, description: &str, content: &str) {
    app.open_dialog();
    let form = &mut app.dialog.form;
    form.focus = FormField::Title;
    form.insert_str(title);
    form.focus = FormField::Description;
    form.insert_str(description);
    form.focus = FormField::Content;
    form.insert_str(content);
}

#[tokio::test]
async fn test_list_goes_idle_loading_resolved() {
    let mock = mock_with_posts(&[post_json(1, "One")]);
    let (mut app, mut rx) = mock_app(&mock);

    assert_eq!(app.posts_state(), QueryState::Idle);
    app.sync_queries();
    assert!(app.posts_state().is_loading());

    pump(&mut app, &mut rx, 1).await;
    let posts = app.posts_state().data().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "One");
}

#[tokio::test]
async fn test_list_failure_then_manual_refresh() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
        "refused".to_string(),
    )));
    let (mut app, mut rx) = mock_app(&mock);

    sync_and_pump(&mut app, &mut rx).await;
    assert!(matches!(app.posts_state(), QueryState::Failed(_)));

    // A failed list waits for an explicit refresh
    app.sync_queries();
    assert!(!app.queries.posts().is_fetching());

    mock.set_response(
        "GET",
        "http://mock/blogs",
        MockResponse::Success(Response::json_body(200, &serde_json::json!([post_json(1, "One")]))),
    );
    app.refresh_posts();
    sync_and_pump(&mut app, &mut rx).await;
    assert_eq!(app.visible_posts().len(), 1);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_list() {
    let mock = mock_with_posts(&[post_json(1, "One")]);
    let (mut app, mut rx) = mock_app(&mock);
    sync_and_pump(&mut app, &mut rx).await;

    mock.set_response(
        "GET",
        "http://mock/blogs",
        MockResponse::Success(Response::new(500, Bytes::from("down"))),
    );
    app.refresh_posts();
    app.sync_queries();
    // Stale data stays visible while the refresh runs
    assert_eq!(app.visible_posts().len(), 1);

    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.visible_posts().len(), 1);
    assert!(app.queries.posts().error().is_some());
}

#[tokio::test]
async fn test_detail_disabled_until_selection() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([post_json(1, "One")])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blogs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(1, "One")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = http_app(&mock_server.uri());
    sync_and_pump(&mut app, &mut rx).await;
    assert_eq!(app.detail_state(), DetailState::Disabled);

    app.select_cursor();
    assert_eq!(app.detail_state(), DetailState::Loading);
    sync_and_pump(&mut app, &mut rx).await;

    match app.detail_state() {
        DetailState::Resolved(post) => assert_eq!(post.title, "One"),
        other => panic!("expected resolved detail, got {:?}", other),
    }

    // Re-selecting a resolved post reuses the cache
    app.select_post(id(1));
    app.sync_queries();
    assert!(!app.queries.is_fetching());
}

#[tokio::test]
async fn test_later_selection_wins_when_responses_arrive_out_of_order() {
    let mock = mock_with_posts(&[post_json(1, "A"), post_json(2, "B")]);
    let (mut app, mut rx) = mock_app(&mock);
    sync_and_pump(&mut app, &mut rx).await;

    app.select_post(id(1));
    app.sync_queries();
    app.select_post(id(2));
    app.sync_queries();

    let mut messages = vec![next_message(&mut rx).await, next_message(&mut rx).await];
    // Deliver B's response first and A's last
    messages.sort_by_key(|msg| match msg {
        AppMessage::PostLoaded { id, .. } => std::cmp::Reverse(id.0),
        _ => std::cmp::Reverse(0),
    });

    app.handle_message(messages.remove(0));
    match app.detail_state() {
        DetailState::Resolved(post) => assert_eq!(post.title, "B"),
        other => panic!("expected B, got {:?}", other),
    }

    app.handle_message(messages.remove(0));
    match app.detail_state() {
        DetailState::Resolved(post) => assert_eq!(post.title, "B"),
        other => panic!("expected B to stay, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_first_selection_does_not_overwrite_second() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blogs/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(post_json(1, "A"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blogs/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(2, "B")))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = http_app(&mock_server.uri());
    // Keep the list out of the way so only detail messages arrive
    let ticket = app.queries.posts_mut().begin_fetch();
    app.queries.posts_mut().resolve(ticket, Ok(Vec::new()));

    app.select_post(id(1));
    app.sync_queries();
    app.select_post(id(2));
    app.sync_queries();
    pump(&mut app, &mut rx, 2).await;

    match app.detail_state() {
        DetailState::Resolved(post) => assert_eq!(post.title, "B"),
        other => panic!("expected B, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_detail_is_retried_on_reselect() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "GET",
        "http://mock/blogs",
        MockResponse::Success(Response::json_body(200, &serde_json::json!([]))),
    );
    mock.set_response(
        "GET",
        "http://mock/blogs/5",
        MockResponse::Success(Response::new(404, Bytes::new())),
    );
    let (mut app, mut rx) = mock_app(&mock);
    sync_and_pump(&mut app, &mut rx).await;

    app.select_post(id(5));
    sync_and_pump(&mut app, &mut rx).await;
    assert!(matches!(app.detail_state(), DetailState::Failed(_)));

    app.select_post(id(5));
    app.sync_queries();
    assert!(app.queries.is_fetching());
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(mock.requests_to("GET", "http://mock/blogs/5").len(), 2);
}

#[tokio::test]
async fn test_create_success_closes_dialog_and_invalidates_list() {
    let mock = mock_with_posts(&[post_json(1, "One")]);
    mock.set_response(
        "POST",
        "http://mock/blogs",
        MockResponse::Success(Response::json_body(201, &post_json(2, "T"))),
    );
    let (mut app, mut rx) = mock_app(&mock);
    sync_and_pump(&mut app, &mut rx).await;

    fill_form(&mut app, "T", "D", "C");
    app.submit_form();
    assert!(app.dialog.is_pending());

    pump(&mut app, &mut rx, 1).await;
    assert!(!app.dialog.open);
    assert_eq!(app.dialog.status, MutationStatus::Success);
    assert!(app.dialog.form.title.is_empty());
    assert_eq!(app.notice.as_ref().unwrap().text, "Post published");
    assert!(app.queries.posts().is_stale());

    // The next sync re-fetches the list
    mock.clear_requests();
    sync_and_pump(&mut app, &mut rx).await;
    assert_eq!(mock.requests_to("GET", "http://mock/blogs").len(), 1);
    assert!(!app.queries.posts().is_stale());
}

#[tokio::test]
async fn test_create_failure_keeps_dialog_open() {
    let mock = mock_with_posts(&[post_json(1, "One")]);
    mock.set_response(
        "POST",
        "http://mock/blogs",
        MockResponse::Success(Response::new(500, Bytes::from("boom"))),
    );
    let (mut app, mut rx) = mock_app(&mock);
    sync_and_pump(&mut app, &mut rx).await;

    fill_form(&mut app, "T", "D", "C");
    app.submit_form();
    pump(&mut app, &mut rx, 1).await;

    assert!(app.dialog.open);
    assert!(!app.dialog.is_pending());
    assert!(matches!(app.dialog.status, MutationStatus::Error(_)));
    assert!(app.dialog.error_message().is_some());
    assert_eq!(app.dialog.form.title, "T");
    assert!(!app.queries.posts().is_stale());
    assert!(app.notice.is_none());
}

#[tokio::test]
async fn test_double_submit_sends_once() {
    let mock = mock_with_posts(&[]);
    mock.set_response(
        "POST",
        "http://mock/blogs",
        MockResponse::Success(Response::json_body(201, &post_json(1, "T"))),
    );
    let (mut app, mut rx) = mock_app(&mock);
    sync_and_pump(&mut app, &mut rx).await;

    fill_form(&mut app, "T", "D", "C");
    app.submit_form();
    app.submit_form();
    assert!(!app.close_dialog());

    pump(&mut app, &mut rx, 1).await;
    assert_eq!(mock.requests_to("POST", "http://mock/blogs").len(), 1);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let mock = mock_with_posts(&[]);
    let (mut app, _rx) = mock_app(&mock);

    fill_form(&mut app, "T", "   ", "C");
    app.submit_form();

    assert_eq!(
        app.dialog.validation_error.as_deref(),
        Some("Summary is required")
    );
    assert!(!app.dialog.is_pending());
    assert!(mock.requests_to("POST", "http://mock/blogs").is_empty());
}
