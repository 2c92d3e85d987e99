//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages for async communication
//! - [`CreateDialog`] - State of the "new post" dialog
//! - [`DetailState`] - What the detail pane should show
//!
//! The impl of [`App`] is split across the submodules: `actions` starts
//! requests, `handlers` applies their results, `navigation` and `keys` turn
//! input into state changes.

mod actions;
mod form;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use form::{CreateDialog, FormField, MutationStatus, PostForm};
pub use messages::AppMessage;
pub use types::{DetailState, Notice, NoticeKind, NOTICE_TTL};

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::api::BlogApi;
use crate::config::AppConfig;
use crate::models::{Post, PostId};
use crate::query::{QueryCache, QueryState};

/// Main application state
pub struct App {
    /// Client for the blog API
    pub api: BlogApi,
    /// Cached list and detail queries
    pub queries: QueryCache,
    /// Post shown in the detail pane
    pub selected_id: Option<PostId>,
    /// Highlighted row in the post list
    pub cursor: usize,
    /// Vertical scroll of the detail pane, in lines
    pub detail_scroll: u16,
    /// "New post" dialog
    pub dialog: CreateDialog,
    /// Transient status-bar message
    pub notice: Option<Notice>,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set whenever state changed and the next frame must be drawn
    pub needs_redraw: bool,
    /// Frame counter for spinner animation
    pub tick_count: u64,
    /// Receiver for async request results (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to spawned request tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the application around an API client.
    ///
    /// Nothing is fetched until [`App::sync_queries`] runs.
    pub fn new(api: BlogApi) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            api,
            queries: QueryCache::new(),
            selected_id: None,
            cursor: 0,
            detail_scroll: 0,
            dialog: CreateDialog::default(),
            notice: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Create the application with a reqwest client built from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        let api = BlogApi::with_http_client(config.base_url.clone(), Arc::new(http));
        Ok(Self::new(api))
    }

    /// State of the post list query.
    pub fn posts_state(&self) -> QueryState<'_, Vec<Post>> {
        self.queries.posts().state()
    }

    /// Posts currently on screen; empty until the first load succeeds.
    pub fn visible_posts(&self) -> &[Post] {
        self.queries
            .posts()
            .data()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Post under the list cursor.
    pub fn cursor_post(&self) -> Option<&Post> {
        self.visible_posts().get(self.cursor)
    }

    /// Detail state for the current selection.
    ///
    /// Only the slot of `selected_id` is ever read, so responses for
    /// earlier selections stay in their own slots.
    pub fn detail_state(&self) -> DetailState<'_> {
        let Some(id) = self.selected_id else {
            return DetailState::Disabled;
        };
        match self.queries.detail(id).map(|query| query.state()) {
            Some(QueryState::Resolved(post)) => DetailState::Resolved(post),
            Some(QueryState::Failed(error)) => DetailState::Failed(error),
            // Selected but not yet synced counts as loading
            Some(QueryState::Loading) | Some(QueryState::Idle) | None => DetailState::Loading,
        }
    }
}
