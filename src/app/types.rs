//! Type definitions for the application state.
//!
//! - [`DetailState`] - What the detail pane should show
//! - [`Notice`] - Transient status-bar message

use std::time::{Duration, Instant};

use crate::models::Post;

/// How long a notice stays in the status bar.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Detail query state as seen by the view.
///
/// `Disabled` means no post is selected, so no request is made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailState<'a> {
    Disabled,
    Loading,
    Resolved(&'a Post),
    Failed(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message shown in the status bar until it expires.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    created_at: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
            created_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTICE_TTL
    }
}
