//! AppMessage enum for async communication within the application.

use crate::models::{Post, PostId};
use crate::query::FetchTicket;

/// Results delivered by spawned request tasks.
///
/// Errors travel as user-facing strings; the full error is logged where it
/// happens.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The post list request finished
    PostsLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Post>, String>,
    },
    /// A detail request finished
    PostLoaded {
        id: PostId,
        ticket: FetchTicket,
        result: Result<Post, String>,
    },
    /// The create request finished
    PostCreated { result: Result<Post, String> },
}
