//! Message handlers for the App.

use super::{App, AppMessage, CreateDialog, MutationStatus, Notice};
use crate::query::QueryKey;

/// Status-bar text after a successful create.
pub const PUBLISHED_NOTICE: &str = "Post published";

impl App {
    /// Handle a message received from the async message channel
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();

        match msg {
            AppMessage::PostsLoaded { ticket, result } => {
                if !self.queries.posts_mut().resolve(ticket, result) {
                    tracing::debug!("dropping superseded post list response");
                    return;
                }
                self.clamp_cursor();
            }
            AppMessage::PostLoaded { id, ticket, result } => {
                if !self.queries.detail_mut(id).resolve(ticket, result) {
                    tracing::debug!(%id, "dropping superseded post response");
                }
            }
            AppMessage::PostCreated { result } => match result {
                Ok(post) => {
                    tracing::info!(id = %post.id, title = %post.title, "post published");
                    self.queries.invalidate(QueryKey::Posts);
                    self.dialog = CreateDialog {
                        status: MutationStatus::Success,
                        ..CreateDialog::default()
                    };
                    self.show_notice(Notice::success(PUBLISHED_NOTICE));
                }
                Err(message) => {
                    tracing::warn!(%message, "publishing failed");
                    self.dialog.status = MutationStatus::Error(message);
                }
            },
        }
    }

    /// Keep the list cursor inside the current list.
    pub(super) fn clamp_cursor(&mut self) {
        let len = self.visible_posts().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
