//! Navigation methods for the App.

use super::{App, DetailState, MutationStatus};
use crate::models::PostId;
use crate::query::QueryKey;

/// Lines moved per detail page scroll.
const DETAIL_PAGE: u16 = 10;

impl App {
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible_posts().len() {
            self.cursor += 1;
            self.mark_dirty();
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.mark_dirty();
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
        self.mark_dirty();
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.visible_posts().len().saturating_sub(1);
        self.mark_dirty();
    }

    /// Select the post under the cursor.
    pub fn select_cursor(&mut self) {
        if let Some(id) = self.cursor_post().map(|post| post.id) {
            self.select_post(id);
        }
    }

    /// Show `id` in the detail pane.
    ///
    /// A cached detail is shown as-is; a failed one is invalidated so the
    /// next sync retries it.
    pub fn select_post(&mut self, id: PostId) {
        tracing::debug!(%id, "post selected");
        self.selected_id = Some(id);
        self.detail_scroll = 0;
        if matches!(self.detail_state(), DetailState::Failed(_)) {
            self.queries.invalidate(QueryKey::Post(id));
        }
        self.mark_dirty();
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(DETAIL_PAGE);
        self.mark_dirty();
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(DETAIL_PAGE);
        self.mark_dirty();
    }

    /// Mark the post list stale so the next sync re-fetches it.
    pub fn refresh_posts(&mut self) {
        tracing::debug!("post list refresh requested");
        self.queries.invalidate(QueryKey::Posts);
        self.mark_dirty();
    }

    /// Open the "new post" dialog. A draft left by a closed dialog is kept.
    pub fn open_dialog(&mut self) {
        if self.dialog.open {
            return;
        }
        self.dialog.open = true;
        self.dialog.status = MutationStatus::Idle;
        self.dialog.validation_error = None;
        self.mark_dirty();
    }

    /// Close the dialog. Returns `false` while a submission is pending.
    pub fn close_dialog(&mut self) -> bool {
        if self.dialog.is_pending() {
            return false;
        }
        self.dialog.open = false;
        self.dialog.validation_error = None;
        self.mark_dirty();
        true
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
