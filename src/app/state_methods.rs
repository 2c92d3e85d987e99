//! State accessor and utility methods for the App.

use tokio::sync::mpsc;

use super::{App, AppMessage, Notice};

/// Ticks between spinner frames while something is loading (~100ms at 60fps).
const SPINNER_TICKS: u64 = 6;

impl App {
    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Request a redraw on the next loop iteration
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Show a notice in the status bar, replacing any current one
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    /// Whether a request is in flight anywhere in the app
    pub fn is_busy(&self) -> bool {
        self.queries.is_fetching() || self.dialog.is_pending()
    }

    /// Increment the tick counter for animations and expire old notices
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
            self.mark_dirty();
        }

        if self.is_busy() && self.tick_count % SPINNER_TICKS == 0 {
            self.mark_dirty();
        }
    }

    /// Current spinner frame index
    pub fn spinner_frame(&self) -> usize {
        (self.tick_count / SPINNER_TICKS) as usize
    }
}
