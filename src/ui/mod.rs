//! UI rendering for blogdeck
//!
//! One screen:
//! - Header with brand and "new post" hint
//! - Left pane: post list (about a third of the width)
//! - Right pane: the selected post
//! - Bottom: status bar with notices and keybind hints
//!
//! The create dialog is drawn on top when open.

mod create_dialog;
mod header;
mod helpers;
mod post_detail;
mod post_list;
mod status_bar;
mod theme;

// Re-export theme colors for external use
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

// Re-export helper functions for external use
pub use helpers::{format_relative_time, truncate, SPINNER_FRAMES};

pub use create_dialog::{PENDING_LABEL, SUBMIT_LABEL};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use create_dialog::render_create_dialog;
use header::render_header;
use post_detail::render_post_detail;
use post_list::render_post_list;
use status_bar::render_status_bar;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Panes
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    render_header(frame, rows[0], app);

    let panes = Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(rows[1]);
    render_post_list(frame, panes[0], app);
    render_post_detail(frame, panes[1], app);

    render_status_bar(frame, rows[2], app);

    // Overlay last so it sits on top
    render_create_dialog(frame, app);
}
