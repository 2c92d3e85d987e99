//! Bottom bar: notices, background errors, or key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, NoticeKind};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("enter", "read"),
    ("n", "new post"),
    ("r", "refresh"),
    ("pgup/pgdn", "scroll"),
    ("q", "quit"),
];

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Success => COLOR_SUCCESS,
            NoticeKind::Error => COLOR_ERROR,
        };
        Line::from(Span::styled(format!(" {}", notice.text), Style::default().fg(color)))
    } else if let (Some(error), Some(_)) =
        (app.queries.posts().error(), app.queries.posts().data())
    {
        // A refresh failed but the earlier list is still on screen
        Line::from(Span::styled(
            format!(" Refresh failed: {}", error),
            Style::default().fg(COLOR_ERROR),
        ))
    } else {
        hints_line()
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn hints_line() -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in BROWSE_HINTS {
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
