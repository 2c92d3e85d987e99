//! Top bar: brand on the left, server and "new post" hint on the right.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let brand = Line::from(vec![
        Span::styled(
            " blogdeck",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  articles & insights", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(brand), area);

    let hint = Line::from(vec![
        Span::styled(app.api.base_url(), Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(
            "n",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" New Post ", Style::default().fg(COLOR_HEADER)),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), area);
}
