//! Detail pane for the selected post.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, DetailState};
use crate::models::Post;

use super::helpers::{inner_rect, spinner};
use super::theme::{
    COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MUTED,
};

pub fn render_post_detail(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = inner_rect(block.inner(area), 1);
    frame.render_widget(block, area);

    let (lines, scroll) = match app.detail_state() {
        DetailState::Disabled => (placeholder("Select an article to begin reading"), 0),
        DetailState::Loading => (
            placeholder(&format!("{} Loading article...", spinner(app.spinner_frame()))),
            0,
        ),
        DetailState::Failed(error) => (
            vec![
                Line::from(Span::styled(
                    "Could not load this article",
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(error.to_string(), Style::default().fg(COLOR_MUTED))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to retry",
                    Style::default().fg(COLOR_DIM),
                )),
            ],
            0,
        ),
        DetailState::Resolved(post) => (article_lines(post), app.detail_scroll),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

fn placeholder(text: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(text.to_string(), Style::default().fg(COLOR_MUTED))),
    ]
}

/// Full article: tag line, title, metadata row, cover and body.
pub fn article_lines(post: &Post) -> Vec<Line<'_>> {
    let read_time = format!("{} min read", post.read_time_minutes());
    let category = post.primary_category().unwrap_or("UNCATEGORIZED");

    let label = Style::default().fg(COLOR_DIM);
    let value = Style::default().fg(COLOR_MUTED);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                category.to_uppercase(),
                Style::default()
                    .fg(COLOR_CATEGORY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" · {}", read_time), label),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            post.title.as_str(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category ", label),
            Span::styled(post.categories_label(), value),
            Span::styled("   Read Time ", label),
            Span::styled(read_time.clone(), value),
            Span::styled("   Date ", label),
            Span::styled(post.formatted_date(), value),
        ]),
    ];

    if !post.cover_image.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Cover ", label),
            Span::styled(
                post.cover_image.as_str(),
                Style::default()
                    .fg(COLOR_DIM)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    if !post.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            post.description.as_str(),
            Style::default()
                .fg(COLOR_MUTED)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::from(""));
    for paragraph in post.content.lines() {
        lines.push(Line::from(Span::styled(
            paragraph,
            Style::default().fg(COLOR_HEADER),
        )));
    }
    lines
}
