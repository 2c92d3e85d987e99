//! Post list pane
//!
//! Each post is a three-line card (category and age, title, summary)
//! followed by a blank spacer. The card under the cursor carries an accent
//! marker; the card shown in the detail pane has an accented title.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Post;
use crate::query::QueryState;

use super::helpers::{format_relative_time, spinner, truncate};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MUTED,
};

/// Lines per card (category + title + summary + spacer)
pub const LINES_PER_CARD: usize = 4;

/// Index of the first card to draw so the cursor stays on screen.
pub fn scroll_offset(cursor: usize, visible_cards: usize) -> usize {
    if visible_cards == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible_cards - 1)
}

pub fn render_post_list(frame: &mut Frame, area: Rect, app: &App) {
    let mut title = vec![Span::styled(
        " Articles ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(posts) = app.queries.posts().data() {
        title.push(Span::styled(
            format!("{} ", posts.len()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    // Background refresh with data already on screen
    if app.queries.posts().is_fetching() && app.queries.posts().data().is_some() {
        title.push(Span::styled(
            format!("{} ", spinner(app.spinner_frame())),
            Style::default().fg(COLOR_ACCENT),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.posts_state() {
        QueryState::Idle | QueryState::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {} Loading posts...", spinner(app.spinner_frame())),
                Style::default().fg(COLOR_MUTED),
            )),
        ],
        QueryState::Failed(error) => vec![
            Line::from(""),
            Line::from(Span::styled(
                " Could not load posts",
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(COLOR_MUTED),
            )),
            Line::from(""),
            Line::from(Span::styled(" Press r to retry", Style::default().fg(COLOR_DIM))),
        ],
        QueryState::Resolved(posts) if posts.is_empty() => vec![
            Line::from(""),
            Line::from(Span::styled(
                " No posts yet. Press n to write one.",
                Style::default().fg(COLOR_MUTED),
            )),
        ],
        QueryState::Resolved(posts) => card_lines(posts, app, inner),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn card_lines<'a>(posts: &'a [Post], app: &App, area: Rect) -> Vec<Line<'a>> {
    let visible_cards = (area.height as usize / LINES_PER_CARD).max(1);
    let offset = scroll_offset(app.cursor, visible_cards);
    let text_width = (area.width as usize).saturating_sub(3);
    let now = Utc::now();

    let mut lines = Vec::with_capacity(visible_cards * LINES_PER_CARD);
    for (idx, post) in posts.iter().enumerate().skip(offset).take(visible_cards) {
        let at_cursor = idx == app.cursor;
        let is_selected = app.selected_id == Some(post.id);

        let marker = if at_cursor {
            Span::styled("▌ ", Style::default().fg(COLOR_ACCENT))
        } else {
            Span::raw("  ")
        };

        let category = post.primary_category().unwrap_or("UNCATEGORIZED");
        let age = format_relative_time(&post.date, now);
        let mut meta = vec![
            marker.clone(),
            Span::styled(
                category.to_uppercase(),
                Style::default()
                    .fg(COLOR_CATEGORY)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !age.is_empty() {
            meta.push(Span::styled(format!(" · {}", age), Style::default().fg(COLOR_DIM)));
        }
        lines.push(Line::from(meta));

        let title_style = if is_selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            marker.clone(),
            Span::styled(truncate(&post.title, text_width), title_style),
        ]));

        lines.push(Line::from(vec![
            marker,
            Span::styled(
                truncate(&post.description, text_width),
                Style::default().fg(COLOR_MUTED),
            ),
        ]));
        lines.push(Line::from(""));
    }
    lines
}
