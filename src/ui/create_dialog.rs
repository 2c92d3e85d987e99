//! "New post" dialog rendering
//!
//! A centered overlay with the three form fields, an inline error line and
//! the submit label. The label reads "Posting..." while the request is in
//! flight.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, CreateDialog, FormField};

use super::helpers::{centered_rect, spinner, tail_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER,
};

const DIALOG_WIDTH: u16 = 72;
const DIALOG_HEIGHT: u16 = 24;

pub const SUBMIT_LABEL: &str = "Publish Post";
pub const PENDING_LABEL: &str = "Posting...";

/// Render the create dialog as a centered overlay
pub fn render_create_dialog(frame: &mut Frame, app: &App) {
    let dialog = &app.dialog;
    if !dialog.open {
        return;
    }

    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    // Clear the background behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " New Post ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let rows = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(3), // Summary
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Error
        Constraint::Length(1), // Submit + hints
    ])
    .horizontal_margin(1)
    .split(inner);

    render_field(frame, rows[0], dialog, FormField::Title);
    render_field(frame, rows[1], dialog, FormField::Description);
    render_field(frame, rows[2], dialog, FormField::Content);

    if let Some(message) = dialog.error_message() {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(COLOR_ERROR))),
            rows[3],
        );
    }

    frame.render_widget(
        Paragraph::new(submit_line(dialog, app.spinner_frame())),
        rows[4],
    );
}

fn render_field(frame: &mut Frame, area: Rect, dialog: &CreateDialog, field: FormField) {
    let focused = dialog.form.focus == field && !dialog.is_pending();
    let (border, label) = if focused {
        (
            COLOR_BORDER_FOCUS,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (COLOR_BORDER, Style::default().fg(COLOR_DIM))
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = dialog.form.value(field);
    let caret = if focused { "▏" } else { "" };
    let width = (inner.width as usize).saturating_sub(1);

    let lines: Vec<Line> = if field.is_multiline() {
        // Show the last lines so the caret stays visible
        let height = inner.height as usize;
        let all: Vec<&str> = value.split('\n').collect();
        let start = all.len().saturating_sub(height);
        let last = all.len() - 1;
        all[start..]
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let text = tail_to_width(line, width);
                if start + i == last {
                    Line::from(vec![Span::raw(text), Span::raw(caret)])
                } else {
                    Line::from(text)
                }
            })
            .collect()
    } else {
        vec![Line::from(vec![
            Span::raw(tail_to_width(value, width)),
            Span::raw(caret),
        ])]
    };

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(COLOR_HEADER)),
        inner,
    );
}

fn submit_line(dialog: &CreateDialog, spinner_frame: usize) -> Line<'static> {
    let button = if dialog.is_pending() {
        Span::styled(
            format!("[ {} {} ]", spinner(spinner_frame), PENDING_LABEL),
            Style::default().fg(COLOR_DIM),
        )
    } else {
        Span::styled(
            format!("[ {} ]", SUBMIT_LABEL),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };

    Line::from(vec![
        button,
        Span::styled(
            "  ctrl+s publish · tab next field · esc cancel",
            Style::default().fg(COLOR_DIM),
        ),
    ])
}
