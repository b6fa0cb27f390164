//! Status bar rendering with keybindings and state indicators

use crate::replay::{Paint, WalkOutcome};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub path_len: usize,
    pub threshold: usize,
    pub color: Paint,
    pub outcome: WalkOutcome,
    pub drawing: bool,
    pub undo_depth: usize,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: length against threshold, then the message
    let len_bg = match data.color {
        Paint::OverThreshold => DEFAULT_THEME.secondary,
        _ => DEFAULT_THEME.primary,
    };
    let message_fg = if data.outcome.error_at().is_some() {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.fg
    };

    let left_spans = vec![
        Span::styled(
            format!(" Len {}/{} ", data.path_len, data.threshold),
            Style::default()
                .bg(len_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(DEFAULT_THEME.status_bg).fg(message_fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds, undo depth and the drawing state
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" hjkl ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" draw ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" freeze ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" u ", key_style),
        Span::styled(format!(" undo ({}) ", data.undo_depth), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⌫ ", key_style),
        Span::styled(" erase ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("^C", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
    ];

    let (label, bg) = if data.drawing {
        (" ✎ DRAWING ", DEFAULT_THEME.success)
    } else {
        (" FROZEN ", DEFAULT_THEME.secondary)
    };
    right_spans.push(Span::styled(
        label,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
