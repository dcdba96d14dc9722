//! Status bar rendering with keybindings and mode indicator

use crate::game::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, mode: Mode) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", mode_label(mode)),
            Style::default()
                .bg(mode_color(mode))
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
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" a ", key_style),
        Span::styled(" auto ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
    ];
    if mode == Mode::AutoPlaying {
        right_spans.push(Span::styled(" ↑/↓ ", key_style));
        right_spans.push(Span::styled(" speed ", desc_style));
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(" ", desc_style));
    }
    right_spans.extend([
        Span::styled(" r ", key_style),
        Span::styled(" restart ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => "PLAY",
        Mode::Dragging => "DRAG",
        Mode::AutoPlaying => "▶ AUTO",
        Mode::Won => "WON",
    }
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Idle => DEFAULT_THEME.primary,
        Mode::Dragging => DEFAULT_THEME.secondary,
        Mode::AutoPlaying => DEFAULT_THEME.secondary,
        Mode::Won => DEFAULT_THEME.success,
    }
}
