//! Win overlay drawn over the centre of the board

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 34;
const OVERLAY_HEIGHT: u16 = 4;

/// Render the win banner centred in `area`
pub fn render_win_overlay(frame: &mut Frame, area: Rect, move_count: u32) {
    let overlay = centered_rect(area, OVERLAY_WIDTH, OVERLAY_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.success));

    let lines = vec![
        Line::styled(
            format!("You won! Moves: {}", move_count),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Press r to restart",
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ];

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        overlay,
    );
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
