//! Heads-up display: move counter and mode banner

use crate::game::GameState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the HUD above the board
pub fn render_hud(frame: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default()
        .title(" Towers of Hanoi ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let counter = Line::from(vec![
        Span::styled("Moves: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            game.move_count().to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Best possible: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            game.optimal_moves().to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]);

    let banner = if game.is_auto() {
        let (played, total) = game.auto_progress();
        Line::from(vec![
            Span::styled(
                "AUTO SOLVE ACTIVE",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   Speed: {}ms (↑/↓ to change)   Step {}/{}",
                    game.auto_interval_ms(),
                    played,
                    total
                ),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ])
    } else if game.is_won() {
        Line::from(Span::styled(
            "Solved!",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Drag disks with the mouse. Press a to auto-solve, r to restart.",
            Style::default().fg(DEFAULT_THEME.fg),
        ))
    };

    frame.render_widget(Paragraph::new(vec![counter, banner]).block(block), area);
}
