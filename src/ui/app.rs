//! Main TUI application state and frame loop

use crate::config::Config;
use crate::game::{DropOutcome, GameState, Mode};
use crate::puzzle::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

use super::panes;
use super::theme::DEFAULT_THEME;

/// The main application state
pub struct App {
    /// The game being played
    pub game: GameState,

    /// Frame rate and initial playback speed
    pub config: Config,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Outcome of the last action, shown in the status bar
    pub status_message: String,

    /// Where the board was last drawn (None until the first frame).
    /// Pointer events are translated into board coordinates through this.
    pub board_area: Option<Rect>,
}

impl App {
    /// Create a new app with a fresh game
    pub fn new(config: Config) -> Self {
        let mut game = GameState::new();
        game.set_auto_interval_ms(config.auto_interval_ms);
        App {
            game,
            config,
            should_quit: false,
            status_message: String::from("Ready!"),
            board_area: None,
        }
    }

    /// Run the TUI application until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let period = self.config.frame_period();
        terminal.draw(|f| self.draw(f))?;

        while !self.should_quit {
            let deadline = Instant::now() + period;

            // Handle everything that arrives within this frame, in order
            loop {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if !event::poll(remaining)? {
                    break;
                }
                self.handle_event(event::read()?);
                if self.should_quit {
                    return Ok(());
                }
            }

            self.tick(Instant::now());
            terminal.draw(|f| self.draw(f))?;
        }

        Ok(())
    }

    /// Advance the auto-solve timer
    pub fn tick(&mut self, now: Instant) {
        let Some(step) = self.game.update(now) else {
            return;
        };
        self.status_message = step.to_string();
        if step.finished {
            self.status_message = if self.game.is_won() {
                format!("Solved automatically in {} moves", self.game.move_count())
            } else {
                "Auto solve finished".to_string()
            };
        }
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // HUD on top, board in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_hud(frame, chunks[0], &self.game);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let board_area = panes::centered_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
        self.board_area = Some(board_area);
        panes::render_board(frame, board_area, &self.game);

        if self.game.is_won() {
            panes::render_win_overlay(frame, board_area, self.game.move_count());
        }

        panes::render_status_bar(frame, chunks[2], &self.status_message, self.game.mode());
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game.reset();
                self.status_message = "Game reset".to_string();
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let toggle = self.game.toggle_auto(Instant::now());
                self.status_message = toggle.to_string();
            }
            KeyCode::Up => {
                if self.game.speed_up() {
                    self.report_speed();
                } else if self.game.is_auto() {
                    self.status_message = "Already at the fastest speed".to_string();
                }
            }
            KeyCode::Down => {
                if self.game.slow_down() {
                    self.report_speed();
                } else if self.game.is_auto() {
                    self.status_message = "Already at the slowest speed".to_string();
                }
            }
            _ => {}
        }
    }

    /// Handle mouse events: press picks up, drag follows, release drops
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some((x, y)) = self.to_board(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.game.pointer_down(x, y) {
                    if let Some(held) = self.game.held() {
                        self.status_message = format!(
                            "Holding disk {} from peg {}",
                            held.disk.rank(),
                            held.origin + 1
                        );
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.game.pointer_moved(x, y);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.game.pointer_up(x, y);
                if outcome != DropOutcome::Ignored {
                    self.status_message = outcome.to_string();
                }
                if outcome.is_move() && self.game.mode() == Mode::Won {
                    self.status_message =
                        format!("Solved in {} moves!", self.game.move_count());
                }
            }
            _ => {}
        }
    }

    /// Screen cell to board coordinates. Points outside the board are still
    /// translated so a disk can be dragged past the edge and dropped.
    fn to_board(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.board_area?;
        Some((
            i32::from(column) - i32::from(area.x),
            i32::from(row) - i32::from(area.y),
        ))
    }

    fn report_speed(&mut self) {
        self.status_message = format!(
            "Speed: {}ms between moves",
            self.game.auto_interval_ms()
        );
    }
}
