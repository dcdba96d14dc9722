//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function that reads the
//! [`GameState`](crate::game::GameState) and draws into a [`Rect`](ratatui::layout::Rect).
//!
//! # Pane Modules
//!
//! - [`board`]: Pegs, bases and disks, including the disk being dragged
//! - [`hud`]: Move counter and the auto/manual banner
//! - [`status`]: Status bar with the last action, keybindings and mode
//! - [`win`]: Overlay shown once the puzzle is solved

pub mod board;
pub mod hud;
pub mod status;
pub mod win;

// Re-export render functions for convenience
pub use board::render_board;
pub use hud::render_hud;
pub use status::render_status_bar;
pub use win::{centered_rect, render_win_overlay};
