//! # Introduction
//!
//! hanoitty is the Towers of Hanoi in a terminal. Disks are dragged between
//! three pegs with the mouse, under the usual rule that a larger disk may
//! never rest on a smaller one, or an automatic solver plays the optimal
//! solution on a timer. The UI is built with [ratatui](https://docs.rs/ratatui)
//! on top of crossterm.
//!
//! ## Data flow
//!
//! ```text
//! Input events → GameState → Pegs / Disks → Panes → Terminal
//!                    ▲
//!          Solver plan on a timer
//! ```
//!
//! 1. [`puzzle`] — the pieces: [`puzzle::Disk`], [`puzzle::Peg`] with the
//!    legality rule, and [`puzzle::solve`], the recursive optimal plan.
//! 2. [`game`] — [`game::GameState`], the interaction state machine (idle,
//!    dragging, auto playing, won), move counting and win detection.
//! 3. [`config`] — command-line flags.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod game;
pub mod puzzle;
pub mod ui;
