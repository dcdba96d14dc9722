//! Game orchestration
//!
//! [`GameState`] turns pointer, keyboard and timer input into moves on the
//! [`puzzle`](crate::puzzle) pieces and tracks moves, wins and auto play.
//! Action results are reported through the types in [`outcome`].

pub mod outcome;
pub mod state;

pub use outcome::{AutoStep, AutoToggle, DropOutcome};
pub use state::{GameState, HeldDisk, Mode};
