//! Puzzle pieces: disks, pegs and the solver
//!
//! - [`disk`] — a ranked disk with its drawn position
//! - [`peg`] — an ordered stack of disks and the legality rule
//! - [`solver`] — the optimal peg-to-peg move plan
//! - [`constants`] — board geometry, palette and timing bounds

pub mod constants;
pub mod disk;
pub mod peg;
pub mod solver;

pub use disk::Disk;
pub use peg::Peg;
pub use solver::{optimal_move_count, solve, Move};
