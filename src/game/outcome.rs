//! Results of player and timer actions
//!
//! None of these are errors: an illegal drop or a refused toggle is a normal
//! outcome that the UI reports in its status line. The [`fmt::Display`]
//! impls produce that text, with pegs numbered from 1.

use crate::puzzle::Move;
use std::fmt;

/// What happened when the held disk was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The disk moved to a different peg
    Moved { rank: u32, from: usize, to: usize },
    /// The disk was dropped back onto the peg it came from
    Replaced { rank: u32, peg: usize },
    /// The target peg's top disk is smaller; the disk went back to its origin
    Rejected {
        rank: u32,
        onto: usize,
        blocking_rank: u32,
    },
    /// The release point was not near any peg; the disk went back to its origin
    NoTarget { rank: u32, origin: usize },
    /// Nothing was held, or input is locked by auto play or a win
    Ignored,
}

impl DropOutcome {
    /// True if the move counter advanced
    pub fn is_move(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. })
    }
}

impl fmt::Display for DropOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropOutcome::Moved { rank, from, to } => {
                write!(f, "Moved disk {} from peg {} to peg {}", rank, from + 1, to + 1)
            }
            DropOutcome::Replaced { rank, peg } => {
                write!(f, "Put disk {} back on peg {}", rank, peg + 1)
            }
            DropOutcome::Rejected {
                rank,
                onto,
                blocking_rank,
            } => write!(
                f,
                "Illegal move: disk {} cannot rest on disk {} (peg {})",
                rank,
                blocking_rank,
                onto + 1
            ),
            DropOutcome::NoTarget { rank, origin } => {
                write!(f, "No peg there; disk {} returned to peg {}", rank, origin + 1)
            }
            DropOutcome::Ignored => write!(f, "Nothing to drop"),
        }
    }
}

/// Result of the auto-play toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoToggle {
    /// Auto play began. `restored` is set when the disks had to be put back
    /// on the first peg before the plan could run.
    Started { plan_len: usize, restored: bool },
    Stopped,
    /// The puzzle is already solved
    Refused,
}

impl fmt::Display for AutoToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoToggle::Started {
                plan_len,
                restored: false,
            } => write!(f, "Auto solve started: {} moves", plan_len),
            AutoToggle::Started {
                plan_len,
                restored: true,
            } => write!(
                f,
                "Board restored; auto solve started: {} moves",
                plan_len
            ),
            AutoToggle::Stopped => write!(f, "Auto solve stopped"),
            AutoToggle::Refused => write!(f, "Already solved; press r to restart"),
        }
    }
}

/// One tick of automatic playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoStep {
    /// The planned move at the cursor
    pub planned: Move,
    /// Rank of the disk that moved, or `None` if the source peg was empty
    pub moved_rank: Option<u32>,
    /// The plan is exhausted and auto play has switched off
    pub finished: bool,
}

impl fmt::Display for AutoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.moved_rank {
            Some(rank) => write!(
                f,
                "Auto: disk {} from peg {} to peg {}",
                rank,
                self.planned.from + 1,
                self.planned.to + 1
            ),
            None => write!(
                f,
                "Auto: peg {} was empty, step skipped",
                self.planned.from + 1
            ),
        }
    }
}
