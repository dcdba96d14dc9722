//! Game state and the interaction state machine
//!
//! [`GameState`] owns the three pegs and, through them, every disk. A disk
//! being dragged is moved out of its peg into [`HeldDisk`], so at any moment
//! each disk has exactly one owner.
//!
//! # Modes
//!
//! ```text
//! Idle ──pointer_down──▶ Dragging ──pointer_up──▶ Idle
//!  │  ▲                                            │
//!  │  └──────────toggle_auto / plan done────────┐  │ (win)
//!  └──toggle_auto──▶ AutoPlaying ──plan done────┴─▶ Won
//! ```
//!
//! `reset` returns to Idle from any mode. Time is passed in by the caller so
//! the playback timer can be driven deterministically.

use super::outcome::{AutoStep, AutoToggle, DropOutcome};
use crate::puzzle::constants::{
    AUTO_INTERVAL_STEP_MS, AUXILIARY_PEG, DEFAULT_AUTO_INTERVAL_MS, DESTINATION_PEG,
    DISK_COUNT, DISK_PALETTE, MAX_AUTO_INTERVAL_MS, MIN_AUTO_INTERVAL_MS, PEG_ANCHORS,
    PEG_COUNT, SOURCE_PEG,
};
use crate::puzzle::{optimal_move_count, solve, Disk, Move, Peg};
use std::time::{Duration, Instant};

/// Which interaction mode the game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Dragging,
    AutoPlaying,
    Won,
}

/// A disk lifted off a peg by the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldDisk {
    pub disk: Disk,
    /// Peg the disk was lifted from; it goes back here on a bad drop
    pub origin: usize,
}

/// The whole game
#[derive(Debug, Clone)]
pub struct GameState {
    pegs: [Peg; PEG_COUNT],
    disk_count: usize,
    held: Option<HeldDisk>,
    move_count: u32,
    won: bool,
    auto_mode: bool,
    auto_moves: Vec<Move>,
    auto_cursor: usize,
    auto_interval_ms: u64,
    last_auto_tick: Instant,
}

impl GameState {
    /// A fresh game with the standard six disks
    pub fn new() -> Self {
        Self::with_disk_count(DISK_COUNT)
    }

    /// A fresh game with `disk_count` disks, clamped to what the board can
    /// show (1 to [`DISK_COUNT`])
    pub fn with_disk_count(disk_count: usize) -> Self {
        let mut state = GameState {
            pegs: empty_pegs(),
            disk_count: disk_count.clamp(1, DISK_COUNT),
            held: None,
            move_count: 0,
            won: false,
            auto_mode: false,
            auto_moves: Vec::new(),
            auto_cursor: 0,
            auto_interval_ms: DEFAULT_AUTO_INTERVAL_MS,
            last_auto_tick: Instant::now(),
        };
        state.seed();
        state
    }

    /// Set the playback interval, clamped to the allowed range
    pub fn set_auto_interval_ms(&mut self, interval_ms: u64) {
        self.auto_interval_ms = interval_ms.clamp(MIN_AUTO_INTERVAL_MS, MAX_AUTO_INTERVAL_MS);
    }

    // === Queries ===

    pub fn mode(&self) -> Mode {
        if self.won {
            Mode::Won
        } else if self.auto_mode {
            Mode::AutoPlaying
        } else if self.held.is_some() {
            Mode::Dragging
        } else {
            Mode::Idle
        }
    }

    pub fn pegs(&self) -> &[Peg; PEG_COUNT] {
        &self.pegs
    }

    pub fn held(&self) -> Option<&HeldDisk> {
        self.held.as_ref()
    }

    /// Every disk, wherever it currently lives. The held disk comes last.
    pub fn disks(&self) -> impl Iterator<Item = &Disk> {
        self.pegs
            .iter()
            .flat_map(|peg| peg.disks().iter())
            .chain(self.held.iter().map(|held| &held.disk))
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_auto(&self) -> bool {
        self.auto_mode
    }

    pub fn auto_interval_ms(&self) -> u64 {
        self.auto_interval_ms
    }

    /// (moves played, plan length) for the running auto solve
    pub fn auto_progress(&self) -> (usize, usize) {
        (self.auto_cursor, self.auto_moves.len())
    }

    /// Fewest moves that solve this game
    pub fn optimal_moves(&self) -> u64 {
        optimal_move_count(self.disk_count as u32)
    }

    // === Commands ===

    /// Rebuild the board: all disks on the first peg, counters cleared, auto
    /// play off. Works in every mode. The playback interval is kept.
    pub fn reset(&mut self) {
        self.held = None;
        self.won = false;
        self.stop_auto();
        self.seed();
    }

    /// Try to pick up the top disk under the pointer
    pub fn pointer_down(&mut self, x: i32, y: i32) -> bool {
        if self.input_locked() || self.held.is_some() {
            return false;
        }

        let Some(origin) = self
            .pegs
            .iter()
            .position(|peg| peg.top().is_some_and(|top| top.contains(x, y)))
        else {
            return false;
        };

        match self.pegs[origin].pop() {
            Some(mut disk) => {
                disk.reposition(x, y);
                self.held = Some(HeldDisk { disk, origin });
                true
            }
            None => false,
        }
    }

    /// Drag the held disk along with the pointer
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        if let Some(held) = self.held.as_mut() {
            held.disk.reposition(x, y);
        }
    }

    /// Release the held disk at the pointer
    pub fn pointer_up(&mut self, x: i32, _y: i32) -> DropOutcome {
        if self.input_locked() {
            return DropOutcome::Ignored;
        }
        let Some(HeldDisk { disk, origin }) = self.held.take() else {
            return DropOutcome::Ignored;
        };
        let rank = disk.rank();

        match self.pegs.iter().position(|peg| peg.is_near(x)) {
            Some(target) if self.pegs[target].can_accept(&disk) => {
                self.pegs[target].push(disk);
                if target == origin {
                    DropOutcome::Replaced { rank, peg: origin }
                } else {
                    self.move_count += 1;
                    self.check_win();
                    DropOutcome::Moved {
                        rank,
                        from: origin,
                        to: target,
                    }
                }
            }
            Some(target) => {
                let blocking_rank = self.pegs[target].top().map_or(0, Disk::rank);
                self.pegs[origin].push(disk);
                DropOutcome::Rejected {
                    rank,
                    onto: target,
                    blocking_rank,
                }
            }
            None => {
                self.pegs[origin].push(disk);
                DropOutcome::NoTarget { rank, origin }
            }
        }
    }

    /// Start or stop automatic solving.
    ///
    /// The plan always runs from the starting arrangement, so if the player
    /// has moved anything the board is restored first.
    pub fn toggle_auto(&mut self, now: Instant) -> AutoToggle {
        if self.auto_mode {
            self.stop_auto();
            return AutoToggle::Stopped;
        }
        if self.won {
            return AutoToggle::Refused;
        }

        self.return_held();
        let restored = !self.is_starting_arrangement();
        if restored {
            self.seed();
        }

        self.auto_moves = solve(
            self.disk_count as u32,
            SOURCE_PEG,
            AUXILIARY_PEG,
            DESTINATION_PEG,
        );
        self.auto_cursor = 0;
        self.last_auto_tick = now;
        self.auto_mode = true;

        AutoToggle::Started {
            plan_len: self.auto_moves.len(),
            restored,
        }
    }

    /// Advance automatic play by at most one move if the interval has elapsed
    pub fn update(&mut self, now: Instant) -> Option<AutoStep> {
        if !self.auto_mode || self.won {
            return None;
        }
        let interval = Duration::from_millis(self.auto_interval_ms);
        if now.saturating_duration_since(self.last_auto_tick) < interval {
            return None;
        }

        let planned = *self.auto_moves.get(self.auto_cursor)?;

        // Plan moves are legal by construction and are not re-checked here
        let moved_rank = match self.pegs[planned.from].pop() {
            Some(disk) => {
                let rank = disk.rank();
                self.pegs[planned.to].push(disk);
                self.move_count += 1;
                Some(rank)
            }
            None => None,
        };
        self.auto_cursor += 1;
        self.last_auto_tick = now;

        let finished = self.auto_cursor >= self.auto_moves.len();
        if finished {
            self.check_win();
            self.stop_auto();
        }

        Some(AutoStep {
            planned,
            moved_rank,
            finished,
        })
    }

    /// Shorten the playback interval. Only while auto play is running.
    pub fn speed_up(&mut self) -> bool {
        self.adjust_interval(|ms| ms.saturating_sub(AUTO_INTERVAL_STEP_MS))
    }

    /// Lengthen the playback interval. Only while auto play is running.
    pub fn slow_down(&mut self) -> bool {
        self.adjust_interval(|ms| ms.saturating_add(AUTO_INTERVAL_STEP_MS))
    }

    // === Internals ===

    fn adjust_interval(&mut self, step: impl FnOnce(u64) -> u64) -> bool {
        if !self.auto_mode {
            return false;
        }
        let before = self.auto_interval_ms;
        self.set_auto_interval_ms(step(before));
        self.auto_interval_ms != before
    }

    fn input_locked(&self) -> bool {
        self.won || self.auto_mode
    }

    fn check_win(&mut self) {
        if self.pegs[DESTINATION_PEG].len() == self.disk_count {
            self.won = true;
        }
    }

    fn stop_auto(&mut self) {
        self.auto_mode = false;
        self.auto_moves.clear();
        self.auto_cursor = 0;
    }

    fn return_held(&mut self) {
        if let Some(HeldDisk { disk, origin }) = self.held.take() {
            self.pegs[origin].push(disk);
        }
    }

    fn is_starting_arrangement(&self) -> bool {
        self.held.is_none() && self.pegs[SOURCE_PEG].len() == self.disk_count
    }

    /// Fresh pegs with every disk on the first one, largest at the bottom
    fn seed(&mut self) {
        self.pegs = empty_pegs();
        self.move_count = 0;
        for i in 0..self.disk_count {
            let rank = (self.disk_count - i) as u32;
            let color = DISK_PALETTE[i % DISK_PALETTE.len()];
            let disk = Disk::new(rank, color, PEG_ANCHORS[SOURCE_PEG], 0);
            self.pegs[SOURCE_PEG].push(disk);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_pegs() -> [Peg; PEG_COUNT] {
    PEG_ANCHORS.map(Peg::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_step_from_empty_peg_is_skipped() {
        let mut game = GameState::with_disk_count(2);
        let t0 = Instant::now();
        game.toggle_auto(t0);
        game.auto_moves = vec![Move::new(AUXILIARY_PEG, DESTINATION_PEG), Move::new(0, 1)];

        let step = game
            .update(t0 + Duration::from_millis(DEFAULT_AUTO_INTERVAL_MS))
            .unwrap();
        assert_eq!(step.moved_rank, None);
        assert!(!step.finished);
        assert_eq!(game.move_count, 0);
        assert_eq!(game.auto_cursor, 1);
        assert_eq!(game.pegs[SOURCE_PEG].ranks(), vec![2, 1]);
    }

    #[test]
    fn test_plan_ending_without_win_stops_auto() {
        let mut game = GameState::with_disk_count(2);
        let t0 = Instant::now();
        game.toggle_auto(t0);
        game.auto_moves = vec![Move::new(SOURCE_PEG, AUXILIARY_PEG)];

        let step = game
            .update(t0 + Duration::from_millis(DEFAULT_AUTO_INTERVAL_MS))
            .unwrap();
        assert_eq!(step.moved_rank, Some(1));
        assert!(step.finished);
        assert!(!game.won);
        assert!(!game.auto_mode);
        assert_eq!(game.mode(), Mode::Idle);
    }

    #[test]
    fn test_disk_count_is_clamped() {
        assert_eq!(GameState::with_disk_count(0).disk_count(), 1);
        assert_eq!(GameState::with_disk_count(40).disk_count(), DISK_COUNT);
    }
}
