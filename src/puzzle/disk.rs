//! A single ranked disk
//!
//! A [`Disk`] knows its rank, its display color and where it is drawn. Its
//! width grows with rank so that a larger disk is always visibly wider than
//! a smaller one. Disks carry no game rules; those live in
//! [`Peg`](super::peg::Peg).

use super::constants::DISK_HEIGHT;
use ratatui::style::Color;

/// A ranked, colored, draggable disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    rank: u32,
    color: Color,
    /// Horizontal centre, in board cells
    x: i32,
    /// Top row, in board cells
    y: i32,
}

impl Disk {
    /// Create a disk. Rank 1 is the smallest.
    pub fn new(rank: u32, color: Color, x: i32, y: i32) -> Self {
        debug_assert!(rank > 0, "disk rank must be positive");
        Disk { rank, color, x, y }
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Current position as (centre x, top row)
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Width in cells: `2 * rank + 3`, always odd so the disk centres on a peg
    pub fn width(&self) -> i32 {
        2 * self.rank as i32 + 3
    }

    pub fn height(&self) -> i32 {
        DISK_HEIGHT
    }

    /// Left edge of the bounding rectangle
    pub fn left(&self) -> i32 {
        self.x - self.width() / 2
    }

    /// Move the disk so it is centred on `x` with its top at `y`
    pub fn reposition(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Point-in-rectangle test against the disk's bounds
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let left = self.left();
        px >= left && px < left + self.width() && py >= self.y && py < self.y + self.height()
    }
}
