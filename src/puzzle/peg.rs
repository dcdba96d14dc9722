//! A peg and its stack of disks
//!
//! The stack is stored bottom-first: the last element of the `Vec` is the
//! top disk. Every mutation re-lays the disks out so what is drawn always
//! matches the logical order.
//!
//! [`Peg::can_accept`] is the only legality rule in the game. [`Peg::push`]
//! does not call it: seeding a fresh board and replaying a solver plan are
//! trusted paths, and the drag-and-drop path checks before pushing.

use super::constants::{BASE_HALF_WIDTH, BASE_ROW, DISK_PITCH, DROP_THRESHOLD, POLE_TOP_ROW};
use super::disk::Disk;

/// One of the three pegs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peg {
    /// Horizontal centre of the pole
    anchor: i32,
    /// Bottom to top
    disks: Vec<Disk>,
}

impl Peg {
    /// Create an empty peg centred on column `anchor`
    pub fn new(anchor: i32) -> Self {
        Peg {
            anchor,
            disks: Vec::new(),
        }
    }

    pub fn anchor(&self) -> i32 {
        self.anchor
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Peek at the top disk
    pub fn top(&self) -> Option<&Disk> {
        self.disks.last()
    }

    /// True if `disk` may be placed on this peg: the peg is empty or its top
    /// disk is strictly larger.
    pub fn can_accept(&self, disk: &Disk) -> bool {
        match self.top() {
            None => true,
            Some(top) => top.rank() > disk.rank(),
        }
    }

    /// Put `disk` on top. Callers on a player-facing path must check
    /// [`can_accept`](Self::can_accept) first.
    pub fn push(&mut self, disk: Disk) {
        debug_assert!(
            self.can_accept(&disk),
            "disk {} pushed onto smaller disk {:?}",
            disk.rank(),
            self.top().map(Disk::rank)
        );
        self.disks.push(disk);
        self.layout();
    }

    /// Take the top disk off, if there is one
    pub fn pop(&mut self) -> Option<Disk> {
        let disk = self.disks.pop();
        self.layout();
        disk
    }

    /// Whether a drop at column `x` is close enough to land on this peg
    pub fn is_near(&self, x: i32) -> bool {
        (x - self.anchor).abs() < DROP_THRESHOLD
    }

    /// Ranks from bottom to top
    pub fn ranks(&self) -> Vec<u32> {
        self.disks.iter().map(Disk::rank).collect()
    }

    /// Columns covered by the base plate (inclusive)
    pub fn base_span(&self) -> (i32, i32) {
        (self.anchor - BASE_HALF_WIDTH, self.anchor + BASE_HALF_WIDTH)
    }

    /// Rows covered by the pole (inclusive)
    pub fn pole_span(&self) -> (i32, i32) {
        (POLE_TOP_ROW, BASE_ROW - 1)
    }

    /// Stack the disks upward from the base, one pitch apart
    fn layout(&mut self) {
        let anchor = self.anchor;
        for (i, disk) in self.disks.iter_mut().enumerate() {
            disk.reposition(anchor, BASE_ROW - DISK_PITCH * (i as i32 + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn disk(rank: u32) -> Disk {
        Disk::new(rank, Color::White, 0, 0)
    }

    #[test]
    fn test_empty_peg_accepts_anything() {
        let peg = Peg::new(12);
        assert!(peg.can_accept(&disk(1)));
        assert!(peg.can_accept(&disk(6)));
        assert!(peg.top().is_none());
    }

    #[test]
    fn test_can_accept_requires_strictly_larger_top() {
        let mut peg = Peg::new(12);
        peg.push(disk(4));
        assert!(peg.can_accept(&disk(3)));
        assert!(!peg.can_accept(&disk(4)));
        assert!(!peg.can_accept(&disk(5)));
    }

    #[test]
    fn test_push_lays_out_from_base() {
        let mut peg = Peg::new(32);
        peg.push(disk(3));
        peg.push(disk(2));
        peg.push(disk(1));

        let positions: Vec<(i32, i32)> = peg.disks().iter().map(Disk::position).collect();
        assert_eq!(
            positions,
            vec![(32, BASE_ROW - 1), (32, BASE_ROW - 2), (32, BASE_ROW - 3)]
        );
        assert_eq!(peg.top().map(Disk::rank), Some(1));
    }

    #[test]
    fn test_pop_returns_top_in_lifo_order() {
        let mut peg = Peg::new(12);
        peg.push(disk(2));
        peg.push(disk(1));

        assert_eq!(peg.pop().map(|d| d.rank()), Some(1));
        assert_eq!(peg.pop().map(|d| d.rank()), Some(2));
        assert!(peg.pop().is_none());
    }

    #[test]
    fn test_is_near_is_strict() {
        let peg = Peg::new(32);
        assert!(peg.is_near(32));
        assert!(peg.is_near(23));
        assert!(peg.is_near(41));
        assert!(!peg.is_near(22));
        assert!(!peg.is_near(42));
    }
}
