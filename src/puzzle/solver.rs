//! Optimal move plan for the three-peg puzzle
//!
//! A plan is a list of peg-index pairs, never disk identities: whoever
//! replays it moves "the top disk of `from`" at each step. The recursion
//! guarantees that disk is the one that may legally go to `to`.

/// Move the top disk of peg `from` onto peg `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Move { from, to }
    }
}

/// Moves needed to shift `n` disks: `2^n - 1`
pub fn optimal_move_count(n: u32) -> u64 {
    (1u64 << n) - 1
}

/// Plan moving `n` disks from `source` to `destination`, using `auxiliary`
/// as the spare. Returns `2^n - 1` moves; `n == 0` yields an empty plan.
pub fn solve(n: u32, source: usize, auxiliary: usize, destination: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(optimal_move_count(n) as usize);
    solve_into(n, source, auxiliary, destination, &mut moves);
    moves
}

fn solve_into(n: u32, source: usize, auxiliary: usize, destination: usize, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    solve_into(n - 1, source, destination, auxiliary, moves);
    moves.push(Move::new(source, destination));
    solve_into(n - 1, auxiliary, source, destination, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_disk() {
        assert_eq!(solve(1, 0, 1, 2), vec![Move::new(0, 2)]);
    }

    #[test]
    fn test_three_disks_canonical_order() {
        let expected = vec![
            Move::new(0, 2),
            Move::new(0, 1),
            Move::new(2, 1),
            Move::new(0, 2),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(0, 2),
        ];
        assert_eq!(solve(3, 0, 1, 2), expected);
    }

    #[test]
    fn test_zero_disks_is_empty() {
        assert!(solve(0, 0, 1, 2).is_empty());
        assert_eq!(optimal_move_count(0), 0);
    }

    #[test]
    fn test_plan_length() {
        for n in 1..=12 {
            assert_eq!(solve(n, 0, 1, 2).len() as u64, optimal_move_count(n));
        }
    }
}
