// Integration tests for the game state machine

use hanoitty::game::{AutoToggle, DropOutcome, GameState, Mode};
use hanoitty::puzzle::constants::{PEG_ANCHORS, PEG_COUNT};
use hanoitty::puzzle::{solve, Disk};
use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{Duration, Instant};

/// Point at the top disk of `peg` and press
fn lift(game: &mut GameState, peg: usize) -> bool {
    let (x, y) = game.pegs()[peg]
        .top()
        .map(Disk::position)
        .expect("peg has no disk to lift");
    game.pointer_down(x, y)
}

/// Release over the pole of `peg`
fn drop_on(game: &mut GameState, peg: usize) -> DropOutcome {
    game.pointer_up(PEG_ANCHORS[peg], 2)
}

fn drag(game: &mut GameState, from: usize, to: usize) -> DropOutcome {
    assert!(lift(game, from), "could not lift from peg {}", from);
    drop_on(game, to)
}

fn peg_lens(game: &GameState) -> Vec<usize> {
    game.pegs().iter().map(|peg| peg.len()).collect()
}

fn assert_starting_arrangement(game: &GameState) {
    let expected: Vec<u32> = (1..=game.disk_count() as u32).rev().collect();
    assert_eq!(game.pegs()[0].ranks(), expected);
    assert!(game.pegs()[1].is_empty());
    assert!(game.pegs()[2].is_empty());
    assert!(game.held().is_none());
}

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.disk_count(), 6);
    assert_starting_arrangement(&game);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.mode(), Mode::Idle);
    assert!(!game.is_won());
    assert!(!game.is_auto());
    assert_eq!(game.auto_interval_ms(), 500);
    assert_eq!(game.optimal_moves(), 63);
    assert_eq!(game.disks().count(), 6);
}

#[test]
fn test_stacked_disks_sit_on_their_peg() {
    let game = GameState::new();
    for (i, disk) in game.pegs()[0].disks().iter().enumerate() {
        assert_eq!(disk.position(), (PEG_ANCHORS[0], 8 - i as i32));
    }
}

#[test]
fn test_three_disk_solution_by_hand() {
    let mut game = GameState::with_disk_count(3);

    for mv in solve(3, 0, 1, 2) {
        assert!(!game.is_won());
        let outcome = drag(&mut game, mv.from, mv.to);
        assert!(outcome.is_move(), "{:?}", outcome);
    }

    assert!(game.is_won());
    assert_eq!(game.mode(), Mode::Won);
    assert_eq!(game.move_count(), 7);
    assert_eq!(game.pegs()[2].ranks(), vec![3, 2, 1]);
}

#[test]
fn test_illegal_drop_returns_disk_to_origin() {
    let mut game = GameState::new();
    assert_eq!(
        drag(&mut game, 0, 1),
        DropOutcome::Moved {
            rank: 1,
            from: 0,
            to: 1
        }
    );
    let before = peg_lens(&game);

    // Disk 2 cannot rest on disk 1
    let outcome = drag(&mut game, 0, 1);
    assert_eq!(
        outcome,
        DropOutcome::Rejected {
            rank: 2,
            onto: 1,
            blocking_rank: 1
        }
    );
    assert_eq!(peg_lens(&game), before);
    assert_eq!(game.pegs()[0].top().map(Disk::rank), Some(2));
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.mode(), Mode::Idle);
}

#[test]
fn test_drop_on_same_peg_is_not_a_move() {
    let mut game = GameState::new();
    let outcome = drag(&mut game, 0, 0);
    assert_eq!(outcome, DropOutcome::Replaced { rank: 1, peg: 0 });
    assert_eq!(game.move_count(), 0);
    assert_starting_arrangement(&game);
}

#[test]
fn test_drop_away_from_pegs_reverts() {
    let mut game = GameState::new();
    assert!(lift(&mut game, 0));
    let outcome = game.pointer_up(-40, 0);
    assert_eq!(outcome, DropOutcome::NoTarget { rank: 1, origin: 0 });
    assert_eq!(game.move_count(), 0);
    assert_starting_arrangement(&game);

    // Between two pegs is no target either
    assert!(lift(&mut game, 0));
    assert_eq!(
        game.pointer_up(22, 0),
        DropOutcome::NoTarget { rank: 1, origin: 0 }
    );
}

#[test]
fn test_release_without_holding_is_ignored() {
    let mut game = GameState::new();
    assert_eq!(drop_on(&mut game, 2), DropOutcome::Ignored);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_only_top_disk_can_be_lifted() {
    let mut game = GameState::new();
    let (x, y) = game.pegs()[0].disks()[0].position();
    // The bottom disk is wider than the top one; press on its outer edge
    assert!(!game.pointer_down(x - 7, y));
    assert!(!game.pointer_down(x, y));
    assert!(game.held().is_none());

    // Empty pegs have nothing to lift
    assert!(!game.pointer_down(PEG_ANCHORS[1], 8));
}

#[test]
fn test_held_disk_follows_pointer_and_keeps_ownership() {
    let mut game = GameState::new();
    assert!(lift(&mut game, 0));
    assert_eq!(game.mode(), Mode::Dragging);
    assert_eq!(game.pegs()[0].len(), 5);
    assert_eq!(game.disks().count(), 6);

    game.pointer_moved(40, 1);
    let held = game.held().expect("disk is held");
    assert_eq!(held.origin, 0);
    assert_eq!(held.disk.rank(), 1);
    assert_eq!(held.disk.position(), (40, 1));

    // A second press while holding does nothing
    assert!(!lift(&mut game, 0));
    assert_eq!(game.disks().count(), 6);
}

#[test]
fn test_auto_plays_full_solution() {
    let mut game = GameState::new();
    let t0 = Instant::now();
    assert_eq!(
        game.toggle_auto(t0),
        AutoToggle::Started {
            plan_len: 63,
            restored: false
        }
    );
    assert_eq!(game.mode(), Mode::AutoPlaying);

    // Not yet due
    assert!(game.update(t0 + Duration::from_millis(499)).is_none());
    assert_eq!(game.move_count(), 0);

    let mut now = t0;
    for step in 1..=63u32 {
        now += Duration::from_millis(500);
        let tick = game.update(now).expect("a move is due");
        assert!(tick.moved_rank.is_some());
        assert_eq!(tick.finished, step == 63);
        assert_eq!(game.move_count(), step);

        // At most one move per update
        assert!(game.update(now).is_none());
    }

    assert!(game.is_won());
    assert!(!game.is_auto());
    assert_eq!(game.mode(), Mode::Won);
    assert_eq!(game.move_count(), 63);
    assert_eq!(game.pegs()[2].ranks(), vec![6, 5, 4, 3, 2, 1]);

    // Nothing further happens
    assert!(game.update(now + Duration::from_secs(10)).is_none());
}

#[test]
fn test_late_update_moves_only_once() {
    let mut game = GameState::new();
    let t0 = Instant::now();
    game.toggle_auto(t0);
    assert!(game.update(t0 + Duration::from_secs(30)).is_some());
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.auto_progress(), (1, 63));
}

#[test]
fn test_auto_input_is_locked() {
    let mut game = GameState::new();
    game.toggle_auto(Instant::now());
    assert!(!lift(&mut game, 0));
    assert_eq!(drop_on(&mut game, 2), DropOutcome::Ignored);
    assert!(game.held().is_none());
}

#[test]
fn test_auto_toggle_off_discards_plan() {
    let mut game = GameState::new();
    let t0 = Instant::now();
    game.toggle_auto(t0);
    game.update(t0 + Duration::from_millis(500));
    assert_eq!(game.auto_progress(), (1, 63));

    assert_eq!(game.toggle_auto(t0), AutoToggle::Stopped);
    assert!(!game.is_auto());
    assert_eq!(game.auto_progress(), (0, 0));
    assert!(game.update(t0 + Duration::from_secs(5)).is_none());
    assert_eq!(game.move_count(), 1);

    // Manual play works again
    assert_eq!(game.mode(), Mode::Idle);
    assert!(lift(&mut game, 0));
}

#[test]
fn test_auto_restores_board_after_manual_moves() {
    let mut game = GameState::new();
    drag(&mut game, 0, 2);
    drag(&mut game, 0, 1);
    assert_eq!(game.move_count(), 2);

    let toggle = game.toggle_auto(Instant::now());
    assert_eq!(
        toggle,
        AutoToggle::Started {
            plan_len: 63,
            restored: true
        }
    );
    assert_eq!(game.move_count(), 0);
    assert_starting_arrangement(&game);
}

#[test]
fn test_auto_toggle_while_dragging_returns_disk() {
    let mut game = GameState::new();
    assert!(lift(&mut game, 0));
    let toggle = game.toggle_auto(Instant::now());
    assert_eq!(
        toggle,
        AutoToggle::Started {
            plan_len: 63,
            restored: false
        }
    );
    assert!(game.held().is_none());
    assert_eq!(game.pegs()[0].len(), 6);
}

#[test]
fn test_auto_refused_after_win() {
    let mut game = GameState::with_disk_count(1);
    drag(&mut game, 0, 2);
    assert!(game.is_won());
    assert_eq!(game.toggle_auto(Instant::now()), AutoToggle::Refused);
    assert!(!game.is_auto());
    assert!(!game.pointer_down(PEG_ANCHORS[2], 8));
}

#[test]
fn test_interval_stays_in_bounds() {
    let mut game = GameState::new();

    // Speed keys do nothing outside auto play
    assert!(!game.speed_up());
    assert!(!game.slow_down());
    assert_eq!(game.auto_interval_ms(), 500);

    game.toggle_auto(Instant::now());
    assert!(game.speed_up());
    assert_eq!(game.auto_interval_ms(), 400);

    for _ in 0..50 {
        game.speed_up();
        assert!(game.auto_interval_ms() >= 100);
    }
    assert_eq!(game.auto_interval_ms(), 100);
    assert!(!game.speed_up());

    for _ in 0..50 {
        game.slow_down();
        assert!(game.auto_interval_ms() <= 2000);
    }
    assert_eq!(game.auto_interval_ms(), 2000);
    assert!(!game.slow_down());

    game.set_auto_interval_ms(5);
    assert_eq!(game.auto_interval_ms(), 100);
    game.set_auto_interval_ms(60_000);
    assert_eq!(game.auto_interval_ms(), 2000);
}

#[test]
fn test_reset_from_every_mode() {
    // Won
    let mut game = GameState::with_disk_count(1);
    drag(&mut game, 0, 2);
    assert_eq!(game.mode(), Mode::Won);
    game.reset();
    assert_eq!(game.mode(), Mode::Idle);
    assert_eq!(game.move_count(), 0);
    assert_starting_arrangement(&game);

    // Auto playing, part way through
    let mut game = GameState::new();
    let t0 = Instant::now();
    game.toggle_auto(t0);
    game.update(t0 + Duration::from_millis(500));
    game.update(t0 + Duration::from_millis(1000));
    game.reset();
    assert!(!game.is_auto());
    assert!(!game.is_won());
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.auto_progress(), (0, 0));
    assert_starting_arrangement(&game);

    // Mid-drag after some moves
    let mut game = GameState::new();
    drag(&mut game, 0, 1);
    drag(&mut game, 0, 2);
    assert!(lift(&mut game, 1));
    game.reset();
    assert_eq!(game.mode(), Mode::Idle);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.disks().count(), 6);
    assert_starting_arrangement(&game);
}

#[test]
fn test_reset_keeps_playback_speed() {
    let mut game = GameState::new();
    game.toggle_auto(Instant::now());
    game.slow_down();
    game.reset();
    assert_eq!(game.auto_interval_ms(), 600);
}

#[test]
fn test_random_drags_keep_stacks_legal() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x4a4e_6f1d);

    for _ in 0..20 {
        let mut game = GameState::new();
        let mut moves = 0;

        for _ in 0..300 {
            let from = rng.next_u32() as usize % PEG_COUNT;
            let to = rng.next_u32() as usize % PEG_COUNT;
            if game.pegs()[from].is_empty() || game.is_won() {
                continue;
            }

            let before = peg_lens(&game);
            let outcome = drag(&mut game, from, to);
            match outcome {
                DropOutcome::Moved { .. } => moves += 1,
                DropOutcome::Replaced { .. } | DropOutcome::Rejected { .. } => {
                    assert_eq!(peg_lens(&game), before)
                }
                other => panic!("unexpected outcome {:?}", other),
            }

            assert_eq!(game.move_count(), moves);
            assert_eq!(game.disks().count(), 6);
            for peg in game.pegs() {
                let ranks = peg.ranks();
                assert!(
                    ranks.windows(2).all(|pair| pair[0] > pair[1]),
                    "stack out of order: {:?}",
                    ranks
                );
            }
            assert_eq!(game.is_won(), game.pegs()[2].len() == 6);
        }
    }
}
