//! Property-based tests for board geometry and movement.
//!
//! These tests verify properties of the track, home lanes and captures.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use crosstrack::game::check_invariants;
use crosstrack::{
    Board, CellKind, Coord, FigureId, GameConfig, Geometry, RandomDice, SeatLayout,
    tournament::run_game_with_dice,
};

/// Odd board sizes from 5 to 41.
fn board_size() -> impl Strategy<Value = u16> {
    (2u16..=20).prop_map(|k| 2 * k + 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Exactly one wall, at the center.
    #[test]
    fn prop_single_wall_at_center(n in board_size()) {
        let g = Geometry::new(n).unwrap();
        let walls: Vec<Coord> = g.coords().filter(|&c| g.classify(c) == CellKind::Wall).collect();
        prop_assert_eq!(walls, vec![g.center()]);
    }

    /// Four home lanes of (N-3)/2 cells, each ending next to an edge track cell.
    #[test]
    fn prop_four_home_lanes(n in board_size()) {
        let g = Geometry::new(n).unwrap();
        let homes = g.coords().filter(|&c| g.classify(c) == CellKind::Home).count();
        prop_assert_eq!(homes, 4 * g.home_lane_len());

        let m = g.mid();
        let last = n - 1;
        for tip in [Coord::new(m, 0), Coord::new(m, last), Coord::new(0, m), Coord::new(last, m)] {
            prop_assert_eq!(g.classify(tip), CellKind::Path);
            let mut cell = g.home_entry(tip).unwrap();
            let mut len = 1;
            prop_assert_eq!(g.classify(cell), CellKind::Home);
            while let Some(next) = g.advance(cell) {
                prop_assert_eq!(g.classify(next), CellKind::Home);
                cell = next;
                len += 1;
            }
            prop_assert_eq!(len, g.home_lane_len());
        }
    }

    /// Advancing track_len times from any track cell comes back to it,
    /// visiting every track cell once.
    #[test]
    fn prop_track_closed_loop(n in board_size(), pick in any::<prop::sample::Index>()) {
        let g = Geometry::new(n).unwrap();
        let track: Vec<Coord> = g.coords().filter(|&c| g.classify(c) == CellKind::Path).collect();
        prop_assert_eq!(track.len(), g.track_len());

        let start = track[pick.index(track.len())];
        let mut pos = start;
        let mut visited = std::collections::HashSet::new();
        for _ in 0..g.track_len() {
            pos = g.advance(pos).unwrap();
            visited.insert(pos);
        }
        prop_assert_eq!(pos, start);
        prop_assert_eq!(visited.len(), g.track_len());
    }

    /// A fresh figure sent a full lap lands in its own home lane.
    #[test]
    fn prop_full_lap_enters_home(n in board_size(), four in any::<bool>()) {
        let layout = if four { SeatLayout::FourPlayer } else { SeatLayout::TwoPlayer };
        let mut board = Board::with_layout(n, layout).unwrap();
        for _ in 0..layout.capacity() {
            board.add_player(None).unwrap();
        }

        for player in board.players() {
            let figure = &player.figures()[0];
            let lap = board.geometry().track_len();
            let mut pos = figure.position();
            // Walk a lap minus one step: still on the track, short of the entry.
            for _ in 0..lap - 1 {
                pos = board.geometry().advance(pos).unwrap();
            }
            prop_assert_ne!(pos, player.entry);

            let steps = u8::try_from(lap).unwrap();
            let dest = figure.destination(&board, steps).unwrap();
            prop_assert_eq!(dest, board.geometry().home_entry(player.entry).unwrap());
            prop_assert_eq!(board.geometry().classify(dest), CellKind::Home);
        }
    }

    /// Destinations never land on an occupied home cell.
    #[test]
    fn prop_destination_never_occupied_home(
        n in (2u16..=6).prop_map(|k| 2 * k + 1),
        lane_pos in 0usize..10,
        track_pos in 0usize..200,
        steps in 1u8..=6
    ) {
        let mut board = Board::new(n).unwrap();
        let a = board.add_player(None).unwrap();
        board.add_player(None).unwrap();
        let g = *board.geometry();

        // Resident somewhere in A's home lane.
        let entry = board.player(a).unwrap().entry;
        let mut lane = vec![g.home_entry(entry).unwrap()];
        while let Some(next) = g.advance(*lane.last().unwrap()) {
            lane.push(next);
        }
        let resident = FigureId::new(a, 0);
        board.move_figure(resident, lane[lane_pos % lane.len()]);

        // Mover somewhere on the track.
        let mover = board.add_figure(a).unwrap();
        let track: Vec<Coord> = g.coords().filter(|&c| g.classify(c) == CellKind::Path).collect();
        board.move_figure(mover, track[track_pos % track.len()]);

        if let Some(dest) = board.figure(mover).unwrap().destination(&board, steps) {
            if g.classify(dest) == CellKind::Home {
                prop_assert!(board.figure_at(dest).is_none());
            }
        }
    }

    /// Landing on an opposing figure removes exactly that figure.
    #[test]
    fn prop_capture_removes_exactly_one(track_pos in 0usize..32) {
        let mut board = Board::new(9).unwrap();
        let a = board.add_player(None).unwrap();
        let b = board.add_player(None).unwrap();
        let g = *board.geometry();
        let track: Vec<Coord> = g.coords().filter(|&c| g.classify(c) == CellKind::Path).collect();
        let target = track[track_pos];
        prop_assume!(!board.seats().contains(&target));

        let victim = FigureId::new(a, 0);
        prop_assert!(board.move_figure(victim, target).is_none());
        let spare = board.add_figure(a).unwrap();

        let captured = board.move_figure(FigureId::new(b, 0), target);
        prop_assert_eq!(captured.map(|f| f.id()), Some(victim));
        prop_assert!(board.figure(victim).is_none());
        prop_assert!(board.figure(spare).is_some());
        prop_assert_eq!(board.player(a).unwrap().figures().len(), 1);
        prop_assert_eq!(board.player(b).unwrap().figures().len(), 1);
        prop_assert_eq!(board.figure_at(target).map(|(f, _)| f.id()), Some(FigureId::new(b, 0)));
    }

    /// A player is only finished with a full lane of figures.
    #[test]
    fn prop_finish_needs_max_figures(n in board_size(), fill in 0usize..20) {
        let mut board = Board::new(n).unwrap();
        let a = board.add_player(None).unwrap();
        board.add_player(None).unwrap();
        let g = *board.geometry();

        let entry = board.player(a).unwrap().entry;
        let mut lane = vec![g.home_entry(entry).unwrap()];
        while let Some(next) = g.advance(*lane.last().unwrap()) {
            lane.push(next);
        }
        prop_assert_eq!(lane.len(), board.max_figures());

        // Stack figures from the innermost cell outward.
        let count = 1 + fill % board.max_figures();
        for slot in 0..count {
            let id = if slot == 0 {
                FigureId::new(a, 0)
            } else {
                board.add_figure(a).unwrap()
            };
            board.move_figure(id, lane[lane.len() - 1 - slot]);
        }

        let player = board.player(a).unwrap();
        prop_assert!(player.figures_home(board.geometry()));
        prop_assert_eq!(player.has_finished(&board), count == board.max_figures());
        prop_assert_eq!(player.active_figures(&board).count(), 0);
        prop_assert!(check_invariants(&board).is_empty());
    }

    /// Seeded random games never break the board invariants.
    #[test]
    fn prop_random_games_keep_invariants(
        seed in any::<u64>(),
        n in (2u16..=6).prop_map(|k| 2 * k + 1),
        four in any::<bool>()
    ) {
        let layout = if four { SeatLayout::FourPlayer } else { SeatLayout::TwoPlayer };
        let config = GameConfig {
            size: n,
            layout,
            players: layout.capacity(),
            max_turns: 2_000,
        };
        let mut dice = RandomDice::seeded(seed);
        let mut violations = Vec::new();
        let result = run_game_with_dice(seed, &mut dice, &config, |_, board| {
            violations.extend(check_invariants(board));
        })
        .unwrap();

        prop_assert!(violations.is_empty(), "violations: {:?}", violations);
        if let Some(winner) = result.winner {
            let stats = &result.player_stats[usize::from(winner)];
            prop_assert_eq!(stats.figures_home as usize, (usize::from(n) - 3) / 2);
        }
    }
}
