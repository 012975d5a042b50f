#![no_main]

//! Full game turn fuzzer.
//!
//! This fuzz target drives the turn engine with arbitrary dice:
//! 1. Build a board of a fuzzed size and seat layout
//! 2. Play turns with fuzzed rolls, including out-of-range ones
//! 3. Check board invariants after every turn
//!
//! This catches integration bugs between movement, entry and capture.

use arbitrary::Arbitrary;
use crosstrack::game::{check_invariants, DIE_FACES};
use crosstrack::{GameConfig, GameError, SeatLayout, TurnOutcome};
use libfuzzer_sys::fuzz_target;

/// Structured input for full game turn fuzzing.
#[derive(Arbitrary, Debug)]
struct GameTurnInput {
    /// Half the board size; the board side is `2 * half + 1`.
    half: u8,
    /// Seat four players instead of two.
    four_players: bool,
    /// Raw die values, played in order.
    rolls: Vec<u8>,
}

fuzz_target!(|input: GameTurnInput| {
    // Cap values to avoid excessive runtime
    let half = u16::from(input.half % 12);
    let rolls: Vec<u8> = input.rolls.into_iter().take(2_000).collect();

    let layout = if input.four_players {
        SeatLayout::FourPlayer
    } else {
        SeatLayout::TwoPlayer
    };
    let config = GameConfig {
        size: 2 * half + 1,
        layout,
        players: layout.capacity(),
        max_turns: u32::MAX,
    };

    // Sizes below 5 must be rejected, everything else must build
    let mut game = match config.new_game() {
        Ok(game) => game,
        Err(GameError::Board(_)) => {
            assert!(half < 2, "valid size {} rejected", config.size);
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    let violations = check_invariants(game.board());
    assert!(
        violations.is_empty(),
        "Invariants violated at start: {:?}",
        violations
    );

    for roll in rolls {
        let turn = game.turn();
        match game.play_turn(roll) {
            Ok(report) => {
                assert!((1..=DIE_FACES).contains(&roll));
                assert_eq!(game.turn(), turn + 1);
                if let TurnOutcome::Moved {
                    figure, to, captured, ..
                } = report.outcome
                {
                    // An entry cell may hold several figures; the mover is one of them.
                    let mover_there = game
                        .board()
                        .figures()
                        .any(|(f, _)| f.id() == figure && f.position() == to);
                    assert!(mover_there, "mover {figure} is not on {to}");
                    assert_eq!(figure.owner, report.player);
                    if let Some(victim) = captured {
                        assert!(game.board().figure(victim).is_none());
                    }
                }
            }
            Err(GameError::InvalidRoll(_)) => {
                assert!(!(1..=DIE_FACES).contains(&roll));
                assert_eq!(game.turn(), turn);
            }
            Err(GameError::GameOver) => {
                assert!(game.winner().is_some());
                break;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }

        // Verify invariants after each turn
        let violations = check_invariants(game.board());
        assert!(
            violations.is_empty(),
            "Invariants violated after turn {}: {:?}",
            turn,
            violations
        );
    }
});
