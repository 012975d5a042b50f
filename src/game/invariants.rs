//! Board invariants - sanity checks that detect bugs.
//!
//! Captures and the home-cell occupancy check in [`Figure::destination`]
//! should keep these from ever triggering. A violation means a rule is
//! implemented wrong, not that a player made a bad move.
//!
//! [`Figure::destination`]: crate::game::Figure::destination

use std::collections::HashSet;

use crate::game::{Board, CellKind};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let geometry = board.geometry();

    let mut symbols = HashSet::new();
    for player in board.players() {
        if !symbols.insert(player.symbol) {
            violations.push(InvariantViolation {
                message: format!("Symbol '{}' is used by more than one player", player.symbol),
            });
        }

        if player.figures().len() > board.max_figures() {
            violations.push(InvariantViolation {
                message: format!(
                    "Player {} owns {} figures > max {}",
                    player.symbol,
                    player.figures().len(),
                    board.max_figures()
                ),
            });
        }
    }

    let mut occupied_home = HashSet::new();
    for (figure, player) in board.figures() {
        if figure.id().owner != player.id {
            violations.push(InvariantViolation {
                message: format!("Figure {} is held by player {}", figure.id(), player.id),
            });
        }

        match geometry.classify(figure.position()) {
            CellKind::Home => {
                if !occupied_home.insert(figure.position()) {
                    violations.push(InvariantViolation {
                        message: format!(
                            "Home cell {} holds more than one figure",
                            figure.position()
                        ),
                    });
                }
            }
            CellKind::Path => {}
            kind @ (CellKind::Empty | CellKind::Wall) => {
                violations.push(InvariantViolation {
                    message: format!(
                        "Figure {} stands on {:?} cell {}",
                        figure.id(),
                        kind,
                        figure.position()
                    ),
                });
            }
        }
    }

    violations
}

/// Assert all invariants hold, panicking with details if not.
///
/// # Panics
///
/// Panics if any invariant is violated.
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    assert!(
        violations.is_empty(),
        "Invariant violations:\n{}",
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}
