//! Game layer for Crosstrack.
//!
//! Implements the board rules:
//! - Geometry of the cross-shaped track and home lanes
//! - Figures and their movement along the track
//! - Players owning a bounded set of figures
//! - Board with seats and capture-on-landing
//! - Turn engine driven by an injected die

mod board;
mod dice;
mod figure;
mod geometry;
mod invariants;
mod player;
mod turn;

pub use board::{Board, SeatLayout};
pub use dice::{Dice, RandomDice, ScriptedDice, DIE_FACES, ENTRY_ROLL};
pub use figure::{Figure, FigureId};
pub use geometry::{CellKind, Coord, Geometry, MIN_SIZE};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use player::{Player, PlayerId};
pub use turn::{Game, GameSummary, TurnOutcome, TurnReport};
