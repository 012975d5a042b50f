// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Crosstrack: a deterministic simulator for a cross-shaped track-and-home
//! board game (a Ludo/Parcheesi variant) on any odd board size.
//!
//! This crate provides:
//! - Pure board geometry (cell classification and track movement)
//! - Figures, players and capture-on-landing
//! - A turn engine driven by an injected die
//! - Seeded full-game runs for batch statistics
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (board / run / tournament)  │
//! ├─────────────────────────────────────┤
//! │   Tournament Runner     Renderer    │
//! ├─────────────────────────────────────┤
//! │   Turn Engine (Game)    Dice        │
//! ├─────────────────────────────────────┤
//! │   Board ─ Player ─ Figure           │
//! ├─────────────────────────────────────┤
//! │   Geometry (classify / advance)     │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod tournament;

pub use error::{BoardError, BoardResult, GameError};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, CellKind, Coord, Dice, Figure, FigureId, Game, Geometry, Player, PlayerId,
    RandomDice, ScriptedDice, SeatLayout, TurnOutcome, TurnReport,
};
pub use render::render_text;
pub use tournament::{run_game, GameConfig, GameResult};
