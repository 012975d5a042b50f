//! Error types for board construction and the turn engine.

use std::fmt;

use crate::game::PlayerId;

/// Configuration errors raised while building a board or seating players.
///
/// These are construction-time precondition violations; none of them can
/// occur once a game is under way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board size is even, so there is no center cell.
    EvenSize(u16),
    /// Board size is below the minimum that still has home lanes.
    TooSmall(u16),
    /// Every seat of the layout is already taken.
    NoFreeSeat {
        /// Number of seats the layout provides.
        seats: usize,
    },
    /// Another player already uses this symbol.
    DuplicateSymbol(char),
    /// No player with this id has joined the board.
    UnknownPlayer(PlayerId),
    /// The player has entered as many figures as serials exist.
    SerialsExhausted(PlayerId),
    /// More players requested than the seat layout can hold.
    TooManyPlayers {
        /// Players requested.
        requested: usize,
        /// Seats available.
        seats: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EvenSize(n) => write!(f, "board size must be odd, got {n}"),
            BoardError::TooSmall(n) => write!(f, "board size must be at least 5, got {n}"),
            BoardError::NoFreeSeat { seats } => {
                write!(f, "no free seat: all {seats} starting positions are taken")
            }
            BoardError::DuplicateSymbol(symbol) => {
                write!(f, "symbol '{symbol}' is already used by another player")
            }
            BoardError::UnknownPlayer(id) => write!(f, "unknown player id {id}"),
            BoardError::SerialsExhausted(id) => {
                write!(f, "player {id} has no figure serials left")
            }
            BoardError::TooManyPlayers { requested, seats } => {
                write!(f, "too many players: {requested} (layout has {seats} seats)")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors raised by the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A turn was requested after a player already finished.
    GameOver,
    /// The board has no players to take turns.
    NoPlayers,
    /// A roll outside the faces of the die.
    InvalidRoll(u8),
    /// Board configuration failed.
    Board(BoardError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "game is already over"),
            GameError::NoPlayers => write!(f, "no players have joined the board"),
            GameError::InvalidRoll(roll) => write!(f, "invalid roll {roll}"),
            GameError::Board(e) => write!(f, "board error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        GameError::Board(e)
    }
}

/// Result type for board configuration.
pub type BoardResult<T> = Result<T, BoardError>;
