//! Turn engine: round-robin turns over a board.
//!
//! Each turn rolls once for the current player and applies the rules:
//! - no active figure: a roll of [`ENTRY_ROLL`] with spare capacity enters a
//!   new figure, anything else skips the turn
//! - otherwise the first active figure moves by the roll, capturing on
//!   landing, or the turn is lost if that move is illegal
//!
//! A player whose figures are all home wins and the game stops.

use crate::error::GameError;
use crate::game::{Board, Coord, DIE_FACES, Dice, ENTRY_ROLL, FigureId, PlayerId};

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A new figure entered on the player's entry coordinate.
    Entered {
        /// The new figure.
        figure: FigureId,
    },
    /// A figure moved, possibly capturing another.
    Moved {
        /// The moving figure.
        figure: FigureId,
        /// Coordinate before the move.
        from: Coord,
        /// Coordinate after the move.
        to: Coord,
        /// Figure removed from the board by landing on it.
        captured: Option<FigureId>,
    },
    /// The first active figure had no legal move for this roll.
    Blocked {
        /// The figure that could not move.
        figure: FigureId,
    },
    /// No active figure and no entry possible.
    Skipped,
}

/// Record of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn index (0-indexed).
    pub turn: u32,
    /// Player who took the turn.
    pub player: PlayerId,
    /// Symbol of that player.
    pub symbol: char,
    /// Die value rolled.
    pub roll: u8,
    /// What the roll did.
    pub outcome: TurnOutcome,
    /// Whether this turn won the game.
    pub finished: bool,
}

/// Result of playing a game to completion or to a turn limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Winning player, `None` if the turn limit was hit first.
    pub winner: Option<PlayerId>,
    /// Turns played.
    pub turns_played: u32,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: u32,
    current: usize,
    winner: Option<PlayerId>,
}

impl Game {
    /// Start a game on a board whose players have already joined.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayers`] if nobody has joined the board.
    pub fn new(board: Board) -> Result<Self, GameError> {
        if board.players().is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self {
            board,
            turn: 0,
            current: 0,
            winner: None,
        })
    }

    /// The board being played on.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the game, returning its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Number of turns played so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.board.players()[self.current].id
    }

    /// The winner, once someone has finished.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Play one turn for the current player with a given roll.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or the roll is not a
    /// die face.
    pub fn play_turn(&mut self, roll: u8) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(GameError::InvalidRoll(roll));
        }

        let player = &self.board.players()[self.current];
        let (player_id, symbol) = (player.id, player.symbol);
        let mover = player
            .active_figures(&self.board)
            .next()
            .map(|f| (f.id(), f.position(), f.destination(&self.board, roll)));
        let can_enter = roll == ENTRY_ROLL && player.figures().len() < self.board.max_figures();

        let outcome = match mover {
            None if can_enter => TurnOutcome::Entered {
                figure: self.board.add_figure(player_id)?,
            },
            None => TurnOutcome::Skipped,
            Some((figure, _, None)) => TurnOutcome::Blocked { figure },
            Some((figure, from, Some(to))) => TurnOutcome::Moved {
                figure,
                from,
                to,
                captured: self.board.move_figure(figure, to).map(|f| f.id()),
            },
        };

        let finished = self
            .board
            .player(player_id)
            .is_some_and(|p| p.has_finished(&self.board));
        if finished {
            self.winner = Some(player_id);
        }

        let report = TurnReport {
            turn: self.turn,
            player: player_id,
            symbol,
            roll,
            outcome,
            finished,
        };
        self.turn += 1;
        self.current = (self.current + 1) % self.board.players().len();
        Ok(report)
    }

    /// Play one turn, rolling the given dice.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game is already over.
    pub fn play_turn_with<D: Dice + ?Sized>(&mut self, dice: &mut D) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.play_turn(dice.roll())
    }

    /// Play until someone wins or `max_turns` turns have been played.
    pub fn run<D: Dice + ?Sized>(&mut self, dice: &mut D, max_turns: u32) -> GameSummary {
        while !self.is_over() && self.turn < max_turns {
            if self.play_turn_with(dice).is_err() {
                break;
            }
        }
        GameSummary {
            winner: self.winner,
            turns_played: self.turn,
        }
    }
}
