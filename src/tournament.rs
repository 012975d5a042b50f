//! Tournament runner for Crosstrack games.
//!
//! Provides a pure function interface: `(seed, config) -> GameResult`
//!
//! The runner handles:
//! - Board construction and seating from a [`GameConfig`]
//! - Seeded dice so every game is reproducible
//! - Turn loop up to the configured turn limit
//! - Per-player statistics collected from turn reports

use crate::error::{BoardError, GameError};
use crate::game::{
    Board, Dice, Game, PlayerId, RandomDice, SeatLayout, TurnOutcome, TurnReport,
};

/// Configuration for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length (odd, at least 5).
    pub size: u16,
    /// Seat layout of the board.
    pub layout: SeatLayout,
    /// Number of players to seat.
    pub players: usize,
    /// Maximum turns before the game is abandoned without a winner.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 9,
            layout: SeatLayout::TwoPlayer,
            players: 2,
            max_turns: 10_000,
        }
    }
}

impl GameConfig {
    /// Build a board for this configuration and seat its players.
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is invalid or the layout cannot
    /// seat the requested number of players.
    pub fn build_board(&self) -> Result<Board, BoardError> {
        let seats = self.layout.capacity();
        if self.players > seats {
            return Err(BoardError::TooManyPlayers {
                requested: self.players,
                seats,
            });
        }

        let mut board = Board::with_layout(self.size, self.layout)?;
        for _ in 0..self.players {
            board.add_player(None)?;
        }
        Ok(board)
    }

    /// Start a game for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built or has no players.
    pub fn new_game(&self) -> Result<Game, GameError> {
        Game::new(self.build_board()?)
    }
}

/// Statistics for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Player symbol.
    pub symbol: char,
    /// Figures entered after the initial one.
    pub figures_entered: u32,
    /// Successful moves.
    pub moves: u32,
    /// Turns lost to an illegal move.
    pub blocked: u32,
    /// Turns skipped with nothing to move.
    pub skipped: u32,
    /// Opposing figures captured.
    pub captures: u32,
    /// Own figures lost to captures.
    pub figures_lost: u32,
    /// Figures in the home lane when the game ended.
    pub figures_home: u32,
}

impl PlayerStats {
    /// Empty statistics for a player.
    #[must_use]
    pub const fn new(player_id: PlayerId, symbol: char) -> Self {
        Self {
            player_id,
            symbol,
            figures_entered: 0,
            moves: 0,
            blocked: 0,
            skipped: 0,
            captures: 0,
            figures_lost: 0,
            figures_home: 0,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// The winning player (None if the turn limit was reached).
    pub winner: Option<PlayerId>,
    /// Total turns played.
    pub turns_played: u32,
    /// Per-player statistics, indexed by player id.
    pub player_stats: Vec<PlayerStats>,
    /// The seed used for this game.
    pub seed: u64,
}

impl GameResult {
    /// Fold one turn report into the statistics.
    fn record(&mut self, report: &TurnReport) {
        let Some(stats) = self.player_stats.get_mut(usize::from(report.player)) else {
            return;
        };
        match report.outcome {
            TurnOutcome::Entered { .. } => stats.figures_entered += 1,
            TurnOutcome::Moved { captured, .. } => {
                stats.moves += 1;
                if let Some(victim) = captured {
                    stats.captures += u32::from(victim.owner != report.player);
                    if let Some(lost) = self.player_stats.get_mut(usize::from(victim.owner)) {
                        lost.figures_lost += 1;
                    }
                }
            }
            TurnOutcome::Blocked { .. } => stats.blocked += 1,
            TurnOutcome::Skipped => stats.skipped += 1,
        }
    }
}

/// Run a complete game with the given seed.
///
/// This is the main entry point - a pure function from inputs to result.
///
/// # Determinism
///
/// Given the same seed and configuration, this function always produces
/// the same `GameResult`.
///
/// # Errors
///
/// Returns an error if the configuration cannot produce a playable board.
pub fn run_game(seed: u64, config: &GameConfig) -> Result<GameResult, GameError> {
    let mut dice = RandomDice::seeded(seed);
    run_game_with_dice(seed, &mut dice, config, |_, _| {})
}

/// Run a complete game with an explicit die, observing every turn.
///
/// `observe` is called after each turn with the report and the board as it
/// stands after that turn.
///
/// # Errors
///
/// Returns an error if the configuration cannot produce a playable board.
pub fn run_game_with_dice<D, F>(
    seed: u64,
    dice: &mut D,
    config: &GameConfig,
    mut observe: F,
) -> Result<GameResult, GameError>
where
    D: Dice + ?Sized,
    F: FnMut(&TurnReport, &Board),
{
    let mut game = config.new_game()?;

    let mut result = GameResult {
        winner: None,
        turns_played: 0,
        player_stats: game
            .board()
            .players()
            .iter()
            .map(|p| PlayerStats::new(p.id, p.symbol))
            .collect(),
        seed,
    };

    while !game.is_over() && game.turn() < config.max_turns {
        let report = game.play_turn_with(dice)?;
        result.record(&report);
        observe(&report, game.board());
    }

    let board = game.board();
    for stats in &mut result.player_stats {
        if let Some(player) = board.player(stats.player_id) {
            let home = player
                .figures()
                .iter()
                .filter(|f| f.is_home(board.geometry()))
                .count();
            stats.figures_home = u32::try_from(home).unwrap_or(u32::MAX);
        }
    }
    result.winner = game.winner();
    result.turns_played = game.turn();
    Ok(result)
}
