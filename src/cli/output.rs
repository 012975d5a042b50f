//! Output formatting utilities for CLI.

use crosstrack::tournament::GameResult;
use crosstrack::{Board, Coord, TurnOutcome, TurnReport};
use serde::Serialize;

/// JSON-serializable coordinate.
#[derive(Debug, Clone, Copy, Serialize)]
pub(super) struct JsonCoord {
    x: u16,
    y: u16,
}

impl From<Coord> for JsonCoord {
    fn from(c: Coord) -> Self {
        Self { x: c.x, y: c.y }
    }
}

/// JSON-serializable turn record.
#[derive(Debug, Serialize)]
pub(super) struct JsonTurn {
    /// Turn index (0-based).
    turn: u32,
    /// Player symbol.
    player: char,
    /// Die value.
    roll: u8,
    /// Outcome kind: entered, moved, blocked or skipped.
    outcome: &'static str,
    /// Start of the move, for moves.
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<JsonCoord>,
    /// End of the move, for moves and entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<JsonCoord>,
    /// Symbol of the captured figure's owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    captured: Option<char>,
}

impl JsonTurn {
    /// Create from a turn report and the board after the turn.
    pub(super) fn from_report(report: &TurnReport, board: &Board) -> Self {
        let mut turn = Self {
            turn: report.turn,
            player: report.symbol,
            roll: report.roll,
            outcome: "skipped",
            from: None,
            to: None,
            captured: None,
        };
        match report.outcome {
            TurnOutcome::Entered { figure } => {
                turn.outcome = "entered";
                turn.to = board.figure(figure).map(|f| f.position().into());
            }
            TurnOutcome::Moved {
                from, to, captured, ..
            } => {
                turn.outcome = "moved";
                turn.from = Some(from.into());
                turn.to = Some(to.into());
                turn.captured = captured
                    .and_then(|victim| board.player(victim.owner))
                    .map(|p| p.symbol);
            }
            TurnOutcome::Blocked { .. } => turn.outcome = "blocked",
            TurnOutcome::Skipped => {}
        }
        turn
    }
}

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult {
    /// Random seed used.
    seed: u64,
    /// Winner symbol (null if the turn limit was reached).
    winner: Option<char>,
    /// Total turns played.
    turns_played: u32,
    /// Per-player results.
    players: Vec<JsonPlayerResult>,
    /// Turn-by-turn log.
    turns: Vec<JsonTurn>,
}

/// JSON-serializable player result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerResult {
    /// Player symbol.
    symbol: char,
    /// Figures entered after the first.
    figures_entered: u32,
    /// Successful moves.
    moves: u32,
    /// Opposing figures captured.
    captures: u32,
    /// Own figures lost.
    figures_lost: u32,
    /// Figures home at the end.
    figures_home: u32,
}

impl JsonGameResult {
    /// Create from a `GameResult` and its turn log.
    pub(super) fn from_game_result(result: &GameResult, turns: Vec<JsonTurn>) -> Self {
        Self {
            seed: result.seed,
            winner: winner_symbol(result),
            turns_played: result.turns_played,
            players: result
                .player_stats
                .iter()
                .map(|ps| JsonPlayerResult {
                    symbol: ps.symbol,
                    figures_entered: ps.figures_entered,
                    moves: ps.moves,
                    captures: ps.captures,
                    figures_lost: ps.figures_lost,
                    figures_home: ps.figures_home,
                })
                .collect(),
            turns,
        }
    }
}

/// Symbol of the winning player, if any.
fn winner_symbol(result: &GameResult) -> Option<char> {
    let winner = result.winner?;
    result
        .player_stats
        .get(usize::from(winner))
        .map(|ps| ps.symbol)
}

/// Describe a single turn as one line of text.
pub(super) fn format_turn(report: &TurnReport, board: &Board) -> String {
    let player = report.symbol;
    let roll = report.roll;
    let mut line = format!("Player {player} rolled {roll}: ");
    match report.outcome {
        TurnOutcome::Entered { .. } => line.push_str("entered a new figure"),
        TurnOutcome::Moved {
            from, to, captured, ..
        } => {
            line.push_str(&format!("moved {from} -> {to}"));
            if let Some(owner) = captured.and_then(|victim| board.player(victim.owner)) {
                line.push_str(&format!(", captured a figure of player {}", owner.symbol));
            }
        }
        TurnOutcome::Blocked { .. } => {
            line.push_str(&format!("skips, cannot move {roll}"));
        }
        TurnOutcome::Skipped => line.push_str("skips, no active figure outside home"),
    }
    if report.finished {
        line.push_str(&format!("\nPlayer {player} wins the game"));
    }
    line
}

/// Format a game result as human-readable text.
pub(super) fn format_text(result: &GameResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {})\n", result.seed));
    match winner_symbol(result) {
        Some(symbol) => output.push_str(&format!("  Winner: Player {symbol}\n")),
        None => output.push_str("  Winner: none (turn limit reached)\n"),
    }
    output.push_str(&format!("  Turns: {}\n\n", result.turns_played));

    for stats in &result.player_stats {
        output.push_str(&format!(
            "  Player {}: {} home, {} captures, {} lost, {} entered\n",
            stats.symbol,
            stats.figures_home,
            stats.captures,
            stats.figures_lost,
            stats.figures_entered
        ));
    }

    output
}

/// Tournament statistics for aggregated results.
#[derive(Debug, Default)]
pub(super) struct TournamentStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Win count per player.
    pub(super) wins: Vec<u64>,
    /// Games that hit the turn limit.
    pub(super) unfinished: u64,
    /// Total captures per player.
    captures: Vec<u64>,
    /// Total turns across all games.
    total_turns: u64,
    /// Turn sum of squares for std dev calculation.
    turn_sq_sum: f64,
}

impl TournamentStats {
    /// Create new stats for n players.
    pub(super) fn new(num_players: usize) -> Self {
        Self {
            games_played: 0,
            wins: vec![0; num_players],
            unfinished: 0,
            captures: vec![0; num_players],
            total_turns: 0,
            turn_sq_sum: 0.0,
        }
    }

    /// Add a game result to the stats.
    pub(super) fn add_result(&mut self, result: &GameResult) {
        self.games_played += 1;
        self.total_turns += u64::from(result.turns_played);
        self.turn_sq_sum += f64::from(result.turns_played) * f64::from(result.turns_played);

        if let Some(winner) = result.winner {
            if let Some(wins) = self.wins.get_mut(usize::from(winner)) {
                *wins += 1;
            }
        } else {
            self.unfinished += 1;
        }

        for (i, stats) in result.player_stats.iter().enumerate() {
            if let Some(captures) = self.captures.get_mut(i) {
                *captures += u64::from(stats.captures);
            }
        }
    }

    /// Merge another partial result into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.unfinished += other.unfinished;
        self.total_turns += other.total_turns;
        self.turn_sq_sum += other.turn_sq_sum;
        for (a, b) in self.wins.iter_mut().zip(&other.wins) {
            *a += b;
        }
        for (a, b) in self.captures.iter_mut().zip(&other.captures) {
            *a += b;
        }
    }

    /// Get win rate for a player (0.0-1.0).
    pub(super) fn win_rate(&self, player_idx: usize) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins.get(player_idx).copied().unwrap_or(0) as f64 / self.games_played as f64
    }

    /// Get average captures per game for a player.
    pub(super) fn avg_captures(&self, player_idx: usize) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.captures.get(player_idx).copied().unwrap_or(0) as f64 / self.games_played as f64
    }

    /// Get average game length.
    pub(super) fn avg_turns(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games_played as f64
    }

    /// Get game length standard deviation.
    pub(super) fn turns_std_dev(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let n = self.games_played as f64;
        let mean = self.avg_turns();
        let variance = (self.turn_sq_sum / n) - (mean * mean);
        if variance < 0.0 { 0.0 } else { variance.sqrt() }
    }
}

/// JSON-serializable tournament result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentResult {
    /// Total games played.
    games_played: u64,
    /// Per-player statistics.
    players: Vec<JsonTournamentPlayer>,
    /// Games that hit the turn limit.
    unfinished: u64,
    /// Average game length in turns.
    avg_turns: f64,
    /// Game length standard deviation.
    turns_std_dev: f64,
}

/// JSON-serializable per-player tournament stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentPlayer {
    /// Player symbol.
    symbol: char,
    /// Number of wins.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
    /// Average captures per game.
    avg_captures: f64,
}

impl JsonTournamentResult {
    /// Create from stats and player symbols.
    pub(super) fn from_stats(stats: &TournamentStats, symbols: &[char]) -> Self {
        let players = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| JsonTournamentPlayer {
                symbol,
                wins: stats.wins.get(i).copied().unwrap_or(0),
                win_rate: stats.win_rate(i),
                avg_captures: stats.avg_captures(i),
            })
            .collect();

        Self {
            games_played: stats.games_played,
            players,
            unfinished: stats.unfinished,
            avg_turns: stats.avg_turns(),
            turns_std_dev: stats.turns_std_dev(),
        }
    }
}

/// Format tournament stats as human-readable text.
pub(super) fn format_tournament_text(stats: &TournamentStats, symbols: &[char]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tournament Results ({} games)\n", stats.games_played));
    output.push_str("========================================\n\n");

    output.push_str("Win Rates:\n");
    for (i, symbol) in symbols.iter().enumerate() {
        let wins = stats.wins.get(i).copied().unwrap_or(0);
        let rate = stats.win_rate(i) * 100.0;
        output.push_str(&format!("  Player {symbol}: {rate:.1}% ({wins} wins)\n"));
    }
    let unfinished_rate = if stats.games_played == 0 {
        0.0
    } else {
        stats.unfinished as f64 / stats.games_played as f64 * 100.0
    };
    output.push_str(&format!(
        "  Unfinished: {} ({unfinished_rate:.1}%)\n\n",
        stats.unfinished
    ));

    output.push_str("Average Captures per Game:\n");
    for (i, symbol) in symbols.iter().enumerate() {
        output.push_str(&format!("  Player {symbol}: {:.2}\n", stats.avg_captures(i)));
    }

    output.push_str(&format!(
        "\nAverage Game Length: {:.0} turns (+/- {:.0})\n",
        stats.avg_turns(),
        stats.turns_std_dev()
    ));

    output
}

/// Format tournament stats as CSV.
pub(super) fn format_tournament_csv(stats: &TournamentStats, symbols: &[char]) -> String {
    let mut output = String::new();

    // Header
    output.push_str("player,wins,win_rate,avg_captures\n");

    // Data rows
    for (i, symbol) in symbols.iter().enumerate() {
        output.push_str(&format!(
            "{},{},{:.4},{:.2}\n",
            symbol,
            stats.wins.get(i).copied().unwrap_or(0),
            stats.win_rate(i),
            stats.avg_captures(i)
        ));
    }

    output
}
