//! Crosstrack CLI - Command-line interface for running Crosstrack games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use crosstrack::GameConfig;
use std::process::ExitCode;

/// Crosstrack - A cross-shaped track-and-home board game simulator
#[derive(Parser, Debug)]
#[command(name = "crosstrack")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Board options shared by the game commands
#[derive(clap::Args, Debug, Clone, Copy)]
struct BoardArgs {
    /// Board size, odd and at least 5 (default: 9)
    #[arg(short = 'n', long, default_value = "9")]
    size: u16,

    /// Number of players (default: 2)
    #[arg(short = 'p', long, default_value = "2")]
    players: usize,

    /// Seat layout: two or four
    #[arg(long, default_value = "two")]
    seats: cli::Seats,

    /// Maximum turns before a game is abandoned (default: 10000)
    #[arg(short = 't', long, default_value = "10000")]
    max_turns: u32,
}

impl From<BoardArgs> for GameConfig {
    fn from(args: BoardArgs) -> Self {
        Self {
            size: args.size,
            layout: args.seats.into(),
            players: args.players,
            max_turns: args.max_turns,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an empty board and its seats
    Board {
        /// Board size, odd and at least 5 (default: 9)
        #[arg(short = 'n', long, default_value = "9")]
        size: u16,

        /// Seat layout: two or four
        #[arg(long, default_value = "two")]
        seats: cli::Seats,
    },

    /// Play a single game
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run many seeded games in parallel and aggregate statistics
    Tournament {
        #[command(flatten)]
        board: BoardArgs,

        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::TournamentFormat,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Board { size, seats } => cli::board::execute(size, seats),

        Commands::Run {
            board,
            seed,
            format,
            quiet,
        } => cli::run::execute(board.into(), seed, format, quiet),

        Commands::Tournament {
            board,
            games,
            seed,
            threads,
            format,
            progress,
        } => cli::tournament::execute(board.into(), games, seed, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
