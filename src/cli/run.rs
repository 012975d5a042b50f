//! Run command implementation.

use super::output::{format_text, format_turn, JsonGameResult, JsonTurn};
use super::{CliError, OutputFormat};
use crosstrack::tournament::run_game_with_dice;
use crosstrack::{render_text, GameConfig, RandomDice};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration cannot produce a game.
pub(crate) fn execute(
    config: GameConfig,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(rand::random::<u64>);
    let verbose = format == OutputFormat::Text && !quiet;

    if verbose {
        println!("Running game with seed {seed}...");
        println!(
            "Board: {0}x{0}, {1} players",
            config.size, config.players
        );
        println!();
        print!("{}", render_text(&config.build_board()?));
    }

    let mut turns = Vec::new();
    let mut dice = RandomDice::seeded(seed);
    let result = run_game_with_dice(seed, &mut dice, &config, |report, board| match format {
        OutputFormat::Text if verbose => {
            println!("{}", format_turn(report, board));
            print!("{}", render_text(board));
            println!("-----------------------");
        }
        OutputFormat::Text => {}
        OutputFormat::Json => turns.push(JsonTurn::from_report(report, board)),
    })?;

    // Output based on format
    match format {
        OutputFormat::Text => {
            if verbose {
                println!();
            }
            print!("{}", format_text(&result));
        }
        OutputFormat::Json => {
            let json_result = JsonGameResult::from_game_result(&result, turns);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}
