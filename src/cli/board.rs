//! Board command implementation.

use super::{CliError, Seats};
use crosstrack::{render_text, Board};

/// Execute the board command: print an empty board with its seats.
///
/// # Errors
///
/// Returns an error if the board size is invalid.
pub(crate) fn execute(size: u16, seats: Seats) -> Result<(), CliError> {
    let board = Board::with_layout(size, seats.into())?;
    let geometry = board.geometry();

    print!("{}", render_text(&board));
    println!();
    println!("Track length: {} cells", geometry.track_len());
    println!("Home lane length: {} cells", geometry.home_lane_len());
    println!("Figures per player: {}", board.max_figures());
    for (i, seat) in board.seats().iter().enumerate() {
        println!("Seat {}: entry at {seat}", i + 1);
    }

    Ok(())
}
