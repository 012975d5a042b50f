//! Plain text rendering of a board.

use std::fmt;

use crate::game::{Board, Coord};

/// Render the board as a text grid.
///
/// Output format for a fresh 5×5 two-player board:
/// ```text
///   0 1 2 3 4
/// 0   * * A
/// 1 * * D * *
/// 2 * D X D *
/// 3 * * D * *
/// 4   B * *
/// ```
///
/// Columns and rows are labelled with the last digit of their index. Each
/// cell shows the symbol of the figure standing on it, or the glyph of its
/// kind.
#[must_use]
pub fn render_text(board: &Board) -> String {
    TextBoard(board).to_string()
}

/// Display adapter drawing a board as text.
#[derive(Debug, Clone, Copy)]
struct TextBoard<'a>(&'a Board);

impl fmt::Display for TextBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let size = board.size();

        write!(f, " ")?;
        for x in 0..size {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)?;

        for y in 0..size {
            write!(f, "{}", y % 10)?;
            for x in 0..size {
                let coord = Coord::new(x, y);
                let glyph = board
                    .figure_at(coord)
                    .map_or_else(|| board.cell(coord).glyph(), |(figure, _)| figure.symbol());
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
