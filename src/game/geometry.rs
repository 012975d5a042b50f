//! Board geometry: cell classification and single-step movement.
//!
//! The board is an N×N grid (N odd, at least 5) holding a plus-shaped track.
//! With `m = N / 2`:
//!
//! ```text
//!     0 1 2 3 4 5 6 7 8
//!   0       * * *
//!   1       * D *
//!   2       * D *
//!   3 * * * * D * * * *
//!   4 * D D D X D D D *
//!   5 * * * * D * * * *
//!   6       * D *
//!   7       * D *
//!   8       * * *
//! ```
//!
//! The track is never stored as a list. Movement is reconstructed from the
//! classification, so `classify` is the single source of truth.

use std::fmt;

use crate::error::{BoardError, BoardResult};

/// Smallest board size that still has home lanes.
pub const MIN_SIZE: u16 = 5;

/// A coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Classification of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    /// Corner block, not part of play.
    Empty = 0,
    /// The center cell, never occupied.
    Wall = 1,
    /// Part of the circular outer track.
    Path = 2,
    /// Part of a home lane leading to the center.
    Home = 3,
}

impl CellKind {
    /// Glyph used when rendering an unoccupied cell.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::Wall => 'X',
            CellKind::Path => '*',
            CellKind::Home => 'D',
        }
    }

    /// Check if a figure may rest on this cell.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, CellKind::Path | CellKind::Home)
    }
}

/// Pure geometry of a board of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    size: u16,
}

impl Geometry {
    /// Create the geometry for an N×N board.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is even or smaller than [`MIN_SIZE`].
    pub const fn new(size: u16) -> BoardResult<Self> {
        if size % 2 == 0 {
            return Err(BoardError::EvenSize(size));
        }
        if size < MIN_SIZE {
            return Err(BoardError::TooSmall(size));
        }
        Ok(Self { size })
    }

    /// Board side length.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Index of the middle row and column.
    #[must_use]
    pub const fn mid(&self) -> u16 {
        self.size / 2
    }

    /// The wall cell at the center of the board.
    #[must_use]
    pub const fn center(&self) -> Coord {
        Coord::new(self.mid(), self.mid())
    }

    /// Number of cells in the closed track.
    #[must_use]
    pub const fn track_len(&self) -> usize {
        4 * self.size as usize - 4
    }

    /// Number of cells in each home lane.
    #[must_use]
    pub const fn home_lane_len(&self) -> usize {
        (self.size as usize - 3) / 2
    }

    /// Check if a coordinate is within the board.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Check if a coordinate touches the outer edge of the board.
    #[must_use]
    pub const fn is_edge(&self, coord: Coord) -> bool {
        let last = self.size - 1;
        coord.x == 0 || coord.y == 0 || coord.x == last || coord.y == last
    }

    /// Classify a cell. Coordinates off the board are [`CellKind::Empty`].
    #[must_use]
    pub const fn classify(&self, coord: Coord) -> CellKind {
        if !self.in_bounds(coord) {
            return CellKind::Empty;
        }
        let m = self.mid();
        let Coord { x, y } = coord;

        if x == m || y == m {
            if x == y {
                CellKind::Wall
            } else if self.is_edge(coord) {
                CellKind::Path
            } else {
                CellKind::Home
            }
        } else if (x < m - 1 || x > m + 1) && (y < m - 1 || y > m + 1) {
            CellKind::Empty
        } else {
            CellKind::Path
        }
    }

    /// The next cell one step along the track or down a home lane.
    ///
    /// Track cells move clockwise around the cross. Home cells move one
    /// cell inward; the innermost home cell has no successor. Returns `None`
    /// for cells that are not playable.
    #[must_use]
    pub fn advance(&self, coord: Coord) -> Option<Coord> {
        match self.classify(coord) {
            CellKind::Path => self.track_step(coord),
            CellKind::Home => self.lane_step(coord),
            CellKind::Empty | CellKind::Wall => None,
        }
    }

    /// First cell of the home lane belonging to an edge coordinate.
    ///
    /// Returns `None` if `coord` is not on the outer edge.
    #[must_use]
    pub const fn home_entry(&self, coord: Coord) -> Option<Coord> {
        if !self.in_bounds(coord) {
            return None;
        }
        let m = self.mid();
        let last = self.size - 1;

        if coord.x == 0 {
            Some(Coord::new(1, m))
        } else if coord.x == last {
            Some(Coord::new(last - 1, m))
        } else if coord.y == 0 {
            Some(Coord::new(m, 1))
        } else if coord.y == last {
            Some(Coord::new(m, last - 1))
        } else {
            None
        }
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }

    /// One clockwise step on the track.
    ///
    /// The column move of the quadrant (up on the left half, down on the
    /// right) is preferred; the row move (right on the top half, left on the
    /// bottom) is taken when the column move leaves the track.
    fn track_step(&self, coord: Coord) -> Option<Coord> {
        let m = self.mid();
        let last = self.size - 1;
        let Coord { x, y } = coord;

        let vertical = if x < m {
            y.checked_sub(1).map(|y| Coord::new(x, y))
        } else {
            (y < last).then(|| Coord::new(x, y + 1))
        };
        let horizontal = if y < m {
            (x < last).then(|| Coord::new(x + 1, y))
        } else {
            x.checked_sub(1).map(|x| Coord::new(x, y))
        };

        vertical
            .into_iter()
            .chain(horizontal)
            .find(|&next| self.classify(next) == CellKind::Path)
    }

    /// One step inward along a home lane.
    fn lane_step(&self, coord: Coord) -> Option<Coord> {
        let m = self.mid();
        let Coord { x, y } = coord;

        let next = if x == m {
            if y < m { Coord::new(x, y + 1) } else { Coord::new(x, y - 1) }
        } else if x < m {
            Coord::new(x + 1, y)
        } else {
            Coord::new(x - 1, y)
        };

        (self.classify(next) == CellKind::Home).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine() -> Geometry {
        Geometry::new(9).unwrap()
    }

    #[test]
    fn test_geometry_rejects_bad_sizes() {
        assert_eq!(Geometry::new(8), Err(BoardError::EvenSize(8)));
        assert_eq!(Geometry::new(3), Err(BoardError::TooSmall(3)));
        assert_eq!(Geometry::new(1), Err(BoardError::TooSmall(1)));
        assert!(Geometry::new(5).is_ok());
    }

    #[test]
    fn test_classify_nine() {
        let g = nine();
        assert_eq!(g.classify(Coord::new(4, 4)), CellKind::Wall);
        assert_eq!(g.classify(Coord::new(4, 0)), CellKind::Path);
        assert_eq!(g.classify(Coord::new(0, 4)), CellKind::Path);
        assert_eq!(g.classify(Coord::new(4, 1)), CellKind::Home);
        assert_eq!(g.classify(Coord::new(7, 4)), CellKind::Home);
        assert_eq!(g.classify(Coord::new(0, 0)), CellKind::Empty);
        assert_eq!(g.classify(Coord::new(2, 2)), CellKind::Empty);
        assert_eq!(g.classify(Coord::new(3, 3)), CellKind::Path);
        assert_eq!(g.classify(Coord::new(5, 0)), CellKind::Path);
        assert_eq!(g.classify(Coord::new(8, 3)), CellKind::Path);
    }

    #[test]
    fn test_classify_off_board_is_empty() {
        let g = nine();
        assert_eq!(g.classify(Coord::new(9, 4)), CellKind::Empty);
        assert_eq!(g.classify(Coord::new(4, 100)), CellKind::Empty);
    }

    #[test]
    fn test_advance_clockwise_from_top_entry() {
        let g = nine();
        // Right arm of the top: down the column, then along the row.
        assert_eq!(g.advance(Coord::new(5, 0)), Some(Coord::new(5, 1)));
        assert_eq!(g.advance(Coord::new(5, 3)), Some(Coord::new(6, 3)));
        assert_eq!(g.advance(Coord::new(8, 3)), Some(Coord::new(8, 4)));
        assert_eq!(g.advance(Coord::new(8, 5)), Some(Coord::new(7, 5)));
        assert_eq!(g.advance(Coord::new(3, 0)), Some(Coord::new(4, 0)));
        // Tip never turns into its own lane.
        assert_eq!(g.advance(Coord::new(4, 0)), Some(Coord::new(5, 0)));
    }

    #[test]
    fn test_advance_home_lanes_move_inward() {
        let g = nine();
        assert_eq!(g.advance(Coord::new(4, 1)), Some(Coord::new(4, 2)));
        assert_eq!(g.advance(Coord::new(4, 3)), None);
        assert_eq!(g.advance(Coord::new(4, 7)), Some(Coord::new(4, 6)));
        assert_eq!(g.advance(Coord::new(4, 5)), None);
        assert_eq!(g.advance(Coord::new(1, 4)), Some(Coord::new(2, 4)));
        assert_eq!(g.advance(Coord::new(3, 4)), None);
        assert_eq!(g.advance(Coord::new(7, 4)), Some(Coord::new(6, 4)));
        assert_eq!(g.advance(Coord::new(5, 4)), None);
    }

    #[test]
    fn test_advance_unplayable() {
        let g = nine();
        assert_eq!(g.advance(Coord::new(4, 4)), None);
        assert_eq!(g.advance(Coord::new(0, 0)), None);
    }

    #[test]
    fn test_home_entry() {
        let g = nine();
        assert_eq!(g.home_entry(Coord::new(5, 0)), Some(Coord::new(4, 1)));
        assert_eq!(g.home_entry(Coord::new(3, 8)), Some(Coord::new(4, 7)));
        assert_eq!(g.home_entry(Coord::new(0, 3)), Some(Coord::new(1, 4)));
        assert_eq!(g.home_entry(Coord::new(8, 5)), Some(Coord::new(7, 4)));
        assert_eq!(g.home_entry(Coord::new(3, 3)), None);
    }

    #[test]
    fn test_track_is_closed_loop() {
        for size in [5u16, 7, 9, 11, 15] {
            let g = Geometry::new(size).unwrap();
            let start = Coord::new(g.mid() + 1, 0);
            let mut pos = start;
            for step in 1..=g.track_len() {
                pos = g.advance(pos).unwrap();
                assert_eq!(g.classify(pos), CellKind::Path);
                if step < g.track_len() {
                    assert_ne!(pos, start, "loop closed early at step {step} for N={size}");
                }
            }
            assert_eq!(pos, start);
        }
    }

    #[test]
    fn test_lengths() {
        let g = nine();
        assert_eq!(g.track_len(), 32);
        assert_eq!(g.home_lane_len(), 3);
        assert_eq!(g.center(), Coord::new(4, 4));
        assert_eq!(g.coords().count(), 81);
    }

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(CellKind::Empty.glyph(), ' ');
        assert_eq!(CellKind::Wall.glyph(), 'X');
        assert_eq!(CellKind::Path.glyph(), '*');
        assert_eq!(CellKind::Home.glyph(), 'D');
        assert!(CellKind::Home.is_playable());
        assert!(!CellKind::Wall.is_playable());
    }
}
