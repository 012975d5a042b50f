//! Figures: the movable tokens owned by players.

use std::fmt;

use crate::game::{Board, CellKind, Coord, Geometry, PlayerId};

/// Unique identifier for a figure.
///
/// Serials are assigned per player and never reused, so a captured figure's
/// id never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId {
    /// Owning player.
    pub owner: PlayerId,
    /// Serial number within the owner's figures.
    pub serial: u16,
}

impl FigureId {
    /// Create a new figure id.
    #[must_use]
    pub const fn new(owner: PlayerId, serial: u16) -> Self {
        Self { owner, serial }
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}#{}", self.owner, self.serial)
    }
}

/// A token on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    id: FigureId,
    start: Coord,
    position: Coord,
    symbol: char,
}

impl Figure {
    /// Create a figure standing on its entry coordinate.
    #[must_use]
    pub const fn new(id: FigureId, start: Coord, symbol: char) -> Self {
        Self {
            id,
            start,
            position: start,
            symbol,
        }
    }

    /// Identifier of this figure.
    #[must_use]
    pub const fn id(&self) -> FigureId {
        self.id
    }

    /// Entry coordinate the figure started from.
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Current coordinate.
    #[must_use]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Display symbol, inherited from the owner.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Check if the figure stands in a home lane.
    #[must_use]
    pub const fn is_home(&self, geometry: &Geometry) -> bool {
        matches!(geometry.classify(self.position), CellKind::Home)
    }

    /// Where `steps` single steps would take this figure.
    ///
    /// Reaching the figure's own entry coordinate again diverts it into the
    /// home lane of that entry instead of starting a second lap. Returns
    /// `None` if the track runs out (the lane end is overshot) or if the
    /// destination is a home cell that is already occupied. An occupied
    /// track cell is a legal destination; the caller resolves the capture.
    #[must_use]
    pub fn destination(&self, board: &Board, steps: u8) -> Option<Coord> {
        let geometry = board.geometry();
        let mut position = self.position;

        for _ in 0..steps {
            position = geometry.advance(position)?;
            if position == self.start {
                position = geometry.home_entry(position)?;
            }
        }

        if geometry.classify(position) == CellKind::Home && board.figure_at(position).is_some() {
            return None;
        }
        Some(position)
    }

    /// Place the figure on a new coordinate.
    pub(crate) fn move_to(&mut self, position: Coord) {
        self.position = position;
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
