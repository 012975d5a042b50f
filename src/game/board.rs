//! The board: cell grid, seats, players and capture resolution.

use crate::error::{BoardError, BoardResult};
use crate::game::{CellKind, Coord, Figure, FigureId, Geometry, Player, PlayerId};

/// Which starting coordinates a board offers, in join order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatLayout {
    /// Top and bottom entries (the reference configuration).
    #[default]
    TwoPlayer,
    /// Top, bottom, right and left entries.
    FourPlayer,
}

impl SeatLayout {
    /// Number of seats in this layout.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            SeatLayout::TwoPlayer => 2,
            SeatLayout::FourPlayer => 4,
        }
    }

    /// Entry coordinates for a board geometry.
    ///
    /// Each entry is the track cell right after an arm tip, so a figure
    /// covers the whole lap before coming back to it.
    #[must_use]
    pub fn seats(self, geometry: &Geometry) -> Vec<Coord> {
        let m = geometry.mid();
        let last = geometry.size() - 1;
        let mut seats = vec![Coord::new(m + 1, 0), Coord::new(m - 1, last)];
        if self == SeatLayout::FourPlayer {
            seats.push(Coord::new(last, m + 1));
            seats.push(Coord::new(0, m - 1));
        }
        seats
    }
}

/// The game board.
#[derive(Debug, Clone)]
pub struct Board {
    /// Geometry of the board.
    geometry: Geometry,
    /// Cell kinds stored in row-major order.
    cells: Vec<CellKind>,
    /// Entry coordinates handed out in join order.
    seats: Vec<Coord>,
    /// Players in join order.
    players: Vec<Player>,
}

impl Board {
    /// Create a two-player board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is even or below 5.
    pub fn new(size: u16) -> BoardResult<Self> {
        Self::with_layout(size, SeatLayout::TwoPlayer)
    }

    /// Create a board with the given seat layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is even or below 5.
    pub fn with_layout(size: u16, layout: SeatLayout) -> BoardResult<Self> {
        let geometry = Geometry::new(size)?;
        let cells = geometry.coords().map(|c| geometry.classify(c)).collect();

        Ok(Self {
            geometry,
            cells,
            seats: layout.seats(&geometry),
            players: Vec::new(),
        })
    }

    /// Geometry of the board.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.geometry.size()
    }

    /// Most figures a player may have on the board at once.
    #[must_use]
    pub const fn max_figures(&self) -> usize {
        self.geometry.home_lane_len()
    }

    /// Entry coordinates of this board, in join order.
    #[must_use]
    pub fn seats(&self) -> &[Coord] {
        &self.seats
    }

    /// Kind of the cell at `coord`, read from the precomputed grid.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> CellKind {
        if !self.geometry.in_bounds(coord) {
            return CellKind::Empty;
        }
        let idx = usize::from(coord.y) * usize::from(self.size()) + usize::from(coord.x);
        self.cells[idx]
    }

    /// All players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Get a mutable reference to a player by id.
    #[must_use]
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Seat a new player on the next free entry and give them one figure.
    ///
    /// Without a symbol, players are named `A`, `B`, ... by join index.
    ///
    /// # Errors
    ///
    /// Returns an error if all seats are taken or the symbol is in use.
    pub fn add_player(&mut self, symbol: Option<char>) -> BoardResult<PlayerId> {
        let index = self.players.len();
        let Some(&entry) = self.seats.get(index) else {
            return Err(BoardError::NoFreeSeat {
                seats: self.seats.len(),
            });
        };
        let id = PlayerId::try_from(index).map_err(|_| BoardError::NoFreeSeat {
            seats: self.seats.len(),
        })?;

        let symbol = symbol.unwrap_or(char::from(b'A' + id));
        if self.players.iter().any(|p| p.symbol == symbol) {
            return Err(BoardError::DuplicateSymbol(symbol));
        }

        let mut player = Player::new(id, symbol, entry);
        player
            .add_figure()
            .ok_or(BoardError::SerialsExhausted(id))?;
        self.players.push(player);
        Ok(id)
    }

    /// Enter a new figure for a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist or has used up every
    /// figure serial.
    pub fn add_figure(&mut self, player: PlayerId) -> BoardResult<FigureId> {
        self.player_mut(player)
            .ok_or(BoardError::UnknownPlayer(player))?
            .add_figure()
            .ok_or(BoardError::SerialsExhausted(player))
    }

    /// Get a figure by id.
    #[must_use]
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.player(id.owner)?.figure(id)
    }

    /// The figure standing on `coord` and its owner.
    ///
    /// Players are scanned in join order; the first match wins.
    #[must_use]
    pub fn figure_at(&self, coord: Coord) -> Option<(&Figure, &Player)> {
        self.players
            .iter()
            .find_map(|player| player.figure_at(coord).map(|figure| (figure, player)))
    }

    /// Iterate over every figure on the board with its owner.
    pub fn figures(&self) -> impl Iterator<Item = (&Figure, &Player)> {
        self.players
            .iter()
            .flat_map(|player| player.figures().iter().map(move |figure| (figure, player)))
    }

    /// Move a figure to `target`, capturing whatever stands there.
    ///
    /// Any other figure on `target` is removed from its owner and returned.
    /// The mover is then placed unconditionally. Legality is the caller's
    /// concern (see [`Figure::destination`]). Returns `None` and changes
    /// nothing if the mover does not exist.
    pub fn move_figure(&mut self, id: FigureId, target: Coord) -> Option<Figure> {
        self.figure(id)?;

        let victim = self
            .figures()
            .find(|(figure, _)| figure.position() == target && figure.id() != id)
            .map(|(figure, _)| figure.id());
        let captured =
            victim.and_then(|victim| self.player_mut(victim.owner)?.delete_figure(victim));

        if let Some(figure) = self.player_mut(id.owner).and_then(|p| p.figure_mut(id)) {
            figure.move_to(target);
        }
        captured
    }
}
