//! Player state management.

use crate::game::{Board, Coord, Figure, FigureId, Geometry};

/// Unique identifier for a player (its join index).
pub type PlayerId = u8;

/// State for a single player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Single-character identity, unique among players.
    pub symbol: char,
    /// Track coordinate where new figures enter.
    pub entry: Coord,
    /// Figures currently on the board, in insertion order.
    figures: Vec<Figure>,
    /// Serial for the next figure added, `None` once exhausted.
    next_serial: Option<u16>,
}

impl Player {
    /// Create a new player with no figures.
    #[must_use]
    pub const fn new(id: PlayerId, symbol: char, entry: Coord) -> Self {
        Self {
            id,
            symbol,
            entry,
            figures: Vec::new(),
            next_serial: Some(0),
        }
    }

    /// Figures owned by this player.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Enter a new figure on the player's entry coordinate.
    ///
    /// The entry rule (rolling the entry value with spare capacity) is up to
    /// the caller. Returns `None` once every serial has been handed out.
    pub fn add_figure(&mut self) -> Option<FigureId> {
        let serial = self.next_serial?;
        let id = FigureId::new(self.id, serial);
        self.next_serial = serial.checked_add(1);
        self.figures.push(Figure::new(id, self.entry, self.symbol));
        Some(id)
    }

    /// Remove a figure, returning it if it was owned by this player.
    pub fn delete_figure(&mut self, id: FigureId) -> Option<Figure> {
        let index = self.figures.iter().position(|f| f.id() == id)?;
        Some(self.figures.remove(index))
    }

    /// Get a figure by id.
    #[must_use]
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id() == id)
    }

    /// Get a mutable reference to a figure by id.
    pub(crate) fn figure_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|f| f.id() == id)
    }

    /// First figure of this player standing on `coord`.
    #[must_use]
    pub fn figure_at(&self, coord: Coord) -> Option<&Figure> {
        self.figures.iter().find(|f| f.position() == coord)
    }

    /// Check if every owned figure stands in a home lane.
    #[must_use]
    pub fn figures_home(&self, geometry: &Geometry) -> bool {
        self.figures.iter().all(|f| f.is_home(geometry))
    }

    /// Figures usable this turn.
    ///
    /// A figure on the track is always active. A figure in its home lane is
    /// active only while it can still step further inward.
    pub fn active_figures<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a Figure> {
        self.figures
            .iter()
            .filter(move |f| !f.is_home(board.geometry()) || f.destination(board, 1).is_some())
    }

    /// Check if the player has won.
    ///
    /// All `max_figures` figures must be on the board and home; a player
    /// with fewer figures has not finished even if all of them are home.
    #[must_use]
    pub fn has_finished(&self, board: &Board) -> bool {
        self.figures.len() == board.max_figures() && self.figures_home(board.geometry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(1, 'B', Coord::new(3, 8));
        assert_eq!(player.id, 1);
        assert_eq!(player.symbol, 'B');
        assert!(player.figures().is_empty());
    }

    #[test]
    fn test_add_and_delete_figure() {
        let mut player = Player::new(0, 'A', Coord::new(5, 0));
        let first = player.add_figure().unwrap();
        let second = player.add_figure().unwrap();
        assert_ne!(first, second);
        assert_eq!(player.figures().len(), 2);
        assert_eq!(player.figure(first).unwrap().position(), Coord::new(5, 0));

        let removed = player.delete_figure(first).unwrap();
        assert_eq!(removed.id(), first);
        assert_eq!(player.figures().len(), 1);
        assert!(player.delete_figure(first).is_none());

        // Serials are never reused.
        let third = player.add_figure().unwrap();
        assert_ne!(third, first);
        assert_ne!(third, second);
    }

    #[test]
    fn test_figure_at() {
        let mut player = Player::new(0, 'A', Coord::new(5, 0));
        let id = player.add_figure().unwrap();
        assert_eq!(player.figure_at(Coord::new(5, 0)).map(Figure::id), Some(id));
        assert!(player.figure_at(Coord::new(5, 1)).is_none());
    }

    #[test]
    fn test_serials_run_out_instead_of_wrapping() {
        let mut player = Player::new(0, 'A', Coord::new(5, 0));
        let first = player.add_figure().unwrap();
        player.delete_figure(first).unwrap();

        player.next_serial = Some(u16::MAX);
        let last = player.add_figure().unwrap();
        assert_eq!(last.serial, u16::MAX);
        assert_eq!(player.add_figure(), None);
        assert_eq!(player.add_figure(), None);
        assert_eq!(player.figures().len(), 1);
        assert!(player.figure(first).is_none());
    }

    #[test]
    fn test_active_figures_excludes_lane_end() {
        let mut board = Board::new(9).unwrap();
        let a = board.add_player(None).unwrap();
        board.add_player(None).unwrap();

        let first = FigureId::new(a, 0);
        board.move_figure(first, Coord::new(4, 3));
        let player = board.player(a).unwrap();
        assert_eq!(player.active_figures(&board).count(), 0);

        // A figure partway down the lane can still move inward.
        board.move_figure(first, Coord::new(4, 1));
        let player = board.player(a).unwrap();
        assert_eq!(player.active_figures(&board).count(), 1);
    }

    #[test]
    fn test_has_finished_requires_all_figures() {
        let mut board = Board::new(9).unwrap();
        let a = board.add_player(None).unwrap();
        board.add_player(None).unwrap();

        board.move_figure(FigureId::new(a, 0), Coord::new(4, 3));
        assert!(board.player(a).unwrap().figures_home(board.geometry()));
        assert!(!board.player(a).unwrap().has_finished(&board));

        let second = board.add_figure(a).unwrap();
        board.move_figure(second, Coord::new(4, 2));
        let third = board.add_figure(a).unwrap();
        assert!(!board.player(a).unwrap().has_finished(&board));

        board.move_figure(third, Coord::new(4, 1));
        assert!(board.player(a).unwrap().has_finished(&board));
    }
}
