use std::fmt;

use tracing::{debug, instrument};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::error::BoardError;
use crate::core::models::{Coordinate, Tile};

pub const MIN_ROWS: usize = 3;
pub const MIN_COLUMNS: usize = 3;

/// The playing field. Holds exactly one player from construction onward;
/// only `apply_move` mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(super) grid: BoundedGrid<Tile>,
}

impl Board {
    /// Validates the grid and takes ownership of it.
    ///
    /// Only the minimum size is enforced structurally: ragged rows and open
    /// edges are accepted. The grid must also hold exactly one player.
    #[instrument(level = "debug", skip(rows), fields(rows = rows.len()))]
    pub fn create(rows: Vec<Vec<Tile>>) -> Result<Board, BoardError> {
        if rows.len() < MIN_ROWS {
            return Err(BoardError::validation("too few rows"));
        }
        if rows.iter().any(|row| row.len() < MIN_COLUMNS) {
            return Err(BoardError::validation("too few columns"));
        }

        let board = Board {
            grid: BoundedGrid::new(rows),
        };
        let player = board.locate_player()?;
        debug!(?player, crates = board.crate_count(), "board created");
        Ok(board)
    }

    /// Position of the single player tile.
    pub fn locate_player(&self) -> Result<Coordinate, BoardError> {
        let mut players = self
            .grid
            .iter()
            .filter(|(_, tile)| tile.is_player())
            .map(|(pos, _)| pos);

        match (players.next(), players.next()) {
            (Some(pos), None) => Ok(pos),
            (None, _) => Err(BoardError::invariant("no player tile on the board")),
            (Some(first), Some(second)) => Err(BoardError::invariant(format!(
                "more than one player tile on the board, at {:?} and {:?}",
                first, second
            ))),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.grid.iter().any(|(_, &tile)| tile == Tile::Crate)
    }

    pub fn tile_at(&self, pos: Coordinate) -> Option<Tile> {
        self.grid.get(&pos).copied()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        self.grid.rows()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn count(&self, kind: Tile) -> usize {
        self.grid.iter().filter(|(_, tile)| **tile == kind).count()
    }

    pub fn crate_count(&self) -> usize {
        self.grid.iter().filter(|(_, tile)| tile.is_crate_like()).count()
    }

    pub fn crates_on_storage(&self) -> usize {
        self.count(Tile::CrateOnStorage)
    }

    pub fn player_count(&self) -> usize {
        self.grid.iter().filter(|(_, tile)| tile.is_player()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}
