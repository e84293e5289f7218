use tracing::{debug, error, instrument};

use crate::core::board::Board;
use crate::core::models::{Coordinate, MoveOutcome, Tile};

impl Board {
    /// Whether the player may step by `direction`.
    ///
    /// Looks at most two cells ahead: the step is refused by a wall or the
    /// grid edge directly ahead, or by a crate that cannot itself go one
    /// further cell in the same direction.
    pub fn can_move(&self, direction: Coordinate) -> bool {
        let origin = match self.locate_player() {
            Ok(origin) => origin,
            Err(err) => {
                error!(%err, "cannot check move");
                return false;
            }
        };
        let dest = origin.add(direction);
        let beyond = dest.add(direction);

        let Some(dest_tile) = self.tile_at(dest) else {
            return false;
        };
        if dest_tile.blocks_movement() {
            return false;
        }
        if dest_tile.is_crate_like() {
            return match self.tile_at(beyond) {
                None => false,
                Some(beyond_tile) => !(beyond_tile.blocks_movement() || beyond_tile.is_crate_like()),
            };
        }
        true
    }

    /// Moves the player by `direction`, pushing a crate if one is in the way.
    ///
    /// Origin, destination and the cell beyond are all computed from their
    /// values before the move and only then written. A move that `can_move`
    /// rejects leaves the board untouched and reports `Blocked`.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, direction: Coordinate) -> MoveOutcome {
        if !self.can_move(direction) {
            debug!("move blocked");
            return MoveOutcome::Blocked;
        }
        let Ok(origin) = self.locate_player() else {
            return MoveOutcome::Blocked;
        };
        let dest = origin.add(direction);
        let beyond = dest.add(direction);

        let (Some(origin_before), Some(dest_before)) = (self.tile_at(origin), self.tile_at(dest)) else {
            return MoveOutcome::Blocked;
        };
        let beyond_before = self.tile_at(beyond);
        let pushing = dest_before.is_crate_like();

        let origin_after = origin_before.vacated_by_player();
        let dest_after = dest_before.entered_by_player();
        let beyond_after = match beyond_before {
            Some(tile) if pushing => Some(tile.entered_by_crate()),
            other => other,
        };

        self.set_tile(origin, origin_after);
        self.set_tile(dest, dest_after);
        if let Some(tile) = beyond_after {
            self.set_tile(beyond, tile);
        }

        if pushing {
            debug!(?origin, ?dest, crate_to = ?beyond, "pushed crate");
            MoveOutcome::Pushed
        } else {
            debug!(?origin, ?dest, "walked");
            MoveOutcome::Walked
        }
    }

    fn set_tile(&mut self, pos: Coordinate, tile: Tile) {
        if let Some(cell) = self.grid.get_mut(&pos) {
            *cell = tile;
        }
    }
}
