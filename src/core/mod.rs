mod board;
mod bounded_grid;
mod error;
mod game;
mod model_helpers;
mod models;
mod update;

pub use board::Board;
pub use error::BoardError;
pub use game::Game;
pub use models::{Coordinate, Direction, GameEvent, GameStatus, Intent, MoveOutcome, Tile};
