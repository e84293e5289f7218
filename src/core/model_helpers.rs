use crate::core::models::Tile::{
    Crate, CrateOnStorage, Floor, Man, ManOnStorage, Storage, Wall,
};
use crate::core::models::{Coordinate, Direction, Tile};

impl Tile {
    pub const ALL: [Tile; 7] = [Wall, Floor, Storage, Crate, CrateOnStorage, Man, ManOnStorage];

    pub fn is_crate_like(self) -> bool {
        match self {
            Crate | CrateOnStorage => true,
            Wall | Floor | Storage | Man | ManOnStorage => false,
        }
    }

    pub fn is_storage_like(self) -> bool {
        match self {
            Storage | CrateOnStorage | ManOnStorage => true,
            Wall | Floor | Crate | Man => false,
        }
    }

    pub fn is_player(self) -> bool {
        match self {
            Man | ManOnStorage => true,
            Wall | Floor | Storage | Crate | CrateOnStorage => false,
        }
    }

    pub fn blocks_movement(self) -> bool {
        match self {
            Wall => true,
            Floor | Storage | Crate | CrateOnStorage | Man | ManOnStorage => false,
        }
    }

    /// What is left behind once the player steps off this cell.
    pub fn vacated_by_player(self) -> Tile {
        match self {
            ManOnStorage => Storage,
            Man | Wall | Floor | Storage | Crate | CrateOnStorage => Floor,
        }
    }

    /// The cell after the player steps onto it, pushing out any crate.
    pub fn entered_by_player(self) -> Tile {
        match self {
            Storage | CrateOnStorage => ManOnStorage,
            Wall | Floor | Crate | Man | ManOnStorage => Man,
        }
    }

    /// The cell after a pushed crate comes to rest on it.
    pub fn entered_by_crate(self) -> Tile {
        match self {
            Storage => CrateOnStorage,
            Wall | Floor | Crate | CrateOnStorage | Man | ManOnStorage => Crate,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Wall => '#',
            Floor => ' ',
            Storage => '.',
            Crate => 'o',
            CrateOnStorage => '*',
            Man => '@',
            ManOnStorage => '+',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Tile> {
        Tile::ALL.into_iter().find(|tile| tile.symbol() == symbol)
    }
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Component-wise sum. Saturates instead of overflowing; a saturated
    /// component is outside every grid.
    pub const fn add(self, other: Coordinate) -> Coordinate {
        Coordinate {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

impl Direction {
    pub fn delta(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::new(0, -1),
            Direction::Down => Coordinate::new(0, 1),
            Direction::Left => Coordinate::new(-1, 0),
            Direction::Right => Coordinate::new(1, 0),
        }
    }
}
