/// One cell of the board. Player and crate markers are folded into the cell
/// kind, so a single grid holds the whole game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Storage,
    Crate,
    CrateOnStorage,
    Man,
    ManOnStorage,
}

/// Grid position or offset. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A decoded request from whoever is driving the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Move(Direction),
    Quit,
    /// Input the decoder did not recognise, kept in printable form.
    Unknown(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Blocked,
    Walked,
    Pushed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Complete,
}

/// What a single intent did to the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Walked,
    Pushed,
    Blocked,
    /// The move that put the last crate on storage.
    Completed,
    /// A move arrived after the game was already over.
    Ignored,
    Quit,
    Unknown(String),
}
