pub use dissimilar::diff as __diff;
use crate::core::{Board, Direction, Game, GameEvent, Intent};
use crate::level::load_level;

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub fn board_from(level: &str) -> Board {
    match load_level(level) {
        Ok(board) => board,
        Err(err) => panic!("test level failed to load: {}\n{}", err, level),
    }
}

pub struct GameTestState {
    pub game: Game,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        Self {
            game: Game::new(board_from(level)),
        }
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn game_to_string(&self) -> String {
        self.board().to_string()
    }

    pub fn try_move(&mut self, direction: Direction) -> GameEvent {
        self.game.process(Intent::Move(direction))
    }

    /// Moves and fails the test if the move did not change the board.
    pub fn assert_move(&mut self, direction: Direction) -> GameEvent {
        let before = self.game_to_string();
        let event = self.try_move(direction);
        match event {
            GameEvent::Walked | GameEvent::Pushed | GameEvent::Completed => {}
            _ => panic!("Expected {:?} to move, got {:?}, in map\n{}", direction, event, before),
        }
        event
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_blocked(&mut self, direction: Direction) {
        let before = self.game_to_string();
        assert!(
            !self.board().can_move(direction.delta()),
            "Expected {:?} to be blocked in map\n{}",
            direction,
            before
        );
        let event = self.try_move(direction);
        assert_eq!(event, GameEvent::Blocked);
        let after = self.game_to_string();
        assert_eq_text!(before.as_str(), after.as_str());
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
