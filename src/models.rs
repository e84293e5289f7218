use crate::core::{Game, GameEvent, GameStatus};

pub struct GameRenderState<'a> {
    pub game: &'a Game,
    pub message: Option<String>,
}

/// Text for the instructions pane under the board.
pub fn instructions_line(state: &GameRenderState) -> String {
    let board = state.game.board();
    let line = match state.game.status() {
        GameStatus::Playing => format!(
            "Arrow keys or WASD to move, x to quit | Stored {}/{}",
            board.crates_on_storage(),
            board.crate_count()
        ),
        GameStatus::Complete => "Complete! Press any key to exit.".to_string(),
    };
    match &state.message {
        Some(message) => format!("{} | {}", line, message),
        None => line,
    }
}

/// Status line text for an event, if it is worth showing.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Unknown(raw) => Some(format!("Unknown input: {}", raw)),
        GameEvent::Blocked => Some("Can't move that way".to_string()),
        GameEvent::Completed => Some("Complete!".to_string()),
        GameEvent::Walked | GameEvent::Pushed | GameEvent::Ignored | GameEvent::Quit => None,
    }
}
