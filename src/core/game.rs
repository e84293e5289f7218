use tracing::{info, instrument, warn};

use crate::core::board::Board;
use crate::core::models::{Direction, GameEvent, GameStatus, Intent, MoveOutcome};

/// Drives one play session over a board it owns.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
    quit: bool,
    crates: usize,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let status = if board.is_complete() {
            GameStatus::Complete
        } else {
            GameStatus::Playing
        };
        let crates = board.crate_count();
        Game {
            board,
            status,
            quit: false,
            crates,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == GameStatus::Complete
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// True once the session loop should stop asking for input.
    pub fn is_over(&self) -> bool {
        self.is_complete() || self.quit
    }

    #[instrument(level = "debug", skip(self), fields(status = ?self.status))]
    pub fn process(&mut self, intent: Intent) -> GameEvent {
        match intent {
            Intent::Move(direction) => self.try_move(direction),
            Intent::Quit => {
                info!("quit requested");
                self.quit = true;
                GameEvent::Quit
            }
            Intent::Unknown(raw) => {
                warn!(input = %raw, "unknown input");
                GameEvent::Unknown(raw)
            }
        }
    }

    fn try_move(&mut self, direction: Direction) -> GameEvent {
        if self.is_over() {
            return GameEvent::Ignored;
        }

        let delta = direction.delta();
        if !self.board.can_move(delta) {
            return GameEvent::Blocked;
        }

        let outcome = self.board.apply_move(delta);
        debug_assert_eq!(self.board.crate_count(), self.crates, "crates must be conserved");
        debug_assert_eq!(self.board.player_count(), 1, "exactly one player must remain");
        if self.board.is_complete() {
            info!(crates = self.board.crate_count(), "all crates stored");
            self.status = GameStatus::Complete;
            return GameEvent::Completed;
        }

        match outcome {
            MoveOutcome::Walked => GameEvent::Walked,
            MoveOutcome::Pushed => GameEvent::Pushed,
            MoveOutcome::Blocked => GameEvent::Blocked,
        }
    }
}
