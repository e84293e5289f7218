use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The grid is structurally unusable; raised only while building a board.
    #[display("invalid board: {reason}")]
    Validation { reason: String },

    /// The grid does not hold exactly one player.
    #[display("board invariant violated: {reason}")]
    InvariantViolation { reason: String },
}

impl BoardError {
    pub fn validation(reason: impl Into<String>) -> Self {
        BoardError::Validation { reason: reason.into() }
    }

    pub fn invariant(reason: impl Into<String>) -> Self {
        BoardError::InvariantViolation { reason: reason.into() }
    }
}
