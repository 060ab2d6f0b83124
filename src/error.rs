use thiserror::Error;

/// Everything that can go wrong when handling boards and moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The board is well formed, but the request makes no sense for it,
    /// e.g. asking for a move on a full board.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The board (or a coordinate on it) could not be built from the input.
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}
