//! Error types for board setup and move handling.

use crate::endgame::GameStatus;
use crate::types::Move;

/// Errors reported by the core to its callers.
///
/// Rejected moves are ordinary control flow for interactive play: the caller
/// reports them and asks again.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A raw coordinate outside the 8x8 board
    #[error("Invalid coordinate: ({file}, {rank}) is off the board")]
    OutOfBounds { file: i8, rank: i8 },

    /// Square text that is not `a1`..`h8`
    #[error("Invalid square: {text:?}")]
    InvalidSquare { text: String },

    /// Move text that is not two squares
    #[error("Invalid move text: {text:?}")]
    InvalidMove { text: String },

    /// A well-formed move that is not in the legal move set
    #[error("Not a legal move: {mv}")]
    IllegalMove { mv: Move },

    /// A move submitted after the game already ended
    #[error("Game is over: {status}")]
    GameOver { status: GameStatus },

    /// Malformed Forsyth-Edwards Notation
    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
