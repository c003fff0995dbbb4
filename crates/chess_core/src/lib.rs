pub mod attacks;
pub mod board;
pub mod endgame;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod record;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use endgame::*;
pub use error::{CoreError, CoreResult};
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use record::MoveRecord;
pub use types::*;

// =============================================================================
// Engine trait, implemented by the search bot and the random bot
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen move from the searching side's perspective
    pub score: f32,
    /// Plies searched after the root move
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Pick a move for the side to move on `board`.
    ///
    /// The board is borrowed mutably so the engine can play moves on it while
    /// searching; it must be returned exactly as it was received.
    fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// How this engine picks a piece when its move promotes a pawn.
    fn promotion(&self) -> Promotion<'static> {
        Promotion::AutoQueen
    }
}
