//! Classical Chess Engine
//!
//! Minimax with alpha-beta pruning over a material and piece-square
//! evaluation. The difficulty a player picks is the search depth.

mod eval;
mod search;

use chess_core::{Board, Engine, SearchResult};
use tracing::debug;

/// Chess bot searching every legal line to a fixed depth.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning
/// - Material plus piece-square evaluation
/// - Random choice among equally scored root moves
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let depth = depth.max(1);
        let result = search::pick_best_move(board, depth, &mut self.nodes);
        debug!(
            depth,
            nodes = self.nodes,
            best = ?result.map(|(mv, _)| mv.to_string()),
            "search finished"
        );

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0.0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
pub use search::{MATE_SCORE, pick_best_move};
