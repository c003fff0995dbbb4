//! Random Move Chess Engine
//!
//! A bot that selects moves uniformly at random from all legal moves and
//! promotes to a random piece. Useful for:
//! - The "random bot" player option
//! - Baseline comparisons (the search bot should easily beat this)
//! - Stress testing move generation

use chess_core::{Board, Engine, Promotion, SearchResult, legal_moves_into};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation and ignores the requested depth.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board, _depth: u8) -> SearchResult {
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(board, &mut moves);

        self.nodes = moves.len() as u64;

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn promotion(&self) -> Promotion<'static> {
        Promotion::Random
    }
}
