//! Minimax search with alpha-beta pruning

use chess_core::{Board, Color, Move, Piece, PieceKind, Promotion, in_check, legal_moves_into};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::trace;

use crate::eval::evaluate;

/// Score of a won (or lost) game, less one point per ply it takes to reach.
pub const MATE_SCORE: f32 = 9999.0;

/// Window every root move is searched with.
const ROOT_WINDOW: f32 = 10000.0;

/// Searches the board and returns a best move with its score, or `None` when
/// the side to move has no legal move.
///
/// `depth` counts the plies searched after the root move, so depth 1 sees
/// the opponent's reply; zero is treated as one. Every root move is searched
/// with the full window so that equal scores are exact, and ties are broken
/// uniformly at random. The board is returned in exactly the state it was
/// passed in.
pub fn pick_best_move(board: &mut Board, depth: u8, nodes: &mut u64) -> Option<(Move, f32)> {
    let root = board.turn();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);

    if let Some(mv) = king_capture(board, &moves) {
        return Some((mv, MATE_SCORE));
    }

    let mut best_score = f32::NEG_INFINITY;
    let mut best_moves = Vec::new();

    for mv in moves {
        board.make_move(mv, Promotion::AutoQueen);
        *nodes += 1;
        let score = alpha_beta(board, depth.max(1), 1, -ROOT_WINDOW, ROOT_WINDOW, root, nodes);
        board.unmake_move();
        trace!(%mv, score, "root move");

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let best = best_moves.choose(&mut thread_rng()).copied()?;
    Some((best, best_score))
}

/// A move in `moves` that lands on the opponent's king.
fn king_capture(board: &Board, moves: &[Move]) -> Option<Move> {
    let enemy_king = Piece::new(board.turn().other(), PieceKind::King);
    moves.iter().copied().find(|mv| board.piece_at(mv.to) == enemy_king)
}

/// Score of a decided game `ply` plies below the root, for `root` when
/// `root_wins`.
fn mate_score(ply: u8, root_wins: bool) -> f32 {
    let score = MATE_SCORE - f32::from(ply);
    if root_wins { score } else { -score }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Scores are always from `root`'s point of view; the node maximizes when
/// `root` is the side to move. `ply` is the distance from the root, so
/// nearer mates score higher.
fn alpha_beta(
    board: &mut Board,
    depth: u8,
    ply: u8,
    mut alpha: f32,
    mut beta: f32,
    root: Color,
    nodes: &mut u64,
) -> f32 {
    if depth == 0 {
        return evaluate(board, root);
    }

    let maximizing = board.turn() == root;
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);

    if moves.is_empty() {
        if in_check(board, board.turn()) {
            return mate_score(ply, !maximizing);
        }
        return 0.0; // Stalemate
    }

    // A move onto the enemy king ends the line at once
    if king_capture(board, &moves).is_some() {
        return mate_score(ply, maximizing);
    }

    let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };

    for mv in moves {
        board.make_move(mv, Promotion::AutoQueen);
        *nodes += 1;
        let score = alpha_beta(board, depth - 1, ply.saturating_add(1), alpha, beta, root, nodes);
        board.unmake_move();

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break; // Cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
