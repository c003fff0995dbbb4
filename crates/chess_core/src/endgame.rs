//! Terminal-state detection, run after every committed move.
//!
//! Never called from inside the search: the search scores mate and stalemate
//! on its own and ignores the draw rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attacks::in_check;
use crate::board::Board;
use crate::movegen::{en_passant_file, legal_moves_into};
use crate::types::Color;

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u16 = 50;

/// Occurrences of one position that end the game.
const REPETITION_LIMIT: usize = 3;

/// How a game stands after the last committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    /// A player left before the game ended
    Quit,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::FiftyMoveRule | GameStatus::ThreefoldRepetition
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            GameStatus::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
            GameStatus::Quit => write!(f, "abandoned"),
        }
    }
}

pub fn is_fifty_move_draw(board: &Board) -> bool {
    board.halfmove_clock() >= FIFTY_MOVE_LIMIT
}

/// True once the current position has occurred for the third time.
///
/// Positions are equal when the grid, both castling flags and the en-passant
/// file match. Only positions with the same side to move can match, so a
/// rewound copy of the board steps back two plies at a time. The walk stops
/// at the first pawn move, capture or castling, behind which no position can
/// recur.
pub fn is_threefold_repetition(board: &Board) -> bool {
    let ep_file = en_passant_file(board);
    let mut past = board.clone();
    let mut seen = 1;

    loop {
        for _ in 0..2 {
            match past.unmake_move() {
                Some(record) if !record.is_irreversible() => {}
                _ => return false,
            }
        }
        if past.same_position(board) && en_passant_file(&past) == ep_file {
            seen += 1;
            if seen >= REPETITION_LIMIT {
                return true;
            }
        }
    }
}

/// Classifies the board after a committed move.
pub fn status(board: &Board) -> GameStatus {
    let mut probe = board.clone();
    let mut moves = Vec::new();
    legal_moves_into(&mut probe, &mut moves);

    if moves.is_empty() {
        let side = board.turn();
        return if in_check(board, side) {
            GameStatus::Checkmate {
                winner: side.other(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if is_fifty_move_draw(board) {
        return GameStatus::FiftyMoveRule;
    }
    if is_threefold_repetition(board) {
        return GameStatus::ThreefoldRepetition;
    }
    GameStatus::Ongoing
}

#[cfg(test)]
#[path = "endgame_tests.rs"]
mod endgame_tests;
