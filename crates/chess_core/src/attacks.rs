//! Attack detection by probing outward from the target square.
//!
//! Rays and offsets are walked on the mailbox grid; the direction tables are
//! shared with the move generator.

use crate::board::{Board, Promotion};
use crate::types::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// First occupied square along a ray, excluding `from`.
fn first_piece_on_ray(board: &Board, from: Square, (df, dr): (i8, i8)) -> Piece {
    let mut cur = from.offset(df, dr);
    while let Some(sq) = cur {
        let pc = board.piece_at(sq);
        if !pc.is_empty() {
            return pc;
        }
        cur = sq.offset(df, dr);
    }
    Piece::EMPTY
}

/// Whether any piece of colour `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    // A pawn of `by` attacks from one rank behind the target, seen from its side
    let back = -by.forward();
    for df in [-1, 1] {
        if let Some(sq) = target.offset(df, back) {
            if board.piece_at(sq).is(by, PieceKind::Pawn) {
                return true;
            }
        }
    }

    let hits = |offsets: &[(i8, i8)], kind: PieceKind| {
        offsets.iter().any(|&(df, dr)| {
            target
                .offset(df, dr)
                .is_some_and(|sq| board.piece_at(sq).is(by, kind))
        })
    };
    if hits(&KNIGHT_OFFSETS, PieceKind::Knight) || hits(&KING_OFFSETS, PieceKind::King) {
        return true;
    }

    let diagonal = [Piece::new(by, PieceKind::Bishop), Piece::new(by, PieceKind::Queen)];
    if DIAGONALS
        .iter()
        .any(|&dir| diagonal.contains(&first_piece_on_ray(board, target, dir)))
    {
        return true;
    }

    let orthogonal = [Piece::new(by, PieceKind::Rook), Piece::new(by, PieceKind::Queen)];
    ORTHOGONALS
        .iter()
        .any(|&dir| orthogonal.contains(&first_piece_on_ray(board, target, dir)))
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.other()),
        None => false,
    }
}

/// Plays `mv` for the side to move, tests that side's king and takes the move
/// back. The board is unchanged afterwards.
pub fn move_leaves_king_in_check(board: &mut Board, mv: Move) -> bool {
    let mover = board.turn();
    board.make_move(mv, Promotion::AutoQueen);
    let exposed = in_check(board, mover);
    board.unmake_move();
    exposed
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
