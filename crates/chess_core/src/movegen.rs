use crate::attacks::{
    DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS, in_check, is_square_attacked,
    move_leaves_king_in_check,
};
use crate::board::{Board, KING_HOME_FILE};
use crate::types::*;

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// A promotion is listed once per destination; the piece is picked when the
/// move is applied.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, out);
    // Filter illegal moves in-place by playing them on the mutable board.
    out.retain(|&mv| !move_leaves_king_in_check(board, mv));
}

/// Square of the pawn that may be taken en passant right now, if any.
///
/// Read from the last log entry, so it holds for any board and log pair,
/// including the rewound copies the repetition check looks at.
pub(crate) fn en_passant_victim(board: &Board) -> Option<Square> {
    let last = board.last_move()?;
    if !last.is_double_pawn_push() {
        return None;
    }
    let victim = last.mv().to;
    let capturer = Piece::new(board.turn(), PieceKind::Pawn);
    let adjacent = [-1, 1].into_iter().any(|df| {
        victim
            .offset(df, 0)
            .is_some_and(|sq| board.piece_at(sq) == capturer)
    });
    adjacent.then_some(victim)
}

/// File of the pawn the side to move may capture en passant.
pub fn en_passant_file(board: &Board) -> Option<i8> {
    en_passant_victim(board).map(Square::file)
}

fn pseudo_moves(board: &Board, out: &mut Vec<Move>) {
    let color = board.turn();
    for (from, pc) in board.pieces() {
        if !pc.is_friend_of(color) {
            continue;
        }
        match pc.kind() {
            Some(PieceKind::Pawn) => gen_pawn(board, from, color, out),
            Some(PieceKind::Knight) => gen_steps(board, from, color, out, &KNIGHT_OFFSETS),
            Some(PieceKind::Bishop) => gen_slider(board, from, color, out, &DIAGONALS),
            Some(PieceKind::Rook) => gen_slider(board, from, color, out, &ORTHOGONALS),
            Some(PieceKind::Queen) => gen_slider(board, from, color, out, &ALL_DIRECTIONS),
            Some(PieceKind::King) => {
                gen_steps(board, from, color, out, &KING_OFFSETS);
                gen_castle(board, from, color, out);
            }
            None => {}
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(0, dir) {
        if board.piece_at(to).is_empty() {
            out.push(Move::new(from, to));

            // forward 2 from start
            if from.rank() == c.pawn_rank() {
                if let Some(to2) = from.offset(0, 2 * dir) {
                    if board.piece_at(to2).is_empty() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if board.piece_at(to).is_enemy_of(c) {
                out.push(Move::new(from, to));
            }
        }
    }

    // en passant lands behind the victim
    if let Some(victim) = en_passant_victim(board) {
        if victim.rank() == from.rank() && (victim.file() - from.file()).abs() == 1 {
            if let Some(to) = victim.offset(0, dir) {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// Knight and king: one step per offset onto an empty or enemy square.
fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, offsets: &[(i8, i8)]) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            if !board.piece_at(to).is_friend_of(c) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            let pc = board.piece_at(to);
            if pc.is_empty() {
                out.push(Move::new(from, to));
            } else {
                if pc.is_enemy_of(c) {
                    out.push(Move::new(from, to));
                }
                break;
            }
            cur = to.offset(df, dr);
        }
    }
}

fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    // Must be on original king square
    if !board.castling_rights(c) || from.file() != KING_HOME_FILE || from.rank() != c.back_rank() {
        return;
    }
    if in_check(board, c) {
        return;
    }

    let rook = Piece::new(c, PieceKind::Rook);
    for side in [CastleSide::King, CastleSide::Queen] {
        let (rook_file, _) = side.rook_files();
        if !Square::new(rook_file, from.rank()).is_some_and(|sq| board.piece_at(sq) == rook) {
            continue;
        }

        let (lo, hi) = if rook_file > from.file() {
            (from.file() + 1, rook_file)
        } else {
            (rook_file + 1, from.file())
        };
        let path_clear = (lo..hi).all(|file| {
            Square::new(file, from.rank()).is_some_and(|sq| board.piece_at(sq).is_empty())
        });
        if !path_clear {
            continue;
        }

        // The square the king crosses must not be attacked; the landing
        // square is left to the legality filter.
        let step = (side.king_file() - from.file()).signum();
        let crossed = from.offset(step, 0);
        let landing = Square::new(side.king_file(), from.rank());
        match (crossed, landing) {
            (Some(crossed), Some(landing)) if !is_square_attacked(board, crossed, c.other()) => {
                out.push(Move::new(from, landing));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
