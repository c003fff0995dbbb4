//! Move log entries.
//!
//! Every applied move leaves one `MoveRecord` on the board's log. The record
//! holds exactly what `Board::unmake_move` needs to put the previous position
//! back: what moved, what was captured, and the mover's castling flag and the
//! halfmove clock as they were before the move.

use std::fmt;

use serde::Serialize;

use crate::types::{CastleSide, Color, Move, Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MoveRecord {
    /// Plain move or capture
    Normal {
        mv: Move,
        moved: Piece,
        captured: Piece,
        castling_rights: bool,
        halfmove_clock: u16,
    },
    /// Pawn reaching the last rank
    Promotion {
        mv: Move,
        captured: Piece,
        promoted: Piece,
        halfmove_clock: u16,
    },
    /// Pawn capturing the pawn that just passed it
    EnPassant { mv: Move, halfmove_clock: u16 },
    /// King move of two files; the rook is moved alongside
    Castling {
        mv: Move,
        side: CastleSide,
        halfmove_clock: u16,
    },
}

impl MoveRecord {
    pub fn mv(&self) -> Move {
        match *self {
            MoveRecord::Normal { mv, .. }
            | MoveRecord::Promotion { mv, .. }
            | MoveRecord::EnPassant { mv, .. }
            | MoveRecord::Castling { mv, .. } => mv,
        }
    }

    /// Halfmove clock before the move.
    pub fn halfmove_clock(&self) -> u16 {
        match *self {
            MoveRecord::Normal { halfmove_clock, .. }
            | MoveRecord::Promotion { halfmove_clock, .. }
            | MoveRecord::EnPassant { halfmove_clock, .. }
            | MoveRecord::Castling { halfmove_clock, .. } => halfmove_clock,
        }
    }

    /// Side that made the move.
    pub fn color(&self) -> Color {
        match *self {
            MoveRecord::Normal { moved, .. } => {
                if moved.is_friend_of(Color::White) {
                    Color::White
                } else {
                    Color::Black
                }
            }
            // Pawns only ever move forward
            MoveRecord::Promotion { mv, .. } | MoveRecord::EnPassant { mv, .. } => {
                if mv.to.rank() > mv.from.rank() {
                    Color::White
                } else {
                    Color::Black
                }
            }
            MoveRecord::Castling { mv, .. } => {
                if mv.from.rank() == Color::White.back_rank() {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }

    /// Piece that left the source square.
    pub fn moved(&self) -> Piece {
        match *self {
            MoveRecord::Normal { moved, .. } => moved,
            MoveRecord::Promotion { .. } | MoveRecord::EnPassant { .. } => {
                Piece::new(self.color(), PieceKind::Pawn)
            }
            MoveRecord::Castling { .. } => Piece::new(self.color(), PieceKind::King),
        }
    }

    /// Piece removed from the board by this move, `Piece::EMPTY` if none.
    pub fn captured(&self) -> Piece {
        match *self {
            MoveRecord::Normal { captured, .. } | MoveRecord::Promotion { captured, .. } => {
                captured
            }
            MoveRecord::EnPassant { .. } => Piece::new(self.color().other(), PieceKind::Pawn),
            MoveRecord::Castling { .. } => Piece::EMPTY,
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured().is_empty()
    }

    pub fn is_pawn_move(&self) -> bool {
        self.moved().kind() == Some(PieceKind::Pawn)
    }

    /// Pawn moves and captures restart the fifty-move count.
    pub fn resets_halfmove_clock(&self) -> bool {
        self.is_pawn_move() || self.is_capture()
    }

    /// True when no earlier position can ever be reached again after this
    /// move: pawn moves, captures and castling.
    pub fn is_irreversible(&self) -> bool {
        matches!(self, MoveRecord::Castling { .. }) || self.resets_halfmove_clock()
    }

    /// Pawn advancing two ranks from its start square.
    pub fn is_double_pawn_push(&self) -> bool {
        match *self {
            MoveRecord::Normal { mv, moved, .. } => {
                moved.kind() == Some(PieceKind::Pawn)
                    && (mv.to.rank() - mv.from.rank()).abs() == 2
            }
            _ => false,
        }
    }
}

impl fmt::Display for MoveRecord {
    /// One line of the game history, e.g. `pawn 'e4' to knight 'd5'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let MoveRecord::Castling { side, .. } = self {
            return write!(f, "castling {side}");
        }
        let mv = self.mv();
        let moved = self.moved().kind().map(PieceKind::name).unwrap_or("?");
        write!(f, "{moved} '{}' to ", mv.from)?;
        // The en-passant victim is not on the destination square
        if !matches!(self, MoveRecord::EnPassant { .. }) {
            if let Some(kind) = self.captured().kind() {
                write!(f, "{} ", kind.name())?;
            }
        }
        write!(f, "'{}'", mv.to)?;
        match self {
            MoveRecord::Promotion { promoted, .. } => {
                let name = promoted.kind().map(PieceKind::name).unwrap_or("?");
                write!(f, " promoted to {name}")
            }
            MoveRecord::EnPassant { .. } => write!(f, " (en passant)"),
            _ => Ok(()),
        }
    }
}
