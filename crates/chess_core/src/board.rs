use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::error;

use crate::error::{CoreError, CoreResult};
use crate::record::MoveRecord;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File the king starts on.
pub(crate) const KING_HOME_FILE: i8 = 4;

/// Source of promotion choices for a human player.
pub trait PromotionPrompt {
    /// Blocks until the player presses a key.
    fn read_key(&mut self) -> char;
}

impl<F: FnMut() -> char> PromotionPrompt for F {
    fn read_key(&mut self) -> char {
        self()
    }
}

/// How the piece is chosen when a pawn reaches the last rank.
pub enum Promotion<'a> {
    AutoQueen,
    /// Uniform over rook, knight, bishop and queen
    Random,
    /// Ask the player; keys other than r/k/n/b/q are ignored
    Manual(&'a mut dyn PromotionPrompt),
}

impl Promotion<'_> {
    fn choose(self) -> PieceKind {
        match self {
            Promotion::AutoQueen => PieceKind::Queen,
            Promotion::Random => PieceKind::PROMOTIONS
                .choose(&mut thread_rng())
                .copied()
                .unwrap_or(PieceKind::Queen),
            Promotion::Manual(prompt) => loop {
                if let Some(kind) = PieceKind::from_promotion_key(prompt.read_key()) {
                    break kind;
                }
            },
        }
    }
}

/// The authoritative game state: piece grid, side to move, castling flags,
/// halfmove clock and the log of every move applied since setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; 8]; 8], // [rank][file]
    turn: Color,
    castling: [bool; 2],
    halfmove_clock: u16,
    log: Vec<MoveRecord>,
    /// Leading log entries that only describe the setup position
    setup_plies: usize,
    /// Fullmove number of the setup position
    start_fullmove: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    fn empty() -> Self {
        Board {
            squares: [[Piece::EMPTY; 8]; 8],
            turn: Color::White,
            castling: [false; 2],
            halfmove_clock: 0,
            log: Vec::new(),
            setup_plies: 0,
            start_fullmove: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                b.squares[color.back_rank() as usize][file] = Piece::new(color, kind);
                b.squares[color.pawn_rank() as usize][file] = Piece::new(color, PieceKind::Pawn);
            }
        }
        b.castling = [true; 2];
        b
    }

    /// Set up a position from Forsyth-Edwards Notation.
    ///
    /// Castling letters map onto the single per-colour flag (`K` or `Q` grants
    /// White's). An en-passant square is recorded as the opponent's double
    /// pawn push in the move log, since that is where eligibility is read from.
    /// That entry belongs to the setup and can never be unmade.
    pub fn from_fen(fen: &str) -> CoreResult<Self> {
        let invalid = |message: &str| CoreError::InvalidFen {
            message: format!("{message} in {fen:?}"),
        };

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 fields"));
        }

        let mut b = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("board section must have 8 ranks"));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece =
                        Piece::from_fen_char(ch).ok_or_else(|| invalid("unknown piece letter"))?;
                    let sq = Square::new(file, rank).ok_or_else(|| invalid("too many files"))?;
                    b.set_piece(sq, piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(invalid("too many files"));
                }
            }
            if file != 8 {
                return Err(invalid("not enough files"));
            }
        }

        b.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("side to move must be w or b")),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' | 'Q' => b.castling[Color::White.idx()] = true,
                    'k' | 'q' => b.castling[Color::Black.idx()] = true,
                    _ => return Err(invalid("bad castling field")),
                }
            }
        }

        b.halfmove_clock = match parts.get(4) {
            Some(text) => text.parse().map_err(|_| invalid("bad halfmove clock"))?,
            None => 0,
        };
        b.start_fullmove = match parts.get(5) {
            Some(text) => match text.parse() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("bad fullmove number")),
            },
            None => 1,
        };

        if parts[3] != "-" {
            let passed: Square = parts[3]
                .parse()
                .map_err(|_| invalid("bad en-passant square"))?;
            let pusher = b.turn.other();
            let dir = pusher.forward();
            let from = passed.offset(0, -dir);
            let to = passed.offset(0, dir);
            match (from, to) {
                (Some(from), Some(to)) if b.piece_at(to).is(pusher, PieceKind::Pawn) => {
                    b.log.push(MoveRecord::Normal {
                        mv: Move::new(from, to),
                        moved: Piece::new(pusher, PieceKind::Pawn),
                        captured: Piece::EMPTY,
                        castling_rights: b.castling[pusher.idx()],
                        halfmove_clock: 0,
                    });
                    b.setup_plies = b.log.len();
                }
                _ => return Err(invalid("en-passant square without a pushed pawn")),
            }
        }

        Ok(b)
    }

    /// Forsyth-Edwards Notation of the current position.
    pub fn fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut gap = 0;
            for file in 0..8 {
                let pc = self.squares[rank][file];
                if pc.is_empty() {
                    gap += 1;
                    continue;
                }
                if gap > 0 {
                    out.push_str(&gap.to_string());
                    gap = 0;
                }
                out.push(pc.fen_char());
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.turn == Color::White { 'w' } else { 'b' });

        out.push(' ');
        let mut rights = String::new();
        if self.castling[Color::White.idx()] {
            rights.push_str("KQ");
        }
        if self.castling[Color::Black.idx()] {
            rights.push_str("kq");
        }
        out.push_str(if rights.is_empty() { "-" } else { rights.as_str() });

        out.push(' ');
        match crate::movegen::en_passant_file(self) {
            Some(file) => {
                let rank = self.turn.promotion_rank() - 2 * self.turn.forward();
                match Square::new(file, rank) {
                    Some(sq) => out.push_str(&sq.to_string()),
                    None => out.push('-'),
                }
            }
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number()));
        out
    }

    /// Fullmove number, starting from the setup position's and bumped after
    /// every Black move.
    pub fn fullmove_number(&self) -> u16 {
        let played = self.log.len() - self.setup_plies;
        let black_began = (self.turn == Color::Black) != (played % 2 == 1);
        let moves = (played + usize::from(black_began)) / 2;
        self.start_fullmove.saturating_add(u16::try_from(moves).unwrap_or(u16::MAX))
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Piece lookup by raw coordinates, for callers outside the core.
    ///
    /// # Panics
    /// On an off-board coordinate, see [`Board::check_coordinates`].
    pub fn piece(&self, file: i8, rank: i8) -> Piece {
        let sq = self.check_coordinates(file, rank, "Board::piece");
        self.piece_at(sq)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, pc: Piece) {
        self.squares[sq.rank() as usize][sq.file() as usize] = pc;
    }

    fn relocate(&mut self, from: Square, to: Square) {
        let pc = self.piece_at(from);
        self.set_piece(to, pc);
        self.set_piece(from, Piece::EMPTY);
    }

    /// Converts raw coordinates that the caller guarantees to be on the board.
    ///
    /// An off-board coordinate here means the engine's own state is corrupt,
    /// so the coordinate, the failing operation and the whole move history are
    /// logged before panicking.
    pub fn check_coordinates(&self, file: i8, rank: i8, operation: &str) -> Square {
        match Square::try_new(file, rank) {
            Ok(sq) => sq,
            Err(err) => {
                error!(operation, %err, "coordinate check failed");
                self.log_history();
                panic!("{err} (in {operation})");
            }
        }
    }

    fn log_history(&self) {
        error!(plies = self.log.len(), "all moves made in order");
        for (ply, record) in self.log.iter().enumerate() {
            error!(ply = ply + 1, "{}: {}", record.color(), record);
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether `color` may still castle (neither its king nor a rook has
    /// moved and it has not castled).
    pub fn castling_rights(&self, color: Color) -> bool {
        self.castling[color.idx()]
    }

    /// Plies since the last pawn move or capture.
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Every move applied since setup, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.log[self.setup_plies..]
    }

    /// Most recent log entry, including the double push implied by a FEN
    /// en-passant square.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.log.last()
    }

    /// Same pieces on the same squares, same side to move and same castling
    /// flags. Clock and history are ignored.
    pub fn same_position(&self, other: &Board) -> bool {
        self.squares == other.squares && self.turn == other.turn && self.castling == other.castling
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == king)
    }

    /// Occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|sq| (sq, self.piece_at(sq)))
            .filter(|(_, pc)| !pc.is_empty())
    }

    /// Castling side if `mv` is a king stepping two files.
    fn castle_side(&self, moved: Piece, mv: Move) -> Option<CastleSide> {
        if moved.kind() != Some(PieceKind::King) || (mv.to.file() - mv.from.file()).abs() != 2 {
            return None;
        }
        CastleSide::from_king_file(mv.to.file())
    }

    /// Applies a pseudo-legal move for the side to move and logs it.
    ///
    /// The move kind is read off the board: a king stepping two files
    /// castles, a pawn reaching the last rank promotes, and a pawn moving
    /// diagonally onto an empty square captures en passant.
    pub fn make_move(&mut self, mv: Move, promotion: Promotion<'_>) -> MoveRecord {
        let color = self.turn;
        let moved = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);
        let halfmove_clock = self.halfmove_clock;
        let is_pawn = moved.kind() == Some(PieceKind::Pawn);

        let record = if let Some(side) = self.castle_side(moved, mv) {
            let rank = mv.from.rank();
            let (home, dest) = side.rook_files();
            let rook_from = self.check_coordinates(home, rank, "make_move");
            let rook_to = self.check_coordinates(dest, rank, "make_move");
            self.relocate(mv.from, mv.to);
            self.relocate(rook_from, rook_to);
            self.castling[color.idx()] = false;
            MoveRecord::Castling {
                mv,
                side,
                halfmove_clock,
            }
        } else if is_pawn && mv.to.rank() == color.promotion_rank() {
            let promoted = Piece::new(color, promotion.choose());
            self.set_piece(mv.from, Piece::EMPTY);
            self.set_piece(mv.to, promoted);
            MoveRecord::Promotion {
                mv,
                captured,
                promoted,
                halfmove_clock,
            }
        } else if is_pawn && mv.from.file() != mv.to.file() && captured.is_empty() {
            // The victim sits beside the source square, not on the destination
            let victim = self.check_coordinates(mv.to.file(), mv.from.rank(), "make_move");
            self.set_piece(victim, Piece::EMPTY);
            self.relocate(mv.from, mv.to);
            MoveRecord::EnPassant { mv, halfmove_clock }
        } else {
            let castling_rights = self.castling[color.idx()];
            self.relocate(mv.from, mv.to);
            if matches!(moved.kind(), Some(PieceKind::King | PieceKind::Rook)) {
                self.castling[color.idx()] = false;
            }
            MoveRecord::Normal {
                mv,
                moved,
                captured,
                castling_rights,
                halfmove_clock,
            }
        };

        self.halfmove_clock = if record.resets_halfmove_clock() {
            0
        } else {
            halfmove_clock.saturating_add(1)
        };
        self.log.push(record);
        self.turn = color.other();
        record
    }

    /// Reverts the most recent move exactly, returning its record, or `None`
    /// when nothing has been played since setup.
    pub fn unmake_move(&mut self) -> Option<MoveRecord> {
        if self.log.len() <= self.setup_plies {
            return None;
        }
        let record = self.log.pop()?;
        self.turn = self.turn.other();
        let color = self.turn;

        match record {
            MoveRecord::Normal {
                mv,
                moved,
                captured,
                castling_rights,
                ..
            } => {
                self.set_piece(mv.from, moved);
                self.set_piece(mv.to, captured);
                self.castling[color.idx()] = castling_rights;
            }
            MoveRecord::Promotion { mv, captured, .. } => {
                self.set_piece(mv.from, Piece::new(color, PieceKind::Pawn));
                self.set_piece(mv.to, captured);
            }
            MoveRecord::EnPassant { mv, .. } => {
                self.relocate(mv.to, mv.from);
                let victim = self.check_coordinates(mv.to.file(), mv.from.rank(), "unmake_move");
                self.set_piece(victim, Piece::new(color.other(), PieceKind::Pawn));
            }
            MoveRecord::Castling { mv, side, .. } => {
                let rank = mv.from.rank();
                let (home, dest) = side.rook_files();
                let rook_from = self.check_coordinates(home, rank, "unmake_move");
                let rook_to = self.check_coordinates(dest, rank, "unmake_move");
                self.relocate(mv.to, mv.from);
                self.relocate(rook_to, rook_from);
                self.castling[color.idx()] = true;
            }
        }

        self.halfmove_clock = record.halfmove_clock();
        Some(record)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
