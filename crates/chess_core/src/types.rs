use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Sign carried by this colour's piece codes.
    pub fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank step of a pawn push.
    pub fn forward(self) -> i8 {
        self.sign()
    }

    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece identity. The discriminant is the magnitude of the piece code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum PieceKind {
    King = 1,
    Queen = 2,
    Bishop = 3,
    Knight = 4,
    Rook = 5,
    Pawn = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// Pieces a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ];

    pub fn from_code(code: i8) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Queen),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Knight),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Table index: King=0 .. Pawn=5.
    pub fn idx(self) -> usize {
        (self as i8 - 1) as usize
    }

    /// Worth of the piece in points, used for scoring captures.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight | PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Decode a promotion key press: (r)ook, (k)night, (b)ishop, (q)ueen.
    /// `n` is accepted for knight as well.
    pub fn from_promotion_key(key: char) -> Option<PieceKind> {
        match key.to_ascii_lowercase() {
            'r' => Some(PieceKind::Rook),
            'k' | 'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

/// Signed piece code: zero is an empty square, the sign is the colour
/// (positive for white) and the magnitude is the `PieceKind`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece(i8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        match color {
            Color::White => Piece(kind as i8),
            Color::Black => Piece(-(kind as i8)),
        }
    }

    pub fn from_code(code: i8) -> Option<Piece> {
        if (-6..=6).contains(&code) {
            Some(Piece(code))
        } else {
            None
        }
    }

    pub fn code(self) -> i8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn color(self) -> Option<Color> {
        match self.0 {
            0 => None,
            c if c > 0 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0.abs())
    }

    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self == Piece::new(color, kind)
    }

    pub fn is_enemy_of(self, color: Color) -> bool {
        self.0 * color.sign() < 0
    }

    pub fn is_friend_of(self, color: Color) -> bool {
        self.0 * color.sign() > 0
    }

    /// Capture value in points (0 for an empty square).
    pub fn value(self) -> u32 {
        self.kind().map(PieceKind::value).unwrap_or(0)
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }

    pub fn fen_char(self) -> char {
        let ch = match self.kind() {
            None => return '.',
            Some(PieceKind::King) => 'k',
            Some(PieceKind::Queen) => 'q',
            Some(PieceKind::Bishop) => 'b',
            Some(PieceKind::Knight) => 'n',
            Some(PieceKind::Rook) => 'r',
            Some(PieceKind::Pawn) => 'p',
        };
        if self.0 > 0 { ch.to_ascii_uppercase() } else { ch }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => write!(f, "{} {}", color, kind.name()),
            _ => write!(f, "empty"),
        }
    }
}

/// A board square; holding one proves the coordinates are on the board.
/// Rank 0 is White's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Option<Square> {
        if (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    pub fn try_new(file: i8, rank: i8) -> Result<Square, CoreError> {
        Square::new(file, rank).ok_or(CoreError::OutOfBounds { file, rank })
    }

    pub fn file(self) -> i8 {
        self.file
    }

    pub fn rank(self) -> i8 {
        self.rank
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file + df, self.rank + dr)
    }

    /// All 64 squares, rank by rank from a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'1' + self.rank as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidSquare {
            text: s.to_string(),
        };
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(invalid());
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(invalid());
        }
        Square::new((f - b'a') as i8, (r - b'1') as i8).ok_or_else(invalid)
    }
}

/// A move as supplied by the generator or a player: two squares.
/// Displays as the fixed-length coordinate string, e.g. `e2e4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = CoreError;

    /// Accepts `e2e4` as well as `e2 e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.split_whitespace().collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(CoreError::InvalidMove {
                text: s.to_string(),
            });
        }
        let invalid = |_: CoreError| CoreError::InvalidMove {
            text: s.to_string(),
        };
        let from = compact[0..2].parse::<Square>().map_err(invalid)?;
        let to = compact[2..4].parse::<Square>().map_err(invalid)?;
        Ok(Move::new(from, to))
    }
}

/// Wing a king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// File the king lands on.
    pub fn king_file(self) -> i8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// (home file, destination file) of the rook.
    pub fn rook_files(self) -> (i8, i8) {
        match self {
            CastleSide::King => (7, 5),
            CastleSide::Queen => (0, 3),
        }
    }

    pub fn from_king_file(file: i8) -> Option<CastleSide> {
        match file {
            6 => Some(CastleSide::King),
            2 => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::King => write!(f, "short"),
            CastleSide::Queen => write!(f, "long"),
        }
    }
}
