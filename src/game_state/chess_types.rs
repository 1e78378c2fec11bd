//! Core value types: colors, piece kinds, packed pieces and square indices.
//!
//! A `Piece` packs a kind and a color into one byte using disjoint bit ranges
//! (kind in bits 0..=2, color in bits 3..=4). The empty square is `Piece::NONE`
//! and carries no color.

use crate::chess_errors::ChessErrors;

/// Board square index (`0..=63`), `0 == a8`, `63 == h1`.
pub type Square = u8;

/// En-passant availability after a double pawn push.
///
/// `target` is the square the pushed pawn skipped over (where the capturer
/// lands); `victim` is the square the pushed pawn now stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassant {
    pub target: Square,
    pub victim: Square,
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    const fn bits(self) -> u8 {
        match self {
            Color::Light => Piece::LIGHT_BIT,
            Color::Dark => Piece::DARK_BIT,
        }
    }

    /// FEN side-to-move letter.
    pub const fn fen_char(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }

    pub fn from_fen_token(token: &str) -> Result<Self, ChessErrors> {
        match token {
            "w" => Ok(Color::Light),
            "b" => Ok(Color::Dark),
            _ => Err(ChessErrors::InvalidSideToMove(token.to_owned())),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter used by FEN and the wire protocol.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Kinds a pawn may become on its last rank.
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A packed piece: kind bits plus color bits, or `NONE`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    pub const NONE: Piece = Piece(0);

    const KIND_MASK: u8 = 0b0_0111;
    const COLOR_MASK: u8 = 0b1_1000;
    const LIGHT_BIT: u8 = 0b0_1000;
    const DARK_BIT: u8 = 0b1_0000;

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece(kind.code() | color.bits())
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & Self::KIND_MASK)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & Self::COLOR_MASK {
            Self::LIGHT_BIT => Some(Color::Light),
            Self::DARK_BIT => Some(Color::Dark),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        !self.is_none() && (self.0 & Self::COLOR_MASK) == color.bits()
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Piece::new(kind, color)
    }

    #[inline]
    pub fn is_kind(self, kind: PieceKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Raw packed byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Decode a placement character. Space is the empty square.
    pub fn decode(ch: char) -> Result<Self, ChessErrors> {
        if ch == ' ' {
            return Ok(Piece::NONE);
        }

        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(ChessErrors::InvalidPieceCharacter(ch)),
        };

        Ok(Piece::new(kind, color))
    }

    /// Exact inverse of `decode`; the empty square renders as a space.
    pub fn encode(self) -> char {
        match (self.kind(), self.color()) {
            (Some(kind), Some(Color::Light)) => kind.letter().to_ascii_uppercase(),
            (Some(kind), Some(Color::Dark)) => kind.letter(),
            _ => ' ',
        }
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({:?})", self.encode())
    }
}
