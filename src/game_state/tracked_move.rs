//! History record of one applied move.
//!
//! A `TrackedMove` is built from the board as it stood before the move, so
//! every classification (castle, double push, en passant, capture) is decided
//! before the board is mutated.

use crate::game_state::board::{file_of, Board};
use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackedMove {
    /// Piece that moved (a pawn for promotions).
    pub piece: Piece,
    /// Piece previously on `destination`, `Piece::NONE` for quiet moves and en passant.
    pub captured: Piece,
    pub origin: Square,
    pub destination: Square,
    pub promotion: Option<PieceKind>,
}

impl TrackedMove {
    pub fn new(board: &Board, origin: Square, destination: Square) -> Self {
        Self {
            piece: board.piece_on(origin),
            captured: board.piece_on(destination),
            origin,
            destination,
            promotion: None,
        }
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.piece.is_kind(PieceKind::King) && self.origin.abs_diff(self.destination) == 2
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.is_kind(PieceKind::Pawn) && self.origin.abs_diff(self.destination) == 16
    }

    /// Pawn moving diagonally onto an empty square.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.piece.is_kind(PieceKind::Pawn)
            && file_of(self.origin) != file_of(self.destination)
            && self.captured.is_none()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_none() || self.is_en_passant()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}
