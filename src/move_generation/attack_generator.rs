//! Pseudo-legal attack enumeration.
//!
//! `generate_attacking_moves` builds the full origin → rays map for one side;
//! `is_square_attacked` answers the single question the king-safety
//! simulation needs and stops at the first ray that ends on the square.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::directions::AttackRays;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Origin square → the rays that piece threatens. Pieces with nothing to
/// threaten are omitted.
pub type AttackingMoves = BTreeMap<Square, AttackRays>;

/// Rays threatened by the piece on `origin`.
pub fn piece_attacks(board: &Board, origin: Square, piece: Piece) -> AttackRays {
    let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
        return AttackRays::new();
    };

    match kind {
        PieceKind::Pawn => pawn_attacks(board, origin, color),
        PieceKind::Knight => knight_attacks(board, origin, color),
        PieceKind::Bishop => bishop_attacks(board, origin, color),
        PieceKind::Rook => rook_attacks(board, origin, color),
        PieceKind::Queen => queen_attacks(board, origin, color),
        PieceKind::King => king_attacks(board, origin),
    }
}

pub fn generate_attacking_moves(board: &Board, color: Color) -> AttackingMoves {
    board
        .pieces_of(color)
        .filter_map(|(origin, piece)| {
            let rays = piece_attacks(board, origin, piece);
            (!rays.is_empty()).then_some((origin, rays))
        })
        .collect()
}

/// Whether any ray of `attacker`'s pieces ends on `square`.
///
/// Same enumeration as `generate_attacking_moves` without building the map.
/// `square` is expected to be occupied (by the piece whose safety is asked).
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board.pieces_of(attacker).any(|(origin, piece)| {
        piece_attacks(board, origin, piece)
            .iter()
            .any(|ray| ray.last() == Some(&square))
    })
}
