//! Canonical chess-rule constants.
//!
//! This module stores the standard starting position FEN and the fixed
//! castling geometry (king and rook home squares, landing squares and the
//! squares that must be empty) for both colors and both wings.

use crate::game_state::castle_rights::CastleSide;
use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Squares involved in one castling move. Indices use `0 == a8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_origin: Square,
    pub king_transit: Square,
    pub king_destination: Square,
    pub rook_origin: Square,
    pub rook_destination: Square,
    /// Squares strictly between king and rook.
    pub between: &'static [Square],
}

// [color][side]
static CASTLES: [[CastleGeometry; 2]; 2] = [
    [
        // e1-g1, h1-f1
        CastleGeometry {
            king_origin: 60,
            king_transit: 61,
            king_destination: 62,
            rook_origin: 63,
            rook_destination: 61,
            between: &[61, 62],
        },
        // e1-c1, a1-d1
        CastleGeometry {
            king_origin: 60,
            king_transit: 59,
            king_destination: 58,
            rook_origin: 56,
            rook_destination: 59,
            between: &[57, 58, 59],
        },
    ],
    [
        // e8-g8, h8-f8
        CastleGeometry {
            king_origin: 4,
            king_transit: 5,
            king_destination: 6,
            rook_origin: 7,
            rook_destination: 5,
            between: &[5, 6],
        },
        // e8-c8, a8-d8
        CastleGeometry {
            king_origin: 4,
            king_transit: 3,
            king_destination: 2,
            rook_origin: 0,
            rook_destination: 3,
            between: &[1, 2, 3],
        },
    ],
];

#[inline]
pub fn castle_geometry(color: Color, side: CastleSide) -> &'static CastleGeometry {
    &CASTLES[color.index()][side.index()]
}

/// Wing whose rook starts on `square`, if it is one of `color`'s rook homes.
pub fn castle_side_for_rook_home(color: Color, square: Square) -> Option<CastleSide> {
    CastleSide::BOTH
        .into_iter()
        .find(|&side| castle_geometry(color, side).rook_origin == square)
}

/// Wing selected by a two-square king move landing on `destination`.
pub fn castle_side_for_king_destination(color: Color, destination: Square) -> Option<CastleSide> {
    CastleSide::BOTH
        .into_iter()
        .find(|&side| castle_geometry(color, side).king_destination == destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_is_mirrored_between_colors() {
        for side in CastleSide::BOTH {
            let light = castle_geometry(Color::Light, side);
            let dark = castle_geometry(Color::Dark, side);
            assert_eq!(light.king_origin - dark.king_origin, 56);
            assert_eq!(light.king_destination - dark.king_destination, 56);
            assert_eq!(light.rook_origin - dark.rook_origin, 56);
            assert_eq!(light.rook_destination, light.king_transit);
            assert_eq!(dark.rook_destination, dark.king_transit);
        }
    }

    #[test]
    fn rook_home_lookup() {
        assert_eq!(
            castle_side_for_rook_home(Color::Light, 63),
            Some(CastleSide::KingSide)
        );
        assert_eq!(
            castle_side_for_rook_home(Color::Dark, 0),
            Some(CastleSide::QueenSide)
        );
        assert_eq!(castle_side_for_rook_home(Color::Dark, 63), None);
        assert_eq!(
            castle_side_for_king_destination(Color::Dark, 6),
            Some(CastleSide::KingSide)
        );
    }
}
