//! Pawn geometry and capture threats.

use arrayvec::ArrayVec;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::directions::{AttackRay, AttackRays, Direction};

/// Direction a pawn of `color` advances in.
#[inline]
pub const fn pawn_forward(color: Color) -> Direction {
    match color {
        Color::Light => Direction::North,
        Color::Dark => Direction::South,
    }
}

/// Row pawns of `color` start on; a double push is only possible from here.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[inline]
const fn capture_directions(color: Color) -> [Direction; 2] {
    match color {
        Color::Light => [Direction::NorthWest, Direction::NorthEast],
        Color::Dark => [Direction::SouthWest, Direction::SouthEast],
    }
}

/// The forward-diagonal squares, regardless of what stands on them.
pub fn pawn_capture_squares(origin: Square, color: Color) -> ArrayVec<Square, 2> {
    capture_directions(color)
        .into_iter()
        .filter_map(|direction| direction.step(origin))
        .collect()
}

/// Forward diagonals currently holding an enemy piece.
pub fn pawn_attacks(board: &Board, origin: Square, color: Color) -> AttackRays {
    let enemy = color.opposite();
    pawn_capture_squares(origin, color)
        .into_iter()
        .filter(|&square| board.has_color_piece_on(square, enemy))
        .map(|square| {
            let mut ray = AttackRay::new();
            ray.push(square);
            ray
        })
        .collect()
}
