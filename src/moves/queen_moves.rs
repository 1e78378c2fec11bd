use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::directions::{ray_attacks, AttackRays, ALL_DIRECTIONS};

#[inline]
pub fn queen_attacks(board: &Board, origin: Square, color: Color) -> AttackRays {
    ray_attacks(board, origin, color, &ALL_DIRECTIONS)
}
