use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::directions::{ray_attacks, AttackRays, DIAGONALS};

#[inline]
pub fn bishop_attacks(board: &Board, origin: Square, color: Color) -> AttackRays {
    ray_attacks(board, origin, color, &DIAGONALS)
}
