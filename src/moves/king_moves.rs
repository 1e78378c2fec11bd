use arrayvec::ArrayVec;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::directions::{AttackRay, AttackRays, ALL_DIRECTIONS};

/// Adjacent on-board squares.
pub fn king_steps(origin: Square) -> ArrayVec<Square, 8> {
    ALL_DIRECTIONS
        .into_iter()
        .filter_map(|direction| direction.step(origin))
        .collect()
}

/// Adjacent squares holding a piece of either color: the king defends its
/// own pieces and threatens enemy ones.
pub fn king_attacks(board: &Board, origin: Square) -> AttackRays {
    king_steps(origin)
        .into_iter()
        .filter(|&square| board.has_piece_on(square))
        .map(|square| {
            let mut ray = AttackRay::new();
            ray.push(square);
            ray
        })
        .collect()
}
