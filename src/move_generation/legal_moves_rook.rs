use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{push_sliding_destinations, Destinations};
use crate::moves::directions::ORTHOGONALS;

pub fn generate_rook_moves(game_state: &GameState, origin: Square, out: &mut Destinations) {
    push_sliding_destinations(game_state, origin, &ORTHOGONALS, out);
}
