use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{push_unless_friendly, Destinations};
use crate::moves::knight_moves::knight_jumps;

pub fn generate_knight_moves(game_state: &GameState, origin: Square, out: &mut Destinations) {
    push_unless_friendly(game_state, knight_jumps(origin), out);
}
