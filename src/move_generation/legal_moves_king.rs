use crate::game_state::castle_rights::CastleSide;
use crate::game_state::chess_rules::castle_geometry;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::leaves_king_safe;
use crate::move_generation::legal_move_shared::{push_unless_friendly, Destinations};
use crate::moves::king_moves::king_steps;

/// Adjacent squares not held by the mover. Safety is checked by the caller.
pub fn generate_king_moves(game_state: &GameState, origin: Square, out: &mut Destinations) {
    push_unless_friendly(game_state, king_steps(origin), out);
}

/// Castling destinations whose every precondition holds, safety included.
pub fn generate_castling_moves(game_state: &GameState, origin: Square, out: &mut Destinations) {
    let side = game_state.side_to_move();
    let board = game_state.board();

    // Cannot castle out of check.
    if game_state.checks().in_check() {
        return;
    }

    for wing in CastleSide::BOTH {
        if !game_state.castle_rights().has(side, wing) {
            continue;
        }

        let geometry = castle_geometry(side, wing);
        if origin != geometry.king_origin
            || !board.piece_on(geometry.rook_origin).is(PieceKind::Rook, side)
            || geometry.between.iter().any(|&square| board.has_piece_on(square))
        {
            continue;
        }

        if leaves_king_safe(board, side, origin, geometry.king_transit, None)
            && leaves_king_safe(board, side, origin, geometry.king_destination, None)
        {
            out.push(geometry.king_destination);
        }
    }
}
