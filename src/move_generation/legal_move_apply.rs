//! State transition for one move.
//!
//! `apply_move` mutates the primary state only (board, rights, en-passant
//! target, side to move, history). Cache recomputation is left to the caller
//! so a promotion can swap the arriving pawn first.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::{
    castle_geometry, castle_side_for_king_destination, castle_side_for_rook_home,
};
use crate::game_state::chess_types::{Color, EnPassant, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::tracked_move::TrackedMove;

pub(crate) fn apply_move(game_state: &mut GameState, origin: Square, destination: Square) -> TrackedMove {
    let tracked = TrackedMove::new(&game_state.board, origin, destination);
    let mover = game_state.side_to_move;

    game_state.board.relocate(origin, destination);

    if tracked.is_castle() {
        move_castling_rook(&mut game_state.board, mover, destination);
    }

    if tracked.is_en_passant() {
        if let Some(en_passant) = game_state.en_passant {
            game_state.board.clear(en_passant.victim);
        }
    }

    game_state.en_passant = tracked.is_double_pawn_push().then(|| EnPassant {
        target: (origin + destination) / 2,
        victim: destination,
    });

    update_castle_rights(&mut game_state.castle_rights, mover, &tracked);

    game_state.side_to_move = mover.opposite();
    game_state.history.push(tracked);
    tracked
}

fn move_castling_rook(board: &mut Board, color: Color, king_destination: Square) {
    if let Some(wing) = castle_side_for_king_destination(color, king_destination) {
        let geometry = castle_geometry(color, wing);
        board.relocate(geometry.rook_origin, geometry.rook_destination);
    }
}

fn update_castle_rights(rights: &mut CastleRights, mover: Color, tracked: &TrackedMove) {
    if tracked.piece.is_kind(PieceKind::King) {
        rights.revoke_all(mover);
    }

    if tracked.piece.is_kind(PieceKind::Rook) {
        if let Some(wing) = castle_side_for_rook_home(mover, tracked.origin) {
            rights.revoke(mover, wing);
        }
    }

    let opponent = mover.opposite();
    if tracked.captured.is(PieceKind::Rook, opponent) {
        if let Some(wing) = castle_side_for_rook_home(opponent, tracked.destination) {
            rights.revoke(opponent, wing);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castle_rights::CastleSide;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;

    const ROOKS_FACING: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn rook_leaving_home_revokes_its_wing_only() {
        let mut game = GameState::from_fen(ROOKS_FACING).expect("FEN parses");
        game.make_move(56, 48);
        assert!(!game.castle_rights().has(Color::Light, CastleSide::QueenSide));
        assert!(game.castle_rights().has(Color::Light, CastleSide::KingSide));
        assert_eq!(game.castle_rights().to_fen_token(), "Kkq");
    }

    #[test]
    fn capturing_a_rook_on_its_home_square_revokes_the_victims_wing() {
        let mut game = GameState::from_fen(ROOKS_FACING).expect("FEN parses");
        let tracked = game.make_move(63, 7);
        assert!(tracked.is_capture());
        assert_eq!(tracked.captured, Piece::new(PieceKind::Rook, Color::Dark));
        // Both the mover's h1 wing and the victim's h8 wing are gone.
        assert_eq!(game.castle_rights().to_fen_token(), "Qq");
    }

    #[test]
    fn king_move_revokes_both_wings() {
        let mut game = GameState::from_fen(ROOKS_FACING).expect("FEN parses");
        game.make_move(60, 59);
        assert_eq!(game.castle_rights().to_fen_token(), "kq");
        game.make_move(4, 5);
        assert_eq!(game.castle_rights().to_fen_token(), "-");
    }

    #[test]
    fn double_push_sets_target_and_any_other_move_clears_it() {
        let mut game = GameState::new_game();
        game.make_move(51, 35);
        let en_passant = game.en_passant().expect("double push sets a target");
        assert_eq!(en_passant.target, 43);
        assert_eq!(en_passant.victim, 35);

        game.make_move(1, 18);
        assert_eq!(game.en_passant(), None);
    }
}
