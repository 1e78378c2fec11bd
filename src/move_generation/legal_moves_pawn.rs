use crate::game_state::board::row_of;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::Destinations;
use crate::moves::pawn_moves::{pawn_capture_squares, pawn_forward, pawn_start_row};

/// Pushes, double push from the start row, diagonal captures and the
/// en-passant capture onto the skipped square.
pub fn generate_pawn_moves(game_state: &GameState, origin: Square, out: &mut Destinations) {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let forward = pawn_forward(side);

    if let Some(one_step) = forward.step(origin) {
        if !board.has_piece_on(one_step) {
            out.push(one_step);

            if row_of(origin) == pawn_start_row(side) {
                if let Some(two_step) = forward.step(one_step) {
                    if !board.has_piece_on(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_capture_squares(origin, side) {
        if board.has_color_piece_on(target, side.opposite()) {
            out.push(target);
            continue;
        }

        if let Some(en_passant) = game_state.en_passant() {
            if en_passant.target == target && row_of(en_passant.victim) == row_of(origin) {
                out.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn pawn_moves(game_state: &GameState, origin: Square) -> Vec<Square> {
        let mut out = Destinations::new();
        generate_pawn_moves(game_state, origin, &mut out);
        let mut moves = out.to_vec();
        moves.sort_unstable();
        moves
    }

    #[test]
    fn start_row_pawns_push_one_or_two() {
        let game = GameState::new_game();
        assert_eq!(pawn_moves(&game, 52), vec![36, 44]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN parses");
        assert!(pawn_moves(&game, 52).is_empty());

        let game = GameState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("FEN parses");
        assert_eq!(pawn_moves(&game, 52), vec![44]);
    }

    #[test]
    fn en_passant_appears_after_double_push_and_removes_the_pushed_pawn() {
        let mut game =
            GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN parses");
        game.make_move(11, 27);
        assert_eq!(game.en_passant().map(|ep| ep.target), Some(19));
        assert!(game.is_legal_move(28, 19));

        let dark_pawns = |g: &GameState| g.board().count(Piece::new(PieceKind::Pawn, Color::Dark));
        assert_eq!(dark_pawns(&game), 1);

        let tracked = game.make_move(28, 19);
        assert!(tracked.is_en_passant());
        assert!(tracked.is_capture());
        assert!(!game.board().has_piece_on(27));
        assert!(game.board().piece_on(19).is(PieceKind::Pawn, Color::Light));
        assert_eq!(dark_pawns(&game), 0);
        assert_eq!(game.en_passant(), None);
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let mut game =
            GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN parses");
        game.make_move(11, 27);
        game.make_move(60, 59);
        game.make_move(4, 5);
        assert!(!game.is_legal_move(28, 19));
    }

    #[test]
    fn non_adjacent_pawns_cannot_capture_en_passant() {
        let mut game =
            GameState::from_fen("4k3/3p4/8/6P1/8/8/8/4K3 b - - 0 1").expect("FEN parses");
        game.make_move(11, 27);
        assert_eq!(pawn_moves(&game, 30), vec![22]);
    }
}
