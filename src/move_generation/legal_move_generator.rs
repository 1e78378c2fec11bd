//! Full legal move generation pipeline.
//!
//! Collects piece-wise pseudo-legal destinations, then filters them against
//! the cached checks: double check leaves only the king, single check keeps
//! non-king moves that capture or block the checker, and any move that could
//! expose the king (king moves, pieces aligned with their king, en passant)
//! is confirmed by simulating it on a board copy.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::leaves_king_safe;
use crate::move_generation::legal_move_shared::Destinations;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::directions::shares_line;

/// Origin square → ascending legal destinations. Only origins with at least
/// one destination are present.
pub type LegalMoves = BTreeMap<Square, Destinations>;

pub fn generate_legal_moves(game_state: &GameState) -> LegalMoves {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let checks = game_state.checks();
    let Some(king) = checks.king else {
        return LegalMoves::new();
    };

    let mut legal_moves = LegalMoves::new();
    for (origin, piece) in board.pieces_of(side) {
        let Some(kind) = piece.kind() else {
            continue;
        };
        if checks.is_double_check() && kind != PieceKind::King {
            continue;
        }

        let mut candidates = Destinations::new();
        match kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, origin, &mut candidates),
            PieceKind::Knight => generate_knight_moves(game_state, origin, &mut candidates),
            PieceKind::Bishop => generate_bishop_moves(game_state, origin, &mut candidates),
            PieceKind::Rook => generate_rook_moves(game_state, origin, &mut candidates),
            PieceKind::Queen => generate_queen_moves(game_state, origin, &mut candidates),
            PieceKind::King => generate_king_moves(game_state, origin, &mut candidates),
        }

        let mut destinations: Destinations = candidates
            .into_iter()
            .filter(|&destination| {
                if kind == PieceKind::King {
                    leaves_king_safe(board, side, origin, destination, None)
                } else {
                    is_legal_non_king_move(game_state, kind, origin, destination, king)
                }
            })
            .collect();

        if kind == PieceKind::King {
            generate_castling_moves(game_state, origin, &mut destinations);
        }

        if !destinations.is_empty() {
            destinations.sort_unstable();
            legal_moves.insert(origin, destinations);
        }
    }

    legal_moves
}

fn is_legal_non_king_move(
    game_state: &GameState,
    kind: PieceKind,
    origin: Square,
    destination: Square,
    king: Square,
) -> bool {
    let en_passant_victim = match game_state.en_passant() {
        Some(en_passant) if kind == PieceKind::Pawn && en_passant.target == destination => {
            Some(en_passant.victim)
        }
        _ => None,
    };

    if let Some(check) = game_state.checks().single() {
        let resolves = check.resolving_squares.contains(&destination)
            || en_passant_victim == Some(check.attacker);
        if !resolves {
            return false;
        }
    }

    // Only a piece on one of the king's lines can uncover an attack, and
    // en passant removes a second piece from the board.
    if en_passant_victim.is_some() || shares_line(origin, king) {
        return leaves_king_safe(
            game_state.board(),
            game_state.side_to_move(),
            origin,
            destination,
            en_passant_victim,
        );
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN parses")
    }

    fn destinations(game: &GameState, origin: Square) -> Vec<Square> {
        game.legal_moves()
            .get(&origin)
            .map(|d| d.to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn starting_position_destination_counts() {
        let game = GameState::new_game();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 10);
        assert_eq!(moves.values().map(|d| d.len()).sum::<usize>(), 20);

        for (&origin, destinations) in moves {
            let piece = game.board().piece_on(origin);
            assert!(piece.is_kind(PieceKind::Pawn) || piece.is_kind(PieceKind::Knight));
            assert_eq!(destinations.len(), 2);
        }
        assert_eq!(destinations(&game, 62), vec![45, 47]);
    }

    #[test]
    fn destinations_never_hold_own_pieces() {
        let game = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for (&origin, destinations) in game.legal_moves() {
            assert!(game.board().has_color_piece_on(origin, Color::Light));
            for &destination in destinations {
                assert!(!game.board().has_color_piece_on(destination, Color::Light));
            }
            assert!(destinations.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn single_check_restricts_non_king_moves_to_resolving_squares() {
        // Black rook e8 checks white king e1; white rook a4 and bishop b5 can interpose.
        let game = game("4r2k/8/8/1B6/R7/8/8/4K3 w - - 0 1");
        let check = game.checks().single().expect("single check").clone();

        for (&origin, destinations) in game.legal_moves() {
            if origin == 60 {
                continue;
            }
            for destination in destinations {
                assert!(check.resolving_squares.contains(destination));
            }
        }
        assert_eq!(destinations(&game, 32), vec![36]);
        assert_eq!(destinations(&game, 25), vec![4, 52]);
    }

    #[test]
    fn double_check_leaves_only_the_king() {
        let game = game("4r2k/8/8/1B6/R7/5n2/8/4K3 w - - 0 1");
        assert!(game.checks().is_double_check());
        assert!(game.legal_moves().keys().all(|&origin| origin == 60));
    }

    #[test]
    fn king_cannot_step_along_the_checking_ray() {
        let game = game("k3r3/8/8/8/8/8/8/4K3 w - - 0 1");
        let king_moves = destinations(&game, 60);
        assert!(!king_moves.contains(&52));
        assert_eq!(king_moves, vec![51, 53, 59, 61]);
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        // Black pawn d2 defended by the bishop on a5.
        let game = game("4k3/8/8/b7/8/8/3p4/4K3 w - - 0 1");
        assert!(!destinations(&game, 60).contains(&51));
    }

    #[test]
    fn kings_never_become_adjacent() {
        let game = game("8/8/8/3k4/8/4K3/8/8 w - - 0 1");
        let king_moves = destinations(&game, 44);
        assert!(!king_moves.contains(&35));
        assert!(!king_moves.contains(&36));
        assert!(king_moves.contains(&37));
    }

    #[test]
    fn pinned_piece_only_moves_along_the_pin() {
        // White rook e2 pinned by the black rook e8; it may slide on the e-file.
        let game = game("k3r3/8/8/8/8/8/4R3/4K3 w - - 0 1");
        assert_eq!(destinations(&game, 52), vec![4, 12, 20, 28, 36, 44]);

        // A pinned knight has no moves at all.
        let game = self::game("k3r3/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(destinations(&game, 52).is_empty());
    }

    #[test]
    fn en_passant_that_exposes_the_king_along_the_rank_is_illegal() {
        // After ...d7-d5 the e5xd6 capture would clear both pawns off the fifth rank.
        let mut game = game("4k3/3p4/8/r3P2K/8/8/8/8 b - - 0 1");
        game.make_move(11, 27);
        assert!(!game.is_legal_move(28, 19));
        assert!(game.is_legal_move(28, 20));
    }

    #[test]
    fn en_passant_may_capture_the_checking_pawn() {
        // ...d7-d5 gives check to the king on e4; exd6 e.p. removes the checker.
        let mut game = game("4k3/3p4/8/4P3/4K3/8/8/8 b - - 0 1");
        game.make_move(11, 27);
        assert!(game.checks().in_check());
        assert!(game.is_legal_move(28, 19));
    }
}
