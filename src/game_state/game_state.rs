//! Authoritative rules state for one game.
//!
//! `GameState` owns the board, side to move, castle rights, en-passant target
//! and move history, and caches the derived views every caller asks for: the
//! opponent's attack map, the checks against the side to move, and the legal
//! moves. The caches are rebuilt wholesale after every applied move, so the
//! accessors never compute anything.

use std::collections::BTreeMap;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{row_of, Board};
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::*;
use crate::game_state::tracked_move::TrackedMove;
use crate::move_generation::attack_generator::{generate_attacking_moves, AttackingMoves};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{find_checks, is_king_in_check, Checks};
use crate::move_generation::legal_move_generator::{generate_legal_moves, LegalMoves};
use crate::moves::pawn_moves::promotion_row;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) history: Vec<TrackedMove>,

    // Where the game was picked up, for the FEN move counter.
    starting_side: Color,
    starting_fullmove: u16,

    // --- Derived caches ---
    attacking_moves: AttackingMoves,
    checks: Checks,
    legal_moves: LegalMoves,
}

impl GameState {
    /// Build a game from a placement string (`"rnbqkbnr/pppppppp/8/..."`),
    /// the side to move and the castle rights, with no en-passant target.
    pub fn new(
        position: &str,
        side_to_move: Color,
        castle_rights: CastleRights,
    ) -> Result<Self, ChessErrors> {
        let board = Board::from_placement(position)?;
        Self::from_parts(board, side_to_move, castle_rights, None, 1)
    }

    /// Standard initial position, Light to move.
    pub fn new_game() -> Self {
        Self::assemble(
            Board::starting_position(),
            Color::Light,
            CastleRights::ALL,
            None,
            1,
        )
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Validate and assemble. Each side must have exactly one king and the
    /// side that is not to move must not be in check.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant: Option<EnPassant>,
        fullmove_number: u16,
    ) -> Result<Self, ChessErrors> {
        for color in [Color::Light, Color::Dark] {
            let kings = board.count(Piece::new(PieceKind::King, color));
            if kings != 1 {
                return Err(ChessErrors::KingCount(color, kings));
            }
        }
        if is_king_in_check(&board, side_to_move.opposite()) {
            return Err(ChessErrors::OpponentInCheck);
        }

        Ok(Self::assemble(
            board,
            side_to_move,
            castle_rights,
            en_passant,
            fullmove_number,
        ))
    }

    fn assemble(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant: Option<EnPassant>,
        fullmove_number: u16,
    ) -> Self {
        let mut game_state = Self {
            board,
            side_to_move,
            castle_rights,
            en_passant,
            history: Vec::new(),
            starting_side: side_to_move,
            starting_fullmove: fullmove_number.max(1),
            attacking_moves: BTreeMap::new(),
            checks: Checks::default(),
            legal_moves: BTreeMap::new(),
        };
        game_state.refresh();
        game_state
    }

    /// Rebuild the opponent's attack map, then the checks, then legal moves.
    fn refresh(&mut self) {
        self.attacking_moves = generate_attacking_moves(&self.board, self.side_to_move.opposite());
        self.checks = find_checks(&self.board, self.side_to_move, &self.attacking_moves);
        self.legal_moves = generate_legal_moves(self);
    }

    /// Apply a move taken from `legal_moves()`. The input is trusted: callers
    /// validate with `is_legal_move` first.
    pub fn make_move(&mut self, origin: Square, destination: Square) -> TrackedMove {
        debug_assert!(
            self.is_legal_move(origin, destination),
            "make_move called with an illegal move {origin} -> {destination}"
        );
        let tracked = apply_move(self, origin, destination);
        self.refresh();
        tracked
    }

    /// Apply a pawn move onto its last rank and replace the pawn with `kind`.
    pub fn make_promotion(
        &mut self,
        origin: Square,
        destination: Square,
        kind: PieceKind,
    ) -> Result<TrackedMove, ChessErrors> {
        let pawn = self.board.piece_on(origin);
        let Some(color) = pawn.color() else {
            return Err(ChessErrors::InvalidPromotion(origin, destination));
        };
        if !pawn.is_kind(PieceKind::Pawn)
            || row_of(destination) != promotion_row(color)
            || !kind.is_promotable()
        {
            return Err(ChessErrors::InvalidPromotion(origin, destination));
        }

        let mut tracked = apply_move(self, origin, destination);
        tracked.promotion = Some(kind);
        self.board.set_piece(destination, Piece::new(kind, color));
        if let Some(last) = self.history.last_mut() {
            last.promotion = Some(kind);
        }
        self.refresh();
        Ok(tracked)
    }

    #[inline]
    pub fn is_legal_move(&self, origin: Square, destination: Square) -> bool {
        self.legal_moves
            .get(&origin)
            .is_some_and(|destinations| destinations.contains(&destination))
    }

    #[inline]
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    /// Attack map of the side that is not to move.
    #[inline]
    pub fn attacking_moves(&self) -> &AttackingMoves {
        &self.attacking_moves
    }

    #[inline]
    pub fn checks(&self) -> &Checks {
        &self.checks
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_snapshot(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    #[inline]
    pub fn history(&self) -> &[TrackedMove] {
        &self.history
    }

    /// FEN full-move counter: starts at the constructed value and increments
    /// after each Dark move.
    pub fn fullmove_number(&self) -> u16 {
        let offset = usize::from(self.starting_side == Color::Dark);
        let completed = (self.history.len() + offset) / 2;
        self.starting_fullmove
            .saturating_add(u16::try_from(completed).unwrap_or(u16::MAX))
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn new_game_matches_start_fen() {
        let game = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("start FEN parses");
        assert_eq!(game.board_snapshot(), parsed.board_snapshot());
        assert_eq!(game.legal_moves(), parsed.legal_moves());
        assert_eq!(game.to_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn constructor_rejects_missing_or_extra_kings() {
        assert_eq!(
            GameState::new("8/8/8/8/8/8/8/4K3", Color::Light, CastleRights::NONE).err(),
            Some(ChessErrors::KingCount(Color::Dark, 0))
        );
        assert_eq!(
            GameState::new("4k3/8/8/8/8/8/8/3KK3", Color::Light, CastleRights::NONE).err(),
            Some(ChessErrors::KingCount(Color::Light, 2))
        );
    }

    #[test]
    fn constructor_keeps_the_given_castle_rights() {
        let rights = CastleRights::new(true, false, false, true);
        let game = GameState::new("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R", Color::Light, rights)
            .expect("placement is valid");
        assert_eq!(game.castle_rights(), rights);
        assert!(game.is_legal_move(60, 62));
        assert!(!game.is_legal_move(60, 58));
        assert_eq!(game.to_fen(), "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Kq - 0 1");
    }

    #[test]
    fn constructor_rejects_capturable_king() {
        // Dark is in check from the e1 rook but it is Light to move.
        let result = GameState::new("4k3/8/8/8/8/8/8/K3R3", Color::Light, CastleRights::NONE);
        assert_eq!(result.err(), Some(ChessErrors::OpponentInCheck));

        let game = GameState::new("4k3/8/8/8/8/8/8/K3R3", Color::Dark, CastleRights::NONE)
            .expect("side to move may be in check");
        assert!(game.checks().in_check());
    }

    #[test]
    fn constructor_rejects_bad_placement_characters() {
        let result = GameState::new("4k3/8/8/8/8/8/8/K3X3", Color::Light, CastleRights::NONE);
        assert_eq!(result.err(), Some(ChessErrors::InvalidPieceCharacter('X')));
    }

    #[test]
    fn make_move_flips_side_and_records_history() {
        let mut game = GameState::new_game();
        let tracked = game.make_move(52, 36);
        assert!(tracked.is_double_pawn_push());
        assert_eq!(game.side_to_move(), Color::Dark);
        assert_eq!(game.history(), &[tracked]);
        assert_eq!(
            game.en_passant(),
            Some(EnPassant {
                target: 44,
                victim: 36
            })
        );
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        game.make_move(12, 28);
        assert_eq!(game.fullmove_number(), 2);
        assert!(game.legal_moves().keys().all(|&sq| game.board().has_color_piece_on(sq, Color::Light)));
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut game = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN parses");
        assert!(game.is_legal_move(12, 4));

        let tracked = game
            .make_promotion(12, 4, PieceKind::Knight)
            .expect("promotion is well-formed");
        assert_eq!(tracked.promotion, Some(PieceKind::Knight));
        assert!(game.board().piece_on(4).is(PieceKind::Knight, Color::Light));
        assert_eq!(game.history()[0].promotion, Some(PieceKind::Knight));
        assert_eq!(game.side_to_move(), Color::Dark);
    }

    #[test]
    fn malformed_promotions_are_rejected() {
        let mut game = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN parses");
        assert_eq!(
            game.make_promotion(12, 4, PieceKind::King).err(),
            Some(ChessErrors::InvalidPromotion(12, 4))
        );
        assert_eq!(
            game.make_promotion(60, 52, PieceKind::Queen).err(),
            Some(ChessErrors::InvalidPromotion(60, 52))
        );
        assert_eq!(
            game.make_promotion(20, 12, PieceKind::Queen).err(),
            Some(ChessErrors::InvalidPromotion(20, 12))
        );
        assert!(game.history().is_empty());
    }

    fn assert_move_invariants(game: &GameState) {
        let side = game.side_to_move();
        let checks = game.checks();

        for (&origin, destinations) in game.legal_moves() {
            let is_king = game.board().piece_on(origin).is_kind(PieceKind::King);
            if checks.is_double_check() {
                assert!(is_king, "only the king may move in double check");
            }

            for &destination in destinations {
                assert!(!game.board().has_color_piece_on(destination, side));

                let Some(check) = checks.single() else {
                    continue;
                };
                let is_en_passant = game.en_passant().is_some_and(|ep| {
                    ep.target == destination && ep.victim == check.attacker
                }) && game.board().piece_on(origin).is_kind(PieceKind::Pawn);
                if !is_king && !is_en_passant {
                    assert!(check.resolving_squares.contains(&destination));
                }
            }
        }
    }

    #[test]
    fn random_playouts_preserve_rule_invariants() {
        use rand::rngs::StdRng;
        use rand::seq::IndexedRandom;
        use rand::SeedableRng;

        let pawn_count = |game: &GameState| {
            game.board().count(Piece::new(PieceKind::Pawn, Color::Light))
                + game.board().count(Piece::new(PieceKind::Pawn, Color::Dark))
        };

        for seed in 0..24u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new_game();

            for _ in 0..160 {
                assert_move_invariants(&game);

                let moves: Vec<(Square, Square)> = game
                    .legal_moves()
                    .iter()
                    .flat_map(|(&origin, destinations)| {
                        destinations.iter().map(move |&destination| (origin, destination))
                    })
                    .collect();
                let Some(&(origin, destination)) = moves.choose(&mut rng) else {
                    break;
                };

                let rights_before = game.castle_rights();
                let pawns_before = pawn_count(&game);
                let piece = game.board().piece_on(origin);
                let color = piece.color().expect("origin holds a piece");

                let tracked = if piece.is_kind(PieceKind::Pawn)
                    && row_of(destination) == promotion_row(color)
                {
                    game.make_promotion(origin, destination, PieceKind::Queen)
                        .expect("legal pawn move onto last rank promotes")
                } else {
                    game.make_move(origin, destination)
                };

                assert!(game.castle_rights().is_subset_of(rights_before));
                if tracked.is_en_passant() {
                    assert_eq!(pawn_count(&game), pawns_before - 1);
                }
                assert_eq!(game.board().count(Piece::new(PieceKind::King, Color::Light)), 1);
                assert_eq!(game.board().count(Piece::new(PieceKind::King, Color::Dark)), 1);
                assert!(!is_king_in_check(game.board(), color), "mover left in check");

                let reparsed = GameState::from_fen(&game.to_fen()).expect("generated FEN parses");
                assert_eq!(reparsed.legal_moves(), game.legal_moves());
            }
        }
    }
}
