//! Legal-move tree counting.
//!
//! Perft walks the cached legal moves of each position, expanding a pawn move
//! onto its last rank into the four promotion choices, and classifies the
//! leaf moves from the pre-move board.

use arrayvec::ArrayVec;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::row_of;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::tracked_move::TrackedMove;
use crate::moves::pawn_moves::promotion_row;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn record(&mut self, tracked: &TrackedMove) {
        self.nodes += 1;
        if tracked.is_capture() {
            self.captures += 1;
        }
        if tracked.is_en_passant() {
            self.en_passant += 1;
        }
        if tracked.is_castle() {
            self.castles += 1;
        }
        if tracked.is_promotion() {
            self.promotions += 1;
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (&origin, destinations) in game_state.legal_moves() {
        for &destination in destinations {
            for promotion in promotion_choices(game_state, origin, destination) {
                if depth == 1 {
                    let mut tracked = TrackedMove::new(game_state.board(), origin, destination);
                    tracked.promotion = promotion;
                    total.record(&tracked);
                    continue;
                }

                let mut next = game_state.clone();
                match promotion {
                    Some(kind) => {
                        next.make_promotion(origin, destination, kind)?;
                    }
                    None => {
                        next.make_move(origin, destination);
                    }
                }
                total.merge(perft(&next, depth - 1)?);
            }
        }
    }

    Ok(total)
}

/// `[None]` for ordinary moves, one entry per promotable kind otherwise.
fn promotion_choices(
    game_state: &GameState,
    origin: Square,
    destination: Square,
) -> ArrayVec<Option<PieceKind>, 4> {
    let piece = game_state.board().piece_on(origin);
    let promotes = piece.is_kind(PieceKind::Pawn)
        && piece
            .color()
            .is_some_and(|color| row_of(destination) == promotion_row(color));

    if promotes {
        PROMOTION_KINDS.into_iter().map(Some).collect()
    } else {
        let mut single = ArrayVec::new();
        single.push(None);
        single
    }
}
