//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board construction,
//! FEN parsing and the promotion entry point. The wire protocol has its own
//! error type (`protocol::messages::ProtocolError`) because decoding failures
//! are answered on the channel rather than propagated.
//!
//! Usage guidelines:
//! - Construction input is expected to be validated upstream. When it is not,
//!   the constructor returns one of these variants and no `GameState` exists;
//!   the core never continues with a half-built board.
//! - Move legality is not an error here. Callers check `is_legal_move` before
//!   calling `make_move`, and an empty `LegalMoves` is a normal terminal state.

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// A placement character is neither a piece letter, a digit nor `/`.
    #[error("invalid piece character {0:?}")]
    InvalidPieceCharacter(char),

    /// The placement does not describe exactly 8 ranks of 8 squares.
    ///
    /// Payload: the offending placement string.
    #[error("invalid board placement: {0}")]
    InvalidPlacement(String),

    /// The side-to-move token is not `w` or `b`.
    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),

    /// The castling token contains something other than `KQkq` or `-`.
    #[error("invalid castle rights: {0}")]
    InvalidCastleRights(String),

    /// A coordinate such as `e3` could not be read.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// The FEN string is missing fields or has too many.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A side has no king, or more than one.
    ///
    /// Payload: the side and the number of kings found.
    #[error("expected exactly one {0:?} king, found {1}")]
    KingCount(Color, usize),

    /// The side that just moved is left in check, so its king could be captured.
    #[error("side not to move is in check")]
    OpponentInCheck,

    /// `make_promotion` was asked for a move that is not a pawn reaching
    /// its last rank, or for a kind a pawn cannot become.
    #[error("invalid promotion from {0} to {1}")]
    InvalidPromotion(Square, Square),
}
