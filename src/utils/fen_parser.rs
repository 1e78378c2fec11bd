//! FEN-to-GameState parser.
//!
//! Accepts the full six-field form as well as truncated strings carrying only
//! placement, side, castling and en passant. The halfmove clock is read and
//! validated but not kept.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::{row_of, Board};
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::pawn_moves::pawn_forward;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(ChessErrors::InvalidFen(fen.to_owned()));
    }

    let board = Board::from_placement(fields[0])?;
    let side_to_move = Color::from_fen_token(fields[1])?;
    let castle_rights = CastleRights::from_fen_token(fields[2])?;
    let en_passant = parse_en_passant(fields[3], &board, side_to_move)?;

    if let Some(halfmove) = fields.get(4) {
        halfmove
            .parse::<u16>()
            .map_err(|_| ChessErrors::InvalidFen(format!("invalid halfmove clock: {halfmove}")))?;
    }
    let fullmove_number = match fields.get(5) {
        Some(fullmove) => fullmove
            .parse::<u16>()
            .map_err(|_| ChessErrors::InvalidFen(format!("invalid fullmove number: {fullmove}")))?,
        None => 1,
    };

    GameState::from_parts(
        board,
        side_to_move,
        castle_rights,
        en_passant,
        fullmove_number,
    )
}

/// The target must sit behind an enemy pawn that could just have double
/// pushed; the victim is that pawn.
fn parse_en_passant(
    token: &str,
    board: &Board,
    side_to_move: Color,
) -> Result<Option<EnPassant>, ChessErrors> {
    if token == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(token)?;
    let pusher = side_to_move.opposite();
    let expected_row = match pusher {
        Color::Light => 5,
        Color::Dark => 2,
    };
    let victim = pawn_forward(pusher).step(target);

    match victim {
        Some(victim)
            if row_of(target) == expected_row
                && board.piece_on(victim).is(PieceKind::Pawn, pusher)
                && !board.has_piece_on(target) =>
        {
            Ok(Some(EnPassant { target, victim }))
        }
        _ => Err(ChessErrors::InvalidFen(format!(
            "en passant target {token} has no pawn behind it"
        ))),
    }
}
