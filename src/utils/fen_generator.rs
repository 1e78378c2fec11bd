use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

/// Render the position as FEN. The halfmove clock is not tracked and is
/// always written as `0`.
pub fn generate_fen(game_state: &GameState) -> String {
    let en_passant = game_state
        .en_passant()
        .and_then(|en_passant| square_to_algebraic(en_passant.target).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} 0 {}",
        game_state.board().placement(),
        game_state.side_to_move().fen_char(),
        game_state.castle_rights().to_fen_token(),
        en_passant,
        game_state.fullmove_number()
    )
}
