//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments.

use crate::game_state::board::{square_at, Board};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, eighth rank on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            let piece = board.piece_on(square_at(row, file));
            match (piece.color(), piece.kind()) {
                (Some(color), Some(kind)) => out.push(piece_to_unicode(color, kind)),
                _ => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line with the side to move and the FEN.
pub fn render_game_state(game_state: &GameState) -> String {
    let side = match game_state.side_to_move() {
        Color::Light => "white",
        Color::Dark => "black",
    };
    format!(
        "{}\n{side} to move, {}",
        render_board(game_state.board()),
        game_state.to_fen()
    )
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_squares_render_as_dots() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4K3").expect("placement parses");
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 · · · · ♚ · · · 8");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
    }

    #[test]
    fn game_state_render_includes_fen() {
        let rendered = render_game_state(&GameState::new_game());
        assert!(rendered.ends_with("white to move, rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    }
}
