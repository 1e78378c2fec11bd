//! Outbound record builder.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::attack_generator::AttackingMoves;
use crate::move_generation::legal_move_generator::LegalMoves;
use crate::protocol::messages::*;

/// Appends records to an owned byte buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Builder {
    buf: Vec<u8>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(mut self, position: &str) -> Self {
        self.buf.push(POSITION_BYTE);
        self.buf.extend_from_slice(position.as_bytes());
        self.add_end()
    }

    pub fn add_command(mut self, command: &str) -> Self {
        self.buf.push(COMMAND_BYTE);
        self.buf.extend_from_slice(command.as_bytes());
        self.add_end()
    }

    pub fn add_error(mut self, error: &str) -> Self {
        self.buf.push(ERROR_BYTE);
        self.buf.extend_from_slice(error.as_bytes());
        self.add_end()
    }

    pub fn add_move(mut self, origin: Square, destination: Square) -> Self {
        self.buf.push(MOVE_BYTE);
        self.push_number(origin as usize);
        self.buf.push(SEPARATOR);
        self.push_number(destination as usize);
        self.add_end()
    }

    pub fn add_promotion(mut self, origin: Square, destination: Square, kind: PieceKind) -> Self {
        self.buf.push(PROMOTION_BYTE);
        self.push_number(origin as usize);
        self.buf.push(SEPARATOR);
        self.push_number(destination as usize);
        self.buf.push(SEPARATOR);
        self.buf.push(kind.letter() as u8);
        self.add_end()
    }

    /// `~<origins>`, then per origin: `<origin>`, `*<n>`, `<d1>:<d2>:...`.
    pub fn add_legal_moves(mut self, legal_moves: &LegalMoves) -> Self {
        self.buf.push(LEGAL_MOVES_BYTE);
        self.push_number(legal_moves.len());
        self = self.add_end();

        for (&origin, destinations) in legal_moves {
            self.push_number(origin as usize);
            self = self.add_end();
            self = self.add_array_header(destinations.len());
            self = self.add_square_list(destinations);
        }
        self
    }

    /// `^<origins>`, then per origin: `<origin>`, `*<rays>`, and per ray
    /// `*<len>` followed by `<s1>:<s2>:...`.
    pub fn add_attacking_moves(mut self, attacking_moves: &AttackingMoves) -> Self {
        self.buf.push(ATTACKING_MOVES_BYTE);
        self.push_number(attacking_moves.len());
        self = self.add_end();

        for (&origin, rays) in attacking_moves {
            self.push_number(origin as usize);
            self = self.add_end();
            self = self.add_array_header(rays.len());
            for ray in rays {
                self = self.add_array_header(ray.len());
                self = self.add_square_list(ray);
            }
        }
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn add_array_header(mut self, len: usize) -> Self {
        self.buf.push(ARRAY_BYTE);
        self.push_number(len);
        self.add_end()
    }

    fn add_square_list(mut self, squares: &[Square]) -> Self {
        for (idx, &square) in squares.iter().enumerate() {
            if idx > 0 {
                self.buf.push(SEPARATOR);
            }
            self.push_number(square as usize);
        }
        self.add_end()
    }

    fn push_number(&mut self, value: usize) {
        self.buf.extend_from_slice(value.to_string().as_bytes());
    }

    fn add_end(mut self) -> Self {
        self.buf.extend_from_slice(TERMINATOR);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn simple_records_are_tagged_and_terminated() {
        let out = Builder::new()
            .add_command("OK")
            .add_error("invalid message")
            .add_move(52, 36)
            .add_promotion(12, 4, PieceKind::Queen)
            .add_position("8/8/8/8/8/8/8/8 w - - 0 1")
            .into_bytes();
        assert_eq!(
            out,
            b"#OK\r\n-invalid message\r\n$52:36\r\n!12:4:q\r\n+8/8/8/8/8/8/8/8 w - - 0 1\r\n".to_vec()
        );
    }

    #[test]
    fn legal_moves_record_lists_each_origin() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN parses");
        let out = Builder::new().add_legal_moves(game.legal_moves()).into_bytes();
        let text = String::from_utf8(out).expect("record is ASCII");
        let lines: Vec<&str> = text.split_terminator("\r\n").collect();

        assert_eq!(lines[0], "~2");
        assert_eq!(lines[1], "56");
        assert_eq!(lines[2], "*10");
        assert_eq!(lines[3], "0:8:16:24:32:40:48:57:58:59");
        assert_eq!(lines[4], "60");
        assert_eq!(lines[5], "*5");
        assert_eq!(lines[6], "51:52:53:59:61");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn attacking_moves_record_separates_every_ray() {
        // Black rook a4 toward the white king e4; black king e8 has no neighbours.
        let game = GameState::from_fen("4k3/8/8/8/r3K3/8/8/8 w - - 0 1").expect("FEN parses");
        let out = Builder::new()
            .add_attacking_moves(game.attacking_moves())
            .into_bytes();
        assert_eq!(out, b"^1\r\n32\r\n*1\r\n*4\r\n33:34:35:36\r\n".to_vec());
    }
}
