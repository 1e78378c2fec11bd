//! Wire vocabulary: tag bytes and the typed inbound messages.
//!
//! Every record is one tag byte, a payload, and a `\r\n` terminator. Squares
//! travel as decimal indices with `0 == a8`.

use crate::game_state::chess_types::{PieceKind, Square};

pub const POSITION_BYTE: u8 = b'+';
pub const MOVE_BYTE: u8 = b'$';
pub const COMMAND_BYTE: u8 = b'#';
pub const ERROR_BYTE: u8 = b'-';
pub const PROMOTION_BYTE: u8 = b'!';
pub const SEPARATOR: u8 = b':';

// Outbound only.
pub const LEGAL_MOVES_BYTE: u8 = b'~';
pub const ATTACKING_MOVES_BYTE: u8 = b'^';
pub const ARRAY_BYTE: u8 = b'*';

pub const TERMINATOR: &[u8] = b"\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    LegalMoves,
    AttackingMoves,
    Board,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "START" => Some(Command::Start),
            "LEGAL_MOVES" => Some(Command::LegalMoves),
            "ATTACKING_MOVES" => Some(Command::AttackingMoves),
            "BOARD" => Some(Command::Board),
            _ => None,
        }
    }
}

/// Decoded inbound record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// FEN text replacing the current game.
    Position(String),
    Command(Command),
    Move {
        origin: Square,
        destination: Square,
    },
    Promotion {
        origin: Square,
        destination: Square,
        kind: PieceKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// Unknown tag, missing terminator, bad number or bad field count.
    #[error("invalid message")]
    InvalidMessage,

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
