//! Inbound record parser.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::protocol::messages::*;

/// Decode one complete record, terminator included.
pub fn parse_message(input: &[u8]) -> Result<Message, ProtocolError> {
    let body = input
        .strip_suffix(TERMINATOR)
        .ok_or(ProtocolError::InvalidMessage)?;
    let (&tag, payload) = body.split_first().ok_or(ProtocolError::InvalidMessage)?;
    if payload.is_empty() || payload.contains(&b'\r') || payload.contains(&b'\n') {
        return Err(ProtocolError::InvalidMessage);
    }
    let payload = std::str::from_utf8(payload).map_err(|_| ProtocolError::InvalidMessage)?;

    match tag {
        POSITION_BYTE => Ok(Message::Position(payload.to_owned())),
        COMMAND_BYTE => Command::from_name(payload)
            .map(Message::Command)
            .ok_or_else(|| ProtocolError::UnknownCommand(payload.to_owned())),
        MOVE_BYTE => {
            let [origin, destination] = split_fields::<2>(payload)?;
            Ok(Message::Move {
                origin: parse_square(origin)?,
                destination: parse_square(destination)?,
            })
        }
        PROMOTION_BYTE => {
            let [origin, destination, kind] = split_fields::<3>(payload)?;
            Ok(Message::Promotion {
                origin: parse_square(origin)?,
                destination: parse_square(destination)?,
                kind: parse_promotion_kind(kind)?,
            })
        }
        _ => Err(ProtocolError::InvalidMessage),
    }
}

fn split_fields<const N: usize>(payload: &str) -> Result<[&str; N], ProtocolError> {
    let mut fields = [""; N];
    let mut parts = payload.split(SEPARATOR as char);
    for field in fields.iter_mut() {
        *field = parts.next().ok_or(ProtocolError::InvalidMessage)?;
    }
    if parts.next().is_some() {
        return Err(ProtocolError::InvalidMessage);
    }
    Ok(fields)
}

/// Decimal index. Range against the board is checked by the session.
fn parse_square(field: &str) -> Result<Square, ProtocolError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::InvalidMessage);
    }
    field.parse::<Square>().map_err(|_| ProtocolError::InvalidMessage)
}

fn parse_promotion_kind(field: &str) -> Result<PieceKind, ProtocolError> {
    match field {
        "n" => Ok(PieceKind::Knight),
        "b" => Ok(PieceKind::Bishop),
        "r" => Ok(PieceKind::Rook),
        "q" => Ok(PieceKind::Queen),
        _ => Err(ProtocolError::InvalidMessage),
    }
}
