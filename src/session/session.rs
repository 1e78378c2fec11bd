//! One game channel: decode a record, act on the game, encode the reply.
//!
//! Inbound moves are checked against the cached legal moves before they reach
//! `GameState`, which trusts its input.

use tracing::{debug, info, trace, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::row_of;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::pawn_moves::promotion_row;
use crate::protocol::builder::Builder;
use crate::protocol::messages::{Command, Message, TERMINATOR};
use crate::protocol::parser::parse_message;
use crate::session::config::SessionConfig;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::render_game_state::render_game_state;

const OK: &str = "OK";

pub struct Session {
    game_state: GameState,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self, ChessErrors> {
        let game_state = GameState::from_fen(&config.position)?;
        info!(fen = %game_state.to_fen(), "session started");
        Ok(Self { game_state })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one complete inbound record and return the reply bytes.
    pub fn handle(&mut self, input: &[u8]) -> Vec<u8> {
        let reply = match parse_message(input) {
            Ok(message) => self.handle_message(message),
            Err(err) => {
                warn!(%err, "rejected inbound record");
                Builder::new().add_error(&err.to_string())
            }
        };
        reply.into_bytes()
    }

    /// Handle one line read from a byte stream. A trailing `\n` or `\r\n`
    /// is replaced by the record terminator; the bytes need not be UTF-8.
    pub fn handle_line(&mut self, line: &[u8]) -> Vec<u8> {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let mut record = Vec::with_capacity(line.len() + TERMINATOR.len());
        record.extend_from_slice(line);
        record.extend_from_slice(TERMINATOR);
        self.handle(&record)
    }

    fn handle_message(&mut self, message: Message) -> Builder {
        match message {
            Message::Command(command) => self.handle_command(command),
            Message::Move {
                origin,
                destination,
            } => self.handle_move(origin, destination, None),
            Message::Promotion {
                origin,
                destination,
                kind,
            } => self.handle_move(origin, destination, Some(kind)),
            Message::Position(fen) => self.handle_position(&fen),
        }
    }

    fn handle_command(&self, command: Command) -> Builder {
        debug!(?command, "command");
        match command {
            Command::Start => Builder::new().add_command(OK),
            Command::LegalMoves => Builder::new().add_legal_moves(self.game_state.legal_moves()),
            Command::AttackingMoves => {
                Builder::new().add_attacking_moves(self.game_state.attacking_moves())
            }
            Command::Board => Builder::new().add_position(&self.game_state.to_fen()),
        }
    }

    fn handle_move(
        &mut self,
        origin: Square,
        destination: Square,
        promotion: Option<PieceKind>,
    ) -> Builder {
        if origin > 63 || destination > 63 {
            warn!(origin, destination, "square out of range");
            return Builder::new().add_error("square out of range");
        }
        if !self.game_state.is_legal_move(origin, destination) {
            warn!(origin, destination, "illegal move");
            return Builder::new().add_error("illegal move");
        }

        let piece = self.game_state.board().piece_on(origin);
        let promotes = piece.is_kind(PieceKind::Pawn)
            && piece
                .color()
                .is_some_and(|color| row_of(destination) == promotion_row(color));

        let tracked = match (promotes, promotion) {
            (false, None) => self.game_state.make_move(origin, destination),
            (true, Some(kind)) => match self.game_state.make_promotion(origin, destination, kind) {
                Ok(tracked) => tracked,
                Err(err) => {
                    warn!(%err, "rejected promotion");
                    return Builder::new().add_error(&err.to_string());
                }
            },
            (true, None) => {
                warn!(origin, destination, "pawn move onto last rank without a piece choice");
                return Builder::new().add_error("promotion required");
            }
            (false, Some(_)) => {
                warn!(origin, destination, "promotion record for a non-promoting move");
                return Builder::new().add_error("not a promotion");
            }
        };

        debug!(
            origin = %square_name(tracked.origin),
            destination = %square_name(tracked.destination),
            capture = tracked.is_capture(),
            legal_origins = self.game_state.legal_moves().len(),
            attacking_origins = self.game_state.attacking_moves().len(),
            "applied move"
        );
        trace!("\n{}", render_game_state(&self.game_state));

        Builder::new().add_command(OK)
    }

    fn handle_position(&mut self, fen: &str) -> Builder {
        match GameState::from_fen(fen) {
            Ok(game_state) => {
                info!(fen, "position replaced");
                self.game_state = game_state;
                Builder::new().add_command(OK)
            }
            Err(err) => {
                warn!(%err, fen, "rejected position");
                Builder::new().add_error(&err.to_string())
            }
        }
    }
}

fn square_name(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}
