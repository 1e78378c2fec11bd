//! Crate root module declarations for the chess referee.
//!
//! This file exposes the rules engine (game state, attack and legal move
//! generation, move application), the tagged-byte wire protocol, the
//! per-game session, and the FEN/rendering helpers so the binary, tests and
//! benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod tracked_move;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod directions;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod attack_generator;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod protocol {
    pub mod builder;
    pub mod messages;
    pub mod parser;
}

pub mod session {
    pub mod config;
    pub mod session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
