//! Session configuration shared by the binary and tests.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// FEN the first game starts from.
    pub position: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            position: STARTING_POSITION_FEN.to_owned(),
        }
    }
}
