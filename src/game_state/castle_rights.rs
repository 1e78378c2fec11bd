//! Per-side, per-wing castling flags.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        }
    }
}

/// Four independent flags. Flags are only ever cleared during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights {
    flags: [[bool; 2]; 2],
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        flags: [[true; 2]; 2],
    };
    pub const NONE: CastleRights = CastleRights {
        flags: [[false; 2]; 2],
    };

    pub const fn new(
        light_king_side: bool,
        light_queen_side: bool,
        dark_king_side: bool,
        dark_queen_side: bool,
    ) -> Self {
        Self {
            flags: [
                [light_king_side, light_queen_side],
                [dark_king_side, dark_queen_side],
            ],
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.flags[color.index()][side.index()]
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.flags[color.index()][side.index()] = false;
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.flags[color.index()] = [false; 2];
    }

    /// True when every flag set in `self` is also set in `earlier`.
    pub fn is_subset_of(self, earlier: CastleRights) -> bool {
        self.flags
            .iter()
            .flatten()
            .zip(earlier.flags.iter().flatten())
            .all(|(&now, &before)| !now || before)
    }

    /// Parse the FEN castling field (`KQkq`, any subset, or `-`).
    pub fn from_fen_token(token: &str) -> Result<Self, ChessErrors> {
        if token == "-" {
            return Ok(Self::NONE);
        }
        if token.is_empty() {
            return Err(ChessErrors::InvalidCastleRights(token.to_owned()));
        }

        let mut rights = Self::NONE;
        for ch in token.chars() {
            let (color, side) = match ch {
                'K' => (Color::Light, CastleSide::KingSide),
                'Q' => (Color::Light, CastleSide::QueenSide),
                'k' => (Color::Dark, CastleSide::KingSide),
                'q' => (Color::Dark, CastleSide::QueenSide),
                _ => return Err(ChessErrors::InvalidCastleRights(token.to_owned())),
            };
            rights.flags[color.index()][side.index()] = true;
        }
        Ok(rights)
    }

    pub fn to_fen_token(self) -> String {
        let mut out = String::with_capacity(4);
        for (color, side, ch) in [
            (Color::Light, CastleSide::KingSide, 'K'),
            (Color::Light, CastleSide::QueenSide, 'Q'),
            (Color::Dark, CastleSide::KingSide, 'k'),
            (Color::Dark, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                out.push(ch);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_token_round_trips_subsets() {
        for token in ["KQkq", "Kq", "k", "-"] {
            let rights = CastleRights::from_fen_token(token).expect("token should parse");
            assert_eq!(rights.to_fen_token(), token);
        }
        assert!(CastleRights::from_fen_token("KX").is_err());
        assert!(CastleRights::from_fen_token("").is_err());
    }

    #[test]
    fn revoking_only_clears_flags() {
        let before = CastleRights::ALL;
        let mut after = before;
        after.revoke(Color::Dark, CastleSide::QueenSide);
        assert!(!after.has(Color::Dark, CastleSide::QueenSide));
        assert!(after.has(Color::Dark, CastleSide::KingSide));
        assert!(after.is_subset_of(before));
        assert!(!before.is_subset_of(after));

        after.revoke_all(Color::Light);
        assert_eq!(after.to_fen_token(), "k");
    }
}
