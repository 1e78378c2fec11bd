//! Check detection and the king-safety simulation.

use arrayvec::ArrayVec;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::attack_generator::{is_square_attacked, AttackingMoves};

/// One piece giving check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    /// Attacker square plus every ray square strictly before the king. Moving
    /// a non-king piece onto one of these captures or blocks the attacker.
    pub resolving_squares: ArrayVec<Square, 8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checks {
    pub king: Option<Square>,
    pub checks: ArrayVec<Check, 16>,
}

impl Checks {
    #[inline]
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }

    /// The check to resolve when exactly one piece gives check.
    #[inline]
    pub fn single(&self) -> Option<&Check> {
        match self.checks.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

/// Checks against `color`'s king, read from the opponent's attack map.
pub fn find_checks(board: &Board, color: Color, opponent_attacks: &AttackingMoves) -> Checks {
    let Some(king) = board.king_square(color) else {
        return Checks::default();
    };

    let mut found = Checks {
        king: Some(king),
        checks: ArrayVec::new(),
    };

    for (&attacker, rays) in opponent_attacks {
        for ray in rays {
            let Some((&last, before)) = ray.split_last() else {
                continue;
            };
            if last != king {
                continue;
            }

            let mut resolving_squares = ArrayVec::new();
            resolving_squares.push(attacker);
            resolving_squares.extend(before.iter().copied());
            // One ray per slider direction plus one per knight jump: at most 16.
            found.checks.push(Check {
                attacker,
                resolving_squares,
            });
        }
    }

    found
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}

/// Play `origin` → `destination` on a copy of `board` (also clearing
/// `removed`, the en-passant victim) and report whether `color`'s king is
/// safe afterwards. Only attack enumeration runs on the copy.
pub fn leaves_king_safe(
    board: &Board,
    color: Color,
    origin: Square,
    destination: Square,
    removed: Option<Square>,
) -> bool {
    let mut simulated = *board;
    if let Some(square) = removed {
        simulated.clear(square);
    }
    simulated.relocate(origin, destination);
    !is_king_in_check(&simulated, color)
}
