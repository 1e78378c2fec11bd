//! Compass directions over the mailbox board and the ray walk shared by
//! sliding pieces.
//!
//! `North` points toward the eighth rank, which is toward index 0.

use arrayvec::ArrayVec;

use crate::game_state::board::{file_of, row_of, Board};
use crate::game_state::chess_types::{Color, Square};

/// Squares threatened along one direction or by one jump. At most 7 long.
pub type AttackRay = ArrayVec<Square, 7>;

/// One piece's rays. At most 8 per piece.
pub type AttackRays = ArrayVec<AttackRay, 8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ORTHOGONALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

pub const DIAGONALS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Index delta for one step.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => -8,
            Direction::NorthEast => -7,
            Direction::East => 1,
            Direction::SouthEast => 9,
            Direction::South => 8,
            Direction::SouthWest => 7,
            Direction::West => -1,
            Direction::NorthWest => -9,
        }
    }

    /// Steps available from `square` before leaving the board.
    #[inline]
    pub const fn distance_to_edge(self, square: Square) -> u8 {
        let north = row_of(square);
        let south = 7 - row_of(square);
        let west = file_of(square);
        let east = 7 - file_of(square);

        match self {
            Direction::North => north,
            Direction::East => east,
            Direction::South => south,
            Direction::West => west,
            Direction::NorthEast => min(north, east),
            Direction::SouthEast => min(south, east),
            Direction::SouthWest => min(south, west),
            Direction::NorthWest => min(north, west),
        }
    }

    /// Square one step away, `None` at the edge.
    #[inline]
    pub const fn step(self, square: Square) -> Option<Square> {
        if self.distance_to_edge(square) == 0 {
            return None;
        }
        Some((square as i8 + self.offset()) as Square)
    }
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

/// Walk from `origin` (exclusive) toward the edge, stopping at and including
/// the first occupied square.
pub fn walk_ray(board: &Board, origin: Square, direction: Direction) -> AttackRay {
    let mut ray = AttackRay::new();
    let mut square = origin;

    while let Some(next) = direction.step(square) {
        ray.push(next);
        if board.has_piece_on(next) {
            break;
        }
        square = next;
    }

    ray
}

/// Rays from `origin` along `directions` that end on an enemy of `color`.
/// Rays running off the board or into a friendly piece are dropped.
pub fn ray_attacks(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[Direction],
) -> AttackRays {
    let enemy = color.opposite();
    directions
        .iter()
        .map(|&direction| walk_ray(board, origin, direction))
        .filter(|ray| {
            ray.last()
                .is_some_and(|&last| board.has_color_piece_on(last, enemy))
        })
        .collect()
}

/// True when two squares share a row, file or diagonal.
#[inline]
pub fn shares_line(a: Square, b: Square) -> bool {
    let rows = row_of(a).abs_diff(row_of(b));
    let files = file_of(a).abs_diff(file_of(b));
    rows == 0 || files == 0 || rows == files
}
