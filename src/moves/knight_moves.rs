use arrayvec::ArrayVec;

use crate::game_state::board::{file_of, row_of, square_at, Board};
use crate::game_state::chess_types::{Color, Square};
use crate::moves::directions::{AttackRay, AttackRays};

// (file delta, row delta)
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// Every on-board L-shaped landing square from `origin`.
pub fn knight_jumps(origin: Square) -> ArrayVec<Square, 8> {
    let file = file_of(origin) as i8;
    let row = row_of(origin) as i8;

    KNIGHT_JUMPS
        .into_iter()
        .filter_map(|(df, dr)| {
            let (f, r) = (file + df, row + dr);
            if (0..8).contains(&f) && (0..8).contains(&r) {
                Some(square_at(r as u8, f as u8))
            } else {
                None
            }
        })
        .collect()
}

/// Jumps landing on an enemy piece.
pub fn knight_attacks(board: &Board, origin: Square, color: Color) -> AttackRays {
    let enemy = color.opposite();
    knight_jumps(origin)
        .into_iter()
        .filter(|&square| board.has_color_piece_on(square, enemy))
        .map(|square| {
            let mut ray = AttackRay::new();
            ray.push(square);
            ray
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_jumps_from_d4_has_eight_targets() {
        let d4 = 35u8;
        assert_eq!(knight_jumps(d4).len(), 8);
    }

    #[test]
    fn knight_jumps_do_not_wrap_across_files() {
        let mut from_h1 = knight_jumps(63);
        from_h1.sort_unstable();
        assert_eq!(from_h1.as_slice(), &[46, 53]);

        let mut from_a8 = knight_jumps(0);
        from_a8.sort_unstable();
        assert_eq!(from_a8.as_slice(), &[10, 17]);
    }

    #[test]
    fn knight_attacks_only_report_enemy_targets() {
        let board = Board::starting_position();
        assert!(knight_attacks(&board, 62, Color::Light).is_empty());

        let board = Board::from_placement("8/8/8/8/8/5p2/4P3/6N1").expect("placement parses");
        let attacks = knight_attacks(&board, 62, Color::Light);
        assert_eq!(attacks.len(), 1);
        assert_eq!(attacks[0].as_slice(), &[45]);
    }
}
