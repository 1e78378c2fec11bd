use arrayvec::ArrayVec;

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::directions::{walk_ray, Direction};

/// Destinations for one origin. A queen on an open board reaches 27 squares.
pub type Destinations = ArrayVec<Square, 28>;

/// Push every square along `directions` up to the first blocker, including
/// the blocker only when it belongs to the opponent.
pub fn push_sliding_destinations(
    game_state: &GameState,
    origin: Square,
    directions: &[Direction],
    out: &mut Destinations,
) {
    let side = game_state.side_to_move();
    for &direction in directions {
        for square in walk_ray(game_state.board(), origin, direction) {
            if !game_state.board().has_color_piece_on(square, side) {
                out.push(square);
            }
        }
    }
}

/// Push each square that does not hold one of the mover's own pieces.
pub fn push_unless_friendly(
    game_state: &GameState,
    squares: impl IntoIterator<Item = Square>,
    out: &mut Destinations,
) {
    let side = game_state.side_to_move();
    out.extend(
        squares
            .into_iter()
            .filter(|&square| !game_state.board().has_color_piece_on(square, side)),
    );
}
