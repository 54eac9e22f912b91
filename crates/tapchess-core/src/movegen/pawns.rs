//! Pawn move generation.
//!
//! Pushes go straight ahead onto empty squares, captures go diagonally onto
//! enemy pieces. Arriving on the far rank always promotes to a queen. There
//! is no en passant.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The two forward diagonals of a `color` pawn.
pub(super) fn capture_directions(color: Color) -> [Direction; 2] {
    match color {
        Color::White => [Direction::NorthWest, Direction::NorthEast],
        Color::Black => [Direction::SouthWest, Direction::SouthEast],
    }
}

/// Squares a `color` pawn on `from` attacks, whether or not anything stands there.
pub(super) fn attacked_squares(color: Color, from: Square) -> impl Iterator<Item = Square> {
    capture_directions(color)
        .into_iter()
        .filter_map(move |direction| from.neighbor(direction))
}

/// Tag moves onto the far rank with a queen promotion.
fn with_promotion(us: Color, from: Square, to: Square) -> Move {
    if to.rank() == us.promotion_rank() {
        Move::promotion(from, to, PieceKind::Queen)
    } else {
        Move::new(from, to)
    }
}

pub(super) fn gen_pawn(board: &Board, us: Color, from: Square, list: &mut Vec<Move>) {
    let forward = us.forward();

    // The double push chains through the single push: it exists only if
    // the square in between was itself a legal destination.
    if let Some(one) = from.neighbor(forward).filter(|&sq| !board.is_occupied(sq)) {
        list.push(with_promotion(us, from, one));

        if from.rank() == us.pawn_rank()
            && let Some(two) = one.neighbor(forward).filter(|&sq| !board.is_occupied(sq))
        {
            list.push(with_promotion(us, from, two));
        }
    }

    for to in attacked_squares(us, from) {
        if board.color_on(to) == Some(us.flip()) {
            list.push(with_promotion(us, from, to));
        }
    }
}
