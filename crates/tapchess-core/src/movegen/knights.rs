//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::KNIGHT_JUMPS;
use crate::square::Square;

use super::push_target;

pub(super) fn gen_knight(board: &Board, us: Color, from: Square, list: &mut Vec<Move>) {
    for jump in &KNIGHT_JUMPS {
        if let Some(to) = from.walk(jump) {
            push_target(board, us, from, to, list);
        }
    }
}
