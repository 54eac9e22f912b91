//! King step generation. Castling lives in [`super::castling`].

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::Direction;
use crate::square::Square;

use super::push_target;

/// The eight adjacent squares. Stepping into check is filtered later.
pub(super) fn gen_king(board: &Board, us: Color, from: Square, list: &mut Vec<Move>) {
    for direction in Direction::ALL {
        if let Some(to) = from.neighbor(direction) {
            push_target(board, us, from, to, list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_king;
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn corner_king() {
        let board: Board = "7k/8/8/8/8/8/8/K7 w - -".parse().unwrap();
        let mut list = Vec::new();
        gen_king(&board, Color::White, Square::A1, &mut list);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn steps_next_to_attackers_are_still_generated() {
        // b2 is covered by the black rook, but that is not this generator's concern
        let board: Board = "7k/8/8/8/8/8/1r6/K7 w - -".parse().unwrap();
        let mut list = Vec::new();
        gen_king(&board, Color::White, Square::A1, &mut list);
        assert!(list.iter().any(|mv| mv.to == Square::B2));
        assert!(list.iter().any(|mv| mv.to == Square::A2));
    }

    #[test]
    fn does_not_castle() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -".parse().unwrap();
        let mut list = Vec::new();
        gen_king(&board, Color::White, Square::E1, &mut list);
        assert!(list.iter().all(|mv| !mv.is_castle()));
        assert_eq!(list.len(), 5);
    }
}
