//! Attack queries.
//!
//! Attacks come from the same per-piece generators as moves, run for an
//! explicitly named side, so the movement rules have one source. Pawns are
//! the exception: they attack their forward diagonals whether or not
//! anything stands there, and never attack the square they push to.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::{pawns, pseudo_moves_from};

/// Every square `side` attacks, regardless of whose turn `board` records.
///
/// Pawn diagonals count even when empty: a black pawn on h2 covers g1, so
/// White may not castle kingside onto it, although the pawn has no move there.
pub fn attacks_of(board: &Board, side: Color) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;
    let mut scratch = Vec::new();

    for (from, piece) in board.pieces_of(side) {
        if piece.kind == PieceKind::Pawn {
            attacked.extend(pawns::attacked_squares(side, from));
            continue;
        }
        scratch.clear();
        pseudo_moves_from(board, side, from, piece.kind, &mut scratch);
        attacked.extend(scratch.iter().map(|mv| mv.to));
    }

    attacked
}

/// Return `true` if `by` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attacks_of(board, by).contains(sq)
}

/// Return `true` if `side`'s king stands on a square the other side attacks.
///
/// # Panics
///
/// Panics if `side` has no king.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    is_square_attacked(board, board.king_square(side), side.flip())
}

#[cfg(test)]
mod tests {
    use super::{attacks_of, is_in_check, is_square_attacked};
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        let white = attacks_of(&board, Color::White);
        // every square on rank 3 is hit by a pawn
        for sq in [Square::A3, Square::D3, Square::H3] {
            assert!(white.contains(sq));
        }
        assert!(!white.contains(Square::E4));
        assert!(is_square_attacked(&board, Square::F6, Color::Black));
        assert!(!is_square_attacked(&board, Square::E5, Color::White));
    }

    #[test]
    fn pawn_pushes_are_not_attacks() {
        let board: Board = "4k3/8/8/8/8/8/4P3/K7 w - -".parse().unwrap();
        let white = attacks_of(&board, Color::White);
        assert!(!white.contains(Square::E3));
        assert!(!white.contains(Square::E4));
        assert!(white.contains(Square::D3));
        assert!(white.contains(Square::F3));
    }

    #[test]
    fn independent_of_side_to_move() {
        let white_to_move: Board = "4k3/8/8/8/8/8/8/R3K3 w - -".parse().unwrap();
        let black_to_move = white_to_move.with_side_to_move(Color::Black);
        assert_eq!(
            attacks_of(&white_to_move, Color::White),
            attacks_of(&black_to_move, Color::White)
        );
        assert!(is_square_attacked(&black_to_move, Square::A8, Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let board: Board = "4k3/8/8/8/R1p5/8/8/4K3 w - -".parse().unwrap();
        assert!(is_square_attacked(&board, Square::C4, Color::White));
        assert!(!is_square_attacked(&board, Square::D4, Color::White));
    }

    #[test]
    fn check_detection() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2r w - -".parse().unwrap();
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));

        let blocked: Board = "4k3/8/8/8/8/8/8/4KB1r w - -".parse().unwrap();
        assert!(!is_in_check(&blocked, Color::White));
    }

    #[test]
    fn pawn_and_knight_checks() {
        let pawn: Board = "4k3/8/8/8/8/8/3p4/4K3 w - -".parse().unwrap();
        assert!(is_in_check(&pawn, Color::White));
        let knight: Board = "4k3/8/8/8/8/5n2/8/4K3 w - -".parse().unwrap();
        assert!(is_in_check(&knight, Color::White));
        let pawn_in_front: Board = "4k3/8/8/8/8/8/4p3/4K3 w - -".parse().unwrap();
        assert!(!is_in_check(&pawn_in_front, Color::White));
    }

    #[test]
    #[should_panic(expected = "board must have a king")]
    fn check_without_king_panics() {
        let board = Board::empty();
        is_in_check(&board, Color::White);
    }
}
