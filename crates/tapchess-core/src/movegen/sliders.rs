//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::push_target;

/// Walk each of the piece's directions from `from`, one step at a time,
/// stopping at the edge or just after the first occupied square.
pub(super) fn gen_slider(board: &Board, us: Color, from: Square, kind: PieceKind, list: &mut Vec<Move>) {
    debug_assert!(kind.is_slider(), "{kind} does not slide");
    let directions: &[Direction] = match kind {
        PieceKind::Bishop => &Direction::DIAGONAL,
        PieceKind::Rook => &Direction::ORTHOGONAL,
        _ => &Direction::ALL,
    };

    for &direction in directions {
        for to in from.ray(direction) {
            push_target(board, us, from, to, list);
            if board.is_occupied(to) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_slider;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn targets(fen: &str, from: Square, kind: PieceKind) -> Vec<Square> {
        let board: Board = fen.parse().unwrap();
        let mut list = Vec::new();
        gen_slider(&board, board.side_to_move(), from, kind, &mut list);
        list.iter().map(|mv| mv.to).collect()
    }

    #[test]
    fn open_board_counts() {
        let fen = "4k3/8/8/8/3Q4/8/8/4K3 w - -";
        assert_eq!(targets(fen, Square::D4, PieceKind::Queen).len(), 27);
        assert_eq!(targets(fen, Square::D4, PieceKind::Rook).len(), 14);
        assert_eq!(targets(fen, Square::D4, PieceKind::Bishop).len(), 13);
    }

    #[test]
    fn stops_on_capture_and_before_own_piece() {
        // rook a1, own pawn a4, enemy knight d1
        let found = targets("4k3/8/8/8/P7/8/8/R2nK3 w - -", Square::A1, PieceKind::Rook);
        assert!(found.contains(&Square::A2));
        assert!(found.contains(&Square::A3));
        assert!(!found.contains(&Square::A4));
        assert!(found.contains(&Square::B1));
        assert!(found.contains(&Square::D1));
        assert!(!found.contains(&Square::E1));
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn boxed_in_bishop_has_nothing() {
        let found = targets(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            Square::C1,
            PieceKind::Bishop,
        );
        assert!(found.is_empty());
    }
}
