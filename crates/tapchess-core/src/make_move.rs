//! Move application via copy-make.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Auxiliary, Move};
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Squares whose involvement in a move (as origin or destination) ends a
/// castling right: the king's home square ends both of that side's rights,
/// each rook corner ends the one right that rook castles with.
const CASTLE_REVOKING_SQUARES: [(Square, Color, Option<CastleSide>); 6] = [
    (Square::E1, Color::White, None),
    (Square::H1, Color::White, Some(CastleSide::KingSide)),
    (Square::A1, Color::White, Some(CastleSide::QueenSide)),
    (Square::E8, Color::Black, None),
    (Square::H8, Color::Black, Some(CastleSide::KingSide)),
    (Square::A8, Color::Black, Some(CastleSide::QueenSide)),
];

impl Board {
    /// Apply `mv` and return the resulting board. Copy-make: `self` is untouched.
    ///
    /// The piece on `mv.from` replaces whatever stands on `mv.to`. A paired
    /// move relocates its piece the same way, a promotion swaps in the new
    /// kind, and the side to move flips. Castling rights that the move
    /// makes permanently unavailable are revoked.
    ///
    /// No legality check is made; callers pass moves from
    /// [`legal_moves`](crate::legal_moves) or [`validate`](crate::validate).
    pub fn make_move(&self, mv: Move) -> Board {
        let mut board = *self;

        relocate(&mut board, mv.from, mv.to);
        match mv.aux {
            Auxiliary::None => {}
            Auxiliary::Paired(paired) => relocate(&mut board, paired.from, paired.to),
            Auxiliary::Promotion(kind) => {
                if let Some(pawn) = board.piece_on(mv.to) {
                    board.set_piece(mv.to, Some(Piece::new(pawn.color, kind)));
                }
            }
        }

        let castling = board.castling_mut();
        for (sq, color, side) in CASTLE_REVOKING_SQUARES {
            if sq != mv.from && sq != mv.to {
                continue;
            }
            match side {
                Some(side) => castling.revoke(color, side),
                None => castling.revoke_all(color),
            }
        }

        board.set_last_move(Some(mv));
        board.set_side_to_move(self.side_to_move().flip());
        board
    }
}

/// Move whatever is on `from` onto `to`, leaving `from` empty.
fn relocate(board: &mut Board, from: Square, to: Square) {
    if from == to {
        return;
    }
    let piece = board.piece_on(from);
    board.set_piece(to, piece);
    board.set_piece(from, None);
}

/// Free-function form of [`Board::make_move`].
#[inline]
pub fn apply(board: &Board, mv: Move) -> Board {
    board.make_move(mv)
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    const CASTLING_FEN: &str = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq -";

    #[test]
    fn pawn_push() {
        let before = Board::starting_position();
        let mv = Move::new(Square::E2, Square::E4);
        let after = before.make_move(mv);

        assert_eq!(after.piece_on(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(after.piece_on(Square::E2), None);
        assert_eq!(after.side_to_move(), Color::Black);
        assert_eq!(after.last_move(), Some(mv));
        // the original snapshot is unchanged
        assert_eq!(before.piece_on(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(before.side_to_move(), Color::White);
    }

    #[test]
    fn capture_overwrites() {
        let board = Board::starting_position()
            .make_move(Move::new(Square::E2, Square::E4))
            .make_move(Move::new(Square::D7, Square::D5))
            .make_move(Move::new(Square::E4, Square::D5));

        assert_eq!(board.piece_on(Square::D5), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(Square::E4), None);
        assert_eq!(board.pieces_of(Color::Black).count(), 15);
    }

    #[test]
    fn promotion_substitutes_piece() {
        let board: Board = "3rk3/4P3/8/8/8/8/8/4K3 w - -".parse().unwrap();
        let after = board.make_move(Move::promotion(Square::E7, Square::D8, PieceKind::Queen));
        assert_eq!(after.piece_on(Square::D8), Some(Piece::WHITE_QUEEN));
        assert_eq!(after.piece_on(Square::E7), None);

        let black: Board = "4k3/8/8/8/8/8/1p6/4K3 b - -".parse().unwrap();
        let after = black.make_move(Move::promotion(Square::B2, Square::B1, PieceKind::Knight));
        assert_eq!(after.piece_on(Square::B1), Some(Piece::BLACK_KNIGHT));
    }

    #[test]
    fn castling_moves_both_pieces() {
        let board: Board = CASTLING_FEN.parse().unwrap();

        let kingside = board.make_move(Move::castle(Color::White, CastleSide::KingSide));
        assert_eq!(kingside.piece_on(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(kingside.piece_on(Square::F1), Some(Piece::WHITE_ROOK));
        assert_eq!(kingside.piece_on(Square::E1), None);
        assert_eq!(kingside.piece_on(Square::H1), None);

        let queenside = board.make_move(Move::castle(Color::White, CastleSide::QueenSide));
        assert_eq!(queenside.piece_on(Square::C1), Some(Piece::WHITE_KING));
        assert_eq!(queenside.piece_on(Square::D1), Some(Piece::WHITE_ROOK));
        assert_eq!(queenside.piece_on(Square::A1), None);
    }

    #[test]
    fn castling_ends_own_rights_only() {
        let board: Board = CASTLING_FEN.parse().unwrap();
        let after = board.make_move(Move::castle(Color::White, CastleSide::KingSide));
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(!after.castling().has(Color::White, CastleSide::QueenSide));
        assert!(after.castling().has(Color::Black, CastleSide::KingSide));
        assert!(after.castling().has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn rook_move_ends_one_right() {
        let board: Board = CASTLING_FEN.parse().unwrap();
        let after = board.make_move(Move::new(Square::H1, Square::G1));
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(after.castling().has(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn rook_captured_on_corner_ends_right() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -".parse().unwrap();
        let after = board.make_move(Move::new(Square::A1, Square::A8));
        assert!(!after.castling().has(Color::Black, CastleSide::QueenSide));
        assert!(after.castling().has(Color::Black, CastleSide::KingSide));
        assert!(!after.castling().has(Color::White, CastleSide::QueenSide));
        assert!(after.castling().has(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn king_step_ends_both_rights() {
        let board: Board = CASTLING_FEN.parse().unwrap();
        let after = apply(&board, Move::new(Square::E1, Square::F1));
        assert_eq!(after.castling(), {
            let mut expected = CastleRights::ALL;
            expected.revoke_all(Color::White);
            expected
        });
    }

    #[test]
    fn degenerate_move_only_flips_turn() {
        let board = Board::starting_position();
        let after = board.make_move(Move::new(Square::B1, Square::B1));
        assert_eq!(after.piece_on(Square::B1), Some(Piece::WHITE_KNIGHT));
        assert_eq!(after.side_to_move(), Color::Black);
    }
}
