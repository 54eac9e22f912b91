//! Castling legality.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::attacks::attacks_of;

/// Files that must be empty between king and rook.
const fn between_files(side: CastleSide) -> &'static [File] {
    match side {
        CastleSide::KingSide => &[File::FileF, File::FileG],
        CastleSide::QueenSide => &[File::FileB, File::FileC, File::FileD],
    }
}

/// Files that must not be attacked: the king's path plus everything up to
/// and including the rook corner.
const fn guarded_files(side: CastleSide) -> &'static [File] {
    match side {
        CastleSide::KingSide => &[File::FileF, File::FileG, File::FileH],
        CastleSide::QueenSide => &[File::FileA, File::FileB, File::FileC, File::FileD],
    }
}

const fn rook_file(side: CastleSide) -> File {
    match side {
        CastleSide::KingSide => File::FileH,
        CastleSide::QueenSide => File::FileA,
    }
}

/// Push every castling move the side to move may make right now.
///
/// These are fully checked here, including king safety, so the legal-move
/// filter appends them without simulating.
pub(super) fn gen_castles(board: &Board, list: &mut Vec<Move>) {
    let us = board.side_to_move();
    let rights = board.castling().of(us);
    if !rights.kingside && !rights.queenside {
        return;
    }

    let rank = us.home_rank();
    let king_home = Square::new(File::FileE, rank);
    if board.piece_on(king_home) != Some(Piece::new(us, PieceKind::King)) {
        return;
    }

    let attacked = attacks_of(board, us.flip());
    if attacked.contains(king_home) {
        return;
    }

    for side in CastleSide::ALL {
        if !rights.get(side) {
            continue;
        }
        let rook_home = Square::new(rook_file(side), rank);
        if board.piece_on(rook_home) != Some(Piece::new(us, PieceKind::Rook)) {
            continue;
        }
        let path_clear = between_files(side)
            .iter()
            .all(|&file| !board.is_occupied(Square::new(file, rank)));
        let path_safe = guarded_files(side)
            .iter()
            .all(|&file| !attacked.contains(Square::new(file, rank)));
        if path_clear && path_safe {
            list.push(Move::castle(us, side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_castles;
    use crate::board::Board;
    use crate::castle_rights::CastleSide;
    use crate::chess_move::Move;
    use crate::color::Color;

    fn castles(fen: &str) -> Vec<Move> {
        let board: Board = fen.parse().unwrap();
        let mut list = Vec::new();
        gen_castles(&board, &mut list);
        list
    }

    #[test]
    fn both_sides_when_everything_is_clear() {
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/R3K2R w KQkq -"),
            vec![
                Move::castle(Color::White, CastleSide::KingSide),
                Move::castle(Color::White, CastleSide::QueenSide),
            ]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/4K3 b KQkq -"),
            vec![
                Move::castle(Color::Black, CastleSide::KingSide),
                Move::castle(Color::Black, CastleSide::QueenSide),
            ]
        );
    }

    #[test]
    fn enemy_rooks_on_open_files_cover_the_corners() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").is_empty());
    }

    #[test]
    fn needs_the_right() {
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/R3K2R w Qkq -"),
            vec![Move::castle(Color::White, CastleSide::QueenSide)]
        );
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w kq -").is_empty());
    }

    #[test]
    fn blocked_by_any_piece_in_between() {
        // knight on b1 blocks queenside even though the king never crosses b1
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/RN2K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::KingSide)]
        );
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/R3K1nR w KQ -"),
            vec![Move::castle(Color::White, CastleSide::QueenSide)]
        );
    }

    #[test]
    fn not_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ -").is_empty());
    }

    #[test]
    fn not_through_attacked_squares() {
        // rook on f8 covers f1
        assert_eq!(
            castles("5rk1/8/8/8/8/8/8/R3K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::QueenSide)]
        );
        // bishop on a6 covers f1 via the long diagonal
        assert_eq!(
            castles("4k3/8/b7/8/8/8/8/R3K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::QueenSide)]
        );
    }

    #[test]
    fn guarded_span_includes_rook_corner_and_b_file() {
        // rook on h8 attacks the h1 rook
        assert_eq!(
            castles("4k2r/8/8/8/8/8/8/R3K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::QueenSide)]
        );
        // rook on b8 attacks b1, which the king never crosses
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::KingSide)]
        );
    }

    #[test]
    fn pawn_diagonals_count_as_attacks() {
        // black pawn on e2 covers d1 and f1
        assert!(castles("4k3/8/8/8/8/8/4p3/R3K2R w KQ -").is_empty());
        // pawn on h2 can only push, yet g1 is still covered
        assert_eq!(
            castles("4k3/8/8/8/8/8/7p/R3K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::QueenSide)]
        );
    }

    #[test]
    fn needs_king_and_rook_at_home() {
        assert!(castles("4k3/8/8/8/8/8/8/R2K3R w KQ -").is_empty());
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/4K2R w KQ -"),
            vec![Move::castle(Color::White, CastleSide::KingSide)]
        );
    }
}
