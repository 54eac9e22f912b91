//! Validation of user-proposed moves.
//!
//! Callers usually know only where a piece starts and where it lands. The
//! validator accepts such a bare move, finds the matching legal move and
//! hands back that canonical version, with the promotion piece or castling
//! rook relocation filled in.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::{is_legal, legal_moves};

/// Accept `proposed` if some legal move shares its origin and destination,
/// returning that legal move. Auxiliary data on `proposed` is ignored.
///
/// Returns `None` when the origin is empty, holds a piece of the side not
/// to move, when the destination holds one of the mover's own pieces, or
/// when no legal move matches.
///
/// # Panics
///
/// Panics if the side to move has no king.
pub fn validate(board: &Board, proposed: Move) -> Option<Move> {
    let us = board.side_to_move();

    let Some(piece) = board.piece_on(proposed.from) else {
        debug!(mv = %proposed, "rejected: no piece on origin");
        return None;
    };
    if piece.color != us {
        debug!(mv = %proposed, side = %us, "rejected: piece belongs to the opponent");
        return None;
    }
    if board.color_on(proposed.to) == Some(us) {
        debug!(mv = %proposed, "rejected: destination holds own piece");
        return None;
    }

    let found = legal_moves(board)
        .into_iter()
        .find(|mv| mv.same_primary(&proposed));
    if found.is_none() {
        debug!(mv = %proposed, "rejected: not a legal move");
    }
    found
}

/// Strict form of [`validate`]: `mv` must equal a legal move exactly,
/// auxiliary data included.
pub fn is_valid(mv: Move, board: &Board) -> bool {
    is_legal(board, mv)
}
