//! Move generation.
//!
//! Per-piece generators produce pseudo-legal moves: movement geometry and
//! capture rules only. [`legal_moves`] then drops every move that leaves the
//! mover's king attacked, by playing it on a copy of the board and asking
//! the attack oracle, and finally appends castling.

mod attacks;
mod castling;
mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::attacks::{attacks_of, is_in_check, is_square_attacked};

use self::castling::gen_castles;
use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Push `from -> to` unless `to` holds one of `us`'s own pieces.
#[inline]
fn push_target(board: &Board, us: Color, from: Square, to: Square, list: &mut Vec<Move>) {
    if board.color_on(to) != Some(us) {
        list.push(Move::new(from, to));
    }
}

/// Pseudo-legal moves of a `kind` piece of color `us` standing on `from`.
fn pseudo_moves_from(board: &Board, us: Color, from: Square, kind: PieceKind, list: &mut Vec<Move>) {
    match kind {
        PieceKind::Pawn => gen_pawn(board, us, from, list),
        PieceKind::Knight => gen_knight(board, us, from, list),
        PieceKind::King => gen_king(board, us, from, list),
        slider => gen_slider(board, us, from, slider, list),
    }
}

/// Pseudo-legal moves for every piece `color` owns, castling excluded.
///
/// `color` need not be the side to move.
pub fn pseudo_moves_for(board: &Board, color: Color) -> Vec<Move> {
    let mut list = Vec::with_capacity(64);
    for (from, piece) in board.pieces_of(color) {
        pseudo_moves_from(board, color, from, piece.kind, &mut list);
    }
    list
}

/// Pseudo-legal moves for the side to move, castling excluded.
pub fn pseudo_moves(board: &Board) -> Vec<Move> {
    pseudo_moves_for(board, board.side_to_move())
}

/// Every legal move for the side to move.
///
/// # Panics
///
/// Panics if the side to move has no king.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut list = pseudo_moves(board);
    list.retain(|&mv| !is_in_check(&board.make_move(mv), us));
    gen_castles(board, &mut list);
    trace!(side = %us, count = list.len(), "generated legal moves");
    list
}

/// Return `true` if `mv` is exactly one of the legal moves, auxiliary data included.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    legal_moves(board).contains(&mv)
}
