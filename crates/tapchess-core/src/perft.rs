//! Perft: leaf counting over the legal move tree, for cross-checking the generator.

use crate::board::Board;
use crate::movegen::legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move_code, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board)
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 { 1 } else { perft(&board.make_move(mv), depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
