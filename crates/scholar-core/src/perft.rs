//! Perft: exhaustive move-path counting for validating the generator.

use tracing::trace;

use crate::board::Board;
use crate::movegen::legal_moves;

/// Count all leaf nodes of the legal move tree to `depth`.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut board = board.clone();
    let mut nodes = 0;
    for mv in moves {
        let undo = board.apply_unchecked(mv);
        nodes += perft(&board, depth - 1);
        board.undo_unchecked(mv, undo);
    }
    nodes
}

/// Perft split by root move, for locating generator bugs.
pub fn divide(board: &Board, depth: u32) -> Vec<(crate::chess_move::Move, u64)> {
    let mut board = board.clone();
    let mut results = Vec::new();
    for mv in legal_moves(&board) {
        let undo = board.apply_unchecked(mv);
        let nodes = if depth > 1 {
            perft(&board, depth - 1)
        } else {
            1
        };
        board.undo_unchecked(mv, undo);
        trace!(%mv, nodes, "divide");
        results.push((mv, nodes));
    }
    results
}
