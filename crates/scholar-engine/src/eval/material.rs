//! Material balance.

use scholar_core::{Board, Color};

use crate::eval::weights::EvalWeights;

pub(super) fn score(board: &Board, weights: &EvalWeights) -> i32 {
    let mut total = 0;
    for (_, piece) in board.pieces() {
        let value = weights.piece_value(piece.kind);
        match piece.color {
            Color::White => total += value,
            Color::Black => total -= value,
        }
    }
    total
}
