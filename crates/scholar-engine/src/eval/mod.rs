//! Static position evaluation.
//!
//! Scores are centipawns from White's point of view: positive means
//! White is better. The composition is material, piece-square tables,
//! mobility, king safety, and pawn structure; all weights live in
//! [`EvalWeights`]. Sign convention and material monotonicity are the
//! two contracts the search and the analyzer depend on.

mod king_safety;
mod material;
mod mobility;
mod pawns;
mod pst;
mod weights;

use scholar_core::Board;

pub use weights::EvalWeights;

/// Evaluate with the default weights.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with(board, &EvalWeights::default())
}

/// Evaluate with caller-supplied weights.
pub fn evaluate_with(board: &Board, weights: &EvalWeights) -> i32 {
    material::score(board, weights)
        + pst::score(board)
        + mobility::score(board, weights)
        + king_safety::score(board, weights)
        + pawns::score(board, weights)
}
