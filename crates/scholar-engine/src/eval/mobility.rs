//! Mobility: pseudo-legal move-count differential.

use scholar_core::{Board, Color, piece_mobility};

use crate::eval::weights::EvalWeights;

pub(super) fn score(board: &Board, weights: &EvalWeights) -> i32 {
    let white = piece_mobility(board, Color::White) as i32;
    let black = piece_mobility(board, Color::Black) as i32;
    (white - black) * weights.mobility
}

#[cfg(test)]
mod tests {
    use super::score;
    use crate::eval::weights::EvalWeights;
    use scholar_core::Board;

    #[test]
    fn startpos_mobility_is_even() {
        let w = EvalWeights::default();
        assert_eq!(score(&Board::starting_position(), &w), 0);
    }

    #[test]
    fn open_lines_score_higher() {
        let w = EvalWeights::default();
        // Centralized white rook vs a black rook boxed in by its own
        // pawns.
        let board = Board::from_fen("r3k3/pp6/8/8/3R4/8/8/4K3 w - - 0 1").unwrap();
        assert!(score(&board, &w) > 0);
    }
}
