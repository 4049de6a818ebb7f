//! King safety: pawn shield and open files near the king.

use scholar_core::{Board, Color, File, PieceKind, Rank, Square};

use crate::eval::weights::EvalWeights;

pub(super) fn score(board: &Board, weights: &EvalWeights) -> i32 {
    side(board, Color::White, weights) - side(board, Color::Black, weights)
}

fn side(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    let dir = color.pawn_direction();
    let mut total = 0;

    // Friendly pawns on the three squares directly in front of the king.
    for df in [-1, 0, 1] {
        if let Some(sq) = king.offset(df, dir) {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == color && piece.kind == PieceKind::Pawn {
                    total += weights.king_shield;
                }
            }
        }
    }

    // A file with no friendly pawn at all, on or next to the king's
    // file, is an open attacking lane.
    let king_file = king.file().index() as i8;
    for df in [-1, 0, 1] {
        let f = king_file + df;
        let Some(file) = (0..8).contains(&f).then(|| File::ALL[f as usize]) else {
            continue;
        };
        let own_pawn = Rank::ALL.iter().any(|&rank| {
            board.piece_at(Square::new(rank, file)).is_some_and(|p| {
                p.color == color && p.kind == PieceKind::Pawn
            })
        });
        if !own_pawn {
            total -= weights.king_open_file;
        }
    }

    total
}
