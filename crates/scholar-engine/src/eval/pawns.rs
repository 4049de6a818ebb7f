//! Pawn structure: doubled, isolated, and passed pawns.

use scholar_core::{Board, Color, PieceKind, Square};

use crate::eval::weights::EvalWeights;

pub(super) fn score(board: &Board, weights: &EvalWeights) -> i32 {
    side(board, Color::White, weights) - side(board, Color::Black, weights)
}

fn side(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let own: Vec<Square> = pawn_squares(board, color);
    let enemy: Vec<Square> = pawn_squares(board, color.flip());

    let mut per_file = [0u8; 8];
    for sq in &own {
        per_file[sq.file().index()] += 1;
    }

    let mut total = 0;

    for count in per_file {
        if count > 1 {
            total -= (count as i32 - 1) * weights.doubled_pawn;
        }
    }

    for sq in &own {
        let file = sq.file().index();
        let has_neighbor = neighbor_files(file)
            .iter()
            .any(|&f| per_file[f] > 0);
        if !has_neighbor {
            total -= weights.isolated_pawn;
        }
        if is_passed(*sq, color, &enemy) {
            total += weights.passed_pawn;
        }
    }

    total
}

fn pawn_squares(board: &Board, color: Color) -> Vec<Square> {
    board
        .pieces()
        .filter(|(_, p)| p.color == color && p.kind == PieceKind::Pawn)
        .map(|(sq, _)| sq)
        .collect()
}

fn neighbor_files(file: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(2);
    if file > 0 {
        out.push(file - 1);
    }
    if file < 7 {
        out.push(file + 1);
    }
    out
}

/// A pawn is passed when no enemy pawn ahead of it stands on its file
/// or an adjacent one.
fn is_passed(pawn: Square, color: Color, enemy: &[Square]) -> bool {
    let file = pawn.file().index() as i32;
    let rank = pawn.rank().index() as i32;
    !enemy.iter().any(|e| {
        let ef = e.file().index() as i32;
        let er = e.rank().index() as i32;
        (ef - file).abs() <= 1
            && match color {
                Color::White => er > rank,
                Color::Black => er < rank,
            }
    })
}
