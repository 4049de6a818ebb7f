//! Piece-square tables.
//!
//! The classic simplified tables. Each table is written as the board
//! looks from White's side: row 0 is rank 8, row 7 is rank 1. A white
//! piece on rank `r` reads row `7 - r`; a black piece on rank `r` reads
//! row `r`, which mirrors the table vertically.

use scholar_core::{Board, Color, Piece, PieceKind, Square};

type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

fn table_for(kind: PieceKind) -> &'static Table {
    match kind {
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
    }
}

/// Positional bonus for one piece on one square, from its owner's view.
pub(super) fn bonus(piece: Piece, square: Square) -> i32 {
    let table = table_for(piece.kind);
    let rank = square.rank().index();
    let file = square.file().index();
    match piece.color {
        Color::White => table[7 - rank][file],
        Color::Black => table[rank][file],
    }
}

pub(super) fn score(board: &Board) -> i32 {
    let mut total = 0;
    for (square, piece) in board.pieces() {
        let value = bonus(piece, square);
        match piece.color {
            Color::White => total += value,
            Color::Black => total -= value,
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::{bonus, score};
    use scholar_core::{Board, Color, Piece, PieceKind, Square};

    #[test]
    fn tables_are_color_mirrored() {
        // A piece and its mirror image on the flipped square must read
        // the same bonus.
        for kind in PieceKind::ALL {
            let white = Piece::new(Color::White, kind);
            let black = Piece::new(Color::Black, kind);
            for sq in Square::all() {
                let mirror = Square::new(
                    scholar_core::Rank::from_index(7 - sq.rank().index() as u8).unwrap(),
                    sq.file(),
                );
                assert_eq!(bonus(white, sq), bonus(black, mirror));
            }
        }
    }

    #[test]
    fn pawn_about_to_promote_reads_fifty() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(bonus(pawn, Square::E7), 50);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(bonus(black_pawn, Square::E2), 50);
    }

    #[test]
    fn centralized_knight_beats_rim_knight() {
        let knight = Piece::new(Color::White, PieceKind::Knight);
        assert!(bonus(knight, Square::E4) > bonus(knight, Square::A4));
        assert_eq!(bonus(knight, Square::A1), -50);
    }

    #[test]
    fn castled_king_reads_positive() {
        let king = Piece::new(Color::White, PieceKind::King);
        assert_eq!(bonus(king, Square::G1), 30);
        assert!(bonus(king, Square::E4) < 0);
    }

    #[test]
    fn startpos_pst_is_even() {
        assert_eq!(score(&Board::starting_position()), 0);
    }
}
