//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::{KNIGHT_OFFSETS, MoveList};
use crate::piece::Piece;
use crate::square::Square;

pub(super) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for (df, dr) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match board.piece_at(to) {
            None => moves.push(Move::normal(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                moves.push(Move::normal(from, to, piece, Some(target)));
            }
            Some(_) => {}
        }
    }
}
