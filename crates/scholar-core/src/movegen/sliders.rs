//! Bishop, rook, and queen move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, MoveList, ROOK_DIRECTIONS};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(super) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    let directions: &[(i8, i8)] = match piece.kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &KING_OFFSETS,
        _ => unreachable!("not a slider: {:?}", piece.kind),
    };

    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.piece_at(to) {
                None => {
                    moves.push(Move::normal(from, to, piece, None));
                    current = to;
                }
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(Move::normal(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
        }
    }
}
