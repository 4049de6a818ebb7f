//! Pawn move generation: pushes, captures, en passant, and promotions.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::movegen::MoveList;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

pub(super) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    let color = piece.color;
    let dir = color.pawn_direction();
    let promotion_rank = Rank::promotion(color);

    // Single push, and double push from the start rank.
    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            push(from, one, piece, None, promotion_rank, moves);
            if from.rank() == Rank::pawn_start(color) {
                if let Some(two) = one.offset(0, dir) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::double_push(from, two, piece));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant.
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != color {
                push(from, to, piece, Some(target), promotion_rank, moves);
            }
        } else if board.en_passant() == Some(to) {
            let victim = Piece::new(color.flip(), PieceKind::Pawn);
            moves.push(Move::en_passant(from, to, piece, victim));
        }
    }
}

/// Push a pawn move, expanding it into the four promotion choices when
/// it reaches the last rank.
fn push(
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion_rank: Rank,
    moves: &mut MoveList,
) {
    if to.rank() == promotion_rank {
        for promoted in PromotionPiece::ALL {
            moves.push(Move::promotion(from, to, piece, captured, promoted));
        }
    } else {
        moves.push(Move::normal(from, to, piece, captured));
    }
}
