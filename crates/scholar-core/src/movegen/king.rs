//! King move generation, including castling.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::file::File;
use crate::movegen::{KING_OFFSETS, MoveList, is_square_attacked};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

pub(super) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for (df, dr) in KING_OFFSETS {
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

    for side in CastleSide::ALL {
        if can_castle(board, piece, from, side) {
            let to_file = match side {
                CastleSide::Kingside => File::FileG,
                CastleSide::Queenside => File::FileC,
            };
            let to = Square::new(from.rank(), to_file);
            moves.push(Move::castle(from, to, piece, side));
        }
    }
}

/// Castling requires the right to still exist, the king on its home
/// square with the rook on its corner, the squares between them empty,
/// and the king's start, transit, and landing squares all unattacked.
fn can_castle(board: &Board, piece: Piece, from: Square, side: CastleSide) -> bool {
    let color = piece.color;
    if !board.castling().has(color, side) {
        return false;
    }

    let back = Rank::back(color);
    if from != Square::new(back, File::FileE) {
        return false;
    }
    let rook_file = match side {
        CastleSide::Kingside => File::FileH,
        CastleSide::Queenside => File::FileA,
    };
    if board.piece_at(Square::new(back, rook_file)) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    let between: &[File] = match side {
        CastleSide::Kingside => &[File::FileF, File::FileG],
        CastleSide::Queenside => &[File::FileD, File::FileC, File::FileB],
    };
    if between
        .iter()
        .any(|&f| board.piece_at(Square::new(back, f)).is_some())
    {
        return false;
    }

    // The king may not castle out of, through, or into check. The b-file
    // square on the queenside only needs to be empty, not safe.
    let king_path: &[File] = match side {
        CastleSide::Kingside => &[File::FileE, File::FileF, File::FileG],
        CastleSide::Queenside => &[File::FileE, File::FileD, File::FileC],
    };
    let enemy = color.flip();
    !king_path
        .iter()
        .any(|&f| is_square_attacked(board, Square::new(back, f), enemy))
}
