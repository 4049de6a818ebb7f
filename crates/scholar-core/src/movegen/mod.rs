//! Legal move generation.
//!
//! Generation is two-phase: each piece module walks its movement pattern
//! over the mailbox to produce pseudo-legal moves, then [`legal_moves`]
//! filters out moves that leave the mover's king attacked by simulating
//! each one. Off-board arithmetic is impossible by construction because
//! every step goes through [`Square::offset`].

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A list of generated moves.
pub type MoveList = Vec<Move>;

/// Knight jump offsets as (file, rank) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King step offsets; also the union of the slider directions.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Generate all legal moves for the side to move.
pub fn legal_moves(board: &Board) -> MoveList {
    let color = board.side_to_move();
    let mut moves = pseudo_legal_moves(board, color);
    let mut scratch = board.clone();
    moves.retain(|&mv| {
        let undo = scratch.apply_unchecked(mv);
        let safe = match scratch.king_square(color) {
            Some(king) => !is_square_attacked(&scratch, king, color.flip()),
            None => true,
        };
        scratch.undo_unchecked(mv, undo);
        safe
    });
    moves
}

/// Generate pseudo-legal moves for `color`: every move that follows the
/// piece movement rules, ignoring whether it leaves the king in check.
pub(crate) fn pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (square, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawns::generate(board, square, piece, &mut moves),
            PieceKind::Knight => knights::generate(board, square, piece, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::generate(board, square, piece, &mut moves)
            }
            PieceKind::King => king::generate(board, square, piece, &mut moves),
        }
    }
    moves
}

/// Count pseudo-legal moves for the non-pawn, non-king pieces of `color`.
///
/// This is the mobility input to the evaluator: cheap to compute and
/// independent of whose turn it is, which a legality filter would not be.
pub fn piece_mobility(board: &Board, color: Color) -> usize {
    let mut moves = MoveList::new();
    for (square, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Knight => knights::generate(board, square, piece, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::generate(board, square, piece, &mut moves)
            }
            PieceKind::Pawn | PieceKind::King => {}
        }
    }
    moves.len()
}

/// Return `true` if `square` is attacked by any piece of `by`.
///
/// Works outward from the target square, so it costs the same regardless
/// of how many pieces `by` has.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    // Pawns attack diagonally forward, so look diagonally backward
    // from the target.
    let pawn_rank_delta = -by.pawn_direction();
    for df in [-1, 1] {
        if let Some(from) = square.offset(df, pawn_rank_delta) {
            if let Some(piece) = board.piece_at(from) {
                if piece.color == by && piece.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }

    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(from) = square.offset(df, dr) {
            if let Some(piece) = board.piece_at(from) {
                if piece.color == by && piece.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    for (df, dr) in KING_OFFSETS {
        if let Some(from) = square.offset(df, dr) {
            if let Some(piece) = board.piece_at(from) {
                if piece.color == by && piece.kind == PieceKind::King {
                    return true;
                }
            }
        }
    }

    ray_attack(board, square, by, BISHOP_DIRECTIONS, PieceKind::Bishop)
        || ray_attack(board, square, by, ROOK_DIRECTIONS, PieceKind::Rook)
}

/// Walk each direction until a piece blocks; an attacker of `slider` kind
/// (or a queen) on the first occupied square attacks the origin.
fn ray_attack(
    board: &Board,
    square: Square,
    by: Color,
    directions: [(i8, i8); 4],
    slider: PieceKind,
) -> bool {
    for (df, dr) in directions {
        let mut current = square;
        while let Some(next) = current.offset(df, dr) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

impl Board {
    /// Return `true` if the king of `color` is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => is_square_attacked(self, king, color.flip()),
            None => false,
        }
    }
}
