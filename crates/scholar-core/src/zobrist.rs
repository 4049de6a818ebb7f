//! Zobrist signatures for repetition detection.
//!
//! The signature covers piece placement, the side to move, castling rights,
//! and the en passant file. The halfmove and fullmove clocks are deliberately
//! excluded so positions that differ only in clock values hash equal, which
//! is what the threefold repetition rule requires.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::square::Square;

/// A position signature. Equal signatures mean equal positions for the
/// purposes of repetition (modulo the usual 64-bit collision caveat).
pub type Signature = u64;

const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

const fn fill_table<const N: usize>(mut seed: u64) -> [u64; N] {
    let mut table = [0u64; N];
    let mut i = 0;
    while i < N {
        seed = xorshift64(seed);
        table[i] = seed;
        i += 1;
    }
    table
}

// Tables are generated at compile time from fixed seeds so signatures are
// stable across runs and builds.
const PIECE_SQUARE: [u64; Piece::COUNT * Square::COUNT] = fill_table(0x9E37_79B9_7F4A_7C15);
const CASTLING: [u64; 16] = fill_table(0xC2B2_AE3D_27D4_EB4F);
const EN_PASSANT_FILE: [u64; 8] = fill_table(0x1656_67B1_9E37_79F9);
const BLACK_TO_MOVE: u64 = 0xD6E8_FEB8_6659_FD93;

/// Key for `piece` standing on `square`.
#[inline]
pub fn piece_square(piece: Piece, square: Square) -> u64 {
    PIECE_SQUARE[piece.index() * Square::COUNT + square.index()]
}

/// Key for the current castling rights set.
#[inline]
pub fn castling(rights: CastleRights) -> u64 {
    CASTLING[rights.index()]
}

/// Key for an available en passant file.
#[inline]
pub fn en_passant(file: File) -> u64 {
    EN_PASSANT_FILE[file.index()]
}

/// Key toggled when Black is to move.
#[inline]
pub fn side_to_move(color: Color) -> u64 {
    match color {
        Color::White => 0,
        Color::Black => BLACK_TO_MOVE,
    }
}

/// Compute a position's signature from scratch.
///
/// `Board` maintains its signature incrementally; this is the reference
/// computation used to seed it and to cross-check in tests.
pub fn compute(board: &Board) -> Signature {
    let mut signature = 0u64;
    for square in Square::all() {
        if let Some(piece) = board.piece_at(square) {
            signature ^= piece_square(piece, square);
        }
    }
    signature ^= castling(board.castling());
    if let Some(target) = board.en_passant() {
        signature ^= en_passant(target.file());
    }
    signature ^= side_to_move(board.side_to_move());
    signature
}
