//! Castling rights bookkeeping.

use std::fmt;

use crate::color::Color;

/// One side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];
}

/// The set of castling rights still available, one bit per (color, side).
///
/// Rights only ever get removed over the course of a game; applying a move
/// clears bits, undoing a move restores the saved value wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

const WHITE_KINGSIDE: u8 = 0b0001;
const WHITE_QUEENSIDE: u8 = 0b0010;
const BLACK_KINGSIDE: u8 = 0b0100;
const BLACK_QUEENSIDE: u8 = 0b1000;

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);

    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE,
        }
    }

    /// Return `true` if `color` may still castle on `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & CastleRights::bit(color, side) != 0
    }

    /// Grant the right for `color` to castle on `side`.
    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= CastleRights::bit(color, side);
    }

    /// Remove the right for `color` to castle on `side`.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !CastleRights::bit(color, side);
    }

    /// Remove both rights for `color`.
    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }

    /// Index in 0..16, used by the zobrist tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CastleRights {
    /// FEN castling field: "KQkq" subsets, or "-" when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == CastleRights::NONE {
            return write!(f, "-");
        }
        if self.has(Color::White, CastleSide::Kingside) {
            write!(f, "K")?;
        }
        if self.has(Color::White, CastleSide::Queenside) {
            write!(f, "Q")?;
        }
        if self.has(Color::Black, CastleSide::Kingside) {
            write!(f, "k")?;
        }
        if self.has(Color::Black, CastleSide::Queenside) {
            write!(f, "q")?;
        }
        Ok(())
    }
}
