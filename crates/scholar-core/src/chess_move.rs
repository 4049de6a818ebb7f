//! Move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// The piece kind placed on the board after promoting.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }
}

/// What kind of move this is, beyond the from/to squares.
///
/// The special kinds carry exactly the information apply/undo needs to
/// reconstruct side effects (rook hops, captured pawn square, promotion
/// piece) without re-deriving them from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A single-step move or ordinary capture.
    Normal,
    /// A pawn advancing two squares from its start rank.
    DoublePush,
    /// An en passant capture; the captured pawn is not on `to`.
    EnPassant,
    /// Castling on the given side; moves the king, the rook follows.
    Castle(CastleSide),
    /// A pawn reaching the last rank, replaced by the chosen piece.
    Promotion(PromotionPiece),
}

/// A move, carrying enough context to be applied and undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece being moved (before any promotion).
    pub piece: Piece,
    /// The piece captured by this move, if any. For en passant this is
    /// the pawn on the adjacent square, not the contents of `to`.
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn normal(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    pub const fn double_push(from: Square, to: Square, piece: Piece) -> Move {
        Move {
            from,
            to,
            piece,
            captured: None,
            kind: MoveKind::DoublePush,
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square, piece: Piece, captured: Piece) -> Move {
        Move {
            from,
            to,
            piece,
            captured: Some(captured),
            kind: MoveKind::EnPassant,
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, piece: Piece, side: CastleSide) -> Move {
        Move {
            from,
            to,
            piece,
            captured: None,
            kind: MoveKind::Castle(side),
        }
    }

    #[inline]
    pub const fn promotion(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promoted: PromotionPiece,
    ) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            kind: MoveKind::Promotion(promoted),
        }
    }

    /// Return `true` if this move captures a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// The piece kind standing on `to` after the move is applied.
    #[inline]
    pub const fn resulting_kind(self) -> PieceKind {
        match self.kind {
            MoveKind::Promotion(promoted) => promoted.kind(),
            _ => self.piece.kind,
        }
    }
}

impl fmt::Display for Move {
    /// Long algebraic (UCI) notation: "e2e4", "e7e8q".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveKind::Promotion(promoted) = self.kind {
            write!(f, "{}", promoted.kind())?;
        }
        Ok(())
    }
}
