//! Mailbox board state.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::fen::STARTING_FEN;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::zobrist;

/// A full chess position.
///
/// Piece placement is a 64-entry mailbox indexed by [`Square`], plus the
/// side to move, castling rights, en passant target, and the two move
/// clocks. The zobrist signature is maintained incrementally by every
/// mutation, so reading it is free.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    /// Square a pawn may capture onto en passant, if the previous move
    /// was a double push.
    en_passant: Option<Square>,
    /// Plies since the last capture or pawn move, for the fifty-move rule.
    halfmove_clock: u32,
    /// Starts at 1, incremented after each Black move.
    fullmove_number: u32,
    signature: u64,
}

impl Board {
    /// An empty board with White to move and no castling rights.
    pub(crate) fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            // The empty-rights castling key is part of the signature;
            // White to move hashes to zero.
            signature: zobrist::castling(CastleRights::NONE),
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        Board::from_fen(STARTING_FEN).expect("starting FEN is valid")
    }

    /// The piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// The color whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The en passant target square, if the last move enabled one.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Fullmove counter, starting at 1.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Zobrist signature of the position (placement, side to move,
    /// castling, en passant file; clocks excluded).
    #[inline]
    pub fn signature(&self) -> u64 {
        self.signature
    }

    /// Locate the king of `color`. Returns `None` only for hand-built
    /// positions without one; parsed positions always have both kings.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Count pieces of the given color and kind.
    pub fn count_pieces(&self, color: Color, kind: PieceKind) -> usize {
        let target = Piece::new(color, kind);
        self.squares.iter().filter(|&&p| p == Some(target)).count()
    }

    /// Iterate over occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// A wrapper that renders the board as an ASCII diagram.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    // Mutation below is crate-internal; all of it keeps the signature
    // in lockstep with the state.

    /// Place `piece` on an empty `square`.
    #[inline]
    pub(crate) fn put_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(self.squares[square.index()].is_none());
        self.squares[square.index()] = Some(piece);
        self.signature ^= zobrist::piece_square(piece, square);
    }

    /// Remove and return the piece on `square`, if any.
    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.squares[square.index()].take();
        if let Some(piece) = piece {
            self.signature ^= zobrist::piece_square(piece, square);
        }
        piece
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.signature ^= zobrist::side_to_move(self.side_to_move);
        self.side_to_move = color;
        self.signature ^= zobrist::side_to_move(color);
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.signature ^= zobrist::castling(self.castling);
        self.castling = rights;
        self.signature ^= zobrist::castling(rights);
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, target: Option<Square>) {
        if let Some(old) = self.en_passant {
            self.signature ^= zobrist::en_passant(old.file());
        }
        self.en_passant = target;
        if let Some(new) = target {
            self.signature ^= zobrist::en_passant(new.file());
        }
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// Renders a board as an 8-line ASCII diagram, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::file::File;
        use crate::rank::Rank;

        for rank in Rank::ALL.iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                let square = Square::new(*rank, file);
                match self.0.piece_at(square) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
