//! Error types for parsing and move application.

use thiserror::Error;

use crate::chess_move::Move;

/// Errors raised when parsing FEN or algebraic input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("FEN must have 6 space-separated fields, found {0}")]
    WrongFieldCount(usize),
    #[error("piece placement must describe 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("rank '{0}' does not describe exactly 8 files")]
    BadRank(String),
    #[error("unknown piece character '{0}'")]
    BadPiece(char),
    #[error("side to move must be 'w' or 'b', found '{0}'")]
    BadSideToMove(String),
    #[error("invalid castling field '{0}'")]
    BadCastling(String),
    #[error("invalid en passant square '{0}'")]
    BadEnPassant(String),
    #[error("invalid clock value '{0}'")]
    BadClock(String),
    #[error("invalid square '{0}'")]
    BadSquare(String),
    #[error(transparent)]
    Invalid(#[from] BoardError),
}

/// Errors raised when a parsed position fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} must have exactly one king, found {1}")]
    KingCount(crate::color::Color, usize),
    #[error("pawn on back rank at {0}")]
    PawnOnBackRank(crate::square::Square),
}

/// Error raised when asked to play a move that is not legal in the
/// current position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("illegal move {mv} in position {fen}")]
pub struct InvalidMoveError {
    pub mv: Move,
    pub fen: String,
}
