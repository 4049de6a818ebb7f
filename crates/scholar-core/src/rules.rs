//! Terminal state classification: check, checkmate, stalemate, and draws.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::game::Game;
use crate::movegen::MoveList;
use crate::piece_kind::PieceKind;

/// Why a game is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Stalemate => write!(f, "stalemate"),
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

/// The state of a game after the most recent move.
///
/// `Check` means the side to move is attacked but has replies; it is not
/// a terminal state. Stalemate is reported as a draw with its own reason
/// so callers can distinguish it from the claimable draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    /// Return `true` if the game is over.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

/// Classify the current position of `game`.
pub fn classify(game: &Game) -> GameStatus {
    classify_with_moves(game, &game.legal_moves())
}

/// Classify using an already-generated move list, so callers that have
/// one (the search does) avoid generating it twice.
///
/// No-legal-move states take precedence: a position that is both
/// checkmate and past the fifty-move boundary is checkmate.
pub fn classify_with_moves(game: &Game, moves: &MoveList) -> GameStatus {
    let board = game.board();
    let in_check = board.in_check(board.side_to_move());
    if moves.is_empty() {
        return if in_check {
            GameStatus::Checkmate {
                winner: board.side_to_move().flip(),
            }
        } else {
            GameStatus::Draw(DrawReason::Stalemate)
        };
    }
    // 100 plies without a capture or pawn move.
    if board.halfmove_clock() >= 100 {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }
    if game.repetition_count() >= 3 {
        return GameStatus::Draw(DrawReason::ThreefoldRepetition);
    }
    if insufficient_material(board) {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }
    if in_check {
        return GameStatus::Check;
    }
    GameStatus::Ongoing
}

/// Return `true` if neither side can possibly deliver mate: king vs
/// king, a single minor piece, or same-colored bishops only.
pub fn insufficient_material(board: &Board) -> bool {
    let mut minors = 0;
    let mut bishop_square_colors: Option<bool> = None;
    let mut bishops_only = true;

    for (square, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => {
                minors += 1;
                bishops_only = false;
            }
            PieceKind::Bishop => {
                minors += 1;
                let light = square.is_light();
                match bishop_square_colors {
                    None => bishop_square_colors = Some(light),
                    Some(first) if first != light => bishops_only = false,
                    Some(_) => {}
                }
            }
        }
    }

    // Bare kings or a lone minor can never mate. Any number of bishops
    // all standing on one square color cannot either.
    minors <= 1 || bishops_only
}
