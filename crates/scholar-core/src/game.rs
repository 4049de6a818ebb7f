//! A game in progress: a board plus the history needed to undo moves
//! and detect repetitions.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::error::{InvalidMoveError, ParseError};
use crate::make_move::Undo;
use crate::movegen::{MoveList, legal_moves};
use crate::rules::{GameStatus, classify};
use crate::square::Square;

/// A playable game.
///
/// Wraps a [`Board`] with a move history and the list of position
/// signatures seen so far, which is what the threefold repetition rule
/// needs. The search clones a `Game` and drives it with
/// [`Game::apply_unchecked`] / [`Game::undo`].
#[derive(Clone)]
pub struct Game {
    board: Board,
    history: Vec<(Move, Undo)>,
    /// Signature of every position reached, including the initial one.
    seen: Vec<u64>,
}

impl Game {
    /// A new game from the standard starting position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// A game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Game, ParseError> {
        Ok(Game::from_board(Board::from_fen(fen)?))
    }

    fn from_board(board: Board) -> Game {
        let seen = vec![board.signature()];
        Game {
            board,
            history: Vec::new(),
            seen,
        }
    }

    /// The current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All legal moves in the current position.
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.board)
    }

    /// Classify the current position: ongoing, checkmate, or a draw.
    pub fn status(&self) -> GameStatus {
        classify(self)
    }

    /// Number of plies played so far.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// The moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    /// How many times the current position has occurred, including now.
    pub fn repetition_count(&self) -> usize {
        let current = self.board.signature();
        self.seen.iter().filter(|&&sig| sig == current).count()
    }

    /// Play a move after verifying it is legal in the current position.
    pub fn play(&mut self, mv: Move) -> Result<(), InvalidMoveError> {
        if !self.legal_moves().contains(&mv) {
            return Err(InvalidMoveError {
                mv,
                fen: self.board.to_fen(),
            });
        }
        self.apply_unchecked(mv);
        Ok(())
    }

    /// Parse a move in long algebraic notation ("e2e4", "e7e8q") against
    /// the current position's legal moves. A promotion without a piece
    /// suffix defaults to the queen.
    pub fn parse_move(&self, s: &str) -> Result<Move, ParseError> {
        if s.len() < 4 || s.len() > 5 {
            return Err(ParseError::BadSquare(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| ParseError::BadSquare(s[0..2].to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| ParseError::BadSquare(s[2..4].to_string()))?;
        let promotion = s.chars().nth(4);

        self.legal_moves()
            .into_iter()
            .find(|mv| {
                mv.from == from
                    && mv.to == to
                    && match (mv.kind, promotion) {
                        (MoveKind::Promotion(p), Some(c)) => p.kind().to_char() == c,
                        (MoveKind::Promotion(p), None) => p == PromotionPiece::Queen,
                        (_, Some(_)) => false,
                        (_, None) => true,
                    }
            })
            .ok_or_else(|| ParseError::BadSquare(s.to_string()))
    }

    /// Apply a move without the legality check.
    ///
    /// The move must be legal in the current position; the search uses
    /// this on moves it just generated.
    pub fn apply_unchecked(&mut self, mv: Move) {
        let undo = self.board.apply_unchecked(mv);
        self.history.push((mv, undo));
        self.seen.push(self.board.signature());
    }

    /// Undo the most recent move, returning it, or `None` at the start.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, undo) = self.history.pop()?;
        self.seen.pop();
        self.board.undo_unchecked(mv, undo);
        Some(mv)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
