//! Core chess types: board representation, move generation, and game rules.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod game;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod rules;
mod square;
mod zobrist;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, InvalidMoveError, ParseError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use game::Game;
pub use movegen::{MoveList, is_square_attacked, legal_moves, piece_mobility};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use rules::{DrawReason, GameStatus, classify, classify_with_moves, insufficient_material};
pub use square::Square;
