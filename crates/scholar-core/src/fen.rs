//! FEN parsing and formatting.

use std::fmt::Write as _;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::{BoardError, ParseError};
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a FEN string into a board.
    ///
    /// All six fields are required. The parsed position is validated:
    /// each side must have exactly one king and no pawns may stand on
    /// the first or eighth rank.
    pub fn from_fen(fen: &str) -> Result<Board, ParseError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ParseError::WrongFieldCount(fields.len()));
        }

        let mut board = Board::empty();
        parse_placement(&mut board, fields[0])?;

        let side = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::BadSideToMove(other.to_string())),
        };
        board.set_side_to_move(side);

        board.set_castling(parse_castling(fields[2])?);

        let en_passant = match fields[3] {
            "-" => None,
            s => Some(
                Square::from_algebraic(s).ok_or_else(|| ParseError::BadEnPassant(s.to_string()))?,
            ),
        };
        board.set_en_passant(en_passant);

        let halfmove: u32 = fields[4]
            .parse()
            .map_err(|_| ParseError::BadClock(fields[4].to_string()))?;
        let fullmove: u32 = fields[5]
            .parse()
            .map_err(|_| ParseError::BadClock(fields[5].to_string()))?;
        if fullmove == 0 {
            return Err(ParseError::BadClock(fields[5].to_string()));
        }
        board.set_halfmove_clock(halfmove);
        board.set_fullmove_number(fullmove);

        validate(&board)?;
        Ok(board)
    }

    /// Format this board as a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in Rank::ALL.iter().rev() {
            let mut empty = 0;
            for file in File::ALL {
                match self.piece_at(Square::new(*rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
            if *rank != Rank::Rank1 {
                fen.push('/');
            }
        }

        let _ = write!(fen, " {} {}", self.side_to_move(), self.castling());
        match self.en_passant() {
            Some(sq) => {
                let _ = write!(fen, " {sq}");
            }
            None => fen.push_str(" -"),
        }
        let _ = write!(fen, " {} {}", self.halfmove_clock(), self.fullmove_number());
        fen
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), ParseError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::WrongRankCount(ranks.len()));
    }

    // FEN lists rank 8 first.
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = Rank::ALL[7 - i];
        let mut file_index: u8 = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(ParseError::BadRank(rank_str.to_string()));
                }
                file_index += skip as u8;
            } else {
                let piece = Piece::from_char(c).ok_or(ParseError::BadPiece(c))?;
                let file = File::from_index(file_index)
                    .ok_or_else(|| ParseError::BadRank(rank_str.to_string()))?;
                board.put_piece(Square::new(rank, file), piece);
                file_index += 1;
            }
        }
        if file_index != 8 {
            return Err(ParseError::BadRank(rank_str.to_string()));
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastleRights, ParseError> {
    if field == "-" {
        return Ok(CastleRights::NONE);
    }
    let mut rights = CastleRights::NONE;
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(ParseError::BadCastling(field.to_string())),
        };
        if rights.has(color, side) {
            return Err(ParseError::BadCastling(field.to_string()));
        }
        rights.grant(color, side);
    }
    Ok(rights)
}

fn validate(board: &Board) -> Result<(), BoardError> {
    for color in Color::ALL {
        let kings = board.count_pieces(color, PieceKind::King);
        if kings != 1 {
            return Err(BoardError::KingCount(color, kings));
        }
    }
    for rank in [Rank::Rank1, Rank::Rank8] {
        for file in File::ALL {
            let square = Square::new(rank, file);
            if let Some(piece) = board.piece_at(square) {
                if piece.kind == PieceKind::Pawn {
                    return Err(BoardError::PawnOnBackRank(square));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::ParseError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_fen_roundtrip() {
        let board = Board::from_fen(STARTING_FEN).unwrap();
        assert_eq!(board.to_fen(), STARTING_FEN);
    }

    #[test]
    fn kiwipete_roundtrip() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
        assert_eq!(
            board.piece_at(Square::E5),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }

    #[test]
    fn en_passant_field() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.en_passant(), Some(Square::D6));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq"),
            Err(ParseError::WrongFieldCount(3))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0"),
            Err(ParseError::WrongFieldCount(5))
        );
    }

    #[test]
    fn rejects_bad_placement() {
        assert!(Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1").is_err());
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1"),
            Err(ParseError::BadPiece('X'))
        ));
    }

    #[test]
    fn rejects_bad_side_and_castling() {
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KK - 0 1").is_err());
    }

    #[test]
    fn rejects_missing_king() {
        assert!(Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
    }

    #[test]
    fn rejects_pawn_on_back_rank() {
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/P3K3 w - - 0 1").is_err());
        assert!(Board::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
    }

    #[test]
    fn rejects_zero_fullmove() {
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0").is_err());
    }

    #[test]
    fn clocks_parse() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 42 17").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 17);
    }
}
