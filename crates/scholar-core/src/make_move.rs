//! Applying and undoing moves on a [`Board`].

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Everything [`Board::undo_unchecked`] needs that a move cannot
/// reconstruct on its own: the irreversible state the move clobbered.
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// The rook's from/to squares for a castle of `color` on `side`.
fn rook_castle_squares(color: Color, side: CastleSide) -> (Square, Square) {
    let back = Rank::back(color);
    match side {
        CastleSide::Kingside => (
            Square::new(back, File::FileH),
            Square::new(back, File::FileF),
        ),
        CastleSide::Queenside => (
            Square::new(back, File::FileA),
            Square::new(back, File::FileD),
        ),
    }
}

/// The corner square a rook of `color` must occupy to keep the castling
/// right on `side`.
fn rook_home(color: Color, side: CastleSide) -> Square {
    rook_castle_squares(color, side).0
}

/// The square of the pawn removed by an en passant capture: same rank
/// as the capturing pawn's origin, same file as its destination.
fn en_passant_victim(mv: Move) -> Square {
    Square::new(mv.from.rank(), mv.to.file())
}

impl Board {
    /// Apply `mv` without checking legality.
    ///
    /// The caller must guarantee the move was produced by the generator
    /// for this exact position (or is otherwise pseudo-legal in it); the
    /// search and the legality filter rely on this to simulate moves
    /// cheaply. Returns the snapshot needed to undo.
    pub fn apply_unchecked(&mut self, mv: Move) -> Undo {
        let undo = Undo {
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        };
        let mover = mv.piece.color;

        // Clear the captured piece first so the destination is free.
        if mv.captured.is_some() {
            let victim_square = match mv.kind {
                MoveKind::EnPassant => en_passant_victim(mv),
                _ => mv.to,
            };
            self.take_piece(victim_square);
        }

        self.take_piece(mv.from);
        self.put_piece(mv.to, Piece::new(mover, mv.resulting_kind()));

        if let MoveKind::Castle(side) = mv.kind {
            let (rook_from, rook_to) = rook_castle_squares(mover, side);
            if let Some(rook) = self.take_piece(rook_from) {
                self.put_piece(rook_to, rook);
            }
        }

        let mut rights = self.castling();
        if mv.piece.kind == PieceKind::King {
            rights.revoke_all(mover);
        }
        for side in CastleSide::ALL {
            if mv.from == rook_home(mover, side) {
                rights.revoke(mover, side);
            }
            if mv.to == rook_home(mover.flip(), side) {
                rights.revoke(mover.flip(), side);
            }
        }
        self.set_castling(rights);

        let en_passant = match mv.kind {
            MoveKind::DoublePush => mv.from.offset(0, mover.pawn_direction()),
            _ => None,
        };
        self.set_en_passant(en_passant);

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(undo.halfmove_clock + 1);
        }
        if mover == Color::Black {
            self.set_fullmove_number(undo.fullmove_number + 1);
        }
        self.set_side_to_move(mover.flip());

        undo
    }

    /// Reverse a move previously applied with [`Board::apply_unchecked`].
    ///
    /// `undo` must be the snapshot that exact application returned, and
    /// no other moves may have been applied in between.
    pub fn undo_unchecked(&mut self, mv: Move, undo: Undo) {
        let mover = mv.piece.color;

        self.set_side_to_move(mover);
        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
        self.set_halfmove_clock(undo.halfmove_clock);
        self.set_fullmove_number(undo.fullmove_number);

        if let MoveKind::Castle(side) = mv.kind {
            let (rook_from, rook_to) = rook_castle_squares(mover, side);
            if let Some(rook) = self.take_piece(rook_to) {
                self.put_piece(rook_from, rook);
            }
        }

        // Putting back `mv.piece` rather than what stands on `to`
        // reverses promotions for free.
        self.take_piece(mv.to);
        self.put_piece(mv.from, mv.piece);

        if let Some(captured) = mv.captured {
            let victim_square = match mv.kind {
                MoveKind::EnPassant => en_passant_victim(mv),
                _ => mv.to,
            };
            self.put_piece(victim_square, captured);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::zobrist;

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    fn assert_apply_undo_roundtrip(fen: &str, mv: Move) {
        let mut board = Board::from_fen(fen).unwrap();
        let original = board.clone();
        let undo = board.apply_unchecked(mv);
        assert_ne!(board, original, "applying {mv} must change the position");
        assert_eq!(board.signature(), zobrist::compute(&board));
        board.undo_unchecked(mv, undo);
        assert_eq!(board, original);
        assert_eq!(board.signature(), original.signature());
    }

    #[test]
    fn quiet_pawn_push() {
        let mut board = Board::starting_position();
        let mv = Move::double_push(
            Square::E2,
            Square::E4,
            piece(Color::White, PieceKind::Pawn),
        );
        let undo = board.apply_unchecked(mv);
        assert_eq!(board.piece_at(Square::E2), None);
        assert_eq!(
            board.piece_at(Square::E4),
            Some(piece(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.en_passant(), Some(Square::E3));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        board.undo_unchecked(mv, undo);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn capture_resets_halfmove_clock() {
        let fen = "4k3/8/8/3p4/4N3/8/8/4K3 w - - 7 10";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::normal(
            Square::E4,
            Square::D5,
            piece(Color::White, PieceKind::Knight),
            Some(piece(Color::Black, PieceKind::Pawn)),
        );
        board.apply_unchecked(mv);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.piece_at(Square::D5), Some(piece(Color::White, PieceKind::Knight)));
    }

    #[test]
    fn quiet_knight_move_increments_clock() {
        let fen = "4k3/8/8/8/4N3/8/8/4K3 w - - 7 10";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::normal(
            Square::E4,
            Square::F6,
            piece(Color::White, PieceKind::Knight),
            None,
        );
        board.apply_unchecked(mv);
        assert_eq!(board.halfmove_clock(), 8);
    }

    #[test]
    fn black_move_increments_fullmove() {
        let fen = "4k3/8/8/8/8/8/8/4K3 b - - 0 10";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::normal(
            Square::E8,
            Square::D8,
            piece(Color::Black, PieceKind::King),
            None,
        );
        board.apply_unchecked(mv);
        assert_eq!(board.fullmove_number(), 11);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn en_passant_removes_adjacent_pawn() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::en_passant(
            Square::E5,
            Square::D6,
            piece(Color::White, PieceKind::Pawn),
            piece(Color::Black, PieceKind::Pawn),
        );
        let undo = board.apply_unchecked(mv);
        assert_eq!(board.piece_at(Square::D5), None);
        assert_eq!(
            board.piece_at(Square::D6),
            Some(piece(Color::White, PieceKind::Pawn))
        );
        board.undo_unchecked(mv, undo);
        assert_eq!(
            board.piece_at(Square::D5),
            Some(piece(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(Square::D6), None);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::castle(
            Square::E1,
            Square::G1,
            piece(Color::White, PieceKind::King),
            CastleSide::Kingside,
        );
        let undo = board.apply_unchecked(mv);
        assert_eq!(
            board.piece_at(Square::G1),
            Some(piece(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::F1),
            Some(piece(Color::White, PieceKind::Rook))
        );
        assert_eq!(board.piece_at(Square::H1), None);
        assert!(!board.castling().has(Color::White, CastleSide::Kingside));
        board.undo_unchecked(mv, undo);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let fen = "r3k3/8/8/8/8/8/8/4K3 b q - 0 1";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::castle(
            Square::E8,
            Square::C8,
            piece(Color::Black, PieceKind::King),
            CastleSide::Queenside,
        );
        board.apply_unchecked(mv);
        assert_eq!(
            board.piece_at(Square::C8),
            Some(piece(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::D8),
            Some(piece(Color::Black, PieceKind::Rook))
        );
        assert_eq!(board.castling(), CastleRights::NONE);
    }

    #[test]
    fn rook_move_revokes_one_side() {
        let fen = "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::normal(
            Square::A1,
            Square::A4,
            piece(Color::White, PieceKind::Rook),
            None,
        );
        board.apply_unchecked(mv);
        assert!(!board.castling().has(Color::White, CastleSide::Queenside));
        assert!(board.castling().has(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn rook_capture_revokes_opponent_right() {
        let fen = "r3k3/8/8/8/8/8/8/R3K3 w Qq - 0 1";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::normal(
            Square::A1,
            Square::A8,
            piece(Color::White, PieceKind::Rook),
            Some(piece(Color::Black, PieceKind::Rook)),
        );
        board.apply_unchecked(mv);
        assert!(!board.castling().has(Color::Black, CastleSide::Queenside));
        assert!(!board.castling().has(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn promotion_replaces_pawn() {
        let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let mut board = Board::from_fen(fen).unwrap();
        let mv = Move::promotion(
            Square::A7,
            Square::A8,
            piece(Color::White, PieceKind::Pawn),
            None,
            PromotionPiece::Queen,
        );
        let undo = board.apply_unchecked(mv);
        assert_eq!(
            board.piece_at(Square::A8),
            Some(piece(Color::White, PieceKind::Queen))
        );
        board.undo_unchecked(mv, undo);
        assert_eq!(
            board.piece_at(Square::A7),
            Some(piece(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(Square::A8), None);
    }

    #[test]
    fn capture_promotion_restores_victim() {
        let fen = "1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let mv = Move::promotion(
            Square::A7,
            Square::B8,
            piece(Color::White, PieceKind::Pawn),
            Some(piece(Color::Black, PieceKind::Rook)),
            PromotionPiece::Knight,
        );
        assert_apply_undo_roundtrip(fen, mv);
    }

    #[test]
    fn apply_undo_restores_signature() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mv = Move::normal(
            Square::F3,
            Square::H3,
            piece(Color::White, PieceKind::Queen),
            Some(piece(Color::Black, PieceKind::Pawn)),
        );
        assert_apply_undo_roundtrip(fen, mv);
    }
}
