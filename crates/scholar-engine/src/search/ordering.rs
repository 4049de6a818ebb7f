//! Move ordering for better alpha-beta pruning.

use scholar_core::{Move, MoveKind, MoveList, PieceKind};

/// Fixed ordering values; these are deliberately independent of the
/// tunable evaluation weights so ordering never changes with tuning.
const ORDER_VALUE: [i32; PieceKind::COUNT] = [100, 300, 300, 500, 900, 0];

fn value(kind: PieceKind) -> i32 {
    ORDER_VALUE[kind.index()]
}

/// MVV-LVA: prefer capturing the most valuable victim with the least
/// valuable attacker; promotions rank with captures of similar gain.
fn order_score(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured {
        score += 10 * value(victim.kind) - value(mv.piece.kind);
    }
    if let MoveKind::Promotion(promoted) = mv.kind {
        score += value(promoted.kind());
    }
    score
}

/// Yields moves best-first via incremental selection, so a cutoff on an
/// early move never pays for sorting the rest.
pub(super) struct MovePicker {
    moves: MoveList,
    scores: Vec<i32>,
    index: usize,
}

impl MovePicker {
    pub(super) fn new(moves: MoveList) -> MovePicker {
        let scores = moves.iter().map(order_score).collect();
        MovePicker {
            moves,
            scores,
            index: 0,
        }
    }

    pub(super) fn next(&mut self) -> Option<Move> {
        if self.index >= self.moves.len() {
            return None;
        }
        let mut best = self.index;
        for i in self.index + 1..self.moves.len() {
            if self.scores[i] > self.scores[best] {
                best = i;
            }
        }
        self.moves.swap(self.index, best);
        self.scores.swap(self.index, best);
        let mv = self.moves[self.index];
        self.index += 1;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::MovePicker;
    use scholar_core::{Board, MoveKind, Square, legal_moves};

    #[test]
    fn captures_come_before_quiet_moves() {
        // White queen can capture the d5 pawn or move quietly.
        let board = Board::from_fen("4k3/8/8/3p4/8/8/3Q4/4K3 w - - 0 1").unwrap();
        let mut picker = MovePicker::new(legal_moves(&board));
        let first = picker.next().unwrap();
        assert!(first.is_capture());
        assert_eq!(first.to, Square::D5);
    }

    #[test]
    fn biggest_victim_first() {
        // Pawn on e4 can take a rook on d5 or a knight on f5.
        let board = Board::from_fen("4k3/8/8/3r1n2/4P3/8/8/4K3 w - - 0 1").unwrap();
        let mut picker = MovePicker::new(legal_moves(&board));
        assert_eq!(picker.next().unwrap().to, Square::D5);
        assert_eq!(picker.next().unwrap().to, Square::F5);
    }

    #[test]
    fn cheap_attacker_preferred_for_equal_victims() {
        // Both the pawn and the queen can capture the d5 rook.
        let board = Board::from_fen("4k3/8/8/3r4/4P3/8/8/3QK3 w - - 0 1").unwrap();
        let mut picker = MovePicker::new(legal_moves(&board));
        let first = picker.next().unwrap();
        assert_eq!(first.to, Square::D5);
        assert_eq!(first.from, Square::E4);
    }

    #[test]
    fn promotions_rank_above_quiet_moves() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut picker = MovePicker::new(legal_moves(&board));
        let first = picker.next().unwrap();
        assert!(matches!(first.kind, MoveKind::Promotion(_)));
    }

    #[test]
    fn picker_yields_every_move_exactly_once() {
        let moves = legal_moves(&Board::starting_position());
        let total = moves.len();
        let mut picker = MovePicker::new(moves);
        let mut seen = Vec::new();
        while let Some(mv) = picker.next() {
            assert!(!seen.contains(&mv));
            seen.push(mv);
        }
        assert_eq!(seen.len(), total);
    }
}
