//! Move-quality classification for post-game analysis.
//!
//! A played move is priced against a noise-free reference search of the
//! same position at the same depth. The centipawn gap between the best
//! line and the played line, from the mover's perspective, maps onto the
//! good / inaccuracy / mistake / blunder labels.

use thiserror::Error;
use tracing::trace;

use scholar_core::{Color, Game, Move};

use crate::eval::EvalWeights;
use crate::search::{SearchError, SearchLimits, SearchOptions, position_value, search};

/// The quality label for one played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveQuality {
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl std::fmt::Display for MoveQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveQuality::Good => write!(f, "good"),
            MoveQuality::Inaccuracy => write!(f, "inaccuracy"),
            MoveQuality::Mistake => write!(f, "mistake"),
            MoveQuality::Blunder => write!(f, "blunder"),
        }
    }
}

/// Centipawn boundaries between the quality labels.
///
/// A delta below `inaccuracy` is good; below `mistake` an inaccuracy;
/// below `blunder` a mistake; at or above it a blunder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityThresholds {
    pub inaccuracy: i32,
    pub mistake: i32,
    pub blunder: i32,
}

impl QualityThresholds {
    /// Build thresholds, rejecting non-monotonic boundaries.
    pub fn new(inaccuracy: i32, mistake: i32, blunder: i32) -> Result<QualityThresholds, QualityError> {
        if !(0 < inaccuracy && inaccuracy < mistake && mistake < blunder) {
            return Err(QualityError::BadThresholds {
                inaccuracy,
                mistake,
                blunder,
            });
        }
        Ok(QualityThresholds {
            inaccuracy,
            mistake,
            blunder,
        })
    }

    /// Map a centipawn loss onto a label.
    pub fn classify(&self, delta: i32) -> MoveQuality {
        if delta >= self.blunder {
            MoveQuality::Blunder
        } else if delta >= self.mistake {
            MoveQuality::Mistake
        } else if delta >= self.inaccuracy {
            MoveQuality::Inaccuracy
        } else {
            MoveQuality::Good
        }
    }
}

impl Default for QualityThresholds {
    fn default() -> QualityThresholds {
        QualityThresholds {
            inaccuracy: 20,
            mistake: 100,
            blunder: 300,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QualityError {
    #[error("thresholds must satisfy 0 < inaccuracy < mistake < blunder, got {inaccuracy}/{mistake}/{blunder}")]
    BadThresholds {
        inaccuracy: i32,
        mistake: i32,
        blunder: i32,
    },
    #[error("played move {0} is not legal in the analyzed position")]
    IllegalMove(Move),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// The analysis of one played move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveReport {
    pub played: Move,
    pub quality: MoveQuality,
    /// Centipawn loss versus the reference best move; never negative.
    pub delta: i32,
    pub best_move: Move,
    /// Accuracy contribution in [0, 100]: 100 · 2^(−delta/100).
    pub accuracy: f64,
}

/// Classify one played move against a reference search at `depth`.
///
/// The reference search is always noise-free. A played move that is the
/// reference best move, or the only legal move, is good with delta 0 by
/// construction.
pub fn classify_move_quality(
    game: &Game,
    played: Move,
    depth: u32,
    thresholds: &QualityThresholds,
) -> Result<MoveReport, QualityError> {
    let legal = game.legal_moves();
    if !legal.contains(&played) {
        return Err(QualityError::IllegalMove(played));
    }
    if legal.len() == 1 {
        return Ok(report(played, played, 0, thresholds));
    }

    let weights = EvalWeights::default();
    let options = SearchOptions {
        depth,
        noise: 0,
        seed: Some(0),
        weights: weights.clone(),
    };
    let reference = search(game, &options, &SearchLimits::none())?;
    if reference.best_move == played {
        return Ok(report(played, played, 0, thresholds));
    }

    // Price the played line to the same depth: one ply is consumed by
    // the move itself, the opponent's reply line covers the rest.
    let mut after = game.clone();
    after.apply_unchecked(played);
    let reply_depth = depth.saturating_sub(1);
    let played_value = -position_value(&after, reply_depth, &weights);

    let delta = (reference.score - played_value).max(0);
    trace!(%played, best = %reference.best_move, delta, "classified move");
    Ok(report(played, reference.best_move, delta, thresholds))
}

fn report(played: Move, best: Move, delta: i32, thresholds: &QualityThresholds) -> MoveReport {
    MoveReport {
        played,
        quality: thresholds.classify(delta),
        delta,
        best_move: best,
        accuracy: accuracy(delta),
    }
}

/// Accuracy contribution of one move: halves every 100 centipawns lost.
fn accuracy(delta: i32) -> f64 {
    (100.0 * f64::powf(2.0, -f64::from(delta) / 100.0)).clamp(0.0, 100.0)
}

/// Aggregated analysis of a finished (or partial) game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameAnalysis {
    /// One report per analyzed move, in the order the moves were played.
    pub reports: Vec<MoveReport>,
    pub good: usize,
    pub inaccuracies: usize,
    pub mistakes: usize,
    pub blunders: usize,
    /// Mean per-move accuracy, or 100 when nothing was analyzed.
    pub accuracy: f64,
}

/// Replay `game`'s move history and classify every move at `depth`;
/// `side` restricts the analysis to one player's moves.
///
/// Classification of each move depends only on the position before it,
/// so callers needing speed can fan the per-move calls out across
/// threads and reassemble reports by move index; this helper runs them
/// in order.
pub fn analyze_game(
    game: &Game,
    depth: u32,
    thresholds: &QualityThresholds,
    side: Option<Color>,
) -> Result<GameAnalysis, QualityError> {
    let moves: Vec<Move> = game.moves().collect();

    // Rewind a private copy to the game's starting position.
    let mut replay = game.clone();
    while replay.undo().is_some() {}

    let mut reports = Vec::new();
    for mv in moves {
        let mover = replay.board().side_to_move();
        if side.is_none_or(|c| c == mover) {
            reports.push(classify_move_quality(&replay, mv, depth, thresholds)?);
        }
        replay.apply_unchecked(mv);
    }

    let mut analysis = GameAnalysis {
        good: 0,
        inaccuracies: 0,
        mistakes: 0,
        blunders: 0,
        accuracy: 100.0,
        reports,
    };
    for r in &analysis.reports {
        match r.quality {
            MoveQuality::Good => analysis.good += 1,
            MoveQuality::Inaccuracy => analysis.inaccuracies += 1,
            MoveQuality::Mistake => analysis.mistakes += 1,
            MoveQuality::Blunder => analysis.blunders += 1,
        }
    }
    if !analysis.reports.is_empty() {
        analysis.accuracy = analysis.reports.iter().map(|r| r.accuracy).sum::<f64>()
            / analysis.reports.len() as f64;
    }
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::{
        MoveQuality, QualityError, QualityThresholds, analyze_game, classify_move_quality,
    };
    use scholar_core::{Color, Game};

    const DEPTH: u32 = 2;

    #[test]
    fn thresholds_must_be_monotonic() {
        assert!(QualityThresholds::new(20, 100, 300).is_ok());
        assert!(matches!(
            QualityThresholds::new(100, 20, 300),
            Err(QualityError::BadThresholds { .. })
        ));
        assert!(QualityThresholds::new(0, 100, 300).is_err());
    }

    #[test]
    fn label_boundaries() {
        let t = QualityThresholds::default();
        assert_eq!(t.classify(0), MoveQuality::Good);
        assert_eq!(t.classify(19), MoveQuality::Good);
        assert_eq!(t.classify(20), MoveQuality::Inaccuracy);
        assert_eq!(t.classify(99), MoveQuality::Inaccuracy);
        assert_eq!(t.classify(100), MoveQuality::Mistake);
        assert_eq!(t.classify(299), MoveQuality::Mistake);
        assert_eq!(t.classify(300), MoveQuality::Blunder);
    }

    #[test]
    fn accuracy_halves_per_hundred_centipawns() {
        assert!((super::accuracy(0) - 100.0).abs() < 1e-9);
        assert!((super::accuracy(100) - 50.0).abs() < 1e-9);
        assert!((super::accuracy(200) - 25.0).abs() < 1e-9);
        assert!(super::accuracy(10_000) >= 0.0);
    }

    #[test]
    fn best_move_is_always_good() {
        // White to move can win the hanging queen on d5.
        let game = Game::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let best = game.parse_move("d2d5").unwrap();
        let report =
            classify_move_quality(&game, best, DEPTH, &QualityThresholds::default()).unwrap();
        assert_eq!(report.quality, MoveQuality::Good);
        assert_eq!(report.delta, 0);
        assert_eq!(report.best_move, best);
        assert!((report.accuracy - 100.0).abs() < 1e-9);
    }

    #[test]
    fn hanging_the_queen_is_a_blunder() {
        // White's queen on d1 can play safely; d1h5 hangs it to the g6 pawn.
        let game = Game::from_fen("4k3/8/6p1/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let blunder = game.parse_move("d1h5").unwrap();
        let report =
            classify_move_quality(&game, blunder, DEPTH, &QualityThresholds::default()).unwrap();
        assert_eq!(report.quality, MoveQuality::Blunder);
        assert!(report.delta >= 300);
        assert!(report.accuracy < 15.0);
    }

    #[test]
    fn only_legal_move_is_never_flagged() {
        // The cornered white king has exactly one square to go to.
        let game = Game::from_fen("4k3/8/8/8/7b/5r2/r7/7K w - - 0 1").unwrap();
        assert_eq!(game.legal_moves().len(), 1);
        let forced = game.legal_moves()[0];
        let report =
            classify_move_quality(&game, forced, DEPTH, &QualityThresholds::default()).unwrap();
        assert_eq!(report.quality, MoveQuality::Good);
        assert_eq!(report.delta, 0);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let game = Game::new();
        let other = Game::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let foreign = other.parse_move("d2d5").unwrap();
        assert!(matches!(
            classify_move_quality(&game, foreign, DEPTH, &QualityThresholds::default()),
            Err(QualityError::IllegalMove(_))
        ));
    }

    #[test]
    fn analyze_game_aggregates_labels() {
        // Scholar-style opening where White then hangs the queen.
        let mut game = Game::new();
        for uci in ["e2e4", "e7e5", "d1h5", "b8c6", "h5f7"] {
            let mv = game.parse_move(uci).unwrap();
            game.play(mv).unwrap();
        }
        let analysis =
            analyze_game(&game, DEPTH, &QualityThresholds::default(), None).unwrap();
        assert_eq!(analysis.reports.len(), 5);
        assert_eq!(
            analysis.good
                + analysis.inaccuracies
                + analysis.mistakes
                + analysis.blunders,
            5
        );
        assert!(analysis.accuracy <= 100.0);
        // Qxf7 hangs the queen to the king: a clear blunder.
        assert_eq!(analysis.reports[4].quality, MoveQuality::Blunder);
    }

    #[test]
    fn analyze_game_can_filter_by_side() {
        let mut game = Game::new();
        for uci in ["e2e4", "e7e5", "g1f3", "b8c6"] {
            let mv = game.parse_move(uci).unwrap();
            game.play(mv).unwrap();
        }
        let white_only =
            analyze_game(&game, DEPTH, &QualityThresholds::default(), Some(Color::White)).unwrap();
        assert_eq!(white_only.reports.len(), 2);
        assert!(white_only.reports.iter().all(|r| r.played.piece.color == Color::White));
        // The original game is untouched.
        assert_eq!(game.ply(), 4);
    }

    #[test]
    fn analyze_empty_game_reports_perfect_accuracy() {
        let analysis =
            analyze_game(&Game::new(), DEPTH, &QualityThresholds::default(), None).unwrap();
        assert!(analysis.reports.is_empty());
        assert_eq!(analysis.accuracy, 100.0);
    }
}
