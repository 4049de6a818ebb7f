//! Iterative-deepening negamax search.

mod control;
mod negamax;
mod ordering;

use thiserror::Error;
use tracing::debug;

use scholar_core::{Game, Move};

use crate::eval::EvalWeights;

pub use control::SearchLimits;
pub(crate) use negamax::position_value;

/// Larger than any reachable score.
pub(crate) const INF: i32 = 30_000;

/// Base score for delivering mate; discounted by the mating distance.
pub(crate) const MATE_SCORE: i32 = 29_000;

/// Scores at or beyond this magnitude mean a forced mate was found.
pub const MATE_THRESHOLD: i32 = 28_000;

/// What to search for: target depth, leaf-noise amplitude, RNG seed,
/// and the evaluation weights.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Target depth in plies; iterative deepening works up to it.
    pub depth: u32,
    /// Leaf-noise amplitude in centipawns; 0 disables noise.
    pub noise: i32,
    /// Noise RNG seed. `None` seeds from the OS, so set it in tests.
    pub seed: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            depth: 3,
            noise: 0,
            seed: None,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchOptions {
    /// Options for a plain fixed-depth, noise-free search.
    pub fn at_depth(depth: u32) -> SearchOptions {
        SearchOptions {
            depth,
            ..SearchOptions::default()
        }
    }
}

/// The outcome of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of `best_move` from the mover's perspective, centipawns.
    pub score: i32,
    /// Deepest fully completed iteration.
    pub depth: u32,
    /// Tree nodes visited across all iterations.
    pub nodes: u64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The root position is terminal. Callers should classify before
    /// searching; this is the fail-closed answer when they have not.
    #[error("no legal move in this position")]
    NoLegalMove,
}

/// Search `game` for the best move.
///
/// Runs iterative deepening up to `options.depth`. The first iteration
/// runs without budget checks, so a finished search always carries a
/// best move; when a budget fires mid-iteration the result of the last
/// completed iteration is returned instead of an error. The caller's
/// `game` is never mutated; the search works on a private clone.
pub fn search(
    game: &Game,
    options: &SearchOptions,
    limits: &SearchLimits,
) -> Result<SearchResult, SearchError> {
    let root_moves = game.legal_moves();
    if root_moves.is_empty() {
        return Err(SearchError::NoLegalMove);
    }

    let mut ctx = negamax::Context::new(game.clone(), options, limits);
    let mut best = None;

    for depth in 1..=options.depth.max(1) {
        match ctx.search_root(&root_moves, depth) {
            Ok((best_move, score)) => {
                debug!(depth, score, best = %best_move, nodes = ctx.nodes(), "iteration complete");
                best = Some(SearchResult {
                    best_move,
                    score,
                    depth,
                    nodes: ctx.nodes(),
                });
                // A forced mate for the mover cannot improve with depth.
                if score >= MATE_THRESHOLD {
                    break;
                }
            }
            Err(negamax::Stopped) => {
                debug!(depth, nodes = ctx.nodes(), "budget exhausted mid-iteration");
                break;
            }
        }
        ctx.enable_limit_checks();
    }

    match best {
        Some(mut result) => {
            result.nodes = ctx.nodes();
            Ok(result)
        }
        // The depth-1 iteration runs without limit checks.
        None => unreachable!("first iteration always completes"),
    }
}

#[cfg(test)]
mod tests {
    use super::{MATE_THRESHOLD, SearchError, SearchLimits, SearchOptions, search};
    use scholar_core::{Game, Square};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn finds_mate_in_one() {
        let game = Game::from_fen("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
        let result = search(&game, &SearchOptions::at_depth(3), &SearchLimits::none()).unwrap();
        assert_eq!(result.best_move.from, Square::E1);
        assert_eq!(result.best_move.to, Square::E8);
        assert!(result.score >= MATE_THRESHOLD);
    }

    #[test]
    fn finds_mate_in_two_with_exact_distance() {
        // No mate in one exists; both 1.Kg6 and 1.Qg1 mate in two, so
        // the pinned fact is the distance, not the key move.
        let mut game = Game::from_fen("7k/8/5K2/8/8/8/8/Q7 w - - 0 1").unwrap();
        let result = search(&game, &SearchOptions::at_depth(4), &SearchLimits::none()).unwrap();
        // Mate delivered on the third ply from the root.
        assert_eq!(result.score, super::MATE_SCORE - 3);
        // After the key move the defender is mated in two plies.
        game.play(result.best_move).unwrap();
        let reply = search(&game, &SearchOptions::at_depth(3), &SearchLimits::none()).unwrap();
        assert_eq!(reply.score, -(super::MATE_SCORE - 2));
    }

    #[test]
    fn prefers_faster_mate() {
        // With the queen already cutting off the king, mate in one
        // exists; the score must reflect one ply, not a slower mate.
        let game = Game::from_fen("6k1/5ppp/8/8/8/8/1Q6/4R1K1 w - - 0 1").unwrap();
        let result = search(&game, &SearchOptions::at_depth(4), &SearchLimits::none()).unwrap();
        assert_eq!(result.score, super::MATE_SCORE - 1);
    }

    #[test]
    fn mated_position_has_no_move() {
        let game = Game::from_fen("4R1k1/5ppp/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(
            search(&game, &SearchOptions::at_depth(2), &SearchLimits::none()),
            Err(SearchError::NoLegalMove)
        );
    }

    #[test]
    fn stalemated_position_has_no_move() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            search(&game, &SearchOptions::at_depth(2), &SearchLimits::none()),
            Err(SearchError::NoLegalMove)
        );
    }

    #[test]
    fn node_budget_still_returns_a_move() {
        let game = Game::new();
        let limits = SearchLimits::none().node_budget(1);
        let result = search(&game, &SearchOptions::at_depth(6), &limits).unwrap();
        assert!(result.depth >= 1);
        assert!(result.depth < 6);
    }

    #[test]
    fn stop_flag_cuts_the_search_short() {
        let game = Game::new();
        let flag = Arc::new(AtomicBool::new(true));
        flag.store(true, Ordering::Relaxed);
        let limits = SearchLimits::none().stop_flag(flag);
        let result = search(&game, &SearchOptions::at_depth(6), &limits).unwrap();
        assert!(result.depth >= 1);
    }

    #[test]
    fn noise_free_search_is_deterministic() {
        let game = Game::new();
        let a = search(&game, &SearchOptions::at_depth(3), &SearchLimits::none()).unwrap();
        let b = search(&game, &SearchOptions::at_depth(3), &SearchLimits::none()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let game = Game::new();
        let options = SearchOptions {
            depth: 2,
            noise: 75,
            seed: Some(42),
            ..SearchOptions::default()
        };
        let a = search(&game, &options, &SearchLimits::none()).unwrap();
        let b = search(&game, &options, &SearchLimits::none()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn winning_capture_is_found() {
        // Black just hung a queen on d5; any reasonable depth takes it.
        let game = Game::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let result = search(&game, &SearchOptions::at_depth(3), &SearchLimits::none()).unwrap();
        assert_eq!(result.best_move.to, Square::D5);
        assert!(result.best_move.is_capture());
    }

    #[test]
    fn search_does_not_mutate_the_callers_game() {
        let game = Game::new();
        let fen_before = game.board().to_fen();
        search(&game, &SearchOptions::at_depth(3), &SearchLimits::none()).unwrap();
        assert_eq!(game.board().to_fen(), fen_before);
        assert_eq!(game.ply(), 0);
    }
}
