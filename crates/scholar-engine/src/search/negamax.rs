//! The negamax alpha-beta tree walk.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use scholar_core::{Color, Game, GameStatus, Move, MoveList, classify_with_moves};

use crate::eval::{EvalWeights, evaluate_with};
use crate::search::control::SearchLimits;
use crate::search::ordering::MovePicker;
use crate::search::{INF, MATE_SCORE, SearchOptions};

/// Raised out of the tree when a budget or the stop flag fires.
pub(super) struct Stopped;

pub(super) struct Context<'a> {
    game: Game,
    weights: &'a EvalWeights,
    noise: i32,
    rng: SmallRng,
    limits: &'a SearchLimits,
    /// Off for the first iteration so a best move always exists.
    limit_checks: bool,
    nodes: u64,
}

impl<'a> Context<'a> {
    pub(super) fn new(game: Game, options: &'a SearchOptions, limits: &'a SearchLimits) -> Context<'a> {
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Context {
            game,
            weights: &options.weights,
            noise: options.noise,
            rng,
            limits,
            limit_checks: false,
            nodes: 0,
        }
    }

    pub(super) fn nodes(&self) -> u64 {
        self.nodes
    }

    pub(super) fn enable_limit_checks(&mut self) {
        self.limit_checks = true;
    }

    /// One full-window root iteration at `depth`. Returns the best move
    /// and its exact score from the mover's perspective.
    pub(super) fn search_root(
        &mut self,
        moves: &MoveList,
        depth: u32,
    ) -> Result<(Move, i32), Stopped> {
        debug_assert!(!moves.is_empty());
        let mut picker = MovePicker::new(moves.clone());
        let mut alpha = -INF;
        let mut best = moves[0];
        while let Some(mv) = picker.next() {
            self.game.apply_unchecked(mv);
            let result = self.negamax(depth - 1, 1, -INF, -alpha);
            self.game.undo();
            let score = -result?;
            if score > alpha {
                alpha = score;
                best = mv;
            }
        }
        Ok((best, alpha))
    }

    fn negamax(&mut self, depth: u32, ply: u32, mut alpha: i32, beta: i32) -> Result<i32, Stopped> {
        self.nodes += 1;
        if self.limit_checks && (self.nodes & 1023) == 0 && self.limits.should_stop(self.nodes) {
            return Err(Stopped);
        }

        let moves = self.game.legal_moves();
        match classify_with_moves(&self.game, &moves) {
            // Mated here; prefer the longest defense / fastest mate by
            // discounting with the distance from the root.
            GameStatus::Checkmate { .. } => return Ok(-(MATE_SCORE - ply as i32)),
            GameStatus::Draw(_) => return Ok(0),
            GameStatus::Ongoing | GameStatus::Check => {}
        }
        if depth == 0 {
            return Ok(self.leaf_value());
        }

        let mut best = -INF;
        let mut picker = MovePicker::new(moves);
        while let Some(mv) = picker.next() {
            self.game.apply_unchecked(mv);
            let result = self.negamax(depth - 1, ply + 1, -beta, -alpha);
            self.game.undo();
            let score = -result?;
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }

    /// Static evaluation from the side to move's perspective, plus the
    /// difficulty noise. Only non-terminal positions reach this point,
    /// so noise can never turn a mate or draw into something else.
    fn leaf_value(&mut self) -> i32 {
        let board = self.game.board();
        let mut value = evaluate_with(board, self.weights);
        if board.side_to_move() == Color::Black {
            value = -value;
        }
        if self.noise > 0 {
            value += self.rng.random_range(-self.noise..=self.noise);
        }
        value
    }
}

/// Noise-free value of `game`'s position searched to `depth`, from the
/// side to move's perspective. The analyzer uses this to price the
/// position after a played move at the same depth as the reference
/// search.
pub(crate) fn position_value(game: &Game, depth: u32, weights: &EvalWeights) -> i32 {
    let options = SearchOptions {
        depth,
        noise: 0,
        seed: Some(0),
        weights: weights.clone(),
    };
    let limits = SearchLimits::none();
    let mut ctx = Context::new(game.clone(), &options, &limits);
    // Limit checks stay off, so the walk cannot be interrupted.
    match ctx.negamax(depth, 0, -INF, INF) {
        Ok(value) => value,
        Err(Stopped) => 0,
    }
}
