//! Evaluation, alpha-beta search, difficulty levels, and move-quality
//! analysis on top of `scholar-core`.

mod difficulty;
mod eval;
mod quality;
mod search;

pub use difficulty::Difficulty;
pub use eval::{EvalWeights, evaluate, evaluate_with};
pub use quality::{
    GameAnalysis, MoveQuality, MoveReport, QualityError, QualityThresholds, analyze_game,
    classify_move_quality,
};
pub use search::{
    MATE_THRESHOLD, SearchError, SearchLimits, SearchOptions, SearchResult, search,
};
