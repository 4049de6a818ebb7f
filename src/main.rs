use anyhow::Result;
use tracing::info;

use scholar_core::{Game, GameStatus};
use scholar_engine::{Difficulty, QualityThresholds, SearchLimits, analyze_game, search};

/// Self-play demo: two difficulty levels play each other for a few
/// moves, then the game is analyzed move by move.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("scholar starting");

    let white = Difficulty::new(4).ok_or_else(|| anyhow::anyhow!("bad difficulty"))?;
    let black = Difficulty::new(2).ok_or_else(|| anyhow::anyhow!("bad difficulty"))?;
    let mut game = Game::new();

    for _ in 0..30 {
        let status = game.status();
        if status.is_terminal() {
            break;
        }
        let level = match game.board().side_to_move() {
            scholar_core::Color::White => white,
            scholar_core::Color::Black => black,
        };
        let result = search(&game, &level.options(), &SearchLimits::none())?;
        info!(
            mover = %game.board().side_to_move(),
            mv = %result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            "played"
        );
        game.play(result.best_move)?;
    }

    println!("{}", game.board().pretty());
    println!("result after {} plies: {}", game.ply(), game.status());

    let analysis = analyze_game(&game, 3, &QualityThresholds::default(), None)?;
    println!(
        "analysis: {} good, {} inaccuracies, {} mistakes, {} blunders, accuracy {:.1}",
        analysis.good,
        analysis.inaccuracies,
        analysis.mistakes,
        analysis.blunders,
        analysis.accuracy
    );
    for (index, report) in analysis.reports.iter().enumerate() {
        info!(
            move_number = index + 1,
            played = %report.played,
            best = %report.best_move,
            quality = %report.quality,
            delta = report.delta,
            "analyzed"
        );
    }

    if game.status() == GameStatus::Ongoing {
        info!("game still ongoing after the demo move budget");
    }

    Ok(())
}
