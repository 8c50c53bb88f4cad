use grid_snake::app::game::{Game, Report, State};
use grid_snake::app::prefs::Prefs;
use grid_snake::error::{ErrorConversion, Result};
use itertools::Itertools;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let prefs = Prefs::default();

    // games don't share anything, each one gets its own seed
    let reports = (0..prefs.games as u64)
        .into_par_iter()
        .map(|i| Game::new(&prefs, prefs.seed + i).map(|game| game.play(prefs.max_ticks)))
        .collect::<Result<Vec<Report>>>()
        .with_trace_step("playing headless batch")?;

    let crashed_seeds = reports
        .iter()
        .filter(|report| matches!(report.state, State::Crashed(_)))
        .map(|report| report.seed)
        .collect_vec();
    let mean_len = reports.iter().map(|report| report.len).sum::<usize>() as f64 / reports.len().max(1) as f64;
    let best = reports.iter().max_by_key(|report| report.len);
    tracing::info!(
        games = reports.len(),
        crashed = crashed_seeds.len(),
        mean_len,
        best_len = best.map(|report| report.len),
        best_seed = best.map(|report| report.seed),
        "batch finished"
    );
    if !crashed_seeds.is_empty() {
        tracing::info!("crashed seeds: {}", crashed_seeds.iter().join(", "));
    }

    let mut game = Game::new(&prefs, prefs.seed).with_trace_step("starting realtime game")?;
    let mut timer = prefs.tick_timer();
    game.run_realtime(&mut timer, prefs.realtime_ticks);

    Ok(())
}
