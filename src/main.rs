//! Sky Hop headless runner
//!
//! Plays sessions on autopilot at a fixed timestep and reports the results.
//! The best score is stored on disk, so it carries across invocations.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use sky_hop::config::GameConfig;
use sky_hop::consts::SIM_DT;
use sky_hop::persistence::JsonFileStore;
use sky_hop::sim::{Session, TickInput};
use sky_hop::ui::{best_text, game_over_text, score_text};

/// Command-line arguments for the headless runner.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON config file (defaults are used for anything it leaves out).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the first run; later runs increment it.
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Maximum ticks per run.
    #[arg(short, long, default_value_t = 60 * 120)]
    ticks: u32,

    /// Number of runs, restarting in between.
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Where the best score is kept.
    #[arg(long, value_name = "PATH", default_value = "sky_hop_best.json")]
    best_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut session = Session::builder(config)
        .default_scene()
        .seed(args.seed)
        .store(JsonFileStore::open(&args.best_file))
        .build()?;

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for run in 0..args.runs {
        if run > 0 {
            session.restart(args.seed.wrapping_add(run as u64));
        }
        log::info!("Run {}: {}", run + 1, best_text(session.state().score.best()));

        for _ in 0..args.ticks {
            session.tick(&input, SIM_DT);
            if session.state().is_over() {
                break;
            }
        }

        let state = session.state();
        match session.report() {
            Some(report) => {
                let (score, best) = game_over_text(&report);
                log::info!("Run {} over: {} / {}", run + 1, score, best);
            }
            None => log::info!(
                "Run {} timed out at {} ({} platforms live)",
                run + 1,
                score_text(state.score.current()),
                state.field.platforms().len()
            ),
        }
    }

    println!("{}", best_text(session.state().score.best()));
    Ok(())
}
