// main.rs - Parallel Conway's Game of Life
// The board is stepped by row-partitioned worker threads; see conway_core.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use conway_core::config::{DEFAULT_DELAY, DEFAULT_HEIGHT, DEFAULT_LIVE_PERCENT, DEFAULT_SCALE, DEFAULT_WIDTH};
use conway_core::{SimConfig, Simulation, Strategy, PATTERNS};
use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

use ui::GameOfLife;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Pixels per cell side
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Frames to wait between generations
    #[arg(long, default_value_t = DEFAULT_DELAY)]
    delay: u32,

    /// Chance (percent) of a cell starting alive in a random fill
    #[arg(long, default_value_t = DEFAULT_LIVE_PERCENT)]
    live_percent: u32,

    /// Worker threads per step [default: hardware parallelism]
    #[arg(short, long)]
    workers: Option<usize>,

    /// How workers are run for each step
    #[arg(long, value_enum, default_value = "scoped")]
    strategy: StrategyArg,

    /// Start from a built-in pattern instead of a random fill
    #[arg(short, long)]
    pattern: Option<String>,

    /// Seed for the random fill
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window and log population each generation
    #[arg(long)]
    headless: bool,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Print the built-in patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Spawn fresh threads for every generation
    Scoped,
    /// Reuse a persistent thread pool
    Pool,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scoped => Strategy::Scoped,
            StrategyArg::Pool => Strategy::Pool,
        }
    }
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            height: self.height,
            width: self.width,
            scale: self.scale,
            delay: self.delay,
            live_percent: self.live_percent,
            workers: self.workers,
            strategy: self.strategy.into(),
            pattern: self.pattern.clone(),
            rng_seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "conway=info,conway_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if args.list_patterns {
        for pattern in PATTERNS {
            println!("{:<12} {} ({} cells)", pattern.key, pattern.name, pattern.cells.len());
        }
        return Ok(());
    }

    let config = args.config();
    let sim = Simulation::new(&config).context("invalid simulation settings")?;

    if args.headless {
        return run_headless(sim, args.generations);
    }

    let (board_w, board_h) = config.pixel_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_w.max(520.0), board_h + ui::CONTROLS_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    let app = GameOfLife::new(sim, &config);
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}

fn run_headless(mut sim: Simulation, generations: u64) -> Result<()> {
    info!(generations, "running headless");
    for _ in 0..generations {
        sim.step().context("generation step failed")?;
        info!(generation = sim.generation(), live = sim.board().live_count(), "step");
    }
    info!(
        generation = sim.generation(),
        live = sim.board().live_count(),
        cycle = sim.cycle_detected(),
        "headless run finished"
    );
    Ok(())
}
