//! Error types for the simulation core.
//!
//! Out-of-range cell access is a contract violation and panics; only
//! configuration problems and worker start-up failures are reported here.

use thiserror::Error;

/// Rejected simulation settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {height}x{width}")]
    EmptyBoard { height: usize, width: usize },

    #[error("cell scale must be at least 1 pixel")]
    ZeroScale,

    #[error("worker count must be at least 1")]
    ZeroWorkers,

    #[error("live probability must be within 0..=100 percent, got {0}")]
    Probability(u32),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// The pattern references a cell outside the configured board
    #[error("pattern {name} does not fit a {height}x{width} board")]
    PatternOutOfBounds {
        name: &'static str,
        height: usize,
        width: usize,
    },
}

/// Failure to run the workers of a generation step. Fatal to the host.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Anything that stops a simulation from being set up.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Step(#[from] StepError),
}
