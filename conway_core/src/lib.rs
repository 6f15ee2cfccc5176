//! Conway's Game of Life on a fixed-size toroidal board, stepped in parallel.
//!
//! The board is split into contiguous row chunks, one per worker. Every worker
//! reads a shared snapshot of the previous generation and writes only its own
//! rows of the live board.

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod kernel;
pub mod patterns;
pub mod scheduler;
pub mod seed;
pub mod sim;
pub mod throttle;

pub use config::SimConfig;
pub use error::{ConfigError, SetupError, StepError};
pub use grid::Board;
pub use patterns::{Pattern, PATTERNS};
pub use scheduler::{StepScheduler, Strategy};
pub use seed::Seed;
pub use sim::Simulation;
