// sim.rs - Simulation state owned by the host loop

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::config::SimConfig;
use crate::error::{SetupError, StepError};
use crate::grid::Board;
use crate::history::CycleDetector;
use crate::scheduler::StepScheduler;
use crate::seed::Seed;
use crate::throttle::Throttle;

/// Board plus everything needed to advance and re-seed it.
pub struct Simulation {
    board: Board,
    scheduler: StepScheduler,
    throttle: Throttle,
    history: CycleDetector,
    rng: ChaCha8Rng,
    generation: u64,
    cycle: bool,
}

impl Simulation {
    /// Validate `config`, build the workers and seed the board.
    pub fn new(config: &SimConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let workers = config.worker_count()?;
        let scheduler = StepScheduler::new(workers, config.strategy)?;
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        info!(
            height = config.height,
            width = config.width,
            workers = workers.get(),
            strategy = ?config.strategy,
            "simulation ready"
        );

        let mut sim = Self {
            board: Board::new(config.height, config.width),
            scheduler,
            throttle: Throttle::new(config.delay),
            history: CycleDetector::new(),
            rng,
            generation: 0,
            cycle: false,
        };
        sim.reseed(config.initial_seed()?);
        Ok(sim)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scheduler(&self) -> &StepScheduler {
        &self.scheduler
    }

    pub fn throttle_mut(&mut self) -> &mut Throttle {
        &mut self.throttle
    }

    /// True once the board has repeated a recent generation.
    pub fn cycle_detected(&self) -> bool {
        self.cycle
    }

    /// Advance one generation unconditionally.
    pub fn step(&mut self) -> Result<(), StepError> {
        self.scheduler.advance(&mut self.board)?;
        self.generation += 1;

        if self.history.observe(&self.board) && !self.cycle {
            self.cycle = true;
            warn!(generation = self.generation, "board repeats a recent generation");
        }
        Ok(())
    }

    /// Count one host tick and step if the throttle is due.
    pub fn tick(&mut self) -> Result<bool, StepError> {
        if !self.throttle.tick() {
            return Ok(false);
        }
        self.step()?;
        Ok(true)
    }

    /// Replace the board contents and restart counting from generation 0.
    pub fn reseed(&mut self, seed: Seed) {
        seed.apply(&mut self.board, &mut self.rng);
        self.restart();
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.restart();
    }

    /// Flip one cell, as when editing a paused board.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.board.toggle(row, col);
        self.rebase_history();
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.throttle.reset();
        self.rebase_history();
    }

    /// Forget earlier generations; the current board is the first one remembered.
    fn rebase_history(&mut self) {
        self.history.reset();
        self.history.observe(&self.board);
        self.cycle = false;
    }
}
