//! Parallel generation step.
//!
//! One call to [`StepScheduler::advance`] copies the board into a snapshot,
//! splits the live board into contiguous row chunks (one per worker), runs the
//! kernel over every chunk against the shared snapshot, and joins all workers
//! before returning. Chunks are cut from the board with `split_at_mut`
//! following [`partition`], so each worker holds the only mutable reference
//! to its rows.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::thread;

use rayon::prelude::*;
use tracing::debug;

use crate::error::StepError;
use crate::grid::Board;
use crate::kernel;

/// How workers are run for each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Fresh threads per step, joined at the end of a `thread::scope`.
    #[default]
    Scoped,
    /// Persistent rayon pool sized to the worker count.
    Pool,
}

/// Rows per chunk when `height` rows are shared by `workers` workers.
pub fn rows_per_worker(height: usize, workers: NonZeroUsize) -> usize {
    height.div_ceil(workers.get()).max(1)
}

/// Contiguous, non-overlapping row ranges covering `0..height`.
///
/// Every range but the last holds `ceil(height / workers)` rows. Fewer than
/// `workers` ranges come back when the division leaves nothing for the tail.
pub fn partition(height: usize, workers: NonZeroUsize) -> Vec<Range<usize>> {
    let chunk = rows_per_worker(height, workers);
    (0..height)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(height))
        .collect()
}

pub struct StepScheduler {
    workers: NonZeroUsize,
    strategy: Strategy,
    pool: Option<rayon::ThreadPool>,
    snapshot: Option<Board>, // reused between steps
}

impl StepScheduler {
    pub fn new(workers: NonZeroUsize, strategy: Strategy) -> Result<Self, StepError> {
        let pool = match strategy {
            Strategy::Scoped => None,
            Strategy::Pool => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(workers.get())
                    .thread_name(|i| format!("life-pool-{i}"))
                    .build()?,
            ),
        };
        Ok(Self { workers, strategy, pool, snapshot: None })
    }

    /// Worker count from the hardware, falling back to one.
    pub fn detect_workers() -> NonZeroUsize {
        thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    }

    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Advance `board` by exactly one generation.
    ///
    /// On `Ok`, every worker has finished and `board` holds the next
    /// generation. On `Err` the step is incomplete and the board contents are
    /// unspecified.
    pub fn advance(&mut self, board: &mut Board) -> Result<(), StepError> {
        // Snapshot is fully written before any worker starts
        let snapshot = self.snapshot.get_or_insert_with(|| board.clone());
        snapshot.clone_from(board);
        let snapshot = &*snapshot;

        let ranges = partition(board.height(), self.workers);
        let chunks = split_rows(board.cells_mut(), snapshot.width(), &ranges);

        match &self.pool {
            None => Self::run_scoped(snapshot, chunks)?,
            Some(pool) => pool.install(|| {
                chunks
                    .into_par_iter()
                    .for_each(|(first_row, chunk)| kernel::update_rows(snapshot, first_row, chunk));
            }),
        }

        debug!(
            workers = self.workers.get(),
            strategy = ?self.strategy,
            chunks = ranges.len(),
            "generation step complete"
        );
        Ok(())
    }

    fn run_scoped(snapshot: &Board, chunks: Vec<(usize, &mut [bool])>) -> Result<(), StepError> {
        thread::scope(|scope| -> Result<(), StepError> {
            for (i, (first_row, chunk)) in chunks.into_iter().enumerate() {
                thread::Builder::new()
                    .name(format!("life-worker-{i}"))
                    .spawn_scoped(scope, move || kernel::update_rows(snapshot, first_row, chunk))?;
            }
            // scope joins every spawned worker before returning
            Ok(())
        })
    }
}

/// Split row-major `cells` into one mutable slice per row range, each tagged
/// with its first row. `ranges` must be contiguous from row 0.
pub fn split_rows<'a>(
    mut cells: &'a mut [bool],
    width: usize,
    ranges: &[Range<usize>],
) -> Vec<(usize, &'a mut [bool])> {
    let mut chunks = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (chunk, rest) = std::mem::take(&mut cells).split_at_mut(range.len() * width);
        chunks.push((range.start, chunk));
        cells = rest;
    }
    chunks
}
