// seed.rs - Initial board contents

use rand::Rng;
use tracing::info;

use crate::grid::Board;
use crate::patterns::{self, Pattern};

/// How the board is populated at startup or on re-seed.
#[derive(Clone, Copy, Debug)]
pub enum Seed {
    /// Each cell alive with the given percent probability.
    Random { live_percent: u32 },
    Pattern(&'static Pattern),
}

impl Seed {
    pub fn apply<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        match *self {
            Seed::Random { live_percent } => seed_random(board, live_percent, rng),
            Seed::Pattern(pattern) => seed_pattern(board, pattern),
        }
    }
}

/// Fill every cell independently: one uniform draw in `[0, 100)` per cell,
/// alive iff the draw is below `live_percent`.
pub fn seed_random<R: Rng + ?Sized>(board: &mut Board, live_percent: u32, rng: &mut R) {
    for cell in board.cells_mut() {
        *cell = rng.gen_range(0..100u32) < live_percent;
    }
    info!(live_percent, live = board.live_count(), "seeded random board");
}

/// Clear the board and place `pattern` on it.
pub fn seed_pattern(board: &mut Board, pattern: &Pattern) {
    patterns::apply_pattern(board, pattern);
    info!(pattern = pattern.name, live = pattern.cells.len(), "seeded pattern");
}
