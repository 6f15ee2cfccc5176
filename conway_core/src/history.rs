// history.rs - Detects boards that repeat a recent generation

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Board;

/// Number of recent generations remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring of hashes of the last [`HISTORY_LEN`] boards.
///
/// Catches still lifes and oscillators with period up to `HISTORY_LEN`. A
/// hash collision can report a false cycle; nothing depends on it beyond a
/// notice to the user.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

pub fn hash_board(board: &Board) -> u64 {
    let mut hasher = DefaultHasher::new();
    board.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `board`; true if it matches one of the remembered generations.
    pub fn observe(&mut self, board: &Board) -> bool {
        let hash = hash_board(board);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.hashes = [0; HISTORY_LEN];
        self.count = 0;
    }
}
