// patterns.rs - Built-in seed patterns
//
// Coordinates are absolute (row, col) positions laid out for the default
// 160x170 board.

use crate::grid::Board;

pub struct Pattern {
    pub name: &'static str, // display name
    pub key: &'static str, // command-line name
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// True if every coordinate lies on a `height × width` board.
    pub fn fits(&self, height: usize, width: usize) -> bool {
        self.cells.iter().all(|&(row, col)| row < height && col < width)
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("cells", &self.cells.len())
            .finish()
    }
}

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    key: "gosper-gun",
    cells: &[
        (56, 42), (56, 43), (57, 42), (57, 43), (56, 53),
        (55, 53), (57, 53), (54, 54), (58, 54), (53, 55),
        (59, 55), (54, 56), (58, 56), (56, 57), (55, 57),
        (57, 57), (56, 58), (55, 58), (57, 58), (55, 63),
        (54, 63), (53, 63), (53, 64), (52, 64), (55, 64),
        (56, 64), (53, 65), (52, 65), (55, 65), (56, 65),
        (52, 66), (53, 66), (54, 66), (55, 66), (56, 66),
        (52, 67), (51, 67), (56, 67), (57, 67), (52, 72),
        (53, 72), (54, 76), (55, 76), (54, 77), (55, 77),
    ],
};

pub const SIMKIN_GLIDER_GUN: Pattern = Pattern {
    name: "Simkin Glider Gun",
    key: "simkin-gun",
    cells: &[
        (47, 41), (47, 42), (48, 41), (48, 42), (47, 48),
        (47, 49), (48, 48), (48, 49), (50, 46), (50, 45),
        (51, 46), (51, 45), (57, 53), (58, 53), (59, 53),
        (58, 54), (58, 55), (57, 55), (56, 55), (56, 68),
        (56, 69), (55, 68), (55, 69), (58, 66), (58, 65),
        (59, 66), (59, 65), (58, 72), (58, 73), (59, 72),
        (59, 73),
    ],
};

pub const PUFFER_TRAIN: Pattern = Pattern {
    name: "Puffer Train",
    key: "puffer",
    cells: &[
        (42, 2), (43, 3), (43, 4), (43, 5), (43, 6),
        (43, 7), (43, 8), (42, 8), (41, 8), (40, 7),
        (46, 2), (46, 3), (46, 4), (47, 2), (47, 3),
        (48, 6), (49, 6), (51, 6), (51, 7), (50, 7),
        (49, 7), (50, 8), (55, 6), (57, 6), (58, 6),
        (55, 7), (56, 7), (57, 7), (56, 8), (59, 2),
        (60, 2), (59, 3), (60, 3), (60, 4), (64, 2),
        (63, 3), (63, 4), (63, 5), (63, 6), (63, 7),
        (63, 8), (64, 8), (65, 8), (66, 7),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GOSPER_GLIDER_GUN,
    SIMKIN_GLIDER_GUN,
    PUFFER_TRAIN,
    Pattern {
        name: "Glider",
        key: "glider",
        cells: &[(10, 11), (11, 12), (12, 10), (12, 11), (12, 12)],
    },
    Pattern {
        name: "Blinker",
        key: "blinker",
        cells: &[(80, 84), (80, 85), (80, 86)],
    },
    Pattern {
        name: "Block",
        key: "block",
        cells: &[(80, 85), (80, 86), (81, 85), (81, 86)],
    },
    Pattern {
        name: "R-pentomino",
        key: "r-pentomino",
        cells: &[(79, 85), (79, 86), (80, 84), (80, 85), (81, 85)],
    },
];

/// Look a pattern up by its command-line key or display name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
}

/// Clear the board, then set every pattern cell alive.
///
/// Panics if a coordinate lies outside the board; check [`Pattern::fits`]
/// first when the board size is not the default.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern) {
    board.clear();
    for &(row, col) in pattern.cells {
        board.set(row, col, true);
    }
}
