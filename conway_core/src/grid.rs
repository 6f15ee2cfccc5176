// grid.rs - Board storage for the toroidal Game of Life

/// Fixed-size board of cells, stored row-major in one flat buffer.
///
/// Coordinates passed to [`Board::get`] and [`Board::set`] must already be in
/// range; wraparound is resolved by the caller (see `kernel`). An out-of-range
/// index panics.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<bool>, // index = row * width + col
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            height: self.height,
            width: self.width,
            cells: self.cells.clone(),
        }
    }

    // Reuses the existing allocation; the scheduler snapshots through this
    fn clone_from(&mut self, source: &Self) {
        self.height = source.height;
        self.width = source.width;
        self.cells.clone_from(&source.cells);
    }
}

impl Board {
    /// Create a `height × width` board with every cell dead.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "board must have at least one cell");
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Build a board from rows of `#` (alive) and `.` (dead).
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut board = Self::new(height, width);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "row {row} has the wrong width");
            for (col, byte) in line.bytes().enumerate() {
                board.set(row, col, match byte {
                    b'#' => true,
                    b'.' => false,
                    _    => panic!("rows may only contain '.' or '#'"),
                });
            }
        }
        board
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.height && col < self.width, "cell ({row}, {col}) outside {}x{} board", self.height, self.width);
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Flat mutable view; the scheduler splits this into disjoint row chunks.
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }
}
