// kernel.rs - B3/S23 update rule on a toroidal board

use crate::grid::Board;

/// Neighbor offsets as (row, col) deltas.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1),
];

#[inline]
fn wrap(pos: usize, delta: isize, extent: usize) -> usize {
    // delta is -1, 0 or 1; adding `extent - 1` avoids underflow at 0
    match delta {
        -1 => (pos + extent - 1) % extent,
        0  => pos,
        _  => (pos + 1) % extent,
    }
}

/// Number of live cells among the 8 wrapped neighbors of `(row, col)`.
pub fn live_neighbors(snapshot: &Board, row: usize, col: usize) -> u8 {
    let (height, width) = (snapshot.height(), snapshot.width());
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| snapshot.get(wrap(row, dr, height), wrap(col, dc, width)))
        .count() as u8
}

/// Next-generation state of `(row, col)`, computed from the snapshot only.
pub fn next_cell(snapshot: &Board, row: usize, col: usize) -> bool {
    let count = live_neighbors(snapshot, row, col);
    match (snapshot.get(row, col), count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Worker body: fill `out`, a row-aligned slice of the live board beginning
/// at `first_row`, with the next generation of those rows.
pub fn update_rows(snapshot: &Board, first_row: usize, out: &mut [bool]) {
    let width = snapshot.width();
    debug_assert_eq!(out.len() % width, 0, "chunk must hold whole rows");
    for (offset, row_out) in out.chunks_mut(width).enumerate() {
        let row = first_row + offset;
        for (col, cell) in row_out.iter_mut().enumerate() {
            *cell = next_cell(snapshot, row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_sees_wrapped_neighbors() {
        let mut board = Board::new(5, 6);
        board.set(0, 0, true);
        // Each of these neighbors of (0,0) is only reachable through the wrap
        assert_eq!(live_neighbors(&board, 4, 5), 1);
        assert_eq!(live_neighbors(&board, 4, 0), 1);
        assert_eq!(live_neighbors(&board, 0, 5), 1);
        assert_eq!(live_neighbors(&board, 2, 2), 0);
    }

    #[test]
    fn counts_all_eight() {
        let board = Board::from_rows(&["###", "#.#", "###"]);
        assert_eq!(live_neighbors(&board, 1, 1), 8);
    }

    #[test]
    fn rules() {
        // lone cell dies of underpopulation
        let lone = Board::from_rows(&[".....", ".....", "..#..", ".....", "....."]);
        assert!(!next_cell(&lone, 2, 2));

        // dead cell with three neighbors is born
        let birth = Board::from_rows(&[".....", ".#.#.", ".....", "..#..", "....."]);
        assert!(next_cell(&birth, 2, 2));

        // live cell with two neighbors survives
        let survive = Board::from_rows(&[".....", ".#...", "..#..", "...#.", "....."]);
        assert!(next_cell(&survive, 2, 2));

        // live cell with four neighbors dies of overcrowding
        let crowded = Board::from_rows(&[".....", ".#.#.", "..#..", ".#.#.", "....."]);
        assert!(!next_cell(&crowded, 2, 2));

        // dead cell with two neighbors stays dead
        let quiet = Board::from_rows(&[".....", ".#.#.", ".....", ".....", "....."]);
        assert!(!next_cell(&quiet, 2, 2));
    }

    #[test]
    fn update_rows_writes_only_its_chunk() {
        let snapshot = Board::from_rows(&[".....", ".....", ".###.", ".....", "....."]);
        let mut out = vec![true; 2 * 5];
        update_rows(&snapshot, 1, &mut out);
        // rows 1 and 2 of a blinker turning vertical
        assert_eq!(&out[..5], &[false, false, true, false, false]);
        assert_eq!(&out[5..], &[false, false, true, false, false]);
    }
}
