use std::num::NonZeroUsize;

use conway_core::kernel::{live_neighbors, next_cell};
use conway_core::scheduler::partition;
use conway_core::seed::seed_pattern;
use conway_core::{Board, PATTERNS, StepScheduler, Strategy};
use proptest::prelude::*;

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn advance(board: &mut Board, workers: usize, strategy: Strategy) {
    StepScheduler::new(nz(workers), strategy)
        .unwrap()
        .advance(board)
        .unwrap();
}

/// Single-threaded reference step straight from the kernel.
fn reference_step(board: &Board) -> Board {
    let mut next = Board::new(board.height(), board.width());
    for row in 0..board.height() {
        for col in 0..board.width() {
            next.set(row, col, next_cell(board, row, col));
        }
    }
    next
}

prop_compose! {
    fn arb_board()(height in 1usize..24, width in 1usize..24)
        (cells in proptest::collection::vec(any::<bool>(), height * width), height in Just(height), width in Just(width))
        -> Board
    {
        let mut board = Board::new(height, width);
        board.cells_mut().copy_from_slice(&cells);
        board
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn worker_count_does_not_change_result(
        board in arb_board(),
        t1 in 1usize..9,
        t2 in 1usize..9,
    ) {
        let mut a = board.clone();
        let mut b = board.clone();
        advance(&mut a, t1, Strategy::Scoped);
        advance(&mut b, t2, Strategy::Pool);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &reference_step(&board));
    }

    #[test]
    fn step_is_deterministic(board in arb_board(), workers in 1usize..6) {
        let mut first = board.clone();
        let mut second = board.clone();
        advance(&mut first, workers, Strategy::Scoped);
        advance(&mut second, workers, Strategy::Scoped);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn partition_covers_every_row_once(height in 1usize..500, workers in 1usize..64) {
        let ranges = partition(height, nz(workers));
        prop_assert!(ranges.len() <= workers);
        prop_assert_eq!(ranges.first().map(|r| r.start), Some(0));
        prop_assert_eq!(ranges.last().map(|r| r.end), Some(height));
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert_eq!(pair[0].len(), ranges[0].len());
        }
        prop_assert!(ranges.iter().all(|r| !r.is_empty()));
    }
}

#[test]
fn dead_board_stays_dead() {
    for workers in [1, 3, 16] {
        let mut board = Board::new(31, 17);
        advance(&mut board, workers, Strategy::Scoped);
        assert!(board.is_empty());
    }
}

#[test]
fn single_cell_at_origin_is_seen_across_both_edges() {
    let (h, w) = (9, 11);
    let mut board = Board::new(h, w);
    board.set(0, 0, true);
    for (row, col) in [(h - 1, w - 1), (h - 1, 0), (0, w - 1), (1, 1)] {
        assert_eq!(live_neighbors(&board, row, col), 1, "({row}, {col})");
    }
}

#[test]
fn block_is_still_life() {
    let mut board = Board::from_rows(&["......", "......", "..##..", "..##..", "......", "......"]);
    let block = board.clone();
    let mut scheduler = StepScheduler::new(nz(4), Strategy::Scoped).unwrap();
    for _ in 0..10 {
        scheduler.advance(&mut board).unwrap();
        assert_eq!(board, block);
    }
}

#[test]
fn block_straddling_the_corner_is_still_life() {
    let mut board = Board::from_rows(&["#...#", ".....", ".....", "#...#"]);
    let block = board.clone();
    advance(&mut board, 2, Strategy::Pool);
    assert_eq!(board, block);
}

#[test]
fn blinker_flips_between_orientations() {
    let horizontal = Board::from_rows(&["......", "......", ".###..", "......", "......", "......"]);
    let vertical = Board::from_rows(&["......", "..#...", "..#...", "..#...", "......", "......"]);

    let mut board = horizontal.clone();
    let mut scheduler = StepScheduler::new(nz(3), Strategy::Scoped).unwrap();
    scheduler.advance(&mut board).unwrap();
    assert_eq!(board, vertical);
    scheduler.advance(&mut board).unwrap();
    assert_eq!(board, horizontal);
}

#[test]
fn glider_wraps_around_the_torus() {
    let start = Board::from_rows(&[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    let mut board = start.clone();
    let mut scheduler = StepScheduler::new(nz(3), Strategy::Pool).unwrap();

    for _ in 0..4 {
        scheduler.advance(&mut board).unwrap();
    }
    let shifted: Vec<_> = start.alive().map(|(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(board.alive().collect::<Vec<_>>(), shifted);

    // 8 diagonal moves bring it back to where it started
    for _ in 4..32 {
        scheduler.advance(&mut board).unwrap();
    }
    assert_eq!(board, start);
}

#[test]
fn pattern_placement_is_exact() {
    for pattern in PATTERNS {
        let mut board = Board::new(160, 170);
        board.cells_mut().fill(true);
        seed_pattern(&mut board, pattern);

        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(
                    board.get(row, col),
                    pattern.cells.contains(&(row, col)),
                    "{} at ({row}, {col})",
                    pattern.name
                );
            }
        }
    }
}

#[test]
fn more_workers_than_rows() {
    let mut board = Board::from_rows(&[".....", "#####", "....."]);
    let expected = reference_step(&board);
    advance(&mut board, 12, Strategy::Scoped);
    assert_eq!(board, expected);
}
