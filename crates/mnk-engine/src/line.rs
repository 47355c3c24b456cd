//! Line scanning for k-in-a-row detection.
//!
//! A line through a square is found by walking outwards in both directions
//! along each axis while the stones keep the same color. Only lines through
//! a freshly placed stone can be new, so the engine scans from the squares
//! of the last move rather than the whole board.

use mnk_core::{Color, Square};

use crate::Board;

/// The four undirected line axes: horizontal, vertical and both diagonals.
pub const LINE_AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Length of the contiguous run of `color` through `anchor` along `axis`.
///
/// The anchor itself counts whether or not it holds a stone, which lets
/// callers ask "what if a stone went here". The walk stops at the first
/// square that is out of bounds or not held by `color`, and at the edge of
/// the `i32` coordinate range.
pub fn run_length(board: &Board, anchor: Square, color: Color, axis: (i32, i32)) -> usize {
    let mut run = 1;
    for sign in [1, -1] {
        let mut step = 1;
        while let Some(sq) = anchor.offset(axis, sign * step) {
            if !board.bounds().contains(sq) || !board.is_occupied(sq, color) {
                break;
            }
            run += 1;
            step += 1;
        }
    }
    run
}

/// Longest run of `color` through `anchor` over all axes.
pub fn longest_run(board: &Board, anchor: Square, color: Color) -> usize {
    LINE_AXES
        .iter()
        .map(|&axis| run_length(board, anchor, color, axis))
        .max()
        .unwrap_or(1)
}

/// Returns true if a run of at least `k` stones of `color` passes through `anchor`.
pub fn completes_line(board: &Board, anchor: Square, color: Color, k: usize) -> bool {
    LINE_AXES
        .iter()
        .any(|&axis| run_length(board, anchor, color, axis) >= k)
}

/// Returns true if any stone of `color` on the board is part of a `k`-line.
///
/// This is the slow whole-board scan, used when a position arrives without
/// history and there is no last move to scan from.
pub fn has_line(board: &Board, color: Color, k: usize) -> bool {
    board
        .stones(color)
        .any(|sq| completes_line(board, sq, color, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_core::CoordinateBounds;

    fn board_with(stones: &[(i32, i32, Color)]) -> Board {
        let mut board = Board::new(CoordinateBounds::UNBOUNDED);
        for &(x, y, color) in stones {
            board.place(Square::new(x, y), color).unwrap();
        }
        board
    }

    #[test]
    fn horizontal_run() {
        let board = board_with(&[(0, 0, Color::X), (1, 0, Color::X), (2, 0, Color::X)]);
        assert_eq!(run_length(&board, Square::new(1, 0), Color::X, (1, 0)), 3);
        assert_eq!(run_length(&board, Square::new(1, 0), Color::X, (0, 1)), 1);
        assert!(completes_line(&board, Square::new(0, 0), Color::X, 3));
        assert!(!completes_line(&board, Square::new(0, 0), Color::X, 4));
    }

    #[test]
    fn anti_diagonal_run() {
        let board = board_with(&[(0, 2, Color::O), (1, 1, Color::O), (2, 0, Color::O)]);
        assert_eq!(longest_run(&board, Square::new(1, 1), Color::O), 3);
        assert!(has_line(&board, Color::O, 3));
        assert!(!has_line(&board, Color::X, 1));
    }

    #[test]
    fn opponent_stone_breaks_run() {
        let board = board_with(&[
            (0, 0, Color::X),
            (1, 1, Color::O),
            (2, 2, Color::X),
            (3, 3, Color::X),
        ]);
        assert_eq!(run_length(&board, Square::new(2, 2), Color::X, (1, 1)), 2);
    }

    #[test]
    fn runs_far_from_origin() {
        let stones: Vec<_> = (0..5).map(|i| (1_000 + i, -7, Color::X)).collect();
        let board = board_with(&stones);
        assert!(completes_line(&board, Square::new(1_002, -7), Color::X, 5));
    }

    #[test]
    fn runs_stop_at_coordinate_range() {
        let board = board_with(&[
            (i32::MAX, 0, Color::X),
            (i32::MAX - 1, 0, Color::X),
            (i32::MAX, i32::MIN, Color::O),
        ]);
        assert_eq!(run_length(&board, Square::new(i32::MAX, 0), Color::X, (1, 0)), 2);
        assert_eq!(longest_run(&board, Square::new(i32::MAX, i32::MIN), Color::O), 1);
        assert!(!has_line(&board, Color::X, 3));
    }

    #[test]
    fn empty_anchor_counts_itself() {
        let board = board_with(&[(0, 0, Color::X), (2, 0, Color::X)]);
        assert_eq!(run_length(&board, Square::new(1, 0), Color::X, (1, 0)), 3);
    }
}
