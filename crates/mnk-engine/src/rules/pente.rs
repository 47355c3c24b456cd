//! Pente flank captures.
//!
//! A stone placed so that exactly two opponent stones sit between it and
//! another friendly stone on a straight line captures that pair.

use mnk_core::{Color, Square};

use crate::Board;

/// All eight directions a capture can run in.
pub const CAPTURE_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Opponent stones captured by a `color` stone standing on `square`.
///
/// The result holds whole pairs, nearest stone first, in
/// [`CAPTURE_DIRECTIONS`] order. The board is not modified.
pub fn find_captures(board: &Board, square: Square, color: Color) -> Vec<Square> {
    let opponent = color.opposite();
    let mut captured = Vec::new();
    for dir in CAPTURE_DIRECTIONS {
        let (Some(first), Some(second), Some(anchor)) = (
            square.offset(dir, 1),
            square.offset(dir, 2),
            square.offset(dir, 3),
        ) else {
            continue;
        };
        if board.is_occupied(first, opponent)
            && board.is_occupied(second, opponent)
            && board.is_occupied(anchor, color)
        {
            captured.push(first);
            captured.push(second);
        }
    }
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_core::CoordinateBounds;

    fn board_with(stones: &[(i32, i32, Color)]) -> Board {
        let mut board = Board::new(CoordinateBounds::rectangle(10, 10));
        for &(x, y, color) in stones {
            board.place(Square::new(x, y), color).unwrap();
        }
        board
    }

    #[test]
    fn diagonal_capture() {
        let board = board_with(&[
            (1, 1, Color::X),
            (2, 2, Color::O),
            (3, 3, Color::O),
            (4, 4, Color::X),
        ]);
        assert_eq!(
            find_captures(&board, Square::new(4, 4), Color::X),
            vec![Square::new(3, 3), Square::new(2, 2)]
        );
    }

    #[test]
    fn single_stone_is_not_captured() {
        let board = board_with(&[(1, 1, Color::X), (2, 1, Color::O), (3, 1, Color::X)]);
        assert!(find_captures(&board, Square::new(3, 1), Color::X).is_empty());
    }

    #[test]
    fn three_stones_are_not_captured() {
        let board = board_with(&[
            (0, 0, Color::X),
            (1, 0, Color::O),
            (2, 0, Color::O),
            (3, 0, Color::O),
            (4, 0, Color::X),
        ]);
        assert!(find_captures(&board, Square::new(4, 0), Color::X).is_empty());
    }

    #[test]
    fn double_capture() {
        let board = board_with(&[
            (0, 5, Color::X),
            (1, 5, Color::O),
            (2, 5, Color::O),
            (3, 5, Color::X),
            (4, 5, Color::O),
            (5, 5, Color::O),
            (6, 5, Color::X),
        ]);
        let captured = find_captures(&board, Square::new(3, 5), Color::X);
        assert_eq!(captured.len(), 4);
        assert!(captured.contains(&Square::new(1, 5)));
        assert!(captured.contains(&Square::new(5, 5)));
    }

    #[test]
    fn own_stones_between_do_nothing() {
        let board = board_with(&[
            (0, 0, Color::X),
            (0, 1, Color::X),
            (0, 2, Color::X),
            (0, 3, Color::X),
        ]);
        assert!(find_captures(&board, Square::new(0, 3), Color::X).is_empty());
    }

    #[test]
    fn capture_at_edge_of_coordinate_range() {
        let mut board = Board::new(CoordinateBounds::UNBOUNDED);
        let edge = i32::MAX;
        board.place(Square::new(edge, 0), Color::X).unwrap();
        board.place(Square::new(edge - 1, 0), Color::O).unwrap();
        board.place(Square::new(edge - 2, 0), Color::O).unwrap();
        board.place(Square::new(edge - 3, 0), Color::X).unwrap();
        assert_eq!(
            find_captures(&board, Square::new(edge, 0), Color::X),
            vec![Square::new(edge - 1, 0), Square::new(edge - 2, 0)]
        );
    }
}
