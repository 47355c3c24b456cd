//! Stone placement on a possibly unbounded grid.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

use mnk_core::{AxisBounds, Color, CoordinateBounds, Square};

use crate::GameError;

/// Occupied squares for each color, plus the playable bounds.
///
/// The two stone sets never overlap, and every stone lies inside the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Stones indexed by [`Color::index`].
    stones: [HashSet<Square>; 2],
    bounds: CoordinateBounds,
}

impl Board {
    /// Creates an empty board with the given bounds.
    pub fn new(bounds: CoordinateBounds) -> Self {
        Board {
            stones: [HashSet::new(), HashSet::new()],
            bounds,
        }
    }

    /// Returns the playable bounds.
    #[inline]
    pub fn bounds(&self) -> &CoordinateBounds {
        &self.bounds
    }

    /// Places a stone of `color` on an empty in-bounds square.
    pub fn place(&mut self, square: Square, color: Color) -> Result<(), GameError> {
        if !self.bounds.contains(square) {
            return Err(GameError::OutOfBounds(square));
        }
        if self.piece_at(square).is_some() {
            return Err(GameError::Occupied(square));
        }
        self.stones[color.index()].insert(square);
        Ok(())
    }

    /// Removes a stone of `color`, returning whether it was there.
    pub fn remove(&mut self, square: Square, color: Color) -> bool {
        self.stones[color.index()].remove(&square)
    }

    /// Puts back a stone taken off by a capture, skipping the checks.
    pub(crate) fn restore(&mut self, square: Square, color: Color) {
        self.stones[color.index()].insert(square);
    }

    /// Returns true if `square` holds a stone of `color`.
    #[inline]
    pub fn is_occupied(&self, square: Square, color: Color) -> bool {
        self.stones[color.index()].contains(&square)
    }

    /// Returns the color of the stone on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.is_occupied(square, color))
    }

    /// Returns true if `square` is inside the bounds and holds no stone.
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.bounds.contains(square) && self.piece_at(square).is_none()
    }

    /// Returns true if there are no stones on the board.
    pub fn is_empty(&self) -> bool {
        self.stones.iter().all(HashSet::is_empty)
    }

    /// Total number of stones.
    pub fn len(&self) -> usize {
        self.stones.iter().map(HashSet::len).sum()
    }

    /// Returns true if the board is finite and every square holds a stone.
    pub fn is_full(&self) -> bool {
        self.bounds.area() == Some(self.len() as u64)
    }

    /// Iterates over the stones of one color in no particular order.
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.stones[color.index()].iter().copied()
    }

    /// The rectangle worth looking at: finite axes in full, unbounded axes
    /// over the occupied extent widened by `margin` on each side.
    ///
    /// An unbounded axis on an empty board collapses to the coordinate
    /// nearest zero.
    pub fn region(&self, margin: i32) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        let xs = self.axis_region(self.bounds.x, margin, |sq| sq.x);
        let ys = self.axis_region(self.bounds.y, margin, |sq| sq.y);
        (xs, ys)
    }

    fn axis_region(
        &self,
        axis: AxisBounds,
        margin: i32,
        coord: impl Fn(&Square) -> i32,
    ) -> RangeInclusive<i32> {
        if let Some(range) = axis.range() {
            return range;
        }
        let all = self.stones.iter().flat_map(|set| set.iter());
        let lo = all.clone().map(&coord).min();
        let hi = all.map(&coord).max();
        match (lo, hi) {
            (Some(lo), Some(hi)) => {
                axis.clamp(lo.saturating_sub(margin))..=axis.clamp(hi.saturating_add(margin))
            }
            _ => {
                let center = axis.clamp(0);
                center..=center
            }
        }
    }

    /// Squares a stone could go on, top row first and left to right within
    /// a row.
    ///
    /// Finite boards list every empty square. Otherwise only empty squares
    /// within `margin` of some stone are listed, or the in-bounds square
    /// nearest the origin when the board is empty.
    pub fn empty_squares(&self, margin: i32) -> Vec<Square> {
        if self.bounds.is_finite() {
            let (xs, ys) = self.region(margin);
            return ys
                .rev()
                .flat_map(|y| xs.clone().map(move |x| Square::new(x, y)))
                .filter(|&sq| self.is_empty_square(sq))
                .collect();
        }
        if self.is_empty() {
            return vec![Square::new(self.bounds.x.clamp(0), self.bounds.y.clamp(0))];
        }

        let mut ring = HashSet::new();
        for stone in self.stones.iter().flatten() {
            for dy in -margin..=margin {
                for dx in -margin..=margin {
                    if let Some(sq) = stone.offset((dx, dy), 1) {
                        if self.is_empty_square(sq) {
                            ring.insert(sq);
                        }
                    }
                }
            }
        }
        let mut squares: Vec<Square> = ring.into_iter().collect();
        squares.sort_unstable_by_key(|sq| (Reverse(sq.y), sq.x));
        squares
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (xs, ys) = self.region(0);
        for y in ys.rev() {
            for x in xs.clone() {
                let c = match self.piece_at(Square::new(x, y)) {
                    Some(color) => color.to_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_query() {
        let mut b = Board::new(CoordinateBounds::rectangle(4, 4));
        b.place(Square::new(0, 1), Color::X).unwrap();
        b.place(Square::new(1, 1), Color::O).unwrap();
        assert!(b.is_occupied(Square::new(1, 1), Color::O));
        assert!(!b.is_occupied(Square::new(1, 1), Color::X));
        assert_eq!(b.piece_at(Square::new(0, 1)), Some(Color::X));
        assert!(!b.is_empty());
        assert!(b.is_empty_square(Square::new(2, 3)));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn place_rejects_occupied_and_out_of_bounds() {
        let mut b = Board::new(CoordinateBounds::rectangle(3, 3));
        b.place(Square::new(1, 1), Color::X).unwrap();
        assert_eq!(
            b.place(Square::new(1, 1), Color::O),
            Err(GameError::Occupied(Square::new(1, 1)))
        );
        assert_eq!(
            b.place(Square::new(-100, -100), Color::O),
            Err(GameError::OutOfBounds(Square::new(-100, -100)))
        );
        assert!(!b.is_empty_square(Square::new(3, 0)));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn remove_stone() {
        let mut b = Board::new(CoordinateBounds::UNBOUNDED);
        b.place(Square::new(5, -5), Color::O).unwrap();
        assert!(!b.remove(Square::new(5, -5), Color::X));
        assert!(b.remove(Square::new(5, -5), Color::O));
        assert!(b.is_empty());
    }

    #[test]
    fn full_only_on_finite_boards() {
        let mut b = Board::new(CoordinateBounds::rectangle(2, 1));
        b.place(Square::new(0, 0), Color::X).unwrap();
        assert!(!b.is_full());
        b.place(Square::new(1, 0), Color::O).unwrap();
        assert!(b.is_full());

        let mut inf = Board::new(CoordinateBounds::UNBOUNDED);
        inf.place(Square::new(0, 0), Color::X).unwrap();
        assert!(!inf.is_full());
    }

    #[test]
    fn empty_squares_order() {
        let mut b = Board::new(CoordinateBounds::rectangle(2, 2));
        b.place(Square::new(0, 1), Color::X).unwrap();
        assert_eq!(
            b.empty_squares(1),
            vec![Square::new(1, 1), Square::new(0, 0), Square::new(1, 0)]
        );
    }

    #[test]
    fn unbounded_region_tracks_stones() {
        let mut b = Board::new(CoordinateBounds::UNBOUNDED);
        assert_eq!(b.region(1), (0..=0, 0..=0));
        b.place(Square::new(3, -2), Color::X).unwrap();
        b.place(Square::new(5, 0), Color::O).unwrap();
        assert_eq!(b.region(1), (2..=6, -3..=1));
        // Two 3x3 rings sharing (4, -1), less the two stones.
        assert_eq!(b.empty_squares(1).len(), 15);
    }

    #[test]
    fn unbounded_candidates_hug_the_stones() {
        let mut b = Board::new(CoordinateBounds::UNBOUNDED);
        b.place(Square::new(0, 0), Color::X).unwrap();
        b.place(Square::new(2000, 2000), Color::O).unwrap();
        let squares = b.empty_squares(1);
        assert_eq!(squares.len(), 16);
        assert_eq!(squares.first(), Some(&Square::new(1999, 2001)));
        assert_eq!(squares.last(), Some(&Square::new(1, -1)));
        assert!(squares.contains(&Square::new(2001, 1999)));
        assert!(!squares.contains(&Square::new(1000, 1000)));
    }

    #[test]
    fn unbounded_candidates_at_coordinate_range() {
        let mut b = Board::new(CoordinateBounds::UNBOUNDED);
        b.place(Square::new(i32::MAX, i32::MAX), Color::X).unwrap();
        assert_eq!(
            b.empty_squares(1),
            vec![
                Square::new(i32::MAX - 1, i32::MAX),
                Square::new(i32::MAX - 1, i32::MAX - 1),
                Square::new(i32::MAX, i32::MAX - 1),
            ]
        );
    }

    #[test]
    fn half_open_candidates_respect_bound() {
        let bounds = CoordinateBounds::new(AxisBounds::new(Some(0), None), AxisBounds::UNBOUNDED);
        let mut b = Board::new(bounds);
        assert_eq!(b.empty_squares(1), vec![Square::new(0, 0)]);
        b.place(Square::new(0, 0), Color::X).unwrap();
        assert_eq!(b.empty_squares(1).len(), 5);
    }

    #[test]
    fn half_open_region_is_clamped() {
        let bounds = CoordinateBounds::new(AxisBounds::finite(1, 3), AxisBounds::new(Some(1), None));
        let b = Board::new(bounds);
        assert_eq!(b.region(2), (1..=3, 1..=1));
    }

    #[test]
    fn display_renders_top_row_first() {
        let bounds = CoordinateBounds::new(AxisBounds::finite(1, 3), AxisBounds::new(Some(1), None));
        let mut b = Board::new(bounds);
        b.place(Square::new(2, 1), Color::O).unwrap();
        b.place(Square::new(3, 1), Color::X).unwrap();
        b.place(Square::new(2, 2), Color::O).unwrap();
        b.place(Square::new(1, 3), Color::X).unwrap();
        assert_eq!(b.to_string(), "X..\n.O.\n.OX\n");
    }
}
