//! Board squares and coordinate bounds.

use std::fmt;
use std::ops::RangeInclusive;

/// A square on the grid, addressed by integer coordinates.
///
/// `x` grows to the right and `y` grows upwards. A square carries no
/// implicit bound; whether it is playable is decided by [`CoordinateBounds`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// Creates a square from its coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Square { x, y }
    }

    /// Returns the square `steps` units away along `(dx, dy)`, or `None` if
    /// it falls outside the `i32` coordinate range.
    #[inline]
    pub const fn offset(self, (dx, dy): (i32, i32), steps: i32) -> Option<Self> {
        let (Some(sx), Some(sy)) = (dx.checked_mul(steps), dy.checked_mul(steps)) else {
            return None;
        };
        match (self.x.checked_add(sx), self.y.checked_add(sy)) {
            (Some(x), Some(y)) => Some(Square { x, y }),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Square::new(x, y)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Optional lower and upper limit along one axis, both inclusive.
///
/// `None` on a side means the axis is unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisBounds {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl AxisBounds {
    /// An axis with no limit on either side.
    pub const UNBOUNDED: AxisBounds = AxisBounds {
        min: None,
        max: None,
    };

    /// Creates axis bounds from optional limits.
    #[inline]
    pub const fn new(min: Option<i32>, max: Option<i32>) -> Self {
        AxisBounds { min, max }
    }

    /// An axis limited to `min..=max`.
    #[inline]
    pub const fn finite(min: i32, max: i32) -> Self {
        AxisBounds {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns true if `t` lies within the limits.
    #[inline]
    pub const fn contains(self, t: i32) -> bool {
        if let Some(min) = self.min {
            if t < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if t > max {
                return false;
            }
        }
        true
    }

    /// Returns the closed range when both limits are present.
    pub fn range(self) -> Option<RangeInclusive<i32>> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(min..=max),
            _ => None,
        }
    }

    /// Clamps `t` into the limits that exist.
    pub fn clamp(self, t: i32) -> i32 {
        let t = self.min.map_or(t, |min| t.max(min));
        self.max.map_or(t, |max| t.min(max))
    }

    /// Number of coordinates on a finite axis.
    pub fn len(self) -> Option<u64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if max >= min => Some((max as i64 - min as i64 + 1) as u64),
            (Some(_), Some(_)) => Some(0),
            _ => None,
        }
    }

    /// Returns true if both limits are present.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

/// Playable region of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoordinateBounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl CoordinateBounds {
    /// Bounds that admit every square.
    pub const UNBOUNDED: CoordinateBounds = CoordinateBounds {
        x: AxisBounds::UNBOUNDED,
        y: AxisBounds::UNBOUNDED,
    };

    /// Creates bounds from per-axis limits.
    #[inline]
    pub const fn new(x: AxisBounds, y: AxisBounds) -> Self {
        CoordinateBounds { x, y }
    }

    /// A `width` by `height` rectangle with its lower-left corner at the origin.
    pub const fn rectangle(width: u32, height: u32) -> Self {
        CoordinateBounds {
            x: AxisBounds::finite(0, width as i32 - 1),
            y: AxisBounds::finite(0, height as i32 - 1),
        }
    }

    /// Returns true if the square lies inside the bounds.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        self.x.contains(square.x) && self.y.contains(square.y)
    }

    /// Returns true if both axes are limited on both sides.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Number of squares inside finite bounds.
    pub fn area(&self) -> Option<u64> {
        Some(self.x.len()? * self.y.len()?)
    }
}
