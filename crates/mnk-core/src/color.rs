//! Player and piece color representation.

use serde::{Deserialize, Serialize};

/// The two sides of an m,n,k game.
///
/// A color names both a player and the stone type that player normally
/// places. Variants such as Impartial or Order-and-Chaos let the two drift
/// apart, in which case the engine tracks them separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    X = 0,
    O = 1,
}

impl Color {
    /// Both colors, first player first.
    pub const ALL: [Color; 2] = [Color::X, Color::O];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::X => Color::O,
            Color::O => Color::X,
        }
    }

    /// Returns the index (0 for X, 1 for O).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the notation character for this color.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::X => 'X',
            Color::O => 'O',
        }
    }

    /// Parses a notation character ('X' or 'O', case-insensitive).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Color::X),
            'O' => Some(Color::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
