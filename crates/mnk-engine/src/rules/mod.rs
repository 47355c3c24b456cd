//! Rule variants layered over the k-in-a-row engine.
//!
//! Every variant shares the same board, move commit and line scan. A
//! [`Variant`] only answers the questions where the rules differ: which
//! piece a player may place, how many stones make up a move, what a
//! completed line means, and what a full board means.

pub mod pente;

use std::fmt;

use mnk_core::Color;
use serde::{Deserialize, Serialize};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The first player (X) wins.
    XWins,
    /// The second player (O) wins.
    OWins,
    /// Neither side wins.
    Draw,
}

impl GameResult {
    /// A win for `color`.
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::X => GameResult::XWins,
            Color::O => GameResult::OWins,
        }
    }

    /// The winning color, or `None` for a draw.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::XWins => Some(Color::X),
            GameResult::OWins => Some(Color::O),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::XWins => write!(f, "X wins"),
            GameResult::OWins => write!(f, "O wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A k-in-a-row was completed.
    Line,
    /// A player reached the capture limit (Pente).
    Captures,
    /// A finite board ran out of room for the next move without a line.
    BoardFull,
}

/// The piece every player places in Impartial tic-tac-toe.
pub const IMPARTIAL_PIECE: Color = Color::X;

/// The closed set of supported rule variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    /// Generalized m,n,k tic-tac-toe.
    #[default]
    TicTacToe,
    /// Tic-tac-toe rules on a large board.
    Gomoku,
    /// Flank captures with a second, capture-count win condition.
    Pente {
        #[serde(default = "default_max_captures")]
        max_captures: u32,
    },
    /// Several stones per move after a shorter opening move.
    Connect6 {
        #[serde(default = "default_stones_per_move")]
        stones_per_move: u32,
        #[serde(default = "default_opening_stones")]
        opening_stones: u32,
    },
    /// Either player may place either piece.
    Wild,
    /// Both players place the same piece.
    Impartial,
    /// Completing a line loses.
    Misere,
    /// `order` wants a line of either piece, the other player wants a full board.
    OrderAndChaos {
        #[serde(default = "default_order")]
        order: Color,
    },
}

fn default_max_captures() -> u32 {
    5
}

fn default_stones_per_move() -> u32 {
    2
}

fn default_opening_stones() -> u32 {
    1
}

fn default_order() -> Color {
    Color::X
}

impl Variant {
    /// Standard Pente: five captured pairs win.
    pub const PENTE: Variant = Variant::Pente { max_captures: 5 };
    /// Standard Connect6: one opening stone, then two per move.
    pub const CONNECT6: Variant = Variant::Connect6 {
        stones_per_move: 2,
        opening_stones: 1,
    };
    /// Order-and-Chaos with X playing Order.
    pub const ORDER_AND_CHAOS: Variant = Variant::OrderAndChaos { order: Color::X };

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::TicTacToe => "Tic-tac-toe",
            Variant::Gomoku => "Gomoku",
            Variant::Pente { .. } => "Pente",
            Variant::Connect6 { .. } => "Connect6",
            Variant::Wild => "Wild tic-tac-toe",
            Variant::Impartial => "Impartial tic-tac-toe",
            Variant::Misere => "Misere tic-tac-toe",
            Variant::OrderAndChaos { .. } => "Order and Chaos",
        }
    }

    /// Number of stones in the next move group, given how many groups were played.
    pub fn stones_to_place(self, groups_played: usize) -> usize {
        match self {
            Variant::Connect6 {
                stones_per_move,
                opening_stones,
            } => {
                if groups_played == 0 {
                    opening_stones as usize
                } else {
                    stones_per_move as usize
                }
            }
            _ => 1,
        }
    }

    /// The piece `player` places when none is named.
    pub const fn default_piece(self, player: Color) -> Color {
        match self {
            Variant::Impartial => IMPARTIAL_PIECE,
            _ => player,
        }
    }

    /// Returns true if `player` may place `piece`.
    pub fn may_place(self, player: Color, piece: Color) -> bool {
        match self {
            Variant::Wild | Variant::OrderAndChaos { .. } => true,
            Variant::Impartial => piece == IMPARTIAL_PIECE,
            _ => piece == player,
        }
    }

    /// Returns true if each piece type belongs to exactly one player.
    ///
    /// When it does, whoever owns a line's pieces completed it. Otherwise
    /// only move order tells who completed it.
    pub const fn pieces_owned(self) -> bool {
        !matches!(
            self,
            Variant::Wild | Variant::Impartial | Variant::OrderAndChaos { .. }
        )
    }

    /// Outcome when `completer` finishes a line.
    pub const fn line_result(self, completer: Color) -> GameResult {
        match self {
            Variant::Misere => GameResult::win_for(completer.opposite()),
            Variant::OrderAndChaos { order } => GameResult::win_for(order),
            _ => GameResult::win_for(completer),
        }
    }

    /// Outcome when a finite board fills up with no line on it.
    pub const fn full_board_result(self) -> GameResult {
        match self {
            Variant::OrderAndChaos { order } => GameResult::win_for(order.opposite()),
            _ => GameResult::Draw,
        }
    }

    /// Capture limit for variants with the capture rule.
    pub const fn max_captures(self) -> Option<u32> {
        match self {
            Variant::Pente { max_captures } => Some(max_captures),
            _ => None,
        }
    }

    /// Returns true if the variant is only meaningful on a finite board.
    pub const fn requires_finite_board(self) -> bool {
        matches!(self, Variant::OrderAndChaos { .. })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant() {
        assert_eq!(Variant::default(), Variant::TicTacToe);
        let parsed: Variant = toml::from_str("kind = \"tic_tac_toe\"").unwrap();
        assert_eq!(parsed, Variant::default());
    }

    #[test]
    fn result_winner() {
        assert_eq!(GameResult::win_for(Color::O), GameResult::OWins);
        assert_eq!(GameResult::XWins.winner(), Some(Color::X));
        assert_eq!(GameResult::Draw.winner(), None);
        assert_eq!(GameResult::Draw.to_string(), "draw");
    }

    #[test]
    fn connect6_group_sizes() {
        assert_eq!(Variant::CONNECT6.stones_to_place(0), 1);
        assert_eq!(Variant::CONNECT6.stones_to_place(1), 2);
        assert_eq!(Variant::CONNECT6.stones_to_place(40), 2);
        assert_eq!(Variant::Gomoku.stones_to_place(0), 1);
    }

    #[test]
    fn piece_permissions() {
        assert!(Variant::TicTacToe.may_place(Color::X, Color::X));
        assert!(!Variant::TicTacToe.may_place(Color::X, Color::O));
        assert!(Variant::Wild.may_place(Color::X, Color::O));
        assert!(Variant::ORDER_AND_CHAOS.may_place(Color::O, Color::X));
        assert!(Variant::Impartial.may_place(Color::O, Color::X));
        assert!(!Variant::Impartial.may_place(Color::O, Color::O));
        assert_eq!(Variant::Impartial.default_piece(Color::O), Color::X);
    }

    #[test]
    fn line_semantics() {
        assert_eq!(Variant::Gomoku.line_result(Color::O), GameResult::OWins);
        assert_eq!(Variant::Misere.line_result(Color::O), GameResult::XWins);
        assert_eq!(
            Variant::OrderAndChaos { order: Color::O }.line_result(Color::X),
            GameResult::OWins
        );
    }

    #[test]
    fn full_board_semantics() {
        assert_eq!(Variant::TicTacToe.full_board_result(), GameResult::Draw);
        assert_eq!(
            Variant::ORDER_AND_CHAOS.full_board_result(),
            GameResult::OWins
        );
    }

    #[test]
    fn ownership() {
        assert!(Variant::PENTE.pieces_owned());
        assert!(Variant::Misere.pieces_owned());
        assert!(!Variant::Wild.pieces_owned());
        assert!(!Variant::Impartial.pieces_owned());
    }
}
