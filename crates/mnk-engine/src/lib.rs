//! Generalized m,n,k-in-a-row game engine.
//!
//! This crate provides:
//! - [`Board`] - stone sets on a bounded or unbounded grid
//! - [`Game`] - turn order, atomic move commits, undo and result tracking
//! - [`Variant`] - tic-tac-toe, Gomoku, Pente, Connect6, Wild, Impartial,
//!   Misere and Order-and-Chaos rules
//! - [`GameConfig`] - board shape and rules, loadable from TOML
//! - Position notation decoding and encoding
//!
//! # Example
//!
//! ```
//! use mnk_engine::{Game, GameConfig, GameResult};
//!
//! let mut game = Game::new(GameConfig::tic_tac_toe(3, 3, 3, false)).unwrap();
//! game.play(0, 0).unwrap();
//! game.play(0, 1).unwrap();
//! game.play(1, 1).unwrap();
//! game.play(0, 2).unwrap();
//! game.play(2, 2).unwrap();
//! assert_eq!(game.result(), Some(GameResult::XWins));
//! println!("{}", game);
//! ```

mod board;
pub mod config;
mod error;
mod game;
pub mod line;
pub mod rules;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use game::{Game, MoveGroup, Placement, LEGAL_MOVE_MARGIN};
pub use rules::{GameResult, Termination, Variant};

pub use mnk_core::{AxisBounds, Color, CoordinateBounds, NotationError, Square};
