//! Errors raised by the board and game state machine.

use mnk_core::{Color, NotationError, Square};
use thiserror::Error;

/// Error type for game operations.
///
/// Every variant is raised before any state is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The square lies outside the board's bounds.
    #[error("illegal move: {0} is out of bounds")]
    OutOfBounds(Square),
    /// The square already holds a stone.
    #[error("illegal move: {0} is occupied")]
    Occupied(Square),
    /// The player to move may not place this piece in the current variant.
    #[error("illegal move: {player} may not place {piece}")]
    WrongPiece { player: Color, piece: Color },
    /// A move group has the wrong number of stones.
    #[error("illegal move: expected {expected} stones, got {got}")]
    WrongStoneCount { expected: usize, got: usize },
    /// A move group names the same square twice.
    #[error("illegal move: {0} appears twice in one move")]
    DuplicateSquare(Square),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// The move would push the fullmove number past `u32::MAX`.
    #[error("fullmove number cannot go past 4294967295")]
    FullmoveOverflow,
    /// `pop` was called with no moves in the history.
    #[error("no move to undo")]
    EmptyHistory,
    /// A notation string could not be applied.
    #[error("invalid notation: {0}")]
    Notation(#[from] NotationError),
}
