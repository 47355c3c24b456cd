//! Core types for m,n,k games.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] for players and stones
//! - [`Square`], [`AxisBounds`] and [`CoordinateBounds`] for grid coordinates
//! - Position notation parsing and serialization

mod color;
pub mod notation;
mod square;

pub use color::Color;
pub use notation::{encode_row, NotationError, NotationParser};
pub use square::{AxisBounds, CoordinateBounds, Square};
