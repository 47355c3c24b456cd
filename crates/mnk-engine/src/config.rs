//! Game configuration.
//!
//! A [`GameConfig`] fixes the board shape, the line length and the rule
//! variant. Configurations can be built from presets in code or loaded from
//! TOML files:
//!
//! ```toml
//! width = 19
//! height = 19
//! k = 5
//!
//! [variant]
//! kind = "pente"
//! max_captures = 5
//! ```

use std::path::Path;

use mnk_core::{Color, CoordinateBounds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::Variant;

/// Errors that can occur when loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configuration describes an impossible game.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Board shape and rules for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant.
    #[serde(default)]
    pub variant: Variant,
    /// Number of columns (m). Also written in the minimal notation of
    /// unbounded boards.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Number of rows (n).
    #[serde(default = "default_height")]
    pub height: u32,
    /// Stones in a row needed to complete a line.
    #[serde(default = "default_k")]
    pub k: u32,
    /// Ignore `width` and `height` and play on an unbounded grid.
    #[serde(default)]
    pub infinite: bool,
    /// Player who makes the first move.
    #[serde(default = "default_first")]
    pub first: Color,
}

fn default_width() -> u32 {
    3
}

fn default_height() -> u32 {
    3
}

fn default_k() -> u32 {
    3
}

fn default_first() -> Color {
    Color::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::tic_tac_toe(3, 3, 3, false)
    }
}

impl GameConfig {
    /// Generalized tic-tac-toe on an `m` by `n` board.
    pub const fn tic_tac_toe(m: u32, n: u32, k: u32, infinite: bool) -> Self {
        GameConfig {
            variant: Variant::TicTacToe,
            width: m,
            height: n,
            k,
            infinite,
            first: Color::X,
        }
    }

    /// Gomoku on the usual 15x15 board.
    pub const fn gomoku() -> Self {
        Self::tic_tac_toe(15, 15, 5, false).with_variant(Variant::Gomoku)
    }

    /// Pente on a 19x19 board, five in a row or five captured pairs.
    pub const fn pente() -> Self {
        Self::tic_tac_toe(19, 19, 5, false).with_variant(Variant::PENTE)
    }

    /// Connect6 on a 19x19 board.
    pub const fn connect6() -> Self {
        Self::tic_tac_toe(19, 19, 6, false).with_variant(Variant::CONNECT6)
    }

    /// Wild tic-tac-toe on the classic board.
    pub const fn wild() -> Self {
        Self::tic_tac_toe(3, 3, 3, false).with_variant(Variant::Wild)
    }

    /// Impartial tic-tac-toe on the classic board.
    pub const fn impartial() -> Self {
        Self::tic_tac_toe(3, 3, 3, false).with_variant(Variant::Impartial)
    }

    /// Misere tic-tac-toe on the classic board.
    pub const fn misere() -> Self {
        Self::tic_tac_toe(3, 3, 3, false).with_variant(Variant::Misere)
    }

    /// Order and Chaos on its 6x6 board, X playing Order.
    pub const fn order_and_chaos() -> Self {
        Self::tic_tac_toe(6, 6, 5, false).with_variant(Variant::ORDER_AND_CHAOS)
    }

    /// Replaces the variant.
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Replaces the first player.
    pub const fn with_first(mut self, first: Color) -> Self {
        self.first = first;
        self
    }

    /// Bounds of the playing area.
    pub const fn bounds(&self) -> CoordinateBounds {
        if self.infinite {
            CoordinateBounds::UNBOUNDED
        } else {
            CoordinateBounds::rectangle(self.width, self.height)
        }
    }

    /// Checks that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k == 0 {
            return Err(ConfigError::Invalid("k must be at least 1".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(ConfigError::Invalid(format!(
                "board {}x{} does not fit the coordinate range",
                self.width, self.height
            )));
        }
        match self.variant {
            Variant::Connect6 {
                stones_per_move,
                opening_stones,
            } if stones_per_move == 0 || opening_stones == 0 => {
                return Err(ConfigError::Invalid(
                    "Connect6 moves must place at least one stone".to_string(),
                ));
            }
            Variant::Pente { max_captures: 0 } => {
                return Err(ConfigError::Invalid(
                    "Pente needs a capture limit of at least 1".to_string(),
                ));
            }
            _ => {}
        }
        if self.infinite && self.variant.requires_finite_board() {
            return Err(ConfigError::Invalid(format!(
                "{} needs a finite board",
                self.variant
            )));
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::Invalid`] if the game it describes cannot be played.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
