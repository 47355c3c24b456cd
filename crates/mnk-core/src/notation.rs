//! Position notation parsing and serialization.
//!
//! A position is written on one line as `<rows> <side-to-move> <fullmove>`.
//! Rows run from the top of the board to the bottom and are separated by
//! `/`. Inside a row, `X` and `O` mark stones and decimal numbers count
//! consecutive empty squares, so `"XO2/4 O 3"` is a 4x2 board with two
//! stones on the top row, O to move, fullmove 3.

use crate::Color;
use thiserror::Error;

/// Row separator.
pub const ROW_DELIMITER: char = '/';

/// Errors that can occur when parsing or applying notation strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid notation: expected 3 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid rows: {0}")]
    InvalidRows(String),

    #[error("invalid side to move: expected 'X' or 'O', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),

    #[error("expected {expected} rows, got {got}")]
    RowCountMismatch { expected: usize, got: usize },

    #[error("expected rows of {expected} squares, got {got}")]
    RowWidthMismatch { expected: usize, got: usize },

    #[error("positions on an unbounded board can only be written for an empty board")]
    UnboundedPosition,

    #[error("board has no finite width and height")]
    MissingDimensions,
}

/// Parsed notation data.
///
/// The parser only checks syntax: the alphabet, that all rows have the same
/// width, and the two trailing fields. Matching the rows against a concrete
/// board is left to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationParser {
    /// Row strings, top row first.
    pub rows: Vec<String>,
    /// Player to move.
    pub side_to_move: Color,
    /// Fullmove number (starts at 1).
    pub fullmove_number: u32,
}

impl NotationParser {
    /// Parses a notation string.
    pub fn parse(notation: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = notation.split_whitespace().collect();

        if parts.len() != 3 {
            return Err(NotationError::InvalidPartCount(parts.len()));
        }

        let rows: Vec<String> = parts[0].split(ROW_DELIMITER).map(str::to_string).collect();
        let mut width = None;
        for (i, row) in rows.iter().enumerate() {
            let w = row_width(row)
                .map_err(|e| NotationError::InvalidRows(format!("row {}: {}", i + 1, e)))?;
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(NotationError::InvalidRows(format!(
                        "row {} has {} squares, expected {}",
                        i + 1,
                        w,
                        expected
                    )));
                }
                Some(_) => {}
            }
        }

        let side_to_move = match parts[1] {
            "X" => Color::X,
            "O" => Color::O,
            other => return Err(NotationError::InvalidSideToMove(other.to_string())),
        };

        let fullmove_number = parts[2]
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| NotationError::InvalidFullmoveNumber(parts[2].to_string()))?;

        Ok(NotationParser {
            rows,
            side_to_move,
            fullmove_number,
        })
    }

    /// Number of squares per row.
    pub fn width(&self) -> usize {
        // Every row was validated to the same non-zero width.
        self.rows.first().and_then(|r| row_width(r).ok()).unwrap_or(0)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no row contains a stone.
    pub fn is_empty_board(&self) -> bool {
        self.rows
            .iter()
            .all(|r| r.chars().all(|c| c.is_ascii_digit()))
    }

    /// Lists every stone as `(row, column, color)`, with row 0 at the top.
    pub fn stones(&self) -> Vec<(usize, usize, Color)> {
        let mut stones = Vec::new();
        for (row_idx, row) in self.rows.iter().enumerate() {
            let mut col = 0usize;
            let mut run = 0usize;
            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    run = run * 10 + digit as usize;
                } else if let Some(color) = Color::from_char(c) {
                    col += run;
                    run = 0;
                    stones.push((row_idx, col, color));
                    col += 1;
                }
            }
        }
        stones
    }

    /// Converts the parsed notation back to a string.
    pub fn to_notation(&self) -> String {
        format!(
            "{} {} {}",
            self.rows.join(&ROW_DELIMITER.to_string()),
            self.side_to_move,
            self.fullmove_number
        )
    }
}

/// Counts the squares a row string covers.
fn row_width(row: &str) -> Result<usize, String> {
    let mut width = 0usize;
    let mut run: Option<usize> = None;
    for c in row.chars() {
        if let Some(digit) = c.to_digit(10) {
            let next = run
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|r| r.checked_add(digit as usize))
                .ok_or_else(|| "run-length too large".to_string())?;
            run = Some(next);
        } else if c == 'X' || c == 'O' {
            width = flush_run(width, run.take())?;
            width = width
                .checked_add(1)
                .ok_or_else(|| "row too wide".to_string())?;
        } else {
            return Err(format!("invalid character '{}'", c));
        }
    }
    width = flush_run(width, run)?;
    if width == 0 {
        return Err("empty row".to_string());
    }
    Ok(width)
}

fn flush_run(width: usize, run: Option<usize>) -> Result<usize, String> {
    match run {
        None => Ok(width),
        Some(0) => Err("zero-length run".to_string()),
        Some(n) => width.checked_add(n).ok_or_else(|| "row too wide".to_string()),
    }
}

/// Writes one row, compressing runs of empty squares into numbers.
pub fn encode_row<I>(cells: I) -> String
where
    I: IntoIterator<Item = Option<Color>>,
{
    let mut row = String::new();
    let mut empty_count = 0usize;
    for cell in cells {
        match cell {
            Some(color) => {
                if empty_count > 0 {
                    row.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                row.push(color.to_char());
            }
            None => empty_count += 1,
        }
    }
    if empty_count > 0 {
        row.push_str(&empty_count.to_string());
    }
    row
}
