//! Full game management with history tracking.
//!
//! The [`Game`] struct owns the board, whose turn it is, the move history
//! and the counters. Every move goes through one commit path that validates
//! the whole move first and only then touches the board, so a rejected move
//! never leaves a half-applied state behind.

use std::fmt;

use mnk_core::{encode_row, Color, NotationError, NotationParser, Square};
use tracing::{debug, trace};

use crate::config::{ConfigError, GameConfig};
use crate::line;
use crate::rules::{pente, GameResult, Termination};
use crate::{Board, GameError};

/// How far past the outermost stones [`Game::legal_moves`] looks on
/// unbounded axes.
pub const LEGAL_MOVE_MARGIN: i32 = 1;

/// A single stone put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub square: Square,
    pub piece: Color,
}

impl Placement {
    #[inline]
    pub const fn new(square: Square, piece: Color) -> Self {
        Placement { square, piece }
    }
}

/// One committed move in game history.
///
/// A group holds a single placement except in Connect6, where it holds
/// every stone of the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGroup {
    /// The player who made the move.
    pub player: Color,
    /// Stones placed, in the order given.
    pub placements: Vec<Placement>,
    /// Opponent stones removed by captures.
    pub captured: Vec<Placement>,
}

impl MoveGroup {
    /// Squares placed by this move.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.placements.iter().map(|p| p.square)
    }

    /// Number of opponent pairs captured.
    pub fn captured_pairs(&self) -> u32 {
        (self.captured.len() / 2) as u32
    }
}

/// A k-in-a-row game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    /// Player to move.
    turn: Color,
    /// Starts at 1 and increases each time the turn returns to the first player.
    fullmove_number: u32,
    /// Captured pairs, indexed by [`Color::index`].
    captures: [u32; 2],
    history: Vec<MoveGroup>,
    result: Option<GameResult>,
    termination: Option<Termination>,
}

impl Game {
    /// Creates a game with an empty board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game {
            config,
            board: Board::new(config.bounds()),
            turn: config.first,
            fullmove_number: 1,
            captures: [0; 2],
            history: Vec::new(),
            result: None,
            termination: None,
        })
    }

    /// Clears the board and history.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.bounds());
        self.turn = self.config.first;
        self.fullmove_number = 1;
        self.captures = [0; 2];
        self.history.clear();
        self.result = None;
        self.termination = None;
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the current fullmove number.
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of move groups committed since the game (or the loaded position) started.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[MoveGroup] {
        &self.history
    }

    /// Pairs captured by `color`.
    pub fn captures(&self, color: Color) -> u32 {
        self.captures[color.index()]
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// How the game ended, if it has.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// The winning color. `None` while undecided and for a draw.
    pub fn winner(&self) -> Option<Color> {
        self.result.and_then(GameResult::winner)
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Number of stones the player to move must place.
    pub fn stones_to_place(&self) -> usize {
        self.config.variant.stones_to_place(self.history.len())
    }

    /// Returns true if a stone may go on `square` now.
    pub fn is_legal_move(&self, square: Square) -> bool {
        !self.is_game_over() && self.board.is_empty_square(square)
    }

    /// Returns true if the player to move may put `piece` on `square`.
    pub fn is_legal_placement(&self, square: Square, piece: Color) -> bool {
        self.is_legal_move(square) && self.config.variant.may_place(self.turn, piece)
    }

    /// All squares a stone may go on now.
    ///
    /// Finite boards list every empty square, top row first. On unbounded
    /// axes the list is limited to [`LEGAL_MOVE_MARGIN`] squares around the
    /// stones already played. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.empty_squares(LEGAL_MOVE_MARGIN)
    }

    /// Places the mover's default piece on `square`.
    pub fn make_move(&mut self, square: Square) -> Result<(), GameError> {
        let piece = self.config.variant.default_piece(self.turn);
        self.commit(vec![Placement::new(square, piece)])
    }

    /// Places a piece at `(x, y)`.
    pub fn play(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        self.make_move(Square::new(x, y))
    }

    /// Places a chosen piece on `square`.
    ///
    /// Only Wild and Order-and-Chaos let a player place the opponent's
    /// piece. Everywhere else the piece must be the one the mover owns.
    pub fn wild_move(&mut self, square: Square, piece: Color) -> Result<(), GameError> {
        self.commit(vec![Placement::new(square, piece)])
    }

    /// Places several stones as one move.
    ///
    /// The number of squares must match [`stones_to_place`](Game::stones_to_place).
    pub fn make_multimove(&mut self, squares: &[Square]) -> Result<(), GameError> {
        let piece = self.config.variant.default_piece(self.turn);
        let placements = squares
            .iter()
            .map(|&square| Placement::new(square, piece))
            .collect();
        self.commit(placements)
    }

    /// Same as [`make_multimove`](Game::make_multimove).
    pub fn move_sequence(&mut self, squares: &[Square]) -> Result<(), GameError> {
        self.make_multimove(squares)
    }

    /// Undoes the last move, returning it.
    pub fn pop(&mut self) -> Result<MoveGroup, GameError> {
        let group = self.history.pop().ok_or(GameError::EmptyHistory)?;

        for p in &group.placements {
            self.board.remove(p.square, p.piece);
        }
        for c in &group.captured {
            self.board.restore(c.square, c.piece);
        }
        self.captures[group.player.index()] -= group.captured_pairs();

        if self.turn == self.config.first {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }
        self.turn = group.player;
        // Moves are only accepted while the game is undecided.
        self.result = None;
        self.termination = None;

        trace!(player = %group.player, stones = group.placements.len(), "undid move");
        Ok(group)
    }

    /// Validates and applies one move group.
    fn commit(&mut self, placements: Vec<Placement>) -> Result<(), GameError> {
        self.validate(&placements)?;

        let player = self.turn;
        for p in &placements {
            self.board.place(p.square, p.piece)?;
        }

        let mut captured = Vec::new();
        if self.config.variant.max_captures().is_some() {
            for p in &placements {
                let opponent = p.piece.opposite();
                for square in pente::find_captures(&self.board, p.square, p.piece) {
                    if self.board.remove(square, opponent) {
                        captured.push(Placement::new(square, opponent));
                    }
                }
            }
        }

        let group = MoveGroup {
            player,
            placements,
            captured,
        };
        self.captures[player.index()] += group.captured_pairs();

        if let Some((result, termination)) = self.conclude(&group) {
            debug!(%result, ?termination, "game over");
            self.result = Some(result);
            self.termination = Some(termination);
        }

        self.turn = player.opposite();
        if self.turn == self.config.first {
            self.fullmove_number += 1;
        }

        debug!(
            %player,
            squares = ?group.squares().collect::<Vec<_>>(),
            captured = group.captured_pairs(),
            "committed move"
        );
        self.history.push(group);
        Ok(())
    }

    /// Checks a whole move group without touching any state.
    fn validate(&self, placements: &[Placement]) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let expected = self.stones_to_place();
        if placements.len() != expected {
            return Err(GameError::WrongStoneCount {
                expected,
                got: placements.len(),
            });
        }
        if self.turn.opposite() == self.config.first && self.fullmove_number == u32::MAX {
            return Err(GameError::FullmoveOverflow);
        }
        for (i, p) in placements.iter().enumerate() {
            if !self.board.bounds().contains(p.square) {
                return Err(GameError::OutOfBounds(p.square));
            }
            if self.board.piece_at(p.square).is_some() {
                return Err(GameError::Occupied(p.square));
            }
            if placements[..i].iter().any(|q| q.square == p.square) {
                return Err(GameError::DuplicateSquare(p.square));
            }
            if !self.config.variant.may_place(self.turn, p.piece) {
                return Err(GameError::WrongPiece {
                    player: self.turn,
                    piece: p.piece,
                });
            }
        }
        Ok(())
    }

    /// Decides the game after `group` was placed, scanning only from its stones.
    fn conclude(&self, group: &MoveGroup) -> Option<(GameResult, Termination)> {
        let variant = self.config.variant;
        if let Some(max) = variant.max_captures() {
            if self.captures(group.player) >= max {
                return Some((GameResult::win_for(group.player), Termination::Captures));
            }
        }

        let k = self.config.k as usize;
        let completed = group
            .placements
            .iter()
            .any(|p| line::completes_line(&self.board, p.square, p.piece, k));
        if completed {
            return Some((variant.line_result(group.player), Termination::Line));
        }

        self.full_board_conclusion(self.history.len() + 1)
    }

    /// Decides a position that has no last move to scan from.
    fn conclude_position(&self) -> Option<(GameResult, Termination)> {
        let variant = self.config.variant;
        let k = self.config.k as usize;
        let last_mover = self.turn.opposite();

        let lines: Vec<Color> = Color::ALL
            .into_iter()
            .filter(|&color| line::has_line(&self.board, color, k))
            .collect();
        if let Some(&first_line) = lines.first() {
            let completer = if variant.pieces_owned() && !lines.contains(&last_mover) {
                first_line
            } else {
                last_mover
            };
            return Some((variant.line_result(completer), Termination::Line));
        }

        self.full_board_conclusion(self.history.len())
    }

    /// Ends the game on a finite board with fewer empty squares than the
    /// next move needs, given `groups_played` committed groups.
    fn full_board_conclusion(&self, groups_played: usize) -> Option<(GameResult, Termination)> {
        let area = self.board.bounds().area()?;
        let empty = area.saturating_sub(self.board.len() as u64);
        let needed = self.config.variant.stones_to_place(groups_played) as u64;
        if empty < needed {
            Some((self.config.variant.full_board_result(), Termination::BoardFull))
        } else {
            None
        }
    }

    /// Replaces the position with one read from notation.
    ///
    /// History and capture counts are cleared. On error the game is left
    /// untouched.
    pub fn load_notation(&mut self, notation: &str) -> Result<(), GameError> {
        let parsed = NotationParser::parse(notation)?;
        let bounds = *self.board.bounds();
        let mut board = Board::new(bounds);

        match (bounds.x.range(), bounds.y.range()) {
            (Some(xs), Some(ys)) => {
                let width = (*xs.end() - *xs.start() + 1) as usize;
                let height = (*ys.end() - *ys.start() + 1) as usize;
                if parsed.height() != height {
                    return Err(NotationError::RowCountMismatch {
                        expected: height,
                        got: parsed.height(),
                    }
                    .into());
                }
                if parsed.width() != width {
                    return Err(NotationError::RowWidthMismatch {
                        expected: width,
                        got: parsed.width(),
                    }
                    .into());
                }
                for (row, col, color) in parsed.stones() {
                    let square = Square::new(xs.start() + col as i32, ys.end() - row as i32);
                    board.place(square, color)?;
                }
            }
            _ => {
                if parsed.height() != 1 || !parsed.is_empty_board() {
                    return Err(NotationError::MissingDimensions.into());
                }
                let width = self.config.width as usize;
                if parsed.width() != width {
                    return Err(NotationError::RowWidthMismatch {
                        expected: width,
                        got: parsed.width(),
                    }
                    .into());
                }
            }
        }

        let mut loaded = Game {
            config: self.config,
            board,
            turn: parsed.side_to_move,
            fullmove_number: parsed.fullmove_number,
            captures: [0; 2],
            history: Vec::new(),
            result: None,
            termination: None,
        };
        if let Some((result, termination)) = loaded.conclude_position() {
            loaded.result = Some(result);
            loaded.termination = Some(termination);
        }
        *self = loaded;
        Ok(())
    }

    /// Writes the position as notation.
    ///
    /// Unbounded boards have no rows to write, so only an empty one can be
    /// written, in the short `<width> <side> <fullmove>` form.
    pub fn to_notation(&self) -> Result<String, NotationError> {
        let bounds = self.board.bounds();
        match (bounds.x.range(), bounds.y.range()) {
            (Some(xs), Some(ys)) => {
                let rows: Vec<String> = ys
                    .rev()
                    .map(|y| encode_row(xs.clone().map(|x| self.board.piece_at(Square::new(x, y)))))
                    .collect();
                Ok(format!(
                    "{} {} {}",
                    rows.join("/"),
                    self.turn,
                    self.fullmove_number
                ))
            }
            _ if self.board.is_empty() => Ok(format!(
                "{} {} {}",
                self.config.width, self.turn, self.fullmove_number
            )),
            _ => Err(NotationError::UnboundedPosition),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
