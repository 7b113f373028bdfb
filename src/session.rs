//! Game session: turn order, move history and capture tallies.
//!
//! A [`Session`] owns the live board. Every move goes through
//! [`rules::try_move`](crate::rules::try_move) first and is committed only
//! when legal, so a rejected move leaves the session exactly as it was.

use std::fmt;

use tracing::{debug, info, warn};

use crate::board::{Board, Cell, Color, Point, vertex};
use crate::constants::N;
use crate::error::{GoError, Result};
use crate::rules::try_move;
use crate::territory::{Territory, alive_stones, count_territory, dead_stones};

/// A move that was accepted. Never modified once recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub player: Color,
    pub point: Point,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.player {
            Color::Black => 'B',
            Color::White => 'W',
        };
        write!(f, "{side} {}", vertex(self.point))
    }
}

/// Result of [`Session::place_stone`], shaped for a UI.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub accepted: bool,
    pub captured_count: usize,
    /// Set when the move was rejected as suicide; the UI shows a warning
    pub forbidden: bool,
}

#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    to_move: Color,
    /// Stones lost to capture, indexed by [`Session::slot`]
    captured: [usize; 2],
    history: Vec<Move>,
    territory: Territory,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            territory: count_territory(&board),
            board,
            to_move: Color::Black,
            captured: [0; 2],
            history: Vec::new(),
        }
    }

    fn slot(color: Color) -> usize {
        match color {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Play a stone for the side to move.
    ///
    /// Returns the opponent stones captured by the move.
    ///
    /// # Errors
    /// - [`GoError::OutOfBounds`] for a point off the board
    /// - [`GoError::Occupied`] if the point holds a stone
    /// - [`GoError::Forbidden`] for a suicide move
    pub fn play(&mut self, row: usize, col: usize) -> Result<Vec<Point>> {
        let player = self.to_move;
        let outcome = match try_move(&self.board, player, row, col) {
            Ok(outcome) => outcome,
            Err(err @ GoError::Forbidden { .. }) => {
                warn!(%player, row, col, "forbidden move");
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        self.board = outcome.board;
        self.captured[Self::slot(player.opponent())] += outcome.captured.len();
        let mv = Move {
            player,
            point: (row, col),
        };
        self.history.push(mv);
        self.to_move = player.opponent();
        self.territory = count_territory(&self.board);

        debug!(%mv, captured = outcome.captured.len(), "move accepted");
        info!(history = %self.history_record(), "move history");
        Ok(outcome.captured)
    }

    /// UI-facing form of [`Session::play`].
    ///
    /// Occupied and forbidden points are reported in the [`Placement`];
    /// only an off-board point is an error.
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<Placement> {
        match self.play(row, col) {
            Ok(captured) => Ok(Placement {
                accepted: true,
                captured_count: captured.len(),
                forbidden: false,
            }),
            Err(GoError::Occupied { .. }) => Ok(Placement::default()),
            Err(GoError::Forbidden { .. }) => Ok(Placement {
                forbidden: true,
                ..Placement::default()
            }),
            Err(err) => Err(err),
        }
    }

    /// Clear the board, history and tallies; Black to move.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("session reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The grid as rows of cells.
    pub fn get_board(&self) -> [[Cell; N]; N] {
        self.board.rows()
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Number of `color` stones removed from the board so far.
    pub fn captured(&self, color: Color) -> usize {
        self.captured[Self::slot(color)]
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Territory as of the last accepted move.
    pub fn territory(&self) -> Territory {
        self.territory
    }

    /// Stones currently marked dead.
    pub fn dead_stones(&self) -> Vec<Point> {
        dead_stones(&self.board)
    }

    /// Stones not marked dead.
    pub fn alive_stones(&self) -> Vec<Point> {
        alive_stones(&self.board)
    }

    /// The history as `B D4, W E5, ...`.
    pub fn history_record(&self) -> String {
        self.history
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
