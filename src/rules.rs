//! Move legality.
//!
//! A candidate move is tried on a copy of the board. The live board only
//! changes when the caller commits the returned [`Outcome`], which keeps a
//! rejected move free of side effects.
//!
//! The rules, in order:
//! - the target point must be empty;
//! - a move that captures is always legal;
//! - a move whose group ends up without liberties is forbidden when that
//!   group touches an opponent stone;
//! - a group enclosed purely by its own stones is allowed.

use crate::board::{Board, Color, Point};
use crate::capture::remove_captured;
use crate::error::{GoError, Result};
use crate::group::group_at;

/// A legal move, evaluated but not yet committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Board after placement and capture resolution
    pub board: Board,
    /// Opponent stones removed by the move
    pub captured: Vec<Point>,
}

/// Evaluate `player` playing at `(row, col)` on `board`.
///
/// # Errors
/// - [`GoError::OutOfBounds`] if the point is off the board
/// - [`GoError::Occupied`] if the point holds a stone
/// - [`GoError::Forbidden`] if the move is suicide
pub fn try_move(board: &Board, player: Color, row: usize, col: usize) -> Result<Outcome> {
    if board.get(row, col)?.is_some() {
        return Err(GoError::Occupied { row, col });
    }

    let mut next = *board;
    next.put((row, col), Some(player));

    let captured = remove_captured(&mut next, player.opponent());
    if !captured.is_empty() {
        return Ok(Outcome {
            board: next,
            captured,
        });
    }

    let group = group_at(&next, row, col)?;
    if group.liberties(&next) == 0 && group.touches(&next, player.opponent()) {
        return Err(GoError::Forbidden { row, col });
    }

    Ok(Outcome {
        board: next,
        captured,
    })
}

/// Whether `player` may play at `(row, col)`.
pub fn is_legal(board: &Board, player: Color, row: usize, col: usize) -> bool {
    try_move(board, player, row, col).is_ok()
}
