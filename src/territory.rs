//! Territory counting and the dead-stone marker.
//!
//! Both estimates are informational. Nothing here mutates the board, and
//! the dead-stone heuristic is deliberately simple: a group is marked dead
//! exactly when it has no liberties.

use crate::board::{Board, Color, Point};
use crate::constants::N;
use crate::group::groups_matching;

/// Empty points credited to each side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Territory {
    pub black: usize,
    pub white: usize,
    /// Empty points bordered by both colors or by no stone at all
    pub neutral: usize,
}

impl Territory {
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Owner of each point: the enclosing color for empty points inside
/// single-colored borders, `None` everywhere else (stones included).
pub fn ownership(board: &Board) -> [[Option<Color>; N]; N] {
    let mut owner = [[None; N]; N];
    for region in groups_matching(board, |c| c.is_none()) {
        let border = region.bordering_colors(board);
        if border.len() != 1 {
            continue;
        }
        let color = border.into_iter().next();
        for (r, c) in region.points {
            owner[r][c] = color;
        }
    }
    owner
}

/// Count every empty region wholly bordered by one color.
pub fn count_territory(board: &Board) -> Territory {
    let owner = ownership(board);
    let mut t = Territory::default();
    for (r, c) in Board::points() {
        match (board.at((r, c)), owner[r][c]) {
            (Some(_), _) => {}
            (None, Some(Color::Black)) => t.black += 1,
            (None, Some(Color::White)) => t.white += 1,
            (None, None) => t.neutral += 1,
        }
    }
    t
}

/// Stones of every group with no liberties, in row-major group order.
pub fn dead_stones(board: &Board) -> Vec<Point> {
    groups_matching(board, |c| c.is_some())
        .into_iter()
        .filter(|g| g.liberties(board) == 0)
        .flat_map(|g| g.points)
        .collect()
}

/// Stones of every group that still has a liberty: the complement of
/// [`dead_stones`] among the stones on the board.
pub fn alive_stones(board: &Board) -> Vec<Point> {
    let dead = dead_stones(board);
    Board::points()
        .filter(|&pt| board.at(pt).is_some() && !dead.contains(&pt))
        .collect()
}
