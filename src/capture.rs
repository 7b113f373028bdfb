//! Capture resolution.

use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::group::groups_matching;

/// Remove every `victim` group that has no liberties left.
///
/// Each victim group is examined exactly once, so a single move can take
/// several disjoint groups. Returns the removed points, group by group.
pub fn remove_captured(board: &mut Board, victim: Color) -> Vec<Point> {
    let dead: Vec<Point> = groups_matching(board, |c| c == Some(victim))
        .into_iter()
        .filter(|g| g.liberties(board) == 0)
        .flat_map(|g| g.points)
        .collect();

    for &pt in &dead {
        board.put(pt, None);
    }
    if !dead.is_empty() {
        debug!(%victim, count = dead.len(), "captured stones");
    }
    dead
}
