//! Connected-component detection.
//!
//! A [`Group`] is derived on demand and never stored on the board. The same
//! flood fill serves stone chains and empty regions: the seed's cell
//! contents decide which points join.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Color, Point};
use crate::constants::{BOARDSIZE, N};
use crate::error::{GoError, Result};

/// A maximal 4-connected set of points sharing the same cell contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Stone color, or `None` for an empty region
    pub color: Cell,
    /// Members in row-major order
    pub points: Vec<Point>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.points.binary_search(&pt).is_ok()
    }

    /// Number of distinct empty points adjacent to the group.
    pub fn liberties(&self, board: &Board) -> usize {
        let mut seen = [false; BOARDSIZE];
        let mut libs = 0;
        for &pt in &self.points {
            for (r, c) in Board::neighbors(pt) {
                if board.at((r, c)).is_none() && !seen[r * N + c] {
                    seen[r * N + c] = true;
                    libs += 1;
                }
            }
        }
        libs
    }

    /// Whether any member is adjacent to a stone of `color`.
    pub fn touches(&self, board: &Board, color: Color) -> bool {
        self.points
            .iter()
            .flat_map(|&pt| Board::neighbors(pt))
            .any(|n| board.at(n) == Some(color))
    }

    /// Stone colors found on the group's outer boundary.
    pub fn bordering_colors(&self, board: &Board) -> BTreeSet<Color> {
        self.points
            .iter()
            .flat_map(|&pt| Board::neighbors(pt))
            .filter_map(|n| board.at(n))
            .filter(|&c| Some(c) != self.color)
            .collect()
    }
}

/// Flood fill from `seed` using an explicit work list.
///
/// Marks every member in `visited`, which the caller may share across
/// calls to enumerate components without revisiting them.
fn flood(board: &Board, seed: Point, visited: &mut [bool; BOARDSIZE]) -> Group {
    let color = board.at(seed);
    let mut members = [false; BOARDSIZE];
    let mut stack = vec![seed];

    while let Some((r, c)) = stack.pop() {
        let i = r * N + c;
        if members[i] {
            continue;
        }
        members[i] = true;
        visited[i] = true;
        for n in Board::neighbors((r, c)) {
            if !members[n.0 * N + n.1] && board.at(n) == color {
                stack.push(n);
            }
        }
    }

    let points = Board::points().filter(|&(r, c)| members[r * N + c]).collect();
    Group { color, points }
}

/// The maximal group containing `(row, col)`.
///
/// On an empty point this is the surrounding empty region.
pub fn group_at(board: &Board, row: usize, col: usize) -> Result<Group> {
    if !Board::in_bounds(row, col) {
        return Err(GoError::OutOfBounds { row, col });
    }
    let mut visited = [false; BOARDSIZE];
    Ok(flood(board, (row, col), &mut visited))
}

/// Every maximal group on the board, stones and empty regions alike,
/// ordered by their first member.
pub fn groups(board: &Board) -> Vec<Group> {
    groups_matching(board, |_| true)
}

/// Every maximal group whose cell contents satisfy `keep`.
pub(crate) fn groups_matching(board: &Board, keep: impl Fn(Cell) -> bool) -> Vec<Group> {
    let mut visited = [false; BOARDSIZE];
    let mut out = Vec::new();
    for pt in Board::points() {
        if visited[pt.0 * N + pt.1] || !keep(board.at(pt)) {
            continue;
        }
        out.push(flood(board, pt, &mut visited));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[Point], white: &[Point]) -> Board {
        let mut board = Board::new();
        for &(r, c) in black {
            board.set(r, c, Some(Color::Black)).unwrap();
        }
        for &(r, c) in white {
            board.set(r, c, Some(Color::White)).unwrap();
        }
        board
    }

    #[test]
    fn test_single_stone_group() {
        let board = board_with(&[(4, 4)], &[]);
        let g = group_at(&board, 4, 4).unwrap();
        assert_eq!(g.color, Some(Color::Black));
        assert_eq!(g.points, vec![(4, 4)]);
        assert_eq!(g.liberties(&board), 4);
    }

    #[test]
    fn test_diagonal_does_not_connect() {
        let board = board_with(&[(4, 4), (5, 5)], &[]);
        let g = group_at(&board, 4, 4).unwrap();
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_same_group_from_any_member() {
        let board = board_with(&[(2, 2), (2, 3), (3, 3), (4, 3), (4, 4)], &[(3, 2)]);
        let first = group_at(&board, 2, 2).unwrap();
        assert_eq!(first.len(), 5);
        for &(r, c) in &first.points {
            assert_eq!(group_at(&board, r, c).unwrap(), first);
        }
        assert!(!first.contains((3, 2)));
    }

    #[test]
    fn test_shared_liberties_counted_once() {
        // (1, 1) is adjacent to two members
        let board = board_with(&[(0, 1), (1, 0), (0, 0)], &[]);
        let g = group_at(&board, 0, 0).unwrap();
        assert_eq!(g.len(), 3);
        // (0,2), (1,1), (2,0)
        assert_eq!(g.liberties(&board), 3);
    }

    #[test]
    fn test_stones_are_not_liberties() {
        let board = board_with(&[(0, 0)], &[(0, 1)]);
        let g = group_at(&board, 0, 0).unwrap();
        assert_eq!(g.liberties(&board), 1);
        assert!(g.touches(&board, Color::White));
        assert!(!g.touches(&board, Color::Black));
    }

    #[test]
    fn test_empty_region() {
        let board = board_with(&[(0, 1), (1, 0)], &[]);
        let corner = group_at(&board, 0, 0).unwrap();
        assert_eq!(corner.color, None);
        assert_eq!(corner.points, vec![(0, 0)]);
        let colors: Vec<Color> = corner.bordering_colors(&board).into_iter().collect();
        assert_eq!(colors, vec![Color::Black]);
    }

    #[test]
    fn test_groups_partition_board() {
        let board = board_with(&[(0, 1), (1, 0), (4, 4)], &[(4, 5), (8, 8)]);
        let all = groups(&board);
        let total: usize = all.iter().map(Group::len).sum();
        assert_eq!(total, BOARDSIZE);
        // two empty regions and five single stones
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_group_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            group_at(&board, 0, 9),
            Err(GoError::OutOfBounds { row: 0, col: 9 })
        );
    }
}
