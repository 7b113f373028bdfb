//! The 9x9 grid of cells.
//!
//! A [`Board`] is plain `Copy` data, so taking a speculative copy before a
//! move is just an assignment. Public accessors take `(row, col)` and check
//! bounds; the crate-internal ones take a [`Point`] that is already known to
//! be on the board.

use std::fmt;

use crate::constants::{BOARDSIZE, COLUMN_LABELS, DELTA, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, N};
use crate::error::{GoError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }

    /// Parse a color name as used by the text protocol (`b`, `black`, `w`, `white`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Contents of one point: `None` is empty.
pub type Cell = Option<Color>;

/// A point as `(row, col)`, row 0 at the top.
pub type Point = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARDSIZE],
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < N && col < N
    }

    fn idx((row, col): Point) -> usize {
        row * N + col
    }

    fn check(row: usize, col: usize) -> Result<Point> {
        if Self::in_bounds(row, col) {
            Ok((row, col))
        } else {
            Err(GoError::OutOfBounds { row, col })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        let pt = Self::check(row, col)?;
        Ok(self.at(pt))
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let pt = Self::check(row, col)?;
        self.put(pt, cell);
        Ok(())
    }

    #[inline]
    pub(crate) fn at(&self, pt: Point) -> Cell {
        self.cells[Self::idx(pt)]
    }

    #[inline]
    pub(crate) fn put(&mut self, pt: Point, cell: Cell) {
        self.cells[Self::idx(pt)] = cell;
    }

    /// The up to four orthogonal neighbours of `pt` that lie on the board.
    pub fn neighbors((row, col): Point) -> impl Iterator<Item = Point> {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            Self::in_bounds(r, c).then_some((r, c))
        })
    }

    /// Every point in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// The grid as nested rows, for renderers.
    pub fn rows(&self) -> [[Cell; N]; N] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.at((row, col))))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for label in COLUMN_LABELS {
            write!(f, " {label}")?;
        }
        writeln!(f)?;
        for row in 0..N {
            write!(f, "{:>2}", N - row)?;
            for col in 0..N {
                let ch = self.at((row, col)).map_or(GLYPH_EMPTY, Color::glyph);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a vertex such as `D4` into a point.
///
/// Columns are `A`..`J` skipping `I`; rows count 1..9 from the bottom.
/// Returns `None` for anything that is not a vertex on this board.
pub fn parse_vertex(s: &str) -> Option<Point> {
    let mut chars = s.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let col = COLUMN_LABELS.iter().position(|&c| c == letter)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: usize = digits.parse().ok()?;
    if number == 0 || number > N {
        return None;
    }
    Some((N - number, col))
}

/// Convert a point to a vertex string (e.g. `(5, 3)` -> `D4`).
pub fn vertex((row, col): Point) -> String {
    format!("{}{}", COLUMN_LABELS[col], N - row)
}
