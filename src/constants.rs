//! Board geometry and text constants.
//!
//! The engine plays on a fixed 9x9 board. Points are addressed as
//! `(row, col)` with row 0 at the top, stored row-major in a flat array.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 9;

/// Number of points on the board.
pub const BOARDSIZE: usize = N * N;

/// Orthogonal neighbour offsets as `(d_row, d_col)`.
/// Order: North, East, South, West. Diagonals never connect stones.
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

// =============================================================================
// Vertex Labels
// =============================================================================

/// Column letters used by the text protocol. `I` is skipped by Go convention.
pub const COLUMN_LABELS: [char; N] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J'];

// =============================================================================
// Stone Glyphs
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// White stone.
pub const GLYPH_WHITE: char = 'O';

/// Empty point.
pub const GLYPH_EMPTY: char = '.';
