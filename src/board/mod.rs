//! Grid representation for Connect-N
//!
//! Cells live in a single flat, row-major `Vec` owned by the [`Grid`]. Each
//! cell stores its Moore neighborhood as indices into that same `Vec`, so the
//! neighbor graph has no reference cycles and a cloned grid can never point
//! back into its source.

pub mod cell;
pub mod grid;


// Re-exports
pub use cell::{Cell, CellRef};
pub use grid::Grid;

/// Neighbor slots per cell (Moore neighborhood)
pub const DIRECTIONS: usize = 8;
/// Undirected axes through a cell: slots `axis` and `opposite(axis)` form one axis
pub const AXES: usize = DIRECTIONS / 2;

/// Default board dimensions
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_LINE_LENGTH: usize = 4;

/// Slot of the direction opposite to `direction`.
///
/// Slots follow the scan order of the 3x3 window around a cell
/// (row above left to right, same row, row below), which makes slot `i` and
/// slot `7 - i` mirror images.
#[inline]
pub const fn opposite(direction: usize) -> usize {
    DIRECTIONS - 1 - direction
}

/// Token occupying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Empty,
    Player(u8),
}

impl Token {
    /// Canonical marker for the side the search maximizes for
    pub const MAXIMIZER: Token = Token::Player(0);
    /// Canonical marker for every other side in a normalized grid
    pub const MINIMIZER: Token = Token::Player(1);

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }
}

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
