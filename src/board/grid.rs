//! Grid structure with gravity placement

use super::cell::{Cell, CellRef};
use super::{Coord, Token, DIRECTIONS};

/// Game grid: `rows * columns` cells stored row-major, row 0 at the top.
///
/// Tokens fall to the lowest open cell of a column, so the bottom row is
/// `rows - 1`.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    line_length: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build an empty grid and link every cell to its neighbors.
    ///
    /// Any `line_length` is accepted; with 1, every placed token completes a line.
    pub fn new(rows: usize, columns: usize, line_length: usize) -> Self {
        let mut grid = Self {
            rows,
            columns,
            line_length,
            cells: Vec::with_capacity(rows * columns),
        };
        let neighbors: Vec<_> = (0..rows * columns)
            .map(|index| grid.build_neighbors(index))
            .collect();
        grid.cells = neighbors.into_iter().map(Cell::new).collect();
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Run length required to win
    #[inline]
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(row, col)`, or `None` outside the grid
    #[inline]
    pub fn to_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }

    /// Coordinate of a flat index, or `None` outside the grid
    #[inline]
    pub fn to_coord(&self, index: usize) -> Option<Coord> {
        (index < self.rows * self.columns)
            .then(|| Coord::new(index / self.columns, index % self.columns))
    }

    /// Signed offset from `(row, col)`, bounds-checked
    #[inline]
    fn offset_index(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<usize> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        self.to_index(row, col)
    }

    #[inline]
    pub(crate) fn raw_cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Cell at a flat index
    #[inline]
    pub fn cell(&self, index: usize) -> Option<CellRef<'_>> {
        (index < self.cells.len()).then(|| CellRef::new(self, index))
    }

    /// Cell at `(row, col)`
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellRef<'_>> {
        self.to_index(row, col).map(|index| CellRef::new(self, index))
    }

    /// Token at `(row, col)`, `None` outside the grid
    #[inline]
    pub fn token_at(&self, row: usize, col: usize) -> Option<Token> {
        self.to_index(row, col).map(|index| self.cells[index].token())
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = CellRef<'_>> {
        (0..self.cells.len()).map(move |index| CellRef::new(self, index))
    }

    /// Tokens of every cell in row-major order
    pub fn tokens(&self) -> Vec<Token> {
        self.cells.iter().map(Cell::token).collect()
    }

    /// Neighbor slots for a cell: the 3x3 window around it minus the center,
    /// rows top to bottom, columns left to right. Out-of-range positions stay `None`.
    pub fn build_neighbors(&self, index: usize) -> [Option<usize>; DIRECTIONS] {
        let mut neighbors = [None; DIRECTIONS];
        let Some(Coord { row, col }) = self.to_coord(index) else {
            return neighbors;
        };

        let mut slot = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                neighbors[slot] = self.offset_index(row, col, dr, dc);
                slot += 1;
            }
        }
        neighbors
    }

    /// Lowest empty cell in `column`, scanning from the bottom row up
    pub fn first_open_in_column(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .map(|row| row * self.columns + column)
            .find(|&index| self.cells[index].token().is_empty())
    }

    /// Whether `column` can still take a token
    #[inline]
    pub fn is_column_open(&self, column: usize) -> bool {
        self.first_open_in_column(column).is_some()
    }

    /// Columns that can still take a token, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.is_column_open(column))
            .collect()
    }

    /// Drop `token` into `column`.
    ///
    /// Returns the index of the filled cell, or `None` (grid untouched) when the
    /// column is full or out of range.
    pub fn place(&mut self, column: usize, token: Token) -> Option<usize> {
        let index = self.first_open_in_column(column)?;
        self.cells[index].set_token(token);
        Some(index)
    }

    /// Set a cell directly, ignoring gravity. Returns the index written.
    pub fn set(&mut self, row: usize, col: usize, token: Token) -> Option<usize> {
        let index = self.to_index(row, col)?;
        self.cells[index].set_token(token);
        Some(index)
    }

    /// Empty the cell at `index`
    #[inline]
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.set_token(Token::Empty);
        }
    }

    /// Whether any cell is still empty
    pub fn has_open_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.token().is_empty())
    }

    /// Number of occupied cells
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.token().is_empty()).count()
    }

    /// Clear every token in place; neighbor links are kept
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.set_token(Token::Empty);
        }
    }

    /// Copy with every occupied cell remapped to one of two canonical markers:
    /// `perspective` becomes [`Token::MAXIMIZER`], any other token
    /// [`Token::MINIMIZER`].
    pub fn clone_normalized(&self, perspective: Token) -> Grid {
        self.clone_mapped(|token| match token {
            Token::Empty => Token::Empty,
            token if token == perspective => Token::MAXIMIZER,
            _ => Token::MINIMIZER,
        })
    }

    /// Fresh grid of the same shape with tokens passed through `map`
    fn clone_mapped(&self, map: impl Fn(Token) -> Token) -> Grid {
        let mut grid = Grid::new(self.rows, self.columns, self.line_length);
        for (target, source) in grid.cells.iter_mut().zip(&self.cells) {
            target.set_token(map(source.token()));
        }
        grid
    }
}

impl Clone for Grid {
    /// New cells with rebuilt neighbor links and copied tokens
    fn clone(&self) -> Self {
        self.clone_mapped(|token| token)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(
            super::DEFAULT_ROWS,
            super::DEFAULT_COLUMNS,
            super::DEFAULT_LINE_LENGTH,
        )
    }
}
