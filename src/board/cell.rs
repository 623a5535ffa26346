//! Cells and the line queries evaluated around a single cell

use super::{opposite, Coord, Grid, Token, AXES, DIRECTIONS};
use crate::eval;

/// A single grid position: its token and the indices of its 8 neighbors.
///
/// Neighbor slots are assigned once when the owning [`Grid`] is built and
/// never change afterwards. `None` marks the grid boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    token: Token,
    neighbors: [Option<usize>; DIRECTIONS],
}

impl Cell {
    pub(crate) fn new(neighbors: [Option<usize>; DIRECTIONS]) -> Self {
        Self {
            token: Token::Empty,
            neighbors,
        }
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    #[inline]
    pub(crate) fn set_token(&mut self, token: Token) {
        self.token = token;
    }

    /// Index of the neighbor in `direction`, if inside the grid
    #[inline]
    pub fn neighbor(&self, direction: usize) -> Option<usize> {
        self.neighbors.get(direction).copied().flatten()
    }

    #[inline]
    pub fn neighbors(&self) -> &[Option<usize>; DIRECTIONS] {
        &self.neighbors
    }
}

/// Borrowed view of one cell together with the grid that owns it.
///
/// All run-length queries walk the neighbor indices of the owning grid, so
/// they are only available through this view.
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a> {
    grid: &'a Grid,
    index: usize,
}

impl<'a> CellRef<'a> {
    /// `index` must be a valid position of `grid`
    #[inline]
    pub(crate) fn new(grid: &'a Grid, index: usize) -> Self {
        Self { grid, index }
    }

    #[inline]
    fn cell(&self) -> &'a Cell {
        self.grid.raw_cell(self.index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        let columns = self.grid.columns();
        Coord::new(self.index / columns, self.index % columns)
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.cell().token()
    }

    /// Neighbor in `direction` (0..8), if inside the grid
    #[inline]
    pub fn neighbor(&self, direction: usize) -> Option<CellRef<'a>> {
        self.cell()
            .neighbor(direction)
            .map(|index| CellRef::new(self.grid, index))
    }

    /// Whether the neighbor in `direction` holds the same token as this cell.
    ///
    /// `None` when there is no neighbor in that direction.
    pub fn is_neighbor_equal(&self, direction: usize) -> Option<bool> {
        self.neighbor(direction)
            .map(|neighbor| neighbor.token() == self.token())
    }

    /// Consecutive cells holding this cell's token, walking outward in one direction
    pub fn count_by_side(&self, direction: usize) -> usize {
        let token = self.token();
        let mut count = 0;
        let mut current = *self;
        while let Some(next) = current.neighbor(direction) {
            if next.token() != token {
                break;
            }
            count += 1;
            current = next;
        }
        count
    }

    /// Full run length through this cell along `axis` (0..4), self included
    pub fn count_by_axis(&self, axis: usize) -> usize {
        self.count_by_side(axis) + self.count_by_side(opposite(axis)) + 1
    }

    /// Whether any axis through this cell holds a run of at least `line_length`
    pub fn completes_line(&self, line_length: usize) -> bool {
        (0..AXES).any(|axis| self.count_by_axis(axis) >= line_length)
    }

    /// Heuristic worth of this cell for its own token.
    ///
    /// Saturates at [`eval::max_value`] exactly when the cell completes a line,
    /// which is what lets the search test [`eval::is_winning_value`] instead
    /// of walking the lines again.
    pub fn heuristic_value(&self, line_length: usize) -> i64 {
        eval::cell_value((0..AXES).map(|axis| self.count_by_axis(axis)), line_length)
    }

    /// Cells of the first completed line through this cell, ordered from one end to the other
    pub fn winning_line(&self, line_length: usize) -> Option<Vec<Coord>> {
        let axis = (0..AXES).find(|&axis| self.count_by_axis(axis) >= line_length)?;

        let mut line = self.walk(axis);
        line.reverse();
        line.push(self.coord());
        line.extend(self.walk(opposite(axis)));
        Some(line)
    }

    /// Coordinates of the same-token run leaving this cell in `direction`
    fn walk(&self, direction: usize) -> Vec<Coord> {
        let token = self.token();
        let mut run = Vec::new();
        let mut current = *self;
        while let Some(next) = current.neighbor(direction) {
            if next.token() != token {
                break;
            }
            run.push(next.coord());
            current = next;
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Token = Token::Player(0);
    const BLUE: Token = Token::Player(1);

    #[test]
    fn test_is_neighbor_equal_at_boundary() {
        let mut grid = Grid::new(6, 7, 4);
        let index = grid.place(0, RED).unwrap();
        let cell = grid.cell(index).unwrap();

        // Bottom-left corner: nothing below, nothing to the left
        assert_eq!(cell.is_neighbor_equal(5), None);
        assert_eq!(cell.is_neighbor_equal(6), None);
        assert_eq!(cell.is_neighbor_equal(3), None);
        // Right neighbor is empty
        assert_eq!(cell.is_neighbor_equal(4), Some(false));
    }

    #[test]
    fn test_count_by_side_stops_at_other_token() {
        let mut grid = Grid::new(6, 7, 4);
        grid.place(0, RED);
        grid.place(1, RED);
        grid.place(2, BLUE);
        let cell = grid.cell_at(5, 0).unwrap();

        assert_eq!(cell.count_by_side(4), 1);
        assert_eq!(cell.count_by_side(3), 0);
        assert_eq!(cell.count_by_axis(3), 2);
    }

    #[test]
    fn test_count_by_axis_vertical() {
        let mut grid = Grid::new(6, 7, 4);
        for _ in 0..3 {
            grid.place(2, BLUE);
        }
        // Middle token of the stack
        let cell = grid.cell_at(4, 2).unwrap();
        assert_eq!(cell.count_by_side(1), 1);
        assert_eq!(cell.count_by_side(6), 1);
        assert_eq!(cell.count_by_axis(1), 3);
        assert!(!cell.completes_line(4));
        assert!(cell.completes_line(3));
    }

    #[test]
    fn test_completes_line_diagonals() {
        let mut grid = Grid::new(6, 7, 4);
        for i in 0..4 {
            grid.set(5 - i, i, RED);
            grid.set(3 - i, 6 - i, BLUE);
        }
        assert!(grid.cell_at(3, 2).unwrap().completes_line(4));
        assert!(grid.cell_at(2, 3).unwrap().completes_line(4));
        assert!(grid.cell_at(2, 5).unwrap().completes_line(4));
        assert!(grid.cell_at(3, 6).unwrap().completes_line(4));
        assert!(!grid.cell_at(3, 6).unwrap().completes_line(5));
    }

    #[test]
    fn test_heuristic_value_single_token_is_zero() {
        let mut grid = Grid::new(6, 7, 4);
        let index = grid.place(3, RED).unwrap();
        assert_eq!(grid.cell(index).unwrap().heuristic_value(4), 0);
    }

    #[test]
    fn test_heuristic_value_sums_axes() {
        let mut grid = Grid::new(6, 7, 4);
        // Pair horizontally and pair vertically through (4, 1)
        grid.set(5, 1, RED);
        grid.set(4, 1, RED);
        grid.set(4, 2, RED);
        let value = grid.cell_at(4, 1).unwrap().heuristic_value(4);
        assert_eq!(value, 2 * 1_000);

        // Three in a row horizontally adds 8 * 1000 on that axis
        grid.set(4, 3, RED);
        let value = grid.cell_at(4, 1).unwrap().heuristic_value(4);
        assert_eq!(value, 1_000 + 8_000);
    }

    #[test]
    fn test_heuristic_value_capped_at_max() {
        let mut grid = Grid::new(6, 7, 4);
        for col in 0..6 {
            grid.set(5, col, RED);
        }
        let cell = grid.cell_at(5, 2).unwrap();
        assert_eq!(cell.count_by_axis(3), 6);
        assert_eq!(cell.heuristic_value(4), eval::max_value(4));
    }

    #[test]
    fn test_winning_line_is_ordered() {
        let mut grid = Grid::new(6, 7, 4);
        for col in 1..5 {
            grid.set(5, col, BLUE);
        }
        let line = grid.cell_at(5, 3).unwrap().winning_line(4).unwrap();
        let expected: Vec<Coord> = (1..5).map(|col| Coord::new(5, col)).collect();
        assert_eq!(line, expected);

        assert!(grid.cell_at(5, 3).unwrap().winning_line(5).is_none());
    }
}
