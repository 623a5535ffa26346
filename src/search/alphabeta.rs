//! Minimax search with alpha-beta pruning over column drops
//!
//! The search always runs on a normalized grid (see
//! [`Grid::clone_normalized`]) where the side to optimize for holds
//! [`Token::MAXIMIZER`] and everybody else [`Token::MINIMIZER`]. Positive
//! values favor the maximizer.
//!
//! Each node tries columns left to right, scores the placed cell with its
//! heuristic value plus the remaining depth (so faster wins and slower losses
//! are preferred), recurses unless the placement already won, then takes the
//! token back. The grid is handed back exactly as it was received.
//!
//! # Example
//!
//! ```
//! use connect_n::board::{Grid, Token};
//! use connect_n::search::Searcher;
//!
//! let grid = Grid::new(6, 7, 4);
//! let mut searcher = Searcher::new(2);
//!
//! let result = searcher.best_column(&grid, Token::Player(1));
//! assert_eq!(result.column, Some(3));
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Grid, Token};
use crate::eval::is_winning_value;

/// Infinity bound for alpha-beta windows
pub const INF: i64 = i64::MAX;

/// Search counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Placements evaluated
    pub nodes: u64,
    /// Nodes whose remaining columns were skipped by a cutoff
    pub cutoffs: u64,
    /// Wall time of the last top-level search in milliseconds
    pub time_ms: u64,
}

/// Outcome of a search: the chosen column and its value.
///
/// `column == None` is the "no legal move" result for a full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

impl SearchResult {
    /// No column could take a token
    pub const NO_MOVE: SearchResult = SearchResult {
        column: None,
        value: 0,
    };

    #[inline]
    pub fn is_no_move(&self) -> bool {
        self.column.is_none()
    }
}

/// Depth-bounded minimax searcher.
///
/// Single-threaded: the column loop mutates one grid and backtracks. A
/// parallel column loop would need a grid clone per branch.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u32,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with alpha-beta pruning enabled
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::with_pruning(depth, true)
    }

    /// Searcher with pruning switched on or off. Both settings choose the same column.
    #[must_use]
    pub fn with_pruning(depth: u32, pruning: bool) -> Self {
        Self {
            depth,
            pruning,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Counters of the last [`Searcher::best_column`] call
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best column for `perspective` on `grid`, searched to the configured depth.
    ///
    /// Works on a normalized clone; `grid` itself is never touched.
    pub fn best_column(&mut self, grid: &Grid, perspective: Token) -> SearchResult {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let mut work = grid.clone_normalized(perspective);
        let result = self.search(&mut work, self.depth, -INF, INF, true);

        self.stats.time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(
            column = ?result.column,
            value = result.value,
            depth = self.depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_ms = self.stats.time_ms,
            "search finished"
        );
        result
    }

    /// Minimax over `grid` from the given side's point of view.
    ///
    /// `grid` must be normalized. It is mutated during the call and restored
    /// before returning. Returns [`SearchResult::NO_MOVE`] when every column is full.
    pub fn search(
        &mut self,
        grid: &mut Grid,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        let line_length = grid.line_length();
        let columns = grid.columns();
        let marker = if maximizing {
            Token::MAXIMIZER
        } else {
            Token::MINIMIZER
        };

        let mut best = SearchResult::NO_MOVE;

        for column in 0..columns {
            let Some(index) = grid.place(column, marker) else {
                continue;
            };
            self.stats.nodes += 1;

            let heuristic = grid
                .cell(index)
                .map_or(0, |cell| cell.heuristic_value(line_length));
            let magnitude = heuristic.saturating_add(i64::from(depth));
            let leaf = if maximizing { magnitude } else { -magnitude };

            let value = if depth > 0
                && !is_winning_value(leaf, line_length)
                && grid.has_open_cell()
            {
                let child = self.search(grid, depth - 1, alpha, beta, !maximizing);
                if child.is_no_move() {
                    leaf
                } else {
                    child.value
                }
            } else {
                leaf
            };

            grid.clear(index);

            if best.is_no_move() || is_better(value, column, &best, maximizing, columns) {
                best = SearchResult {
                    column: Some(column),
                    value,
                };
            }

            if self.pruning {
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
                if beta < alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        best
    }
}

/// Whether `value` at `column` beats `best` for the side to move.
///
/// Strictly better values win; exact ties go to the column nearer the
/// horizontal center, and equal distances keep the earlier column.
#[inline]
fn is_better(value: i64, column: usize, best: &SearchResult, maximizing: bool, columns: usize) -> bool {
    let Some(best_column) = best.column else {
        return true;
    };
    if value != best.value {
        return if maximizing {
            value > best.value
        } else {
            value < best.value
        };
    }
    center_distance(column, columns) < center_distance(best_column, columns)
}

/// Twice the distance of `column` from `columns / 2`
#[inline]
fn center_distance(column: usize, columns: usize) -> usize {
    (2 * column).abs_diff(columns)
}
