//! Heuristic value of a placed cell
//!
//! The value of a cell is the sum of its axis run scores, capped at the score
//! of a completed line, and pinned to that score whenever some axis reaches
//! the line length. Because four runs one short of a line never reach the
//! cap, `is_winning_value(cell_value(..))` is equivalent to the cell
//! completing a line, for every line length. The search relies on this to detect wins without
//! walking the lines a second time.

use super::patterns::run_score;

/// Value a completed line of `line_length` produces
#[must_use]
#[inline]
pub fn max_value(line_length: usize) -> i64 {
    run_score(line_length.max(2))
}

/// Whether a (possibly negated) search value signals a completed line
#[must_use]
#[inline]
pub fn is_winning_value(value: i64, line_length: usize) -> bool {
    value.unsigned_abs() >= max_value(line_length).unsigned_abs()
}

/// Combine the axis run lengths through a cell into its heuristic value.
///
/// # Arguments
/// * `runs` - Run length along each axis, the cell itself included
/// * `line_length` - Run length that wins the game
#[must_use]
pub fn cell_value(runs: impl IntoIterator<Item = usize>, line_length: usize) -> i64 {
    let max = max_value(line_length);
    let mut total = 0i64;
    for run in runs {
        if run >= line_length {
            return max;
        }
        total = total.saturating_add(run_score(run));
    }
    total.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_value() {
        assert_eq!(max_value(2), 1_000);
        assert_eq!(max_value(4), 64_000);
        assert_eq!(max_value(5), 512_000);
    }

    #[test]
    fn test_is_winning_value_symmetric() {
        assert!(is_winning_value(64_000, 4));
        assert!(is_winning_value(-64_000, 4));
        assert!(is_winning_value(64_005, 4));
        assert!(!is_winning_value(63_999, 4));
        assert!(!is_winning_value(-63_999, 4));
        assert!(!is_winning_value(0, 4));
    }

    #[test]
    fn test_is_winning_value_extremes() {
        assert!(is_winning_value(i64::MIN, 4));
        assert!(is_winning_value(i64::MAX, 4));
    }

    #[test]
    fn test_cell_value_caps_at_line() {
        // Lone token
        assert_eq!(cell_value([1, 1, 1, 1], 4), 0);
        // One pair, one triple
        assert_eq!(cell_value([2, 1, 3, 1], 4), 9_000);
        // Four triples stay below a line of four
        assert_eq!(cell_value([3, 3, 3, 3], 4), 32_000);
        // A line of four on one axis saturates
        assert_eq!(cell_value([4, 1, 1, 1], 4), 64_000);
        // Longer than the line still saturates at the same value
        assert_eq!(cell_value([6, 3, 2, 2], 4), 64_000);
    }

    #[test]
    fn test_cell_value_line_of_one() {
        // Every token is a line on its own
        assert_eq!(cell_value([1, 1, 1, 1], 1), max_value(1));
        assert!(is_winning_value(cell_value([1, 1, 1, 1], 1), 1));
    }

    #[test]
    fn test_cell_value_saturation_equivalence() {
        // For every combination of axis runs up to length 6, a winning value
        // appears exactly when some axis reaches the line length
        for n in 1..=5 {
            for a in 1..=6 {
                for b in 1..=6 {
                    for c in 1..=6 {
                        for d in 1..=6 {
                            let runs = [a, b, c, d];
                            let value = cell_value(runs, n);
                            let completes = runs.iter().any(|&r| r >= n);
                            assert_eq!(is_winning_value(value, n), completes, "runs {runs:?} n {n}");
                        }
                    }
                }
            }
        }
    }
}
