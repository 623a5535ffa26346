//! Run scores for Connect-N evaluation
//!
//! A run of length `r` through a cell is worth `BASE^(r - 2) * UNIT`. Each
//! extra token in a run multiplies its worth by `BASE`, so longer partial runs
//! dominate any number of shorter ones.

use crate::board::{AXES, DIRECTIONS};

/// Scoring weights for same-token runs
pub struct RunScore;

impl RunScore {
    /// Growth factor per extra token in a run.
    ///
    /// Tied to the Moore neighborhood size. Four axes of runs one short of a
    /// line add up to `AXES * BASE^(n - 3)`, which stays below `BASE^(n - 2)`
    /// only while `BASE > AXES`. A different neighbor topology needs this
    /// re-derived.
    pub const BASE: i64 = DIRECTIONS as i64;
    /// Worth of a run of two
    pub const UNIT: i64 = 1_000;
    /// Shortest run that scores
    pub const MIN_RUN: usize = 2;
}

const _: () = assert!(RunScore::BASE > AXES as i64);

/// Score of one axis run of `run` tokens (self included). Saturates instead of overflowing.
#[inline]
pub fn run_score(run: usize) -> i64 {
    if run < RunScore::MIN_RUN {
        return 0;
    }
    let exponent = u32::try_from(run - RunScore::MIN_RUN).unwrap_or(u32::MAX);
    RunScore::BASE
        .saturating_pow(exponent)
        .saturating_mul(RunScore::UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_runs_score_nothing() {
        assert_eq!(run_score(0), 0);
        assert_eq!(run_score(1), 0);
    }

    #[test]
    fn test_run_score_growth() {
        assert_eq!(run_score(2), 1_000);
        assert_eq!(run_score(3), 8_000);
        assert_eq!(run_score(4), 64_000);
        for run in 2..12 {
            assert_eq!(run_score(run + 1), run_score(run) * RunScore::BASE);
        }
    }

    #[test]
    fn test_run_score_hierarchy() {
        // All four axes one short of a line stay below a single completed line
        for run in 2..10 {
            assert!(AXES as i64 * run_score(run) < run_score(run + 1));
        }
    }

    #[test]
    fn test_run_score_saturates() {
        assert_eq!(run_score(200), i64::MAX);
    }
}
