//! Evaluation module for Connect-N positions
//!
//! Scores are local to a single placed cell: each axis through the cell
//! contributes according to the length of its same-token run, and the total
//! saturates at the value of a completed line.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{cell_value, is_winning_value, max_value};
pub use patterns::{run_score, RunScore};
