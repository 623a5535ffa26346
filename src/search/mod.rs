//! Search module for the Connect-N opponent
//!
//! Contains the depth-bounded minimax search with alpha-beta pruning that
//! picks a column for an automated player.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
