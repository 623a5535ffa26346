//! Connect-N game engine
//!
//! Gravity-based "N in a row" on a grid of any shape:
//! - Tokens drop to the lowest open cell of the chosen column
//! - A run of `line_length` identical tokens along any of the 4 axes wins
//! - A full grid without a run is a draw
//!
//! # Architecture
//!
//! - [`board`]: Grid of cells with precomputed neighbor links and line queries
//! - [`eval`]: Per-cell heuristic scoring of runs
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`player`]: Human players and the search-backed opponent
//! - [`game`]: Turn state machine
//! - [`config`]: TOML configuration and turn-order construction
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use connect_n::{AutomatedPlayer, Grid, Token};
//!
//! let mut grid = Grid::new(6, 7, 4);
//! grid.place(3, Token::Player(0));
//!
//! let mut computer = AutomatedPlayer::new("Blue", Token::Player(1), 3);
//! if let Some(index) = computer.choose_and_play(&mut grid) {
//!     let coord = grid.to_coord(index).unwrap();
//!     println!("computer plays at ({}, {})", coord.row, coord.col);
//! }
//! assert_eq!(grid.token_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod search;
pub mod ui;

pub use board::{CellRef, Coord, Grid, Token};
pub use config::{GameConfig, GameMode};
pub use error::{ConfigError, PlayError};
pub use game::{AutomatedMove, AutomatedTurn, Game, GameStatus, Placement};
pub use player::{AutomatedPlayer, Participant, Player};
pub use search::{SearchResult, SearchStats, Searcher};
