//! Turn sequencing for a Connect-N game
//!
//! A game moves through `AwaitingMove -> Evaluating -> {AwaitingMove | Ended}`.
//! Evaluation happens inside a single call, so only the stable states are
//! observable through [`GameStatus`]:
//!
//! - a placement that completes a line ends the game with the mover as winner
//! - a placement that fills the last open cell ends it as a draw
//! - otherwise the turn passes to the next player, and automated players
//!   keep moving until a human is up or the game has ended
//!
//! # Example
//!
//! ```
//! use connect_n::{Game, GameConfig, GameStatus};
//!
//! let config = GameConfig { search_depth: 2, ..GameConfig::default() };
//! let mut game = Game::from_config(&config);
//!
//! // Red plays the center, the computer answers right away
//! let status = game.play(3).unwrap();
//! assert_eq!(status, GameStatus::AwaitingMove);
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.current_index(), 0);
//! ```

use tracing::{info, warn};

use crate::board::{Coord, Grid};
use crate::config::GameConfig;
use crate::error::PlayError;
use crate::player::{AutomatedPlayer, Participant};
use crate::search::SearchResult;

/// Observable game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the current player's move
    AwaitingMove,
    /// Player at this turn-order index completed a line
    Won { winner: usize },
    /// The grid filled up, or no legal move was left, without a line
    Drawn,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove)
    }
}

/// Record of one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Turn-order index of the mover
    pub player: usize,
    pub coord: Coord,
}

/// Snapshot of an automated player's turn.
///
/// Owns a copy of the grid and of the player, so the search can run on
/// another thread while the game keeps drawing.
#[derive(Debug, Clone)]
pub struct AutomatedTurn {
    epoch: u64,
    ply: usize,
    player: AutomatedPlayer,
    grid: Grid,
}

impl AutomatedTurn {
    /// Run the player's search on the snapshot
    pub fn search(mut self) -> AutomatedMove {
        let result = self.player.choose_column(&self.grid);
        AutomatedMove {
            epoch: self.epoch,
            ply: self.ply,
            player: self.player,
            result,
        }
    }
}

/// Finished search, to be handed back to [`Game::apply_automated`]
#[derive(Debug, Clone)]
pub struct AutomatedMove {
    epoch: u64,
    ply: usize,
    player: AutomatedPlayer,
    result: SearchResult,
}

impl AutomatedMove {
    #[inline]
    pub fn result(&self) -> SearchResult {
        self.result
    }
}

/// Game orchestrator: grid, turn order and status
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    /// Never empty
    players: Vec<Participant>,
    current: usize,
    status: GameStatus,
    history: Vec<Placement>,
    /// Bumped on reset so searches started before it are rejected
    epoch: u64,
}

impl Game {
    /// New game on `grid`; player 0 moves first.
    ///
    /// Automated players do not move until [`Game::play`] or [`Game::advance`]
    /// is called.
    pub fn new(grid: Grid, players: Vec<Participant>) -> Result<Self, PlayError> {
        if players.is_empty() {
            return Err(PlayError::NoPlayers);
        }
        Ok(Self::with_players(grid, players))
    }

    /// Game with the grid and turn order described by `config`
    pub fn from_config(config: &GameConfig) -> Self {
        // Both modes seat two players
        Self::with_players(config.build_grid(), config.build_players())
    }

    fn with_players(grid: Grid, players: Vec<Participant>) -> Self {
        info!(
            rows = grid.rows(),
            columns = grid.columns(),
            line_length = grid.line_length(),
            players = players.len(),
            "new game"
        );
        Self {
            grid,
            players,
            current: 0,
            status: GameStatus::AwaitingMove,
            history: Vec::new(),
            epoch: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Turn-order index of the player to move (or the winner, once won)
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current_player(&self) -> &Participant {
        &self.players[self.current]
    }

    pub fn winner(&self) -> Option<&Participant> {
        match self.status {
            GameStatus::Won { winner } => self.players.get(winner),
            _ => None,
        }
    }

    /// Placements so far, oldest first
    #[inline]
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    #[inline]
    pub fn last_placement(&self) -> Option<Placement> {
        self.history.last().copied()
    }

    /// Cells of the completed line, once the game is won
    pub fn winning_line(&self) -> Option<Vec<Coord>> {
        if !matches!(self.status, GameStatus::Won { .. }) {
            return None;
        }
        let last = self.last_placement()?;
        self.grid
            .cell_at(last.coord.row, last.coord.col)?
            .winning_line(self.grid.line_length())
    }

    /// Play `column` for the current (human) player, then let any automated
    /// players that follow take their turns.
    ///
    /// Errors leave the game untouched: a finished game ignores moves, and a
    /// full or unknown column should be asked for again.
    pub fn play(&mut self, column: usize) -> Result<GameStatus, PlayError> {
        self.place(column)?;
        Ok(self.advance())
    }

    /// Play `column` for the current (human) player without running any
    /// automated turns afterwards
    pub fn place(&mut self, column: usize) -> Result<GameStatus, PlayError> {
        if self.status.is_over() {
            return Err(PlayError::GameOver);
        }
        let Participant::Human(player) = &self.players[self.current] else {
            return Err(PlayError::NotHumanTurn);
        };

        let Some(index) = player.attempt_move(&mut self.grid, column) else {
            warn!(player = player.name(), column, "illegal column");
            return Err(PlayError::IllegalColumn { column });
        };

        self.evaluate(index);
        Ok(self.status)
    }

    /// Run automated turns until a human is to move or the game is over
    pub fn advance(&mut self) -> GameStatus {
        while let Some(turn) = self.automated_turn() {
            if self.apply_automated(turn.search()).is_err() {
                break;
            }
        }
        self.status
    }

    /// Snapshot for the automated player to move, if one is up
    pub fn automated_turn(&self) -> Option<AutomatedTurn> {
        if self.status.is_over() {
            return None;
        }
        let Participant::Automated(automated) = &self.players[self.current] else {
            return None;
        };
        Some(AutomatedTurn {
            epoch: self.epoch,
            ply: self.history.len(),
            player: automated.clone(),
            grid: self.grid.clone(),
        })
    }

    /// Play the column an [`AutomatedTurn`] search settled on.
    ///
    /// The move must come from a snapshot of the current position; anything
    /// older is rejected with [`PlayError::StaleSearch`]. A search that found
    /// no legal move ends the game as a draw.
    pub fn apply_automated(&mut self, automated_move: AutomatedMove) -> Result<GameStatus, PlayError> {
        if self.status.is_over() {
            return Err(PlayError::GameOver);
        }
        if automated_move.epoch != self.epoch || automated_move.ply != self.history.len() {
            return Err(PlayError::StaleSearch);
        }
        let Participant::Automated(automated) = &mut self.players[self.current] else {
            return Err(PlayError::NotAutomatedTurn);
        };

        // Keep the searcher's counters and last result
        *automated = automated_move.player;

        let Some(column) = automated_move.result.column else {
            info!(player = automated.player().name(), "no legal move left, draw");
            self.status = GameStatus::Drawn;
            return Ok(self.status);
        };
        let Some(index) = automated.player().attempt_move(&mut self.grid, column) else {
            warn!(player = automated.player().name(), column, "searched column is not playable");
            return Err(PlayError::IllegalColumn { column });
        };

        self.evaluate(index);
        Ok(self.status)
    }

    /// Inspect the cell just filled and move the state machine on
    fn evaluate(&mut self, index: usize) {
        let Some(cell) = self.grid.cell(index) else {
            return;
        };
        let coord = cell.coord();
        let completed = cell.completes_line(self.grid.line_length());

        self.history.push(Placement {
            player: self.current,
            coord,
        });
        let name = self.players[self.current].name();
        info!(player = name, row = coord.row, col = coord.col, "token placed");

        if completed {
            info!(player = name, "line completed, game won");
            self.status = GameStatus::Won {
                winner: self.current,
            };
        } else if !self.grid.has_open_cell() {
            info!("grid full, draw");
            self.status = GameStatus::Drawn;
        } else {
            self.current = (self.current + 1) % self.players.len();
        }
    }

    /// Clear the grid and restart with player 0, keeping the same players
    pub fn reset(&mut self) {
        self.grid.reset();
        self.current = 0;
        self.status = GameStatus::AwaitingMove;
        self.history.clear();
        self.epoch = self.epoch.wrapping_add(1);
        info!("game reset");
    }
}
