use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Grid, Token, DEFAULT_COLUMNS, DEFAULT_LINE_LENGTH, DEFAULT_ROWS};
use crate::error::ConfigError;
use crate::player::{AutomatedPlayer, Participant, Player};
use crate::search::Searcher;

/// Longest winning run accepted; keeps heuristic values far from `i64` overflow
pub const MAX_LINE_LENGTH: usize = 16;
/// Deepest search accepted
pub const MAX_SEARCH_DEPTH: u32 = 10;

/// Who sits in the second seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human against the search-backed opponent
    #[default]
    VsComputer,
    /// Two humans sharing the board
    TwoPlayers,
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub line_length: usize,
    /// Plies searched by the computer player
    pub search_depth: u32,
    /// Alpha-beta pruning for the computer player
    pub alpha_beta: bool,
    pub mode: GameMode,
    /// Computer takes the first turn (only with `mode = "vs-computer"`)
    pub computer_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            line_length: DEFAULT_LINE_LENGTH,
            search_depth: 5,
            alpha_beta: true,
            mode: GameMode::VsComputer,
            computer_first: false,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Validation(format!(
                "grid must have at least one row and one column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.line_length < 2 || self.line_length > MAX_LINE_LENGTH {
            return Err(ConfigError::Validation(format!(
                "line_length must be between 2 and {MAX_LINE_LENGTH}, got {}",
                self.line_length
            )));
        }
        if self.line_length > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(format!(
                "line_length {} does not fit on a {}x{} grid",
                self.line_length, self.rows, self.columns
            )));
        }
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search_depth must be at most {MAX_SEARCH_DEPTH}, got {}",
                self.search_depth
            )));
        }
        Ok(())
    }

    /// Empty grid with the configured shape
    pub fn build_grid(&self) -> Grid {
        Grid::new(self.rows, self.columns, self.line_length)
    }

    /// Turn order for the configured mode.
    ///
    /// "Red" is always a human. "Blue" is the computer in
    /// [`GameMode::VsComputer`] and moves first when `computer_first` is set.
    pub fn build_players(&self) -> Vec<Participant> {
        let red = Participant::Human(Player::new("Red", Token::Player(0)));
        let blue_player = Player::new("Blue", Token::Player(1));

        match self.mode {
            GameMode::TwoPlayers => vec![red, Participant::Human(blue_player)],
            GameMode::VsComputer => {
                let searcher = Searcher::with_pruning(self.search_depth, self.alpha_beta);
                let blue = Participant::Automated(AutomatedPlayer::with_searcher(blue_player, searcher));
                if self.computer_first {
                    vec![blue, red]
                } else {
                    vec![red, blue]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
        assert_eq!(config.line_length, 4);
        assert_eq!(config.search_depth, 5);
        assert!(config.alpha_beta);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("columns = 9\nmode = \"two-players\"\n").unwrap();
        assert_eq!(config.columns, 9);
        assert_eq!(config.rows, 6);
        assert_eq!(config.mode, GameMode::TwoPlayers);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig {
            search_depth: 3,
            computer_first: true,
            ..GameConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            GameConfig { rows: 0, ..GameConfig::default() },
            GameConfig { line_length: 1, ..GameConfig::default() },
            GameConfig { line_length: MAX_LINE_LENGTH + 1, rows: 20, columns: 20, ..GameConfig::default() },
            GameConfig { line_length: 8, ..GameConfig::default() },
            GameConfig { search_depth: MAX_SEARCH_DEPTH + 1, ..GameConfig::default() },
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(ConfigError::Validation(_))), "{config:?}");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/nonexistent/connect_n.toml");
        assert!(matches!(GameConfig::load(path), Err(ConfigError::FileRead { .. })));
        assert_eq!(GameConfig::load_or_default(path).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_build_players() {
        let vs_computer = GameConfig::default().build_players();
        assert_eq!(vs_computer.len(), 2);
        assert!(!vs_computer[0].is_automated());
        assert!(vs_computer[1].is_automated());
        assert_eq!(vs_computer[0].token(), Token::Player(0));

        let computer_first = GameConfig {
            computer_first: true,
            ..GameConfig::default()
        }
        .build_players();
        assert!(computer_first[0].is_automated());
        assert_eq!(computer_first[0].name(), "Blue");

        let hotseat = GameConfig {
            mode: GameMode::TwoPlayers,
            ..GameConfig::default()
        }
        .build_players();
        assert!(hotseat.iter().all(|p| !p.is_automated()));
    }
}
