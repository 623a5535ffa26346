use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Rejected move requests. None of these change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("the game is over")]
    GameOver,

    #[error("column {column} is full or off the board")]
    IllegalColumn { column: usize },

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("it is not an automated player's turn")]
    NotAutomatedTurn,

    #[error("search result belongs to an earlier position")]
    StaleSearch,

    #[error("a game needs at least one player")]
    NoPlayers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("line_length must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: line_length must be at least 2"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("connect.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file connect.toml: missing"
        );
    }

    #[test]
    fn test_play_error_display() {
        assert_eq!(
            PlayError::IllegalColumn { column: 9 }.to_string(),
            "column 9 is full or off the board"
        );
        assert_eq!(PlayError::GameOver.to_string(), "the game is over");
        assert_eq!(PlayError::NoPlayers.to_string(), "a game needs at least one player");
    }
}
