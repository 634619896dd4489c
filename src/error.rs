use std::path::PathBuf;

/// Errors that can occur when drawing a batch from the replay buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("cannot sample {requested} transitions from a buffer holding {available}")]
    InsufficientData { requested: usize, available: usize },
}

/// Errors that can occur when building a board tensor from raw data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    #[error("tensor data has {actual} values, expected {expected} ({channels}x{size}x{size})")]
    ShapeMismatch {
        channels: usize,
        size: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors that can occur when placing a stone on a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// Errors that can occur when writing the episode log.
#[derive(Debug, thiserror::Error)]
pub enum EpisodeLogError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write episode log {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::InsufficientData {
            requested: 64,
            available: 10,
        };
        assert_eq!(
            err.to_string(),
            "cannot sample 64 transitions from a buffer holding 10"
        );
    }

    #[test]
    fn test_tensor_error_display() {
        let err = TensorError::ShapeMismatch {
            channels: 3,
            size: 15,
            expected: 675,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "tensor data has 10 values, expected 675 (3x15x15)"
        );
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::Occupied { row: 7, col: 7 };
        assert_eq!(err.to_string(), "cell (7, 7) is already occupied");
    }

    #[test]
    fn test_episode_log_error_display() {
        let err = EpisodeLogError::CreateDir {
            path: PathBuf::from("logs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to create log directory logs: denied"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("replay.capacity must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: replay.capacity must be > 0"
        );
    }
}
