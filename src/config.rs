use std::path::Path;

use crate::error::ConfigError;
use crate::training::collector::CollectConfig;
use crate::training::replay_buffer::ReplayConfig;
use crate::training::reward::RewardConfig;

/// Board geometry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { size: 15 }
    }
}

/// Top-level application configuration, loadable from TOML.
///
/// Loaded once at startup; components receive the section they need at
/// construction and never read it again.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub replay: ReplayConfig,
    pub rewards: RewardConfig,
    pub collect: CollectConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.size == 0 {
            return Err(ConfigError::Validation("board.size must be > 0".into()));
        }
        if self.replay.capacity == 0 {
            return Err(ConfigError::Validation(
                "replay.capacity must be > 0".into(),
            ));
        }
        if self.replay.batch_size == 0 {
            return Err(ConfigError::Validation(
                "replay.batch_size must be > 0".into(),
            ));
        }
        if self.replay.capacity < self.replay.batch_size {
            return Err(ConfigError::Validation(
                "replay.capacity must be >= replay.batch_size".into(),
            ));
        }

        let rewards = [
            ("rewards.threat_2", self.rewards.threat_2),
            ("rewards.threat_3", self.rewards.threat_3),
            ("rewards.threat_4", self.rewards.threat_4),
            ("rewards.block_3", self.rewards.block_3),
            ("rewards.block_4", self.rewards.block_4),
        ];
        for (name, value) in rewards {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{name} must be finite")));
            }
        }

        if self.collect.episodes == 0 {
            return Err(ConfigError::Validation(
                "collect.episodes must be > 0".into(),
            ));
        }
        if self.collect.log_interval == 0 {
            return Err(ConfigError::Validation(
                "collect.log_interval must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
