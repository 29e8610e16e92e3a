//! Configuration loading.

use crate::types::UserId;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Global operator identities, authorized in every chat.
    #[serde(default)]
    pub operators: Vec<UserId>,
    /// Moderation policy knobs.
    #[serde(default)]
    pub moderation: ModerationConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Moderation policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    /// Warn count that triggers an automatic ban.
    #[serde(default = "default_warn_limit")]
    pub warn_limit: u8,
    /// Mute duration, in minutes, applied when a command gives none.
    #[serde(default = "default_mute_minutes")]
    pub default_mute_minutes: u32,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            warn_limit: default_warn_limit(),
            default_mute_minutes: default_mute_minutes(),
        }
    }
}

fn default_warn_limit() -> u8 {
    3
}

fn default_mute_minutes() -> u32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.operators.is_empty());
        assert_eq!(config.moderation.warn_limit, 3);
        assert_eq!(config.moderation.default_mute_minutes, 60);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "operators = [234567890]\n\n[moderation]\nwarn_limit = 5"
        )
        .expect("write config");

        let config = Config::load(file.path()).expect("load config");
        assert_eq!(config.operators, vec![234567890]);
        assert_eq!(config.moderation.warn_limit, 5);
        // Unset fields fall back to defaults
        assert_eq!(config.moderation.default_mute_minutes, 60);
    }

    #[test]
    fn load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "operators = \"not a list\"").expect("write config");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
