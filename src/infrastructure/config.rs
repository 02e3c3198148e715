//! Configuration management

use crate::error::{TaraError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_RECENT_ENTRIES: usize = 5;
const DEFAULT_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Default tracing filter when TARA_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How many journal and gratitude entries the report shows
    #[serde(default = "default_recent_entries")]
    pub report_recent_entries: usize,
    /// Characters of each entry quoted in the report
    #[serde(default = "default_excerpt_chars")]
    pub report_excerpt_chars: usize,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_recent_entries() -> usize {
    DEFAULT_RECENT_ENTRIES
}

fn default_excerpt_chars() -> usize {
    DEFAULT_EXCERPT_CHARS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            log_level: default_log_level(),
            report_recent_entries: DEFAULT_RECENT_ENTRIES,
            report_excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    /// Load config from .tara/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tara").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaraError::NotTaraDirectory(path.to_path_buf())
            } else {
                TaraError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TaraError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tara/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tara_dir = path.join(".tara");
        let config_path = tara_dir.join("config.toml");

        if !tara_dir.exists() {
            fs::create_dir(&tara_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TaraError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.report_recent_entries, 5);
        assert_eq!(config.report_excerpt_chars, 200);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.report_recent_entries = 3;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".tara").exists());
        assert!(temp.path().join(".tara/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_default() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".tara")).unwrap();
        fs::write(
            temp.path().join(".tara/config.toml"),
            "created = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.report_excerpt_chars, 200);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            TaraError::NotTaraDirectory(_) => {}
            other => panic!("Expected NotTaraDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_garbled_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".tara")).unwrap();
        fs::write(temp.path().join(".tara/config.toml"), "not = [valid").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            TaraError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
