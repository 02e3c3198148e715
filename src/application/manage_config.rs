//! Config management use case

use crate::error::{TaraError, Result};
use crate::infrastructure::logging::is_valid_filter;
use crate::infrastructure::{Config, FileSystemRepository, TaraRepository};

const VALID_KEYS: &str = "log_level, report_recent_entries, report_excerpt_chars, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "log_level" => Ok(config.log_level),
            "report_recent_entries" => Ok(config.report_recent_entries.to_string()),
            "report_excerpt_chars" => Ok(config.report_excerpt_chars.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TaraError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "log_level" => {
                if !is_valid_filter(value) {
                    return Err(TaraError::Config(format!(
                        "Invalid log level: '{}'. Try error, warn, info, debug or trace",
                        value
                    )));
                }
                config.log_level = value.to_string();
            }
            "report_recent_entries" => config.report_recent_entries = parse_count(key, value)?,
            "report_excerpt_chars" => config.report_excerpt_chars = parse_count(key, value)?,
            "created" => {
                return Err(TaraError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TaraError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            TaraError::Config(format!(
                "'{}' must be a positive whole number, got '{}'",
                key, value
            ))
        })
}
