//! Error types for tara

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tara application
#[derive(Debug, Error)]
pub enum TaraError {
    #[error("Not a tara directory: {0}")]
    NotTaraDirectory(PathBuf),

    #[error("Username already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid or expired reset token")]
    InvalidToken,

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Invalid vault PIN: must be exactly 4 digits")]
    InvalidPin,

    #[error("Incorrect vault PIN")]
    WrongPin,

    #[error("Memory Vault has no PIN set")]
    VaultNotConfigured,

    #[error("Memory Vault already has a PIN")]
    VaultAlreadyConfigured,

    #[error("Memory Vault is locked")]
    VaultLocked,

    #[error("Goal not found: #{0}")]
    GoalNotFound(usize),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("No data available for export")]
    NoData,

    #[error("Unsupported account file layout: {0}")]
    LegacyAccountFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TaraError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TaraError::NotTaraDirectory(_) => 2,
            TaraError::NotLoggedIn | TaraError::InvalidCredentials => 3,
            TaraError::VaultLocked | TaraError::WrongPin | TaraError::InvalidPin => 4,
            TaraError::AlreadyExists(_) => 5,
            _ => 1,
        }
    }

    /// Whether this error is an internal failure rather than a user mistake
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            TaraError::Io(_)
                | TaraError::Json(_)
                | TaraError::Csv(_)
                | TaraError::Credential(_)
                | TaraError::TomlDeserialize(_)
                | TaraError::TomlSerialize(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TaraError::NotTaraDirectory(path) => {
                format!(
                    "Not a tara directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tara init' in this directory to create a new journal\n\
                    • Navigate to an existing tara directory\n\
                    • Set TARA_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            TaraError::NotLoggedIn => "Not logged in\n\n\
                Suggestions:\n\
                • Log in: tara login <username> <password>\n\
                • Create an account first: tara signup <username> <password>"
                .to_string(),
            TaraError::AlreadyExists(name) => {
                format!(
                    "Username already exists: '{}'\n\n\
                    Suggestions:\n\
                    • Choose a different username\n\
                    • Log in instead: tara login {} <password>",
                    name, name
                )
            }
            TaraError::VaultLocked => "Memory Vault is locked\n\n\
                Unlock it first: tara vault unlock <pin>"
                .to_string(),
            TaraError::VaultNotConfigured => "Memory Vault has no PIN set\n\n\
                Set one first: tara vault set-pin <4-digit pin>"
                .to_string(),
            TaraError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • in 3 days, in 30 days\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD",
                    ref_str
                )
            }
            TaraError::LegacyAccountFile(path) => {
                format!(
                    "Unsupported account file layout: {}\n\n\
                    This file maps usernames straight to password hashes, which tara\n\
                    cannot verify. Journal records are still readable.\n\n\
                    Suggestions:\n\
                    • Move the file aside and sign up again: tara signup <username> <password>",
                    path.display()
                )
            }
            TaraError::NoData => "No data available for export\n\n\
                Start using the app to generate data, e.g. tara mood happy"
                .to_string(),
            _ if self.is_internal() => format!("An error occurred: {}", self),
            _ => self.to_string(),
        }
    }
}

/// Result type using TaraError
pub type Result<T> = std::result::Result<T, TaraError>;
