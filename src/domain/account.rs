//! Account model and username rules

use crate::error::{Result, TaraError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn username_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,63}$").unwrap())
}

/// A registered user. Never deleted; only the reset flow mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token: Option<String>,
}

impl Account {
    pub fn new(username: String, password_hash: String, email: Option<String>) -> Self {
        Account {
            username,
            password_hash,
            email,
            reset_token: None,
        }
    }
}

/// Usernames double as record file names, so they are restricted to a
/// filesystem-safe alphabet.
pub fn validate_username(username: &str) -> Result<()> {
    if username_regex().is_match(username) {
        Ok(())
    } else {
        Err(TaraError::InvalidUsername(format!(
            "'{}' (use letters, digits, '.', '_' or '-', starting with a letter or digit)",
            username
        )))
    }
}
