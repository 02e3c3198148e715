//! Interactive session context

use crate::error::{Result, TaraError};
use serde::{Deserialize, Serialize};

/// State that lives for one login: who is signed in and whether the
/// Memory Vault has been unlocked. Handlers receive it explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub username: Option<String>,
    pub vault_unlocked: bool,
}

impl Session {
    /// Begin a session for `username`. The vault always starts locked.
    pub fn start(&mut self, username: &str) {
        self.username = Some(username.to_string());
        self.vault_unlocked = false;
    }

    pub fn end(&mut self) {
        *self = Session::default();
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// The signed-in username, or `NotLoggedIn`
    pub fn user(&self) -> Result<&str> {
        self.username.as_deref().ok_or(TaraError::NotLoggedIn)
    }
}
