//! Signup, login and password reset use cases

use crate::domain::Session;
use crate::error::{Result, TaraError};
use crate::infrastructure::{AccountStore, FileSystemRepository, JournalStore};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Outcome of a successful login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub streak: u32,
}

pub struct AuthService {
    accounts: Arc<AccountStore>,
    journals: Arc<JournalStore>,
}

impl AuthService {
    pub fn new(repository: &FileSystemRepository) -> Self {
        AuthService {
            accounts: repository.account_store(),
            journals: repository.journal_store(),
        }
    }

    pub fn signup(&self, username: &str, password: &str, email: Option<String>) -> Result<()> {
        self.accounts.register(username, password, email)
    }

    /// Authenticate and start a session dated today
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome> {
        self.login_on(session, username, password, Local::now().date_naive())
    }

    /// Authenticate and start a session as if it were `today`. The streak is
    /// updated once, here.
    pub fn login_on(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<LoginOutcome> {
        if !self.accounts.authenticate(username, password)? {
            return Err(TaraError::InvalidCredentials);
        }
        let streak = self.journals.update_streak(username, today)?;
        session.start(username);
        tracing::info!(username, streak, "logged in");
        Ok(LoginOutcome { streak })
    }

    pub fn logout(&self, session: &mut Session) {
        if let Some(username) = session.username.as_deref() {
            tracing::info!(username, "logged out");
        }
        session.end();
    }

    pub fn request_reset(&self, username: &str) -> Result<String> {
        self.accounts.request_password_reset(username)
    }

    pub fn reset_password(&self, token: &str, new_password: &str) -> Result<String> {
        self.accounts.reset_password(token, new_password)
    }
}
