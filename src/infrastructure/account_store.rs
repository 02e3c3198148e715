//! Account store backed by a single JSON document

use crate::domain::{validate_username, Account};
use crate::error::{Result, TaraError};
use crate::infrastructure::credentials::{generate_reset_token, hash_secret, verify_secret};
use crate::infrastructure::repository::{read_json_or_default, write_json};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

type AccountMap = BTreeMap<String, Account>;

/// All accounts, keyed by username, in one file. Every mutation rewrites the
/// whole document while holding the store's write lock.
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AccountStore {
    pub fn new(path: PathBuf) -> Self {
        AccountStore {
            path,
            write_lock: Mutex::new(()),
        }
    }

    fn load_all(&self) -> Result<AccountMap> {
        match read_json_or_default(&self.path) {
            Err(TaraError::Json(e)) if self.is_legacy_layout() => {
                tracing::warn!(path = %self.path.display(), error = %e, "legacy account file");
                Err(TaraError::LegacyAccountFile(self.path.clone()))
            }
            other => other,
        }
    }

    /// A flat `username -> hash` map written by older tools
    fn is_legacy_layout(&self) -> bool {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str::<BTreeMap<String, String>>(&contents).ok())
            .is_some()
    }

    /// Read-modify-write of the account document under the write lock.
    /// Nothing is written when `f` fails.
    fn modify<T>(&self, f: impl FnOnce(&mut AccountMap) -> Result<T>) -> Result<T> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut accounts = self.load_all()?;
        let out = f(&mut accounts)?;
        write_json(&self.path, &accounts)?;
        Ok(out)
    }

    pub fn get(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.load_all()?.remove(username))
    }

    /// Create an account. Fails with `AlreadyExists` without touching the
    /// file when the username is taken.
    pub fn register(&self, username: &str, password: &str, email: Option<String>) -> Result<()> {
        validate_username(username)?;
        self.modify(|accounts| {
            if accounts.contains_key(username) {
                return Err(TaraError::AlreadyExists(username.to_string()));
            }
            let hash = hash_secret(password)?;
            accounts.insert(
                username.to_string(),
                Account::new(username.to_string(), hash, email),
            );
            Ok(())
        })?;
        tracing::info!(username, "account registered");
        Ok(())
    }

    /// True only for a known user whose password verifies
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let ok = self
            .get(username)?
            .is_some_and(|account| verify_secret(password, &account.password_hash));
        if !ok {
            tracing::warn!(username, "authentication failed");
        }
        Ok(ok)
    }

    /// Issue a fresh reset token for `username`, replacing any earlier one
    pub fn request_password_reset(&self, username: &str) -> Result<String> {
        let token = self.modify(|accounts| {
            let account = accounts
                .get_mut(username)
                .ok_or_else(|| TaraError::UnknownUser(username.to_string()))?;
            let token = generate_reset_token();
            account.reset_token = Some(token.clone());
            Ok(token)
        })?;
        tracing::info!(username, "password reset requested");
        Ok(token)
    }

    /// Set a new password on the account holding `token`, then clear the
    /// token so it cannot be replayed. Returns the username.
    pub fn reset_password(&self, token: &str, new_password: &str) -> Result<String> {
        let username = self.modify(|accounts| {
            let account = accounts
                .values_mut()
                .find(|a| !token.is_empty() && a.reset_token.as_deref() == Some(token))
                .ok_or(TaraError::InvalidToken)?;
            account.password_hash = hash_secret(new_password)?;
            account.reset_token = None;
            Ok(account.username.clone())
        })?;
        tracing::info!(username = %username, "password reset");
        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> AccountStore {
        AccountStore::new(temp.path().join("users.json"))
    }

    #[test]
    fn test_register_then_authenticate() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);

        accounts.register("alice", "pw123456", None).unwrap();

        assert!(accounts.authenticate("alice", "pw123456").unwrap());
        assert!(!accounts.authenticate("alice", "wrong").unwrap());
        assert!(!accounts.authenticate("bob", "pw123456").unwrap());
    }

    #[test]
    fn test_duplicate_register_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);

        accounts.register("alice", "pw123456", None).unwrap();
        let before = fs::read_to_string(temp.path().join("users.json")).unwrap();

        match accounts.register("alice", "anything", None) {
            Err(TaraError::AlreadyExists(name)) => assert_eq!(name, "alice"),
            other => panic!("Expected AlreadyExists, got {:?}", other),
        }

        let after = fs::read_to_string(temp.path().join("users.json")).unwrap();
        assert_eq!(before, after);
        assert!(accounts.authenticate("alice", "pw123456").unwrap());
    }

    #[test]
    fn test_register_rejects_bad_username() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);

        assert!(matches!(
            accounts.register("../evil", "pw", None),
            Err(TaraError::InvalidUsername(_))
        ));
        assert!(!temp.path().join("users.json").exists());
    }

    #[test]
    fn test_password_not_stored_in_clear() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);
        accounts
            .register("alice", "pw123456", Some("a@example.com".into()))
            .unwrap();

        let raw = fs::read_to_string(temp.path().join("users.json")).unwrap();
        assert!(!raw.contains("pw123456"));
        assert!(raw.contains("a@example.com"));
    }

    #[test]
    fn test_reset_flow_clears_token() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);
        accounts.register("alice", "old-pass", None).unwrap();

        let token = accounts.request_password_reset("alice").unwrap();
        assert_eq!(
            accounts.get("alice").unwrap().unwrap().reset_token.as_deref(),
            Some(token.as_str())
        );

        assert_eq!(accounts.reset_password(&token, "new-pass").unwrap(), "alice");
        assert!(accounts.authenticate("alice", "new-pass").unwrap());
        assert!(!accounts.authenticate("alice", "old-pass").unwrap());
        assert_eq!(accounts.get("alice").unwrap().unwrap().reset_token, None);

        assert!(matches!(
            accounts.reset_password(&token, "again"),
            Err(TaraError::InvalidToken)
        ));
    }

    #[test]
    fn test_reset_with_unknown_token() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);
        accounts.register("alice", "pw", None).unwrap();

        assert!(matches!(
            accounts.reset_password("deadbeef", "x"),
            Err(TaraError::InvalidToken)
        ));
        assert!(matches!(
            accounts.reset_password("", "x"),
            Err(TaraError::InvalidToken)
        ));
    }

    #[test]
    fn test_reset_request_unknown_user() {
        let temp = TempDir::new().unwrap();
        let accounts = store(&temp);

        assert!(matches!(
            accounts.request_password_reset("ghost"),
            Err(TaraError::UnknownUser(_))
        ));
    }

    #[test]
    fn test_legacy_flat_account_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        fs::write(&path, r#"{"alice": "9f86d081884c7d659a2feaa0c55ad015"}"#).unwrap();
        let accounts = store(&temp);

        match accounts.authenticate("alice", "test") {
            Err(TaraError::LegacyAccountFile(p)) => assert_eq!(p, path),
            other => panic!("Expected LegacyAccountFile, got {:?}", other),
        }
        assert!(matches!(
            accounts.register("bob", "pw", None),
            Err(TaraError::LegacyAccountFile(_))
        ));
        assert!(fs::read_to_string(&path).unwrap().contains("9f86d081"));
    }

    #[test]
    fn test_corrupt_account_file_stays_json_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("users.json"), "{ broken").unwrap();

        assert!(matches!(store(&temp).get("alice"), Err(TaraError::Json(_))));
    }
}
