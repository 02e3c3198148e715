//! Memory Vault use cases
//!
//! The PIN gates access through the session only. Memories, including image
//! blobs, sit in the record in clear whether the vault is locked or not.

use crate::domain::vault::{is_supported_image, validate_pin};
use crate::domain::{Memory, Session};
use crate::error::{Result, TaraError};
use crate::infrastructure::credentials::{hash_secret, verify_secret};
use crate::infrastructure::{FileSystemRepository, JournalStore};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Local;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub struct VaultService {
    journals: Arc<JournalStore>,
}

fn require_unlocked(session: &Session) -> Result<&str> {
    let username = session.user()?;
    if session.vault_unlocked {
        Ok(username)
    } else {
        Err(TaraError::VaultLocked)
    }
}

impl VaultService {
    pub fn new(repository: &FileSystemRepository) -> Self {
        VaultService {
            journals: repository.journal_store(),
        }
    }

    /// Set the vault PIN once. The format is checked before anything is
    /// hashed or loaded.
    pub fn set_pin(&self, session: &Session, pin: &str) -> Result<()> {
        let username = session.user()?;
        validate_pin(pin)?;
        self.journals.modify(username, |record| {
            if record.has_vault() {
                return Err(TaraError::VaultAlreadyConfigured);
            }
            record.vault_password_hash = Some(hash_secret(pin)?);
            Ok(())
        })?;
        tracing::info!(username, "vault PIN set");
        Ok(())
    }

    /// Unlock for the rest of the session. A wrong PIN leaves it locked.
    pub fn unlock(&self, session: &mut Session, pin: &str) -> Result<()> {
        let username = session.user()?;
        let record = self.journals.load(username)?;
        let stored = record
            .vault_password_hash
            .as_deref()
            .ok_or(TaraError::VaultNotConfigured)?;
        if !verify_secret(pin, stored) {
            tracing::warn!(username, "vault unlock failed");
            return Err(TaraError::WrongPin);
        }
        session.vault_unlocked = true;
        Ok(())
    }

    pub fn lock(&self, session: &mut Session) {
        session.vault_unlocked = false;
    }

    /// Store a memory, optionally attaching an image file as base64
    pub fn add_memory(
        &self,
        session: &Session,
        title: String,
        text: String,
        image: Option<&Path>,
    ) -> Result<usize> {
        let username = require_unlocked(session)?;
        let image = image.map(encode_image).transpose()?;
        let memory = Memory {
            timestamp: Local::now().naive_local(),
            title,
            text,
            image,
        };
        self.journals.append_memory(username, memory)
    }

    pub fn memories(&self, session: &Session) -> Result<Vec<Memory>> {
        let username = require_unlocked(session)?;
        Ok(self.journals.load(username)?.memories)
    }

    /// Write a memory's image back out as a file
    pub fn export_image(&self, session: &Session, number: usize, dest: &Path) -> Result<()> {
        let memories = self.memories(session)?;
        let memory = number
            .checked_sub(1)
            .and_then(|i| memories.into_iter().nth(i))
            .ok_or_else(|| TaraError::InvalidEntry(format!("No memory #{}", number)))?;
        let blob = memory.image.ok_or_else(|| {
            TaraError::InvalidEntry(format!("Memory #{} has no image", number))
        })?;
        let bytes = STANDARD
            .decode(blob)
            .map_err(|e| TaraError::InvalidEntry(format!("Stored image is corrupt: {}", e)))?;
        fs::write(dest, bytes)?;
        Ok(())
    }
}

fn encode_image(path: &Path) -> Result<String> {
    if !is_supported_image(path) {
        return Err(TaraError::InvalidEntry(format!(
            "Unsupported image '{}': use png, jpg or jpeg",
            path.display()
        )));
    }
    let bytes = fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}
