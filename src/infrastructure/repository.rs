//! File system repository
//!
//! Layout under a journal root:
//!
//! ```text
//! .tara/config.toml
//! .tara/session.toml
//! users.json
//! records/<username>.json
//! ```

use crate::domain::Session;
use crate::error::{Result, TaraError};
use crate::infrastructure::{AccountStore, Config, JournalStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

const MARKER_DIR: &str = ".tara";
const SESSION_FILE: &str = "session.toml";
const ACCOUNTS_FILE: &str = "users.json";
const RECORDS_DIR: &str = "records";

/// Abstract repository for journal roots
pub trait TaraRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tara/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tara/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tara directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tara directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the persisted session, or a logged-out one if none exists
    fn load_session(&self) -> Result<Session>;

    /// Persist the session between invocations
    fn save_session(&self, session: &Session) -> Result<()>;
}

/// File system implementation of TaraRepository.
///
/// The account and journal stores are built once and shared by every clone,
/// so all writers obtained from one repository go through the same locks.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    accounts: Arc<AccountStore>,
    journals: Arc<JournalStore>,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        let accounts = Arc::new(AccountStore::new(root.join(ACCOUNTS_FILE)));
        let journals = Arc::new(JournalStore::new(root.join(RECORDS_DIR)));
        FileSystemRepository {
            root,
            accounts,
            journals,
        }
    }

    /// Discover journal root by walking up from current directory.
    /// TARA_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TARA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TaraError::Config(format!(
                    "TARA_ROOT is set to '{}' but no .tara directory found. \
                    Run 'tara init' in that directory or unset TARA_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TaraError::NotTaraDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_marker_dir(path: &Path) -> bool {
        path.join(MARKER_DIR).is_dir()
    }

    fn session_path(&self) -> PathBuf {
        self.root.join(MARKER_DIR).join(SESSION_FILE)
    }

    pub fn records_dir(&self) -> PathBuf {
        self.root.join(RECORDS_DIR)
    }

    pub fn account_store(&self) -> Arc<AccountStore> {
        Arc::clone(&self.accounts)
    }

    pub fn journal_store(&self) -> Arc<JournalStore> {
        Arc::clone(&self.journals)
    }
}

impl TaraRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let marker = self.root.join(MARKER_DIR);

        if marker.exists() {
            return Err(TaraError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&marker)?;
        fs::create_dir_all(self.records_dir())?;
        Ok(())
    }

    fn load_session(&self) -> Result<Session> {
        match fs::read_to_string(self.session_path()) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(TaraError::Io(e)),
        }
    }

    fn save_session(&self, session: &Session) -> Result<()> {
        let contents = toml::to_string_pretty(session)?;
        write_atomic(&self.session_path(), &contents)
    }
}

/// Read a JSON document, falling back to `T::default()` when the file does
/// not exist. Any other I/O or parse failure is an error.
pub(crate) fn read_json_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(TaraError::Io(e)),
    }
}

/// Serialize `value` as pretty JSON and replace `path` with it
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    write_atomic(path, &contents)
}

/// Atomic replace: write a uniquely named temp file in the same directory,
/// then persist it over `path`. The temp file is removed if anything fails.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| TaraError::Io(e.error))?;
    Ok(())
}
