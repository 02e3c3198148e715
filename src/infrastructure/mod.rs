//! Infrastructure layer - External I/O and persistence

pub mod account_store;
pub mod config;
pub mod credentials;
pub mod journal_store;
pub mod logging;
pub mod repository;

pub use account_store::AccountStore;
pub use config::Config;
pub use journal_store::JournalStore;
pub use repository::{FileSystemRepository, TaraRepository};
