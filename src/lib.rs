//! tara - Personal wellness journal
//!
//! Records moods, journal entries, gratitude notes, sleep and goals per user
//! in plain JSON files, with an optional PIN-gated Memory Vault and
//! summary/CSV/report exports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TaraError;
