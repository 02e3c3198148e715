//! Application layer - Use cases and orchestration

pub mod auth;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod tracker;
pub mod vault;

pub use auth::AuthService;
pub use export::{ExportService, ReportOptions, Section};
pub use manage_config::ConfigService;
pub use tracker::TrackerService;
pub use vault::VaultService;
