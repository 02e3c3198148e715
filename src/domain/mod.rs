//! Domain layer - Wellness records and the rules that govern them

pub mod account;
pub mod content;
pub mod entries;
pub mod mood;
pub mod record;
pub mod session;
pub mod summary;
pub mod time_ref;
pub mod vault;

pub use account::{validate_username, Account};
pub use entries::{Goal, GoalType, GratitudeEntry, JournalEntry, Memory, MoodEntry, SleepEntry};
pub use mood::Mood;
pub use record::JournalRecord;
pub use session::Session;
pub use summary::Summary;
pub use time_ref::DateRef;
