//! Journal store: one JSON record per user
//!
//! Every append is load, push, save of the whole record. The repository hands
//! out one shared store, so writers inside one process are serialized by its
//! lock. Two processes writing the same user's record concurrently are still
//! last-writer-wins.

use crate::domain::{
    validate_username, Goal, GratitudeEntry, JournalEntry, JournalRecord, Memory, MoodEntry,
    SleepEntry,
};
use crate::error::Result;
use crate::infrastructure::repository::{read_json_or_default, write_json};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug)]
pub struct JournalStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JournalStore {
    pub fn new(dir: PathBuf) -> Self {
        JournalStore {
            dir,
            write_lock: Mutex::new(()),
        }
    }

    fn record_path(&self, username: &str) -> Result<PathBuf> {
        validate_username(username)?;
        Ok(self.dir.join(format!("{}.json", username)))
    }

    /// Load a user's record. A missing file is an empty record.
    pub fn load(&self, username: &str) -> Result<JournalRecord> {
        let path = self.record_path(username)?;
        tracing::debug!(username, path = %path.display(), "loading record");
        read_json_or_default(&path)
    }

    /// Overwrite a user's record unconditionally
    pub fn save(&self, username: &str, record: &JournalRecord) -> Result<()> {
        let path = self.record_path(username)?;
        tracing::debug!(username, path = %path.display(), "saving record");
        write_json(&path, record)
    }

    /// Load, apply `f`, save. The record is not written when `f` fails.
    pub fn modify<T>(
        &self,
        username: &str,
        f: impl FnOnce(&mut JournalRecord) -> Result<T>,
    ) -> Result<T> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut record = self.load(username)?;
        let out = f(&mut record)?;
        self.save(username, &record)?;
        Ok(out)
    }

    pub fn append_mood(&self, username: &str, entry: MoodEntry) -> Result<usize> {
        self.modify(username, |record| {
            record.moods.push(entry);
            Ok(record.moods.len())
        })
    }

    pub fn append_journal_entry(&self, username: &str, entry: JournalEntry) -> Result<usize> {
        self.modify(username, |record| {
            record.journal.push(entry);
            Ok(record.journal.len())
        })
    }

    pub fn append_gratitude(&self, username: &str, entry: GratitudeEntry) -> Result<usize> {
        self.modify(username, |record| {
            record.gratitude.push(entry);
            Ok(record.gratitude.len())
        })
    }

    pub fn append_sleep(&self, username: &str, entry: SleepEntry) -> Result<usize> {
        self.modify(username, |record| {
            record.sleep.push(entry);
            Ok(record.sleep.len())
        })
    }

    pub fn append_memory(&self, username: &str, memory: Memory) -> Result<usize> {
        self.modify(username, |record| {
            record.memories.push(memory);
            Ok(record.memories.len())
        })
    }

    pub fn append_goal(&self, username: &str, goal: Goal) -> Result<usize> {
        self.modify(username, |record| {
            record.goals.push(goal);
            Ok(record.goals.len())
        })
    }

    /// Set completion on the goal at zero-based `index`
    pub fn update_goal_completion(
        &self,
        username: &str,
        index: usize,
        completed: bool,
    ) -> Result<()> {
        self.modify(username, |record| record.set_goal_completed(index, completed))
    }

    /// Apply the login streak rule for a session starting `today`
    pub fn update_streak(&self, username: &str, today: NaiveDate) -> Result<u32> {
        let streak = self.modify(username, |record| Ok(record.update_streak(today)))?;
        tracing::debug!(username, streak, "streak updated");
        Ok(streak)
    }
}
