//! Logging moods, journal entries, gratitude, sleep and goals

use crate::domain::{
    Goal, GoalType, GratitudeEntry, JournalEntry, JournalRecord, Mood, MoodEntry, Session,
    SleepEntry,
};
use crate::error::{Result, TaraError};
use crate::infrastructure::{FileSystemRepository, JournalStore};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// Service for the signed-in user's everyday entries
pub struct TrackerService {
    journals: Arc<JournalStore>,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn require_text(field: &str, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(TaraError::InvalidEntry(format!("{} cannot be empty", field)))
    } else {
        Ok(())
    }
}

impl TrackerService {
    pub fn new(repository: &FileSystemRepository) -> Self {
        TrackerService {
            journals: repository.journal_store(),
        }
    }

    pub fn record(&self, session: &Session) -> Result<JournalRecord> {
        self.journals.load(session.user()?)
    }

    pub fn log_mood(
        &self,
        session: &Session,
        mood: Mood,
        intensity: u8,
        notes: String,
    ) -> Result<MoodEntry> {
        let username = session.user()?;
        let entry = MoodEntry::new(now(), mood, intensity, notes)?;
        self.journals.append_mood(username, entry.clone())?;
        Ok(entry)
    }

    pub fn write_entry(&self, session: &Session, text: String) -> Result<JournalEntry> {
        let username = session.user()?;
        require_text("Journal entry", &text)?;
        let entry = JournalEntry::new(now(), text);
        self.journals.append_journal_entry(username, entry.clone())?;
        Ok(entry)
    }

    pub fn log_gratitude(&self, session: &Session, text: String) -> Result<GratitudeEntry> {
        let username = session.user()?;
        require_text("Gratitude", &text)?;
        let entry = GratitudeEntry {
            timestamp: now(),
            text,
        };
        self.journals.append_gratitude(username, entry.clone())?;
        Ok(entry)
    }

    /// Record a night's sleep. Callers check `is_poor()` on the result to
    /// decide whether to show sleep advice.
    pub fn log_sleep(
        &self,
        session: &Session,
        date: NaiveDate,
        hours: f64,
        quality: u8,
    ) -> Result<SleepEntry> {
        let username = session.user()?;
        let entry = SleepEntry::new(date, hours, quality)?;
        self.journals.append_sleep(username, entry.clone())?;
        Ok(entry)
    }

    /// Add a goal and return its 1-based number
    pub fn add_goal(
        &self,
        session: &Session,
        text: String,
        kind: GoalType,
        deadline: NaiveDate,
    ) -> Result<usize> {
        let username = session.user()?;
        require_text("Goal", &text)?;
        self.journals
            .append_goal(username, Goal::new(now(), text, kind, deadline))
    }

    pub fn goals(&self, session: &Session) -> Result<Vec<Goal>> {
        Ok(self.record(session)?.goals)
    }

    /// Mark goal number `number` (1-based, as listed) done or not done
    pub fn set_goal_completed(
        &self,
        session: &Session,
        number: usize,
        completed: bool,
    ) -> Result<()> {
        let username = session.user()?;
        let index = number.checked_sub(1).ok_or(TaraError::GoalNotFound(number))?;
        self.journals
            .update_goal_completion(username, index, completed)
    }
}
