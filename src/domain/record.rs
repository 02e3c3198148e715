//! The per-user journal record aggregate

use crate::domain::{Goal, GratitudeEntry, JournalEntry, Memory, MoodEntry, SleepEntry};
use crate::error::{Result, TaraError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a user has logged. Lists only grow; the only in-place
/// mutations are goal completion and the login streak.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalRecord {
    pub moods: Vec<MoodEntry>,
    pub journal: Vec<JournalEntry>,
    pub gratitude: Vec<GratitudeEntry>,
    pub sleep: Vec<SleepEntry>,
    pub memories: Vec<Memory>,
    pub goals: Vec<Goal>,
    #[serde(alias = "memory_vault_password")]
    pub vault_password_hash: Option<String>,
    pub streak: u32,
    pub last_login: Option<NaiveDate>,
}

impl JournalRecord {
    /// True when no entries of any kind have been logged
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
            && self.journal.is_empty()
            && self.gratitude.is_empty()
            && self.sleep.is_empty()
            && self.memories.is_empty()
            && self.goals.is_empty()
    }

    pub fn has_vault(&self) -> bool {
        self.vault_password_hash.is_some()
    }

    /// Apply the login streak rule for a session starting on `today`.
    ///
    /// Same day leaves the streak alone, the day after extends it, anything
    /// else (older, missing, or a date in the future) restarts it at 1.
    pub fn update_streak(&mut self, today: NaiveDate) -> u32 {
        self.streak = match self.last_login {
            Some(last) if last == today => self.streak,
            Some(last) if last.succ_opt() == Some(today) => self.streak.saturating_add(1),
            _ => 1,
        };
        self.last_login = Some(today);
        self.streak
    }

    /// Set the completion flag of the goal at `index` (zero-based)
    pub fn set_goal_completed(&mut self, index: usize, completed: bool) -> Result<()> {
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(TaraError::GoalNotFound(index + 1))?;
        goal.completed = completed;
        Ok(())
    }
}
