//! Entry types held by a journal record
//!
//! Constructors validate user input; deserialization does not, so documents
//! written by older versions still load.

use crate::domain::Mood;
use crate::error::{Result, TaraError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const MIN_SCORE: u8 = 1;
const MAX_SCORE: u8 = 10;
const MAX_SLEEP_HOURS: f64 = 24.0;

fn check_score(field: &str, value: u8) -> Result<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(TaraError::InvalidEntry(format!(
            "{} must be between {} and {}, got {}",
            field, MIN_SCORE, MAX_SCORE, value
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(alias = "date")]
    pub timestamp: NaiveDateTime,
    pub mood: Mood,
    pub intensity: u8,
    #[serde(default)]
    pub notes: String,
}

impl MoodEntry {
    pub fn new(timestamp: NaiveDateTime, mood: Mood, intensity: u8, notes: String) -> Result<Self> {
        check_score("Intensity", intensity)?;
        Ok(MoodEntry {
            timestamp,
            mood,
            intensity,
            notes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(alias = "date")]
    pub timestamp: NaiveDateTime,
    pub entry: String,
    #[serde(default)]
    pub word_count: usize,
}

impl JournalEntry {
    /// Word count is always derived from the text, never supplied.
    pub fn new(timestamp: NaiveDateTime, entry: String) -> Self {
        let word_count = count_words(&entry);
        JournalEntry {
            timestamp,
            entry,
            word_count,
        }
    }
}

/// Whitespace-separated token count
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratitudeEntry {
    #[serde(alias = "date")]
    pub timestamp: NaiveDateTime,
    #[serde(alias = "gratitude")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub date: NaiveDate,
    #[serde(alias = "duration")]
    pub duration_hours: f64,
    pub quality: u8,
}

impl SleepEntry {
    pub fn new(date: NaiveDate, duration_hours: f64, quality: u8) -> Result<Self> {
        if !duration_hours.is_finite() || !(0.0..=MAX_SLEEP_HOURS).contains(&duration_hours) {
            return Err(TaraError::InvalidEntry(format!(
                "Sleep duration must be between 0 and {} hours, got {}",
                MAX_SLEEP_HOURS, duration_hours
            )));
        }
        check_score("Sleep quality", quality)?;
        Ok(SleepEntry {
            date,
            duration_hours,
            quality,
        })
    }

    /// Short and poor-quality night
    pub fn is_poor(&self) -> bool {
        self.duration_hours < 5.0 && self.quality < 5
    }
}

/// A private memory. The image, when present, is a base64 blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(alias = "date")]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub title: String,
    #[serde(alias = "memory")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GoalType {
    #[default]
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl GoalType {
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::ShortTerm => "Short-term",
            GoalType::LongTerm => "Long-term",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub date_set: NaiveDateTime,
    #[serde(alias = "goal")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: GoalType,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    pub fn new(date_set: NaiveDateTime, text: String, kind: GoalType, deadline: NaiveDate) -> Self {
        Goal {
            date_set,
            text,
            kind,
            deadline,
            completed: false,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "In Progress"
        }
    }
}
