//! Aggregate statistics over a journal record

use crate::domain::{JournalRecord, Mood};
use serde::Serialize;

const TOP_MOODS: usize = 3;

/// Counts and averages derived from a record. Pure projection; nothing here
/// is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub mood_count: usize,
    pub journal_count: usize,
    pub gratitude_count: usize,
    pub sleep_count: usize,
    pub memory_count: usize,
    pub goal_count: usize,
    pub goals_completed: usize,
    pub total_words: usize,
    pub top_moods: Vec<(Mood, usize)>,
    pub average_intensity: Option<f64>,
    pub average_sleep_hours: Option<f64>,
    pub average_sleep_quality: Option<f64>,
    pub streak: u32,
}

impl Summary {
    pub fn from_record(record: &JournalRecord) -> Self {
        Summary {
            mood_count: record.moods.len(),
            journal_count: record.journal.len(),
            gratitude_count: record.gratitude.len(),
            sleep_count: record.sleep.len(),
            memory_count: record.memories.len(),
            goal_count: record.goals.len(),
            goals_completed: record.goals.iter().filter(|g| g.completed).count(),
            total_words: record.journal.iter().map(|e| e.word_count).sum(),
            top_moods: most_common_moods(record, TOP_MOODS),
            average_intensity: average(record.moods.iter().map(|m| f64::from(m.intensity))),
            average_sleep_hours: average(record.sleep.iter().map(|s| s.duration_hours)),
            average_sleep_quality: average(record.sleep.iter().map(|s| f64::from(s.quality))),
            streak: record.streak,
        }
    }

    pub fn goals_in_progress(&self) -> usize {
        self.goal_count - self.goals_completed
    }
}

/// Moods ranked by frequency. Ties keep the order in which each mood was
/// first logged.
pub fn most_common_moods(record: &JournalRecord, limit: usize) -> Vec<(Mood, usize)> {
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for entry in &record.moods {
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
