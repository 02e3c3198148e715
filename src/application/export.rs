//! Export use cases: summary, text report, CSV and JSON
//!
//! Everything here is a projection of a record. PDF and chart rendering are
//! left to whatever consumes the report text.

use crate::domain::{JournalRecord, Session, Summary};
use crate::error::{Result, TaraError};
use crate::infrastructure::{Config, FileSystemRepository, JournalStore};
use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record list that can be exported as CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Moods,
    Journal,
    Gratitude,
    Sleep,
    Goals,
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moods" | "mood" => Ok(Section::Moods),
            "journal" => Ok(Section::Journal),
            "gratitude" => Ok(Section::Gratitude),
            "sleep" => Ok(Section::Sleep),
            "goals" | "goal" => Ok(Section::Goals),
            _ => Err(format!(
                "Invalid section: '{}'. Valid sections are: moods, journal, gratitude, sleep, goals",
                s
            )),
        }
    }
}

/// Report layout knobs, taken from config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub recent_entries: usize,
    pub excerpt_chars: usize,
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        ReportOptions {
            recent_entries: config.report_recent_entries,
            excerpt_chars: config.report_excerpt_chars,
        }
    }
}

pub struct ExportService {
    journals: Arc<JournalStore>,
    options: ReportOptions,
}

impl ExportService {
    pub fn new(repository: &FileSystemRepository, config: &Config) -> Self {
        ExportService {
            journals: repository.journal_store(),
            options: ReportOptions::from(config),
        }
    }

    pub fn summary(&self, session: &Session) -> Result<Summary> {
        Ok(Summary::from_record(&self.journals.load(session.user()?)?))
    }

    fn exportable(&self, session: &Session) -> Result<(String, JournalRecord)> {
        let username = session.user()?;
        let record = self.journals.load(username)?;
        if record.is_empty() {
            return Err(TaraError::NoData);
        }
        Ok((username.to_string(), record))
    }

    pub fn report(&self, session: &Session) -> Result<String> {
        let (username, record) = self.exportable(session)?;
        Ok(render_report(&username, &record, self.options))
    }

    pub fn csv(&self, session: &Session, section: Section) -> Result<String> {
        let (_, record) = self.exportable(session)?;
        render_csv(&record, section)
    }

    /// Pretty JSON of the record. The vault hash is never included, and
    /// memories only appear while the vault is unlocked.
    pub fn json(&self, session: &Session) -> Result<String> {
        let (_, mut record) = self.exportable(session)?;
        record.vault_password_hash = None;
        if !session.vault_unlocked {
            record.memories.clear();
        }
        Ok(serde_json::to_string_pretty(&record)?)
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn recent<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Plain-text wellness report: top moods, recent journal and gratitude
/// entries, sleep averages and every goal with its status. Memories are
/// never part of the report.
pub fn render_report(username: &str, record: &JournalRecord, options: ReportOptions) -> String {
    let summary = Summary::from_record(record);
    let mut out = String::new();
    let title = format!("Mental Health Report for {}", username);
    let _ = writeln!(out, "{}\n{}", title, "=".repeat(title.chars().count()));

    if !summary.top_moods.is_empty() {
        let _ = writeln!(out, "\nMood Summary:");
        for (mood, count) in &summary.top_moods {
            let plural = if *count == 1 { "time" } else { "times" };
            let _ = writeln!(out, "  {}: {} {}", mood, count, plural);
        }
    }

    if !record.journal.is_empty() {
        let _ = writeln!(out, "\nJournal Entries:");
        for entry in recent(&record.journal, options.recent_entries) {
            let _ = writeln!(out, "  Date: {}", entry.timestamp.format(DATE_FORMAT));
            let _ = writeln!(out, "  Entry: {}\n", excerpt(&entry.entry, options.excerpt_chars));
        }
    }

    if !record.gratitude.is_empty() {
        let _ = writeln!(out, "\nGratitude Logs:");
        for entry in recent(&record.gratitude, options.recent_entries) {
            let _ = writeln!(out, "  Date: {}", entry.timestamp.format(DATE_FORMAT));
            let _ = writeln!(out, "  Gratitude: {}\n", excerpt(&entry.text, options.excerpt_chars));
        }
    }

    if let (Some(hours), Some(quality)) =
        (summary.average_sleep_hours, summary.average_sleep_quality)
    {
        let _ = writeln!(out, "\nSleep Summary:");
        let _ = writeln!(out, "  Average sleep duration: {:.2} hours", hours);
        let _ = writeln!(out, "  Average sleep quality: {:.2}/10", quality);
    }

    if !record.goals.is_empty() {
        let _ = writeln!(out, "\nGoals:");
        for goal in &record.goals {
            let _ = writeln!(out, "  Goal: {}", goal.text);
            let _ = writeln!(out, "  Type: {}", goal.kind.label());
            let _ = writeln!(out, "  Deadline: {}", goal.deadline.format(DATE_FORMAT));
            let _ = writeln!(out, "  Status: {}\n", goal.status());
        }
    }

    out
}

/// One section as CSV with a header row
pub fn render_csv(record: &JournalRecord, section: Section) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match section {
        Section::Moods => {
            writer.write_record(["timestamp", "mood", "intensity", "notes"])?;
            for m in &record.moods {
                writer.write_record([
                    m.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    m.mood.to_string(),
                    m.intensity.to_string(),
                    m.notes.clone(),
                ])?;
            }
        }
        Section::Journal => {
            writer.write_record(["timestamp", "word_count", "entry"])?;
            for e in &record.journal {
                writer.write_record([
                    e.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    e.word_count.to_string(),
                    e.entry.clone(),
                ])?;
            }
        }
        Section::Gratitude => {
            writer.write_record(["timestamp", "text"])?;
            for g in &record.gratitude {
                writer.write_record([
                    g.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    g.text.clone(),
                ])?;
            }
        }
        Section::Sleep => {
            writer.write_record(["date", "duration_hours", "quality"])?;
            for s in &record.sleep {
                writer.write_record([
                    s.date.format(DATE_FORMAT).to_string(),
                    s.duration_hours.to_string(),
                    s.quality.to_string(),
                ])?;
            }
        }
        Section::Goals => {
            writer.write_record(["date_set", "text", "type", "deadline", "completed"])?;
            for g in &record.goals {
                writer.write_record([
                    g.date_set.format(TIMESTAMP_FORMAT).to_string(),
                    g.text.clone(),
                    g.kind.label().to_string(),
                    g.deadline.format(DATE_FORMAT).to_string(),
                    g.completed.to_string(),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TaraError::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| TaraError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Goal, GoalType, GratitudeEntry, JournalEntry, Memory, Mood, MoodEntry, SleepEntry,
    };
    use crate::infrastructure::TaraRepository;
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;

    fn ts(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, day)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap()
    }

    fn options() -> ReportOptions {
        ReportOptions {
            recent_entries: 2,
            excerpt_chars: 10,
        }
    }

    fn sample() -> JournalRecord {
        JournalRecord {
            moods: vec![
                MoodEntry::new(ts(1), Mood::Happy, 7, "sun, finally".into()).unwrap(),
                MoodEntry::new(ts(2), Mood::Happy, 6, String::new()).unwrap(),
                MoodEntry::new(ts(3), Mood::Calm, 5, String::new()).unwrap(),
            ],
            journal: vec![
                JournalEntry::new(ts(1), "first entry".into()),
                JournalEntry::new(ts(2), "second entry".into()),
                JournalEntry::new(ts(3), "a much longer third entry".into()),
            ],
            gratitude: vec![GratitudeEntry {
                timestamp: ts(2),
                text: "Family".into(),
            }],
            sleep: vec![
                SleepEntry::new(ts(1).date(), 6.0, 6).unwrap(),
                SleepEntry::new(ts(2).date(), 8.0, 9).unwrap(),
            ],
            goals: vec![Goal::new(
                ts(1),
                "Meditate daily".into(),
                GoalType::ShortTerm,
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            )],
            memories: vec![Memory {
                timestamp: ts(4),
                title: "Secret".into(),
                text: "top secret".into(),
                image: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_section_parse() {
        assert_eq!(Section::from_str("Moods").unwrap(), Section::Moods);
        assert_eq!(Section::from_str("goal").unwrap(), Section::Goals);
        assert!(Section::from_str("memories").is_err());
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("exactly10!", 10), "exactly10!");
        assert_eq!(excerpt("ñandú ñandú", 5), "ñandú...");
    }

    #[test]
    fn test_report_sections() {
        let report = render_report("alice", &sample(), options());

        assert!(report.starts_with("Mental Health Report for alice\n"));
        assert!(report.contains("Happy: 2 times"));
        assert!(report.contains("Calm: 1 time\n"));
        // only the last two journal entries
        assert!(!report.contains("first entry"));
        assert!(report.contains("second ent..."));
        assert!(report.contains("a much lon..."));
        assert!(report.contains("Gratitude: Family"));
        assert!(report.contains("Average sleep duration: 7.00 hours"));
        assert!(report.contains("Average sleep quality: 7.50/10"));
        assert!(report.contains("Goal: Meditate daily"));
        assert!(report.contains("Status: In Progress"));
        assert!(!report.contains("top secret"));
    }

    #[test]
    fn test_report_skips_empty_sections() {
        let record = JournalRecord {
            gratitude: vec![GratitudeEntry {
                timestamp: ts(1),
                text: "Rain".into(),
            }],
            ..Default::default()
        };
        let report = render_report("bob", &record, options());
        assert!(report.contains("Gratitude Logs:"));
        assert!(!report.contains("Mood Summary:"));
        assert!(!report.contains("Sleep Summary:"));
        assert!(!report.contains("Goals:"));
    }

    #[test]
    fn test_csv_moods_quotes_fields() {
        let csv = render_csv(&sample(), Section::Moods).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "timestamp,mood,intensity,notes");
        assert_eq!(lines[1], "2025-05-01T21:00:00,Happy,7,\"sun, finally\"");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_goals_and_sleep() {
        let goals = render_csv(&sample(), Section::Goals).unwrap();
        assert!(goals.contains("2025-05-01T21:00:00,Meditate daily,Short-term,2025-06-01,false"));

        let sleep = render_csv(&sample(), Section::Sleep).unwrap();
        assert!(sleep.starts_with("date,duration_hours,quality\n"));
        assert!(sleep.contains("2025-05-02,8,9"));
    }

    #[test]
    fn test_service_rejects_empty_record() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let service = ExportService::new(&repo, &Config::new());
        let mut session = Session::default();
        session.start("alice");

        assert!(matches!(service.report(&session), Err(TaraError::NoData)));
        assert!(matches!(service.csv(&session, Section::Moods), Err(TaraError::NoData)));
        assert_eq!(service.summary(&session).unwrap().mood_count, 0);
    }

    #[test]
    fn test_json_hides_vault_contents_when_locked() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let mut record = sample();
        record.vault_password_hash = Some("$argon2id$fake".into());
        repo.journal_store().save("alice", &record).unwrap();

        let service = ExportService::new(&repo, &Config::new());
        let mut session = Session::default();
        session.start("alice");

        let locked = service.json(&session).unwrap();
        assert!(!locked.contains("top secret"));
        assert!(!locked.contains("argon2"));

        session.vault_unlocked = true;
        let unlocked = service.json(&session).unwrap();
        assert!(unlocked.contains("top secret"));
        assert!(!unlocked.contains("argon2"));
    }
}
