//! Date references for sleep dates and goal deadlines

use crate::error::{Result, TaraError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Largest `in N days` offset accepted (about a century)
pub const MAX_OFFSET_DAYS: i64 = 36_600;

/// A user-supplied date, possibly relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    /// Whole-day offset from today: `today`, `yesterday`, `tomorrow`, `in 3 days`
    Offset(i64),
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence strictly before today
    LastWeekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    /// Absolute date
    Date(NaiveDate),
}

impl DateRef {
    /// Parse a date reference.
    ///
    /// Accepts `today`, `yesterday`, `tomorrow`, `in N days`, weekday names
    /// with optional `last`/`next`, `DD-MM-YYYY` and `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || TaraError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateRef::Offset(0)),
            "yesterday" => return Ok(DateRef::Offset(-1)),
            "tomorrow" => return Ok(DateRef::Offset(1)),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("in ") {
            let count = rest
                .strip_suffix(" days")
                .or_else(|| rest.strip_suffix(" day"))
                .and_then(|n| n.trim().parse::<i64>().ok())
                .filter(|n| (0..=MAX_OFFSET_DAYS).contains(n))
                .ok_or_else(invalid)?;
            return Ok(DateRef::Offset(count));
        }
        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day).map(DateRef::LastWeekday).ok_or_else(invalid);
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return parse_weekday(day).map(DateRef::NextWeekday).ok_or_else(invalid);
        }
        if let Some(day) = parse_weekday(&normalized) {
            return Ok(DateRef::Weekday(day));
        }

        NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
            .map(DateRef::Date)
            .map_err(|_| invalid())
    }

    /// Resolve against `today`. Fails when the result falls outside the
    /// calendar range chrono can represent.
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate> {
        let offset = match *self {
            DateRef::Date(date) => return Ok(date),
            DateRef::Offset(days) => days,
            DateRef::Weekday(target) => -days_back(today, target),
            DateRef::LastWeekday(target) => {
                let back = days_back(today, target);
                -(if back == 0 { 7 } else { back })
            }
            DateRef::NextWeekday(target) => {
                let forward = (7 - days_back(today, target)) % 7;
                if forward == 0 {
                    7
                } else {
                    forward
                }
            }
        };
        Duration::try_days(offset)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(|| {
                TaraError::InvalidTimeReference(format!("{} days from {}", offset, today))
            })
    }
}

/// Days from the most recent `target` weekday up to `today` (0..=6)
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    (current - wanted).rem_euclid(7)
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
