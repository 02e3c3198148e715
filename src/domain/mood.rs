//! The fixed set of mood labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mood label. The set is closed; records only ever hold one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Calm,
    Excited,
    Angry,
    Frustrated,
    Confident,
    Confused,
    Grateful,
}

impl Mood {
    /// All labels in display order
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Calm,
        Mood::Excited,
        Mood::Angry,
        Mood::Frustrated,
        Mood::Confident,
        Mood::Confused,
        Mood::Grateful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Angry => "Angry",
            Mood::Frustrated => "Frustrated",
            Mood::Confident => "Confident",
            Mood::Confused => "Confused",
            Mood::Grateful => "Grateful",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();
                format!(
                    "Invalid mood: '{}'. Valid moods are: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}
