//! Integration tests for mood, journal, gratitude, sleep and goal commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{logged_in, tara_in};

fn record(temp: &TempDir, username: &str) -> Value {
    let path = temp.path().join("records").join(format!("{}.json", username));
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_moods_append_in_order() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    for (mood, intensity) in [("happy", "8"), ("Anxious", "3"), ("CALM", "6")] {
        tara_in(temp.path())
            .args(["mood", mood, "--intensity", intensity])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mood saved successfully!"));
    }

    let moods = record(&temp, "alice")["moods"].as_array().unwrap().clone();
    let labels: Vec<&str> = moods.iter().map(|m| m["mood"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["Happy", "Anxious", "Calm"]);
    assert_eq!(moods[1]["intensity"], 3);
}

#[test]
fn test_invalid_mood_and_intensity() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["mood", "hangry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid moods are"));

    tara_in(temp.path())
        .args(["mood", "happy", "-i", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));

    assert_eq!(record(&temp, "alice")["moods"].as_array().unwrap().len(), 0);
}

#[test]
fn test_write_with_prompt() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["write", "My dog did a flip", "--prompt", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(10 words)"));

    let entry = &record(&temp, "alice")["journal"][0];
    assert_eq!(entry["entry"], "What made you smile today?\nMy dog did a flip");
    assert_eq!(entry["word_count"], 10);

    tara_in(temp.path())
        .args(["write", "text", "--prompt", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No prompt #99"));
}

#[test]
fn test_gratitude() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["grateful", "A warm bed"])
        .assert()
        .success();

    assert_eq!(record(&temp, "alice")["gratitude"][0]["text"], "A warm bed");
}

#[test]
fn test_sleep_with_tips_for_poor_night() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["sleep", "8", "--quality", "9", "--date", "2025-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tips").not());

    tara_in(temp.path())
        .args(["sleep", "4", "--quality", "3", "--date", "17-01-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stick to a consistent sleep schedule"));

    let sleep = record(&temp, "alice")["sleep"].as_array().unwrap().clone();
    assert_eq!(sleep[0]["date"], "2025-01-16");
    assert_eq!(sleep[1]["date"], "2025-01-17");
    assert_eq!(sleep[1]["duration_hours"], 4.0);

    tara_in(temp.path())
        .args(["sleep", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sleep duration"));
}

#[test]
fn test_goal_lifecycle() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("haven't set any goals"));

    tara_in(temp.path())
        .args(["goal", "add", "Drink water", "--deadline", "31-12-2030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal #1 saved"));
    tara_in(temp.path())
        .args(["goal", "add", "Run a marathon", "--long-term", "--deadline", "2031-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal #2 saved"));

    tara_in(temp.path()).args(["goal", "done", "2"]).assert().success();

    tara_in(temp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drink water (Short-term) - Due: 31-12-2030"))
        .stdout(predicate::str::contains("✅ Run a marathon (Long-term)"));

    let goals = record(&temp, "alice")["goals"].as_array().unwrap().clone();
    assert_eq!(goals[0]["completed"], false);
    assert_eq!(goals[1]["completed"], true);

    tara_in(temp.path()).args(["goal", "undo", "2"]).assert().success();
    assert_eq!(record(&temp, "alice")["goals"][1]["completed"], false);

    tara_in(temp.path())
        .args(["goal", "done", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found: #7"));
}

#[test]
fn test_bad_deadline() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["goal", "add", "Something", "--deadline", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time reference"));
}

#[test]
fn test_far_future_dates_are_rejected_cleanly() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["sleep", "8", "--date", "in 100000000 days"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time reference"))
        .stderr(predicate::str::contains("panicked").not());
    tara_in(temp.path())
        .args(["goal", "add", "x", "-d", "in 100000000 days"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time reference"));
    let data = record(&temp, "alice");
    assert_eq!(data["sleep"].as_array().unwrap().len(), 0);
    assert_eq!(data["goals"].as_array().unwrap().len(), 0);
}

#[test]
fn test_empty_goal_list_ends_with_newline() {
    let temp = TempDir::new().unwrap();
    logged_in(temp.path(), "alice", "pw");

    tara_in(temp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout("You haven't set any goals yet\n");
}
