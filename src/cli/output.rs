//! Output formatting utilities

use crate::domain::content::{JOURNAL_PROMPTS, SLEEP_TIPS};
use crate::domain::{Goal, Memory, Summary};

/// Numbered goal list, matching the numbers `goal done` expects
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "You haven't set any goals yet\n".to_string();
    }

    let mut output = String::new();
    for (i, goal) in goals.iter().enumerate() {
        let mark = if goal.completed { "✅" } else { "  " };
        output.push_str(&format!(
            "{:>3}. {} {} ({}) - Due: {}\n",
            i + 1,
            mark,
            goal.text,
            goal.kind.label(),
            goal.deadline.format("%d-%m-%Y")
        ));
    }
    output
}

pub fn format_memory_list(memories: &[Memory]) -> String {
    if memories.is_empty() {
        return "No memories yet\n".to_string();
    }

    let mut output = String::new();
    for (i, memory) in memories.iter().enumerate() {
        let image = if memory.image.is_some() { " [image]" } else { "" };
        output.push_str(&format!(
            "{:>3}. {}  {}{}\n     {}\n",
            i + 1,
            memory.timestamp.format("%d-%m-%Y"),
            memory.title,
            image,
            memory.text
        ));
    }
    output
}

pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Login streak: {} day(s)\n", summary.streak));
    output.push_str(&format!("Moods logged: {}\n", summary.mood_count));
    if let Some(avg) = summary.average_intensity {
        output.push_str(&format!("  Average intensity: {:.1}/10\n", avg));
    }
    for (mood, count) in &summary.top_moods {
        output.push_str(&format!("  {}: {}\n", mood, count));
    }
    output.push_str(&format!(
        "Journal entries: {} ({} words)\n",
        summary.journal_count, summary.total_words
    ));
    output.push_str(&format!("Gratitude notes: {}\n", summary.gratitude_count));
    output.push_str(&format!("Nights logged: {}\n", summary.sleep_count));
    if let (Some(hours), Some(quality)) =
        (summary.average_sleep_hours, summary.average_sleep_quality)
    {
        output.push_str(&format!("  Average: {:.2} hours, quality {:.2}/10\n", hours, quality));
    }
    output.push_str(&format!(
        "Goals: {} completed, {} in progress\n",
        summary.goals_completed,
        summary.goals_in_progress()
    ));
    output.push_str(&format!("Memories: {}\n", summary.memory_count));
    output
}

pub fn format_prompts() -> String {
    JOURNAL_PROMPTS
        .iter()
        .enumerate()
        .map(|(i, prompt)| format!("{:>3}. {}\n", i + 1, prompt))
        .collect()
}

pub fn format_sleep_tips() -> String {
    let mut output = String::from(
        "It looks like you didn't have a great night's sleep. \
        Here are some tips to improve your sleep:\n",
    );
    for (i, tip) in SLEEP_TIPS.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, tip));
    }
    output.push_str(
        "Remember, good sleep is crucial for your mental and physical health. You've got this!\n",
    );
    output
}
