//! Fixed home-screen content: affirmations, journal prompts, sleep tips

use rand::seq::SliceRandom;

pub static AFFIRMATIONS: [&str; 10] = [
    "You are capable of amazing things.",
    "Every day is a fresh start.",
    "You are worthy of love and respect.",
    "Your potential is limitless.",
    "You have the power to create change.",
    "You are stronger than you know.",
    "Your efforts are paying off.",
    "You make a difference in the world.",
    "You are deserving of happiness and success.",
    "Your voice matters and deserves to be heard.",
];

pub static JOURNAL_PROMPTS: [&str; 15] = [
    "What made you smile today?",
    "What's a challenge you're facing, and how can you overcome it?",
    "Describe a moment of kindness you witnessed or experienced.",
    "What are you looking forward to in the near future?",
    "Reflect on a mistake you made and what you learned from it.",
    "What's something new you learned today?",
    "Describe a person who inspires you and why.",
    "What's a goal you're working towards? What steps can you take to achieve it?",
    "Write about a place that makes you feel peaceful.",
    "What's a fear you'd like to overcome? How can you start facing it?",
    "Describe your ideal day. What would you do?",
    "What's a habit you'd like to develop or break?",
    "Write a letter to your future self.",
    "What are three things you're grateful for today?",
    "Describe a recent accomplishment and how it made you feel.",
];

pub static SLEEP_TIPS: [&str; 5] = [
    "Stick to a consistent sleep schedule",
    "Create a relaxing bedtime routine",
    "Limit screen time before bed",
    "Ensure your bedroom is dark, quiet, and cool",
    "Avoid caffeine and heavy meals close to bedtime",
];

/// Pick a random affirmation
pub fn random_affirmation() -> &'static str {
    AFFIRMATIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(AFFIRMATIONS[0])
}

/// Look up a prompt by its 1-based position in the list
pub fn prompt(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|i| JOURNAL_PROMPTS.get(i))
        .copied()
}
