//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tara")]
#[command(about = "Personal wellness journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create an account
    Signup {
        username: String,
        password: String,

        /// Email address for the account
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in and start a session
    Login { username: String, password: String },

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Password reset
    #[command(subcommand)]
    Reset(ResetCommand),

    /// Record how you feel
    Mood {
        /// Happy, Sad, Anxious, Calm, Excited, Angry, Frustrated, Confident, Confused
        /// or Grateful
        mood: String,

        /// Intensity from 1 to 10
        #[arg(short, long, default_value_t = 5)]
        intensity: u8,

        /// Optional notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Write a journal entry
    Write {
        text: String,

        /// Start the entry with prompt number N (see `tara prompts`)
        #[arg(short, long)]
        prompt: Option<usize>,
    },

    /// Log something you are grateful for
    Grateful { text: String },

    /// Log a night's sleep
    Sleep {
        /// Hours slept (0-24)
        hours: f64,

        /// Sleep quality from 1 to 10
        #[arg(short, long, default_value_t = 5)]
        quality: u8,

        /// Night being logged (today, yesterday, DD-MM-YYYY, ...)
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// Manage goals
    #[command(subcommand)]
    Goal(GoalCommand),

    /// Private memories behind a PIN
    #[command(subcommand)]
    Vault(VaultCommand),

    /// Counts and averages over everything logged
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export data
    Export {
        #[command(subcommand)]
        format: ExportCommand,

        /// Write to this file instead of stdout
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
    },

    /// Show a random affirmation
    Affirmation,

    /// List journal prompts
    Prompts,
}

#[derive(Subcommand, Debug)]
pub enum ResetCommand {
    /// Issue a reset token for a user
    Request { username: String },

    /// Set a new password using a reset token
    Apply { token: String, password: String },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    /// Set a new goal
    Add {
        text: String,

        /// Mark as a long-term goal (default: short-term)
        #[arg(long)]
        long_term: bool,

        /// Deadline (today, next friday, in 30 days, DD-MM-YYYY, ...)
        #[arg(short, long, default_value = "today")]
        deadline: String,
    },

    /// List goals
    List,

    /// Mark goal N as completed
    Done { number: usize },

    /// Mark goal N as not completed
    Undo { number: usize },
}

#[derive(Subcommand, Debug)]
pub enum VaultCommand {
    /// Set the 4-digit vault PIN
    SetPin { pin: String },

    /// Unlock the vault for this session
    Unlock { pin: String },

    /// Lock the vault
    Lock,

    /// Save a memory
    Add {
        title: String,
        text: String,

        /// Attach a png/jpg image
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// List memories
    List,

    /// Save the image of memory N to a file
    Image { number: usize, dest: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Text report
    Report,

    /// Full record as JSON
    Json,

    /// One section as CSV
    Csv {
        /// moods, journal, gratitude, sleep or goals
        section: String,
    },
}
