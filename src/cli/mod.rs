//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ExportCommand, GoalCommand, ResetCommand, VaultCommand};
pub use output::{
    format_goal_list, format_memory_list, format_prompts, format_sleep_tips, format_summary,
};
