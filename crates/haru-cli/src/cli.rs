use clap::{Parser, Subcommand, ValueEnum};
use haru_core::models::RepeatType;
use std::path::PathBuf;

/// A calendar event tool with bounded recurrence expansion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Expand an event definition into its concrete occurrences
    Expand(ExpandCommand),
    /// Preview occurrence dates for a repeat rule
    Preview(PreviewCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ExpandCommand {
    /// Path to an event definition (JSON)
    pub file: PathBuf,
    /// Override the planning horizon (e.g., '2025-10-30')
    #[clap(long)]
    pub horizon: Option<String>,
    /// Print the expanded records as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// Anchor date for the rule (e.g., '2025-10-01')
    pub date: String,
    /// Repeat frequency
    #[clap(long, value_enum)]
    pub every: RepeatShortcut,
    /// Step count in the rule's unit
    #[clap(long, default_value_t = 1)]
    pub interval: u32,
    /// End date for the recurrence (e.g., '2025-12-31')
    #[clap(long)]
    pub until: Option<String>,
    /// Number of occurrences to show
    #[clap(long, short, default_value_t = 10)]
    pub count: usize,
    /// Override the planning horizon
    #[clap(long)]
    pub horizon: Option<String>,
}

/// Human-friendly repeat frequencies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatShortcut {
    /// Every day
    Daily,
    /// Every week (same weekday)
    Weekly,
    /// Every month (same date)
    Monthly,
    /// Every year (same date)
    Yearly,
}

impl std::fmt::Display for RepeatShortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepeatShortcut::Daily => write!(f, "daily"),
            RepeatShortcut::Weekly => write!(f, "weekly"),
            RepeatShortcut::Monthly => write!(f, "monthly"),
            RepeatShortcut::Yearly => write!(f, "yearly"),
        }
    }
}

impl RepeatShortcut {
    pub fn to_repeat_type(self) -> RepeatType {
        match self {
            RepeatShortcut::Daily => RepeatType::Daily,
            RepeatShortcut::Weekly => RepeatType::Weekly,
            RepeatShortcut::Monthly => RepeatType::Monthly,
            RepeatShortcut::Yearly => RepeatType::Yearly,
        }
    }
}
