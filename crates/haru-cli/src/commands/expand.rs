use anyhow::{Context, Result};
use haru_core::models::NewEventData;
use haru_core::recurrence::{ExpansionConfig, RecurrenceExpander};
use owo_colors::{OwoColorize, Style};

use crate::cli::ExpandCommand;
use crate::config::Config;
use crate::parser::parse_date;
use crate::views::table;

pub fn expand_event(command: ExpandCommand, config: &Config) -> Result<()> {
    let raw = std::fs::read_to_string(&command.file)
        .with_context(|| format!("Failed to read event file '{}'", command.file.display()))?;
    let event: NewEventData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event file '{}'", command.file.display()))?;
    event.validate()?;

    let horizon = match &command.horizon {
        Some(raw_date) => parse_date(raw_date)?,
        None => config.expansion.horizon,
    };
    let expander = RecurrenceExpander::new(ExpansionConfig { horizon });
    let occurrences = expander.expand(&event);

    if command.json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    table::display_occurrences(&occurrences);

    if let Some(last) = occurrences.last() {
        let success_style = Style::new().green().bold();
        let info_style = Style::new().blue();
        println!(
            "{} Expanded '{}' into {} occurrence{}",
            "✓".style(success_style),
            event.title.bright_white().bold(),
            occurrences.len(),
            if occurrences.len() == 1 { "" } else { "s" }
        );
        println!(
            "  {} Last occurrence: {}",
            "→".style(info_style),
            last.date.to_string().cyan()
        );
        println!(
            "  {} Horizon: {}",
            "→".style(info_style),
            horizon.to_string().cyan()
        );
    }

    Ok(())
}
