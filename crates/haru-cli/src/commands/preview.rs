use anyhow::Result;
use haru_core::models::RepeatRule;
use haru_core::recurrence::{ExpansionConfig, RecurrenceExpander};
use owo_colors::{OwoColorize, Style};

use crate::cli::PreviewCommand;
use crate::config::Config;
use crate::parser::parse_date;
use crate::views::table;

pub fn preview_rule(command: PreviewCommand, config: &Config) -> Result<()> {
    let anchor = parse_date(&command.date)?;
    let end_date = command.until.as_deref().map(parse_date).transpose()?;
    let rule = RepeatRule {
        repeat_type: command.every.to_repeat_type(),
        interval: command.interval,
        end_date,
    };
    rule.validate()?;

    let horizon = match &command.horizon {
        Some(raw_date) => parse_date(raw_date)?,
        None => config.expansion.horizon,
    };
    let expander = RecurrenceExpander::new(ExpansionConfig { horizon });

    let dates = expander.occurrence_dates(anchor, &rule);
    let total = dates.len();
    let mut shown = dates;
    shown.truncate(command.count);

    table::display_dates(&shown);

    let info_style = Style::new().blue();
    println!(
        "{} Repeats every {} {}, anchored at {}",
        "→".style(info_style),
        command.interval.max(1),
        unit_name(command.every, command.interval),
        anchor.to_string().cyan()
    );
    if total > shown.len() {
        println!(
            "{} {} more occurrence{} before {}",
            "→".style(info_style),
            total - shown.len(),
            if total - shown.len() == 1 { "" } else { "s" },
            horizon.to_string().cyan()
        );
    }

    Ok(())
}

fn unit_name(shortcut: crate::cli::RepeatShortcut, interval: u32) -> &'static str {
    use crate::cli::RepeatShortcut;
    match (shortcut, interval) {
        (RepeatShortcut::Daily, 1) => "day",
        (RepeatShortcut::Daily, _) => "days",
        (RepeatShortcut::Weekly, 1) => "week",
        (RepeatShortcut::Weekly, _) => "weeks",
        (RepeatShortcut::Monthly, 1) => "month",
        (RepeatShortcut::Monthly, _) => "months",
        (RepeatShortcut::Yearly, 1) => "year",
        (RepeatShortcut::Yearly, _) => "years",
    }
}
