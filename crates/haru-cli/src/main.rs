use clap::Parser;
use haru_core::error::CoreError;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod parser;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Expand(command) => commands::expand::expand_event(command, &config),
        cli::Commands::Preview(command) => commands::preview::preview_rule(command, &config),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::InvalidRepeatRule(s) => {
                eprintln!(
                    "{} Invalid repeat rule: {}",
                    "Error:".style(error_style),
                    s.yellow()
                );
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
