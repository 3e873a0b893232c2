//! Config command - view and change settings

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::Colorize;

use super::load_config;

#[derive(Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print results as JSON by default
    Json {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Record command events in the local event log
    Logging {
        #[arg(value_enum)]
        state: Toggle,
    },
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled {
        "ON".green()
    } else {
        "OFF".yellow()
    }
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let (data_dir, mut config) = load_config()?;

    match command {
        Some(ConfigCommands::Json { state }) => {
            config.set_json_output(state.enabled());
            config.save(&data_dir)?;
            println!("JSON output is {}", on_off(config.json_output));
        }
        Some(ConfigCommands::Logging { state }) => {
            config.set_logging_enabled(state.enabled());
            config.save(&data_dir)?;
            println!("Event logging is {}", on_off(config.logging_enabled));
        }
        Some(ConfigCommands::Show { json: true }) => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": data_dir.to_string_lossy(),
                    "json_output": config.json_output,
                    "logging_enabled": config.logging_enabled,
                })
            );
        }
        Some(ConfigCommands::Show { json: false }) | None => {
            println!("{}", "Settings".bold());
            println!("  Data directory: {}", data_dir.display());
            println!("  JSON output: {}", on_off(config.json_output));
            println!("  Event logging: {}", on_off(config.logging_enabled));
        }
    }

    Ok(())
}
