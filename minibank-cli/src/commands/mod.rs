//! CLI command implementations

pub mod config;
pub mod load;
pub mod logs;
pub mod number;
pub mod open;

use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use dialoguer::Input;
use rust_decimal::Decimal;

use minibank_core::config::Config;
use minibank_core::{Account, EntryPoint, LogEvent, LoggingService, OperationResult, ValidationError};

use crate::output;

/// Failure that has already been shown to the user
///
/// `main` only turns it into a non-zero exit code.
#[derive(Debug)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("command failed")
    }
}

impl std::error::Error for Reported {}

/// Get the MiniBank data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MINIBANK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".minibank"))
        .ok_or_else(|| anyhow!("Could not find home directory"))
}

/// Create the data directory if needed and load its settings
pub fn load_config() -> Result<(PathBuf, Config)> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
    let config = Config::load(&data_dir)?;
    Ok((data_dir, config))
}

/// Get the logging service for CLI operations
///
/// Returns None if logging is disabled or fails to initialize (shouldn't block operations)
pub fn get_logger(data_dir: &std::path::Path, config: &Config) -> Option<LoggingService> {
    if !config.logging_enabled {
        return None;
    }
    LoggingService::new(data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Parse a balance typed by the user
///
/// Empty input means no balance was given.
pub fn parse_balance(text: Option<&str>) -> Result<Option<Decimal>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<Decimal>()
            .map(Some)
            .map_err(|_| anyhow!("Invalid balance amount")),
    }
}

/// Ask for a value on the terminal when it was not passed as a flag
pub fn prompt_if_missing(value: Option<String>, prompt: &str, interactive: bool) -> Result<Option<String>> {
    if value.is_some() || !interactive || !std::io::stdin().is_terminal() {
        return Ok(value);
    }
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(answer))
}

/// Show the outcome of building an account and record it in the event log
///
/// Only the event name and validation message are logged, never the account data.
pub fn report_account(
    command: &str,
    result: std::result::Result<Account, ValidationError>,
    json: bool,
    logger: &Option<LoggingService>,
) -> Result<()> {
    match &result {
        Ok(_) => log_event(logger, LogEvent::new(format!("{}_succeeded", command)).with_command(command)),
        Err(e) => log_event(
            logger,
            LogEvent::new(format!("{}_failed", command))
                .with_command(command)
                .with_error(e.message())
                .with_error_details("validation"),
        ),
    }

    let failed = result.is_err();
    if json {
        println!("{}", account_json(result)?);
    } else {
        match result {
            Ok(account) => {
                output::success(success_title(command));
                println!("{}", output::account_table(&account));
            }
            Err(e) => output::error(e.message()),
        }
    }

    if failed {
        Err(Reported.into())
    } else {
        Ok(())
    }
}

/// `OperationResult` envelope printed by `--json`
pub fn account_json(result: std::result::Result<Account, ValidationError>) -> Result<String> {
    let envelope: OperationResult<Account> = result.into();
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn success_title(command: &str) -> &'static str {
    match command {
        "open" => "Account opened",
        _ => "Account loaded",
    }
}
