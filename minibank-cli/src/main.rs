//! MiniBank CLI - open and inspect accounts from the terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, load, logs, number, open, Reported};

/// MiniBank - account validation in your terminal
#[derive(Parser)]
#[command(name = "mb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a new account
    Open {
        /// Account holder name
        #[arg(long)]
        holder: Option<String>,
        /// Initial balance (must be greater than zero)
        #[arg(long, allow_hyphen_values = true)]
        balance: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rebuild an existing account from stored fields
    Load {
        /// Account id
        #[arg(long)]
        id: Option<i64>,
        /// Account number (up to 8 digits)
        #[arg(long)]
        number: Option<String>,
        /// Account holder name
        #[arg(long)]
        holder: Option<String>,
        /// Current balance
        #[arg(long, allow_hyphen_values = true)]
        balance: Option<String>,
        /// Read the stored record from a JSON file instead
        #[arg(short, long, conflicts_with_all = ["id", "number", "holder", "balance"])]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a raw account number to 8 digits
    Number {
        /// Raw account number
        #[arg(allow_hyphen_values = true)]
        raw: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and change settings
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is::<Reported>() {
                output::error(&format!("{:#}", e));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Open { holder, balance, json } => open::run(holder, balance, json),
        Commands::Load { id, number, holder, balance, file, json } => {
            load::run(id, number, holder, balance, file.as_deref(), json)
        }
        Commands::Number { raw, json } => number::run(raw, json),
        Commands::Config { command } => config::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
