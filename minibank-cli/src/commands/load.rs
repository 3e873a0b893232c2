//! Load command - rebuild an existing account from stored fields

use std::path::Path;

use anyhow::{Context, Result};
use minibank_core::{Account, AccountRecord, ValidationError};
use rust_decimal::Decimal;

use super::{get_logger, load_config, parse_balance, report_account};

pub fn run(
    id: Option<i64>,
    number: Option<String>,
    holder: Option<String>,
    balance: Option<String>,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (data_dir, config) = load_config()?;
    let logger = get_logger(&data_dir, &config);
    let json = json || config.json_output;

    let result = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read record file: {:?}", path))?;
            let record: AccountRecord = serde_json::from_str(&content)
                .with_context(|| format!("Invalid account record in {:?}", path))?;
            Account::try_from(record)
        }
        None => load_account(id, number.as_deref(), holder.as_deref(), balance.as_deref())?,
    };

    report_account("load", result, json, &logger)
}

/// Rebuild an account from typed fields
///
/// The balance is checked last by `Account::reconstitute`, so an unreadable
/// balance is only reported once every other field has passed.
fn load_account(
    id: Option<i64>,
    number: Option<&str>,
    holder: Option<&str>,
    balance: Option<&str>,
) -> Result<std::result::Result<Account, ValidationError>> {
    match parse_balance(balance) {
        Ok(balance) => Ok(Account::reconstitute(id, number, holder, balance)),
        Err(parse_err) => match Account::reconstitute(id, number, holder, Some(Decimal::ZERO)) {
            Err(field_err) => Ok(Err(field_err)),
            Ok(_) => Err(parse_err),
        },
    }
}
