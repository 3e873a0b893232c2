//! Open command - open a new account

use anyhow::Result;
use minibank_core::{Account, ValidationError};
use rust_decimal::Decimal;

use super::{get_logger, load_config, parse_balance, prompt_if_missing, report_account};

pub fn run(holder: Option<String>, balance: Option<String>, json: bool) -> Result<()> {
    let (data_dir, config) = load_config()?;
    let logger = get_logger(&data_dir, &config);
    let json = json || config.json_output;

    let holder = prompt_if_missing(holder, "Holder name", !json)?;
    let balance = prompt_if_missing(balance, "Initial balance", !json)?;

    let result = open_account(holder.as_deref(), balance.as_deref())?;
    report_account("open", result, json, &logger)
}

/// Open an account from typed input
///
/// An unreadable balance is only reported once the holder name has passed,
/// so failures surface in the same order as `Account::open_new` checks them.
fn open_account(
    holder: Option<&str>,
    balance: Option<&str>,
) -> Result<std::result::Result<Account, ValidationError>> {
    match parse_balance(balance) {
        Ok(balance) => Ok(Account::open_new(holder, balance)),
        Err(parse_err) => match Account::open_new(holder, Some(Decimal::ONE)) {
            Err(holder_err) => Ok(Err(holder_err)),
            Ok(_) => Err(parse_err),
        },
    }
}
