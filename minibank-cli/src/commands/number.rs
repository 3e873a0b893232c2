//! Number command - format a raw account number

use anyhow::Result;
use minibank_core::{account_number, LogEvent, OperationResult};

use super::{get_logger, load_config, log_event, Reported};
use crate::output;

pub fn run(raw: Option<String>, json: bool) -> Result<()> {
    let (data_dir, config) = load_config()?;
    let logger = get_logger(&data_dir, &config);
    let json = json || config.json_output;

    let result = account_number::format(raw.as_deref());
    let failed = result.is_err();

    let mut event = LogEvent::new(if failed { "number_failed" } else { "number_succeeded" })
        .with_command("number");
    if let Err(e) = &result {
        event = event.with_error(e.message()).with_error_details("validation");
    }
    log_event(&logger, event);

    if json {
        let envelope: OperationResult<String> = result.into();
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        match result {
            Ok(formatted) => println!("{}", formatted),
            Err(e) => output::error(e.message()),
        }
    }

    if failed {
        Err(Reported.into())
    } else {
        Ok(())
    }
}
