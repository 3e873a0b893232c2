//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use minibank_core::{Account, Provenance};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Vertical key-value table describing an account
pub fn account_table(account: &Account) -> Table {
    let provenance = match account.provenance() {
        Provenance::NewlyOpened => "newly opened",
        Provenance::Reconstituted => "existing record",
    };

    let mut table = create_table();
    table.add_row(vec!["Provenance", provenance]);
    table.add_row(vec![
        "Id".to_string(),
        account.id().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec!["Account number", account.account_number().unwrap_or("-")]);
    table.add_row(vec!["Holder", account.holder_name()]);
    table.add_row(vec!["Balance".to_string(), account.balance().to_string()]);
    table
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_account_table_shows_padded_number() {
        let account = Account::reconstitute(Some(5), Some("77"), Some("Ana"), Some(dec!(-1))).unwrap();
        let rendered = account_table(&account).to_string();
        assert!(rendered.contains("00000077"));
        assert!(rendered.contains("existing record"));
    }

    #[test]
    fn test_account_table_for_new_account() {
        let account = Account::open_new(Some("Ana"), Some(dec!(10.50))).unwrap();
        let rendered = account_table(&account).to_string();
        assert!(rendered.contains("newly opened"));
        assert!(rendered.contains("10.50"));
    }
}
