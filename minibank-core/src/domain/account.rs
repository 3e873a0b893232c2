//! Account domain model

use rust_decimal::Decimal;
use serde::Serialize;

use super::account_number;
use super::result::ValidationError;
use super::validation::{require_non_blank, require_non_null};
use crate::ports::AccountRecord;

/// How an account came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Opened through [`Account::open_new`]; not yet assigned an id or number
    NewlyOpened,
    /// Rebuilt from a stored record through [`Account::reconstitute`]
    Reconstituted,
}

/// A bank account
///
/// Accounts are immutable once built. The only ways to obtain one are
/// [`Account::open_new`] for a brand new account and
/// [`Account::reconstitute`] for one that already exists in storage; each
/// path applies its own validation rules and fails without producing a
/// partially built account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: Option<i64>,
    account_number: Option<String>,
    holder_name: String,
    balance: Decimal,
}

impl Account {
    /// Open a new account
    ///
    /// The holder name must not be blank and the initial balance must be
    /// strictly positive. The id and account number are assigned later by
    /// whatever stores the account.
    pub fn open_new(
        holder_name: Option<&str>,
        initial_balance: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let holder_name = require_non_blank(holder_name, "The holder name is required.")?;
        let balance = require_positive_initial_balance(initial_balance)?;

        Ok(Self {
            id: None,
            account_number: None,
            holder_name: holder_name.to_string(),
            balance,
        })
    }

    /// Rebuild an account that was previously stored
    ///
    /// The balance is not required to be positive here: an existing account
    /// may legitimately be empty or overdrawn.
    pub fn reconstitute(
        id: Option<i64>,
        account_number: Option<&str>,
        holder_name: Option<&str>,
        balance: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let id = require_non_null(id, "The account id cannot be null for existing records.")?;
        let account_number = account_number::format(account_number)?;
        let holder_name = require_non_blank(
            holder_name,
            "The holder name is required for existing records.",
        )?;
        let balance = require_non_null(balance, "The balance cannot be null for existing records.")?;

        Ok(Self {
            id: Some(id),
            account_number: Some(account_number),
            holder_name: holder_name.to_string(),
            balance,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// The 8-digit, zero-padded account number
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn provenance(&self) -> Provenance {
        if self.id.is_some() {
            Provenance::Reconstituted
        } else {
            Provenance::NewlyOpened
        }
    }
}

impl TryFrom<AccountRecord> for Account {
    type Error = ValidationError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        Self::reconstitute(
            record.id,
            record.account_number.as_deref(),
            record.holder_name.as_deref(),
            record.balance,
        )
    }
}

fn require_positive_initial_balance(
    initial_balance: Option<Decimal>,
) -> Result<Decimal, ValidationError> {
    let balance = require_non_null(initial_balance, "The initial balance is required.")?;
    if balance <= Decimal::ZERO {
        return Err(ValidationError::new(
            "The initial balance must be greater than zero.",
        ));
    }
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_open_new_account() {
        let account = Account::open_new(Some("Phillip Pimenta"), Some(dec!(1000.00))).unwrap();

        assert_eq!(account.holder_name(), "Phillip Pimenta");
        assert_eq!(account.balance(), dec!(1000.00));
        assert_eq!(account.id(), None);
        assert_eq!(account.account_number(), None);
        assert_eq!(account.provenance(), Provenance::NewlyOpened);
    }

    #[test]
    fn test_open_new_keeps_balance_scale() {
        let account = Account::open_new(Some("Ana"), Some(dec!(0.01))).unwrap();
        assert_eq!(account.balance().to_string(), "0.01");
    }

    #[test]
    fn test_holder_name_checked_before_balance() {
        let err = Account::open_new(None, None).unwrap_err();
        assert_eq!(err.message(), "The holder name is required.");
    }

    #[test]
    fn test_reconstitute_account() {
        let account =
            Account::reconstitute(Some(1), Some("123"), Some("Phillip Pimenta"), Some(dec!(1000.00)))
                .unwrap();

        assert_eq!(account.id(), Some(1));
        assert_eq!(account.account_number(), Some("00000123"));
        assert_eq!(account.holder_name(), "Phillip Pimenta");
        assert_eq!(account.balance(), dec!(1000.00));
        assert_eq!(account.provenance(), Provenance::Reconstituted);
    }

    #[test]
    fn test_reconstitute_from_record() {
        let record: AccountRecord = serde_json::from_str(
            r#"{"id": 9, "account_number": " 42 ", "holder_name": "Ana", "balance": "-15.50"}"#,
        )
        .unwrap();

        let account = Account::try_from(record).unwrap();
        assert_eq!(account.account_number(), Some("00000042"));
        assert_eq!(account.balance(), dec!(-15.50));
    }

    #[test]
    fn test_serialize_new_account_has_null_id() {
        let account = Account::open_new(Some("Ana"), Some(dec!(10))).unwrap();
        let json = serde_json::to_value(&account).unwrap();
        assert!(json["id"].is_null());
        assert!(json["account_number"].is_null());
        assert_eq!(json["holder_name"], "Ana");
    }
}
