//! Stored account record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An account row as handed back by storage
///
/// Every column is optional because nothing about the stored data is trusted
/// until it has been turned into an [`Account`](crate::domain::Account).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub holder_name: Option<String>,
    #[serde(default)]
    pub balance: Option<Decimal>,
}
