//! MiniBank Core - Account domain model and its validation rules
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: The `Account` value object, account-number formatting and field guards
//! - **ports**: Shapes exchanged with external collaborators (stored records)
//! - **services**: Caller-side support such as the event log
//! - **config**: Settings stored in the data directory
//!
//! An account is built in one of two ways, and each path validates its inputs
//! before anything is constructed:
//!
//! ```
//! use minibank_core::Account;
//! use rust_decimal::Decimal;
//!
//! let opened = Account::open_new(Some("Ana Souza"), Some(Decimal::new(25000, 2))).unwrap();
//! assert!(opened.id().is_none());
//!
//! let loaded = Account::reconstitute(Some(7), Some("123"), Some("Ana Souza"), Some(Decimal::ZERO)).unwrap();
//! assert_eq!(loaded.account_number(), Some("00000123"));
//!
//! let err = Account::open_new(Some("   "), Some(Decimal::ONE)).unwrap_err();
//! assert_eq!(err.message(), "The holder name is required.");
//! ```

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::account_number;
pub use domain::result::OperationResult;
pub use domain::{Account, Provenance, ValidationError};
pub use ports::AccountRecord;
pub use services::{EntryPoint, LogEntry, LogEvent, LoggingService};
