//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external dependencies.

mod account;
pub mod account_number;
pub mod result;
pub mod validation;

pub use account::{Account, Provenance};
pub use result::ValidationError;
