//! Result and error types for the core library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed construction-time precondition
///
/// The message is the caller-facing text and is printed verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The precondition that failed, as a human-readable sentence
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Operation result envelope (for machine-readable output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for OperationResult<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.message()),
        }
    }
}
