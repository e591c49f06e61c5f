//! Validation error model
//!
//! Every failed check produces exactly one [`ValidationError`] carrying a
//! stable, machine-checkable [`ErrorCode`] and a human-readable message.
//! Callers branch on the code; the message is diagnostic text only and its
//! wording is not part of the contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable codes identifying the validation rule a date violated
///
/// The string form of each code (`INVALID_DATE`, `BEFORE_BIRTH`, ...) is
/// part of the public contract and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No real date was supplied where one is required
    InvalidDate,
    /// Entity date precedes the person's birth date
    BeforeBirth,
    /// Date lies after the current moment
    FutureDate,
    /// Computed age falls outside the plausible range for the rule
    UnrealisticAge,
    /// Missing person reference, or empty identifier at construction
    InvalidUser,
    /// Date is too far in the past to belong to an active record
    DateTooOld,
}

impl ErrorCode {
    /// Returns the stable string form of this code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDate => "INVALID_DATE",
            ErrorCode::BeforeBirth => "BEFORE_BIRTH",
            ErrorCode::FutureDate => "FUTURE_DATE",
            ErrorCode::UnrealisticAge => "UNREALISTIC_AGE",
            ErrorCode::InvalidUser => "INVALID_USER",
            ErrorCode::DateTooOld => "DATE_TOO_OLD",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured date-validation failure
///
/// Renders as `date validation error [<CODE>]: <message>`. Exactly one
/// code per failure; violations are never aggregated or nested.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("date validation error [{code}]: {message}")]
pub struct ValidationError {
    /// Stable code identifying the violated rule
    pub code: ErrorCode,
    /// Human-readable diagnostic with interpolated context
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns the stable string form of the error code
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}
