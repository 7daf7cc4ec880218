//! Unified error types and result handling.
//!
//! Every failure in this crate is either a configuration/IO problem at the
//! loading boundary or a form-validation failure. Validation variants carry
//! the offending values so messages shown to the merchant can explain the
//! first violated rule.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong.
        message: String,
    },

    /// A required form field was left empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A numeric form field did not parse as a non-negative whole number.
    #[error("Field '{field}' must be a non-negative whole number, got '{value}'")]
    InvalidNumber {
        /// Name of the field.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A payout amount was below the minimum withdrawal threshold.
    #[error("Payout amount {amount} is below the minimum of {minimum}")]
    BelowMinimum {
        /// Requested amount.
        amount: i64,
        /// Minimum allowed amount.
        minimum: i64,
    },

    /// A payout amount exceeded the available balance.
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Requested amount.
        requested: i64,
        /// Balance available for withdrawal.
        available: i64,
    },

    /// I/O error, e.g. while reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
