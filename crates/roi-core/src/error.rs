//! Error types for the ROI estimator.
//!
//! The calculation itself never fails; these errors come from the edges
//! that accept raw user input (strict range checks and field lookup).

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::InputField;

/// A specialized Result type for estimator operations.
pub type RoiResult<T> = Result<T, RoiError>;

/// The main error type for estimator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoiError {
    /// An input lies outside its documented range.
    #[error("{field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        /// The offending input field.
        field: InputField,
        /// The value that was supplied.
        value: Decimal,
        /// Lower bound of the range.
        min: Decimal,
        /// Upper bound of the range.
        max: Decimal,
    },

    /// No input field matches the given name.
    #[error("Unknown input field: {name}")]
    UnknownField {
        /// The name that failed to parse.
        name: String,
    },
}

impl RoiError {
    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}
