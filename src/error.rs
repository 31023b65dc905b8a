//! Error types for the measured-rs library.
//!
//! This module defines every error that can occur when building or comparing measurements.

use thiserror::Error;

/// The main error type for the measured-rs library.
///
/// Every failure is local to the call that produced it: construction either
/// succeeds or returns one of these, and no partially built value escapes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// Error when a value or error is not a genuine quantity (NaN or infinite).
    #[error("Invalid measurement: {field} {value} is not a finite number")]
    InvalidMeasurement {
        /// Which field was rejected, `"value"` or `"error"`
        field: &'static str,
        /// The rejected input
        value: f64,
    },

    /// Error when a negative uncertainty is supplied.
    #[error("Negative error: error {error} is negative")]
    NegativeError {
        /// The rejected uncertainty
        error: f64,
    },

    /// Error when a consistency check is asked of something that is not a number.
    #[error("Incomparable type: {type_name} is neither a measurement nor a number")]
    IncomparableType {
        /// Name of the offending type, as far as it can be determined
        type_name: &'static str,
    },

    /// Error when text cannot be read back as a measurement.
    #[error("Cannot parse measurement from '{input}': {reason}")]
    Parse {
        /// The text that failed to parse
        input: String,
        /// What was wrong with it
        reason: &'static str,
    },
}

/// A specialized `Result` type for measurement operations.
pub type Result<T> = std::result::Result<T, MeasurementError>;

impl MeasurementError {
    /// Create an error for a non-finite value or error.
    ///
    /// # Example
    /// ```
    /// use measured_rs::error::MeasurementError;
    ///
    /// let error = MeasurementError::invalid_measurement("value", f64::NAN);
    /// assert!(error.to_string().contains("NaN"));
    /// ```
    pub fn invalid_measurement(field: &'static str, value: f64) -> Self {
        Self::InvalidMeasurement { field, value }
    }

    /// Create an error for a negative uncertainty.
    ///
    /// # Example
    /// ```
    /// use measured_rs::error::MeasurementError;
    ///
    /// let error = MeasurementError::negative_error(-0.5);
    /// assert!(error.to_string().contains("-0.5"));
    /// ```
    pub fn negative_error(error: f64) -> Self {
        Self::NegativeError { error }
    }

    /// Create an error for an operand that cannot take part in a consistency check.
    pub fn incomparable(type_name: &'static str) -> Self {
        Self::IncomparableType { type_name }
    }

    /// Create an error for unparseable text.
    pub fn parse(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }
}
