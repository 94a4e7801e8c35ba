//! Error types for the payroll model.
//!
//! Each role component owns exactly one failure domain. Accounting errors come
//! only from the pay calculator, reporting errors only from the hour reporter
//! and storage errors only from the repository. Coordinating types pass these
//! through untouched.

use thiserror::Error;

/// The main error type for the payroll model.
///
/// # Example
///
/// ```
/// use srp_payroll::error::PayrollError;
///
/// let error = PayrollError::Storage {
///     employee: "Alice".to_string(),
///     message: "connection refused".to_string(),
/// };
/// assert_eq!(error.to_string(), "Storage error for 'Alice': connection refused");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// Pay could not be calculated. Raised by the pay calculator only.
    #[error("Accounting error for '{employee}': {message}")]
    Accounting {
        /// Name of the employee being paid.
        employee: String,
        /// A description of the accounting failure.
        message: String,
    },

    /// Hours could not be reported. Raised by the hour reporter only.
    #[error("Reporting error for '{employee}': {message}")]
    Reporting {
        /// Name of the employee being reported on.
        employee: String,
        /// A description of the reporting failure.
        message: String,
    },

    /// The employee could not be persisted. Raised by the repository only.
    #[error("Storage error for '{employee}': {message}")]
    Storage {
        /// Name of the employee being saved.
        employee: String,
        /// A description of the storage failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
