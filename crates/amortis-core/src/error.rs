//! Error types for the Amortis library.
//!
//! Every failure in the engine is local and synchronous: it is raised where it
//! is detected and handed to the immediate caller as one [`AmortisError`] kind.

use thiserror::Error;

use crate::types::{Compounding, Currency, Date};

/// A specialized Result type for Amortis operations.
pub type AmortisResult<T> = Result<T, AmortisError>;

/// The main error type for Amortis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmortisError {
    /// End date precedes start date (or does not follow it where strict order is required).
    #[error("Invalid date range: {start} to {end}")]
    InvalidDateRange {
        /// Start of the offending range.
        start: Date,
        /// End of the offending range.
        end: Date,
    },

    /// Period string does not match `[-]?[0-9]+[DWMY]`.
    #[error("Invalid period format: '{input}'")]
    InvalidPeriodFormat {
        /// The rejected input.
        input: String,
    },

    /// Non-finite or malformed numeric literal at a conversion boundary.
    #[error("Invalid numeric input: {reason}")]
    InvalidNumericInput {
        /// Description of the rejected value.
        reason: String,
    },

    /// Arithmetic or schedule construction mixing currencies.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency already established.
        expected: Currency,
        /// Currency that conflicted with it.
        found: Currency,
    },

    /// Zero curve constructed without any pivot.
    #[error("Curve has no pivot points")]
    EmptyCurve,

    /// Zero curve pivot dates not strictly increasing.
    #[error("Curve pivots not strictly increasing at index {index}")]
    UnsortedPivots {
        /// Index of the first pivot that is not after its predecessor.
        index: usize,
    },

    /// Compounding conversion involving SIMPLE without a defined tenor.
    #[error("Unsupported rate conversion from {from} to {to}")]
    UnsupportedConversion {
        /// Source compounding convention.
        from: Compounding,
        /// Target compounding convention.
        to: Compounding,
    },

    /// Computed payment count is not positive.
    #[error("Invalid term: {reason}")]
    InvalidTerm {
        /// Description of the problem.
        reason: String,
    },

    /// Zero or negative amount where a positive one is required.
    #[error("Non-positive {field}: {reason}")]
    NonPositiveAmount {
        /// Name of the offending field.
        field: String,
        /// Description of the problem.
        reason: String,
    },

    /// Impossible calendar date or date arithmetic overflow.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Mathematical error (division by zero, overflow, etc.).
    #[error("Mathematical error: {reason}")]
    MathError {
        /// Description of the error.
        reason: String,
    },
}

impl AmortisError {
    /// Creates an invalid date range error.
    #[must_use]
    pub fn invalid_date_range(start: Date, end: Date) -> Self {
        Self::InvalidDateRange { start, end }
    }

    /// Creates an invalid period format error.
    #[must_use]
    pub fn invalid_period_format(input: impl Into<String>) -> Self {
        Self::InvalidPeriodFormat {
            input: input.into(),
        }
    }

    /// Creates an invalid numeric input error.
    #[must_use]
    pub fn invalid_numeric(reason: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            reason: reason.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(expected: Currency, found: Currency) -> Self {
        Self::CurrencyMismatch { expected, found }
    }

    /// Creates an unsupported conversion error.
    #[must_use]
    pub fn unsupported_conversion(from: Compounding, to: Compounding) -> Self {
        Self::UnsupportedConversion { from, to }
    }

    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(reason: impl Into<String>) -> Self {
        Self::InvalidTerm {
            reason: reason.into(),
        }
    }

    /// Creates a non-positive amount error.
    #[must_use]
    pub fn non_positive(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NonPositiveAmount {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a math error.
    #[must_use]
    pub fn math_error(reason: impl Into<String>) -> Self {
        Self::MathError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AmortisError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_date_range_display() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 1).unwrap();
        let err = AmortisError::invalid_date_range(start, end);
        assert_eq!(err.to_string(), "Invalid date range: 2025-01-01 to 2024-01-01");
    }

    #[test]
    fn test_currency_mismatch_display() {
        let err = AmortisError::currency_mismatch(Currency::USD, Currency::EUR);
        assert_eq!(err.to_string(), "Currency mismatch: expected USD, found EUR");
    }

    #[test]
    fn test_conversion_display() {
        let err = AmortisError::unsupported_conversion(Compounding::Simple, Compounding::Annual);
        assert!(err.to_string().contains("Simple"));
        assert!(err.to_string().contains("Annual"));
    }

    #[test]
    fn test_errors_compare_by_kind_and_payload() {
        assert_eq!(AmortisError::EmptyCurve, AmortisError::EmptyCurve);
        assert_ne!(
            AmortisError::invalid_term("n = 0"),
            AmortisError::invalid_term("n = -1")
        );
    }
}
