//! Day count conventions.
//!
//! A day count convention turns a calendar span into a year fraction for
//! interest accrual.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`Act360`]: Actual/360
//! - [`ActActIsda`]: Actual/Actual ISDA, split at year boundaries
//! - [`Thirty360US`]: 30/360 US (Bond Basis)
//! - [`Thirty360E`]: 30E/360 (Eurobond Basis)
//!
//! # Usage
//!
//! ```rust
//! use amortis_core::daycounts::{DayCountBasis, DayCountConvention};
//! use amortis_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let basis = DayCountBasis::new(DayCountConvention::Thirty360US);
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(basis.year_fraction(start, end).unwrap(), dec!(0.5));
//! assert!(basis.year_fraction(end, start).is_err());
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use thirty360::{Thirty360E, Thirty360US};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AmortisError, AmortisResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// `year_fraction` is signed and unchecked here; [`DayCountBasis`] is the
/// checked entry point that rejects reversed ranges.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates under the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Closed set of supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    Act365Fixed,

    /// Actual/360
    Act360,

    /// Actual/Actual ISDA
    ActActIsda,

    /// 30/360 US (Bond Basis)
    Thirty360US,

    /// 30E/360 (Eurobond Basis)
    Thirty360E,
}

impl DayCountConvention {
    /// Returns the conventional name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => Act365Fixed.name(),
            DayCountConvention::Act360 => Act360.name(),
            DayCountConvention::ActActIsda => ActActIsda.name(),
            DayCountConvention::Thirty360US => Thirty360US.name(),
            DayCountConvention::Thirty360E => Thirty360E.name(),
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act360,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
        ]
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        DayCountConvention::name(self)
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        match self {
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::ActActIsda => ActActIsda.year_fraction(start, end),
            DayCountConvention::Thirty360US => Thirty360US.year_fraction(start, end),
            DayCountConvention::Thirty360E => Thirty360E.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act365Fixed => Act365Fixed.day_count(start, end),
            DayCountConvention::Act360 => Act360.day_count(start, end),
            DayCountConvention::ActActIsda => ActActIsda.day_count(start, end),
            DayCountConvention::Thirty360US => Thirty360US.day_count(start, end),
            DayCountConvention::Thirty360E => Thirty360E.day_count(start, end),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts the usual market spellings ("ACT/365", "30/360", "30E/360"),
    /// the enum names ("Act365Fixed") and common aliases ("BOND", "EUROBOND").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365" | "ACT365FIXED" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTACT" | "ACTACTISDA" => {
                Ok(DayCountConvention::ActActIsda)
            }
            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" => {
                Ok(DayCountConvention::Thirty360US)
            }
            "30E/360" | "EUROBOND" | "30E360" | "THIRTY360E" => Ok(DayCountConvention::Thirty360E),
            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}

/// A day count basis: one convention, used as a value.
///
/// This is the checked entry point for year fractions: reversed ranges are
/// rejected rather than producing negative fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayCountBasis {
    convention: DayCountConvention,
}

impl DayCountBasis {
    /// Creates a basis for `convention`.
    #[must_use]
    pub const fn new(convention: DayCountConvention) -> Self {
        Self { convention }
    }

    /// Returns the wrapped convention.
    #[must_use]
    pub fn convention(&self) -> DayCountConvention {
        self.convention
    }

    /// Year fraction from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDateRange` if `end < start`.
    pub fn year_fraction(&self, start: Date, end: Date) -> AmortisResult<Decimal> {
        if end < start {
            return Err(AmortisError::invalid_date_range(start, end));
        }
        Ok(self.convention.year_fraction(start, end))
    }

    /// Day count from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDateRange` if `end < start`.
    pub fn day_count(&self, start: Date, end: Date) -> AmortisResult<i64> {
        if end < start {
            return Err(AmortisError::invalid_date_range(start, end));
        }
        Ok(self.convention.day_count(start, end))
    }
}

impl From<DayCountConvention> for DayCountBasis {
    fn from(convention: DayCountConvention) -> Self {
        Self::new(convention)
    }
}

impl std::fmt::Display for DayCountBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.convention)
    }
}

/// Year fraction from `start` to `end` under `basis`.
///
/// # Errors
///
/// Returns `AmortisError::InvalidDateRange` if `end < start`.
pub fn year_fraction(basis: DayCountConvention, start: Date, end: Date) -> AmortisResult<Decimal> {
    DayCountBasis::new(basis).year_fraction(start, end)
}
