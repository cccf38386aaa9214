//! Calendar periods such as `3M` or `30Y`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AmortisError, AmortisResult};
use crate::types::Date;

/// Unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days
    Day,
    /// Weeks of seven calendar days
    Week,
    /// Calendar months
    Month,
    /// Calendar years
    Year,
}

impl TimeUnit {
    /// Returns the single-letter code used in period strings.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            TimeUnit::Day => 'D',
            TimeUnit::Week => 'W',
            TimeUnit::Month => 'M',
            TimeUnit::Year => 'Y',
        }
    }

    /// Looks up a unit by its letter code (case insensitive).
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'D' => Some(TimeUnit::Day),
            'W' => Some(TimeUnit::Week),
            'M' => Some(TimeUnit::Month),
            'Y' => Some(TimeUnit::Year),
            _ => None,
        }
    }
}

/// A signed length of calendar time.
///
/// Periods are plain values: `12M` and `1Y` shift dates identically but are
/// distinct periods, so no ordering is defined between them.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::{Date, Period};
///
/// let term: Period = "30Y".parse().unwrap();
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(term.add_to_date(start).unwrap(), Date::from_ymd(2054, 1, 1).unwrap());
/// assert_eq!(term.to_string(), "30Y");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    length: i32,
    unit: TimeUnit,
}

impl Period {
    /// Creates a period of `length` units.
    #[must_use]
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// A period of `n` days.
    #[must_use]
    pub const fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Day)
    }

    /// A period of `n` weeks.
    #[must_use]
    pub const fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Week)
    }

    /// A period of `n` months.
    #[must_use]
    pub const fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Month)
    }

    /// A period of `n` years.
    #[must_use]
    pub const fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Year)
    }

    /// Parses a period string of the form `[-]?[0-9]+[DWMY]`, case insensitive.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidPeriodFormat` for anything else, including
    /// surrounding whitespace, a leading `+`, or a count that overflows `i32`.
    pub fn parse(s: &str) -> AmortisResult<Self> {
        let invalid = || AmortisError::invalid_period_format(s);

        let mut chars = s.chars();
        let unit = chars
            .next_back()
            .and_then(TimeUnit::from_code)
            .ok_or_else(invalid)?;
        let count = chars.as_str();
        let digits = count.strip_prefix('-').unwrap_or(count);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let length = count.parse::<i32>().map_err(|_| invalid())?;
        Ok(Self::new(length, unit))
    }

    /// Returns the signed count.
    #[must_use]
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns true if the count is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.length > 0
    }

    /// Returns this period repeated `factor` times (`3M` scaled by 4 is `12M`).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidTerm` if the count overflows.
    pub fn scaled(&self, factor: i32) -> AmortisResult<Self> {
        self.length
            .checked_mul(factor)
            .map(|length| Self::new(length, self.unit))
            .ok_or_else(|| AmortisError::invalid_term(format!("{self} x {factor} overflows")))
    }

    /// Shifts `date` by this period.
    ///
    /// Days and weeks add calendar days; months and years add calendar months
    /// with end-of-month clamping (Jan 31 + 1M is the last day of February).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDate` if the result is out of range.
    pub fn add_to_date(&self, date: Date) -> AmortisResult<Date> {
        match self.unit {
            TimeUnit::Day => date.checked_add_days(i64::from(self.length)),
            TimeUnit::Week => date.checked_add_days(7 * i64::from(self.length)),
            TimeUnit::Month => date.add_months(self.length),
            TimeUnit::Year => date.add_years(self.length),
        }
    }

    /// Returns the length in days.
    ///
    /// Months and years have no exact day count; with `approximate` set they
    /// count as 30 and 365 days, otherwise they are rejected.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidTerm` for months or years when not approximating.
    pub fn to_days(&self, approximate: bool) -> AmortisResult<i64> {
        let n = i64::from(self.length);
        match (self.unit, approximate) {
            (TimeUnit::Day, _) => Ok(n),
            (TimeUnit::Week, _) => Ok(7 * n),
            (TimeUnit::Month, true) => Ok(30 * n),
            (TimeUnit::Year, true) => Ok(365 * n),
            (TimeUnit::Month | TimeUnit::Year, false) => Err(AmortisError::invalid_term(format!(
                "{self} has no exact length in days"
            ))),
        }
    }

    /// Returns the length in whole months.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidTerm` for day and week periods.
    pub fn to_months(&self) -> AmortisResult<i64> {
        let n = i64::from(self.length);
        match self.unit {
            TimeUnit::Month => Ok(n),
            TimeUnit::Year => Ok(12 * n),
            TimeUnit::Day | TimeUnit::Week => Err(AmortisError::invalid_term(format!(
                "{self} has no exact length in months"
            ))),
        }
    }

    /// Returns the length in years: D/365, 7W/365, M/12 or Y.
    #[must_use]
    pub fn to_years(&self) -> Decimal {
        let n = Decimal::from(self.length);
        match self.unit {
            TimeUnit::Day => n / Decimal::from(365),
            TimeUnit::Week => n * Decimal::from(7) / Decimal::from(365),
            TimeUnit::Month => n / Decimal::from(12),
            TimeUnit::Year => n,
        }
    }

    /// Number of whole periods of a schedule paying `per_year` times a year
    /// that fit in this period, i.e. `floor(years * per_year)`.
    ///
    /// Computed in integers so `30Y` monthly is exactly 360.
    #[must_use]
    pub fn periods_in(&self, per_year: u32) -> i64 {
        let n = i64::from(self.length);
        let m = i64::from(per_year);
        match self.unit {
            TimeUnit::Day => (n * m).div_euclid(365),
            TimeUnit::Week => (7 * n * m).div_euclid(365),
            TimeUnit::Month => (n * m).div_euclid(12),
            TimeUnit::Year => n * m,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

impl FromStr for Period {
    type Err = AmortisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
