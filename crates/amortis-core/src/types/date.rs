//! Date type for loan calculations.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{AmortisError, AmortisResult};

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate` carrying the month arithmetic and weekend
/// predicates the engine needs.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AmortisResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AmortisError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AmortisResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AmortisError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days to the date.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves the supported date range; use
    /// [`Date::checked_add_days`] for untrusted offsets.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDate` if the result is out of range.
    pub fn checked_add_days(&self, days: i64) -> AmortisResult<Self> {
        let shift = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(shift)
        } else {
            self.0.checked_sub_days(shift)
        };
        shifted
            .map(Date)
            .ok_or_else(|| AmortisError::invalid_date(format!("{self} + {days} days is out of range")))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would not exist (Jan 31 + 1 month), it is clamped
    /// to the last day of the target month.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> AmortisResult<Self> {
        let total_months = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(months);
        let new_year = i32::try_from(total_months.div_euclid(12))
            .map_err(|_| AmortisError::invalid_date(format!("{self} + {months} months overflows")))?;
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));
        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date, clamping Feb 29 to Feb 28.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> AmortisResult<Self> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| AmortisError::invalid_date(format!("{self} + {years} years overflows")))?;
        self.add_months(months)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns January 1 of the following year.
    #[must_use]
    pub fn start_of_next_year(&self) -> Self {
        self.add_days(i64::from(self.days_in_year() - self.day_of_year()) + 1)
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        self.add_days(1 - i64::from(self.day()))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.add_days(i64::from(self.days_in_month() - self.day()))
    }

    /// Checks if the date is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is a weekday (Monday through Friday).
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Returns the Monday on or before this date.
    #[must_use]
    pub fn start_of_week(&self) -> Self {
        self.add_days(-i64::from(self.weekday().num_days_from_monday()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = AmortisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Number of days in `month` of `year`.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Gregorian leap-year rule.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
