//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait for business-day predicates and rolling
//! - [`BusinessDayCalendar`], a named calendar owning its holiday set
//! - [`WeekendCalendar`], a holiday-free calendar
//! - Business day adjustment conventions
//! - Payment-date generation from an anchor date

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

mod conventions;

pub use conventions::{adjust, BusinessDayConvention};

use crate::error::{AmortisError, AmortisResult};
use crate::types::{Date, Period};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days and which are weekends
/// or holidays.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is not a business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        conventions::following(date, self)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        conventions::preceding(date, self)
    }

    /// Counts business days in `[start, end)`.
    ///
    /// The count is negated when `end` precedes `start`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let (from, to, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let mut count = 0i64;
        let mut current = from;
        while current < to {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }
        count * sign
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}

/// A named calendar with an explicit holiday set.
///
/// Saturdays and Sundays are never business days; the holiday set adds
/// further closures. The calendar owns its holidays and is immutable once
/// built; [`BusinessDayCalendar::with_holiday`] returns a new calendar.
///
/// # Example
///
/// ```rust
/// use amortis_core::calendars::{BusinessDayCalendar, BusinessDayConvention, Calendar};
/// use amortis_core::types::Date;
///
/// let new_year = Date::from_ymd(2025, 1, 1).unwrap();
/// let cal = BusinessDayCalendar::new("NYC", [new_year]);
///
/// assert!(!cal.is_business_day(new_year));
/// assert_eq!(
///     cal.adjust(new_year, BusinessDayConvention::Following),
///     Date::from_ymd(2025, 1, 2).unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessDayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl BusinessDayCalendar {
    /// Creates a calendar from a name and holiday dates.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Creates a calendar with weekends only.
    pub fn weekends_only(name: impl Into<String>) -> Self {
        Self::new(name, std::iter::empty())
    }

    /// Returns a copy of this calendar with one more holiday.
    #[must_use]
    pub fn with_holiday(&self, date: Date) -> Self {
        let mut holidays = self.holidays.clone();
        holidays.insert(date);
        Self {
            name: self.name.clone(),
            holidays,
        }
    }

    /// Returns the explicit holiday set.
    #[must_use]
    pub fn holidays(&self) -> &BTreeSet<Date> {
        &self.holidays
    }
}

impl Calendar for BusinessDayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.holidays.contains(&date)
    }
}

/// Generates `count` dates `anchor + i * step` for `i` in `0..count`.
///
/// Each date is computed from the anchor rather than from its predecessor, so
/// a Jan 31 anchor with a `1M` step yields Feb 29, Mar 31, Apr 30 and so on
/// instead of drifting to the 29th. With a calendar, each date is then
/// adjusted under `convention`.
///
/// # Errors
///
/// Returns `AmortisError::InvalidTerm` if the step count overflows, or
/// `AmortisError::InvalidDate` if a date leaves the supported range.
pub fn generate_payment_dates(
    anchor: Date,
    step: Period,
    count: usize,
    calendar: Option<&dyn Calendar>,
    convention: BusinessDayConvention,
) -> AmortisResult<Vec<Date>> {
    debug!(
        "Generating {count} payment dates from {anchor} every {step} ({})",
        calendar.map_or("unadjusted", |c| c.name())
    );

    (0..count)
        .map(|i| {
            let factor = i32::try_from(i)
                .map_err(|_| AmortisError::invalid_term(format!("{count} periods")))?;
            let date = step.scaled(factor)?.add_to_date(anchor)?;
            Ok(match calendar {
                Some(cal) => cal.adjust(date, convention),
                None => date,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;
        assert!(cal.is_business_day(d(2025, 1, 6)));
        assert!(!cal.is_business_day(d(2025, 1, 4)));
        assert!(cal.is_holiday(d(2025, 1, 5)));
    }

    #[test]
    fn test_holiday_calendar() {
        let cal = BusinessDayCalendar::new("TEST", [d(2025, 12, 25), d(2025, 12, 26)]);
        assert_eq!(cal.name(), "TEST");
        assert!(!cal.is_business_day(d(2025, 12, 25)));
        assert!(cal.is_business_day(d(2025, 12, 24)));
        assert_eq!(
            cal.adjust(d(2025, 12, 25), BusinessDayConvention::Following),
            d(2025, 12, 29)
        );
        assert_eq!(
            cal.adjust(d(2025, 12, 26), BusinessDayConvention::Preceding),
            d(2025, 12, 24)
        );
    }

    #[test]
    fn test_with_holiday_is_non_destructive() {
        let base = BusinessDayCalendar::weekends_only("BASE");
        let extended = base.with_holiday(d(2025, 7, 4));
        assert!(base.is_business_day(d(2025, 7, 4)));
        assert!(!extended.is_business_day(d(2025, 7, 4)));
        assert_eq!(extended.holidays().len(), 1);
    }

    #[test]
    fn test_business_days_between_half_open() {
        let cal = BusinessDayCalendar::new("TEST", [d(2025, 1, 8)]);
        // Mon 6 .. Mon 13: Mon, Tue, Thu, Fri (Wed 8 is a holiday)
        assert_eq!(cal.business_days_between(d(2025, 1, 6), d(2025, 1, 13)), 4);
        assert_eq!(cal.business_days_between(d(2025, 1, 13), d(2025, 1, 6)), -4);
        assert_eq!(cal.business_days_between(d(2025, 1, 6), d(2025, 1, 6)), 0);
        // Start counts, end does not
        assert_eq!(cal.business_days_between(d(2025, 1, 6), d(2025, 1, 7)), 1);
    }

    #[test]
    fn test_add_business_days() {
        let cal = WeekendCalendar;
        assert_eq!(cal.add_business_days(d(2025, 1, 3), 1), d(2025, 1, 6));
        assert_eq!(cal.add_business_days(d(2025, 1, 6), -1), d(2025, 1, 3));
        assert_eq!(cal.next_business_day(d(2025, 1, 4)), d(2025, 1, 6));
        assert_eq!(cal.previous_business_day(d(2025, 1, 4)), d(2025, 1, 3));
    }

    #[test]
    fn test_generate_payment_dates_from_anchor() {
        let dates = generate_payment_dates(
            d(2024, 1, 31),
            Period::months(1),
            4,
            None,
            BusinessDayConvention::Unadjusted,
        )
        .unwrap();
        assert_eq!(dates, vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31), d(2024, 4, 30)]);
    }

    #[test]
    fn test_generate_payment_dates_adjusted() {
        let cal = WeekendCalendar;
        let dates = generate_payment_dates(
            d(2025, 5, 31),
            Period::months(1),
            2,
            Some(&cal),
            BusinessDayConvention::ModifiedFollowing,
        )
        .unwrap();
        // Sat 31 May -> Fri 30 May; 30 Jun is a Monday
        assert_eq!(dates, vec![d(2025, 5, 30), d(2025, 6, 30)]);
    }

    #[test]
    fn test_generate_zero_dates() {
        let dates =
            generate_payment_dates(d(2025, 1, 1), Period::weeks(2), 0, None, BusinessDayConvention::Following)
                .unwrap();
        assert!(dates.is_empty());
    }
}
