//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to move a date that falls on a weekend or
/// holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.month() != date.month() {
                preceding(date, calendar)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar);
            if adjusted.month() != date.month() {
                following(date, calendar)
            } else {
                adjusted
            }
        }
    }
}

/// Returns the next business day on or after the given date.
pub(crate) fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

/// Returns the previous business day on or before the given date.
pub(crate) fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendCalendar;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_following() {
        // Saturday should roll to Monday
        let adjusted = adjust(d(2025, 1, 4), BusinessDayConvention::Following, &WeekendCalendar);
        assert_eq!(adjusted, d(2025, 1, 6));
    }

    #[test]
    fn test_preceding() {
        // Saturday should roll to Friday
        let adjusted = adjust(d(2025, 1, 4), BusinessDayConvention::Preceding, &WeekendCalendar);
        assert_eq!(adjusted, d(2025, 1, 3));
    }

    #[test]
    fn test_modified_following_stays_in_month() {
        // Saturday 2025-05-31 would roll into June, so roll back to Friday
        let adjusted = adjust(
            d(2025, 5, 31),
            BusinessDayConvention::ModifiedFollowing,
            &WeekendCalendar,
        );
        assert_eq!(adjusted, d(2025, 5, 30));

        // Sunday Jan 5 rolls to Monday Jan 6 (same month)
        let adjusted = adjust(
            d(2025, 1, 5),
            BusinessDayConvention::ModifiedFollowing,
            &WeekendCalendar,
        );
        assert_eq!(adjusted, d(2025, 1, 6));
    }

    #[test]
    fn test_modified_preceding_stays_in_month() {
        // Saturday 2025-03-01 would roll into February, so roll forward to Monday
        let adjusted = adjust(
            d(2025, 3, 1),
            BusinessDayConvention::ModifiedPreceding,
            &WeekendCalendar,
        );
        assert_eq!(adjusted, d(2025, 3, 3));
    }

    #[test]
    fn test_unadjusted() {
        let saturday = d(2025, 1, 4);
        assert_eq!(
            adjust(saturday, BusinessDayConvention::Unadjusted, &WeekendCalendar),
            saturday
        );
    }

    #[test]
    fn test_business_day_unchanged() {
        let monday = d(2025, 1, 6);
        assert_eq!(
            adjust(monday, BusinessDayConvention::Following, &WeekendCalendar),
            monday
        );
    }
}
