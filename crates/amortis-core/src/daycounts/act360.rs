//! Actual/360 day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Actual calendar days over a fixed 360-day year.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_act360_basic() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 4, 1).unwrap();

        // Jan has 31, Feb has 28, Mar has 31 = 90 days
        assert_eq!(dc.day_count(start, end), 90);
        assert_eq!(dc.year_fraction(start, end), dec!(0.25));
    }

    #[test]
    fn test_act360_full_year() {
        let dc = Act360;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert_eq!(dc.year_fraction(start, end), dec!(366) / dec!(360));
    }
}
