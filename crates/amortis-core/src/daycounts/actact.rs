//! Actual/Actual ISDA day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The interval is split at each January 1; days falling in a leap year are
/// divided by 366 and all other days by 365, and the portions are summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start > end {
            return -self.year_fraction_forward(end, start);
        }
        self.year_fraction_forward(start, end)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

impl ActActIsda {
    fn year_fraction_forward(&self, start: Date, end: Date) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut current = start;

        // Whole or partial years up to the final year
        while current.year() < end.year() {
            let next_year = current.start_of_next_year();
            let days = current.days_between(&next_year);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
            current = next_year;
        }

        if current < end {
            let days = current.days_between(&end);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
        }

        total
    }
}
