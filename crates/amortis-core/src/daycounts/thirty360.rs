//! 30/360 day count conventions.
//!
//! Both variants count every month as 30 days and the year as 360 days; they
//! differ only in how a day-of-month of 31 is adjusted.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Day count under 30-day months once `d1` and `d2` are adjusted.
#[inline]
fn thirty_360_days(start: Date, end: Date, d1: u32, d2: u32) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    let days = i64::from(d2) - i64::from(d1);
    360 * years + 30 * months + days
}

// =============================================================================
// 30/360 US (Bond Basis)
// =============================================================================

/// 30/360 US day count convention (Bond Basis).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 AND D1 is now >= 30, change D2 to 30
///
/// No February end-of-month adjustment is applied.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let d1 = if start.day() == 31 { 30 } else { start.day() };
        let d2 = if end.day() == 31 && d1 >= 30 {
            30
        } else {
            end.day()
        };
        thirty_360_days(start, end, d1, d2)
    }
}

// =============================================================================
// 30E/360 (Eurobond Basis)
// =============================================================================

/// 30E/360 day count convention (Eurobond Basis).
///
/// A day-of-month of 31 becomes 30 on both dates, independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let d1 = start.day().min(30);
        let d2 = end.day().min(30);
        thirty_360_days(start, end, d1, d2)
    }
}
