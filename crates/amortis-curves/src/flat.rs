//! Flat discount curve.

use amortis_core::types::{Date, InterestRate};
use amortis_core::AmortisResult;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::traits::DiscountCurve;

/// A curve with the same rate at every horizon.
///
/// Discount factors apply the rate under its own compounding convention over
/// ACT/365 Fixed time from the valuation date.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::{Compounding, Date, InterestRate};
/// use amortis_curves::{DiscountCurve, FlatDiscountCurve};
/// use rust_decimal_macros::dec;
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let curve = FlatDiscountCurve::new(InterestRate::new(dec!(0.05), Compounding::Annual), valuation);
///
/// let df = curve.discount_factor(Date::from_ymd(2026, 1, 1).unwrap()).unwrap();
/// assert_eq!(df.round_dp(10), (dec!(1) / dec!(1.05)).round_dp(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatDiscountCurve {
    rate: InterestRate,
    valuation_date: Date,
}

impl FlatDiscountCurve {
    /// Creates a flat curve at `rate` as of `valuation_date`.
    #[must_use]
    pub fn new(rate: InterestRate, valuation_date: Date) -> Self {
        debug!("Flat discount curve at {rate} as of {valuation_date}");
        Self {
            rate,
            valuation_date,
        }
    }

    /// Returns the curve rate.
    #[must_use]
    pub fn rate(&self) -> InterestRate {
        self.rate
    }
}

impl DiscountCurve for FlatDiscountCurve {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn discount_factor(&self, date: Date) -> AmortisResult<Decimal> {
        if date <= self.valuation_date {
            return Ok(Decimal::ONE);
        }
        self.rate.discount_factor(self.time_to(date))
    }

    fn spot_rate(&self, _date: Date) -> AmortisResult<InterestRate> {
        Ok(self.rate)
    }
}

impl std::fmt::Display for FlatDiscountCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FlatDiscountCurve({} as of {})", self.rate, self.valuation_date)
    }
}
