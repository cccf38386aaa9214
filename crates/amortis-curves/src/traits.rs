//! Core trait for discount curves.
//!
//! [`DiscountCurve`] is the contract every curve satisfies: discount factors
//! and spot rates by date, plus forward rates derived from discount factors.

use amortis_core::daycounts::{Act365Fixed, DayCount};
use amortis_core::types::{Compounding, Date, InterestRate};
use amortis_core::{AmortisError, AmortisResult};
use rust_decimal::Decimal;

/// A curve that discounts cash flows back to its valuation date.
///
/// The trait is object safe, so pricing code can take `&dyn DiscountCurve`
/// and work with any implementation.
///
/// # Required Methods
///
/// - [`valuation_date`](DiscountCurve::valuation_date)
/// - [`discount_factor`](DiscountCurve::discount_factor)
/// - [`spot_rate`](DiscountCurve::spot_rate)
///
/// # Provided Methods
///
/// - [`time_to`](DiscountCurve::time_to): ACT/365 Fixed time from valuation
/// - [`forward_rate`](DiscountCurve::forward_rate): simple forward between two dates
pub trait DiscountCurve: Send + Sync {
    /// Returns the curve's valuation date.
    fn valuation_date(&self) -> Date;

    /// Returns the present value of one unit paid on `date`.
    ///
    /// Dates on or before the valuation date discount at exactly 1.
    fn discount_factor(&self, date: Date) -> AmortisResult<Decimal>;

    /// Returns the spot rate from the valuation date to `date`.
    fn spot_rate(&self, date: Date) -> AmortisResult<InterestRate>;

    /// Returns ACT/365 Fixed time in years from the valuation date to `date`.
    ///
    /// The result is negative for dates before the valuation date.
    fn time_to(&self, date: Date) -> Decimal {
        Act365Fixed.year_fraction(self.valuation_date(), date)
    }

    /// Simple forward rate over `[start, end]` implied by discount factors:
    /// `(DF(start) / DF(end) - 1) / τ` with `τ` the ACT/365 Fixed fraction.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDateRange` if `end <= start`.
    fn forward_rate(&self, start: Date, end: Date) -> AmortisResult<InterestRate> {
        if end <= start {
            return Err(AmortisError::invalid_date_range(start, end));
        }

        let df_start = self.discount_factor(start)?;
        let df_end = self.discount_factor(end)?;
        let tau = Act365Fixed.year_fraction(start, end);

        let growth = df_start.checked_div(df_end).ok_or_else(|| {
            AmortisError::math_error(format!("zero discount factor at {end}"))
        })?;
        let rate = (growth - Decimal::ONE)
            .checked_div(tau)
            .ok_or_else(|| AmortisError::math_error(format!("zero accrual from {start} to {end}")))?;

        Ok(InterestRate::new(rate, Compounding::Simple))
    }
}

impl<T: DiscountCurve + ?Sized> DiscountCurve for &T {
    fn valuation_date(&self) -> Date {
        (**self).valuation_date()
    }

    fn discount_factor(&self, date: Date) -> AmortisResult<Decimal> {
        (**self).discount_factor(date)
    }

    fn spot_rate(&self, date: Date) -> AmortisResult<InterestRate> {
        (**self).spot_rate(date)
    }
}

impl<T: DiscountCurve + ?Sized> DiscountCurve for Box<T> {
    fn valuation_date(&self) -> Date {
        (**self).valuation_date()
    }

    fn discount_factor(&self, date: Date) -> AmortisResult<Decimal> {
        (**self).discount_factor(date)
    }

    fn spot_rate(&self, date: Date) -> AmortisResult<InterestRate> {
        (**self).spot_rate(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Discount factors fixed by hand: 1 at valuation, 0.95 one year later.
    struct TwoPointCurve;

    impl DiscountCurve for TwoPointCurve {
        fn valuation_date(&self) -> Date {
            Date::from_ymd(2025, 1, 1).unwrap()
        }

        fn discount_factor(&self, date: Date) -> AmortisResult<Decimal> {
            Ok(if date <= self.valuation_date() { Decimal::ONE } else { dec!(0.95) })
        }

        fn spot_rate(&self, _date: Date) -> AmortisResult<InterestRate> {
            Ok(InterestRate::new(dec!(0.05), Compounding::Simple))
        }
    }

    #[test]
    fn test_forward_rate_from_discount_factors() {
        let curve = TwoPointCurve;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        let fwd = curve.forward_rate(start, end).unwrap();
        assert_eq!(fwd.compounding(), Compounding::Simple);
        assert_eq!(fwd.rate(), (Decimal::ONE / dec!(0.95) - Decimal::ONE) / Decimal::ONE);
    }

    #[test]
    fn test_forward_rate_rejects_empty_or_reversed_range() {
        let curve = TwoPointCurve;
        let d = Date::from_ymd(2025, 6, 1).unwrap();
        assert_eq!(
            curve.forward_rate(d, d).unwrap_err(),
            AmortisError::invalid_date_range(d, d)
        );
        assert!(curve.forward_rate(d, d.add_days(-1)).is_err());
    }

    #[test]
    fn test_time_to_is_act365() {
        let curve = TwoPointCurve;
        assert_eq!(curve.time_to(Date::from_ymd(2026, 1, 1).unwrap()), Decimal::ONE);
        assert_eq!(curve.time_to(Date::from_ymd(2024, 12, 31).unwrap()), dec!(-1) / dec!(365));
    }

    fn df_via_generic(curve: impl DiscountCurve, date: Date) -> Decimal {
        curve.discount_factor(date).unwrap()
    }

    #[test]
    fn test_trait_object_and_references() {
        let boxed: Box<dyn DiscountCurve> = Box::new(TwoPointCurve);
        let d = Date::from_ymd(2025, 7, 1).unwrap();
        assert_eq!(df_via_generic(&TwoPointCurve, d), dec!(0.95));
        assert_eq!(df_via_generic(boxed, d), dec!(0.95));
    }
}
