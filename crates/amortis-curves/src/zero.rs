//! Zero-rate curve.

use amortis_core::math::{decimal_from_f64, exp};
use amortis_core::types::{Compounding, Date, InterestRate};
use amortis_core::{AmortisError, AmortisResult};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interpolation::InterpolationType;
use crate::traits::DiscountCurve;

/// A curve of continuously compounded zero rates at pivot dates.
///
/// Between pivots the zero rate is interpolated over ACT/365 Fixed time from
/// the valuation date (not over calendar dates). Outside the pivot range the
/// rate is clamped flat to the nearest boundary pivot. Discount factors are
/// `exp(-r·t)`, and exactly 1 on or before the valuation date.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::Date;
/// use amortis_curves::{DiscountCurve, ZeroCurve};
/// use rust_decimal_macros::dec;
///
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
/// let curve = ZeroCurve::from_rates(
///     valuation,
///     vec![
///         (Date::from_ymd(2025, 1, 1).unwrap(), dec!(0.05)),
///         (Date::from_ymd(2026, 1, 1).unwrap(), dec!(0.055)),
///     ],
/// )
/// .unwrap();
///
/// // Before the first pivot the rate is clamped flat
/// let early = curve.spot_rate(Date::from_ymd(2024, 6, 1).unwrap()).unwrap();
/// assert_eq!(early.rate(), dec!(0.05));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ZeroCurveInput", try_from = "ZeroCurveInput")]
pub struct ZeroCurve {
    valuation_date: Date,
    dates: Vec<Date>,
    rates: Vec<Decimal>,
    times: Vec<Decimal>,
    interpolation: InterpolationType,
}

impl ZeroCurve {
    /// Builds a curve from `(date, continuously compounded rate)` pivots.
    ///
    /// # Errors
    ///
    /// - `AmortisError::EmptyCurve` if `pivots` is empty
    /// - `AmortisError::UnsortedPivots` if the dates are not strictly increasing
    /// - `AmortisError::InvalidDateRange` if a pivot is on or before the
    ///   valuation date
    pub fn from_rates(valuation_date: Date, pivots: Vec<(Date, Decimal)>) -> AmortisResult<Self> {
        if pivots.is_empty() {
            return Err(AmortisError::EmptyCurve);
        }

        if let Some(index) = pivots.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(AmortisError::UnsortedPivots { index: index + 1 });
        }

        let first = pivots[0].0;
        if first <= valuation_date {
            return Err(AmortisError::invalid_date_range(valuation_date, first));
        }

        let (dates, rates): (Vec<Date>, Vec<Decimal>) = pivots.into_iter().unzip();
        let times = dates
            .iter()
            .map(|d| Decimal::from(valuation_date.days_between(d)) / Decimal::from(365))
            .collect();

        debug!(
            "Zero curve as of {valuation_date}: {} pivots from {} to {}",
            dates.len(),
            dates[0],
            dates[dates.len() - 1]
        );

        Ok(Self {
            valuation_date,
            dates,
            rates,
            times,
            interpolation: InterpolationType::default(),
        })
    }

    /// Builds a curve from float rates, converting each at the boundary.
    ///
    /// # Errors
    ///
    /// As [`ZeroCurve::from_rates`], plus `AmortisError::InvalidNumericInput`
    /// for a non-finite rate.
    pub fn from_float_rates(valuation_date: Date, pivots: Vec<(Date, f64)>) -> AmortisResult<Self> {
        let pivots = pivots
            .into_iter()
            .map(|(date, rate)| Ok((date, decimal_from_f64(rate)?)))
            .collect::<AmortisResult<Vec<_>>>()?;
        Self::from_rates(valuation_date, pivots)
    }

    /// Returns a copy of the curve using `interpolation` between pivots.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: InterpolationType) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Returns the pivot dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the pivot zero rates.
    #[must_use]
    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    /// Returns the interpolation scheme.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationType {
        self.interpolation
    }

    /// Returns the last pivot date.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Interpolated continuously compounded zero rate at time `t`.
    fn zero_rate_at(&self, t: Decimal) -> Decimal {
        let last = self.times.len() - 1;
        if t <= self.times[0] {
            return self.rates[0];
        }
        if t >= self.times[last] {
            return self.rates[last];
        }

        // First pivot at or after t; 1 <= upper <= last
        let upper = self.times.partition_point(|&ti| ti < t);
        if self.times[upper] == t {
            return self.rates[upper];
        }
        let lower = upper - 1;
        self.interpolation.interpolate(
            (self.times[lower], self.rates[lower]),
            (self.times[upper], self.rates[upper]),
            t,
        )
    }
}

impl DiscountCurve for ZeroCurve {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn discount_factor(&self, date: Date) -> AmortisResult<Decimal> {
        if date <= self.valuation_date {
            return Ok(Decimal::ONE);
        }
        let t = self.time_to(date);
        let rate = self.zero_rate_at(t);
        let exponent = rate
            .checked_mul(t)
            .ok_or_else(|| AmortisError::math_error(format!("rate {rate} over {t} years overflows")))?;
        exp(-exponent)
    }

    fn spot_rate(&self, date: Date) -> AmortisResult<InterestRate> {
        let rate = self.zero_rate_at(self.time_to(date));
        Ok(InterestRate::new(rate, Compounding::Continuous))
    }
}

/// Serialized form of a [`ZeroCurve`]: the construction inputs only, so
/// deserialization re-runs validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ZeroCurveInput {
    valuation_date: Date,
    pivots: Vec<(Date, Decimal)>,
    #[serde(default)]
    interpolation: InterpolationType,
}

impl From<ZeroCurve> for ZeroCurveInput {
    fn from(curve: ZeroCurve) -> Self {
        Self {
            valuation_date: curve.valuation_date,
            pivots: curve.dates.into_iter().zip(curve.rates).collect(),
            interpolation: curve.interpolation,
        }
    }
}

impl TryFrom<ZeroCurveInput> for ZeroCurve {
    type Error = AmortisError;

    fn try_from(input: ZeroCurveInput) -> Result<Self, Self::Error> {
        Ok(ZeroCurve::from_rates(input.valuation_date, input.pivots)?.with_interpolation(input.interpolation))
    }
}

impl std::fmt::Display for ZeroCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ZeroCurve({} pivots, {} to {}, {})",
            self.dates.len(),
            self.dates[0],
            self.max_date(),
            self.interpolation
        )
    }
}
