//! Nominal interest rates with a compounding convention.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Compounding;
use crate::error::{AmortisError, AmortisResult};
use crate::math::{decimal_from_f64, exp, ln, powd, powi};

/// A nominal annual rate and the convention it compounds under.
///
/// The rate is stored as a decimal fraction (`0.065` is 6.5%). Negative
/// rates are valid. Conversions between conventions preserve the effective
/// annual rate; SIMPLE has no effective annual rate without a tenor and so
/// cannot be converted.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::{Compounding, InterestRate};
/// use rust_decimal_macros::dec;
///
/// let monthly = InterestRate::new(dec!(0.06), Compounding::Monthly);
/// let annual = monthly.convert_to(Compounding::Annual).unwrap();
/// assert!(annual.rate() > dec!(0.0616) && annual.rate() < dec!(0.0617));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterestRate {
    rate: Decimal,
    compounding: Compounding,
}

impl InterestRate {
    /// Creates a rate from a decimal fraction.
    #[must_use]
    pub fn new(rate: Decimal, compounding: Compounding) -> Self {
        Self { rate, compounding }
    }

    /// Creates a rate from an exact percentage (`6.5` is 6.5%).
    #[must_use]
    pub fn from_percentage(percent: Decimal, compounding: Compounding) -> Self {
        Self::new(percent / Decimal::ONE_HUNDRED, compounding)
    }

    /// Creates a rate from a float percentage (`6.5` is 6.5%).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidNumericInput` for non-finite input.
    pub fn from_percent(percent: f64, compounding: Compounding) -> AmortisResult<Self> {
        Ok(Self::from_percentage(decimal_from_f64(percent)?, compounding))
    }

    /// Creates a rate from a float fraction (`0.065` is 6.5%).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidNumericInput` for non-finite input.
    pub fn from_float(rate: f64, compounding: Compounding) -> AmortisResult<Self> {
        Ok(Self::new(decimal_from_f64(rate)?, compounding))
    }

    /// Creates a rate from whole basis points.
    #[must_use]
    pub fn from_basis_points(bps: i64, compounding: Compounding) -> Self {
        Self::new(Decimal::from(bps) / Decimal::from(10_000), compounding)
    }

    /// Returns the nominal rate as a decimal fraction.
    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the compounding convention.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn to_percent(&self) -> Decimal {
        self.rate * Decimal::ONE_HUNDRED
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub fn to_basis_points(&self) -> Decimal {
        self.rate * Decimal::from(10_000)
    }

    /// Growth of one unit over `t` years.
    ///
    /// - Simple: `1 + r t`
    /// - Periodic with frequency `m`: `(1 + r/m)^(m t)`
    /// - Continuous: `e^(r t)`
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::MathError` on overflow or when the periodic
    /// base `1 + r/m` is not positive for a fractional exponent.
    pub fn compound_factor(&self, t: Decimal) -> AmortisResult<Decimal> {
        match self.compounding {
            Compounding::Simple => Ok(Decimal::ONE + self.rate * t),
            Compounding::Continuous => exp(self.rate * t),
            periodic => {
                let m = Decimal::from(periodic.periods_per_year().unwrap_or(1));
                powd(Decimal::ONE + self.rate / m, m * t)
            }
        }
    }

    /// Present value of one unit due in `t` years, the inverse of
    /// [`InterestRate::compound_factor`].
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::MathError` if the compound factor is zero or
    /// cannot be computed.
    pub fn discount_factor(&self, t: Decimal) -> AmortisResult<Decimal> {
        if self.compounding.is_continuous() {
            return exp(-(self.rate * t));
        }
        let growth = self.compound_factor(t)?;
        Decimal::ONE.checked_div(growth).ok_or_else(|| {
            AmortisError::math_error(format!("zero compound factor for {self} over {t} years"))
        })
    }

    /// Effective annual rate.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::UnsupportedConversion` for SIMPLE rates.
    pub fn effective_annual_rate(&self) -> AmortisResult<Decimal> {
        match self.compounding {
            Compounding::Simple => Err(AmortisError::unsupported_conversion(
                Compounding::Simple,
                Compounding::Annual,
            )),
            Compounding::Continuous => Ok(exp(self.rate)? - Decimal::ONE),
            periodic => {
                let m = periodic.periods_per_year().unwrap_or(1);
                let base = Decimal::ONE + self.rate / Decimal::from(m);
                Ok(powi(base, i64::from(m))? - Decimal::ONE)
            }
        }
    }

    /// Returns the equivalent rate under `target`, with the same effective
    /// annual rate.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::UnsupportedConversion` when either side is
    /// SIMPLE (and they differ), and `AmortisError::MathError` if the
    /// effective rate is at or below -100%.
    pub fn convert_to(&self, target: Compounding) -> AmortisResult<Self> {
        if self.compounding == target {
            return Ok(*self);
        }
        if self.compounding.is_simple() || target.is_simple() {
            return Err(AmortisError::unsupported_conversion(self.compounding, target));
        }

        let ear = self.effective_annual_rate()?;
        let log_growth = ln(Decimal::ONE + ear)?;
        let rate = match target.periods_per_year() {
            None => log_growth,
            Some(1) => ear,
            Some(m) => {
                let m = Decimal::from(m);
                m * (exp(log_growth / m)? - Decimal::ONE)
            }
        };
        Ok(Self::new(rate, target))
    }

    /// Rate earned per payment period when paying `payments_per_year` times.
    ///
    /// When the compounding frequency matches the payment frequency this is
    /// exactly `r / n`. Otherwise the rate is first expressed with payment
    /// frequency compounding through the effective annual rate. SIMPLE rates
    /// are split evenly.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::NonPositiveAmount` for a zero frequency.
    pub fn periodic_rate(&self, payments_per_year: u32) -> AmortisResult<Decimal> {
        if payments_per_year == 0 {
            return Err(AmortisError::non_positive(
                "payment frequency",
                "periodic rate needs at least one payment per year",
            ));
        }
        let n = Decimal::from(payments_per_year);

        match self.compounding {
            Compounding::Simple => Ok(self.rate / n),
            Compounding::Continuous => Ok(exp(self.rate / n)? - Decimal::ONE),
            c if c.periods_per_year() == Some(payments_per_year) => Ok(self.rate / n),
            _ => {
                let ear = self.effective_annual_rate()?;
                Ok(exp(ln(Decimal::ONE + ear)? / n)? - Decimal::ONE)
            }
        }
    }

    /// Returns true if the nominal rate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rate.is_zero()
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}% {}", self.to_percent(), self.compounding)
    }
}
