//! Spread type in whole basis points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::InterestRate;
use crate::error::{AmortisError, AmortisResult};
use crate::math::{decimal_from_f64, round_half_even};

const BPS_PER_UNIT: i64 = 10_000;

/// A signed spread in whole basis points.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::{Compounding, InterestRate, Spread};
/// use rust_decimal_macros::dec;
///
/// let base = InterestRate::new(dec!(0.045), Compounding::Monthly);
/// let loan_rate = Spread::from_bps(250).apply_to(&base);
/// assert_eq!(loan_rate.rate(), dec!(0.07));
/// assert_eq!(loan_rate.compounding(), Compounding::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spread {
    bps: i64,
}

impl Spread {
    /// Creates a spread from basis points.
    #[must_use]
    pub const fn from_bps(bps: i64) -> Self {
        Self { bps }
    }

    /// Creates a spread from a decimal fraction, rounded half-even to whole bps.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidNumericInput` if the value does not fit.
    pub fn from_decimal(value: Decimal) -> AmortisResult<Self> {
        let bps = value
            .checked_mul(Decimal::from(BPS_PER_UNIT))
            .map(|v| round_half_even(v, 0))
            .and_then(|v| i64::try_from(v).ok())
            .ok_or_else(|| AmortisError::invalid_numeric(format!("spread {value} out of range")))?;
        Ok(Self::from_bps(bps))
    }

    /// Creates a spread from a float percentage (`2.5` is 250 bps).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidNumericInput` for non-finite input.
    pub fn from_percent(percent: f64) -> AmortisResult<Self> {
        Self::from_decimal(decimal_from_f64(percent)? / Decimal::ONE_HUNDRED)
    }

    /// Returns the spread in basis points.
    #[must_use]
    pub fn bps(&self) -> i64 {
        self.bps
    }

    /// Returns the spread as a decimal fraction (125 bps = 0.0125).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.bps) / Decimal::from(BPS_PER_UNIT)
    }

    /// Returns the spread as a percentage.
    #[must_use]
    pub fn to_percent(&self) -> Decimal {
        Decimal::from(self.bps) / Decimal::ONE_HUNDRED
    }

    /// Shifts the nominal rate by this spread, keeping its compounding.
    #[must_use]
    pub fn apply_to(&self, rate: &InterestRate) -> InterestRate {
        InterestRate::new(rate.rate() + self.to_decimal(), rate.compounding())
    }

    /// Returns true if the spread is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.bps > 0
    }

    /// Returns true if the spread is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.bps < 0
    }

    /// Returns true if the spread is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bps == 0
    }
}

impl Add for Spread {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_bps(self.bps + rhs.bps)
    }
}

impl Sub for Spread {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_bps(self.bps - rhs.bps)
    }
}

impl Mul<i64> for Spread {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from_bps(self.bps * rhs)
    }
}

impl Neg for Spread {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_bps(-self.bps)
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.bps)
    }
}
