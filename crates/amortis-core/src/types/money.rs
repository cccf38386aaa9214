//! Exact monetary amounts tagged with a currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use super::Currency;
use crate::error::{AmortisError, AmortisResult};
use crate::math::{decimal_from_f64, round_half_even};

/// A decimal amount in one currency.
///
/// Arithmetic between two amounts checks that the currencies agree and fails
/// with `CurrencyMismatch` otherwise. Amounts are not rounded implicitly; call
/// [`Money::round_to_currency`] to snap to minor units.
///
/// # Example
///
/// ```rust
/// use amortis_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let a = Money::new(dec!(100.10), Currency::USD);
/// let b = Money::new(dec!(0.20), Currency::USD);
/// assert_eq!(a.try_add(&b).unwrap().amount(), dec!(100.30));
/// assert!(a.try_add(&Money::new(dec!(1), Currency::EUR)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates an amount.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in `currency`.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Creates an amount from a float, rounded half-even to the currency's
    /// minor units.
    ///
    /// The float is first converted through its shortest round-trip decimal
    /// string, so `from_float(300000.00, USD)` is exactly `300000.00`. This is
    /// a convenience path; prefer [`Money::new`] for values known exactly.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidNumericInput` for NaN, infinities, or
    /// values outside the decimal range.
    pub fn from_float(amount: f64, currency: Currency) -> AmortisResult<Self> {
        let amount = decimal_from_f64(amount)?;
        Ok(Self::new(amount, currency).round_to_currency())
    }

    /// Parses a decimal string such as `"1234.56"`.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidNumericInput` if the string is not a decimal.
    pub fn from_str_amount(amount: &str, currency: Currency) -> AmortisResult<Self> {
        Decimal::from_str(amount.trim())
            .map(|amount| Self::new(amount, currency))
            .map_err(|e| AmortisError::invalid_numeric(format!("'{amount}': {e}")))
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Checks that `other` is in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` otherwise.
    pub fn check_currency(&self, other: Currency) -> AmortisResult<()> {
        if self.currency == other {
            Ok(())
        } else {
            Err(AmortisError::currency_mismatch(self.currency, other))
        }
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if the currencies differ.
    pub fn try_add(&self, other: &Self) -> AmortisResult<Self> {
        self.check_currency(other.currency)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if the currencies differ.
    pub fn try_sub(&self, other: &Self) -> AmortisResult<Self> {
        self.check_currency(other.currency)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Divides into `parts` equal shares (unrounded).
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::NonPositiveAmount` if `parts` is zero.
    pub fn divide(&self, parts: u32) -> AmortisResult<Self> {
        if parts == 0 {
            return Err(AmortisError::non_positive("divisor", "cannot divide money by zero"));
        }
        Ok(Self::new(self.amount / Decimal::from(parts), self.currency))
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency)
    }

    /// Rounds half-even to the currency's minor units.
    #[must_use]
    pub fn round_to_currency(&self) -> Self {
        Self::new(
            round_half_even(self.amount, self.currency.decimal_places()),
            self.currency,
        )
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Compares two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if the currencies differ.
    pub fn try_cmp(&self, other: &Self) -> AmortisResult<Ordering> {
        self.check_currency(other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.amount, self.currency)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            None
        } else {
            self.amount.partial_cmp(&other.amount)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_currency().amount;
        let text = format!("{:.*}", self.currency.decimal_places() as usize, rounded.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        match frac_part {
            Some(frac) => write!(f, "{} {sign}{grouped}.{frac}", self.currency),
            None => write!(f, "{} {sign}{grouped}", self.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_arithmetic_same_currency() {
        let a = usd(dec!(100.25));
        let b = usd(dec!(50.50));
        assert_eq!(a.try_add(&b).unwrap(), usd(dec!(150.75)));
        assert_eq!(a.try_sub(&b).unwrap(), usd(dec!(49.75)));
        assert_eq!(a * dec!(2), usd(dec!(200.50)));
        assert_eq!(-a, usd(dec!(-100.25)));
        assert_eq!(usd(dec!(-3)).abs(), usd(dec!(3)));
    }

    #[test]
    fn test_currency_mismatch() {
        let a = usd(dec!(1));
        let b = Money::new(dec!(1), Currency::EUR);
        assert_eq!(
            a.try_add(&b).unwrap_err(),
            AmortisError::currency_mismatch(Currency::USD, Currency::EUR)
        );
        assert!(a.try_sub(&b).is_err());
        assert!(a.try_cmp(&b).is_err());
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_divide() {
        assert_eq!(usd(dec!(100)).divide(4).unwrap(), usd(dec!(25)));
        assert!(matches!(
            usd(dec!(100)).divide(0),
            Err(AmortisError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_from_float_rounds_to_minor_units() {
        assert_eq!(Money::from_float(300_000.00, Currency::USD).unwrap(), usd(dec!(300000)));
        assert_eq!(Money::from_float(0.1 + 0.2, Currency::USD).unwrap().amount(), dec!(0.30));
        assert_eq!(Money::from_float(2.675, Currency::USD).unwrap().amount(), dec!(2.68));
        assert_eq!(Money::from_float(1234.5, Currency::JPY).unwrap().amount(), dec!(1234));
        assert!(Money::from_float(f64::NAN, Currency::USD).is_err());
    }

    #[test]
    fn test_from_str_amount() {
        assert_eq!(Money::from_str_amount("1234.56", Currency::USD).unwrap(), usd(dec!(1234.56)));
        assert!(matches!(
            Money::from_str_amount("12a", Currency::USD),
            Err(AmortisError::InvalidNumericInput { .. })
        ));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(usd(dec!(0.01)).is_positive());
        assert!(usd(dec!(-0.01)).is_negative());
        assert!(Money::zero(Currency::GBP).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(dec!(1234.56)).to_string(), "USD 1,234.56");
        assert_eq!(usd(dec!(1234567.891)).to_string(), "USD 1,234,567.89");
        assert_eq!(usd(dec!(-950)).to_string(), "USD -950.00");
        assert_eq!(usd(dec!(100000)).to_string(), "USD 100,000.00");
        assert_eq!(Money::new(dec!(1500000), Currency::JPY).to_string(), "JPY 1,500,000");
    }

    #[test]
    fn test_ordering() {
        assert!(usd(dec!(1)) < usd(dec!(2)));
        assert_eq!(usd(dec!(2)).try_cmp(&usd(dec!(1))).unwrap(), Ordering::Greater);
    }
}
