//! Decimal math helpers.
//!
//! Transcendental functions are evaluated by series directly in `Decimal`, so
//! results are reproducible bit for bit across platforms. Integral powers use
//! exact square-and-multiply. Every helper reports overflow as
//! `AmortisError::MathError` instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;

use crate::error::{AmortisError, AmortisResult};

/// ln(2) to 28 decimal places.
const LN_2: Decimal = dec!(0.6931471805599453094172321215);

/// Maximum series terms before giving up on convergence.
const MAX_TERMS: u32 = 200;

/// Converts a binary float to a `Decimal` at an ingestion boundary.
///
/// The conversion uses the shortest decimal string that round-trips the
/// float (`0.1_f64` becomes exactly `0.1`), so the result is the value a
/// reader sees in source code rather than the float's binary expansion.
///
/// # Errors
///
/// Returns `AmortisError::InvalidNumericInput` for NaN, infinities, and
/// magnitudes outside the `Decimal` range.
pub fn decimal_from_f64(value: f64) -> AmortisResult<Decimal> {
    if !value.is_finite() {
        return Err(AmortisError::invalid_numeric(format!(
            "{value} is not a finite number"
        )));
    }
    Decimal::from_str(&value.to_string())
        .map(|d| d.normalize())
        .map_err(|_| AmortisError::invalid_numeric(format!("{value} is outside the decimal range")))
}

/// Rounds half-to-even at `dp` decimal places.
#[must_use]
pub fn round_half_even(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// `base^exponent` for an integral exponent by square-and-multiply.
///
/// # Errors
///
/// Returns `AmortisError::MathError` on overflow or on `0^negative`.
pub fn powi(base: Decimal, exponent: i64) -> AmortisResult<Decimal> {
    let overflow = || AmortisError::math_error(format!("{base}^{exponent} overflows"));

    let mut result = Decimal::ONE;
    let mut factor = base;
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(factor).ok_or_else(overflow)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor.checked_mul(factor).ok_or_else(overflow)?;
        }
    }

    if exponent < 0 {
        Decimal::ONE.checked_div(result).ok_or_else(overflow)
    } else {
        Ok(result)
    }
}

/// `e^x`.
///
/// Reduces `x = k ln2 + r` with `|r| <= ln2 / 2`, sums the Taylor series of
/// `e^r`, and scales by `2^k`.
///
/// # Errors
///
/// Returns `AmortisError::MathError` if the result overflows.
pub fn exp(x: Decimal) -> AmortisResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::ONE);
    }
    if x.is_sign_negative() {
        // Below the smallest representable magnitude the result is zero.
        return match exp(-x) {
            Ok(inverse) => Ok(Decimal::ONE / inverse),
            Err(_) => Ok(Decimal::ZERO),
        };
    }

    let overflow = || AmortisError::math_error(format!("exp({x}) overflows"));
    let k = x.checked_div(LN_2).ok_or_else(overflow)?.round();
    let r = x - k * LN_2;
    let k = i64::try_from(k).map_err(|_| overflow())?;

    let mut sum = Decimal::ONE;
    let mut term = Decimal::ONE;
    for n in 1..=MAX_TERMS {
        term = term * r / Decimal::from(n);
        if term.is_zero() {
            break;
        }
        sum += term;
    }

    let scale = powi(Decimal::TWO, k).map_err(|_| overflow())?;
    sum.checked_mul(scale).ok_or_else(overflow)
}

/// Natural logarithm.
///
/// Reduces `x = m 2^k` with `m` in `[0.75, 1.5)`, then evaluates
/// `ln m = 2 atanh((m - 1) / (m + 1))`.
///
/// # Errors
///
/// Returns `AmortisError::MathError` for `x <= 0`.
pub fn ln(x: Decimal) -> AmortisResult<Decimal> {
    if x <= Decimal::ZERO {
        return Err(AmortisError::math_error(format!(
            "logarithm of non-positive value {x}"
        )));
    }
    if x == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    let mut m = x;
    let mut k = 0i64;
    while m >= dec!(1.5) {
        m /= Decimal::TWO;
        k += 1;
    }
    while m < dec!(0.75) {
        m *= Decimal::TWO;
        k -= 1;
    }

    Ok(Decimal::from(k) * LN_2 + two_atanh((m - Decimal::ONE) / (m + Decimal::ONE)))
}

/// `2 atanh(y) = 2 (y + y^3/3 + y^5/5 + ...)` for `|y| < 1`.
fn two_atanh(y: Decimal) -> Decimal {
    let y2 = y * y;
    let mut power = y;
    let mut sum = Decimal::ZERO;
    for n in 0..MAX_TERMS {
        let term = power / Decimal::from(2 * n + 1);
        if term.is_zero() {
            break;
        }
        sum += term;
        power *= y2;
    }
    Decimal::TWO * sum
}

/// `base^exponent` for a real exponent.
///
/// Integral exponents go through [`powi`] and stay exact; otherwise the
/// result is `e^(exponent ln base)`, which requires `base > 0`.
///
/// # Errors
///
/// Returns `AmortisError::MathError` on overflow or a non-positive base with
/// a fractional exponent.
pub fn powd(base: Decimal, exponent: Decimal) -> AmortisResult<Decimal> {
    if exponent.fract().is_zero() {
        if let Ok(n) = i64::try_from(exponent) {
            return powi(base, n);
        }
    }
    let log = ln(base)?;
    let product = exponent
        .checked_mul(log)
        .ok_or_else(|| AmortisError::math_error(format!("{base}^{exponent} overflows")))?;
    exp(product)
}
