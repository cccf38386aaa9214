//! Amortization policies and the period-by-period repayment table.
//!
//! Every generated amount is rounded half-even to the currency's minor units
//! as it is produced. The final period always repays the whole outstanding
//! balance, so rounding residue lands in the last payment and the balance
//! closes at exactly zero.

use amortis_core::math::{powi, round_half_even};
use amortis_core::types::{Date, Money};
use amortis_core::{AmortisError, AmortisResult};
use log::trace;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How principal is repaid over the life of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AmortizationType {
    /// Equal total payments (mortgage-style)
    #[default]
    LevelPayment,
    /// Equal principal payments, interest on the outstanding balance
    LevelPrincipal,
    /// Interest every period, full principal with the last payment
    InterestOnly,
    /// Single settlement of principal and simple interest at maturity
    Bullet,
}

impl AmortizationType {
    /// Returns true if principal is repaid before maturity.
    #[must_use]
    pub fn amortizes(&self) -> bool {
        matches!(self, AmortizationType::LevelPayment | AmortizationType::LevelPrincipal)
    }

    /// Returns true if the loan settles in a single payment.
    #[must_use]
    pub fn is_single_settlement(&self) -> bool {
        matches!(self, AmortizationType::Bullet)
    }
}

impl fmt::Display for AmortizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AmortizationType::LevelPayment => "Level Payment",
            AmortizationType::LevelPrincipal => "Level Principal",
            AmortizationType::InterestOnly => "Interest Only",
            AmortizationType::Bullet => "Bullet",
        };
        write!(f, "{name}")
    }
}

/// One period of an amortization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number, starting at 1
    pub period: u32,
    /// Payment date
    pub date: Date,
    /// Interest paid this period
    pub interest: Money,
    /// Principal repaid this period
    pub principal: Money,
    /// Outstanding balance after this payment
    pub balance: Money,
}

impl AmortizationRow {
    /// Total paid this period.
    #[must_use]
    pub fn payment(&self) -> Money {
        Money::new(
            self.interest.amount() + self.principal.amount(),
            self.principal.currency(),
        )
    }
}

/// Level payment `P·p / (1 - (1+p)^-n)` before rounding, or `P/n` when `p` is zero.
///
/// # Errors
///
/// - `AmortisError::InvalidTerm` if `n` is zero
/// - `AmortisError::NonPositiveAmount` if `periodic_rate` is negative
/// - `AmortisError::MathError` if `(1+p)^n` overflows
pub fn level_payment(principal: Decimal, periodic_rate: Decimal, n: u32) -> AmortisResult<Decimal> {
    if n == 0 {
        return Err(AmortisError::invalid_term("level payment needs at least one payment"));
    }
    if periodic_rate < Decimal::ZERO {
        return Err(AmortisError::non_positive(
            "periodic rate",
            format!("must be non-negative, got {periodic_rate}"),
        ));
    }
    if periodic_rate.is_zero() {
        return Ok(principal / Decimal::from(n));
    }

    // P·p·g / (g - 1) with g = (1+p)^n, the same annuity without a negative power
    let growth = powi(Decimal::ONE + periodic_rate, i64::from(n))?;
    (principal * periodic_rate)
        .checked_mul(growth)
        .and_then(|v| v.checked_div(growth - Decimal::ONE))
        .ok_or_else(|| {
            AmortisError::math_error(format!(
                "level payment overflows for {n} periods at {periodic_rate}"
            ))
        })
}

/// Inputs to a periodic amortization run.
pub(crate) struct AmortizationInputs<'a> {
    pub(crate) policy: AmortizationType,
    pub(crate) principal: Money,
    pub(crate) periodic_rate: Decimal,
    pub(crate) dates: &'a [Date],
}

/// Builds the table for the periodic policies, one row per date.
///
/// `Bullet` is not periodic; [`bullet_row`] covers it.
pub(crate) fn amortize(inputs: &AmortizationInputs<'_>) -> AmortisResult<Vec<AmortizationRow>> {
    let currency = inputs.principal.currency();
    let dp = currency.decimal_places();
    let principal = inputs.principal.amount();
    let p = inputs.periodic_rate;
    let n = u32::try_from(inputs.dates.len())
        .map_err(|_| AmortisError::invalid_term(format!("{} periods", inputs.dates.len())))?;
    if n == 0 {
        return Err(AmortisError::invalid_term("schedule has no payment dates"));
    }

    let level = match inputs.policy {
        AmortizationType::LevelPayment => round_half_even(level_payment(principal, p, n)?, dp),
        AmortizationType::LevelPrincipal => round_half_even(principal / Decimal::from(n), dp),
        AmortizationType::InterestOnly | AmortizationType::Bullet => Decimal::ZERO,
    };

    let money = |amount| Money::new(amount, currency);
    let mut balance = principal;
    let mut rows = Vec::with_capacity(inputs.dates.len());

    for (i, &date) in inputs.dates.iter().enumerate() {
        let last = i + 1 == inputs.dates.len();
        let interest = round_half_even(balance * p, dp);
        let repaid = if last {
            balance
        } else {
            match inputs.policy {
                AmortizationType::LevelPayment => (level - interest).max(Decimal::ZERO).min(balance),
                AmortizationType::LevelPrincipal => level.min(balance),
                AmortizationType::InterestOnly | AmortizationType::Bullet => Decimal::ZERO,
            }
        };
        balance -= repaid;

        trace!(
            "Period {}/{n} {date}: interest {interest}, principal {repaid}, balance {balance}",
            i + 1
        );
        rows.push(AmortizationRow {
            period: i as u32 + 1,
            date,
            interest: money(interest),
            principal: money(repaid),
            balance: money(balance),
        });
    }

    Ok(rows)
}

/// The single settlement row of a bullet loan: principal plus simple
/// interest `P·r·T` over the whole term of `years`.
pub(crate) fn bullet_row(principal: Money, annual_rate: Decimal, years: Decimal, maturity: Date) -> AmortisResult<AmortizationRow> {
    let currency = principal.currency();
    let interest = principal
        .amount()
        .checked_mul(annual_rate)
        .and_then(|v| v.checked_mul(years))
        .ok_or_else(|| AmortisError::math_error(format!("bullet interest on {principal} overflows")))?;

    Ok(AmortizationRow {
        period: 1,
        date: maturity,
        interest: Money::new(round_half_even(interest, currency.decimal_places()), currency),
        principal,
        balance: Money::zero(currency),
    })
}
