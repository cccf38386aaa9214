//! Dated cash flows.

use amortis_core::types::{Date, Money};
use amortis_core::AmortisResult;
use amortis_curves::DiscountCurve;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Scheduled principal repayment
    Principal,
    /// Interest payment
    Interest,
    /// Fee or charge
    Fee,
    /// Unscheduled principal repayment
    Prepayment,
    /// Anything else
    Other,
}

impl CashFlowType {
    /// Returns true for scheduled and unscheduled principal.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(self, CashFlowType::Principal | CashFlowType::Prepayment)
    }
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Principal => "Principal",
            CashFlowType::Interest => "Interest",
            CashFlowType::Fee => "Fee",
            CashFlowType::Prepayment => "Prepayment",
            CashFlowType::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// A single monetary amount paid on a date.
///
/// # Example
///
/// ```rust
/// use amortis_cashflows::{CashFlow, CashFlowType};
/// use amortis_core::types::{Currency, Date, Money};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::new(
///     Date::from_ymd(2025, 6, 15).unwrap(),
///     Money::new(dec!(2.50), Currency::USD),
///     CashFlowType::Interest,
/// )
/// .with_description("June interest");
///
/// assert_eq!(cf.amount().amount(), dec!(2.50));
/// assert_eq!(cf.to_string(), "2025-06-15: USD 2.50 (Interest) June interest");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Signed amount
    amount: Money,
    /// Type of cash flow
    flow_type: CashFlowType,
    /// Free-form label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: Money, flow_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            flow_type,
            description: None,
        }
    }

    /// Creates a principal cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: Money) -> Self {
        Self::new(date, amount, CashFlowType::Principal)
    }

    /// Creates an interest cash flow.
    #[must_use]
    pub fn interest(date: Date, amount: Money) -> Self {
        Self::new(date, amount, CashFlowType::Interest)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn flow_type(&self) -> CashFlowType {
        self.flow_type
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Amount times the curve's discount factor at the payment date.
    ///
    /// The result is not rounded and keeps the amount's currency.
    pub fn present_value(&self, curve: &dyn DiscountCurve) -> AmortisResult<Money> {
        let df = curve.discount_factor(self.date)?;
        Ok(self.amount.scale(df))
    }
}

/// Orders by date, then amount, then type and description.
///
/// Flows in different currencies are unordered.
impl PartialOrd for CashFlow {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.date.cmp(&other.date) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.amount.partial_cmp(&other.amount)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        Some(
            self.flow_type
                .cmp(&other.flow_type)
                .then_with(|| self.description.cmp(&other.description)),
        )
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.flow_type)?;
        if let Some(description) = &self.description {
            write!(f, " {description}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amortis_core::types::{Compounding, Currency, InterestRate};
    use amortis_curves::FlatDiscountCurve;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_cashflow_creation() {
        let cf = CashFlow::principal(d(2025, 1, 1), usd(dec!(1000)));
        assert_eq!(cf.date(), d(2025, 1, 1));
        assert_eq!(cf.amount(), usd(dec!(1000)));
        assert_eq!(cf.flow_type(), CashFlowType::Principal);
        assert_eq!(cf.description(), None);

        let cf = CashFlow::interest(d(2025, 1, 1), usd(dec!(50))).with_description("Monthly interest payment");
        assert_eq!(cf.description(), Some("Monthly interest payment"));
    }

    #[test]
    fn test_comparison_operators() {
        let early = CashFlow::interest(d(2025, 1, 1), usd(dec!(500)));
        let late = CashFlow::interest(d(2025, 6, 1), usd(dec!(100)));
        let larger = CashFlow::interest(d(2025, 1, 1), usd(dec!(750)));

        assert!(early < late);
        assert!(late > early);
        assert!(early < larger);
        assert!(early <= early.clone());
        assert_eq!(early.partial_cmp(&early.clone()), Some(Ordering::Equal));

        let principal = CashFlow::principal(d(2025, 1, 1), usd(dec!(500)));
        assert!(principal < early);

        let euro = CashFlow::interest(d(2025, 1, 1), Money::new(dec!(500), Currency::EUR));
        assert_eq!(early.partial_cmp(&euro), None);
        // Dates still order flows across currencies.
        assert!(euro < late);
    }

    #[test]
    fn test_sign_predicates() {
        let pos = CashFlow::principal(d(2025, 1, 1), usd(dec!(1000)));
        let neg = CashFlow::principal(d(2025, 1, 1), usd(dec!(-1000)));
        let zero = CashFlow::principal(d(2025, 1, 1), Money::zero(Currency::USD));

        assert!(pos.is_positive() && !pos.is_negative() && !pos.is_zero());
        assert!(neg.is_negative() && !neg.is_positive() && !neg.is_zero());
        assert!(zero.is_zero() && !zero.is_positive() && !zero.is_negative());
    }

    #[test]
    fn test_present_value_monthly_flat_curve() {
        let curve = FlatDiscountCurve::new(InterestRate::new(dec!(0.05), Compounding::Monthly), d(2024, 1, 1));
        let cf = CashFlow::principal(d(2025, 1, 1), usd(dec!(1000)));

        let pv = cf.present_value(&curve).unwrap();
        assert_eq!(pv.currency(), Currency::USD);
        assert!(pv.amount() > dec!(950) && pv.amount() < dec!(952));
    }

    #[test]
    fn test_present_value_before_valuation_date() {
        let curve = FlatDiscountCurve::new(InterestRate::new(dec!(0.05), Compounding::Monthly), d(2025, 1, 1));
        let cf = CashFlow::principal(d(2024, 1, 1), usd(dec!(1000.00)));
        assert_eq!(cf.present_value(&curve).unwrap().amount(), dec!(1000.00));
    }

    #[test]
    fn test_display() {
        let cf = CashFlow::principal(d(2025, 1, 1), usd(dec!(1000))).with_description("Test payment");
        let s = cf.to_string();
        assert!(s.contains("2025-01-01"));
        assert!(s.contains("Principal"));
        assert!(s.contains("Test payment"));
    }

    #[test]
    fn test_type_ordering_and_principal_family() {
        assert!(CashFlowType::Principal < CashFlowType::Interest);
        assert!(CashFlowType::Prepayment.is_principal());
        assert!(!CashFlowType::Fee.is_principal());
        assert_eq!(CashFlowType::Prepayment.to_string(), "Prepayment");
    }
}
