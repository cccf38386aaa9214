//! Currency-consistent cash flow schedules.

use amortis_core::types::{Currency, Date, Money, PaymentFrequency};
use amortis_core::{AmortisError, AmortisResult};
use amortis_curves::DiscountCurve;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use crate::aggregation::bucket_start;
use crate::cashflow::{CashFlow, CashFlowType};

/// An ordered, single-currency sequence of cash flows.
///
/// Flows are kept sorted by date; flows sharing a date keep the order they
/// were supplied in. Every schedule carries a currency, so totals of an empty
/// schedule are zero in that currency. All operations return new schedules.
///
/// # Example
///
/// ```rust
/// use amortis_cashflows::{CashFlow, CashFlowSchedule};
/// use amortis_core::types::{Currency, Date, Money};
/// use rust_decimal_macros::dec;
///
/// let usd = |a| Money::new(a, Currency::USD);
/// let schedule = CashFlowSchedule::from_list(vec![
///     CashFlow::interest(Date::from_ymd(2025, 2, 1).unwrap(), usd(dec!(50))),
///     CashFlow::principal(Date::from_ymd(2025, 1, 1).unwrap(), usd(dec!(1000))),
/// ])
/// .unwrap();
///
/// assert_eq!(schedule[0].date(), Date::from_ymd(2025, 1, 1).unwrap());
/// assert_eq!(schedule.total_amount(), usd(dec!(1050)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ScheduleInput", try_from = "ScheduleInput")]
pub struct CashFlowSchedule {
    currency: Currency,
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates an empty schedule in `currency`.
    #[must_use]
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            flows: Vec::new(),
        }
    }

    /// Builds a schedule from flows, taking the currency of the first flow.
    ///
    /// Flows are stably sorted by date. An empty list gives an empty schedule
    /// in the default currency; use [`CashFlowSchedule::with_currency`] when
    /// the currency of a possibly empty list matters.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if the flows span more than
    /// one currency.
    pub fn from_list(flows: Vec<CashFlow>) -> AmortisResult<Self> {
        let currency = flows
            .first()
            .map_or_else(Currency::default, |cf| cf.amount().currency());
        Self::with_currency(currency, flows)
    }

    /// Builds a schedule in `currency` from flows, stably sorted by date.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if any flow is in another
    /// currency.
    pub fn with_currency(currency: Currency, mut flows: Vec<CashFlow>) -> AmortisResult<Self> {
        if let Some(cf) = flows.iter().find(|cf| cf.amount().currency() != currency) {
            return Err(AmortisError::currency_mismatch(currency, cf.amount().currency()));
        }
        flows.sort_by_key(CashFlow::date);
        Ok(Self { currency, flows })
    }

    /// Keeps the flows matching `predicate`. Order is preserved.
    fn select(&self, predicate: impl Fn(&CashFlow) -> bool) -> Self {
        Self {
            currency: self.currency,
            flows: self.flows.iter().filter(|cf| predicate(cf)).cloned().collect(),
        }
    }

    /// Returns the schedule currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the number of flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if there are no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns an iterator over the flows in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }

    /// Returns the flow at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CashFlow> {
        self.flows.get(index)
    }

    /// Returns the flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Returns a new schedule with `flow` added after any flows on its date.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if the flow is in another
    /// currency.
    pub fn appended(&self, flow: CashFlow) -> AmortisResult<Self> {
        let mut flows = self.flows.clone();
        flows.push(flow);
        Self::with_currency(self.currency, flows)
    }

    /// Returns a new schedule holding the flows of both schedules.
    ///
    /// On a shared date, flows of `self` come before flows of `other`.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::CurrencyMismatch` if the currencies differ.
    pub fn merged(&self, other: &Self) -> AmortisResult<Self> {
        if other.currency != self.currency {
            return Err(AmortisError::currency_mismatch(self.currency, other.currency));
        }
        let mut flows = Vec::with_capacity(self.len() + other.len());
        flows.extend_from_slice(&self.flows);
        flows.extend_from_slice(&other.flows);
        Self::with_currency(self.currency, flows)
    }

    /// Returns the flows of one type.
    #[must_use]
    pub fn filter_by_type(&self, flow_type: CashFlowType) -> Self {
        self.select(|cf| cf.flow_type() == flow_type)
    }

    /// Returns the scheduled principal and prepayment flows.
    #[must_use]
    pub fn get_principal_flows(&self) -> Self {
        self.select(|cf| cf.flow_type().is_principal())
    }

    /// Returns the interest flows.
    #[must_use]
    pub fn get_interest_flows(&self) -> Self {
        self.filter_by_type(CashFlowType::Interest)
    }

    /// Returns the flows dated in `[start, end]`, both ends inclusive.
    ///
    /// A reversed range selects nothing.
    #[must_use]
    pub fn filter_by_date_range(&self, start: Date, end: Date) -> Self {
        self.select(|cf| cf.date() >= start && cf.date() <= end)
    }

    /// Totals per cash flow type. Only types present in the schedule appear.
    #[must_use]
    pub fn sum_by_type(&self) -> BTreeMap<CashFlowType, Money> {
        let mut totals: BTreeMap<CashFlowType, Decimal> = BTreeMap::new();
        for cf in &self.flows {
            *totals.entry(cf.flow_type()).or_default() += cf.amount().amount();
        }
        totals
            .into_iter()
            .map(|(flow_type, total)| (flow_type, Money::new(total, self.currency)))
            .collect()
    }

    /// Sum of all flow amounts.
    #[must_use]
    pub fn total_amount(&self) -> Money {
        let total: Decimal = self.flows.iter().map(|cf| cf.amount().amount()).sum();
        Money::new(total, self.currency)
    }

    /// Sum of the flows' present values on `curve`. Not rounded.
    pub fn present_value(&self, curve: &dyn DiscountCurve) -> AmortisResult<Money> {
        let mut total = Decimal::ZERO;
        for cf in &self.flows {
            total += cf.present_value(curve)?.amount();
        }
        Ok(Money::new(total, self.currency))
    }

    /// Returns the first payment date, if any.
    #[must_use]
    pub fn earliest_date(&self) -> Option<Date> {
        self.flows.first().map(CashFlow::date)
    }

    /// Returns the last payment date, if any.
    #[must_use]
    pub fn latest_date(&self) -> Option<Date> {
        self.flows.last().map(CashFlow::date)
    }

    /// Returns the first and last payment dates, if any.
    #[must_use]
    pub fn date_range(&self) -> Option<(Date, Date)> {
        self.earliest_date().zip(self.latest_date())
    }

    /// Collapses flows into one flow per type per period bucket.
    ///
    /// Each flow falls into the bucket starting at the most recent period
    /// boundary on or before its date. Boundaries are calendar aligned:
    /// month-based frequencies start on the first of a month counted from
    /// January, weekly buckets start on Monday, bi-weekly buckets are 14-day
    /// blocks counted from Monday 1970-01-05, and `ZeroCoupon` puts every
    /// flow into a single bucket. The aggregated flows are dated at their
    /// bucket start, ordered by bucket then by type.
    #[must_use]
    pub fn aggregate_by_period(&self, frequency: PaymentFrequency) -> Self {
        let Some(first) = self.earliest_date() else {
            return Self::empty(self.currency);
        };
        debug!("Aggregating {} flows into {frequency} buckets", self.len());

        let mut buckets: BTreeMap<(Date, CashFlowType), Decimal> = BTreeMap::new();
        for cf in &self.flows {
            let start = bucket_start(cf.date(), frequency, first);
            *buckets.entry((start, cf.flow_type())).or_default() += cf.amount().amount();
        }

        Self {
            currency: self.currency,
            flows: buckets
                .into_iter()
                .map(|((date, flow_type), total)| {
                    CashFlow::new(date, Money::new(total, self.currency), flow_type)
                })
                .collect(),
        }
    }
}

impl Index<usize> for CashFlowSchedule {
    type Output = CashFlow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.flows[index]
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

impl fmt::Display for CashFlowSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date_range() {
            Some((first, last)) => {
                write!(f, "CashFlowSchedule({} flows, {first} to {last})", self.len())
            }
            None => write!(f, "CashFlowSchedule(empty, {})", self.currency),
        }
    }
}

/// Serialized form of a schedule; deserialization re-checks currency and order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScheduleInput {
    currency: Currency,
    flows: Vec<CashFlow>,
}

impl From<CashFlowSchedule> for ScheduleInput {
    fn from(schedule: CashFlowSchedule) -> Self {
        Self {
            currency: schedule.currency,
            flows: schedule.flows,
        }
    }
}

impl TryFrom<ScheduleInput> for CashFlowSchedule {
    type Error = AmortisError;

    fn try_from(input: ScheduleInput) -> Result<Self, Self::Error> {
        CashFlowSchedule::with_currency(input.currency, input.flows)
    }
}
