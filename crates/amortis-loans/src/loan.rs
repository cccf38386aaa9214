//! Loan definition and schedule generation.

use amortis_cashflows::{CashFlow, CashFlowSchedule};
use amortis_curves::DiscountCurve;
use amortis_core::calendars::{adjust, generate_payment_dates};
use amortis_core::math::round_half_even;
use amortis_core::types::{Compounding, Currency, Date, InterestRate, Money, PaymentFrequency, Period};
use amortis_core::{AmortisError, AmortisResult};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amortization::{
    amortize, bullet_row, level_payment, AmortizationInputs, AmortizationRow, AmortizationType,
};
use crate::config::{LoanPreset, ScheduleConfig};

/// Payment counts above this are logged as suspicious.
const LARGE_SCHEDULE_PERIODS: i64 = 10_000;

/// A fixed-rate loan.
///
/// Loans are validated when built and immutable afterwards; the `with_*`
/// methods return new, re-validated loans.
///
/// # Example
///
/// ```rust
/// use amortis_core::prelude::*;
/// use amortis_loans::Loan;
/// use rust_decimal_macros::dec;
///
/// let loan = Loan::mortgage(
///     Money::new(dec!(300000), Currency::USD),
///     InterestRate::new(dec!(0.065), Compounding::Monthly),
///     30,
///     Date::from_ymd(2024, 1, 1).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(loan.calculate_payment().unwrap().amount(), dec!(1896.20));
/// assert_eq!(loan.generate_schedule().unwrap().len(), 720);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LoanTerms", into = "LoanTerms")]
pub struct Loan {
    principal: Money,
    annual_rate: InterestRate,
    term: Period,
    payment_frequency: PaymentFrequency,
    amortization_type: AmortizationType,
    origination_date: Date,
    first_payment_date: Option<Date>,
}

impl Loan {
    /// Creates a loan.
    ///
    /// # Errors
    ///
    /// - `AmortisError::NonPositiveAmount` for a principal that is not
    ///   positive, a negative rate, a term that is not positive, or a
    ///   zero-coupon frequency on anything but a bullet loan
    pub fn new(
        principal: Money,
        annual_rate: InterestRate,
        term: Period,
        payment_frequency: PaymentFrequency,
        amortization_type: AmortizationType,
        origination_date: Date,
    ) -> AmortisResult<Self> {
        Self {
            principal,
            annual_rate,
            term,
            payment_frequency,
            amortization_type,
            origination_date,
            first_payment_date: None,
        }
        .validated()
    }

    /// Creates a loan from a preset's term, frequency and amortization.
    pub fn from_preset(
        preset: LoanPreset,
        principal: Money,
        annual_rate: InterestRate,
        origination_date: Date,
    ) -> AmortisResult<Self> {
        Self::new(
            principal,
            annual_rate,
            preset.term(),
            preset.payment_frequency(),
            preset.amortization_type(),
            origination_date,
        )
    }

    /// Monthly level-payment mortgage over `term_years`.
    pub fn mortgage(
        principal: Money,
        annual_rate: InterestRate,
        term_years: i32,
        origination_date: Date,
    ) -> AmortisResult<Self> {
        Self::from_preset(LoanPreset::Mortgage, principal, annual_rate, origination_date)?
            .with_term(Period::years(term_years))
    }

    /// Monthly level-payment auto loan over `term_months`.
    pub fn auto_loan(
        principal: Money,
        annual_rate: InterestRate,
        term_months: i32,
        origination_date: Date,
    ) -> AmortisResult<Self> {
        Self::from_preset(LoanPreset::AutoLoan, principal, annual_rate, origination_date)?
            .with_term(Period::months(term_months))
    }

    /// Monthly level-payment personal loan over `term_months`.
    pub fn personal_loan(
        principal: Money,
        annual_rate: InterestRate,
        term_months: i32,
        origination_date: Date,
    ) -> AmortisResult<Self> {
        Self::from_preset(LoanPreset::PersonalLoan, principal, annual_rate, origination_date)?
            .with_term(Period::months(term_months))
    }

    /// USD monthly level-payment loan from float inputs.
    ///
    /// The rate is a percentage with monthly compounding (`6.5` is 6.5%).
    /// Floats go through the shortest round-trip decimal conversion and the
    /// principal is rounded to cents.
    ///
    /// # Errors
    ///
    /// `AmortisError::InvalidNumericInput` for non-finite input, plus the
    /// validation errors of [`Loan::new`].
    pub fn from_float(
        principal: f64,
        annual_rate_percent: f64,
        term_years: i32,
        origination_date: Date,
    ) -> AmortisResult<Self> {
        Self::new(
            Money::from_float(principal, Currency::USD)?,
            InterestRate::from_percent(annual_rate_percent, Compounding::Monthly)?,
            Period::years(term_years),
            PaymentFrequency::Monthly,
            AmortizationType::LevelPayment,
            origination_date,
        )
    }

    fn validated(self) -> AmortisResult<Self> {
        if !self.principal.is_positive() {
            return Err(AmortisError::non_positive(
                "principal",
                format!("must be positive, got {}", self.principal),
            ));
        }
        if self.annual_rate.rate() < Decimal::ZERO {
            return Err(AmortisError::non_positive(
                "annual rate",
                format!("must be non-negative, got {}", self.annual_rate),
            ));
        }
        if !self.term.is_positive() {
            return Err(AmortisError::non_positive(
                "term",
                format!("must be positive, got {}", self.term),
            ));
        }
        if self.payment_frequency.is_zero_coupon() && !self.amortization_type.is_single_settlement() {
            return Err(AmortisError::non_positive(
                "payment frequency",
                format!("zero payment frequency requires bullet amortization, not {}", self.amortization_type),
            ));
        }
        if let Some(first) = self.first_payment_date {
            if first <= self.origination_date {
                return Err(AmortisError::invalid_date_range(self.origination_date, first));
            }
        }
        Ok(self)
    }

    /// Returns a copy with a different principal.
    pub fn with_principal(&self, principal: Money) -> AmortisResult<Self> {
        Self { principal, ..self.clone() }.validated()
    }

    /// Returns a copy with a different annual rate.
    pub fn with_annual_rate(&self, annual_rate: InterestRate) -> AmortisResult<Self> {
        Self { annual_rate, ..self.clone() }.validated()
    }

    /// Returns a copy with a different term.
    pub fn with_term(&self, term: Period) -> AmortisResult<Self> {
        Self { term, ..self.clone() }.validated()
    }

    /// Returns a copy with a different payment frequency.
    pub fn with_payment_frequency(&self, payment_frequency: PaymentFrequency) -> AmortisResult<Self> {
        Self {
            payment_frequency,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy with a different amortization policy.
    pub fn with_amortization_type(&self, amortization_type: AmortizationType) -> AmortisResult<Self> {
        Self {
            amortization_type,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy whose first payment falls on `date`.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidDateRange` unless `date` is after the
    /// origination date.
    pub fn with_first_payment_date(&self, date: Date) -> AmortisResult<Self> {
        Self {
            first_payment_date: Some(date),
            ..self.clone()
        }
        .validated()
    }

    /// Returns the principal.
    #[must_use]
    pub fn principal(&self) -> Money {
        self.principal
    }

    /// Returns the nominal annual rate.
    #[must_use]
    pub fn annual_rate(&self) -> InterestRate {
        self.annual_rate
    }

    /// Returns the term.
    #[must_use]
    pub fn term(&self) -> Period {
        self.term
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn payment_frequency(&self) -> PaymentFrequency {
        self.payment_frequency
    }

    /// Returns the amortization policy.
    #[must_use]
    pub fn amortization_type(&self) -> AmortizationType {
        self.amortization_type
    }

    /// Returns the origination date.
    #[must_use]
    pub fn origination_date(&self) -> Date {
        self.origination_date
    }

    /// Returns the explicit first payment date, if set.
    #[must_use]
    pub fn first_payment_date(&self) -> Option<Date> {
        self.first_payment_date
    }

    /// Rate applied per payment period, unrounded.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::NonPositiveAmount` for a zero-coupon frequency.
    pub fn calculate_periodic_rate(&self) -> AmortisResult<Decimal> {
        self.annual_rate
            .periodic_rate(self.payment_frequency.payments_per_year())
    }

    /// Number of scheduled payments: one for a bullet loan, otherwise the
    /// whole payment periods that fit in the term.
    ///
    /// # Errors
    ///
    /// Returns `AmortisError::InvalidTerm` if the term is shorter than one
    /// payment period.
    pub fn calculate_number_of_payments(&self) -> AmortisResult<u32> {
        if self.amortization_type.is_single_settlement() {
            return Ok(1);
        }

        let n = self.term.periods_in(self.payment_frequency.payments_per_year());
        if n <= 0 {
            return Err(AmortisError::invalid_term(format!(
                "{} is shorter than one {} payment period",
                self.term, self.payment_frequency
            )));
        }
        if n > LARGE_SCHEDULE_PERIODS {
            warn!("Loan {self} has {n} payment periods; schedule generation is linear in this count");
        }
        u32::try_from(n).map_err(|_| AmortisError::invalid_term(format!("{n} payments")))
    }

    /// Unadjusted maturity: origination date plus the term.
    pub fn maturity_date(&self) -> AmortisResult<Date> {
        self.term.add_to_date(self.origination_date)
    }

    /// Unadjusted payment dates.
    pub fn payment_dates(&self) -> AmortisResult<Vec<Date>> {
        self.payment_dates_with(&ScheduleConfig::default())
    }

    /// Payment dates, adjusted with the config's calendar if it has one.
    ///
    /// Without an explicit first payment date, payment `i` falls `i` payment
    /// periods after origination, so a month-end origination keeps paying at
    /// month end and the last payment lands on the maturity date. With one,
    /// dates step from the first payment date instead.
    pub fn payment_dates_with(&self, config: &ScheduleConfig) -> AmortisResult<Vec<Date>> {
        let calendar = config.calendar();

        let step = match self.payment_frequency.period() {
            Some(step) if !self.amortization_type.is_single_settlement() => step,
            _ => {
                let maturity = self.maturity_date()?;
                return Ok(vec![match calendar {
                    Some(cal) => adjust(maturity, config.convention, cal),
                    None => maturity,
                }]);
            }
        };

        let n = self.calculate_number_of_payments()? as usize;
        match self.first_payment_date {
            Some(first) => generate_payment_dates(first, step, n, calendar, config.convention),
            None => {
                let mut dates =
                    generate_payment_dates(self.origination_date, step, n + 1, calendar, config.convention)?;
                Ok(dates.split_off(1))
            }
        }
    }

    /// The recurring payment.
    ///
    /// - Level payment: the rounded annuity payment
    /// - Level principal: the first (largest) payment
    /// - Interest only: the periodic interest, before the final balloon
    /// - Bullet: the single settlement of principal plus interest
    pub fn calculate_payment(&self) -> AmortisResult<Money> {
        let currency = self.principal.currency();
        let dp = currency.decimal_places();
        let principal = self.principal.amount();

        let amount = match self.amortization_type {
            AmortizationType::Bullet => {
                let row = bullet_row(
                    self.principal,
                    self.annual_rate.rate(),
                    self.term.to_years(),
                    self.maturity_date()?,
                )?;
                row.payment().amount()
            }
            AmortizationType::LevelPayment => {
                let n = self.calculate_number_of_payments()?;
                level_payment(principal, self.calculate_periodic_rate()?, n)?
            }
            AmortizationType::LevelPrincipal => {
                let n = self.calculate_number_of_payments()?;
                let p = self.calculate_periodic_rate()?;
                round_half_even(principal / Decimal::from(n), dp) + round_half_even(principal * p, dp)
            }
            AmortizationType::InterestOnly => principal * self.calculate_periodic_rate()?,
        };

        Ok(Money::new(amount, currency).round_to_currency())
    }

    /// Period-by-period repayment table with unadjusted dates.
    pub fn amortization_table(&self) -> AmortisResult<Vec<AmortizationRow>> {
        self.amortization_table_with(&ScheduleConfig::default())
    }

    /// Period-by-period repayment table using `config` for payment dates.
    pub fn amortization_table_with(&self, config: &ScheduleConfig) -> AmortisResult<Vec<AmortizationRow>> {
        let dates = self.payment_dates_with(config)?;

        if self.amortization_type.is_single_settlement() {
            let maturity = dates.first().copied().ok_or_else(|| {
                AmortisError::invalid_term("bullet loan has no settlement date")
            })?;
            return Ok(vec![bullet_row(
                self.principal,
                self.annual_rate.rate(),
                self.term.to_years(),
                maturity,
            )?]);
        }

        amortize(&AmortizationInputs {
            policy: self.amortization_type,
            principal: self.principal,
            periodic_rate: self.calculate_periodic_rate()?,
            dates: &dates,
        })
    }

    /// Cash flow schedule with default options.
    pub fn generate_schedule(&self) -> AmortisResult<CashFlowSchedule> {
        self.generate_schedule_with(&ScheduleConfig::default())
    }

    /// Cash flow schedule: one interest and one principal flow per period,
    /// interest first.
    ///
    /// Zero principal flows are dropped when `config.omit_zero_principal` is
    /// set.
    pub fn generate_schedule_with(&self, config: &ScheduleConfig) -> AmortisResult<CashFlowSchedule> {
        let table = self.amortization_table_with(config)?;
        debug!(
            "Generating {} schedule for {self}: {} periods",
            self.amortization_type,
            table.len()
        );

        let mut flows = Vec::with_capacity(table.len() * 2);
        for row in &table {
            flows.push(CashFlow::interest(row.date, row.interest));
            if !(config.omit_zero_principal && row.principal.is_zero()) {
                flows.push(CashFlow::principal(row.date, row.principal));
            }
        }
        CashFlowSchedule::with_currency(self.principal.currency(), flows)
    }

    /// Total interest over the life of the loan.
    pub fn total_interest(&self) -> AmortisResult<Money> {
        Ok(self.generate_schedule()?.get_interest_flows().total_amount())
    }

    /// Total principal repaid over the life of the loan.
    pub fn total_principal(&self) -> AmortisResult<Money> {
        Ok(self.generate_schedule()?.get_principal_flows().total_amount())
    }

    /// Total of all payments over the life of the loan.
    pub fn total_payments(&self) -> AmortisResult<Money> {
        Ok(self.generate_schedule()?.total_amount())
    }

    /// Present value of the scheduled payments on `curve`, unrounded.
    pub fn present_value(&self, curve: &dyn DiscountCurve) -> AmortisResult<Money> {
        self.generate_schedule()?.present_value(curve)
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan({} at {}, {}, {}, {})",
            self.principal, self.annual_rate, self.term, self.payment_frequency, self.amortization_type
        )
    }
}

/// Serialized form of a [`Loan`]; deserialization re-runs validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoanTerms {
    principal: Money,
    annual_rate: InterestRate,
    term: Period,
    #[serde(default)]
    payment_frequency: PaymentFrequency,
    #[serde(default)]
    amortization_type: AmortizationType,
    origination_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_payment_date: Option<Date>,
}

impl From<Loan> for LoanTerms {
    fn from(loan: Loan) -> Self {
        Self {
            principal: loan.principal,
            annual_rate: loan.annual_rate,
            term: loan.term,
            payment_frequency: loan.payment_frequency,
            amortization_type: loan.amortization_type,
            origination_date: loan.origination_date,
            first_payment_date: loan.first_payment_date,
        }
    }
}

impl TryFrom<LoanTerms> for Loan {
    type Error = AmortisError;

    fn try_from(terms: LoanTerms) -> Result<Self, Self::Error> {
        Loan {
            principal: terms.principal,
            annual_rate: terms.annual_rate,
            term: terms.term,
            payment_frequency: terms.payment_frequency,
            amortization_type: terms.amortization_type,
            origination_date: terms.origination_date,
            first_payment_date: terms.first_payment_date,
        }
        .validated()
    }
}
