//! Loan presets and schedule generation options.

use amortis_core::calendars::{BusinessDayCalendar, BusinessDayConvention, Calendar};
use amortis_core::types::{PaymentFrequency, Period};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amortization::AmortizationType;

/// Named bundles of typical loan conventions.
///
/// Every preset pays monthly on a level-payment basis; they differ in their
/// default term. All fields can be overridden on the resulting
/// [`Loan`](crate::Loan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanPreset {
    /// 30-year residential mortgage
    Mortgage,
    /// 60-month auto loan
    AutoLoan,
    /// 36-month unsecured personal loan
    PersonalLoan,
}

impl LoanPreset {
    /// Returns the default term.
    #[must_use]
    pub fn term(&self) -> Period {
        match self {
            LoanPreset::Mortgage => Period::years(30),
            LoanPreset::AutoLoan => Period::months(60),
            LoanPreset::PersonalLoan => Period::months(36),
        }
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn payment_frequency(&self) -> PaymentFrequency {
        PaymentFrequency::Monthly
    }

    /// Returns the amortization policy.
    #[must_use]
    pub fn amortization_type(&self) -> AmortizationType {
        AmortizationType::LevelPayment
    }
}

impl fmt::Display for LoanPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanPreset::Mortgage => "Mortgage",
            LoanPreset::AutoLoan => "Auto Loan",
            LoanPreset::PersonalLoan => "Personal Loan",
        };
        write!(f, "{name}")
    }
}

/// Options for turning a loan into a cash flow schedule.
///
/// The default produces unadjusted dates and emits every flow, including
/// zero principal flows.
///
/// # Example
///
/// ```rust
/// use amortis_core::calendars::{BusinessDayCalendar, BusinessDayConvention};
/// use amortis_loans::ScheduleConfig;
///
/// let config = ScheduleConfig::default()
///     .with_calendar(BusinessDayCalendar::weekends_only("WKND"))
///     .with_convention(BusinessDayConvention::ModifiedFollowing)
///     .with_omit_zero_principal(true);
///
/// assert!(config.calendar().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Calendar used to roll payment dates; `None` leaves dates unadjusted
    pub calendar: Option<BusinessDayCalendar>,
    /// Roll convention applied when a calendar is set
    pub convention: BusinessDayConvention,
    /// Drop principal flows whose amount is zero
    pub omit_zero_principal: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            calendar: None,
            convention: BusinessDayConvention::Unadjusted,
            omit_zero_principal: false,
        }
    }
}

impl ScheduleConfig {
    /// Sets the calendar for payment date adjustment.
    #[must_use]
    pub fn with_calendar(mut self, calendar: BusinessDayCalendar) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets whether zero principal flows are dropped.
    #[must_use]
    pub fn with_omit_zero_principal(mut self, omit: bool) -> Self {
        self.omit_zero_principal = omit;
        self
    }

    /// Returns the calendar as a trait object, if set.
    #[must_use]
    pub fn calendar(&self) -> Option<&dyn Calendar> {
        self.calendar.as_ref().map(|c| c as &dyn Calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(LoanPreset::Mortgage.term(), Period::years(30));
        assert_eq!(LoanPreset::AutoLoan.term(), Period::months(60));
        assert_eq!(LoanPreset::PersonalLoan.payment_frequency(), PaymentFrequency::Monthly);
        assert_eq!(LoanPreset::AutoLoan.amortization_type(), AmortizationType::LevelPayment);
        assert_eq!(LoanPreset::PersonalLoan.to_string(), "Personal Loan");
    }

    #[test]
    fn test_default_config_is_unadjusted() {
        let config = ScheduleConfig::default();
        assert!(config.calendar().is_none());
        assert_eq!(config.convention, BusinessDayConvention::Unadjusted);
        assert!(!config.omit_zero_principal);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ScheduleConfig = serde_json::from_str(r#"{"omit_zero_principal": true}"#).unwrap();
        assert!(config.omit_zero_principal);
        assert_eq!(config.convention, BusinessDayConvention::Unadjusted);

        let json = r#"{
            "calendar": {"name": "NYC", "holidays": ["2025-07-04"]},
            "convention": "Following"
        }"#;
        let config: ScheduleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.calendar().map(|c| c.name()), Some("NYC"));
        assert_eq!(config.convention, BusinessDayConvention::Following);
    }
}
