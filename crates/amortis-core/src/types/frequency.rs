//! Payment frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Period;

/// How often a loan pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentFrequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    #[default]
    Monthly,
    /// Every two weeks (26 per year)
    BiWeekly,
    /// Weekly payments (52 per year)
    Weekly,
    /// No periodic payments, single settlement at maturity
    ZeroCoupon,
}

impl PaymentFrequency {
    /// Returns the number of payments per year (0 for zero coupon).
    #[must_use]
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annual => 1,
            PaymentFrequency::SemiAnnual => 2,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::ZeroCoupon => 0,
        }
    }

    /// Returns the calendar period between payments, `None` for zero coupon.
    #[must_use]
    pub fn period(&self) -> Option<Period> {
        match self {
            PaymentFrequency::Annual => Some(Period::years(1)),
            PaymentFrequency::SemiAnnual => Some(Period::months(6)),
            PaymentFrequency::Quarterly => Some(Period::months(3)),
            PaymentFrequency::Monthly => Some(Period::months(1)),
            PaymentFrequency::BiWeekly => Some(Period::weeks(2)),
            PaymentFrequency::Weekly => Some(Period::weeks(1)),
            PaymentFrequency::ZeroCoupon => None,
        }
    }

    /// Returns the compounding convention with the same frequency, if one exists.
    #[must_use]
    pub fn compounding(&self) -> Option<Compounding> {
        match self {
            PaymentFrequency::Annual => Some(Compounding::Annual),
            PaymentFrequency::SemiAnnual => Some(Compounding::SemiAnnual),
            PaymentFrequency::Quarterly => Some(Compounding::Quarterly),
            PaymentFrequency::Monthly => Some(Compounding::Monthly),
            PaymentFrequency::BiWeekly | PaymentFrequency::Weekly | PaymentFrequency::ZeroCoupon => {
                None
            }
        }
    }

    /// Returns true if this is a zero coupon (no periodic payments).
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        matches!(self, PaymentFrequency::ZeroCoupon)
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentFrequency::Annual => "Annual",
            PaymentFrequency::SemiAnnual => "Semi-Annual",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::BiWeekly => "Bi-Weekly",
            PaymentFrequency::Weekly => "Weekly",
            PaymentFrequency::ZeroCoupon => "Zero Coupon",
        };
        write!(f, "{name}")
    }
}

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    #[default]
    Monthly,
    /// Daily compounding (365x per year)
    Daily,
    /// Continuous compounding
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year.
    ///
    /// `None` for Simple and Continuous, which have no discrete frequency.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
            Compounding::Daily => Some(365),
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuous)
    }

    /// Returns true if this is simple interest (no compounding).
    #[must_use]
    pub fn is_simple(&self) -> bool {
        matches!(self, Compounding::Simple)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Daily => "Daily",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payments_per_year() {
        assert_eq!(PaymentFrequency::Annual.payments_per_year(), 1);
        assert_eq!(PaymentFrequency::SemiAnnual.payments_per_year(), 2);
        assert_eq!(PaymentFrequency::Quarterly.payments_per_year(), 4);
        assert_eq!(PaymentFrequency::Monthly.payments_per_year(), 12);
        assert_eq!(PaymentFrequency::BiWeekly.payments_per_year(), 26);
        assert_eq!(PaymentFrequency::Weekly.payments_per_year(), 52);
        assert_eq!(PaymentFrequency::ZeroCoupon.payments_per_year(), 0);
    }

    #[test]
    fn test_frequency_period() {
        assert_eq!(PaymentFrequency::Quarterly.period(), Some(Period::months(3)));
        assert_eq!(PaymentFrequency::BiWeekly.period(), Some(Period::weeks(2)));
        assert_eq!(PaymentFrequency::ZeroCoupon.period(), None);
    }

    #[test]
    fn test_frequency_to_compounding() {
        assert_eq!(
            PaymentFrequency::SemiAnnual.compounding(),
            Some(Compounding::SemiAnnual)
        );
        assert_eq!(PaymentFrequency::Weekly.compounding(), None);
    }

    #[test]
    fn test_compounding_periods() {
        assert_eq!(Compounding::Annual.periods_per_year(), Some(1));
        assert_eq!(Compounding::Daily.periods_per_year(), Some(365));
        assert_eq!(Compounding::Simple.periods_per_year(), None);
        assert_eq!(Compounding::Continuous.periods_per_year(), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Compounding::default(), Compounding::Monthly);
        assert_eq!(PaymentFrequency::default(), PaymentFrequency::Monthly);
    }
}
