//! Interpolation schemes for zero curves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a [`ZeroCurve`](crate::ZeroCurve) fills the gaps between pivots.
///
/// Both schemes clamp flat to the boundary pivot rate outside the pivot range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationType {
    /// Linear interpolation on zero rates.
    #[default]
    Linear,

    /// Linear interpolation on log discount factors (linear in `r·t`).
    LogLinear,
}

impl InterpolationType {
    /// Interpolates the zero rate at time `t` strictly inside `(t0, t1)`.
    pub(crate) fn interpolate(
        self,
        (t0, r0): (Decimal, Decimal),
        (t1, r1): (Decimal, Decimal),
        t: Decimal,
    ) -> Decimal {
        let weight = (t - t0) / (t1 - t0);
        match self {
            InterpolationType::Linear => r0 + (r1 - r0) * weight,
            InterpolationType::LogLinear => {
                let log_df0 = r0 * t0;
                let log_df1 = r1 * t1;
                (log_df0 + (log_df1 - log_df0) * weight) / t
            }
        }
    }
}

impl std::fmt::Display for InterpolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::LogLinear => "Log-Linear",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_linear_midpoint() {
        let r = InterpolationType::Linear.interpolate((dec!(1), dec!(0.04)), (dec!(2), dec!(0.06)), dec!(1.5));
        assert_eq!(r, dec!(0.05));
    }

    #[test]
    fn test_log_linear_interpolates_rt() {
        // r·t goes 0.04 -> 0.12, so at t = 1.5 it is 0.08 and r = 0.08 / 1.5
        let r = InterpolationType::LogLinear.interpolate((dec!(1), dec!(0.04)), (dec!(2), dec!(0.06)), dec!(1.5));
        assert_eq!(r, dec!(0.08) / dec!(1.5));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(InterpolationType::default(), InterpolationType::Linear);
        assert_eq!(InterpolationType::LogLinear.to_string(), "Log-Linear");
    }
}
