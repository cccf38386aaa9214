//! # Amortis Loans
//!
//! Loan definitions and amortization schedules.
//!
//! This crate provides:
//!
//! - **[`Loan`]**: a validated fixed-rate loan with its payment calculation,
//!   payment dates and generated cash flow schedule
//! - **[`AmortizationType`]**: level payment, level principal, interest-only
//!   and bullet repayment policies
//! - **[`ScheduleConfig`]**: optional business-day adjustment and schedule
//!   shaping
//! - **[`LoanPreset`]**: mortgage, auto and personal loan defaults
//!
//! Every interest and principal amount is rounded half-even to the currency's
//! minor units, and the final period absorbs the rounding residual so the
//! principal flows always sum to the original principal exactly.
//!
//! ## Example
//!
//! ```rust
//! use amortis_core::prelude::*;
//! use amortis_loans::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let loan = Loan::new(
//!     Money::new(dec!(20000), Currency::USD),
//!     InterestRate::new(dec!(0.06), Compounding::Monthly),
//!     Period::years(2),
//!     PaymentFrequency::Monthly,
//!     AmortizationType::LevelPayment,
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//! )
//! .unwrap();
//!
//! let schedule = loan.generate_schedule().unwrap();
//! assert_eq!(schedule.len(), 48);
//! assert_eq!(schedule.get_principal_flows().total_amount(), loan.principal());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod amortization;
pub mod config;
pub mod loan;

pub use amortization::{level_payment, AmortizationRow, AmortizationType};
pub use config::{LoanPreset, ScheduleConfig};
pub use loan::Loan;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{AmortizationRow, AmortizationType};
    pub use crate::config::{LoanPreset, ScheduleConfig};
    pub use crate::loan::Loan;
}
