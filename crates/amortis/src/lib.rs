//! # Amortis
//!
//! Exact-decimal loan amortization and discounting.
//!
//! This crate re-exports the public API of the Amortis workspace:
//!
//! - [`amortis_core`]: dates, periods, rates, money, calendars and day counts
//! - [`amortis_curves`]: flat and interpolated zero discount curves
//! - [`amortis_cashflows`]: dated cash flows and schedules
//! - [`amortis_loans`]: loan definitions and amortization schedules
//!
//! ## Example
//!
//! ```rust
//! use amortis::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let origination = Date::from_ymd(2024, 1, 1).unwrap();
//! let loan = Loan::mortgage(
//!     Money::new(dec!(300000), Currency::USD),
//!     InterestRate::new(dec!(0.065), Compounding::Monthly),
//!     30,
//!     origination,
//! )
//! .unwrap();
//!
//! let schedule = loan.generate_schedule().unwrap();
//! assert_eq!(schedule.get_principal_flows().total_amount(), loan.principal());
//!
//! let curve = FlatDiscountCurve::new(InterestRate::new(dec!(0.05), Compounding::Annual), origination);
//! assert!(schedule.present_value(&curve).unwrap() > loan.principal());
//! ```

#![warn(missing_docs)]

pub use amortis_cashflows;
pub use amortis_core;
pub use amortis_curves;
pub use amortis_loans;

pub use amortis_core::{AmortisError, AmortisResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use amortis_cashflows::prelude::*;
    pub use amortis_core::prelude::*;
    pub use amortis_curves::prelude::*;
    pub use amortis_loans::prelude::*;
}
