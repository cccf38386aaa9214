//! # Amortis Cash Flows
//!
//! Dated cash flows and schedules for loan analytics.
//!
//! This crate provides:
//!
//! - **[`CashFlow`]**: a typed monetary amount on a date, with present value
//!   against any [`DiscountCurve`](amortis_curves::DiscountCurve)
//! - **[`CashFlowSchedule`]**: a date-ordered, single-currency collection with
//!   filtering, per-type totals, period aggregation and present value
//!
//! Schedules are values: every filter or combination returns a new schedule
//! and leaves the original untouched.
//!
//! ## Example
//!
//! ```rust
//! use amortis_cashflows::prelude::*;
//! use amortis_core::prelude::*;
//! use amortis_curves::FlatDiscountCurve;
//! use rust_decimal_macros::dec;
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let curve = FlatDiscountCurve::new(InterestRate::new(dec!(0.05), Compounding::Annual), valuation);
//!
//! let schedule = CashFlowSchedule::from_list(vec![
//!     CashFlow::interest(Date::from_ymd(2025, 1, 1).unwrap(), Money::new(dec!(50), Currency::USD)),
//!     CashFlow::principal(Date::from_ymd(2025, 1, 1).unwrap(), Money::new(dec!(1000), Currency::USD)),
//! ])
//! .unwrap();
//!
//! let pv = schedule.present_value(&curve).unwrap();
//! assert!(pv.amount() < dec!(1050));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

mod aggregation;
pub mod cashflow;
pub mod schedule;

pub use cashflow::{CashFlow, CashFlowType};
pub use schedule::CashFlowSchedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflow::{CashFlow, CashFlowType};
    pub use crate::schedule::CashFlowSchedule;
}
