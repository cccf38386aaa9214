//! # Amortis Curves
//!
//! Discount curves for valuing loan cash flows.
//!
//! This crate provides:
//!
//! - **[`DiscountCurve`]**: the shared discount factor / spot rate contract,
//!   with forward rates derived from discount factors
//! - **[`FlatDiscountCurve`]**: a single rate applied at every horizon
//! - **[`ZeroCurve`]**: continuously compounded zero rates at pivot dates,
//!   interpolated in time and clamped flat outside the pivots
//!
//! Curve time is always measured as ACT/365 Fixed from the valuation date,
//! whatever day count the priced instrument itself accrues on.
//!
//! ## Example
//!
//! ```rust
//! use amortis_core::prelude::*;
//! use amortis_curves::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let curve = ZeroCurve::from_rates(
//!     valuation,
//!     vec![
//!         (Date::from_ymd(2025, 1, 1).unwrap(), dec!(0.05)),
//!         (Date::from_ymd(2026, 1, 1).unwrap(), dec!(0.055)),
//!     ],
//! )
//! .unwrap();
//!
//! let df = curve.discount_factor(Date::from_ymd(2025, 6, 1).unwrap()).unwrap();
//! assert!(df > dec!(0.92) && df < dec!(0.94));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod flat;
pub mod interpolation;
pub mod traits;
pub mod zero;

pub use flat::FlatDiscountCurve;
pub use interpolation::InterpolationType;
pub use traits::DiscountCurve;
pub use zero::ZeroCurve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::flat::FlatDiscountCurve;
    pub use crate::interpolation::InterpolationType;
    pub use crate::traits::DiscountCurve;
    pub use crate::zero::ZeroCurve;
}
