//! # Amortis Core
//!
//! Core types for the Amortis loan library.
//!
//! This crate provides the foundational building blocks used throughout Amortis:
//!
//! - **Types**: `Date`, `Period`, `Money`, `InterestRate`, `Spread` and friends
//! - **Day Count Conventions**: ACT/365F, ACT/360, ACT/ACT ISDA, 30/360 US, 30E/360
//! - **Business Day Calendars**: Holiday sets and date rolling conventions
//! - **Math**: Deterministic decimal `exp`, `ln` and powers
//!
//! ## Design Philosophy
//!
//! - **Exact Arithmetic**: Every amount and rate is a `Decimal`; floats are
//!   accepted only at explicit `from_float` boundaries
//! - **Immutable Values**: Transformations return new values
//! - **Typed Failures**: Every error is one [`AmortisError`] kind
//!
//! ## Example
//!
//! ```rust
//! use amortis_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rate = InterestRate::new(dec!(0.065), Compounding::Monthly);
//! let term: Period = "30Y".parse().unwrap();
//! assert_eq!(rate.to_string(), "6.500% Monthly");
//! assert_eq!(term.periods_in(12), 360);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod math;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayCalendar, BusinessDayConvention, Calendar, WeekendCalendar,
    };
    pub use crate::daycounts::{DayCount, DayCountBasis, DayCountConvention};
    pub use crate::error::{AmortisError, AmortisResult};
    pub use crate::types::{
        Compounding, Currency, Date, InterestRate, Money, PaymentFrequency, Period, Spread,
        TimeUnit,
    };
}

// Re-export commonly used types at crate root
pub use error::{AmortisError, AmortisResult};
pub use types::{Currency, Date, InterestRate, Money, Period};
