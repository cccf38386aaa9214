//! Domain value types.
//!
//! - [`Date`]: Calendar date with month arithmetic
//! - [`Period`]: Signed calendar period such as `3M` or `30Y`
//! - [`PaymentFrequency`]: How often a loan pays
//! - [`Compounding`]: Interest compounding convention
//! - [`InterestRate`]: Nominal rate with compounding
//! - [`Spread`]: Spread in whole basis points
//! - [`Currency`]: ISO currency codes
//! - [`Money`]: Exact amount in one currency

mod currency;
mod date;
mod frequency;
mod interest_rate;
mod money;
mod period;
mod spread;

pub use currency::Currency;
pub use date::Date;
pub use frequency::{Compounding, PaymentFrequency};
pub use interest_rate::InterestRate;
pub use money::Money;
pub use period::{Period, TimeUnit};
pub use spread::Spread;
