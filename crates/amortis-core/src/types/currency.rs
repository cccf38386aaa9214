//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency codes.
///
/// Only the metadata the engine needs is modelled: the code, a display symbol,
/// and the number of minor-unit decimal places used for rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "United States Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound Sterling",
            Currency::JPY => "Japanese Yen",
            Currency::CHF => "Swiss Franc",
            Currency::CAD => "Canadian Dollar",
            Currency::AUD => "Australian Dollar",
        }
    }

    /// Returns the number of minor-unit decimal places.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Looks up a currency by its ISO code (case insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
