//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`rust_decimal::Decimal`] in the currency's
//! standard unit (dollars, not cents). Arithmetic on amounts is exact;
//! rounding to two decimal places happens only in [`Price::display`],
//! never in stored state.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit
    /// (e.g., cents for USD).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }

    /// Whether the amount is below zero.
    ///
    /// A negative price is never valid in the catalog or the cart; callers
    /// reject it at the boundary rather than clamping.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Format for display with the currency symbol and two decimal places
    /// (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(2499, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(2499, 2));
        assert_eq!(price.display(), "$24.99");
    }

    #[test]
    fn test_display_pads_to_two_decimals() {
        let price = Price::new(Decimal::new(5, 0), CurrencyCode::USD);
        assert_eq!(price.display(), "$5.00");
        assert_eq!(price.to_string(), "$5.00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::GBP.symbol(), "\u{a3}");
        assert_eq!(CurrencyCode::EUR.code(), "EUR");
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::from_cents(-1, CurrencyCode::USD).is_negative());
        assert!(!Price::from_cents(0, CurrencyCode::USD).is_negative());
        assert!(!Price::from_cents(100, CurrencyCode::USD).is_negative());
    }

    #[test]
    fn test_serde_uses_string_amounts() {
        let price = Price::from_cents(1999, CurrencyCode::USD);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
