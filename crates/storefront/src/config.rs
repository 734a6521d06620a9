//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults describe the demo store.
//!
//! - `LANTERN_STORE_NAME` - Display name (default: "Paper Lantern Books")
//! - `LANTERN_CURRENCY` - ISO 4217 code, one of USD/EUR/GBP/CAD/AUD
//!   (default: USD)
//! - `LANTERN_TAX_RATE` - Decimal fraction applied to the cart subtotal,
//!   must be within [0, 1] (default: 0.08)

use rust_decimal::Decimal;
use thiserror::Error;

use paper_lantern_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Display name of the store.
    pub store_name: String,
    /// The single currency every catalog price is denominated in.
    pub currency: CurrencyCode,
    /// Tax rate applied to the cart subtotal on read.
    pub tax_rate: Decimal,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Paper Lantern Books".to_owned(),
            currency: CurrencyCode::USD,
            // Flat 8% demo rate; a real store would look this up per region.
            tax_rate: Decimal::new(8, 2),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable, or
    /// if the tax rate falls outside [0, 1].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let store_name =
            std::env::var("LANTERN_STORE_NAME").unwrap_or(defaults.store_name);

        let currency = match std::env::var("LANTERN_CURRENCY") {
            Ok(raw) => parse_currency(&raw)
                .ok_or_else(|| ConfigError::InvalidEnvVar("LANTERN_CURRENCY", raw))?,
            Err(_) => defaults.currency,
        };

        let tax_rate = match std::env::var("LANTERN_TAX_RATE") {
            Ok(raw) => {
                let rate: Decimal = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar("LANTERN_TAX_RATE", raw.clone())
                })?;
                validate_tax_rate(rate)
                    .ok_or(ConfigError::InvalidEnvVar("LANTERN_TAX_RATE", raw))?
            }
            Err(_) => defaults.tax_rate,
        };

        let config = Self {
            store_name,
            currency,
            tax_rate,
        };
        tracing::debug!(?config, "loaded store configuration");
        Ok(config)
    }
}

fn parse_currency(raw: &str) -> Option<CurrencyCode> {
    match raw.to_ascii_uppercase().as_str() {
        "USD" => Some(CurrencyCode::USD),
        "EUR" => Some(CurrencyCode::EUR),
        "GBP" => Some(CurrencyCode::GBP),
        "CAD" => Some(CurrencyCode::CAD),
        "AUD" => Some(CurrencyCode::AUD),
        _ => None,
    }
}

fn validate_tax_rate(rate: Decimal) -> Option<Decimal> {
    if rate >= Decimal::ZERO && rate <= Decimal::ONE {
        Some(rate)
    } else {
        None
    }
}
