//! Unified error handling for the storefront.
//!
//! Provides a unified [`StoreError`] type so that surfaces driving the
//! session state work against one error. Module-level errors convert in
//! via `#[from]`; soft misses (idempotent removes, unknown-id quantity
//! updates) are no-ops in the stores themselves and never reach here.

use thiserror::Error;

use paper_lantern_core::{CartError, ProductId};

use crate::auth::AuthError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Cart mutation rejected its input.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout could not complete.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Account operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A catalog lookup by id found nothing.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
