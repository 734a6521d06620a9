//! Integration tests for Paper Lantern Books.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paper-lantern-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Cart store mutation and totals properties
//! - `checkout_flow` - End-to-end browse/add/checkout scenarios
//! - `catalog_browse` - Filter and sort behavior over the sample catalog
//! - `wishlist_and_auth` - Wishlist and mock account session behavior
//!
//! Everything runs in memory against the sample catalog; there are no
//! external services to start.

use rust_decimal::Decimal;

use paper_lantern_storefront::checkout::CheckoutForm;
use paper_lantern_storefront::state::SessionState;

/// A fresh demo session: default config (USD, 8% tax), sample catalog.
#[must_use]
pub fn demo_session() -> SessionState {
    SessionState::demo()
}

/// A fully filled, valid checkout form.
#[must_use]
pub fn valid_checkout_form() -> CheckoutForm {
    CheckoutForm {
        full_name: "Jordan Reader".to_owned(),
        email: "jordan@example.com".to_owned(),
        address: "12 Lantern Way".to_owned(),
        city: "Portland".to_owned(),
        state: "OR".to_owned(),
        zip: "97201".to_owned(),
        card_number: "4242424242424242".to_owned(),
        expiry_date: "12/27".to_owned(),
        cvv: "123".to_owned(),
    }
}

/// Shorthand for an exact two-decimal amount.
#[must_use]
pub fn dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
