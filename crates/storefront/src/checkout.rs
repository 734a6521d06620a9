//! Checkout: form validation, payment, and order recording.
//!
//! The flow mirrors the checkout page: validate the shipping and payment
//! form, charge the gateway for the cart total, record the order, and only
//! then clear the cart. Every failure path leaves the cart and the order
//! history untouched.
//!
//! Payment goes through the [`PaymentGateway`] trait. The bundled
//! [`MockGateway`] approves every charge; real failure modes (declined
//! card, network errors) are a gateway implementation concern, which is
//! why the seam exists.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use paper_lantern_core::{Cart, Email, EmailError};

use crate::config::StoreConfig;
use crate::orders::{Order, OrderHistory, OrderLine};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more required form fields are blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The email field is present but malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The payment gateway rejected the charge.
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),
}

/// Errors from a payment gateway.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// The charge was declined.
    #[error("charge declined: {0}")]
    Declined(String),
}

/// Proof of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Gateway-assigned transaction reference.
    pub transaction_id: Uuid,
    /// Amount charged.
    pub amount: Decimal,
}

/// Boundary to the payment processor.
pub trait PaymentGateway {
    /// Charge the shopper for `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] if the charge does not go through.
    fn charge(&self, amount: Decimal) -> Result<PaymentReceipt, PaymentError>;
}

/// A gateway that approves every charge. Demo behavior only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGateway;

impl PaymentGateway for MockGateway {
    fn charge(&self, amount: Decimal) -> Result<PaymentReceipt, PaymentError> {
        let receipt = PaymentReceipt {
            transaction_id: Uuid::new_v4(),
            amount,
        };
        tracing::debug!(transaction_id = %receipt.transaction_id, %amount, "mock charge approved");
        Ok(receipt)
    }
}

/// Shipping and payment details collected at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Validate the form, reporting every blank field at once, then parse
    /// the email.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] listing each blank field,
    /// or [`CheckoutError::InvalidEmail`] if all fields are present but
    /// the email is malformed.
    pub fn validate(&self) -> Result<Email, CheckoutError> {
        let required: [(&'static str, &str); 9] = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("card_number", &self.card_number),
            ("expiry_date", &self.expiry_date),
            ("cvv", &self.cvv),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }
        Ok(Email::parse(&self.email)?)
    }
}

/// Place an order from the current cart.
///
/// Validates the form, derives the totals at the configured tax rate,
/// charges the gateway, records the order, and clears the cart. The cart
/// is cleared only after the order is recorded, so any error leaves the
/// session exactly as it was.
///
/// # Errors
///
/// Returns [`CheckoutError`] if the cart is empty, the form is invalid,
/// or the charge is declined.
pub fn place_order(
    cart: &mut Cart,
    form: &CheckoutForm,
    gateway: &impl PaymentGateway,
    config: &StoreConfig,
    history: &mut OrderHistory,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let email = form.validate()?;

    let totals = cart.totals(config.tax_rate);
    let receipt = gateway.charge(totals.total)?;
    tracing::info!(
        email = %email,
        transaction_id = %receipt.transaction_id,
        total = %totals.total,
        "checkout complete"
    );

    let lines: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();
    let order = history.record(lines, totals.subtotal, totals.tax, totals.total);
    cart.clear();
    Ok(order)
}
