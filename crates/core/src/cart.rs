//! Shopping cart state container.
//!
//! [`Cart`] is the single source of truth for the current shopping
//! session's line items. UI surfaces (shop listing, product detail, cart
//! page, checkout) read from it and mutate it only through its public
//! operations; nothing else owns or caches line-item state.
//!
//! # Invariants
//!
//! - At most one [`LineItem`] per distinct [`ProductId`].
//! - Every line item has `quantity >= 1`; a quantity that would reach zero
//!   removes the line instead.
//! - Lines keep insertion order; merging into an existing line does not
//!   reorder it.
//!
//! # Derived totals
//!
//! Item counts and money totals are computed on every read from the line
//! items, never cached alongside them. [`Cart::totals`] takes the tax rate
//! as an argument because tax is store configuration, not cart state.
//!
//! All operations are synchronous and run to completion; the cart is owned
//! mutably by a single session and needs no locking. A multi-threaded
//! deployment must serialize access at the owning boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Errors from cart mutations.
///
/// A failed operation leaves the cart exactly as it was; there is no
/// partial application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// `add_item` was called with a quantity of zero.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The candidate item carries a negative price.
    #[error("price cannot be negative: {0}")]
    NegativePrice(Decimal),
}

/// An item descriptor offered to the cart by a catalog surface.
///
/// The cart treats `title` and `image` as opaque display metadata and
/// snapshots `price` at add time; it never re-fetches or revalidates
/// against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: Price,
}

/// One row in the cart: a catalog item paired with a quantity and the
/// unit price captured when it was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl LineItem {
    /// The extended price for this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.amount * Decimal::from(self.quantity)
    }
}

/// Totals derived from the cart on read.
///
/// Shipping is modeled as always free in this store; a real system would
/// make it a pluggable policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of price x quantity across all lines, before tax.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate`, unrounded.
    pub tax: Decimal,
    /// Always zero.
    pub shipping: Decimal,
    /// `subtotal + tax + shipping`.
    pub total: Decimal,
}

/// The shopping cart.
///
/// Created empty at session start, mutated only through the methods below,
/// and cleared explicitly after a successful checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of `candidate` to the cart.
    ///
    /// If a line with the same id already exists its quantity is
    /// incremented (saturating) and its position, title, and snapshot
    /// price are kept; otherwise a new line is appended. Repeated adds of
    /// the same id are the intended merge path, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is 0 and
    /// [`CartError::NegativePrice`] if the candidate's price is negative.
    /// The cart is unchanged on error.
    pub fn add_item(&mut self, candidate: CandidateItem, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if candidate.price.is_negative() {
            return Err(CartError::NegativePrice(candidate.price.amount));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == candidate.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(id = %candidate.id, quantity = line.quantity, "merged cart line");
        } else {
            tracing::debug!(id = %candidate.id, quantity, "added cart line");
            self.lines.push(LineItem {
                id: candidate.id,
                title: candidate.title,
                image: candidate.image,
                unit_price: candidate.price,
                quantity,
            });
        }
        Ok(())
    }

    /// Remove the line matching `id`, if present. No-op when absent.
    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|l| l.id != id);
    }

    /// Set the quantity of the line matching `id` to an absolute value.
    ///
    /// A quantity of 0 removes the line. An unknown id is a no-op; there
    /// is nothing to update.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally. Called after a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The ordered line items, for rendering cart rows.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines (the header badge value),
    /// not the number of distinct items.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price x quantity across all lines, unrounded.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Derive the order-summary totals at the given tax rate.
    #[must_use]
    pub fn totals(&self, tax_rate: Decimal) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = subtotal * tax_rate;
        let shipping = Decimal::ZERO;
        CartTotals {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn candidate(id: i32, cents: i64) -> CandidateItem {
        CandidateItem {
            id: ProductId::new(id),
            title: format!("Book {id}"),
            image: format!("https://img.example/{id}.jpg"),
            price: Price::from_cents(cents, CurrencyCode::USD),
        }
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(candidate(2, 500), 1).unwrap();
        cart.add_item(candidate(1, 1000), 1).unwrap();

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_add_same_id_merges_without_duplicates() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 999), 2).unwrap();
        cart.add_item(candidate(3, 500), 1).unwrap();
        cart.add_item(candidate(1, 999), 3).unwrap();

        assert_eq!(cart.line_count(), 2);
        let first = &cart.lines()[0];
        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(first.quantity, 5);
        // merge must not reorder: id 1 keeps its original position
        assert_eq!(cart.lines()[1].id, ProductId::new(3));
    }

    #[test]
    fn test_add_zero_quantity_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 1).unwrap();
        let before = cart.clone();

        assert_eq!(cart.add_item(candidate(2, 500), 0), Err(CartError::ZeroQuantity));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_negative_price_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_item(candidate(1, -100), 1).unwrap_err();
        assert!(matches!(err, CartError::NegativePrice(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 1).unwrap();

        cart.remove_item(ProductId::new(99));
        assert_eq!(cart.line_count(), 1);

        cart.remove_item(ProductId::new(1));
        cart.remove_item(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 5).unwrap();

        cart.set_quantity(ProductId::new(1), 2);
        assert_eq!(cart.lines()[0].quantity, 2);

        // unknown id is a no-op
        cart.set_quantity(ProductId::new(42), 7);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 2).unwrap();
        cart.add_item(candidate(2, 500), 1).unwrap();

        cart.set_quantity(ProductId::new(1), 0);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_clear_empties_fully() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 3).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_counts_and_subtotal_consistency() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 1).unwrap();
        cart.add_item(candidate(2, 500), 3).unwrap();

        assert_eq!(cart.total_item_count(), 4);
        assert_eq!(cart.subtotal(), Decimal::new(2500, 2));

        let expected: Decimal = cart.lines().iter().map(LineItem::line_total).sum();
        assert_eq!(cart.subtotal(), expected);
    }

    #[test]
    fn test_totals_at_eight_percent() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 1000), 1).unwrap();
        cart.add_item(candidate(2, 500), 3).unwrap();

        let totals = cart.totals(Decimal::new(8, 2));
        assert_eq!(totals.subtotal, Decimal::new(2500, 2));
        assert_eq!(totals.tax, Decimal::new(200, 2));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::new(2700, 2));
    }

    #[test]
    fn test_merge_scenario_nine_ninety_nine_twice() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 999), 1).unwrap();
        cart.add_item(candidate(1, 999), 1).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), Decimal::new(1998, 2));
    }

    #[test]
    fn test_merge_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        cart.add_item(candidate(1, 100), u32::MAX).unwrap();
        cart.add_item(candidate(1, 100), 5).unwrap();
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }
}
