//! Session state owning every store the UI surfaces consume.
//!
//! [`SessionState`] replaces the module-level singletons of the original
//! store with one explicitly constructed value: whoever owns the session
//! owns the cart, wishlist, order history, and account state, and passes
//! this struct by reference to consumers. There is no global lifetime and
//! no interior mutability; concurrent deployments wrap the whole state in
//! their own mutex or actor boundary.

use paper_lantern_core::{CandidateItem, Cart, CartTotals, ProductId};

use crate::auth::AccountSession;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutForm, MockGateway, PaymentGateway};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::orders::{Order, OrderHistory};
use crate::wishlist::{Wishlist, WishlistEntry};

/// All per-session storefront state.
#[derive(Debug)]
pub struct SessionState {
    config: StoreConfig,
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    orders: OrderHistory,
    auth: AccountSession,
}

impl SessionState {
    /// Create a fresh session over the given catalog.
    #[must_use]
    pub const fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            orders: OrderHistory::new(),
            auth: AccountSession::new(),
        }
    }

    /// A demo session: default config, sample catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(StoreConfig::default(), Catalog::with_sample_books())
    }

    /// Start this session with the sample orders already on file, the way
    /// the account page shows a returning shopper's history.
    #[must_use]
    pub fn with_order_history(mut self) -> Self {
        self.orders = OrderHistory::with_sample_orders();
        self
    }

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The catalog, for browsing surfaces.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart, for rendering cart rows.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The wishlist.
    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// The order history.
    #[must_use]
    pub const fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    /// The account session.
    #[must_use]
    pub const fn auth(&self) -> &AccountSession {
        &self.auth
    }

    /// Mutable access to the account session (login/logout).
    pub const fn auth_mut(&mut self) -> &mut AccountSession {
        &mut self.auth
    }

    /// Add `quantity` of the catalog item `id` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] if the id is not in the
    /// catalog, or the underlying cart validation error.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> Result<()> {
        let book = self
            .catalog
            .get(id)
            .ok_or(StoreError::ProductNotFound(id))?;
        let candidate = CandidateItem::from(book);
        self.cart.add_item(candidate, quantity)?;
        Ok(())
    }

    /// Remove a line from the cart. No-op when absent.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove_item(id);
    }

    /// Set an absolute line quantity; 0 removes the line.
    pub fn set_cart_quantity(&mut self, id: ProductId, quantity: u32) {
        self.cart.set_quantity(id, quantity);
    }

    /// The header badge value: total units in the cart.
    #[must_use]
    pub fn cart_badge(&self) -> u32 {
        self.cart.total_item_count()
    }

    /// The order-summary totals at the configured tax rate.
    #[must_use]
    pub fn order_summary(&self) -> CartTotals {
        self.cart.totals(self.config.tax_rate)
    }

    /// Save the catalog item `id` to the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] if the id is not in the
    /// catalog.
    pub fn add_to_wishlist(&mut self, id: ProductId) -> Result<()> {
        let book = self
            .catalog
            .get(id)
            .ok_or(StoreError::ProductNotFound(id))?;
        self.wishlist.add(WishlistEntry::from(book));
        Ok(())
    }

    /// Remove a wishlist entry. No-op when absent.
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.wishlist.remove(id);
    }

    /// Move a wishlist entry into the cart (the entry stays saved).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] if the id is not saved.
    pub fn wishlist_to_cart(&mut self, id: ProductId) -> Result<()> {
        let candidate = self
            .wishlist
            .candidate(id)
            .ok_or(StoreError::ProductNotFound(id))?;
        self.cart.add_item(candidate, 1)?;
        Ok(())
    }

    /// Run checkout with the mock gateway.
    ///
    /// # Errors
    ///
    /// Returns the checkout error; the cart and history are unchanged on
    /// failure.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<Order> {
        self.checkout_with(form, &MockGateway)
    }

    /// Run checkout against a specific payment gateway.
    ///
    /// # Errors
    ///
    /// Returns the checkout error; the cart and history are unchanged on
    /// failure.
    pub fn checkout_with(
        &mut self,
        form: &CheckoutForm,
        gateway: &impl PaymentGateway,
    ) -> Result<Order> {
        let order = crate::checkout::place_order(
            &mut self.cart,
            form,
            gateway,
            &self.config,
            &mut self.orders,
        )?;
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_cart_by_catalog_id() {
        let mut session = SessionState::demo();
        session.add_to_cart(ProductId::new(1), 2).unwrap();
        assert_eq!(session.cart_badge(), 2);
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let mut session = SessionState::demo();
        let err = session.add_to_cart(ProductId::new(404), 1).unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert_eq!(session.cart_badge(), 0);
    }

    #[test]
    fn test_wishlist_to_cart_keeps_entry() {
        let mut session = SessionState::demo();
        session.add_to_wishlist(ProductId::new(2)).unwrap();
        session.wishlist_to_cart(ProductId::new(2)).unwrap();
        assert_eq!(session.cart_badge(), 1);
        assert!(session.wishlist().contains(ProductId::new(2)));
    }

    #[test]
    fn test_seeded_history_continues_the_order_sequence() {
        let mut session = SessionState::demo().with_order_history();
        assert_eq!(session.orders().len(), 2);

        session.add_to_cart(ProductId::new(1), 1).unwrap();
        let order = session
            .checkout(&crate::checkout::CheckoutForm {
                full_name: "Jordan Reader".to_owned(),
                email: "jordan@example.com".to_owned(),
                address: "12 Lantern Way".to_owned(),
                city: "Portland".to_owned(),
                state: "OR".to_owned(),
                zip: "97201".to_owned(),
                card_number: "4242424242424242".to_owned(),
                expiry_date: "12/27".to_owned(),
                cvv: "123".to_owned(),
            })
            .unwrap();
        assert_eq!(order.number.as_str(), "ORD-003");
    }

    #[test]
    fn test_order_summary_uses_configured_rate() {
        let mut session = SessionState::demo();
        // 24.99 + 3 x 19.99 = 84.96
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        session.add_to_cart(ProductId::new(2), 3).unwrap();

        let summary = session.order_summary();
        assert_eq!(summary.subtotal, rust_decimal::Decimal::new(8496, 2));
        assert_eq!(summary.total, summary.subtotal + summary.tax);
    }
}
