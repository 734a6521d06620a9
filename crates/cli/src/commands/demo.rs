//! Scripted shopping session.
//!
//! Walks the whole storefront surface in order: browse, add to cart,
//! adjust quantities, save to wishlist, sign in, check out, and show the
//! recorded order. Useful as a smoke test and as living documentation of
//! the session API.

#![allow(clippy::print_stdout)]

use paper_lantern_core::ProductId;
use paper_lantern_storefront::catalog::Catalog;
use paper_lantern_storefront::checkout::CheckoutForm;
use paper_lantern_storefront::config::StoreConfig;
use paper_lantern_storefront::error::StoreError;
use paper_lantern_storefront::state::SessionState;

/// Run the scripted session.
///
/// # Errors
///
/// Returns [`StoreError`] if any step fails; every step below is expected
/// to succeed against the sample catalog.
pub fn run() -> Result<(), StoreError> {
    let config = StoreConfig::from_env()?;
    let mut session =
        SessionState::new(config, Catalog::with_sample_books()).with_order_history();

    println!("== {} ==", session.config().store_name);

    println!("orders already on file:");
    for order in session.orders().all() {
        println!("  {} ({}) - total {}", order.number, order.status, order.total);
    }

    // Fill the cart the way the shop page would
    session.add_to_cart(ProductId::new(1), 1)?;
    session.add_to_cart(ProductId::new(2), 2)?;
    session.add_to_cart(ProductId::new(2), 1)?; // merges into one line
    session.add_to_wishlist(ProductId::new(3))?;

    println!("cart badge: {}", session.cart_badge());
    for line in session.cart().lines() {
        println!(
            "  {:<40} x{:<2} {:>8}",
            line.title,
            line.quantity,
            line.unit_price.display()
        );
    }

    let summary = session.order_summary();
    println!("subtotal: {}", summary.subtotal);
    println!("tax:      {}", summary.tax);
    println!("shipping: Free");
    println!("total:    {}", summary.total);

    session.auth_mut().login("Jordan Reader", "jordan@example.com")?;

    let form = CheckoutForm {
        full_name: "Jordan Reader".to_owned(),
        email: "jordan@example.com".to_owned(),
        address: "12 Lantern Way".to_owned(),
        city: "Portland".to_owned(),
        state: "OR".to_owned(),
        zip: "97201".to_owned(),
        card_number: "4242424242424242".to_owned(),
        expiry_date: "12/27".to_owned(),
        cvv: "123".to_owned(),
    };
    let order = session.checkout(&form)?;

    println!(
        "placed {} ({}) - total {}",
        order.number,
        order.status,
        order.total
    );
    println!("cart badge after checkout: {}", session.cart_badge());
    println!("orders on file: {}", session.orders().len());
    Ok(())
}
