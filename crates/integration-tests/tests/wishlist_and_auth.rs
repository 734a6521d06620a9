//! Wishlist and mock account-session behavior through the session state.

#![allow(clippy::unwrap_used)]

use paper_lantern_core::ProductId;
use paper_lantern_integration_tests::demo_session;
use paper_lantern_storefront::error::StoreError;

// =============================================================================
// Wishlist
// =============================================================================

#[test]
fn test_wishlist_add_is_deduplicated() {
    let mut session = demo_session();
    session.add_to_wishlist(ProductId::new(1)).unwrap();
    session.add_to_wishlist(ProductId::new(1)).unwrap();
    assert_eq!(session.wishlist().entries().len(), 1);
}

#[test]
fn test_wishlist_to_cart_keeps_entry_saved() {
    let mut session = demo_session();
    session.add_to_wishlist(ProductId::new(6)).unwrap();

    session.wishlist_to_cart(ProductId::new(6)).unwrap();

    assert_eq!(session.cart_badge(), 1);
    assert!(session.wishlist().contains(ProductId::new(6)));

    // a second move merges in the cart rather than duplicating
    session.wishlist_to_cart(ProductId::new(6)).unwrap();
    assert_eq!(session.cart().line_count(), 1);
    assert_eq!(session.cart_badge(), 2);
}

#[test]
fn test_wishlist_unknown_ids() {
    let mut session = demo_session();
    assert!(matches!(
        session.add_to_wishlist(ProductId::new(404)),
        Err(StoreError::ProductNotFound(_))
    ));
    assert!(matches!(
        session.wishlist_to_cart(ProductId::new(404)),
        Err(StoreError::ProductNotFound(_))
    ));
    // removal of something never saved is a silent no-op
    session.remove_from_wishlist(ProductId::new(404));
    assert!(session.wishlist().is_empty());
}

// =============================================================================
// Mock Auth
// =============================================================================

#[test]
fn test_login_logout_cycle() {
    let mut session = demo_session();
    assert!(!session.auth().is_authenticated());

    session
        .auth_mut()
        .login("Jordan Reader", "jordan@example.com")
        .unwrap();
    assert!(session.auth().is_authenticated());
    assert_eq!(session.auth().user().unwrap().name, "Jordan Reader");

    session.auth_mut().logout();
    assert!(!session.auth().is_authenticated());
}

#[test]
fn test_auth_state_is_independent_of_cart() {
    let mut session = demo_session();
    session.add_to_cart(ProductId::new(2), 1).unwrap();

    session
        .auth_mut()
        .login("Jordan Reader", "jordan@example.com")
        .unwrap();
    session.auth_mut().logout();

    // signing out does not touch the cart
    assert_eq!(session.cart_badge(), 1);
}
