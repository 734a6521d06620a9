//! Paper Lantern Storefront library.
//!
//! Session-level storefront logic for Paper Lantern Books: the mock book
//! catalog, wishlist, checkout flow, order history, and the session state
//! that owns them. Rendering and navigation are left to whatever surface
//! consumes this crate; everything here is synchronous, in-memory state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod state;
pub mod wishlist;
