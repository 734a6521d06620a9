//! Paper Lantern Core - Shared types and cart state.
//!
//! This crate provides the domain types used across all Paper Lantern
//! components:
//! - `storefront` - Catalog, checkout, orders, and session state
//! - `cli` - Command-line storefront driver
//!
//! # Architecture
//!
//! The core crate contains only types and pure state - no I/O, no HTTP,
//! no persistence. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   order statuses
//! - [`cart`] - The shopping cart state container and its derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CandidateItem, Cart, CartError, CartTotals, LineItem};
pub use types::*;
