//! Core types for Paper Lantern Books.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{CurrencyCode, Price};
pub use status::OrderStatus;
