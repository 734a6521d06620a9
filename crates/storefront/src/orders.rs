//! Order records and the session's order history.
//!
//! Orders are written once by checkout and are read-only afterwards.
//! Numbers are sequential per session (`ORD-001`, `ORD-002`, ...), which
//! matches the display format the account page uses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paper_lantern_core::{LineItem, OrderStatus, Price};

/// Display identifier for an order, e.g. `ORD-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    fn nth(n: u32) -> Self {
        Self(format!("ORD-{n:03}"))
    }

    /// The number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a recorded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub title: String,
    pub quantity: u32,
    pub unit_price: Price,
}

impl From<&LineItem> for OrderLine {
    fn from(line: &LineItem) -> Self {
        Self {
            title: line.title.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// The session's order history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderHistory {
    orders: Vec<Order>,
    next: u32,
}

impl OrderHistory {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            next: 0,
        }
    }

    /// A history pre-seeded with the two demo orders the account page
    /// shows before any real checkout has happened.
    #[must_use]
    pub fn with_sample_orders() -> Self {
        let usd = |cents| Price::from_cents(cents, paper_lantern_core::CurrencyCode::USD);
        let order = |n, status, lines: Vec<OrderLine>, total| Order {
            number: OrderNumber::nth(n),
            placed_at: Utc::now(),
            status,
            subtotal: total,
            tax: Decimal::ZERO,
            total,
            lines,
        };
        Self {
            orders: vec![
                order(
                    1,
                    OrderStatus::Delivered,
                    vec![
                        OrderLine {
                            title: "The Midnight Library".to_owned(),
                            quantity: 1,
                            unit_price: usd(2499),
                        },
                        OrderLine {
                            title: "Atomic Habits".to_owned(),
                            quantity: 2,
                            unit_price: usd(1999),
                        },
                    ],
                    Decimal::new(6497, 2),
                ),
                order(
                    2,
                    OrderStatus::InTransit,
                    vec![
                        OrderLine {
                            title: "Educated".to_owned(),
                            quantity: 1,
                            unit_price: usd(2199),
                        },
                        OrderLine {
                            title: "The Silent Patient".to_owned(),
                            quantity: 1,
                            unit_price: usd(2299),
                        },
                    ],
                    Decimal::new(4498, 2),
                ),
            ],
            next: 2,
        }
    }

    /// Record a new order built by checkout, assigning the next number.
    /// Returns the caller's copy; the history keeps its own.
    pub fn record(
        &mut self,
        lines: Vec<OrderLine>,
        subtotal: Decimal,
        tax: Decimal,
        total: Decimal,
    ) -> Order {
        self.next += 1;
        let order = Order {
            number: OrderNumber::nth(self.next),
            placed_at: Utc::now(),
            status: OrderStatus::Processing,
            lines,
            subtotal,
            tax,
            total,
        };
        tracing::info!(number = %order.number, total = %order.total, "recorded order");
        self.orders.push(order.clone());
        order
    }

    /// All recorded orders, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<&Order> {
        self.orders.iter().rev().collect()
    }

    /// Number of recorded orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
