//! Status enums for store entities.

use serde::{Deserialize, Serialize};

/// Fulfillment status of a placed order.
///
/// Orders start in `Processing` when checkout records them and move
/// forward from there; the storefront only ever displays these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    InTransit,
    Delivered,
}

impl OrderStatus {
    /// Human-readable label used in order listings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" | "Processing" => Ok(Self::Processing),
            "in_transit" | "In Transit" => Ok(Self::InTransit),
            "delivered" | "Delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::Processing.to_string(), "Processing");
        assert_eq!(OrderStatus::InTransit.to_string(), "In Transit");
        assert_eq!(OrderStatus::Delivered.to_string(), "Delivered");
    }

    #[test]
    fn test_from_str_roundtrip() {
        assert_eq!("In Transit".parse::<OrderStatus>(), Ok(OrderStatus::InTransit));
        assert_eq!("delivered".parse::<OrderStatus>(), Ok(OrderStatus::Delivered));
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_default_is_processing() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }
}
