//! Order status shown in the profile's order history.

use serde::{Deserialize, Serialize};

/// Past order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Processing,
    Cancelled,
}

impl OrderStatus {
    /// Capitalized label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Processing => "Processing",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS class for the status badge.
    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Delivered => "badge-success",
            Self::Processing => "badge-info",
            Self::Cancelled => "badge-danger",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_serde() {
        let status: OrderStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(status, OrderStatus::Processing);
        assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).unwrap(), "\"cancelled\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
        assert_eq!(OrderStatus::Cancelled.badge_class(), "badge-danger");
    }
}
