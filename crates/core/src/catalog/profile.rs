//! Profile page records: the visitor's details and past orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AddressId, Email, OrderStatus, PaymentMethodId};

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    /// "Home", "Work", ...
    pub kind: String,
    pub address: String,
    pub is_default: bool,
}

/// A saved card, last four digits only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    /// Card brand, e.g. "Visa".
    pub kind: String,
    pub last4: String,
    pub expiry: String,
    pub is_default: bool,
}

/// The visitor's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub avatar: String,
    /// Display month, e.g. "January 2023".
    pub joined: String,
    pub addresses: Vec<Address>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl UserProfile {
    /// Initials for the avatar fallback ("John Doe" -> "JD").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// One line of a past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// A past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: String,
    pub restaurant: String,
    pub items: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = UserProfile {
            id: "user123".to_string(),
            name: "john ronald doe".to_string(),
            email: Email::parse("john.doe@example.com").unwrap(),
            phone: String::new(),
            avatar: String::new(),
            joined: "January 2023".to_string(),
            addresses: Vec::new(),
            payment_methods: Vec::new(),
        };

        assert_eq!(profile.initials(), "JR");
    }
}
