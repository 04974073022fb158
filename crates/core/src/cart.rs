//! The visitor's cart.
//!
//! A cart is an ordered list of line items keyed by menu item id. It lives
//! in a single storage slot as JSON text; see [`Cart::to_json`] and
//! [`Cart::from_json`].
//!
//! Invariants:
//! - every line has a quantity of at least 1 (enforced by [`NonZeroU32`],
//!   so stored content with a zero quantity fails to parse)
//! - ids are unique within the cart; [`Cart::add`] merges instead of
//!   appending a duplicate row
//! - decrementing a line at quantity 1 does nothing; removal is explicit

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, Price};

/// Sales tax applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Flat delivery fee charged when the cart is not empty.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(399, 0, 0, false, 2);

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    /// Formatted unit price, e.g. `"$10.99"`.
    pub price: String,
    pub image: String,
    pub quantity: NonZeroU32,
}

impl CartItem {
    /// A new line with quantity 1.
    #[must_use]
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            image: image.into(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// Parsed unit price. Unparseable prices count as zero.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        Price::parse(&self.price).map_or(Decimal::ZERO, |p| p.amount)
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity.get())
    }
}

/// Order summary amounts. Not rounded; format with [`Price::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// The visitor's in-progress selection of menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Parse a cart from its stored JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the text is not an array of valid lines.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize the cart to the JSON text kept in the storage slot.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity.get()))
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add an item. An existing line with the same id gains one unit
    /// instead of a second row being appended.
    pub fn add(&mut self, item: CartItem) {
        if !self.increment(item.id) {
            self.items.push(CartItem {
                quantity: NonZeroU32::MIN,
                ..item
            });
        }
    }

    /// Add one unit to a line. Returns `false` when no line has that id.
    pub fn increment(&mut self, id: MenuItemId) -> bool {
        self.line_mut(id).is_some_and(|item| {
            item.quantity = item.quantity.saturating_add(1);
            true
        })
    }

    /// Remove one unit from a line. A line at quantity 1 is left as is.
    /// Returns `true` only when a quantity actually changed.
    pub fn decrement(&mut self, id: MenuItemId) -> bool {
        let Some(item) = self.line_mut(id) else {
            return false;
        };
        match NonZeroU32::new(item.quantity.get() - 1) {
            Some(quantity) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line entirely. Returns the removed line, if any.
    pub fn remove(&mut self, id: MenuItemId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal, tax, delivery fee, and total.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = subtotal * TAX_RATE;
        let delivery_fee = if self.is_empty() {
            Decimal::ZERO
        } else {
            DELIVERY_FEE
        };

        CartTotals {
            subtotal,
            tax,
            delivery_fee,
            total: subtotal + tax + delivery_fee,
        }
    }

    fn line_mut(&mut self, id: MenuItemId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}
