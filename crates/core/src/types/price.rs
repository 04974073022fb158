//! Type-safe price representation using decimal arithmetic.
//!
//! Menu and cart prices travel as formatted strings (`"$10.99"`), the same
//! shape the storefront renders. [`Price`] parses those strings into
//! [`Decimal`] so totals never touch floating point.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a [`Price`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (after trimming and removing the symbol).
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
    /// Prices cannot be negative.
    #[error("price cannot be negative: {0}")]
    Negative(String),
}

/// Symbol prices are written with.
pub const CURRENCY_SYMBOL: &str = "$";

/// A US dollar price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in dollars.
    pub amount: Decimal,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Parse a formatted USD price such as `"$10.99"`, `"10.99"` or `" $4 "`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not a decimal number,
    /// or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(trimmed)
            .trim();

        if digits.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount: Decimal = digits
            .parse()
            .map_err(|_| PriceError::Invalid(s.to_string()))?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(s.to_string()));
        }

        Ok(Self::new(amount))
    }

    /// The amount rounded to cents, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_SYMBOL}{:.2}", self.rounded())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
