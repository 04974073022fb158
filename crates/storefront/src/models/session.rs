//! Session slot keys and the signed-in marker.

use uuid::Uuid;

/// Opaque signed-in marker.
///
/// Only its presence matters: nothing checks the value, it just gates the
/// profile page and switches the navbar to its signed-in links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// A fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session slot keys.
pub mod keys {
    /// JSON array of cart items.
    pub const CART: &str = "grubzap-cart";

    /// Signed-in marker.
    pub const TOKEN: &str = "token";

    /// Chat widget transcript.
    pub const CHAT: &str = "chat";

    /// One-shot message for the next rendered page.
    pub const FLASH: &str = "flash";

    /// Profile edits made on the settings tab.
    pub const PROFILE: &str = "profile";
}
