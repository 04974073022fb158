//! Typed access to the individual slots.
//!
//! Unreadable slot content never fails a request: it is logged and the
//! slot's empty value is used instead.

use grubzap_core::Cart;
use grubzap_core::chat::ChatTranscript;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{SlotStore, StorageError};
use crate::models::{Flash, ProfileDetails, SessionToken, session_keys};

/// Decode a JSON slot, logging and discarding malformed content.
async fn read_json<T: DeserializeOwned>(
    store: &impl SlotStore,
    key: &'static str,
) -> Result<Option<T>, StorageError> {
    let Some(text) = store.read(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&text) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "Discarding malformed slot content");
            Ok(None)
        }
    }
}

async fn write_json<T: Serialize>(
    store: &impl SlotStore,
    key: &'static str,
    value: &T,
) -> Result<(), StorageError> {
    let text =
        serde_json::to_string(value).map_err(|source| StorageError::Encode { key, source })?;
    store.write(key, text).await
}

// =============================================================================
// Cart
// =============================================================================

/// The visitor's cart. Missing or malformed content reads as an empty cart.
///
/// # Errors
///
/// Returns an error only if the store itself fails.
pub async fn load_cart(store: &impl SlotStore) -> Result<Cart, StorageError> {
    let Some(text) = store.read(session_keys::CART).await? else {
        return Ok(Cart::new());
    };

    Ok(Cart::from_json(&text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Cart slot is malformed, starting with an empty cart");
        Cart::new()
    }))
}

/// Write the whole cart back.
///
/// # Errors
///
/// Returns an error if the cart cannot be encoded or the store fails.
pub async fn save_cart(store: &impl SlotStore, cart: &Cart) -> Result<(), StorageError> {
    let text = cart.to_json().map_err(|source| StorageError::Encode {
        key: session_keys::CART,
        source,
    })?;
    store.write(session_keys::CART, text).await
}

/// Delete the cart slot.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn clear_cart(store: &impl SlotStore) -> Result<(), StorageError> {
    store.remove(session_keys::CART).await
}

// =============================================================================
// Flash
// =============================================================================

/// Queue a message for the next rendered page, replacing any pending one.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn set_flash(store: &impl SlotStore, flash: &Flash) -> Result<(), StorageError> {
    write_json(store, session_keys::FLASH, flash).await
}

/// Pop the pending message, if any.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn take_flash(store: &impl SlotStore) -> Result<Option<Flash>, StorageError> {
    let flash = read_json(store, session_keys::FLASH).await?;
    if flash.is_some() {
        store.remove(session_keys::FLASH).await?;
    }
    Ok(flash)
}

// =============================================================================
// Token
// =============================================================================

/// Whether the visitor holds a signed-in marker.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn has_token(store: &impl SlotStore) -> Result<bool, StorageError> {
    Ok(store
        .read(session_keys::TOKEN)
        .await?
        .is_some_and(|token| !token.is_empty()))
}

/// # Errors
///
/// Returns an error if the store fails.
pub async fn store_token(store: &impl SlotStore, token: &SessionToken) -> Result<(), StorageError> {
    store
        .write(session_keys::TOKEN, token.as_str().to_string())
        .await
}

/// # Errors
///
/// Returns an error if the store fails.
pub async fn remove_token(store: &impl SlotStore) -> Result<(), StorageError> {
    store.remove(session_keys::TOKEN).await
}

// =============================================================================
// Chat and profile
// =============================================================================

/// The chat transcript, or a fresh greeting-only one.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn load_chat(store: &impl SlotStore) -> Result<ChatTranscript, StorageError> {
    Ok(read_json(store, session_keys::CHAT)
        .await?
        .unwrap_or_default())
}

/// # Errors
///
/// Returns an error if the transcript cannot be encoded or the store fails.
pub async fn save_chat(store: &impl SlotStore, chat: &ChatTranscript) -> Result<(), StorageError> {
    write_json(store, session_keys::CHAT, chat).await
}

/// Profile edits, if the visitor saved any.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn load_profile(store: &impl SlotStore) -> Result<Option<ProfileDetails>, StorageError> {
    read_json(store, session_keys::PROFILE).await
}

/// # Errors
///
/// Returns an error if the details cannot be encoded or the store fails.
pub async fn save_profile(
    store: &impl SlotStore,
    details: &ProfileDetails,
) -> Result<(), StorageError> {
    write_json(store, session_keys::PROFILE, details).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grubzap_core::{CartItem, MenuItemId};

    use super::*;
    use crate::storage::MemorySlots;

    fn garlic_bread() -> CartItem {
        CartItem::new(MenuItemId::new(4), "Garlic Bread", "$4.99", "bread.jpg")
    }

    #[tokio::test]
    async fn test_missing_cart_is_empty() {
        let slots = MemorySlots::new();
        assert!(load_cart(&slots).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cart_round_trips_through_slot() {
        let slots = MemorySlots::new();
        let mut cart = Cart::new();
        cart.add(garlic_bread());
        cart.add(garlic_bread());
        save_cart(&slots, &cart).await.unwrap();

        let text = slots.read(session_keys::CART).await.unwrap().unwrap();
        assert!(text.contains("\"quantity\":2"));
        assert_eq!(load_cart(&slots).await.unwrap(), cart);
    }

    #[tokio::test]
    async fn test_malformed_cart_reads_as_empty() {
        let slots = MemorySlots::new();
        slots
            .write(session_keys::CART, "{not json".to_string())
            .await
            .unwrap();
        assert!(load_cart(&slots).await.unwrap().is_empty());

        slots
            .write(
                session_keys::CART,
                r#"[{"id":1,"name":"Burger","price":"$9.99","image":"","quantity":0}]"#
                    .to_string(),
            )
            .await
            .unwrap();
        assert!(load_cart(&slots).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_cart_removes_slot() {
        let slots = MemorySlots::new();
        let mut cart = Cart::new();
        cart.add(garlic_bread());
        save_cart(&slots, &cart).await.unwrap();

        clear_cart(&slots).await.unwrap();

        assert!(slots.read(session_keys::CART).await.unwrap().is_none());
        assert!(load_cart(&slots).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_flash_is_taken_once() {
        let slots = MemorySlots::new();
        set_flash(&slots, &Flash::success("Cart cleared")).await.unwrap();

        let flash = take_flash(&slots).await.unwrap().unwrap();
        assert_eq!(flash.title, "Cart cleared");
        assert!(take_flash(&slots).await.unwrap().is_none());
        assert!(slots.is_empty().await);
    }

    #[tokio::test]
    async fn test_token_presence() {
        let slots = MemorySlots::new();
        assert!(!has_token(&slots).await.unwrap());

        store_token(&slots, &SessionToken::generate()).await.unwrap();
        assert!(has_token(&slots).await.unwrap());

        remove_token(&slots).await.unwrap();
        assert!(!has_token(&slots).await.unwrap());
    }

    #[tokio::test]
    async fn test_chat_defaults_to_greeting() {
        let slots = MemorySlots::new();
        let mut chat = load_chat(&slots).await.unwrap();
        assert_eq!(chat, ChatTranscript::default());

        chat.choose_mood("hungry");
        save_chat(&slots, &chat).await.unwrap();
        assert_eq!(load_chat(&slots).await.unwrap().messages.len(), 3);
    }
}
