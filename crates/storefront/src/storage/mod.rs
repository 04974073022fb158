//! Per-visitor storage slots.
//!
//! A slot is one named entry holding a text value, scoped to a single
//! visitor. In production the slots live in the visitor's session record;
//! tests use an in-memory map.
//!
//! # Slots
//!
//! | Key            | Contents                                  |
//! |----------------|-------------------------------------------|
//! | `grubzap-cart` | JSON array of cart items                  |
//! | `token`        | Opaque signed-in marker                   |
//! | `chat`         | JSON chat transcript                      |
//! | `flash`        | JSON one-shot message for the next page   |
//! | `profile`      | JSON profile edits                        |
//!
//! Values are always text. Structured slots are encoded with `serde_json`
//! by the helpers in [`slots`].

#[cfg(test)]
mod memory;
mod session;
pub mod slots;

use std::future::Future;

use thiserror::Error;

#[cfg(test)]
pub use memory::MemorySlots;
pub use slots::{
    clear_cart, has_token, load_cart, load_chat, load_profile, remove_token, save_cart,
    save_chat, save_profile, set_flash, store_token, take_flash,
};

/// Errors from a slot store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed.
    #[error("slot store failed: {0}")]
    Store(String),

    /// A value could not be encoded for storage.
    #[error("could not encode slot {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Text key-value storage scoped to one visitor.
///
/// Writes are last-write-wins. There is no locking between concurrent
/// requests from the same visitor.
pub trait SlotStore: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot was never written or was removed.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Overwrite a slot.
    fn write(&self, key: &str, value: String)
    -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Delete a slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}
