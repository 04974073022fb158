//! In-process slot storage.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::{SlotStore, StorageError};

/// Slots held in a plain map.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no slot is set.
    pub async fn is_empty(&self) -> bool {
        self.slots.lock().await.is_empty()
    }
}

impl SlotStore for MemorySlots {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.slots.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.lock().await.remove(key);
        Ok(())
    }
}
