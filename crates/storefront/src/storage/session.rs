//! Slot storage backed by the visitor's `tower-sessions` record.

use tower_sessions::Session;

use super::{SlotStore, StorageError};

impl From<tower_sessions::session::Error> for StorageError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl SlotStore for Session {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get::<String>(key).await?)
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.insert(key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_value(key).await?;
        Ok(())
    }
}
