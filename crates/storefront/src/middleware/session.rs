//! Session middleware configuration.
//!
//! Sessions live in process memory: they hold only the visitor's storage
//! slots, and losing them on restart is the same as a visitor clearing
//! their browser storage. The moka-backed store drops each record once
//! its expiry passes and caps the number of live sessions.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "grubzap_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Most sessions held at once; the least recently used are evicted first.
const MAX_SESSIONS: u64 = 100_000;

/// Create the in-memory session store.
#[must_use]
pub fn create_session_store() -> MokaStore {
    MokaStore::new(Some(MAX_SESSIONS))
}

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(create_session_store())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_https())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use tower_sessions::SessionStore;
    use tower_sessions::cookie::time::{Duration, OffsetDateTime};
    use tower_sessions::session::{Id, Record};

    use super::*;

    fn record(expires_in: Duration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::from([("token".to_string(), serde_json::json!("abc"))]),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_live_session_is_kept() {
        let store = create_session_store();
        let mut live = record(Duration::hours(1));
        store.create(&mut live).await.unwrap();

        let loaded = store.load(&live.id).await.unwrap();
        assert_eq!(loaded.map(|r| r.data), Some(live.data));
    }

    #[tokio::test]
    async fn test_expired_session_is_dropped() {
        let store = create_session_store();
        let mut stale = record(Duration::seconds(-1));
        store.create(&mut stale).await.unwrap();

        assert!(store.load(&stale.id).await.unwrap().is_none());
    }
}
