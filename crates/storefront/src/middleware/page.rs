//! Shared page chrome.
//!
//! Every full page renders the navbar (cart badge, sign-in links), the
//! footer chat widget, and any pending flash message. [`PageContext`]
//! gathers all of that from the session in one extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use grubzap_core::chat::{ChatTranscript, MOODS};
use tower_sessions::Session;

use super::csp::CspNonce;
use crate::error::AppError;
use crate::models::Flash;
use crate::storage;

/// Navbar, footer, and flash state for one rendered page.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Total quantity across cart lines.
    pub cart_count: u32,
    pub signed_in: bool,
    pub chat: ChatTranscript,
    /// Taken from the session; it will not show again.
    pub flash: Option<Flash>,
    pub nonce: String,
    /// Path and query of this page, posted back by the chat forms.
    pub current_path: String,
}

impl PageContext {
    /// Quick-reply moods for the chat widget.
    #[must_use]
    pub const fn moods(&self) -> &'static [&'static str] {
        &MOODS
    }

    /// Whether `path` is the page being rendered, for nav highlighting.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        let current = self
            .current_path
            .split('?')
            .next()
            .unwrap_or(&self.current_path);
        if path == "/" {
            current == "/"
        } else {
            current == path || current.starts_with(&format!("{path}/"))
        }
    }

    #[cfg(test)]
    fn anonymous(current_path: &str) -> Self {
        Self {
            cart_count: 0,
            signed_in: false,
            chat: ChatTranscript::default(),
            flash: None,
            nonce: String::new(),
            current_path: current_path.to_string(),
        }
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;
        let CspNonce(nonce) = CspNonce::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        let cart = storage::load_cart(&session).await?;

        Ok(Self {
            cart_count: cart.item_count(),
            signed_in: storage::has_token(&session).await?,
            chat: storage::load_chat(&session).await?,
            flash: storage::take_flash(&session).await?,
            nonce,
            current_path: parts
                .uri
                .path_and_query()
                .map_or_else(|| "/".to_string(), |pq| pq.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let page = PageContext::anonymous("/blog/3?ref=home");
        assert!(page.is_active("/blog"));
        assert!(!page.is_active("/"));
        assert!(!page.is_active("/blogger"));

        let home = PageContext::anonymous("/");
        assert!(home.is_active("/"));
        assert!(!home.is_active("/menu"));
    }
}
