//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CatalogClient, CatalogError};
use crate::config::StorefrontConfig;
use crate::content::SiteContent;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration, the catalog client, and the static site content.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    content: SiteContent,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config.catalog)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create state around an existing catalog client.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: CatalogClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content: SiteContent::bundled(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the static site content.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.inner.content
    }
}
