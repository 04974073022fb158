//! Catalog API client.
//!
//! Fetches restaurants and blog posts from the GrubZap catalog API with
//! `reqwest`, caching whatever was served for 5 minutes with `moka`.
//!
//! # Fallback
//!
//! | Outcome                           | Result                          |
//! |-----------------------------------|---------------------------------|
//! | no base URL configured            | bundled data                    |
//! | transport error or timeout        | bundled data, logged at warn    |
//! | non-success status                | bundled data, logged at warn    |
//! | success with an undecodable body  | [`CatalogError::Decode`]        |
//!
//! There is no retry or backoff. Errors are not cached, so the next request
//! asks the API again.

mod cache;
pub mod fallback;

use std::sync::Arc;
use std::time::Duration;

use grubzap_core::catalog::{BlogPost, Restaurant};
use moka::future::Cache;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::CatalogConfig;

use cache::{CacheKey, CacheValue};

/// How long a catalog response is reused.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors from the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// The API answered successfully but the body was not the expected JSON.
    #[error("Could not decode catalog response: {0}")]
    Decode(String),
}

/// Client for the catalog API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Option<String>,
    api_token: Option<SecretString>,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("grubzap-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config
                    .base_url
                    .as_ref()
                    .map(|url| url.as_str().trim_end_matches('/').to_string()),
                api_token: config.api_token.clone(),
                cache,
            }),
        })
    }

    /// A client that never touches the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn offline() -> Result<Self, CatalogError> {
        Self::new(&CatalogConfig::default())
    }

    /// All partner restaurants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the API sent an unreadable body.
    #[instrument(skip(self))]
    pub async fn restaurants(&self) -> Result<Arc<[Restaurant]>, CatalogError> {
        if let Some(CacheValue::Restaurants(list)) =
            self.inner.cache.get(&CacheKey::Restaurants).await
        {
            debug!("Cache hit for restaurants");
            return Ok(list);
        }

        let list: Arc<[Restaurant]> = self
            .fetch_or_fallback("restaurants", fallback::restaurants)
            .await?
            .into();
        self.inner
            .cache
            .insert(CacheKey::Restaurants, CacheValue::Restaurants(Arc::clone(&list)))
            .await;
        Ok(list)
    }

    /// All blog posts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the API sent an unreadable body.
    #[instrument(skip(self))]
    pub async fn blog_posts(&self) -> Result<Arc<[BlogPost]>, CatalogError> {
        if let Some(CacheValue::BlogPosts(posts)) = self.inner.cache.get(&CacheKey::BlogPosts).await
        {
            debug!("Cache hit for blog posts");
            return Ok(posts);
        }

        let posts: Arc<[BlogPost]> = self
            .fetch_or_fallback("blog", fallback::blog_posts)
            .await?
            .into();
        self.inner
            .cache
            .insert(CacheKey::BlogPosts, CacheValue::BlogPosts(Arc::clone(&posts)))
            .await;
        Ok(posts)
    }

    /// `GET {base}/{path}` decoded as a JSON array, or the bundled list.
    async fn fetch_or_fallback<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: fn() -> Vec<T>,
    ) -> Result<Vec<T>, CatalogError> {
        let Some(base) = self.inner.base_url.as_deref() else {
            debug!(path, "Catalog API disabled, using bundled data");
            return Ok(fallback());
        };
        let url = format!("{base}/{path}");

        let mut request = self
            .inner
            .client
            .get(&url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "Catalog API unreachable, using bundled data");
                return Ok(fallback());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Catalog API returned an error, using bundled data");
            return Ok(fallback());
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(%url, error = %e, "Catalog API response interrupted, using bundled data");
                return Ok(fallback());
            }
        };

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "Catalog API response could not be decoded");
            CatalogError::Decode(format!("{path}: {e}"))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use url::Url;

    use super::*;

    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    fn client_for(base_url: Url, token: Option<&str>) -> CatalogClient {
        CatalogClient::new(&CatalogConfig {
            base_url: Some(base_url),
            api_token: token.map(SecretString::from),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_offline_client_serves_bundled_data() {
        let client = CatalogClient::offline().unwrap();
        assert_eq!(client.restaurants().await.unwrap().len(), 6);
        assert_eq!(client.blog_posts().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_api_data_is_used_and_cached() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let router = Router::new().route(
            "/restaurants",
            get(move |headers: HeaderMap| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let authorized = headers
                        .get("authorization")
                        .is_some_and(|v| v == "Bearer gz_test_token");
                    if !authorized {
                        return (StatusCode::UNAUTHORIZED, String::new());
                    }
                    let one = fallback::restaurants().into_iter().take(1).collect::<Vec<_>>();
                    (StatusCode::OK, serde_json::to_string(&one).unwrap())
                }
            }),
        );
        let client = client_for(serve(router).await, Some("gz_test_token"));

        let first = client.restaurants().await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "Pizza Paradise");

        let second = client.restaurants().await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_error_status_falls_back() {
        let router = Router::new().route(
            "/blog",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(serve(router).await, None);

        let posts = client.blog_posts().await.unwrap();
        assert_eq!(posts.len(), fallback::blog_posts().len());
    }

    #[tokio::test]
    async fn test_unreachable_api_falls_back() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(Url::parse(&format!("http://{addr}")).unwrap(), None);
        assert_eq!(client.restaurants().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_an_error() {
        let router = Router::new().route("/blog", get(|| async { "<html>not json</html>" }));
        let client = client_for(serve(router).await, None);

        let err = client.blog_posts().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
