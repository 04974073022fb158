//! Integration tests for the GrubZap storefront.
//!
//! These tests talk to a running storefront over HTTP, so they are
//! `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p grubzap-storefront
//!
//! # Run integration tests against it
//! cargo test -p grubzap-integration-tests -- --ignored
//! ```
//!
//! Set `STOREFRONT_BASE_URL` to point at a storefront that is not on
//! `http://localhost:3000`.

use reqwest::{Client, redirect};

/// Default address of a locally running storefront.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Base URL for the storefront under test.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Build a client that keeps the session cookie and does not follow
/// redirects, so tests can assert on `Location` headers.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn visitor_client() -> reqwest::Result<Client> {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::none())
        .build()
}
