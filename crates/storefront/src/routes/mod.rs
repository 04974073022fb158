//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - About page
//! GET  /contact                - Contact form
//! POST /contact                - Submit contact form
//! POST /newsletter             - Newsletter signup
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check
//!
//! # Browsing
//! GET  /menu                   - Menu (?location=, ?q=, ?restaurant=)
//! GET  /restaurants            - Restaurant directory
//! GET  /find                   - Restaurant finder (?q=)
//! GET  /blog                   - Blog listing (?q=, ?category=)
//! GET  /blog/{id}              - Blog post
//!
//! # Cart (form posts, 303 back to the page that posted)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a menu item
//! POST /cart/increment         - Quantity + 1
//! POST /cart/decrement         - Quantity - 1 (no-op at 1)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart badge (fragment)
//!
//! # Checkout
//! GET  /payment                - Delivery and payment form
//! POST /payment                - Place the (mock) order
//!
//! # Visitor
//! GET  /signup                 - Signup form
//! POST /signup                 - Create the (mock) account
//! POST /logout                 - Drop the session token
//! GET  /profile                - Profile (?tab=profile|orders|settings), requires token
//! POST /profile                - Save profile details, requires token
//!
//! # Chat widget
//! POST /chat/mood              - Send a mood, get a suggestion
//! POST /chat/open              - Open the widget
//! POST /chat/close             - Close and reset the widget
//! ```

pub mod auth;
pub mod blog;
pub mod cart;
pub mod chat;
pub mod contact;
pub mod home;
pub mod menu;
pub mod newsletter;
pub mod pages;
pub mod payment;
pub mod profile;
pub mod restaurants;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use grubzap_core::Price;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the blog routes router.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::index))
        .route("/{id}", get(blog::show))
}

/// Create the chat widget routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/mood", post(chat::mood))
        .route("/open", post(chat::open))
        .route("/close", post(chat::close))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Marketing
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/newsletter", post(newsletter::subscribe))
        // Browsing
        .route("/menu", get(menu::index))
        .route("/restaurants", get(restaurants::directory))
        .route("/find", get(restaurants::finder))
        .nest("/blog", blog_routes())
        // Cart and checkout
        .nest("/cart", cart_routes())
        .route("/payment", get(payment::show).post(payment::submit))
        // Visitor
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/profile", get(profile::show).post(profile::update))
        // Footer chat
        .nest("/chat", chat_routes())
        // Health
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 when the catalog cannot be served, which only happens when
/// the catalog API answers with a body we cannot decode.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.catalog().restaurants().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Format an amount as `"$12.34"`.
#[must_use]
pub fn usd(amount: Decimal) -> String {
    Price::new(amount).display()
}

/// Accept only local absolute paths, so posted `return_to` values cannot
/// redirect off-site.
fn safe_return_path(candidate: Option<&str>) -> Option<&str> {
    candidate.filter(|path| {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path.contains('\\')
            && !path.chars().any(char::is_control)
    })
}

/// 303 back to the posting page, or to `fallback`.
#[must_use]
pub fn redirect_back(return_to: Option<&str>, fallback: &str) -> Response {
    Redirect::to(safe_return_path(return_to).unwrap_or(fallback)).into_response()
}

/// The hidden `return_to` field carried by forms that post and come back.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    pub return_to: Option<String>,
}

/// Per-field validation messages for a submitted form.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a message for `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// Record `message` when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// The first message for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}


#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/menu?q=pizza")), Some("/menu?q=pizza"));
        assert_eq!(safe_return_path(Some("//evil.example")), None);
        assert_eq!(safe_return_path(Some("https://evil.example")), None);
        assert_eq!(safe_return_path(Some("/\\evil.example")), None);
        assert_eq!(safe_return_path(None), None);
    }

    #[test]
    fn test_usd_rounds_half_away_from_zero() {
        assert_eq!(usd(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::new();
        errors.require("city", "  ", "City is required");
        errors.require("zip", "10001", "ZIP code is required");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("city"), Some("City is required"));
        assert!(!errors.has("zip"));
    }
}
