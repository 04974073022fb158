//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, one transaction per request)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CSP nonce (generate per-request nonce for inline scripts)
//! 5. Security headers (CSP, frame denial, etc.)
//! 6. Session layer (tower-sessions with in-memory store)
//!
//! Extractors that read the session ([`PageContext`], [`RequireToken`]) rely
//! on the session layer having run.

pub mod auth;
pub mod csp;
pub mod page;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{AuthRejection, RequireToken};
pub use csp::{CspNonce, csp_nonce_middleware};
pub use page::PageContext;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
