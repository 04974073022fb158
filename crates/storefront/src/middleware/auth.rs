//! Sign-in gate.
//!
//! The storefront has no real accounts: a visitor counts as signed in
//! while their session holds a token (see [`crate::models::SessionToken`]).

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::Flash;
use crate::storage::{self, StorageError};

/// Extractor that requires a session token.
///
/// Without one, it queues a "Please log in" flash and redirects to the
/// signup page.
///
/// ```rust,ignore
/// async fn profile(_: RequireToken, page: PageContext) -> impl IntoResponse { ... }
/// ```
pub struct RequireToken;

/// Why [`RequireToken`] rejected a request.
#[derive(Debug)]
pub enum AuthRejection {
    /// No token; send the visitor to sign up.
    RedirectToSignup,
    /// The session layer is missing or the session store failed.
    SessionUnavailable,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToSignup => Redirect::to("/signup").into_response(),
            Self::SessionUnavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl From<StorageError> for AuthRejection {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Session unavailable while checking sign-in");
        Self::SessionUnavailable
    }
}

impl<S> FromRequestParts<S> for RequireToken
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AuthRejection::SessionUnavailable)?;

        if storage::has_token(&session).await? {
            return Ok(Self);
        }

        let flash = Flash::error("Not logged in").with_description("Please log in to view your profile");
        storage::set_flash(&session, &flash).await?;
        Err(AuthRejection::RedirectToSignup)
    }
}
