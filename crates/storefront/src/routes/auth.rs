//! Signup and logout route handlers.
//!
//! There are no real accounts. Signing up validates the form and stores a
//! fresh opaque [`SessionToken`]; logging out removes it. Passwords are
//! checked for length and confirmation, then dropped.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use grubzap_core::Email;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::{Flash, SessionToken};
use crate::routes::FieldErrors;
use crate::storage;

/// Minimum full name length, in characters.
const MIN_NAME_CHARS: usize = 2;

/// Minimum password length, in characters.
const MIN_PASSWORD_CHARS: usize = 6;

// =============================================================================
// Form Types
// =============================================================================

/// Signup form data.
///
/// Deliberately not `Debug`: it carries the password.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Checkbox; present only when ticked.
    pub terms: Option<String>,
}

impl SignupForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            errors.add("name", "Name must be at least 2 characters");
        }
        if Email::parse(self.email.trim()).is_err() {
            errors.add("email", "Please enter a valid email address");
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.add("password", "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match");
        }
        if self.terms.is_none() {
            errors.add("terms", "You must agree to the terms and conditions");
        }
        errors
    }

    fn without_passwords(mut self) -> Self {
        self.password.clear();
        self.confirm_password.clear();
        self
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub page: PageContext,
    pub form: SignupForm,
    pub errors: FieldErrors,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the signup page.
#[instrument(skip(page))]
pub async fn signup_page(page: PageContext) -> impl IntoResponse {
    SignupTemplate {
        page,
        form: SignupForm::default(),
        errors: FieldErrors::new(),
    }
}

/// Handle signup form submission.
///
/// Invalid submissions re-render the form with a 422 status and the
/// password fields emptied.
#[instrument(skip(session, page, form))]
pub async fn signup(
    session: Session,
    page: PageContext,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "Signup form rejected");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            SignupTemplate {
                page,
                form: form.without_passwords(),
                errors,
            },
        )
            .into_response());
    }

    tracing::info!(
        name = %form.name.trim(),
        email = %form.email.trim(),
        "Visitor signed up"
    );
    storage::store_token(&session, &SessionToken::generate()).await?;
    add_breadcrumb("auth", "Signed up", None);

    let flash = Flash::success("Account created successfully!").with_description("Welcome to GrubZap!");
    storage::set_flash(&session, &flash).await?;

    Ok(Redirect::to("/").into_response())
}

/// Handle logout.
///
/// Only the token goes; the cart and chat stay with the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Response> {
    storage::remove_token(&session).await?;
    add_breadcrumb("auth", "Logged out", None);

    storage::set_flash(&session, &Flash::info("You have been logged out")).await?;

    Ok(Redirect::to("/").into_response())
}
