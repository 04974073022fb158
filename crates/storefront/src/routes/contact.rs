//! Contact form route handlers.
//!
//! Messages are validated and logged. There is no mailbox behind the form.

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
use crate::models::Flash;
use crate::routes::FieldErrors;
use crate::storage;

/// Contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Please enter your name");
        if Email::parse(self.email.trim()).is_err() {
            errors.add("email", "Please enter a valid email address");
        }
        errors.require("subject", &self.subject, "Please enter a subject");
        errors.require("message", &self.message, "Please enter a message");
        errors
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub form: ContactForm,
    pub errors: FieldErrors,
}

/// Display the contact page.
#[instrument(skip(page))]
pub async fn show(page: PageContext) -> impl IntoResponse {
    ContactTemplate {
        page,
        form: ContactForm::default(),
        errors: FieldErrors::new(),
    }
}

/// Accept a contact message.
///
/// Invalid submissions re-render the form with messages and a 422 status.
#[instrument(skip(session, page, form), fields(subject = %form.subject))]
pub async fn submit(
    session: Session,
    page: PageContext,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "Contact form rejected");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate { page, form, errors },
        )
            .into_response());
    }

    tracing::info!(
        email = %form.email.trim(),
        subject = %form.subject.trim(),
        length = form.message.len(),
        "Contact message received"
    );
    add_breadcrumb("contact", "Sent contact message", None);

    let flash = Flash::success("Thanks for reaching out")
        .with_description("We'll get back to you as soon as possible.");
    storage::set_flash(&session, &flash).await?;

    Ok(Redirect::to("/contact").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contact_form() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.has("email"));
        assert!(errors.has("subject"));

        let form = ContactForm {
            email: "ada@example.com".to_string(),
            subject: "Catering".to_string(),
            ..form
        };
        assert!(form.validate().is_empty());
    }
}
