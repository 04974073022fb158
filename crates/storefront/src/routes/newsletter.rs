//! Newsletter subscription route handler.
//!
//! The footer form posts here. Addresses are validated and logged; there is
//! no mailing list service behind it.

use axum::{Form, response::Response};
use grubzap_core::Email;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::Flash;
use crate::routes::redirect_back;
use crate::storage;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
    pub return_to: Option<String>,
}

/// Subscribe to the newsletter.
#[instrument(skip(session, form))]
pub async fn subscribe(session: Session, Form(form): Form<SubscribeForm>) -> Result<Response> {
    let flash = match Email::parse(form.email.trim()) {
        Ok(email) => {
            tracing::info!(domain = %email.domain(), "Newsletter subscription");
            Flash::success("Subscribed!")
                .with_description(format!("We'll send our best deals to {email}."))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Newsletter address rejected");
            Flash::error("Please enter a valid email address")
        }
    };
    storage::set_flash(&session, &flash).await?;

    Ok(redirect_back(form.return_to.as_deref(), "/"))
}
