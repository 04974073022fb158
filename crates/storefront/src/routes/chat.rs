//! Footer chat widget handlers.
//!
//! The widget is a form in the footer of every page. Each post updates the
//! transcript in the session and redirects back to the page it came from.

use axum::{Form, response::Response};
use grubzap_core::chat::{ChatTranscript, clamp_mood};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::routes::{ReturnTo, redirect_back};
use crate::storage;

/// Mood quick-reply form data.
#[derive(Debug, Deserialize)]
pub struct MoodForm {
    #[serde(default)]
    pub mood: String,
    pub return_to: Option<String>,
}

async fn update_chat(session: &Session, change: impl FnOnce(&mut ChatTranscript)) -> Result<()> {
    let mut chat = storage::load_chat(session).await?;
    change(&mut chat);
    storage::save_chat(session, &chat).await?;
    Ok(())
}

/// Record a mood and the bot's suggestion.
#[instrument(skip(session, form), fields(mood = tracing::field::Empty))]
pub async fn mood(session: Session, Form(form): Form<MoodForm>) -> Result<Response> {
    let mood = clamp_mood(&form.mood);
    tracing::Span::current().record("mood", mood);
    if !mood.is_empty() {
        update_chat(&session, |chat| chat.choose_mood(mood)).await?;
    }
    Ok(redirect_back(form.return_to.as_deref(), "/"))
}

/// Open the widget.
#[instrument(skip(session, form))]
pub async fn open(session: Session, Form(form): Form<ReturnTo>) -> Result<Response> {
    update_chat(&session, |chat| chat.open = true).await?;
    Ok(redirect_back(form.return_to.as_deref(), "/"))
}

/// Close the widget and reset the conversation.
#[instrument(skip(session, form))]
pub async fn close(session: Session, Form(form): Form<ReturnTo>) -> Result<Response> {
    update_chat(&session, ChatTranscript::close).await?;
    Ok(redirect_back(form.return_to.as_deref(), "/"))
}
