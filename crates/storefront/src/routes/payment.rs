//! Checkout route handlers.
//!
//! Placing an order is simulated: after validation the handler waits for
//! the configured processing delay, deletes the cart slot, and sends the
//! visitor home with a confirmation. Card details are never stored or
//! logged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Flash;
use crate::routes::FieldErrors;
use crate::routes::cart::CartView;
use crate::state::AppState;
use crate::storage;

/// How the visitor pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

/// Delivery and payment form data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentForm {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub notes: String,
    pub method: PaymentMethod,
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub save_card: Option<String>,
}

impl PaymentForm {
    #[must_use]
    pub fn is_card(&self) -> bool {
        self.method == PaymentMethod::Card
    }

    #[must_use]
    pub fn is_cash(&self) -> bool {
        self.method == PaymentMethod::Cash
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("full_name", &self.full_name, "Full name is required");
        errors.require("phone", &self.phone, "Phone number is required");
        errors.require("address", &self.address, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("zip", &self.zip, "ZIP code is required");

        if self.is_card() {
            errors.require("card_name", &self.card_name, "Name on card is required");
            errors.require("card_number", &self.card_number, "Card number is required");
            errors.require("expiry", &self.expiry, "Expiry date is required");
            errors.require("cvv", &self.cvv, "CVV is required");
        }
        errors
    }

    /// Drop everything typed into the card fields before re-rendering.
    fn without_card_secrets(mut self) -> Self {
        self.card_number.clear();
        self.cvv.clear();
        self
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "payment.html")]
pub struct PaymentTemplate {
    pub page: PageContext,
    pub cart: CartView,
    pub form: PaymentForm,
    pub errors: FieldErrors,
}

/// Display the checkout form and order summary.
#[instrument(skip(session, page))]
pub async fn show(session: Session, page: PageContext) -> Result<impl IntoResponse> {
    let cart = storage::load_cart(&session).await?;
    Ok(PaymentTemplate {
        page,
        cart: CartView::from(&cart),
        form: PaymentForm::default(),
        errors: FieldErrors::new(),
    })
}

/// Place the order.
///
/// An empty cart redirects back to the checkout page. Invalid submissions
/// re-render the form with messages and a 422 status.
#[instrument(skip(state, session, page, form), fields(method = ?form.method))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<PaymentForm>,
) -> Result<Response> {
    let cart = storage::load_cart(&session).await?;
    if cart.is_empty() {
        let flash = Flash::error("Your cart is empty")
            .with_description("You can't proceed to checkout without any items in your cart.");
        storage::set_flash(&session, &flash).await?;
        return Ok(Redirect::to("/payment").into_response());
    }

    let errors = form.validate();
    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "Checkout form rejected");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            PaymentTemplate {
                page,
                cart: CartView::from(&cart),
                form: form.without_card_secrets(),
                errors,
            },
        )
            .into_response());
    }

    let delay = state.config().payment_processing_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let totals = cart.totals();
    storage::clear_cart(&session).await?;
    add_breadcrumb("checkout", "Placed order", None);
    tracing::info!(
        lines = cart.line_count(),
        items = cart.item_count(),
        total = %totals.total.round_dp(2),
        method = ?form.method,
        "Order placed"
    );

    let flash = Flash::success("Order successfully placed!").with_description("Your food is on the way.");
    storage::set_flash(&session, &flash).await?;

    Ok(Redirect::to("/").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery() -> PaymentForm {
        PaymentForm {
            full_name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            city: "Foodville".to_string(),
            zip: "90210".to_string(),
            ..PaymentForm::default()
        }
    }

    #[test]
    fn test_card_fields_required_only_for_card() {
        let cash = PaymentForm {
            method: PaymentMethod::Cash,
            ..delivery()
        };
        assert!(cash.validate().is_empty());

        let card = delivery();
        let errors = card.validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.has("card_number"));
        assert!(errors.has("cvv"));
    }

    #[test]
    fn test_delivery_fields_required() {
        let form = PaymentForm {
            method: PaymentMethod::Cash,
            ..PaymentForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("zip"), Some("ZIP code is required"));
    }

    #[test]
    fn test_card_secrets_are_dropped() {
        let form = PaymentForm {
            card_number: "4242 4242 4242 4242".to_string(),
            cvv: "123".to_string(),
            card_name: "Jane Doe".to_string(),
            ..delivery()
        }
        .without_card_secrets();
        assert!(form.card_number.is_empty());
        assert!(form.cvv.is_empty());
        assert_eq!(form.card_name, "Jane Doe");
    }
}
