//! Profile route handlers.
//!
//! Both handlers sit behind [`RequireToken`]. The profile itself is the
//! bundled demo profile with any saved edits laid over it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use grubzap_core::catalog::{Order, UserProfile};
use grubzap_core::{Email, OrderStatus};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{PageContext, RequireToken};
use crate::models::{Flash, ProfileDetails};
use crate::routes::{FieldErrors, usd};
use crate::state::AppState;
use crate::storage;

/// Profile page tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Profile,
    Orders,
    Settings,
}

impl Tab {
    /// Parse a `?tab=` value; anything unknown shows the profile tab.
    fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("orders") => Self::Orders,
            Some("settings") => Self::Settings,
            _ => Self::Profile,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    pub tab: Option<String>,
}

/// Order line display data.
#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

/// Past order display data.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub restaurant: String,
    pub items: Vec<OrderLineView>,
    pub total: String,
    pub status: OrderStatus,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            date: order.date.clone(),
            restaurant: order.restaurant.clone(),
            items: order
                .items
                .iter()
                .map(|line| OrderLineView {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: usd(line.price),
                })
                .collect(),
            total: usd(order.total),
            status: order.status,
        }
    }
}

/// Settings tab form data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileForm {
    fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.to_string(),
            phone: profile.phone.clone(),
        }
    }

    fn validate(&self) -> std::result::Result<ProfileDetails, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().chars().count() < 2 {
            errors.add("name", "Name must be at least 2 characters");
        }
        let email = Email::parse(self.email.trim());
        if email.is_err() {
            errors.add("email", "Please enter a valid email address");
        }
        errors.require("phone", &self.phone, "Phone number is required");

        match email {
            Ok(email) if errors.is_empty() => Ok(ProfileDetails {
                name: self.name.trim().to_string(),
                email,
                phone: self.phone.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub page: PageContext,
    pub tab: Tab,
    pub profile: UserProfile,
    pub orders: Vec<OrderView>,
    pub form: ProfileForm,
    pub errors: FieldErrors,
}

impl ProfileTemplate {
    fn on_tab(&self, tab: &str) -> bool {
        Tab::from_query(Some(tab)) == self.tab
    }
}

/// The bundled profile with the visitor's saved edits applied.
async fn current_profile(state: &AppState, session: &Session) -> Result<UserProfile> {
    let profile = state.content().profile.clone();
    Ok(match storage::load_profile(session).await? {
        Some(details) => details.apply_to(profile),
        None => profile,
    })
}

fn orders(state: &AppState) -> Vec<OrderView> {
    state.content().orders.iter().map(OrderView::from).collect()
}

/// Display the profile page.
#[instrument(skip(state, session, page))]
pub async fn show(
    _: RequireToken,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProfileQuery>,
    page: PageContext,
) -> Result<impl IntoResponse> {
    let profile = current_profile(&state, &session).await?;
    Ok(ProfileTemplate {
        page,
        tab: Tab::from_query(query.tab.as_deref()),
        form: ProfileForm::from_profile(&profile),
        orders: orders(&state),
        profile,
        errors: FieldErrors::new(),
    })
}

/// Save name, email, and phone from the settings tab.
#[instrument(skip(state, session, page, form))]
pub async fn update(
    _: RequireToken,
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<ProfileForm>,
) -> Result<Response> {
    let details = match form.validate() {
        Ok(details) => details,
        Err(errors) => {
            let profile = current_profile(&state, &session).await?;
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                ProfileTemplate {
                    page,
                    tab: Tab::Settings,
                    profile,
                    orders: orders(&state),
                    form,
                    errors,
                },
            )
                .into_response());
        }
    };

    storage::save_profile(&session, &details).await?;
    add_breadcrumb("profile", "Updated profile", None);
    tracing::info!(domain = %details.email.domain(), "Profile updated");

    let flash = Flash::success("Profile updated")
        .with_description("Your profile information has been updated successfully");
    storage::set_flash(&session, &flash).await?;

    Ok(Redirect::to("/profile?tab=settings").into_response())
}
