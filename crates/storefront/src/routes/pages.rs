//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use grubzap_core::catalog::TeamMember;
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// One of the values listed under "Our Mission".
#[derive(Debug, Clone)]
pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const VALUES: [Value; 3] = [
    Value {
        icon: "🏪",
        title: "Support Local",
        description: "We partner with local restaurants to help them reach more customers and grow their business.",
    },
    Value {
        icon: "⚡",
        title: "Fast Delivery",
        description: "Our optimized delivery network ensures your food arrives hot and fresh, every time.",
    },
    Value {
        icon: "🌱",
        title: "Sustainability",
        description: "We're committed to eco-friendly packaging and reducing our carbon footprint.",
    },
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    pub values: &'static [Value],
    pub team: Vec<TeamMember>,
}

/// Display the About page.
#[instrument(skip(state, page))]
pub async fn about(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    AboutTemplate {
        page,
        values: &VALUES,
        team: state.content().team.clone(),
    }
}
