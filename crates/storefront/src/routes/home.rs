//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use grubzap_core::catalog::{FoodCategory, HowItWorksStep, Restaurant};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Number of restaurants in the "Popular near you" strip.
const POPULAR_RESTAURANTS: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub categories: Vec<FoodCategory>,
    pub restaurants: Vec<Restaurant>,
    pub steps: Vec<HowItWorksStep>,
}

/// Display the home page.
#[instrument(skip(state, page))]
pub async fn home(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    let content = state.content();
    HomeTemplate {
        page,
        categories: content.food_categories.clone(),
        restaurants: content
            .restaurants
            .iter()
            .take(POPULAR_RESTAURANTS)
            .cloned()
            .collect(),
        steps: content.steps.clone(),
    }
}
