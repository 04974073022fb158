//! Restaurant directory and finder route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use grubzap_core::catalog::{Restaurant, filter_restaurants};
use grubzap_core::filter::SearchQuery;
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Finder query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct FinderQuery {
    pub q: Option<String>,
}

/// Restaurant directory template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurants/index.html")]
pub struct DirectoryTemplate {
    pub page: PageContext,
    pub restaurants: Vec<Restaurant>,
}

/// Restaurant finder template.
#[derive(Template, WebTemplate)]
#[template(path = "restaurants/find.html")]
pub struct FinderTemplate {
    pub page: PageContext,
    pub restaurants: Vec<Restaurant>,
    pub query: String,
    /// The catalog could not be read.
    pub load_failed: bool,
}

/// Display the partner restaurant directory.
#[instrument(skip(state, page))]
pub async fn directory(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    DirectoryTemplate {
        page,
        restaurants: state.content().restaurants.clone(),
    }
}

/// Search restaurants by name, cuisine, or location.
#[instrument(skip(state, page))]
pub async fn finder(
    State(state): State<AppState>,
    Query(query): Query<FinderQuery>,
    page: PageContext,
) -> impl IntoResponse {
    let search = SearchQuery::new(query.q.as_deref());
    let query_text = query.q.unwrap_or_default();

    match state.catalog().restaurants().await {
        Ok(all) => FinderTemplate {
            page,
            restaurants: filter_restaurants(&all, &search)
                .into_iter()
                .cloned()
                .collect(),
            query: query_text,
            load_failed: false,
        },
        Err(e) => {
            tracing::error!(error = %e, "Restaurants unavailable");
            FinderTemplate {
                page,
                restaurants: Vec::new(),
                query: query_text,
                load_failed: true,
            }
        }
    }
}
