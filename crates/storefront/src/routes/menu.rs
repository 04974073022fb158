//! Menu route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use grubzap_core::catalog::{Location, MenuCategory, filter_menu};
use grubzap_core::filter::SearchQuery;
use grubzap_core::{LocationId, RestaurantId};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Menu query parameters.
///
/// All three arrive as raw strings from GET forms; blank or unparseable
/// values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub location: Option<String>,
    pub q: Option<String>,
    pub restaurant: Option<String>,
}

impl MenuQuery {
    fn location(&self) -> Option<LocationId> {
        self.location.as_deref()?.trim().parse().ok()
    }

    fn restaurant(&self) -> Option<RestaurantId> {
        self.restaurant.as_deref()?.trim().parse().ok()
    }
}

/// A delivery location in the selector.
#[derive(Debug, Clone)]
pub struct LocationOption {
    pub id: LocationId,
    pub name: String,
    pub selected: bool,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub page: PageContext,
    pub categories: Vec<MenuCategory>,
    pub locations: Vec<LocationOption>,
    /// Whether a location or search filter is active.
    pub filtered: bool,
    pub query: String,
    /// Name of the restaurant picked in the finder, if any.
    pub restaurant: Option<String>,
}

/// Display the menu, filtered by delivery location and search text.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
    page: PageContext,
) -> impl IntoResponse {
    let content = state.content();
    let location = query.location().filter(|id| content.location(*id).is_some());
    let search = SearchQuery::new(query.q.as_deref());

    let restaurant = match query.restaurant() {
        Some(id) => state
            .catalog()
            .restaurants()
            .await
            .ok()
            .and_then(|all| all.iter().find(|r| r.id == id).map(|r| r.name.clone())),
        None => None,
    };

    MenuTemplate {
        page,
        categories: filter_menu(&content.menu, location, &search),
        locations: content
            .locations
            .iter()
            .map(|l: &Location| LocationOption {
                id: l.id,
                name: l.name.clone(),
                selected: location == Some(l.id),
            })
            .collect(),
        filtered: location.is_some() || !search.is_blank(),
        query: query.q.unwrap_or_default(),
        restaurant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_query_ignores_blank_and_garbage() {
        let query = MenuQuery {
            location: Some(String::new()),
            q: None,
            restaurant: Some("abc".to_string()),
        };
        assert_eq!(query.location(), None);
        assert_eq!(query.restaurant(), None);

        let query = MenuQuery {
            location: Some(" 2 ".to_string()),
            ..MenuQuery::default()
        };
        assert_eq!(query.location(), Some(LocationId::new(2)));
    }
}
