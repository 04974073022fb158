//! Blog route handlers.
//!
//! Posts come from the catalog client. The listing page filters them by
//! category and search text; an unreadable catalog response shows an error
//! state with a retry link instead of failing the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use grubzap_core::PostId;
use grubzap_core::catalog::{BlogPost, PostFilter, categories, featured};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Number of featured posts shown above the listing.
const FEATURED_POSTS: usize = 2;

/// Number of other posts shown under a post.
const RECENT_POSTS: usize = 3;

/// Blog listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// A category filter link.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

fn category_options(posts: &[BlogPost], selected: &str) -> Vec<CategoryOption> {
    categories(posts)
        .into_iter()
        .map(|name| CategoryOption {
            selected: name == selected,
            name,
        })
        .collect()
}

/// Blog index page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub page: PageContext,
    pub posts: Vec<BlogPost>,
    pub featured: Vec<BlogPost>,
    pub categories: Vec<CategoryOption>,
    pub query: String,
    /// Whether a category or search filter is active.
    pub filtered: bool,
    /// The catalog could not be read.
    pub load_failed: bool,
}

/// Blog post detail template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub page: PageContext,
    pub post: BlogPost,
    pub recent_posts: Vec<BlogPost>,
}

/// Display the blog listing.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
    page: PageContext,
) -> impl IntoResponse {
    let filter = PostFilter::new(query.category.as_deref(), query.q.as_deref());
    let query_text = query.q.unwrap_or_default();

    let posts = match state.catalog().blog_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "Blog posts unavailable");
            return BlogIndexTemplate {
                page,
                posts: Vec::new(),
                featured: Vec::new(),
                categories: Vec::new(),
                query: query_text,
                filtered: !filter.is_empty(),
                load_failed: true,
            };
        }
    };

    let matching = filter.apply(&posts);
    BlogIndexTemplate {
        featured: featured(&matching, FEATURED_POSTS)
            .into_iter()
            .cloned()
            .collect(),
        posts: matching.into_iter().cloned().collect(),
        categories: category_options(&posts, filter.category()),
        query: query_text,
        filtered: !filter.is_empty(),
        load_failed: false,
        page,
    }
}

/// Display a single blog post.
///
/// # Errors
///
/// Returns 404 if no post has this id, and 502 if the catalog could not
/// be read.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    page: PageContext,
) -> Result<impl IntoResponse> {
    let not_found = || AppError::NotFound(format!("blog post {id}"));
    let post_id: PostId = id.parse().map_err(|_| not_found())?;

    let posts = state.catalog().blog_posts().await?;
    let post = posts
        .iter()
        .find(|p| p.id == post_id)
        .cloned()
        .ok_or_else(not_found)?;

    let recent_posts = posts
        .iter()
        .filter(|p| p.id != post_id)
        .take(RECENT_POSTS)
        .cloned()
        .collect();

    Ok(BlogShowTemplate {
        page,
        post,
        recent_posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback;

    #[test]
    fn test_category_options_mark_selection() {
        let posts = fallback::blog_posts();
        let options = category_options(&posts, "All");
        assert_eq!(options.first().map(|o| o.name.as_str()), Some("All"));
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }
}
