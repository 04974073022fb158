//! Blog posts and the blog page filters.

use serde::{Deserialize, Serialize};

use crate::filter::SearchQuery;
use crate::types::PostId;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Post author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: Author,
    /// Display date, e.g. "May 14, 2025".
    pub date: String,
    /// Display reading time, e.g. "5 min read".
    pub read_time: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub featured: bool,
}

/// Category and search filters for the blog page.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    category: Option<String>,
    query: SearchQuery,
}

impl PostFilter {
    /// Build a filter. `None`, blank, and `"All"` categories do not filter.
    #[must_use]
    pub fn new(category: Option<&str>, query: Option<&str>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(ToString::to_string);

        Self {
            category,
            query: SearchQuery::new(query),
        }
    }

    /// The selected category, or `"All"`.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    /// Whether neither filter is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.query.is_blank()
    }

    /// Whether a post passes both filters.
    ///
    /// Category must match exactly; the query is matched against the title,
    /// the excerpt, and every tag.
    #[must_use]
    pub fn matches(&self, post: &BlogPost) -> bool {
        let category_ok = self.category.as_deref().is_none_or(|c| post.category == c);

        category_ok
            && self.query.matches_any(
                [post.title.as_str(), post.excerpt.as_str()]
                    .into_iter()
                    .chain(post.tags.iter().map(String::as_str)),
            )
    }

    /// Posts passing the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}

/// `"All"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for post in posts {
        if !out.contains(&post.category) {
            out.push(post.category.clone());
        }
    }
    out
}

/// Up to `limit` featured posts from an already filtered list.
#[must_use]
pub fn featured<'a>(posts: &[&'a BlogPost], limit: usize) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .copied()
        .filter(|post| post.featured)
        .take(limit)
        .collect()
}
