//! Cache types for catalog API responses.

use std::sync::Arc;

use grubzap_core::catalog::{BlogPost, Restaurant};

/// Cache key, one per endpoint.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Restaurants,
    BlogPosts,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Restaurants(Arc<[Restaurant]>),
    BlogPosts(Arc<[BlogPost]>),
}
