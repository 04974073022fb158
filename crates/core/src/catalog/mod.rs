//! Catalog records and the filters the listing pages apply to them.
//!
//! The records mirror what the (placeholder) catalog API returns, so the
//! wire shape uses camelCase field names.

pub mod blog;
pub mod marketing;
pub mod menu;
pub mod profile;
pub mod restaurant;

pub use blog::{Author, BlogPost, PostFilter, categories, featured};
pub use marketing::{FoodCategory, HowItWorksStep, TeamMember};
pub use menu::{Location, MenuCategory, MenuItem, filter_menu, find_item};
pub use profile::{Address, Order, OrderLine, PaymentMethod, UserProfile};
pub use restaurant::{Restaurant, filter_restaurants};
