//! Menu categories, items, and delivery locations.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::filter::SearchQuery;
use crate::types::{LocationId, MenuCategoryId, MenuItemId};

/// A delivery location an item can be ordered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    /// Formatted price, e.g. `"$10.99"`.
    pub price: String,
    pub description: String,
    pub image: String,
    /// Badge text such as "Bestseller"; `None` shows no badge.
    #[serde(default)]
    pub tag: Option<String>,
    /// Locations this item is available in.
    pub locations: Vec<LocationId>,
}

impl MenuItem {
    /// Whether the item can be ordered in `location`.
    #[must_use]
    pub fn available_in(&self, location: LocationId) -> bool {
        self.locations.contains(&location)
    }

    /// A fresh cart line (quantity 1) for this item.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, &self.name, &self.price, &self.image)
    }
}

/// A titled group of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: MenuCategoryId,
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Filter the menu by location and search text.
///
/// An item is kept when it is available in `location` (or no location is
/// selected) and its name or description contains the query. Categories
/// with no remaining items are dropped; order is preserved.
#[must_use]
pub fn filter_menu(
    categories: &[MenuCategory],
    location: Option<LocationId>,
    query: &SearchQuery,
) -> Vec<MenuCategory> {
    categories
        .iter()
        .filter_map(|category| {
            let items: Vec<MenuItem> = category
                .items
                .iter()
                .filter(|item| location.is_none_or(|loc| item.available_in(loc)))
                .filter(|item| query.matches_any([item.name.as_str(), item.description.as_str()]))
                .cloned()
                .collect();

            (!items.is_empty()).then(|| MenuCategory {
                id: category.id,
                name: category.name.clone(),
                items,
            })
        })
        .collect()
}

/// Find a menu item by id across all categories.
#[must_use]
pub fn find_item(categories: &[MenuCategory], id: MenuItemId) -> Option<&MenuItem> {
    categories
        .iter()
        .flat_map(|category| category.items.iter())
        .find(|item| item.id == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str, description: &str, locations: &[i32]) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            price: "$9.99".to_string(),
            description: description.to_string(),
            image: String::new(),
            tag: None,
            locations: locations.iter().copied().map(LocationId::new).collect(),
        }
    }

    fn menu() -> Vec<MenuCategory> {
        vec![
            MenuCategory {
                id: MenuCategoryId::new(1),
                name: "Popular Items".to_string(),
                items: vec![
                    item(1, "Spicy Chicken Burger", "Juicy chicken patty", &[1, 2]),
                    item(2, "Veggie Supreme Pizza", "Bell peppers and olives", &[2]),
                ],
            },
            MenuCategory {
                id: MenuCategoryId::new(2),
                name: "Sides".to_string(),
                items: vec![item(4, "Garlic Bread", "Crispy bread with garlic butter", &[1])],
            },
        ]
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let filtered = filter_menu(&menu(), None, &SearchQuery::default());
        assert_eq!(filtered, menu());
    }

    #[test]
    fn test_location_filter_keeps_only_members() {
        let location = LocationId::new(2);
        let filtered = filter_menu(&menu(), Some(location), &SearchQuery::default());

        assert_eq!(filtered.len(), 1);
        assert!(
            filtered
                .iter()
                .flat_map(|c| &c.items)
                .all(|i| i.locations.contains(&location))
        );
        assert_eq!(filtered[0].items.len(), 2);
    }

    #[test]
    fn test_query_matches_description_case_insensitively() {
        let filtered = filter_menu(&menu(), None, &SearchQuery::new(Some("GARLIC")));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sides");
    }

    #[test]
    fn test_location_and_query_combine() {
        let filtered = filter_menu(
            &menu(),
            Some(LocationId::new(1)),
            &SearchQuery::new(Some("pizza")),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_find_item_and_cart_line() {
        let categories = menu();
        let found = find_item(&categories, MenuItemId::new(4)).unwrap();
        let line = found.to_cart_item();

        assert_eq!(line.name, "Garlic Bread");
        assert_eq!(line.quantity.get(), 1);
        assert!(find_item(&categories, MenuItemId::new(99)).is_none());
    }
}
