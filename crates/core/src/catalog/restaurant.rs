//! Restaurant listings.

use serde::{Deserialize, Serialize};

use crate::filter::SearchQuery;
use crate::types::RestaurantId;

/// A partner restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub rating: f32,
    pub review_count: u32,
    /// Human readable window, e.g. "20-30 min".
    pub delivery_time: String,
    /// Formatted fee, e.g. "$2.99".
    pub delivery_fee: String,
    pub location: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Restaurants whose name, cuisine, or location contains the query.
#[must_use]
pub fn filter_restaurants<'a>(
    restaurants: &'a [Restaurant],
    query: &SearchQuery,
) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|r| query.matches_any([r.name.as_str(), r.cuisine.as_str(), r.location.as_str()]))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn restaurant(id: i32, name: &str, cuisine: &str, location: &str) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(id),
            name: name.to_string(),
            image: String::new(),
            cuisine: cuisine.to_string(),
            rating: 4.5,
            review_count: 10,
            delivery_time: "20-30 min".to_string(),
            delivery_fee: "$2.99".to_string(),
            location: location.to_string(),
            phone: None,
            featured: false,
        }
    }

    #[test]
    fn test_filter_by_each_field() {
        let all = vec![
            restaurant(1, "Pizza Paradise", "Italian", "123 Main Street, Downtown"),
            restaurant(2, "Taco Town", "Mexican", "101 Maple Road, Southside"),
        ];

        let by_name = filter_restaurants(&all, &SearchQuery::new(Some("paradise")));
        assert_eq!(by_name.len(), 1);

        let by_cuisine = filter_restaurants(&all, &SearchQuery::new(Some("MEXICAN")));
        assert_eq!(by_cuisine.first().unwrap().name, "Taco Town");

        let by_location = filter_restaurants(&all, &SearchQuery::new(Some("downtown")));
        assert_eq!(by_location.first().unwrap().id, RestaurantId::new(1));

        assert!(filter_restaurants(&all, &SearchQuery::new(Some("sushi"))).is_empty());
        assert_eq!(filter_restaurants(&all, &SearchQuery::default()).len(), 2);
    }

    #[test]
    fn test_deserializes_api_shape() {
        let json = r#"{
            "id": 3,
            "name": "Sushi Supreme",
            "image": "sushi.jpg",
            "cuisine": "Japanese",
            "rating": 4.9,
            "reviewCount": 312,
            "deliveryTime": "25-35 min",
            "deliveryFee": "$3.99",
            "location": "789 Pine Street, Eastside",
            "featured": true
        }"#;

        let parsed: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.review_count, 312);
        assert!(parsed.featured);
        assert!(parsed.phone.is_none());
    }
}
