//! Static site content.
//!
//! Everything the storefront renders that does not come from the catalog
//! API: the menu and its delivery locations, the home page tiles, the team,
//! and the demo visitor's profile and order history. Built once at startup
//! and shared through [`crate::state::AppState`].

use grubzap_core::catalog::{
    Address, FoodCategory, HowItWorksStep, Location, MenuCategory, MenuItem, Order, OrderLine,
    PaymentMethod, Restaurant, TeamMember, UserProfile,
};
use grubzap_core::{
    AddressId, Email, FoodCategoryId, LocationId, MenuCategoryId, MenuItemId, OrderStatus,
    PaymentMethodId, TeamMemberId,
};
use rust_decimal::Decimal;

use crate::catalog::fallback;

/// All static content.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub locations: Vec<Location>,
    pub menu: Vec<MenuCategory>,
    pub restaurants: Vec<Restaurant>,
    pub food_categories: Vec<FoodCategory>,
    pub steps: Vec<HowItWorksStep>,
    pub team: Vec<TeamMember>,
    pub profile: UserProfile,
    pub orders: Vec<Order>,
}

impl SiteContent {
    /// The content shipped with the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            locations: locations(),
            menu: menu(),
            restaurants: fallback::restaurants(),
            food_categories: food_categories(),
            steps: steps(),
            team: team(),
            profile: profile(),
            orders: orders(),
        }
    }

    /// Look up a delivery location by id.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}")
}

fn locations() -> Vec<Location> {
    ["Downtown", "Westside", "Eastside", "Southside"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Location {
            id: LocationId::new(id),
            name: name.to_string(),
        })
        .collect()
}

fn item(
    id: i32,
    name: &str,
    price: &str,
    description: &str,
    photo: &str,
    tag: Option<&str>,
    locations: &[i32],
) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image: unsplash(photo),
        tag: tag.map(ToString::to_string),
        locations: locations.iter().copied().map(LocationId::new).collect(),
    }
}

fn menu() -> Vec<MenuCategory> {
    vec![
        MenuCategory {
            id: MenuCategoryId::new(1),
            name: "Popular Items".to_string(),
            items: vec![
                item(
                    1,
                    "Spicy Chicken Burger",
                    "$10.99",
                    "Juicy chicken patty with spicy sauce and fresh vegetables",
                    "photo-1568901346375-23c9450c58cd",
                    Some("Bestseller"),
                    &[1, 2, 3],
                ),
                item(
                    2,
                    "Veggie Supreme Pizza",
                    "$14.99",
                    "Loaded with bell peppers, mushrooms, olives, and onions",
                    "photo-1513104890138-7c749659a591",
                    Some("Vegetarian"),
                    &[1, 3, 4],
                ),
                item(
                    3,
                    "Classic Beef Burger",
                    "$11.99",
                    "Juicy beef patty with cheese, lettuce, and special sauce",
                    "photo-1571091718767-18b5b1457add",
                    None,
                    &[2, 4],
                ),
            ],
        },
        MenuCategory {
            id: MenuCategoryId::new(2),
            name: "Sides & Starters".to_string(),
            items: vec![
                item(
                    4,
                    "Garlic Bread",
                    "$4.99",
                    "Crispy bread topped with garlic butter and herbs",
                    "photo-1619535860434-da73a35c3763",
                    None,
                    &[1, 2, 3, 4],
                ),
                item(
                    5,
                    "Loaded Nachos",
                    "$7.99",
                    "Crispy tortilla chips with cheese, jalapeños, and salsa",
                    "photo-1582169296194-e4d644c48063",
                    Some("Shareable"),
                    &[2, 4],
                ),
                item(
                    6,
                    "Onion Rings",
                    "$5.99",
                    "Crispy, golden-brown onion rings with dipping sauce",
                    "photo-1639024471283-03518883512d",
                    None,
                    &[1, 3],
                ),
            ],
        },
        MenuCategory {
            id: MenuCategoryId::new(3),
            name: "Drinks & Desserts".to_string(),
            items: vec![
                item(
                    7,
                    "Chocolate Cake",
                    "$6.49",
                    "Rich layered chocolate cake with ganache frosting",
                    "photo-1578985545062-69928b1d9587",
                    Some("Sweet Treat"),
                    &[1, 2],
                ),
                item(
                    8,
                    "Berry Smoothie",
                    "$5.49",
                    "Blended strawberries, blueberries, and banana with yogurt",
                    "photo-1553530666-ba11a7da3888",
                    None,
                    &[1, 3, 4],
                ),
                item(
                    9,
                    "Iced Coffee",
                    "$3.99",
                    "Cold brew over ice with a splash of cream",
                    "photo-1461023058943-07fcbe16d735",
                    None,
                    &[1, 2, 3, 4],
                ),
            ],
        },
    ]
}

fn food_categories() -> Vec<FoodCategory> {
    [
        ("Pizza", "🍕", "red"),
        ("Burgers", "🍔", "amber"),
        ("Sushi", "🍣", "green"),
        ("Tacos", "🌮", "yellow"),
        ("Pasta", "🍝", "orange"),
        ("Salad", "🥗", "emerald"),
        ("Dessert", "🧁", "pink"),
        ("Drinks", "🥤", "blue"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, emoji, tone), id)| FoodCategory {
        id: FoodCategoryId::new(id),
        name: name.to_string(),
        emoji: emoji.to_string(),
        tone: tone.to_string(),
    })
    .collect()
}

fn steps() -> Vec<HowItWorksStep> {
    [
        (
            "📱",
            "Order with ease",
            "Browse restaurants and dishes, add to cart, and checkout with a few taps.",
        ),
        (
            "👨‍🍳",
            "Food prepared",
            "Restaurants receive your order and begin preparing your delicious meal.",
        ),
        (
            "🚚",
            "Fast delivery",
            "Our delivery partners bring your food right to your doorstep.",
        ),
        (
            "😋",
            "Enjoy your food",
            "Receive your food hot and fresh, ready to enjoy immediately.",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, description), number)| HowItWorksStep {
        number,
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn team() -> Vec<TeamMember> {
    [
        (
            "Sarah Johnson",
            "Founder & CEO",
            "photo-1494790108377-be9c29b29330",
            "Sarah founded GrubZap in 2020 with a mission to make food delivery more accessible and efficient.",
        ),
        (
            "Michael Chen",
            "CTO",
            "photo-1507003211169-0a1dd7228f2d",
            "Michael leads our tech team and has developed the innovative delivery algorithm that powers GrubZap.",
        ),
        (
            "Priya Patel",
            "Head of Operations",
            "photo-1573496359142-b8d87734a5a2",
            "Priya ensures that GrubZap operations run smoothly and efficiently across all our service areas.",
        ),
        (
            "David Wilson",
            "Marketing Director",
            "photo-1500648767791-00dcc994a43e",
            "David crafts our brand strategy and handles all marketing initiatives to grow the GrubZap community.",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, role, photo, description), id)| TeamMember {
        id: TeamMemberId::new(id),
        name: name.to_string(),
        role: role.to_string(),
        image: unsplash(photo),
        description: description.to_string(),
    })
    .collect()
}

#[allow(clippy::unwrap_used)] // literal, covered by test_bundled_profile_email
fn profile() -> UserProfile {
    UserProfile {
        id: "user123".to_string(),
        name: "John Doe".to_string(),
        email: Email::parse("john.doe@example.com").unwrap(),
        phone: "+1 (555) 123-4567".to_string(),
        avatar: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
        joined: "January 2023".to_string(),
        addresses: vec![
            Address {
                id: AddressId::new(1),
                kind: "Home".to_string(),
                address: "123 Main Street, Apt 4B, New York, NY 10001".to_string(),
                is_default: true,
            },
            Address {
                id: AddressId::new(2),
                kind: "Work".to_string(),
                address: "456 Business Avenue, Suite 200, New York, NY 10002".to_string(),
                is_default: false,
            },
        ],
        payment_methods: vec![
            PaymentMethod {
                id: PaymentMethodId::new(1),
                kind: "Visa".to_string(),
                last4: "4242".to_string(),
                expiry: "05/2026".to_string(),
                is_default: true,
            },
            PaymentMethod {
                id: PaymentMethodId::new(2),
                kind: "Mastercard".to_string(),
                last4: "8888".to_string(),
                expiry: "09/2025".to_string(),
                is_default: false,
            },
        ],
    }
}

fn line(name: &str, quantity: u32, cents: i64) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        quantity,
        price: Decimal::new(cents, 2),
    }
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-9876".to_string(),
            date: "May 12, 2025".to_string(),
            restaurant: "Pizza Paradise".to_string(),
            items: vec![
                line("Pepperoni Pizza", 1, 1499),
                line("Garlic Bread", 1, 499),
                line("Soda", 2, 199),
            ],
            total: Decimal::new(2396, 2),
            status: OrderStatus::Delivered,
        },
        Order {
            id: "ORD-9875".to_string(),
            date: "May 8, 2025".to_string(),
            restaurant: "Burger Bliss".to_string(),
            items: vec![
                line("Cheeseburger", 2, 899),
                line("French Fries", 1, 399),
                line("Chocolate Shake", 1, 499),
            ],
            total: Decimal::new(2696, 2),
            status: OrderStatus::Processing,
        },
        Order {
            id: "ORD-9874".to_string(),
            date: "May 2, 2025".to_string(),
            restaurant: "Sushi Supreme".to_string(),
            items: vec![
                line("California Roll", 1, 799),
                line("Rainbow Roll", 1, 1299),
                line("Miso Soup", 2, 299),
            ],
            total: Decimal::new(2696, 2),
            status: OrderStatus::Delivered,
        },
        Order {
            id: "ORD-9873".to_string(),
            date: "April 25, 2025".to_string(),
            restaurant: "Taco Town".to_string(),
            items: vec![
                line("Beef Tacos", 3, 399),
                line("Guacamole", 1, 299),
                line("Horchata", 1, 299),
            ],
            total: Decimal::new(1795, 2),
            status: OrderStatus::Cancelled,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use grubzap_core::catalog::find_item;

    use super::*;

    #[test]
    fn test_bundled_profile_email() {
        assert_eq!(profile().email.as_str(), "john.doe@example.com");
    }

    #[test]
    fn test_menu_item_ids_are_unique() {
        let content = SiteContent::bundled();
        let ids: HashSet<_> = content
            .menu
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .collect();
        assert_eq!(ids.len(), 9);
        assert!(find_item(&content.menu, MenuItemId::new(4)).is_some());
    }

    #[test]
    fn test_every_item_location_exists() {
        let content = SiteContent::bundled();
        for category in &content.menu {
            for item in &category.items {
                assert!(!item.locations.is_empty(), "{} has no location", item.name);
                for location in &item.locations {
                    assert!(content.location(*location).is_some());
                }
            }
        }
    }
}
