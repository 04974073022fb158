//! Bundled catalog data.
//!
//! Served when the catalog API is disabled, unreachable, or answers with a
//! non-success status.

use grubzap_core::catalog::{Author, BlogPost, Restaurant};
use grubzap_core::{PostId, RestaurantId};

const UNSPLASH: &str = "https://images.unsplash.com";

fn unsplash(photo: &str) -> String {
    format!("{UNSPLASH}/{photo}")
}

fn portrait(path: &str) -> String {
    format!("https://randomuser.me/api/portraits/{path}.jpg")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Partner restaurants.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: RestaurantId::new(1),
            name: "Pizza Paradise".to_string(),
            image: unsplash("photo-1513104890138-7c749659a591"),
            cuisine: "Italian".to_string(),
            rating: 4.8,
            review_count: 243,
            delivery_time: "20-30 min".to_string(),
            delivery_fee: "$2.99".to_string(),
            location: "123 Main Street, Downtown".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            featured: true,
        },
        Restaurant {
            id: RestaurantId::new(2),
            name: "Burger Bliss".to_string(),
            image: unsplash("photo-1568901346375-23c9450c58cd"),
            cuisine: "American".to_string(),
            rating: 4.5,
            review_count: 187,
            delivery_time: "15-25 min".to_string(),
            delivery_fee: "$1.99".to_string(),
            location: "456 Oak Avenue, Westside".to_string(),
            phone: Some("(555) 234-5678".to_string()),
            featured: false,
        },
        Restaurant {
            id: RestaurantId::new(3),
            name: "Sushi Supreme".to_string(),
            image: unsplash("photo-1579871494447-9811cf80d66c"),
            cuisine: "Japanese".to_string(),
            rating: 4.9,
            review_count: 312,
            delivery_time: "25-35 min".to_string(),
            delivery_fee: "$3.99".to_string(),
            location: "789 Pine Street, Eastside".to_string(),
            phone: Some("(555) 345-6789".to_string()),
            featured: true,
        },
        Restaurant {
            id: RestaurantId::new(4),
            name: "Taco Town".to_string(),
            image: unsplash("photo-1565299585323-38d6b0865b47"),
            cuisine: "Mexican".to_string(),
            rating: 4.7,
            review_count: 156,
            delivery_time: "15-25 min".to_string(),
            delivery_fee: "$2.49".to_string(),
            location: "101 Maple Road, Southside".to_string(),
            phone: Some("(555) 456-7890".to_string()),
            featured: false,
        },
        Restaurant {
            id: RestaurantId::new(5),
            name: "Curry House".to_string(),
            image: unsplash("photo-1631452180519-c014fe946bc7"),
            cuisine: "Indian".to_string(),
            rating: 4.6,
            review_count: 198,
            delivery_time: "30-40 min".to_string(),
            delivery_fee: "$2.99".to_string(),
            location: "202 Cedar Street, Northside".to_string(),
            phone: Some("(555) 567-8901".to_string()),
            featured: false,
        },
        Restaurant {
            id: RestaurantId::new(6),
            name: "Green Garden".to_string(),
            image: unsplash("photo-1546069901-ba9599a7e63c"),
            cuisine: "Vegetarian".to_string(),
            rating: 4.4,
            review_count: 142,
            delivery_time: "20-30 min".to_string(),
            delivery_fee: "$2.99".to_string(),
            location: "303 Birch Avenue, Midtown".to_string(),
            phone: Some("(555) 678-9012".to_string()),
            featured: false,
        },
    ]
}

/// Blog posts, newest first.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: PostId::new(1),
            title: "10 Best Food Delivery Services in 2025".to_string(),
            excerpt: "Discover the top food delivery services that are revolutionizing the way we order food.".to_string(),
            content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.".to_string(),
            image: unsplash("photo-1565299624946-b28f40a0ae38"),
            author: Author {
                name: "Michael Johnson".to_string(),
                avatar: portrait("men/32"),
            },
            date: "May 14, 2025".to_string(),
            read_time: "5 min read".to_string(),
            category: "Food Delivery".to_string(),
            tags: tags(&["food delivery", "restaurants", "takeout"]),
            comment_count: 18,
            featured: true,
        },
        BlogPost {
            id: PostId::new(2),
            title: "How to Save Money on Food Delivery".to_string(),
            excerpt: "Learn the best tips and tricks to save money while still enjoying the convenience of food delivery.".to_string(),
            content: "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.".to_string(),
            image: unsplash("photo-1532634993-15f421e42ec0"),
            author: Author {
                name: "Sarah Wilson".to_string(),
                avatar: portrait("women/44"),
            },
            date: "May 10, 2025".to_string(),
            read_time: "7 min read".to_string(),
            category: "Tips & Tricks".to_string(),
            tags: tags(&["saving money", "food delivery", "tips"]),
            comment_count: 24,
            featured: false,
        },
        BlogPost {
            id: PostId::new(3),
            title: "The Rise of Ghost Kitchens in 2025".to_string(),
            excerpt: "Exploring how ghost kitchens are transforming the restaurant industry landscape.".to_string(),
            content: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.".to_string(),
            image: unsplash("photo-1540914124281-342587941389"),
            author: Author {
                name: "Alex Chen".to_string(),
                avatar: portrait("men/22"),
            },
            date: "May 5, 2025".to_string(),
            read_time: "8 min read".to_string(),
            category: "Industry Trends".to_string(),
            tags: tags(&["ghost kitchens", "restaurants", "food industry"]),
            comment_count: 32,
            featured: true,
        },
        BlogPost {
            id: PostId::new(4),
            title: "Healthy Meal Delivery Services Review".to_string(),
            excerpt: "Comprehensive review of the top healthy meal delivery services for health-conscious consumers.".to_string(),
            content: "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.".to_string(),
            image: unsplash("photo-1546069901-ba9599a7e63c"),
            author: Author {
                name: "Emma Roberts".to_string(),
                avatar: portrait("women/33"),
            },
            date: "April 28, 2025".to_string(),
            read_time: "10 min read".to_string(),
            category: "Health & Wellness".to_string(),
            tags: tags(&["healthy eating", "meal delivery", "nutrition"]),
            comment_count: 29,
            featured: false,
        },
        BlogPost {
            id: PostId::new(5),
            title: "The Future of Food Tech in Delivery".to_string(),
            excerpt: "Exploring emerging technologies reshaping the food delivery ecosystem.".to_string(),
            content: "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium.".to_string(),
            image: unsplash("photo-1593642633279-1796119d5482"),
            author: Author {
                name: "David Park".to_string(),
                avatar: portrait("men/11"),
            },
            date: "April 22, 2025".to_string(),
            read_time: "6 min read".to_string(),
            category: "Technology".to_string(),
            tags: tags(&["foodtech", "innovation", "delivery"]),
            comment_count: 15,
            featured: false,
        },
        BlogPost {
            id: PostId::new(6),
            title: "Best Practices for Restaurant Owners Using Delivery Apps".to_string(),
            excerpt: "Essential strategies for restaurant owners to maximize their success with food delivery platforms.".to_string(),
            content: "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores.".to_string(),
            image: unsplash("photo-1554118811-1e0d58224f24"),
            author: Author {
                name: "Lisa Thompson".to_string(),
                avatar: portrait("women/67"),
            },
            date: "April 15, 2025".to_string(),
            read_time: "9 min read".to_string(),
            category: "Business".to_string(),
            tags: tags(&["restaurant business", "delivery apps", "strategy"]),
            comment_count: 21,
            featured: false,
        },
    ]
}
