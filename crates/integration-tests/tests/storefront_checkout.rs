//! Integration tests for the cart and checkout flow.
//!
//! These tests require a running storefront (cargo run -p grubzap-storefront).
//! Each test uses its own client, so each one gets a fresh session.
//!
//! Run with: cargo test -p grubzap-integration-tests -- --ignored

use grubzap_integration_tests::{storefront_base_url, visitor_client};
use reqwest::{Client, StatusCode, header};

async fn add_to_cart(client: &Client, item_id: &str) {
    let resp = client
        .post(format!("{}/cart/add", storefront_base_url()))
        .form(&[("item_id", item_id), ("return_to", "/menu")])
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

async fn cart_page(client: &Client) -> String {
    client
        .get(format!("{}/cart", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get cart")
        .text()
        .await
        .expect("Failed to read response")
}

fn location(resp: &reqwest::Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_cart_merges_repeated_adds() {
    let client = visitor_client().expect("Failed to create HTTP client");
    add_to_cart(&client, "1").await;
    add_to_cart(&client, "1").await;

    let page = cart_page(&client).await;
    assert_eq!(page.matches("data-cart-line").count(), 1);

    let count = client
        .get(format!("{}/cart/count", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get cart count")
        .text()
        .await
        .expect("Failed to read response");
    assert!(count.contains(">2<"));
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_cart_clear() {
    let client = visitor_client().expect("Failed to create HTTP client");
    add_to_cart(&client, "1").await;
    add_to_cart(&client, "2").await;

    let resp = client
        .post(format!("{}/cart/clear", storefront_base_url()))
        .send()
        .await
        .expect("Failed to clear cart");
    assert_eq!(location(&resp), Some("/cart"));

    assert!(cart_page(&client).await.contains("Your cart is empty"));
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_cash_checkout_places_order() {
    let client = visitor_client().expect("Failed to create HTTP client");
    let base_url = storefront_base_url();
    add_to_cart(&client, "3").await;

    let resp = client
        .post(format!("{base_url}/payment"))
        .form(&[
            ("full_name", "Integration Test"),
            ("phone", "555-0100"),
            ("address", "1 Test Way"),
            ("city", "Testville"),
            ("zip", "12345"),
            ("method", "cash"),
        ])
        .send()
        .await
        .expect("Failed to submit payment");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));

    let home = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get home page")
        .text()
        .await
        .expect("Failed to read response");
    assert!(home.contains("Order successfully placed!"));
    assert!(cart_page(&client).await.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_checkout_rejects_missing_fields() {
    let client = visitor_client().expect("Failed to create HTTP client");
    add_to_cart(&client, "3").await;

    let resp = client
        .post(format!("{}/payment", storefront_base_url()))
        .form(&[("method", "card")])
        .send()
        .await
        .expect("Failed to submit payment");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Card number is required"));
}

// ============================================================================
// Visitor
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_signup_unlocks_profile() {
    let client = visitor_client().expect("Failed to create HTTP client");
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/profile"))
        .send()
        .await
        .expect("Failed to get profile");
    assert_eq!(location(&resp), Some("/signup"));

    let resp = client
        .post(format!("{base_url}/signup"))
        .form(&[
            ("name", "Integration Test"),
            ("email", "integration@example.com"),
            ("password", "secret1"),
            ("confirm_password", "secret1"),
            ("terms", "on"),
        ])
        .send()
        .await
        .expect("Failed to sign up");
    assert_eq!(location(&resp), Some("/"));

    let resp = client
        .get(format!("{base_url}/profile?tab=orders"))
        .send()
        .await
        .expect("Failed to get profile");
    assert_eq!(resp.status(), StatusCode::OK);
}
