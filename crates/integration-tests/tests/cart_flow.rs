//! Cart behavior end to end.
//!
//! The session cookie carries the cart across requests, HTMX fragment
//! responses reflect every mutation, and totals always equal the sum of
//! unit price times quantity over the lines.
//!
//! Seeded prices used here: product 1 is $899, product 2 is $1,249,
//! product 3 is $129.

use axum::http::StatusCode;
use techstore_integration_tests::{TestClient, body_text};

#[tokio::test]
async fn add_to_cart_returns_badge_and_trigger() {
    let mut client = TestClient::new();
    let response = client.post_form("/cart/add", "product_id=1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").map(|v| v.as_bytes()),
        Some(b"cart-updated".as_slice())
    );

    let body = body_text(response).await;
    assert!(body.contains(r#"badge-count">1<"#));
}

#[tokio::test]
async fn cart_survives_page_navigation() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=1").await;

    // Full page render on another URL still shows one item in the badge
    let body = body_text(client.get("/").await).await;
    assert!(body.contains("badge-count"));

    let body = body_text(client.get("/cart").await).await;
    assert!(body.contains("Nebula X5 Smartphone"));
    assert!(body.contains("$899"));
}

#[tokio::test]
async fn adding_same_product_twice_merges_into_one_line() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=1").await;
    client.post_form("/cart/add", "product_id=1").await;

    let body = body_text(client.get("/cart").await).await;
    assert_eq!(body.matches("Nebula X5 Smartphone").count(), 2); // image alt + title
    assert!(body.contains(r#"<span class="quantity">2</span>"#));
    assert!(body.contains("$1,798"));
}

#[tokio::test]
async fn distinct_products_get_distinct_lines() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=1").await;
    client.post_form("/cart/add", "product_id=2").await;

    let body = body_text(client.get("/cart").await).await;
    assert!(body.contains("Nebula X5 Smartphone"));
    assert!(body.contains("AeroBook 14 Laptop"));
    assert!(body.contains("$2,148"));
}

#[tokio::test]
async fn quantity_update_sets_exact_value() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=3").await;
    client.post_form("/cart/add", "product_id=3").await;

    let response = client
        .post_form("/cart/update", "product_id=3&quantity=5")
        .await;
    assert_eq!(
        response.headers().get("HX-Trigger").map(|v| v.as_bytes()),
        Some(b"cart-updated".as_slice())
    );

    let body = body_text(response).await;
    assert!(body.contains(r#"<span class="quantity">5</span>"#));
    assert!(body.contains("$645"));
}

#[tokio::test]
async fn full_shopping_scenario_keeps_totals_consistent() {
    let mut client = TestClient::new();

    // Two adds merge into one line of two
    client.post_form("/cart/add", "product_id=3").await;
    client.post_form("/cart/add", "product_id=3").await;
    let body = body_text(client.get("/cart").await).await;
    assert!(body.contains("$258"));

    // Setting the quantity overwrites, it does not accumulate
    let body = body_text(
        client
            .post_form("/cart/update", "product_id=3&quantity=5")
            .await,
    )
    .await;
    assert!(body.contains("$645"));

    // Removing the only line empties the cart
    let body = body_text(client.post_form("/cart/remove", "product_id=3").await).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn update_to_zero_removes_the_line() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=1").await;

    let body = body_text(
        client
            .post_form("/cart/update", "product_id=1&quantity=0")
            .await,
    )
    .await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn negative_quantity_also_removes_the_line() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=1").await;

    let body = body_text(
        client
            .post_form("/cart/update", "product_id=1&quantity=-1")
            .await,
    )
    .await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn unknown_product_add_is_ignored() {
    let mut client = TestClient::new();
    let response = client.post_form("/cart/add", "product_id=999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(!body.contains("badge-count"));

    let body = body_text(client.get("/cart").await).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn removing_absent_product_leaves_cart_unchanged() {
    let mut client = TestClient::new();
    client.post_form("/cart/add", "product_id=1").await;

    let body = body_text(client.post_form("/cart/remove", "product_id=999").await).await;
    assert!(body.contains("Nebula X5 Smartphone"));
    assert!(body.contains("$899"));
}

#[tokio::test]
async fn updating_absent_product_adds_nothing() {
    let mut client = TestClient::new();
    let body = body_text(
        client
            .post_form("/cart/update", "product_id=999&quantity=3")
            .await,
    )
    .await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn count_endpoint_reflects_session_cart() {
    let mut client = TestClient::new();

    let body = body_text(client.get("/cart/count").await).await;
    assert!(!body.contains("badge-count"));

    client.post_form("/cart/add", "product_id=1").await;
    client.post_form("/cart/add", "product_id=2").await;

    let body = body_text(client.get("/cart/count").await).await;
    assert!(body.contains(r#"badge-count">2<"#));
}

#[tokio::test]
async fn carts_are_isolated_per_session() {
    let mut first = TestClient::new();
    let mut second = first.split();

    first.post_form("/cart/add", "product_id=1").await;

    let body = body_text(second.get("/cart").await).await;
    assert!(body.contains("Your cart is empty."));

    let body = body_text(first.get("/cart").await).await;
    assert!(body.contains("Nebula X5 Smartphone"));
}
