//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog                - Product catalog (?category= filters)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add product (returns count badge, triggers cart-updated)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove product (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Account
//! GET  /account                - Demo profile and order history
//!
//! # Pages
//! GET  /contacts               - Store contact details
//! GET  /delivery               - Delivery and payment options
//! GET  /reviews                - Customer reviews
//! ```

pub mod account;
pub mod cart;
pub mod catalog;
pub mod home;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Cart routes (nested under /cart).
fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/catalog", get(catalog::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Account
        .route("/account", get(account::index))
        // Static pages
        .route("/contacts", get(pages::contacts))
        .route("/delivery", get(pages::delivery))
        .route("/reviews", get(pages::reviews))
}
