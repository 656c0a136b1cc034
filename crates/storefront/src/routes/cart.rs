//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session: every handler loads it,
//! applies one cart operation, and stores it back before rendering.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use techstore_core::{Cart, CartLine, Page, Price, ProductId};

use crate::error::AppError;
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

use super::catalog::product_image;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub line_total: String,
    pub quantity: u32,
    /// Quantity the plus button submits.
    pub increment_quantity: i64,
    /// Quantity the minus button submits. Zero removes the line.
    pub decrement_quantity: i64,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::ZERO.to_string(),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.total().to_string(),
            item_count: cart.count(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let quantity = i64::from(line.quantity);
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            image: product_image(&line.product),
            unit_price: line.product.price.to_string(),
            line_total: line.line_total().to_string(),
            quantity: line.quantity,
            increment_quantity: quantity + 1,
            decrement_quantity: quantity - 1,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, or start a fresh one.
async fn load_cart(session: &Session) -> Result<Cart, AppError> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Store the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<(), AppError> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Number of items in the session cart, for the header badge.
pub(crate) async fn badge_count(session: &Session) -> Result<u32, AppError> {
    Ok(load_cart(session).await?.count())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
///
/// Quantity is signed so a decrement past one arrives as zero or less
/// and removes the line instead of underflowing.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: u32,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate, AppError> {
    let cart = load_cart(&session).await?;
    let view = CartView::from(&cart);

    Ok(CartShowTemplate {
        cart_count: view.item_count,
        cart: view,
        nav: Page::NAV,
    })
}

/// Add a product to the cart (HTMX).
///
/// Adding a product already in the cart bumps its quantity instead of
/// creating a second line. Unknown product IDs leave the cart untouched.
/// Returns an HTMX trigger to update the cart count badge.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await?;
    let product_id = ProductId::new(form.product_id);

    if let Some(product) = state.catalog().get(product_id) {
        cart.add(product);
        save_cart(&session, &cart).await?;
    } else {
        tracing::warn!(%product_id, "ignoring add for unknown product");
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            cart_count: cart.count(),
        },
    )
        .into_response())
}

/// Update a cart line quantity (HTMX).
///
/// A quantity of zero or less removes the line.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await?;
    cart.set_quantity(ProductId::new(form.product_id), form.quantity);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a product from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await?;
    cart.remove(ProductId::new(form.product_id));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate, AppError> {
    Ok(CartCountTemplate {
        cart_count: badge_count(&session).await?,
    })
}
