//! Account route handlers.
//!
//! The account area is a demo surface: it renders a fixed profile and
//! the seeded order history. There is no authentication.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use techstore_core::{Order, OrderItem, Page};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::cart::badge_count;

/// Order line display data for templates.
#[derive(Clone)]
pub struct OrderItemView {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub number: String,
    pub date: String,
    pub status: String,
    pub delivered: bool,
    pub items: Vec<OrderItemView>,
    pub total: String,
}

/// Demo profile shown in the account area.
#[derive(Clone)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for ProfileView {
    fn default() -> Self {
        Self {
            name: "Jordan Lee".to_string(),
            email: "jordan.lee@example.com".to_string(),
            phone: "+1 (555) 014-8890".to_string(),
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            number: order.id.to_string(),
            date: order.date.format("%B %-d, %Y").to_string(),
            status: order.status.label().to_string(),
            delivered: order.status.is_delivered(),
            items: order.items.iter().map(OrderItemView::from).collect(),
            total: order.total.to_string(),
        }
    }
}

/// Account page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub profile: ProfileView,
    pub orders: Vec<OrderView>,
    pub nav: [Page; 5],
    pub cart_count: u32,
}

/// Display the account page with order history.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<AccountTemplate, AppError> {
    let orders = state
        .content()
        .orders()
        .iter()
        .map(OrderView::from)
        .collect();

    Ok(AccountTemplate {
        profile: ProfileView::default(),
        orders,
        nav: Page::NAV,
        cart_count: badge_count(&session).await?,
    })
}
