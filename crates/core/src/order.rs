//! Demo order-history records.
//!
//! Orders here are purely illustrative: immutable snapshots shown on the
//! account page. They are never constructed from a live cart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, Price, ProductId};

/// One line of a past order: a frozen snapshot of what was bought.
///
/// Unlike a cart line this does not reference the live catalog; name and
/// unit price are copied at "purchase" time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl OrderItem {
    /// Total for this snapshot line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// An immutable historical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the stored items' price x quantity.
    ///
    /// For well-formed demo data this equals the stored `total`; the
    /// storefront content tests assert it.
    #[must_use]
    pub fn items_total(&self) -> Price {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}
