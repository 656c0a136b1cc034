//! Hardcoded demo content for the storefront.
//!
//! The catalog, order history, and customer reviews are seeded in code
//! and never change while the server runs. This keeps the demo fully
//! self-contained: no database, no upstream commerce API.

use chrono::NaiveDate;
use techstore_core::{
    Catalog, Category, Order, OrderId, OrderItem, OrderStatus, Price, Product, ProductId,
};

/// A customer review shown on the reviews page.
#[derive(Debug, Clone)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub body: String,
    pub date: NaiveDate,
}

/// Store identity shown on the contacts page and in the footer.
#[derive(Debug, Clone)]
pub struct StoreInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<String>,
}

/// A delivery or payment option listed on the delivery page.
#[derive(Debug, Clone)]
pub struct ServiceOption {
    pub name: String,
    pub details: String,
}

/// All content the storefront serves.
pub struct StoreContent {
    catalog: Catalog,
    orders: Vec<Order>,
    reviews: Vec<Review>,
    info: StoreInfo,
    delivery_options: Vec<ServiceOption>,
    payment_options: Vec<ServiceOption>,
}

impl StoreContent {
    /// Seed the full demo content set.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            catalog: Catalog::new(seed_products()),
            orders: seed_orders(),
            reviews: seed_reviews(),
            info: seed_store_info(),
            delivery_options: seed_delivery_options(),
            payment_options: seed_payment_options(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Order history for the demo account.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub const fn info(&self) -> &StoreInfo {
        &self.info
    }

    #[must_use]
    pub fn delivery_options(&self) -> &[ServiceOption] {
        &self.delivery_options
    }

    #[must_use]
    pub fn payment_options(&self) -> &[ServiceOption] {
        &self.payment_options
    }
}

/// Build a date literal known to be valid at compile time.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid date")
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Nebula X5 Smartphone".to_string(),
            price: Price::new(899),
            category: Category::Electronics,
            image: "/static/images/products/smartphone.svg".to_string(),
            description: "6.7-inch OLED display, 256 GB of storage, and a triple-lens camera."
                .to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "AeroBook 14 Laptop".to_string(),
            price: Price::new(1249),
            category: Category::Electronics,
            image: "/static/images/products/laptop.svg".to_string(),
            description: "Lightweight 14-inch laptop with 16 GB of RAM and a 512 GB SSD."
                .to_string(),
        },
        Product {
            id: ProductId::new(3),
            name: "PulseBeat Wireless Headphones".to_string(),
            price: Price::new(129),
            category: Category::Accessories,
            image: "/static/images/products/headphones.svg".to_string(),
            description: "Over-ear headphones with active noise cancellation and a 30-hour battery."
                .to_string(),
        },
        Product {
            id: ProductId::new(4),
            name: "Vitality Smart Watch".to_string(),
            price: Price::new(249),
            category: Category::Accessories,
            image: "/static/images/placeholder.svg".to_string(),
            description: "Fitness tracking, heart-rate monitoring, and a week of battery life."
                .to_string(),
        },
        Product {
            id: ProductId::new(5),
            name: "Slate 11 Tablet".to_string(),
            price: Price::new(549),
            category: Category::Electronics,
            image: "/static/images/placeholder.svg".to_string(),
            description: "11-inch tablet for work and entertainment with stylus support."
                .to_string(),
        },
        Product {
            id: ProductId::new(6),
            name: "ArmorShell Phone Case".to_string(),
            price: Price::new(19),
            category: Category::Accessories,
            image: "/static/images/placeholder.svg".to_string(),
            description: "Shock-absorbing case with raised edges for screen protection."
                .to_string(),
        },
    ]
}

/// Order history for the demo account.
///
/// Item lines copy the product name and price as they were at purchase
/// time, and each order total must equal the sum of its lines.
fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1001),
            date: date(2025, 5, 14),
            total: Price::new(899),
            status: OrderStatus::Delivered,
            items: vec![OrderItem {
                product_id: ProductId::new(1),
                name: "Nebula X5 Smartphone".to_string(),
                unit_price: Price::new(899),
                quantity: 1,
            }],
        },
        Order {
            id: OrderId::new(1002),
            date: date(2025, 6, 2),
            total: Price::new(378),
            status: OrderStatus::InTransit,
            items: vec![
                OrderItem {
                    product_id: ProductId::new(3),
                    name: "PulseBeat Wireless Headphones".to_string(),
                    unit_price: Price::new(129),
                    quantity: 1,
                },
                OrderItem {
                    product_id: ProductId::new(4),
                    name: "Vitality Smart Watch".to_string(),
                    unit_price: Price::new(249),
                    quantity: 1,
                },
            ],
        },
    ]
}

fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            author: "Alex P.".to_string(),
            rating: 5,
            body: "Ordered the Nebula X5 and it arrived the next day. The screen is \
                   stunning and the battery easily lasts a full day."
                .to_string(),
            date: date(2025, 6, 20),
        },
        Review {
            author: "Maria K.".to_string(),
            rating: 4,
            body: "The AeroBook is fast and genuinely light. Took one star off because \
                   the charger sold out and I had to wait for a restock."
                .to_string(),
            date: date(2025, 7, 3),
        },
        Review {
            author: "Daniel S.".to_string(),
            rating: 5,
            body: "Best headphones I have owned. Noise cancellation makes my commute \
                   bearable and support answered my sizing question within an hour."
                .to_string(),
            date: date(2025, 7, 18),
        },
        Review {
            author: "Elena V.".to_string(),
            rating: 5,
            body: "Great prices and honest descriptions. The watch looks exactly like \
                   the photos. Will be back for a tablet."
                .to_string(),
            date: date(2025, 8, 1),
        },
    ]
}

fn seed_store_info() -> StoreInfo {
    StoreInfo {
        name: "TechStore".to_string(),
        tagline: "Electronics and accessories at honest prices.".to_string(),
        address: "12 Market Street, Springfield".to_string(),
        phone: "+1 (555) 010-2030".to_string(),
        email: "hello@techstore.example".to_string(),
        hours: vec![
            "Mon-Fri: 9:00-20:00".to_string(),
            "Sat-Sun: 10:00-18:00".to_string(),
        ],
    }
}

fn seed_delivery_options() -> Vec<ServiceOption> {
    vec![
        ServiceOption {
            name: "Courier delivery".to_string(),
            details: "1-2 business days within the city. Free for orders over $50.".to_string(),
        },
        ServiceOption {
            name: "Pickup points".to_string(),
            details: "Collect from over 100 pickup locations. Ready the next day.".to_string(),
        },
        ServiceOption {
            name: "Postal shipping".to_string(),
            details: "Nationwide delivery in 5-10 business days.".to_string(),
        },
    ]
}

fn seed_payment_options() -> Vec<ServiceOption> {
    vec![
        ServiceOption {
            name: "Card online".to_string(),
            details: "Visa, Mastercard, and American Express.".to_string(),
        },
        ServiceOption {
            name: "Card on delivery".to_string(),
            details: "Pay the courier by card when your order arrives.".to_string(),
        },
        ServiceOption {
            name: "Cash".to_string(),
            details: "Accepted for courier and pickup-point orders.".to_string(),
        },
        ServiceOption {
            name: "Installments".to_string(),
            details: "Split payments over 4 months on orders over $200.".to_string(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn order_totals_match_their_item_lines() {
        let content = StoreContent::seed();
        for order in content.orders() {
            assert_eq!(
                order.total,
                order.items_total(),
                "order {} total does not match its lines",
                order.id
            );
        }
    }

    #[test]
    fn order_items_reference_catalog_products() {
        let content = StoreContent::seed();
        for order in content.orders() {
            for item in &order.items {
                let product = content.catalog().get(item.product_id).unwrap();
                assert_eq!(product.name, item.name);
            }
        }
    }

    #[test]
    fn product_ids_are_unique() {
        let content = StoreContent::seed();
        let ids: HashSet<_> = content.catalog().list().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), content.catalog().len());
    }

    #[test]
    fn every_category_has_products() {
        let content = StoreContent::seed();
        for category in Category::ALL {
            assert!(
                !content.catalog().filter(category.slug()).is_empty(),
                "category {category} has no products"
            );
        }
    }

    #[test]
    fn review_ratings_are_within_scale() {
        let content = StoreContent::seed();
        for review in content.reviews() {
            assert!((1..=5).contains(&review.rating));
        }
    }
}
