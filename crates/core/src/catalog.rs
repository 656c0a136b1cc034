//! The fixed, read-only product catalog.
//!
//! Products are defined once at startup and never change. Filtering is a
//! linear scan over the list, which is the right tool at this data size
//! (a few dozen products at most).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Wildcard name accepted by [`Catalog::filter`]; matches every category.
pub const ALL_CATEGORIES: &str = "all";

/// Product category. The set is fixed for the life of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Accessories,
}

impl Category {
    /// All categories, in the order the filter chips display them.
    pub const ALL: [Self; 2] = [Self::Electronics, Self::Accessories];

    /// URL-safe name used in filter query strings.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Accessories => "accessories",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| s.eq_ignore_ascii_case(category.slug()))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A purchasable product. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    /// Opaque image URI. Resolution (and fallback on failure) belongs to the
    /// rendering layer.
    pub image: String,
    pub description: String,
}

/// The fixed, read-only product list.
///
/// There is no loading step and no error path: the catalog is constructed
/// from hardcoded data and only ever read.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a fixed product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in original order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products whose category matches `category`, preserving catalog order.
    ///
    /// `"all"` (case-insensitive) is a wildcard. An unknown category name
    /// matches nothing and yields an empty list rather than an error.
    #[must_use]
    pub fn filter(&self, category: &str) -> Vec<&Product> {
        if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return self.products.iter().collect();
        }
        category.parse::<Category>().map_or_else(
            |_| Vec::new(),
            |wanted| {
                self.products
                    .iter()
                    .filter(|product| product.category == wanted)
                    .collect()
            },
        )
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(100),
            category,
            image: "/static/images/placeholder.svg".to_owned(),
            description: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, Category::Electronics),
            product(2, Category::Accessories),
            product(3, Category::Electronics),
        ])
    }

    #[test]
    fn list_returns_products_in_original_order() {
        let ids: Vec<i32> = catalog().list().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filter_all_is_a_wildcard() {
        let c = catalog();
        assert_eq!(c.filter("all").len(), 3);
        assert_eq!(c.filter("All").len(), 3);
    }

    #[test]
    fn filter_by_category_preserves_order() {
        let c = catalog();
        let ids: Vec<i32> = c
            .filter("electronics")
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filter_unknown_category_yields_empty_not_error() {
        assert!(catalog().filter("groceries").is_empty());
        assert!(catalog().filter("").is_empty());
    }

    #[test]
    fn filter_category_with_no_products_yields_empty() {
        let c = Catalog::new(vec![product(1, Category::Electronics)]);
        assert!(c.filter("accessories").is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let c = catalog();
        assert_eq!(c.get(ProductId::new(2)).unwrap().id, ProductId::new(2));
        assert!(c.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn category_parses_from_slug() {
        assert_eq!(
            "electronics".parse::<Category>().unwrap(),
            Category::Electronics
        );
        assert_eq!(
            "Accessories".parse::<Category>().unwrap(),
            Category::Accessories
        );
        assert!("gadgets".parse::<Category>().is_err());
    }
}
