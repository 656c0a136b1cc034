//! The cart engine.
//!
//! A [`Cart`] owns an ordered collection of product/quantity selections and
//! derives its total price and item count on demand. Lines are ordered by
//! first insertion and deduplicated by product identity.
//!
//! Every operation is a total function: removing an absent product and
//! setting a quantity for an absent product are silent no-ops, and a
//! quantity request of zero or less removes the line instead of storing a
//! non-positive value. There is no error type to handle.
//!
//! The cart is `Serialize`/`Deserialize` so the storefront can keep it in
//! the per-browser session; the engine itself knows nothing about sessions.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One cart entry: a product plus the selected quantity.
///
/// The line carries a read-only copy of the product record so totals can be
/// derived without consulting the catalog. Stored quantity is always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Total for this line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The session-scoped shopping cart.
///
/// Created empty at session start, mutated only through [`Cart::add`],
/// [`Cart::remove`], and [`Cart::set_quantity`], and discarded with the
/// session. At most one line exists per distinct product identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in first-insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line if the product is already in the cart;
    /// otherwise appends a new line with quantity 1 at the end. Always
    /// succeeds.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the line for `product_id`, if present.
    ///
    /// Removing an absent product is an idempotent no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Set the quantity for `product_id` to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line. Setting a quantity for a
    /// product that is not in the cart is a silent no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Sum of price x quantity over all lines. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of items (sum of quantities). Zero for an empty cart.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: i32, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(price),
            category: Category::Electronics,
            image: "/static/images/placeholder.svg".to_owned(),
            description: String::new(),
        }
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let a = product(1, 100);

        cart.add(&a);
        cart.add(&a);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn lines_keep_first_insertion_order() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        let b = product(2, 50);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        let ids: Vec<i32> = cart
            .lines()
            .iter()
            .map(|line| line.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        cart.add(&a);

        cart.remove(a.id);
        let after_first = cart.clone();
        cart.remove(a.id);

        assert_eq!(cart, after_first);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        cart.add(&a);

        cart.set_quantity(a.id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_negative_removes_the_line() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        cart.add(&a);

        cart.set_quantity(a.id, -1);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_sets_exact_value_not_increment() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        cart.add(&a);
        cart.add(&a);

        cart.set_quantity(a.id, 7);

        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn set_quantity_on_absent_product_is_a_noop() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        cart.add(&a);
        let before = cart.clone();

        cart.set_quantity(ProductId::new(99), 5);

        assert_eq!(cart, before);
    }

    #[test]
    fn totals_follow_the_reference_scenario() {
        let mut cart = Cart::new();
        let a = product(1, 100);

        cart.add(&a);
        assert_eq!(cart.total(), Price::new(100));
        assert_eq!(cart.count(), 1);

        cart.add(&a);
        assert_eq!(cart.total(), Price::new(200));
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.lines().len(), 1);

        cart.set_quantity(a.id, 5);
        assert_eq!(cart.total(), Price::new(500));
        assert_eq!(cart.count(), 5);

        cart.remove(a.id);
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_sum_across_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 50));
        cart.set_quantity(ProductId::new(2), 3);

        assert_eq!(cart.total(), Price::new(250));
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn cart_round_trips_through_json() {
        // The storefront stores the cart in the session as JSON; ordering
        // and quantities must survive the trip.
        let mut cart = Cart::new();
        cart.add(&product(2, 50));
        cart.add(&product(1, 100));
        cart.add(&product(2, 50));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(back, cart);
        let ids: Vec<i32> = back
            .lines()
            .iter()
            .map(|line| line.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
