//! TechStore Core - domain types for the storefront demo.
//!
//! This crate holds everything the demo actually computes:
//! - [`catalog`] - the fixed, read-only product list and its category filter
//! - [`cart`] - the cart engine (add / remove / set-quantity, derived totals)
//! - [`order`] - immutable demo order-history records
//! - [`page`] - the fixed enumeration of storefront pages
//! - [`types`] - newtype wrappers for IDs, prices, and statuses
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP, no
//! templates. The storefront crate renders this state; nothing here knows
//! how it is displayed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod page;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{ALL_CATEGORIES, Catalog, Category, Product, UnknownCategory};
pub use order::{Order, OrderItem};
pub use page::Page;
pub use types::*;
