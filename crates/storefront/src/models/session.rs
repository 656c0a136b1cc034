//! Session-related types.
//!
//! The session is the only per-visitor state the storefront keeps. It
//! holds the cart, serialized as JSON by tower-sessions.

/// Session keys for visitor data.
pub mod keys {
    /// Key for storing the visitor's cart.
    pub const CART: &str = "cart";
}
