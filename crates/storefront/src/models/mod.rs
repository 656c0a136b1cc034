//! Storefront-side data types.
//!
//! Types that exist for the HTTP layer rather than the cart engine,
//! such as the keys used to address values inside the session.

pub mod session;

pub use session::keys as session_keys;
