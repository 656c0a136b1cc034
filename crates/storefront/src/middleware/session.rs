//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The session holds
//! the visitor's cart, so cart contents survive page navigation but not
//! a server restart or the end of the browser session.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ts_session";

/// Create the session layer with an in-memory store.
///
/// The cookie has no explicit expiry, so browsers drop it when the
/// session ends. Each server process starts with an empty store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
