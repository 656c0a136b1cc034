//! Application state shared across request handlers.

use std::sync::Arc;

use techstore_core::Catalog;

use crate::config::StorefrontConfig;
use crate::content::StoreContent;

/// Shared application state.
///
/// Cheap to clone; all fields live behind a single `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: StoreContent,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// The demo catalog, order history, and reviews are seeded here and
    /// never change for the lifetime of the process.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                content: StoreContent::seed(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn content(&self) -> &StoreContent {
        &self.inner.content
    }

    /// Shorthand for the product catalog, the most common lookup.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.inner.content.catalog()
    }
}
