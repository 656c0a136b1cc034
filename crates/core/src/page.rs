//! Page navigation over the fixed set of storefront pages.
//!
//! The storefront is a closed set of pages with fully connected navigation:
//! every page links to every other through the header and footer. The HTTP
//! router is the transition function; this enum is what the templates
//! dispatch on.

use serde::{Deserialize, Serialize};

/// The storefront's page identifiers. Initial state is [`Page::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Catalog,
    Cart,
    Account,
    Contacts,
    Delivery,
    Reviews,
}

impl Page {
    /// Every page, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Catalog,
        Self::Cart,
        Self::Account,
        Self::Contacts,
        Self::Delivery,
        Self::Reviews,
    ];

    /// Pages shown as links in the navigation bar. Cart and account are
    /// reached through their header icons instead.
    pub const NAV: [Self; 5] = [
        Self::Home,
        Self::Catalog,
        Self::Delivery,
        Self::Reviews,
        Self::Contacts,
    ];

    /// URL path serving this page.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::Cart => "/cart",
            Self::Account => "/account",
            Self::Contacts => "/contacts",
            Self::Delivery => "/delivery",
            Self::Reviews => "/reviews",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Catalog => "Catalog",
            Self::Cart => "Cart",
            Self::Account => "Account",
            Self::Contacts => "Contacts",
            Self::Delivery => "Delivery",
            Self::Reviews => "Reviews",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
        assert_eq!(Page::default().path(), "/");
    }

    #[test]
    fn paths_are_unique() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in Page::ALL.iter().skip(i + 1) {
                assert_ne!(a.path(), b.path(), "{a:?} and {b:?} share a path");
            }
        }
    }

    #[test]
    fn nav_is_a_subset_of_all() {
        for page in Page::NAV {
            assert!(Page::ALL.contains(&page));
        }
    }
}
