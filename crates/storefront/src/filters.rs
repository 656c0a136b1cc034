//! Custom Askama template filters.
//!
//! Askama resolves these by name in any template whose deriving module
//! has `crate::filters` in scope. Both filters ignore their piped value
//! and are invoked as `{{ ""|name }}`.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Content hash of the compiled stylesheet, computed by the build
/// script. Templates link `main.<hash>.css` so the file can be cached
/// by content.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// The current year, for the footer copyright line.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
