//! Custom Askama template filters.
//!
//! Templates that use these must have `crate::filters` in scope.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Returns the content hash for slider.js.
///
/// Usage in templates: `{{ ""|js_hash }}`
#[askama::filter_fn]
pub fn js_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("JS_HASH"))
}
