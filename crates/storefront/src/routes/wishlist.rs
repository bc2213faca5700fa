//! Wishlist toggle.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::ProductId;

use crate::context::StoreContext;
use crate::error::{AppError, Result};

/// Wishlist toggle form data.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub product_id: i32,
    /// Store-relative page to return to, e.g. `/categories/2`.
    pub back: Option<String>,
}

/// Accept only plain store-relative paths as a return target. `/` is the
/// store home.
fn return_path(back: Option<&str>, product_id: ProductId) -> String {
    if back == Some("/") {
        return String::new();
    }
    back.filter(|p| {
        p.starts_with('/')
            && !p.starts_with("//")
            && p.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_'))
    })
    .map_or_else(|| format!("/products/{product_id}"), str::to_owned)
}

/// Add the product to the wishlist, or remove it if already there.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn toggle(ctx: StoreContext, Form(form): Form<ToggleForm>) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    if ctx.catalog.product(id).is_none() {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    let mut wishlist = ctx.wishlist().await?;
    let notice = if let Some(pos) = wishlist.iter().position(|p| *p == id) {
        wishlist.remove(pos);
        "wishlist.removed"
    } else {
        wishlist.push(id);
        "wishlist.added"
    };
    ctx.save_wishlist(&wishlist).await?;

    Ok(ctx.redirect_notice(&return_path(form.back.as_deref(), id), notice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_path_rejects_foreign_targets() {
        let id = ProductId::new(3);
        assert_eq!(return_path(Some("/categories/2"), id), "/categories/2");
        assert_eq!(return_path(Some("/"), id), "");
        assert_eq!(return_path(Some(""), id), "/products/3");
        assert_eq!(return_path(Some("//evil.example"), id), "/products/3");
        assert_eq!(return_path(Some("https://evil.example"), id), "/products/3");
        assert_eq!(return_path(Some("/cart?x=1"), id), "/products/3");
        assert_eq!(return_path(None, id), "/products/3");
    }
}
