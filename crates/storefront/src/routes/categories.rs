//! Category listing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Path;
use tracing::instrument;

use dukkan_core::CategoryId;
use dukkan_core::i18n::Translations;

use crate::context::{PageContext, StoreContext};
use crate::error::{AppError, Result};
use crate::filters;
use crate::views::{ProductCard, count};

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub page: PageContext,
    pub t: Translations,
    /// Store-relative path of this page, for the wishlist toggle.
    pub back: String,
    pub name: String,
    pub description: String,
    pub product_count: String,
    pub products: Vec<ProductCard>,
    pub show_ratings: bool,
    pub show_wishlist: bool,
}

/// Display the products in a category.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn show(
    ctx: StoreContext,
    Path((_, category_id)): Path<(String, i32)>,
) -> Result<CategoryTemplate> {
    let t = ctx.t();
    let category = ctx
        .catalog
        .category(CategoryId::new(category_id))
        .ok_or_else(|| AppError::NotFound(format!("category {category_id}")))?;
    let wishlist = ctx.wishlist().await?;
    let products = ProductCard::list(
        &t,
        &ctx.base_path(),
        ctx.catalog.products_in(category.id),
        &wishlist,
    );
    let widgets = &ctx.document.settings.widgets;

    Ok(CategoryTemplate {
        t,
        back: format!("/categories/{}", category.id),
        name: category.name.clone(),
        description: category.description.clone(),
        product_count: t.format("category.products_count", &[("n", &count(&t, products.len()))]),
        products,
        show_ratings: widgets.show_ratings,
        show_wishlist: widgets.show_wishlist,
        page: ctx.page(&category.name).await?,
    })
}
