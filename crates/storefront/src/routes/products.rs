//! Product detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::ProductId;
use dukkan_core::cart::MAX_LINE_QUANTITY;
use dukkan_core::catalog::Product;
use dukkan_core::i18n::Translations;

use crate::context::{PageContext, StoreContext};
use crate::error::{AppError, Result};
use crate::filters;
use crate::views::{ProductCard, count};

/// Number of related products shown under the detail.
const RELATED_LIMIT: usize = 4;

/// Stock at or below which the page shows "only N left".
const LOW_STOCK: u32 = 5;

/// Query parameters for the product page.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Index of the gallery image to show large.
    pub image: Option<usize>,
}

/// A gallery thumbnail.
pub struct GalleryImage {
    pub url: String,
    pub href: String,
    pub selected: bool,
    pub label: String,
}

/// A variant option group on the product form.
pub struct OptionGroupView {
    /// Form field name.
    pub key: &'static str,
    pub label: String,
    pub values: Vec<String>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub page: PageContext,
    pub t: Translations,
    /// Store-relative path of this page, for the wishlist toggle.
    pub back: String,
    pub product: ProductCard,
    pub category_name: Option<String>,
    pub category_href: Option<String>,
    pub selected_image: Option<String>,
    pub gallery: Vec<GalleryImage>,
    pub options: Vec<OptionGroupView>,
    pub description: String,
    pub features: Vec<String>,
    pub stock_label: String,
    pub max_quantity: u32,
    pub related: Vec<ProductCard>,
    pub show_ratings: bool,
    pub show_wishlist: bool,
}

/// Gallery for `product` with image `selected` highlighted.
///
/// An out-of-range index falls back to the first image.
fn gallery(t: &Translations, href: &str, product: &Product, selected: Option<usize>) -> Vec<GalleryImage> {
    let selected = selected.filter(|&i| i < product.images.len()).unwrap_or(0);
    product
        .images
        .iter()
        .enumerate()
        .map(|(index, url)| GalleryImage {
            url: url.clone(),
            href: format!("{href}?image={index}"),
            selected: index == selected,
            label: t.format("home.slide", &[("n", &count(t, index + 1))]),
        })
        .collect()
}

fn stock_label(t: &Translations, product: &Product) -> String {
    match product.stock {
        0 => t.get("common.out_of_stock").to_owned(),
        n if n <= LOW_STOCK => t.format("common.left_in_stock", &[("n", &count(t, n))]),
        _ => t.get("common.in_stock").to_owned(),
    }
}

/// Upper bound for the quantity input; matches what the cart accepts.
fn max_quantity(product: &Product) -> u32 {
    product.stock.min(MAX_LINE_QUANTITY).max(1)
}

/// Display a product.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn show(
    ctx: StoreContext,
    Path((_, product_id)): Path<(String, i32)>,
    Query(query): Query<ProductQuery>,
) -> Result<ProductTemplate> {
    let t = ctx.t();
    let base = ctx.base_path();
    let product = ctx
        .catalog
        .product(ProductId::new(product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;
    let wishlist = ctx.wishlist().await?;
    let widgets = &ctx.document.settings.widgets;

    let card = ProductCard::new(&t, &base, product, wishlist.contains(&product.id));
    let gallery = gallery(&t, &card.href, product, query.image);
    let selected_image = gallery
        .iter()
        .find(|g| g.selected)
        .map(|g| g.url.clone());
    let category = ctx.catalog.category(product.category_id);

    Ok(ProductTemplate {
        t,
        back: format!("/products/{}", product.id),
        product: card,
        category_name: category.map(|c| c.name.clone()),
        category_href: category.map(|c| format!("{base}/categories/{}", c.id)),
        selected_image,
        gallery,
        options: product
            .options
            .iter()
            .map(|o| OptionGroupView {
                key: o.kind.key(),
                label: t.get(o.kind.label_key()).to_owned(),
                values: o.values.clone(),
            })
            .collect(),
        description: product.description.clone(),
        features: product.features.clone(),
        stock_label: stock_label(&t, product),
        max_quantity: max_quantity(product),
        related: ProductCard::list(
            &t,
            &base,
            ctx.catalog.related(product, RELATED_LIMIT),
            &wishlist,
        ),
        show_ratings: widgets.show_ratings,
        show_wishlist: widgets.show_wishlist,
        page: ctx.page(&product.name).await?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::catalog::StoreDirectory;
    use dukkan_core::i18n::Locale;

    use super::*;

    fn product_with_images() -> Product {
        StoreDirectory::demo()
            .iter()
            .flat_map(|s| s.products.clone())
            .find(|p| p.images.len() > 1)
            .unwrap()
    }

    #[test]
    fn test_gallery_selects_requested_image() {
        let t = Translations::new(Locale::En);
        let product = product_with_images();
        let images = gallery(&t, "/p", &product, Some(1));
        assert!(!images.first().unwrap().selected);
        assert!(images.get(1).unwrap().selected);
        assert_eq!(images.get(1).unwrap().href, "/p?image=1");
    }

    #[test]
    fn test_gallery_out_of_range_falls_back_to_first() {
        let t = Translations::new(Locale::En);
        let product = product_with_images();
        let images = gallery(&t, "/p", &product, Some(99));
        assert!(images.first().unwrap().selected);
        assert_eq!(images.iter().filter(|g| g.selected).count(), 1);
    }

    #[test]
    fn test_stock_label() {
        let t = Translations::new(Locale::En);
        let mut product = product_with_images();
        product.stock = 0;
        assert_eq!(stock_label(&t, &product), t.get("common.out_of_stock"));
        product.stock = 3;
        assert!(stock_label(&t, &product).contains('3'));
        product.stock = 50;
        assert_eq!(stock_label(&t, &product), t.get("common.in_stock"));
    }

    #[test]
    fn test_max_quantity_capped_by_line_limit() {
        let mut product = product_with_images();
        product.stock = 0;
        assert_eq!(max_quantity(&product), 1);
        product.stock = 7;
        assert_eq!(max_quantity(&product), 7);
        product.stock = 500;
        assert_eq!(max_quantity(&product), MAX_LINE_QUANTITY);
    }
}
