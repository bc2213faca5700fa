//! Display models for templates.
//!
//! Templates only print strings. Prices, counts and ratings are formatted
//! here for the page locale.

use dukkan_core::cart::{Cart, CartTotals};
use dukkan_core::catalog::{Category, Product, StoreCatalog};
use dukkan_core::i18n::{Locale, Translations};
use dukkan_core::rtl::to_arabic_digits;
use dukkan_core::{Price, ProductId};

/// Render digits for the page locale.
#[must_use]
pub fn localize_digits(t: &Translations, text: &str) -> String {
    match t.locale() {
        Locale::Ar => to_arabic_digits(text),
        Locale::En => text.to_owned(),
    }
}

/// Format a price for display, e.g. `٢٩٩٫٠٠ ر.س`.
#[must_use]
pub fn money(t: &Translations, price: &Price) -> String {
    localize_digits(t, &price.display())
}

/// Format a count for display.
#[must_use]
pub fn count(t: &Translations, n: impl ToString) -> String {
    localize_digits(t, &n.to_string())
}

/// A five-star row, e.g. `★★★★☆`.
#[must_use]
pub fn stars(full: u8) -> String {
    let full = usize::from(full.min(5));
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// A link in the header navigation.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

/// Product tile used on the home, category and product pages.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: i32,
    pub href: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: Option<String>,
    pub image: Option<String>,
    pub rating: String,
    pub stars: String,
    pub reviews: String,
    pub badge: Option<String>,
    pub in_stock: bool,
    pub wishlisted: bool,
    /// Form action for the wishlist toggle.
    pub wishlist_action: String,
}

impl ProductCard {
    #[must_use]
    pub fn new(t: &Translations, base_path: &str, product: &Product, wishlisted: bool) -> Self {
        Self {
            id: product.id.as_i32(),
            href: format!("{base_path}/products/{}", product.id),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: money(t, &product.price),
            original_price: product.original_price.as_ref().map(|p| money(t, p)),
            discount: product
                .discount_percent()
                .map(|n| t.format("product.discount", &[("n", &count(t, n))])),
            image: product.primary_image().map(str::to_owned),
            rating: localize_digits(t, &product.rating()),
            stars: stars(product.full_stars()),
            reviews: t.format("common.reviews", &[("n", &count(t, product.review_count))]),
            badge: product.badge.clone(),
            in_stock: product.in_stock(),
            wishlisted,
            wishlist_action: format!("{base_path}/wishlist/toggle"),
        }
    }

    /// Cards for a list of products.
    #[must_use]
    pub fn list<'a>(
        t: &Translations,
        base_path: &str,
        products: impl IntoIterator<Item = &'a Product>,
        wishlist: &[ProductId],
    ) -> Vec<Self> {
        products
            .into_iter()
            .map(|p| Self::new(t, base_path, p, wishlist.contains(&p.id)))
            .collect()
    }
}

/// Category tile.
#[derive(Debug, Clone)]
pub struct CategoryCard {
    pub href: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub product_count: String,
}

impl CategoryCard {
    #[must_use]
    pub fn new(t: &Translations, base_path: &str, catalog: &StoreCatalog, category: &Category) -> Self {
        let n = catalog.products_in(category.id).count();
        Self {
            href: format!("{base_path}/categories/{}", category.id),
            name: category.name.clone(),
            description: category.description.clone(),
            image: category.image.clone(),
            product_count: t.format("category.products_count", &[("n", &count(t, n))]),
        }
    }
}

/// One cart line for display.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: i32,
    pub name: String,
    pub href: String,
    pub image: Option<String>,
    pub options: String,
    pub unit_price: String,
    pub line_total: String,
    pub quantity: u32,
    pub quantity_label: String,
    pub at_min: bool,
    pub at_max: bool,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub tax: String,
    pub shipping: String,
    pub free_shipping: bool,
    pub total: String,
    pub item_count: String,
    pub is_empty: bool,
}

impl CartView {
    #[must_use]
    pub fn new(t: &Translations, base_path: &str, cart: &Cart, totals: &CartTotals) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| CartLineView {
                id: item.id.as_i32(),
                name: item.name.clone(),
                href: format!("{base_path}/products/{}", item.product_id),
                image: item.image.clone(),
                options: item.selection.summary(),
                unit_price: money(t, &item.unit_price),
                line_total: money(t, &item.line_total()),
                quantity: item.quantity,
                quantity_label: count(t, item.quantity),
                at_min: item.quantity <= 1,
                at_max: item.quantity >= item.max_quantity,
            })
            .collect();

        Self {
            lines,
            subtotal: money(t, &totals.subtotal),
            tax: money(t, &totals.tax),
            shipping: if totals.free_shipping() {
                t.get("common.free").to_owned()
            } else {
                money(t, &totals.shipping)
            },
            free_shipping: totals.free_shipping(),
            total: money(t, &totals.total),
            item_count: count(t, totals.item_count),
            is_empty: cart.is_empty(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::cart::{ShippingPolicy, VariantSelection};
    use dukkan_core::catalog::StoreDirectory;

    use super::*;

    #[test]
    fn test_money_uses_arabic_digits() {
        let ar = Translations::new(Locale::Ar);
        let en = Translations::new(Locale::En);
        let price = Price::sar(299);
        assert_eq!(money(&ar, &price), to_arabic_digits(&price.display()));
        assert!(money(&en, &price).starts_with("299.00"));
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_cart_view_formats_totals() {
        let t = Translations::new(Locale::En);
        let directory = StoreDirectory::demo();
        let store = directory.iter().next().unwrap();
        let product = store.products.iter().find(|p| p.options.is_empty()).unwrap();
        let mut cart = Cart::new();
        cart.add(product, VariantSelection::new(), 1).unwrap();
        let totals = cart.totals(&ShippingPolicy::Free);

        let view = CartView::new(&t, "/stores/x", &cart, &totals);
        assert!(!view.is_empty);
        assert_eq!(view.lines.len(), 1);
        assert!(view.lines.first().unwrap().at_min);
        assert_eq!(view.shipping, t.get("common.free"));
        assert_eq!(view.item_count, "1");
    }
}
