//! Store catalogs.
//!
//! Each demo store runs one theme and carries a small hard-coded catalog:
//! categories, products with their variant options, hero slides and the
//! about/contact copy. There is no create/update/delete path; the catalog is
//! built once at startup and shared read-only.

mod demo;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeKind;
use crate::types::{CategoryId, Price, ProductId, StoreId};

/// Kind of variant option a product can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Size,
    Color,
    Warranty,
    AgeGroup,
    License,
}

impl OptionKind {
    /// Form field name and session key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Color => "color",
            Self::Warranty => "warranty",
            Self::AgeGroup => "age_group",
            Self::License => "license",
        }
    }

    /// Parse from a form field name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        [
            Self::Size,
            Self::Color,
            Self::Warranty,
            Self::AgeGroup,
            Self::License,
        ]
        .into_iter()
        .find(|k| k.key() == key)
    }

    /// Translation key for the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Size => "option.size",
            Self::Color => "option.color",
            Self::Warranty => "option.warranty",
            Self::AgeGroup => "option.age_group",
            Self::License => "option.license",
        }
    }

    /// Translation key for the "please choose" message.
    #[must_use]
    pub const fn required_message_key(self) -> &'static str {
        match self {
            Self::Size => "error.select_size",
            Self::Color => "error.select_color",
            Self::Warranty => "error.select_warranty",
            Self::AgeGroup => "error.select_age_group",
            Self::License => "error.select_license",
        }
    }
}

/// A variant option group, e.g. sizes S/M/L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub kind: OptionKind,
    pub values: Vec<String>,
}

/// A product in a store catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category_id: CategoryId,
    pub price: Price,
    pub original_price: Option<Price>,
    pub images: Vec<String>,
    /// Average rating in tenths of a star (45 = 4.5 stars).
    pub rating_tenths: u8,
    pub review_count: u32,
    pub stock: u32,
    pub options: Vec<ProductOption>,
    pub description: String,
    pub features: Vec<String>,
    pub badge: Option<String>,
}

impl Product {
    /// Rating formatted with one decimal, e.g. `4.5`.
    #[must_use]
    pub fn rating(&self) -> String {
        format!("{}.{}", self.rating_tenths / 10, self.rating_tenths % 10)
    }

    /// Number of filled stars when rendering a five-star row.
    #[must_use]
    pub fn full_stars(&self) -> u8 {
        self.rating_tenths.saturating_add(5) / 10
    }

    /// Main image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The option group of the given kind.
    #[must_use]
    pub fn option(&self, kind: OptionKind) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.kind == kind)
    }

    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Discount against the original price, in whole percent.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .as_ref()
            .and_then(|original| self.price.discount_percent_from(original))
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub image: String,
}

/// One slide of the home page hero slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    /// Relative to the store root, e.g. `categories/1`.
    pub cta_path: String,
    pub image: String,
}

/// Store identity and static page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub id: StoreId,
    pub name: String,
    pub tagline: String,
    pub theme: ThemeKind,
    pub about: AboutContent,
    pub contact: ContactDetails,
}

/// About page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub story: String,
    pub values: Vec<AboutValue>,
    pub founded_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutValue {
    pub title: String,
    pub body: String,
}

/// Contact page details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub hours: String,
}

/// A store with its full catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCatalog {
    pub profile: StoreProfile,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub slides: Vec<HeroSlide>,
}

impl StoreCatalog {
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Products in a category, in catalog order.
    pub fn products_in(&self, category: CategoryId) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.category_id == category)
    }

    /// Products for the featured section: badged products first, then the
    /// rest in catalog order.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        let (badged, plain): (Vec<&Product>, Vec<&Product>) =
            self.products.iter().partition(|p| p.badge.is_some());
        badged.into_iter().chain(plain).take(limit).collect()
    }

    /// Other products from the same category, falling back to the rest of
    /// the catalog when the category is small.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        let same = self
            .products
            .iter()
            .filter(|p| p.id != product.id && p.category_id == product.category_id);
        let other = self
            .products
            .iter()
            .filter(|p| p.id != product.id && p.category_id != product.category_id);
        same.chain(other).take(limit).collect()
    }
}

/// All stores known to the running instance.
///
/// Catalogs are shared behind `Arc` so request handlers can hold one past
/// the lookup.
#[derive(Debug, Clone)]
pub struct StoreDirectory {
    stores: Vec<Arc<StoreCatalog>>,
}

impl StoreDirectory {
    /// The demo directory: one store per theme.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            stores: demo::stores().into_iter().map(Arc::new).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &StoreId) -> Option<&Arc<StoreCatalog>> {
        self.stores.iter().find(|s| &s.profile.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<StoreCatalog>> {
        self.stores.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_demo_has_one_store_per_theme() {
        let directory = StoreDirectory::demo();
        let themes: HashSet<ThemeKind> = directory.iter().map(|s| s.profile.theme).collect();
        assert_eq!(themes.len(), ThemeKind::ALL.len());
        assert_eq!(directory.len(), ThemeKind::ALL.len());
    }

    #[test]
    fn test_demo_products_reference_known_categories() {
        for store in StoreDirectory::demo().iter() {
            assert!(!store.products.is_empty(), "{}", store.profile.id);
            assert!(!store.slides.is_empty(), "{}", store.profile.id);
            for product in &store.products {
                assert!(
                    store.category(product.category_id).is_some(),
                    "{} product {} has unknown category",
                    store.profile.id,
                    product.id
                );
                for option in &product.options {
                    assert!(!option.values.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_demo_product_ids_unique_per_store() {
        for store in StoreDirectory::demo().iter() {
            let ids: HashSet<ProductId> = store.products.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), store.products.len());
        }
    }

    #[test]
    fn test_rating_formatting() {
        let store = StoreDirectory::demo();
        let product = store.iter().next().unwrap().products.first().unwrap().clone();
        let product = Product {
            rating_tenths: 45,
            ..product
        };
        assert_eq!(product.rating(), "4.5");
        assert_eq!(product.full_stars(), 5);
        let product = Product {
            rating_tenths: 42,
            ..product
        };
        assert_eq!(product.full_stars(), 4);
    }

    #[test]
    fn test_related_excludes_self_and_prefers_category() {
        let directory = StoreDirectory::demo();
        let store = directory.iter().next().unwrap();
        let product = store.products.first().unwrap();
        let related = store.related(product, 3);
        assert!(related.iter().all(|p| p.id != product.id));
        if let Some(first) = related.first()
            && store.products_in(product.category_id).count() > 1
        {
            assert_eq!(first.category_id, product.category_id);
        }
    }

    #[test]
    fn test_featured_puts_badged_first() {
        for store in StoreDirectory::demo().iter() {
            let featured = store.featured(store.products.len());
            let first_plain = featured.iter().position(|p| p.badge.is_none());
            if let Some(idx) = first_plain {
                assert!(featured.iter().skip(idx).all(|p| p.badge.is_none()));
            }
        }
    }
}
