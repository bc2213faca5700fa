//! Shopping cart lines, variant selection and totals.
//!
//! The cart is plain data: the storefront keeps one per store in the
//! visitor's session and calls these methods from its handlers.
//!
//! Totals follow one rule set for every theme:
//! - subtotal = Σ unit price × quantity
//! - tax = subtotal × 15%, rounded to 2 dp half away from zero
//! - shipping = per [`ShippingPolicy`]
//! - total = subtotal + tax + shipping

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{OptionKind, Product};
use crate::types::{CurrencyCode, LineId, Price, ProductId};

/// VAT rate applied to the subtotal (15%).
pub const TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Upper bound for a single line, regardless of stock.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Errors from cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("a {0:?} must be selected")]
    MissingOption(OptionKind),
    #[error("invalid {0:?} selection")]
    InvalidOption(OptionKind),
    #[error("product is out of stock")]
    OutOfStock,
    #[error("only {available} left in stock")]
    QuantityExceedsStock { available: u32 },
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("cart line {0} not found")]
    LineNotFound(LineId),
}

impl CartError {
    /// Translation key for the message shown to the shopper.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::MissingOption(kind) => kind.required_message_key(),
            Self::InvalidOption(_) => "error.invalid_option",
            Self::OutOfStock => "error.out_of_stock",
            Self::QuantityExceedsStock { .. } => "error.exceeds_stock",
            Self::InvalidQuantity => "error.invalid_quantity",
            Self::LineNotFound(_) => "error.line_not_found",
        }
    }

    /// Short code used in `?error=` redirects.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingOption(kind) => match kind {
                OptionKind::Size => "select_size",
                OptionKind::Color => "select_color",
                OptionKind::Warranty => "select_warranty",
                OptionKind::AgeGroup => "select_age_group",
                OptionKind::License => "select_license",
            },
            Self::InvalidOption(_) => "invalid_option",
            Self::OutOfStock => "out_of_stock",
            Self::QuantityExceedsStock { .. } => "exceeds_stock",
            Self::InvalidQuantity => "invalid_quantity",
            Self::LineNotFound(_) => "line_not_found",
        }
    }
}

/// Chosen value per option kind, e.g. `{size: "M", color: "أسود"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSelection(BTreeMap<OptionKind, String>);

impl VariantSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice. Blank values are treated as "not chosen".
    pub fn choose(&mut self, kind: OptionKind, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&kind);
        } else {
            self.0.insert(kind, value.trim().to_owned());
        }
    }

    /// Builder-style [`choose`](Self::choose).
    #[must_use]
    pub fn with(mut self, kind: OptionKind, value: impl Into<String>) -> Self {
        self.choose(kind, value);
        self
    }

    #[must_use]
    pub fn get(&self, kind: OptionKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKind, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the selection against the product's option groups.
    ///
    /// Every group the product has must be chosen with one of its values, in
    /// option order, and no choice may name a group the product lacks.
    ///
    /// # Errors
    ///
    /// Returns `CartError::MissingOption` for the first unchosen group and
    /// `CartError::InvalidOption` for an unknown value or group.
    pub fn validate_for(&self, product: &Product) -> Result<(), CartError> {
        for option in &product.options {
            let chosen = self
                .get(option.kind)
                .ok_or(CartError::MissingOption(option.kind))?;
            if !option.values.iter().any(|v| v == chosen) {
                return Err(CartError::InvalidOption(option.kind));
            }
        }
        if let Some((kind, _)) = self.0.iter().find(|(k, _)| product.option(**k).is_none()) {
            return Err(CartError::InvalidOption(*kind));
        }
        Ok(())
    }

    /// Human-readable summary, e.g. `M / أسود`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.0.values().cloned().collect::<Vec<_>>().join(" / ")
    }
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: LineId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub selection: VariantSelection,
    pub image: Option<String>,
    /// Stock at the time the line was added; caps increments.
    pub max_quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.unit_price.amount * Decimal::from(self.quantity),
            self.unit_price.currency_code,
        )
    }
}

/// How shipping is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShippingPolicy {
    /// Shipping is always free.
    #[default]
    Free,
    /// A flat fee per order.
    Flat { fee: Decimal },
    /// A flat fee waived once the subtotal reaches the threshold.
    FreeOver { threshold: Decimal, fee: Decimal },
}

impl ShippingPolicy {
    /// Fee for a given subtotal. Empty carts never pay shipping.
    #[must_use]
    pub fn fee_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal.is_zero() {
            return Decimal::ZERO;
        }
        match *self {
            Self::Free => Decimal::ZERO,
            Self::Flat { fee } => fee,
            Self::FreeOver { threshold, fee } => {
                if subtotal >= threshold {
                    Decimal::ZERO
                } else {
                    fee
                }
            }
        }
    }
}

/// Computed cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub tax: Price,
    pub shipping: Price,
    pub total: Price,
    pub item_count: u32,
}

impl CartTotals {
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.amount.is_zero()
    }
}

/// A shopper's cart for one store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    next_line: i32,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn item(&self, id: LineId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Add a product with the chosen variant.
    ///
    /// A product already in the cart with the same selection is merged into
    /// its existing line.
    ///
    /// # Errors
    ///
    /// Returns an error if an option is missing or invalid, the product is
    /// out of stock, the quantity is zero, or the resulting line quantity
    /// would exceed stock.
    pub fn add(
        &mut self,
        product: &Product,
        selection: VariantSelection,
        quantity: u32,
    ) -> Result<LineId, CartError> {
        selection.validate_for(product)?;
        if !product.in_stock() {
            return Err(CartError::OutOfStock);
        }
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let cap = product.stock.min(MAX_LINE_QUANTITY);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id && i.selection == selection)
        {
            let wanted = existing.quantity.saturating_add(quantity);
            if wanted > cap {
                return Err(CartError::QuantityExceedsStock { available: cap });
            }
            existing.quantity = wanted;
            return Ok(existing.id);
        }

        if quantity > cap {
            return Err(CartError::QuantityExceedsStock { available: cap });
        }
        self.next_line += 1;
        let id = LineId::new(self.next_line);
        self.items.push(CartItem {
            id,
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            selection,
            image: product.primary_image().map(str::to_owned),
            max_quantity: cap,
        });
        Ok(id)
    }

    /// Increase a line by one.
    ///
    /// # Errors
    ///
    /// Returns `LineNotFound` or `QuantityExceedsStock`.
    pub fn increment(&mut self, id: LineId) -> Result<u32, CartError> {
        let item = self.item_mut(id)?;
        if item.quantity >= item.max_quantity {
            return Err(CartError::QuantityExceedsStock {
                available: item.max_quantity,
            });
        }
        item.quantity += 1;
        Ok(item.quantity)
    }

    /// Decrease a line by one, stopping at 1.
    ///
    /// # Errors
    ///
    /// Returns `LineNotFound`.
    pub fn decrement(&mut self, id: LineId) -> Result<u32, CartError> {
        let item = self.item_mut(id)?;
        item.quantity = item.quantity.saturating_sub(1).max(1);
        Ok(item.quantity)
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns `LineNotFound` or `QuantityExceedsStock`.
    pub fn set_quantity(&mut self, id: LineId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(id).map(|_| ());
        }
        let item = self.item_mut(id)?;
        if quantity > item.max_quantity {
            return Err(CartError::QuantityExceedsStock {
                available: item.max_quantity,
            });
        }
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns `LineNotFound`.
    pub fn remove(&mut self, id: LineId) -> Result<CartItem, CartError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(CartError::LineNotFound(id))?;
        Ok(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    fn currency(&self) -> CurrencyCode {
        self.items
            .first()
            .map(|i| i.unit_price.currency_code)
            .unwrap_or_default()
    }

    /// Σ unit price × quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let amount = self
            .items
            .iter()
            .map(|i| i.line_total().amount)
            .sum::<Decimal>();
        Price::new(amount, self.currency())
    }

    /// Compute subtotal, tax, shipping and total.
    #[must_use]
    pub fn totals(&self, shipping: &ShippingPolicy) -> CartTotals {
        let currency = self.currency();
        let subtotal = self.subtotal();
        let tax = Price::new(subtotal.amount * TAX_RATE, currency).rounded();
        let shipping = Price::new(shipping.fee_for(subtotal.amount), currency);
        let total = Price::new(
            subtotal.amount + tax.amount + shipping.amount,
            currency,
        );
        CartTotals {
            subtotal,
            tax,
            shipping,
            total,
            item_count: self.item_count(),
        }
    }

    fn item_mut(&mut self, id: LineId) -> Result<&mut CartItem, CartError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CartError::LineNotFound(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::ProductOption;
    use crate::types::CategoryId;

    fn product(id: i32, price: i64, options: Vec<ProductOption>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("منتج {id}"),
            brand: "اختبار".to_owned(),
            category_id: CategoryId::new(1),
            price: Price::sar(price),
            original_price: None,
            images: vec![format!("/static/images/p{id}.jpg")],
            rating_tenths: 45,
            review_count: 10,
            stock: 10,
            options,
            description: String::new(),
            features: Vec::new(),
            badge: None,
        }
    }

    fn sized() -> Vec<ProductOption> {
        vec![ProductOption {
            kind: OptionKind::Size,
            values: vec!["S".to_owned(), "M".to_owned()],
        }]
    }

    #[test]
    fn test_totals_match_reference_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, 299, Vec::new()), VariantSelection::new(), 2)
            .unwrap();
        cart.add(&product(2, 199, Vec::new()), VariantSelection::new(), 1)
            .unwrap();

        let totals = cart.totals(&ShippingPolicy::Free);
        assert_eq!(totals.subtotal.amount, Decimal::from(797));
        assert_eq!(totals.tax.amount, Decimal::new(11955, 2));
        assert_eq!(totals.shipping.amount, Decimal::ZERO);
        assert_eq!(totals.total.amount, Decimal::new(91655, 2));
        assert_eq!(totals.item_count, 3);
        assert!(totals.free_shipping());
    }

    #[test]
    fn test_totals_include_flat_shipping() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100, Vec::new()), VariantSelection::new(), 1)
            .unwrap();
        let totals = cart.totals(&ShippingPolicy::Flat {
            fee: Decimal::from(25),
        });
        assert_eq!(
            totals.total.amount,
            totals.subtotal.amount + totals.tax.amount + Decimal::from(25)
        );
    }

    #[test]
    fn test_free_over_threshold() {
        let policy = ShippingPolicy::FreeOver {
            threshold: Decimal::from(200),
            fee: Decimal::from(30),
        };
        assert_eq!(policy.fee_for(Decimal::from(150)), Decimal::from(30));
        assert_eq!(policy.fee_for(Decimal::from(200)), Decimal::ZERO);
        assert_eq!(policy.fee_for(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_add_requires_variant_selection() {
        let mut cart = Cart::new();
        let shirt = product(1, 149, sized());

        let err = cart.add(&shirt, VariantSelection::new(), 1).unwrap_err();
        assert_eq!(err, CartError::MissingOption(OptionKind::Size));
        assert_eq!(err.code(), "select_size");
        assert!(cart.is_empty());

        let err = cart
            .add(&shirt, VariantSelection::new().with(OptionKind::Size, "XXL"), 1)
            .unwrap_err();
        assert_eq!(err, CartError::InvalidOption(OptionKind::Size));

        cart.add(&shirt, VariantSelection::new().with(OptionKind::Size, "M"), 1)
            .unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_blank_choice_counts_as_missing() {
        let shirt = product(1, 149, sized());
        let selection = VariantSelection::new().with(OptionKind::Size, "  ");
        assert_eq!(
            selection.validate_for(&shirt),
            Err(CartError::MissingOption(OptionKind::Size))
        );
    }

    #[test]
    fn test_selection_for_unknown_group_rejected() {
        let mug = product(1, 49, Vec::new());
        let selection = VariantSelection::new().with(OptionKind::Color, "أحمر");
        assert_eq!(
            selection.validate_for(&mug),
            Err(CartError::InvalidOption(OptionKind::Color))
        );
    }

    #[test]
    fn test_same_variant_merges_lines() {
        let mut cart = Cart::new();
        let shirt = product(1, 149, sized());
        let m = VariantSelection::new().with(OptionKind::Size, "M");
        let first = cart.add(&shirt, m.clone(), 1).unwrap();
        let second = cart.add(&shirt, m, 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item(first).unwrap().quantity, 3);

        cart.add(&shirt, VariantSelection::new().with(OptionKind::Size, "S"), 1)
            .unwrap();
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = Cart::new();
        let line = cart
            .add(&product(1, 10, Vec::new()), VariantSelection::new(), 2)
            .unwrap();
        assert_eq!(cart.decrement(line).unwrap(), 1);
        assert_eq!(cart.decrement(line).unwrap(), 1);
    }

    #[test]
    fn test_increment_capped_by_stock() {
        let mut cart = Cart::new();
        let mut scarce = product(1, 10, Vec::new());
        scarce.stock = 2;
        let line = cart.add(&scarce, VariantSelection::new(), 2).unwrap();
        assert_eq!(
            cart.increment(line),
            Err(CartError::QuantityExceedsStock { available: 2 })
        );
    }

    #[test]
    fn test_out_of_stock_rejected() {
        let mut cart = Cart::new();
        let mut gone = product(1, 10, Vec::new());
        gone.stock = 0;
        assert_eq!(
            cart.add(&gone, VariantSelection::new(), 1),
            Err(CartError::OutOfStock)
        );
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let line = cart
            .add(&product(1, 10, Vec::new()), VariantSelection::new(), 2)
            .unwrap();
        cart.set_quantity(line, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.remove(line), Err(CartError::LineNotFound(line)));
    }

    #[test]
    fn test_cart_survives_session_serialization() {
        let mut cart = Cart::new();
        cart.add(
            &product(1, 149, sized()),
            VariantSelection::new().with(OptionKind::Size, "S"),
            1,
        )
        .unwrap();
        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
