//! Cart route handlers.
//!
//! The cart lives in the visitor's session, one per store. Every mutation is
//! a plain form POST that redirects back with `?notice=` or `?error=`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::cart::{Cart, CartError, CartTotals, ShippingPolicy, VariantSelection};
use dukkan_core::catalog::OptionKind;
use dukkan_core::i18n::Translations;
use dukkan_core::{LineId, Price, ProductId};

use crate::context::{PageContext, StoreContext};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::views::{CartView, count as format_count, money};

/// Add to cart form data.
///
/// Option fields are named after [`OptionKind::key`]; blank means "not
/// chosen".
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub quantity: Option<u32>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub warranty: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub license: String,
}

impl AddToCartForm {
    fn selection(&self) -> VariantSelection {
        [
            (OptionKind::Size, &self.size),
            (OptionKind::Color, &self.color),
            (OptionKind::Warranty, &self.warranty),
            (OptionKind::AgeGroup, &self.age_group),
            (OptionKind::License, &self.license),
        ]
        .into_iter()
        .fold(VariantSelection::new(), |selection, (kind, value)| {
            selection.with(kind, value.as_str())
        })
    }
}

/// Form data naming one cart line.
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub line_id: i32,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: i32,
    pub quantity: u32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub page: PageContext,
    pub cart: CartView,
    /// "Free shipping over ..." hint while the threshold is not reached.
    pub free_over: Option<String>,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: String,
}

fn free_over_hint(t: &Translations, policy: &ShippingPolicy, totals: &CartTotals) -> Option<String> {
    match *policy {
        ShippingPolicy::FreeOver { threshold, .. } if !totals.free_shipping() => {
            let amount = money(t, &Price::new(threshold, totals.subtotal.currency_code));
            Some(t.format("cart.free_over", &[("amount", &amount)]))
        }
        _ => None,
    }
}

/// Display the cart page.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn show(ctx: StoreContext) -> Result<CartTemplate> {
    let t = ctx.t();
    let policy = ctx.state.config().shipping;
    let cart = ctx.cart().await?;
    let totals = cart.totals(&policy);

    Ok(CartTemplate {
        cart: CartView::new(&t, &ctx.base_path(), &cart, &totals),
        free_over: free_over_hint(&t, &policy, &totals),
        page: ctx.page(t.get("cart.title")).await?,
    })
}

/// Cart count badge.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn count(ctx: StoreContext) -> Result<CartCountTemplate> {
    let cart = ctx.cart().await?;
    Ok(CartCountTemplate {
        count: format_count(&ctx.t(), cart.item_count()),
    })
}

/// Add a product to the cart.
///
/// Missing or invalid options send the shopper back to the product page
/// with the matching message; nothing is added.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn add(ctx: StoreContext, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let product = ctx
        .catalog
        .product(ProductId::new(form.product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;
    let mut cart = ctx.cart().await?;

    match cart.add(product, form.selection(), form.quantity.unwrap_or(1)) {
        Ok(line) => {
            ctx.save_cart(&cart).await?;
            add_breadcrumb(
                "cart",
                "Added to cart",
                Some(&[("product_id", &product.id.to_string())]),
            );
            tracing::info!(product = %product.id, line = %line, "Added to cart");
            Ok(ctx.redirect_notice("/cart", "cart.added"))
        }
        Err(e) => {
            tracing::debug!(product = %product.id, "Add to cart rejected: {e}");
            Ok(ctx.redirect_error(&format!("/products/{}", product.id), e.message_key()))
        }
    }
}

/// Apply `op` to the session cart and redirect back to the cart page.
async fn mutate<T>(
    ctx: &StoreContext,
    notice: &str,
    op: impl FnOnce(&mut Cart) -> std::result::Result<T, CartError>,
) -> Result<Redirect> {
    let mut cart = ctx.cart().await?;
    match op(&mut cart) {
        Ok(_) => {
            ctx.save_cart(&cart).await?;
            Ok(ctx.redirect_notice("/cart", notice))
        }
        Err(e) => {
            tracing::debug!("Cart update rejected: {e}");
            Ok(ctx.redirect_error("/cart", e.message_key()))
        }
    }
}

/// Increase a line by one.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn increment(ctx: StoreContext, Form(form): Form<LineForm>) -> Result<Redirect> {
    mutate(&ctx, "cart.updated", |cart| cart.increment(LineId::new(form.line_id))).await
}

/// Decrease a line by one, stopping at 1.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn decrement(ctx: StoreContext, Form(form): Form<LineForm>) -> Result<Redirect> {
    mutate(&ctx, "cart.updated", |cart| cart.decrement(LineId::new(form.line_id))).await
}

/// Set a line's quantity; zero removes it.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn update(ctx: StoreContext, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    mutate(&ctx, "cart.updated", |cart| {
        cart.set_quantity(LineId::new(form.line_id), form.quantity)
    })
    .await
}

/// Remove a line.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn remove(ctx: StoreContext, Form(form): Form<LineForm>) -> Result<Redirect> {
    mutate(&ctx, "cart.removed", |cart| cart.remove(LineId::new(form.line_id))).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::i18n::Locale;
    use rust_decimal::Decimal;

    use super::*;

    fn form(size: &str) -> AddToCartForm {
        AddToCartForm {
            product_id: 1,
            quantity: None,
            size: size.to_string(),
            color: String::new(),
            warranty: " ".to_string(),
            age_group: String::new(),
            license: String::new(),
        }
    }

    #[test]
    fn test_selection_skips_blank_fields() {
        let selection = form("M").selection();
        assert_eq!(selection.get(OptionKind::Size), Some("M"));
        assert_eq!(selection.get(OptionKind::Warranty), None);
        assert_eq!(selection.iter().count(), 1);
        assert!(form("").selection().is_empty());
    }

    #[test]
    fn test_free_over_hint_only_below_threshold() {
        let t = Translations::new(Locale::En);
        let policy = ShippingPolicy::FreeOver {
            threshold: Decimal::from(300),
            fee: Decimal::from(25),
        };
        let cart = Cart::new();
        let empty = cart.totals(&policy);
        // Empty carts never pay shipping, so no hint.
        assert_eq!(free_over_hint(&t, &policy, &empty), None);
        assert_eq!(free_over_hint(&t, &ShippingPolicy::Free, &empty), None);

        let mut below = empty;
        below.shipping = Price::sar(25);
        let hint = free_over_hint(&t, &policy, &below).unwrap();
        assert!(hint.contains("300.00"));
    }
}
