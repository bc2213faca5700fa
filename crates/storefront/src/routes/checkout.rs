//! Checkout wizard route handlers.
//!
//! Three steps (shipping, payment, review) kept in the session as a
//! [`CheckoutSession`]. A rejected step re-renders with status 422 and the
//! values the shopper entered; nothing in the session changes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::checkout::{
    CheckoutSession, CheckoutStep, OrderConfirmation, PaymentMethod, PaymentRequest,
    ShippingDetails, ShippingRequest,
};
use dukkan_core::i18n::Translations;

use crate::context::{PageContext, StoreContext};
use crate::error::Result;
use crate::filters;
use crate::middleware::{RequestId, set_current_customer};
use crate::models::{CurrentCustomer, session_keys};
use crate::services::auth::AuthService;
use crate::views::{CartView, count, money};

// =============================================================================
// Form Types
// =============================================================================

/// Shipping step form data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShippingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub postal_code: String,
    pub notes: String,
    /// Checkbox; present when ticked.
    pub create_account: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

impl From<ShippingForm> for ShippingRequest {
    fn from(form: ShippingForm) -> Self {
        Self {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone,
            city: form.city,
            district: form.district,
            street: form.street,
            postal_code: form.postal_code,
            notes: form.notes,
            create_account: form.create_account.is_some(),
            password: form.password,
            confirm_password: form.confirm_password,
        }
    }
}

/// Payment step form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentForm {
    pub method: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl From<PaymentForm> for PaymentRequest {
    fn from(form: PaymentForm) -> Self {
        Self {
            method: form.method,
            card_name: form.card_name,
            card_number: form.card_number,
            expiry: form.expiry,
            cvv: form.cvv,
        }
    }
}

/// Review step form data.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceOrderForm {
    pub accept_terms: Option<String>,
}

// =============================================================================
// View Types
// =============================================================================

/// A step in the progress indicator.
pub struct StepView {
    pub number: String,
    pub label: String,
    pub active: bool,
    pub done: bool,
}

/// Values shown in the shipping form.
#[derive(Default)]
pub struct ShippingFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub postal_code: String,
    pub notes: String,
    pub create_account: bool,
}

impl ShippingFields {
    fn from_details(details: &ShippingDetails) -> Self {
        Self {
            full_name: details.full_name.clone(),
            email: details.email.to_string(),
            phone: details.phone.clone(),
            city: details.city.clone(),
            district: details.district.clone(),
            street: details.street.clone(),
            postal_code: details.postal_code.clone().unwrap_or_default(),
            notes: details.notes.clone().unwrap_or_default(),
            create_account: false,
        }
    }

    fn from_customer(customer: &CurrentCustomer) -> Self {
        Self {
            full_name: customer.name.clone(),
            email: customer.email.to_string(),
            ..Self::default()
        }
    }

    /// Echo a rejected form back. Passwords are never echoed.
    fn from_form(form: &ShippingForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            city: form.city.clone(),
            district: form.district.clone(),
            street: form.street.clone(),
            postal_code: form.postal_code.clone(),
            notes: form.notes.clone(),
            create_account: form.create_account.is_some(),
        }
    }
}

/// A payment method radio button.
pub struct PaymentChoice {
    pub key: &'static str,
    pub label: String,
    pub checked: bool,
    pub needs_card: bool,
}

/// Shipping and payment summary on the review step and confirmation.
pub struct ReviewView {
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub payment: String,
    pub card_last4: Option<String>,
}

impl ReviewView {
    fn new(
        t: &Translations,
        shipping: &ShippingDetails,
        method: PaymentMethod,
        card_last4: Option<&str>,
    ) -> Self {
        let mut address = format!("{}، {}، {}", shipping.street, shipping.district, shipping.city);
        if let Some(code) = &shipping.postal_code {
            address.push_str(&format!(" {code}"));
        }
        Self {
            full_name: shipping.full_name.clone(),
            address,
            phone: shipping.phone.clone(),
            email: shipping.email.to_string(),
            payment: t.get(method.label_key()).to_owned(),
            card_last4: card_last4.map(str::to_owned),
        }
    }
}

/// Checkout wizard template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub page: PageContext,
    /// `shipping`, `payment` or `review`.
    pub step: &'static str,
    pub steps: Vec<StepView>,
    pub shipping: ShippingFields,
    pub logged_in: bool,
    pub payment_methods: Vec<PaymentChoice>,
    pub review: Option<ReviewView>,
    pub summary: CartView,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_complete.html")]
pub struct CompleteTemplate {
    pub page: PageContext,
    pub order_number: String,
    pub placed_at: String,
    pub lines: Vec<OrderLineView>,
    pub subtotal: String,
    pub tax: String,
    pub shipping_fee: String,
    pub total: String,
    pub review: ReviewView,
}

/// One ordered line on the confirmation page.
pub struct OrderLineView {
    pub name: String,
    pub options: String,
    pub quantity: String,
    pub line_total: String,
}

const fn step_key(step: CheckoutStep) -> &'static str {
    match step {
        CheckoutStep::Shipping => "shipping",
        CheckoutStep::Payment => "payment",
        CheckoutStep::Review => "review",
    }
}

fn step_views(t: &Translations, current: CheckoutStep) -> Vec<StepView> {
    CheckoutStep::ALL
        .into_iter()
        .map(|step| StepView {
            number: count(t, step.number()),
            label: t.get(step.label_key()).to_owned(),
            active: step == current,
            done: step < current,
        })
        .collect()
}

// =============================================================================
// Rendering
// =============================================================================

/// Render the wizard at its current step.
async fn render(
    ctx: &StoreContext,
    checkout: &CheckoutSession,
    fields: Option<ShippingFields>,
    error_key: Option<&str>,
) -> Result<CheckoutTemplate> {
    let t = ctx.t();
    let cart = ctx.cart().await?;
    let totals = cart.totals(&ctx.state.config().shipping);
    let step = checkout.step();

    let shipping = fields.unwrap_or_else(|| {
        checkout.shipping().map_or_else(
            || {
                ctx.customer
                    .as_ref()
                    .map(ShippingFields::from_customer)
                    .unwrap_or_default()
            },
            ShippingFields::from_details,
        )
    });
    let chosen = checkout.payment().map(|p| p.method);
    let payment_methods = PaymentMethod::ALL
        .into_iter()
        .map(|m| PaymentChoice {
            key: m.key(),
            label: t.get(m.label_key()).to_owned(),
            checked: chosen.map_or(m == PaymentMethod::Card, |c| c == m),
            needs_card: m.needs_card(),
        })
        .collect();
    let review = checkout
        .shipping()
        .zip(checkout.payment())
        .map(|(s, p)| ReviewView::new(&t, s, p.method, p.card_last4.as_deref()));

    let mut page = ctx.page(t.get("checkout.title")).await?;
    if let Some(key) = error_key {
        page.set_error(key);
    }

    Ok(CheckoutTemplate {
        page,
        step: step_key(step),
        steps: step_views(&t, step),
        shipping,
        logged_in: ctx.customer.is_some(),
        payment_methods,
        review,
        summary: CartView::new(&t, &ctx.base_path(), &cart, &totals),
    })
}

/// Re-render the current step with an error and status 422.
async fn reject(
    ctx: &StoreContext,
    checkout: &CheckoutSession,
    fields: Option<ShippingFields>,
    error_key: &str,
) -> Result<Response> {
    let template = render(ctx, checkout, fields, Some(error_key)).await?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the current wizard step.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn show(ctx: StoreContext) -> Result<Response> {
    if ctx.cart().await?.is_empty() {
        return Ok(ctx
            .redirect_error("/cart", "error.cart_empty")
            .into_response());
    }
    let checkout = ctx.checkout().await?;
    Ok(render(&ctx, &checkout, None, None).await?.into_response())
}

/// Step 1: shipping details, optionally creating an account.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn shipping(ctx: StoreContext, Form(form): Form<ShippingForm>) -> Result<Response> {
    let mut checkout = ctx.checkout().await?;
    let fields = ShippingFields::from_form(&form);

    let new_account = match checkout.submit_shipping(form.into()) {
        Ok(account) => account,
        Err(e) => {
            tracing::debug!("Shipping step rejected: {e}");
            return reject(&ctx, &checkout, Some(fields), e.message_key()).await;
        }
    };

    let mut notice = None;
    if let Some(new_account) = new_account {
        match AuthService::new(ctx.state.accounts())
            .register(&new_account)
            .await
        {
            Ok(account) => {
                set_current_customer(&ctx.session, &CurrentCustomer::from(&account)).await?;
                tracing::info!(email = %account.email.masked(), "Account created at checkout");
                notice = Some("checkout.account_created");
            }
            Err(e) if e.is_user_facing() => {
                // Keep the wizard on step 1.
                let checkout = ctx.checkout().await?;
                return reject(&ctx, &checkout, Some(fields), e.message_key()).await;
            }
            Err(e) => return Err(e.into()),
        }
    }

    ctx.save_checkout(&checkout).await?;
    Ok(match notice {
        Some(key) => ctx.redirect_notice("/checkout", key),
        None => Redirect::to(&ctx.path("/checkout")),
    }
    .into_response())
}

/// Step 2: payment method.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn payment(ctx: StoreContext, Form(form): Form<PaymentForm>) -> Result<Response> {
    let mut checkout = ctx.checkout().await?;
    let today = chrono::Utc::now().date_naive();

    if let Err(e) = checkout.submit_payment(form.into(), today) {
        tracing::debug!("Payment step rejected: {e}");
        return reject(&ctx, &checkout, None, e.message_key()).await;
    }

    ctx.save_checkout(&checkout).await?;
    Ok(Redirect::to(&ctx.path("/checkout")).into_response())
}

/// Go back one step.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn back(ctx: StoreContext) -> Result<Redirect> {
    let mut checkout = ctx.checkout().await?;
    checkout.back();
    ctx.save_checkout(&checkout).await?;
    Ok(Redirect::to(&ctx.path("/checkout")))
}

/// Step 3: place the order.
///
/// Clears the cart, resets the wizard and keeps the confirmation in the
/// session for the completion page. Nothing is sent anywhere.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn place_order(
    ctx: StoreContext,
    RequestId(request_id): RequestId,
    Form(form): Form<PlaceOrderForm>,
) -> Result<Response> {
    let mut checkout = ctx.checkout().await?;
    let mut cart = ctx.cart().await?;

    let confirmation = match checkout.place_order(
        &mut cart,
        &ctx.state.config().shipping,
        form.accept_terms.is_some(),
        chrono::Utc::now(),
        rand::random::<u32>(),
    ) {
        Ok(confirmation) => confirmation,
        Err(e) => {
            tracing::debug!("Order rejected: {e}");
            return reject(&ctx, &checkout, None, e.message_key()).await;
        }
    };

    ctx.save_cart(&cart).await?;
    ctx.save_checkout(&checkout).await?;
    ctx.session
        .insert(&session_keys::last_order(ctx.store_id()), &confirmation)
        .await?;

    tracing::info!(
        order = %confirmation.order_number,
        request_id = %request_id,
        total = %confirmation.totals.total.display(),
        items = confirmation.totals.item_count,
        payment = confirmation.payment.method.key(),
        "Order placed"
    );

    Ok(Redirect::to(&ctx.path("/checkout/complete")).into_response())
}

/// Order confirmation.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn complete(ctx: StoreContext) -> Result<Response> {
    let Some(order) = ctx
        .session
        .get::<OrderConfirmation>(&session_keys::last_order(ctx.store_id()))
        .await?
    else {
        return Ok(Redirect::to(&ctx.base_path()).into_response());
    };

    let t = ctx.t();
    let lines = order
        .items
        .iter()
        .map(|item| OrderLineView {
            name: item.name.clone(),
            options: item.selection.summary(),
            quantity: count(&t, item.quantity),
            line_total: money(&t, &item.line_total()),
        })
        .collect();

    Ok(CompleteTemplate {
        order_number: order.order_number.to_string(),
        placed_at: order.placed_at.format("%Y-%m-%d %H:%M").to_string(),
        lines,
        subtotal: money(&t, &order.totals.subtotal),
        tax: money(&t, &order.totals.tax),
        shipping_fee: if order.totals.free_shipping() {
            t.get("common.free").to_owned()
        } else {
            money(&t, &order.totals.shipping)
        },
        total: money(&t, &order.totals.total),
        review: ReviewView::new(
            &t,
            &order.shipping,
            order.payment.method,
            order.payment.card_last4.as_deref(),
        ),
        page: ctx.page(t.get("checkout.complete_title")).await?,
    }
    .into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::i18n::Locale;

    use super::*;

    #[test]
    fn test_step_views_mark_progress() {
        let t = Translations::new(Locale::En);
        let steps = step_views(&t, CheckoutStep::Payment);
        assert_eq!(steps.len(), 3);
        assert!(steps.first().unwrap().done);
        assert!(steps.get(1).unwrap().active);
        assert!(!steps.get(2).unwrap().done && !steps.get(2).unwrap().active);
    }

    #[test]
    fn test_shipping_form_checkbox() {
        let form = ShippingForm {
            create_account: Some("on".to_string()),
            password: "secret-pass".to_string(),
            ..ShippingForm::default()
        };
        let fields = ShippingFields::from_form(&form);
        assert!(fields.create_account);
        assert!(ShippingRequest::from(form).create_account);
        assert!(!ShippingRequest::from(ShippingForm::default()).create_account);
    }
}
