//! Three-step checkout wizard.
//!
//! Step 1 collects shipping details (optionally with a new account), step 2
//! the payment method, step 3 shows a review and places the order. The
//! wizard lives in the visitor's session between requests.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::{AccountFormError, NewAccount};
use crate::cart::{Cart, CartItem, CartTotals, ShippingPolicy};
use crate::types::{Email, EmailError};

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    /// 1-based step number for the progress indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }

    /// Translation key for the step title.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Shipping => "checkout.step_shipping",
            Self::Payment => "checkout.step_payment",
            Self::Review => "checkout.step_review",
        }
    }

    /// The previous step; the first step stays put.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Shipping | Self::Payment => Self::Shipping,
            Self::Review => Self::Payment,
        }
    }

    pub const ALL: [Self; 3] = [Self::Shipping, Self::Payment, Self::Review];
}

/// Why a checkout step was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("invalid phone number")]
    InvalidPhone,
    #[error(transparent)]
    Account(#[from] AccountFormError),
    #[error("unknown payment method")]
    UnknownPaymentMethod,
    #[error("invalid card number")]
    InvalidCardNumber,
    #[error("invalid expiry date")]
    InvalidExpiry,
    #[error("card has expired")]
    CardExpired,
    #[error("invalid security code")]
    InvalidCvv,
    #[error("terms must be accepted")]
    TermsNotAccepted,
    #[error("cart is empty")]
    EmptyCart,
    #[error("previous checkout step not completed")]
    StepNotReady,
}

impl CheckoutError {
    /// Translation key for the message shown on the step.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "error.required_fields",
            Self::InvalidEmail(_) => "error.invalid_email",
            Self::InvalidPhone => "error.invalid_phone",
            Self::Account(e) => e.message_key(),
            Self::UnknownPaymentMethod => "error.payment_method",
            Self::InvalidCardNumber => "error.card_number",
            Self::InvalidExpiry => "error.card_expiry",
            Self::CardExpired => "error.card_expired",
            Self::InvalidCvv => "error.card_cvv",
            Self::TermsNotAccepted => "error.terms_required",
            Self::EmptyCart => "error.cart_empty",
            Self::StepNotReady => "error.checkout_step",
        }
    }
}

/// Raw shipping step input.
#[derive(Clone, Default)]
pub struct ShippingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub postal_code: String,
    pub notes: String,
    pub create_account: bool,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for ShippingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("city", &self.city)
            .field("create_account", &self.create_account)
            .finish_non_exhaustive()
    }
}

/// Validated shipping details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: Email,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
}

fn required(value: &str, field: &'static str) -> Result<String, CheckoutError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CheckoutError::MissingField(field));
    }
    Ok(value.to_owned())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Normalize a phone number to `+` and digits; 9 to 15 digits.
fn normalize_phone(raw: &str) -> Result<String, CheckoutError> {
    let raw = raw.trim();
    let (plus, rest) = raw
        .strip_prefix('+')
        .map_or(("", raw), |rest| ("+", rest));
    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' => {}
            _ => return Err(CheckoutError::InvalidPhone),
        }
    }
    if !(9..=15).contains(&digits.len()) {
        return Err(CheckoutError::InvalidPhone);
    }
    Ok(format!("{plus}{digits}"))
}

impl ShippingRequest {
    /// Validate the shipping step.
    ///
    /// When `create_account` is set the password pair is checked too and
    /// the returned [`NewAccount`] should be stored by the caller.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(self) -> Result<(ShippingDetails, Option<NewAccount>), CheckoutError> {
        let full_name = required(&self.full_name, "full_name")?;
        let email = Email::parse(&self.email)?;
        let phone = normalize_phone(&required(&self.phone, "phone")?)?;
        let city = required(&self.city, "city")?;
        let district = required(&self.district, "district")?;
        let street = required(&self.street, "street")?;

        let account = if self.create_account {
            Some(NewAccount::from_checkout(
                &full_name,
                &email,
                &self.password,
                &self.confirm_password,
            )?)
        } else {
            None
        };

        Ok((
            ShippingDetails {
                full_name,
                email,
                phone,
                city,
                district,
                street,
                postal_code: optional(&self.postal_code),
                notes: optional(&self.notes),
            },
            account,
        ))
    }
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Mada,
    ApplePay,
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::Card, Self::Mada, Self::ApplePay, Self::CashOnDelivery];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Mada => "mada",
            Self::ApplePay => "apple_pay",
            Self::CashOnDelivery => "cash_on_delivery",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Card => "payment.card",
            Self::Mada => "payment.mada",
            Self::ApplePay => "payment.apple_pay",
            Self::CashOnDelivery => "payment.cash_on_delivery",
        }
    }

    /// Whether card fields must be filled in.
    #[must_use]
    pub const fn needs_card(self) -> bool {
        matches!(self, Self::Card | Self::Mada)
    }
}

/// Raw payment step input.
#[derive(Clone, Default)]
pub struct PaymentRequest {
    pub method: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl std::fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Validated payment choice. Only the last four card digits are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub card_last4: Option<String>,
}

fn luhn_valid(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Parse `MM/YY` and reject past months.
fn check_expiry(raw: &str, today: NaiveDate) -> Result<(), CheckoutError> {
    let (month, year) = raw
        .trim()
        .split_once('/')
        .ok_or(CheckoutError::InvalidExpiry)?;
    let month: u32 = month.trim().parse().map_err(|_| CheckoutError::InvalidExpiry)?;
    let year: i32 = year.trim().parse().map_err(|_| CheckoutError::InvalidExpiry)?;
    if !(1..=12).contains(&month) || !(0..=99).contains(&year) {
        return Err(CheckoutError::InvalidExpiry);
    }
    let year = 2000 + year;
    if (year, month) < (today.year(), today.month()) {
        return Err(CheckoutError::CardExpired);
    }
    Ok(())
}

impl PaymentRequest {
    /// Validate the payment step against `today` for the expiry check.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown method or, for card methods, invalid
    /// card details.
    pub fn validate(self, today: NaiveDate) -> Result<PaymentDetails, CheckoutError> {
        let method =
            PaymentMethod::from_key(self.method.trim()).ok_or(CheckoutError::UnknownPaymentMethod)?;
        if !method.needs_card() {
            return Ok(PaymentDetails {
                method,
                card_last4: None,
            });
        }

        required(&self.card_name, "card_name")?;
        let digits = self
            .card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .map(|c| c.to_digit(10).ok_or(CheckoutError::InvalidCardNumber))
            .collect::<Result<Vec<u32>, _>>()?;
        if !(13..=19).contains(&digits.len()) || !luhn_valid(&digits) {
            return Err(CheckoutError::InvalidCardNumber);
        }
        check_expiry(&self.expiry, today)?;
        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidCvv);
        }

        let last4 = digits
            .iter()
            .skip(digits.len().saturating_sub(4))
            .map(u32::to_string)
            .collect::<String>();
        Ok(PaymentDetails {
            method,
            card_last4: Some(last4),
        })
    }
}

/// Generated order reference, e.g. `DK-20261016-0421`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build from the placement time and a caller-supplied random suffix.
    #[must_use]
    pub fn generate(placed_at: DateTime<Utc>, suffix: u32) -> Self {
        Self(format!("DK-{}-{:04}", placed_at.format("%Y%m%d"), suffix % 10_000))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the shopper sees after placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub shipping: ShippingDetails,
    pub payment: PaymentDetails,
}

/// Wizard state kept in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    step: CheckoutStep,
    shipping: Option<ShippingDetails>,
    payment: Option<PaymentDetails>,
}

impl CheckoutSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingDetails> {
        self.shipping.as_ref()
    }

    #[must_use]
    pub const fn payment(&self) -> Option<&PaymentDetails> {
        self.payment.as_ref()
    }

    /// Store validated shipping details and move to the payment step.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the wizard is left unchanged.
    pub fn submit_shipping(
        &mut self,
        request: ShippingRequest,
    ) -> Result<Option<NewAccount>, CheckoutError> {
        let (details, account) = request.validate()?;
        self.shipping = Some(details);
        self.step = CheckoutStep::Payment;
        Ok(account)
    }

    /// Store the payment choice and move to the review step.
    ///
    /// # Errors
    ///
    /// Returns `StepNotReady` without shipping details, or the validation
    /// error. The wizard is left unchanged on error.
    pub fn submit_payment(
        &mut self,
        request: PaymentRequest,
        today: NaiveDate,
    ) -> Result<(), CheckoutError> {
        if self.shipping.is_none() {
            return Err(CheckoutError::StepNotReady);
        }
        self.payment = Some(request.validate(today)?);
        self.step = CheckoutStep::Review;
        Ok(())
    }

    /// Go back one step, keeping what was entered.
    pub fn back(&mut self) {
        self.step = self.step.previous();
    }

    /// Place the order.
    ///
    /// On success the cart is cleared and the wizard reset.
    ///
    /// # Errors
    ///
    /// Returns `TermsNotAccepted`, `EmptyCart`, or `StepNotReady` unless the
    /// wizard is on the review step. Nothing is changed on error.
    pub fn place_order(
        &mut self,
        cart: &mut Cart,
        shipping_policy: &ShippingPolicy,
        terms_accepted: bool,
        placed_at: DateTime<Utc>,
        suffix: u32,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::StepNotReady);
        }
        let (Some(shipping), Some(payment)) = (self.shipping.clone(), self.payment.clone()) else {
            return Err(CheckoutError::StepNotReady);
        };
        if !terms_accepted {
            return Err(CheckoutError::TermsNotAccepted);
        }

        let confirmation = OrderConfirmation {
            order_number: OrderNumber::generate(placed_at, suffix),
            placed_at,
            items: cart.items().to_vec(),
            totals: cart.totals(shipping_policy),
            shipping,
            payment,
        };
        cart.clear();
        *self = Self::default();
        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::cart::VariantSelection;
    use crate::catalog::StoreDirectory;

    fn shipping() -> ShippingRequest {
        ShippingRequest {
            full_name: "خالد العتيبي".to_owned(),
            email: "khalid@example.com".to_owned(),
            phone: "+966 55 123 4567".to_owned(),
            city: "الرياض".to_owned(),
            district: "العليا".to_owned(),
            street: "شارع التحلية".to_owned(),
            ..ShippingRequest::default()
        }
    }

    fn card() -> PaymentRequest {
        PaymentRequest {
            method: "card".to_owned(),
            card_name: "KHALID".to_owned(),
            card_number: "4111 1111 1111 1111".to_owned(),
            expiry: "12/30".to_owned(),
            cvv: "123".to_owned(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn filled_cart() -> Cart {
        let directory = StoreDirectory::demo();
        let store = directory.iter().next().unwrap();
        let product = store
            .products
            .iter()
            .find(|p| p.options.is_empty() && p.in_stock())
            .or_else(|| store.products.first())
            .unwrap();
        let mut selection = VariantSelection::new();
        for option in &product.options {
            selection.choose(option.kind, option.values.first().unwrap().clone());
        }
        let mut cart = Cart::new();
        cart.add(product, selection, 1).unwrap();
        cart
    }

    #[test]
    fn test_wizard_walks_three_steps() {
        let mut wizard = CheckoutSession::new();
        assert_eq!(wizard.step(), CheckoutStep::Shipping);

        assert!(wizard.submit_shipping(shipping()).unwrap().is_none());
        assert_eq!(wizard.step(), CheckoutStep::Payment);
        assert_eq!(wizard.shipping().unwrap().phone, "+966551234567");

        wizard.submit_payment(card(), today()).unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Review);
        assert_eq!(
            wizard.payment().unwrap().card_last4.as_deref(),
            Some("1111")
        );

        wizard.back();
        assert_eq!(wizard.step(), CheckoutStep::Payment);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_missing_field_keeps_step() {
        let mut wizard = CheckoutSession::new();
        let err = wizard
            .submit_shipping(ShippingRequest {
                city: " ".to_owned(),
                ..shipping()
            })
            .unwrap_err();
        assert_eq!(err, CheckoutError::MissingField("city"));
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
        assert!(wizard.shipping().is_none());
    }

    #[test]
    fn test_account_password_mismatch_blocks_shipping() {
        let mut wizard = CheckoutSession::new();
        let err = wizard
            .submit_shipping(ShippingRequest {
                create_account: true,
                password: "longenough1".to_owned(),
                confirm_password: "longenough2".to_owned(),
                ..shipping()
            })
            .unwrap_err();
        assert_eq!(err.message_key(), "error.password_mismatch");
        assert!(wizard.shipping().is_none());
    }

    #[test]
    fn test_account_created_when_requested() {
        let mut wizard = CheckoutSession::new();
        let account = wizard
            .submit_shipping(ShippingRequest {
                create_account: true,
                password: "longenough1".to_owned(),
                confirm_password: "longenough1".to_owned(),
                ..shipping()
            })
            .unwrap()
            .unwrap();
        assert_eq!(account.email.as_str(), "khalid@example.com");
    }

    #[test]
    fn test_payment_requires_shipping() {
        let mut wizard = CheckoutSession::new();
        assert_eq!(
            wizard.submit_payment(card(), today()),
            Err(CheckoutError::StepNotReady)
        );
    }

    #[test]
    fn test_card_validation() {
        let bad_luhn = PaymentRequest {
            card_number: "4111 1111 1111 1112".to_owned(),
            ..card()
        };
        assert_eq!(
            bad_luhn.validate(today()),
            Err(CheckoutError::InvalidCardNumber)
        );

        let expired = PaymentRequest {
            expiry: "09/26".to_owned(),
            ..card()
        };
        assert_eq!(expired.validate(today()), Err(CheckoutError::CardExpired));

        let this_month = PaymentRequest {
            expiry: "10/26".to_owned(),
            ..card()
        };
        assert!(this_month.validate(today()).is_ok());

        let bad_cvv = PaymentRequest {
            cvv: "12a".to_owned(),
            ..card()
        };
        assert_eq!(bad_cvv.validate(today()), Err(CheckoutError::InvalidCvv));
    }

    #[test]
    fn test_cash_on_delivery_skips_card() {
        let details = PaymentRequest {
            method: "cash_on_delivery".to_owned(),
            ..PaymentRequest::default()
        }
        .validate(today())
        .unwrap();
        assert_eq!(details.method, PaymentMethod::CashOnDelivery);
        assert!(details.card_last4.is_none());
    }

    #[test]
    fn test_place_order_requires_terms_and_items() {
        let mut wizard = CheckoutSession::new();
        wizard.submit_shipping(shipping()).unwrap();
        wizard.submit_payment(card(), today()).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        let mut empty = Cart::new();
        assert_eq!(
            wizard
                .place_order(&mut empty, &ShippingPolicy::Free, true, now, 1)
                .unwrap_err(),
            CheckoutError::EmptyCart
        );

        let mut cart = filled_cart();
        assert_eq!(
            wizard
                .place_order(&mut cart, &ShippingPolicy::Free, false, now, 1)
                .unwrap_err(),
            CheckoutError::TermsNotAccepted
        );
        assert!(!cart.is_empty());

        let confirmation = wizard
            .place_order(&mut cart, &ShippingPolicy::Free, true, now, 421)
            .unwrap();
        assert_eq!(confirmation.order_number.as_str(), "DK-20261016-0421");
        assert_eq!(confirmation.items.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
        assert!(wizard.shipping().is_none());
    }

    #[test]
    fn test_place_order_requires_review_step() {
        let mut wizard = CheckoutSession::new();
        wizard.submit_shipping(shipping()).unwrap();
        wizard.submit_payment(card(), today()).unwrap();
        wizard.back();
        assert_eq!(wizard.step(), CheckoutStep::Payment);
        assert!(wizard.payment().is_some());

        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let mut cart = filled_cart();
        assert_eq!(
            wizard
                .place_order(&mut cart, &ShippingPolicy::Free, true, now, 1)
                .unwrap_err(),
            CheckoutError::StepNotReady
        );
        assert!(!cart.is_empty());
        assert_eq!(wizard.step(), CheckoutStep::Payment);

        wizard.submit_payment(card(), today()).unwrap();
        assert!(
            wizard
                .place_order(&mut cart, &ShippingPolicy::Free, true, now, 2)
                .is_ok()
        );
    }
}
