//! Per-request store context.
//!
//! Every `/stores/{store_id}/...` handler takes a [`StoreContext`]: the
//! resolved store catalog, its saved theme document, the visitor's session
//! and the CSP nonce. It also builds the [`PageContext`] all store pages
//! render with.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use dukkan_core::builder::{SectionId, ThemeDocument};
use dukkan_core::cart::Cart;
use dukkan_core::catalog::StoreCatalog;
use dukkan_core::checkout::CheckoutSession;
use dukkan_core::i18n::Translations;
use dukkan_core::{ProductId, StoreId};

use crate::error::{AppError, Result};
use crate::middleware::{CspNonce, OptionalAuth};
use crate::models::{CurrentCustomer, session_keys};
use crate::sections::{SectionContext, render_section};
use crate::state::AppState;

/// `?error=` and `?notice=` keys carried across a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct Flash {
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl Flash {
    /// Translate a key, ignoring anything not in the catalog.
    fn translate(t: &Translations, key: Option<&String>) -> Option<String> {
        key.filter(|k| Translations::contains(k))
            .map(|k| t.get(k).to_owned())
    }
}

/// Resolved store and visitor state for a store route.
pub struct StoreContext {
    pub state: AppState,
    pub catalog: Arc<StoreCatalog>,
    pub document: Arc<ThemeDocument>,
    pub session: Session,
    pub nonce: CspNonce,
    pub customer: Option<CurrentCustomer>,
    pub flash: Flash,
}

impl FromRequestParts<AppState> for StoreContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let raw = params
            .get("store_id")
            .ok_or_else(|| AppError::Internal("route has no store_id".to_string()))?;
        let store_id =
            StoreId::parse(raw).map_err(|_| AppError::NotFound(format!("store {raw}")))?;
        let catalog = state
            .stores()
            .get(&store_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("store {store_id}")))?;

        let document = state
            .themes()
            .load(&store_id, catalog.profile.theme)
            .await?;

        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;

        let Ok(nonce) = CspNonce::from_request_parts(parts, state).await;

        let Ok(OptionalAuth(customer)) = OptionalAuth::from_request_parts(parts, state).await;

        let flash = Query::<Flash>::try_from_uri(&parts.uri)
            .map(|Query(flash)| flash)
            .unwrap_or_default();

        Ok(Self {
            state: state.clone(),
            catalog,
            document,
            session,
            nonce,
            customer,
            flash,
        })
    }
}

impl StoreContext {
    #[must_use]
    pub fn t(&self) -> Translations {
        self.state.translations()
    }

    #[must_use]
    pub fn store_id(&self) -> &StoreId {
        &self.catalog.profile.id
    }

    /// `/stores/{store_id}`
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/stores/{}", self.store_id())
    }

    /// A path under this store, e.g. `path("/cart")`.
    #[must_use]
    pub fn path(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.base_path())
    }

    /// Redirect within the store with an `?error=` key.
    #[must_use]
    pub fn redirect_error(&self, suffix: &str, key: &str) -> Redirect {
        Redirect::to(&format!(
            "{}?error={}",
            self.path(suffix),
            urlencoding::encode(key)
        ))
    }

    /// Redirect within the store with a `?notice=` key.
    #[must_use]
    pub fn redirect_notice(&self, suffix: &str, key: &str) -> Redirect {
        Redirect::to(&format!(
            "{}?notice={}",
            self.path(suffix),
            urlencoding::encode(key)
        ))
    }

    // =========================================================================
    // Session state
    // =========================================================================

    /// The visitor's cart for this store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn cart(&self) -> Result<Cart> {
        Ok(self
            .session
            .get::<Cart>(&session_keys::cart(self.store_id()))
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn save_cart(&self, cart: &Cart) -> Result<()> {
        self.session
            .insert(&session_keys::cart(self.store_id()), cart)
            .await?;
        Ok(())
    }

    /// Wishlisted product ids for this store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn wishlist(&self) -> Result<Vec<ProductId>> {
        Ok(self
            .session
            .get::<Vec<ProductId>>(&session_keys::wishlist(self.store_id()))
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn save_wishlist(&self, wishlist: &[ProductId]) -> Result<()> {
        self.session
            .insert(&session_keys::wishlist(self.store_id()), wishlist)
            .await?;
        Ok(())
    }

    /// Checkout wizard progress for this store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn checkout(&self) -> Result<CheckoutSession> {
        Ok(self
            .session
            .get::<CheckoutSession>(&session_keys::checkout(self.store_id()))
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn save_checkout(&self, checkout: &CheckoutSession) -> Result<()> {
        self.session
            .insert(&session_keys::checkout(self.store_id()), checkout)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Section context for this store and visitor.
    #[must_use]
    pub fn sections<'a>(&'a self, cart_count: u32, wishlist: &'a [ProductId]) -> SectionContext<'a> {
        SectionContext {
            t: self.t(),
            base_path: self.base_path(),
            catalog: &self.catalog,
            settings: &self.document.settings,
            cart_count,
            customer_name: self.customer.as_ref().map(|c| c.name.clone()),
            wishlist,
        }
    }

    /// Page chrome for a store page titled `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or the header and
    /// footer fail to render.
    pub async fn page(&self, title: &str) -> Result<PageContext> {
        let cart_count = self.cart().await?.item_count();
        let sections = self.sections(cart_count, &[]);
        let header_html = render_section(SectionId::Header, &sections)?;
        let footer_html = render_section(SectionId::Footer, &sections)?;
        Ok(self.page_with(title, header_html, footer_html))
    }

    /// Page chrome with pre-rendered header and footer.
    #[must_use]
    pub fn page_with(&self, title: &str, header_html: String, footer_html: String) -> PageContext {
        let t = self.t();
        let settings = &self.document.settings;
        let advanced = &settings.advanced;
        let profile = &self.catalog.profile;

        PageContext {
            lang: t.locale().code(),
            dir: t.direction().attr(),
            t,
            nonce: self.nonce.value().to_owned(),
            title: if title.is_empty() {
                profile.name.clone()
            } else {
                format!("{title} | {}", profile.name)
            },
            store_name: profile.name.clone(),
            base_path: self.base_path(),
            theme_slug: self.document.theme.slug(),
            css_variables: settings.css_variables(),
            body_classes: settings.body_classes(),
            custom_css: non_empty(advanced.safe_css()),
            custom_js: non_empty(advanced.safe_js()),
            favicon_url: non_empty(advanced.favicon_url.clone()),
            header_html,
            footer_html,
            error: Flash::translate(&t, self.flash.error.as_ref()),
            notice: Flash::translate(&t, self.flash.notice.as_ref()),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

/// Data every store page template renders with.
pub struct PageContext {
    pub lang: &'static str,
    pub dir: &'static str,
    pub t: Translations,
    pub nonce: String,
    pub title: String,
    pub store_name: String,
    pub base_path: String,
    pub theme_slug: &'static str,
    pub css_variables: String,
    pub body_classes: String,
    pub custom_css: Option<String>,
    pub custom_js: Option<String>,
    pub favicon_url: Option<String>,
    pub header_html: String,
    pub footer_html: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl PageContext {
    /// A path under the current store.
    #[must_use]
    pub fn href(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.base_path)
    }

    /// Show a form error directly, without a redirect.
    pub fn set_error(&mut self, key: &str) {
        self.error = Some(self.t.get(key).to_owned());
    }
}

#[cfg(test)]
mod tests {
    use dukkan_core::i18n::Locale;

    use super::*;

    #[test]
    fn test_flash_ignores_unknown_keys() {
        let t = Translations::new(Locale::Ar);
        assert_eq!(
            Flash::translate(&t, Some(&"<script>".to_string())),
            None
        );
        assert_eq!(
            Flash::translate(&t, Some(&"error.cart_empty".to_string())).as_deref(),
            Some(t.get("error.cart_empty"))
        );
    }
}
