//! Store directory.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use dukkan_core::i18n::Translations;

use crate::filters;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// One store tile on the directory page.
pub struct StoreCard {
    pub href: String,
    pub name: String,
    pub tagline: String,
    pub theme_slug: &'static str,
    pub theme_name: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub hero_image: Option<String>,
}

/// Store directory template.
#[derive(Template, WebTemplate)]
#[template(path = "stores/index.html")]
pub struct DirectoryTemplate {
    pub lang: &'static str,
    pub dir: &'static str,
    pub t: Translations,
    pub nonce: String,
    pub stores: Vec<StoreCard>,
}

/// List every demo store with its theme.
#[instrument(skip(state, nonce))]
pub async fn index(State(state): State<AppState>, nonce: CspNonce) -> DirectoryTemplate {
    let t = state.translations();
    let stores = state
        .stores()
        .iter()
        .map(|catalog| {
            let profile = &catalog.profile;
            let tokens = profile.theme.tokens();
            StoreCard {
                href: format!("/stores/{}", profile.id),
                name: profile.name.clone(),
                tagline: profile.tagline.clone(),
                theme_slug: profile.theme.slug(),
                theme_name: profile.theme.display_name(),
                primary: tokens.primary,
                accent: tokens.accent,
                background: tokens.background,
                hero_image: catalog.slides.first().map(|s| s.image.clone()),
            }
        })
        .collect();

    DirectoryTemplate {
        lang: t.locale().code(),
        dir: t.direction().attr(),
        t,
        nonce: nonce.0,
        stores,
    }
}
