//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// One store row on the dashboard.
#[derive(Debug, Clone)]
pub struct StoreRowView {
    pub id: String,
    pub name: String,
    pub theme: &'static str,
    pub saved_theme: &'static str,
    /// `None` until the first save.
    pub version: Option<u32>,
    pub updated_at: String,
    pub builder_href: String,
    pub storefront_href: String,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub stores: Vec<StoreRowView>,
    pub storefront_url: String,
}

/// Every demo store with its saved theme status.
#[instrument(skip_all)]
pub async fn dashboard(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<DashboardTemplate> {
    let storefront_url = state.config().storefront_url.clone();
    let mut stores = Vec::with_capacity(state.stores().len());

    for catalog in state.stores().iter() {
        let profile = &catalog.profile;
        let saved = state.themes().load_saved(&profile.id).await?;
        stores.push(StoreRowView {
            id: profile.id.to_string(),
            name: profile.name.clone(),
            theme: profile.theme.display_name(),
            saved_theme: saved
                .as_ref()
                .map_or(profile.theme, |doc| doc.theme)
                .display_name(),
            version: saved.as_ref().map(|doc| doc.version),
            updated_at: saved
                .as_ref()
                .map(|doc| doc.updated_at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            builder_href: format!("/stores/{}/theme-builder", profile.id),
            storefront_href: format!("{storefront_url}/stores/{}", profile.id),
        });
    }

    Ok(DashboardTemplate {
        stores,
        storefront_url,
    })
}
