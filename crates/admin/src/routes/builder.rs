//! Theme Builder route handlers.
//!
//! The draft lives in the session under `draft:{store_id}` and is created
//! from the saved document (or the theme defaults) on first access. Change
//! endpoints validate before touching the draft, so a rejected change leaves
//! both the draft and the preview as they were.
//!
//! Requests from the builder script (`x-requested-with: fetch`) get the
//! re-rendered preview fragment when auto preview is on, or a small JSON
//! acknowledgement when it is off. Plain form posts are redirected back to
//! the builder page.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{FromRequestParts, Path, Query},
    http::{HeaderValue, header, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use dukkan_core::builder::{
    BuilderDraft, ChangeResponse, PreviewDevice, PreviewFrame, PreviewScale, ThemeDocument,
};
use dukkan_core::catalog::StoreCatalog;
use dukkan_core::theme::ThemeKind;
use dukkan_storefront::sections::{RenderedSection, SectionContext, render_layout};

use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, is_fetch};
use crate::models::session_keys;
use crate::state::AppState;
use crate::views::{ChoiceView, DeviceView, LayoutItemView, PanelView, theme_choices};

// =============================================================================
// Builder Context
// =============================================================================

/// The store being edited and its draft.
pub struct BuilderContext {
    pub state: AppState,
    pub store: Arc<StoreCatalog>,
    pub session: Session,
    pub draft: BuilderDraft,
    /// Whether the request came from the builder script.
    pub fetch: bool,
}

impl FromRequestParts<AppState> for BuilderContext {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        RequireAdmin::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let Path(store_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let store = state
            .store(&store_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("store {store_id}")).into_response())?;

        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let draft = load_draft(state, &store, &session)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self {
            state: state.clone(),
            store,
            session,
            draft,
            fetch: is_fetch(parts),
        })
    }
}

/// Draft from the session, or a fresh one from the saved document.
async fn load_draft(
    state: &AppState,
    store: &StoreCatalog,
    session: &Session,
) -> Result<BuilderDraft> {
    let key = session_keys::draft(&store.profile.id);
    if let Some(draft) = session.get::<BuilderDraft>(&key).await? {
        return Ok(draft);
    }
    let document = state
        .themes()
        .load_or_default(&store.profile.id, store.profile.theme, Utc::now())
        .await?;
    Ok(BuilderDraft::from_document(&document))
}

impl BuilderContext {
    /// `/stores/{store_id}/theme-builder`
    #[must_use]
    pub fn builder_path(&self) -> String {
        format!("/stores/{}/theme-builder", self.store.profile.id)
    }

    async fn save_draft(&self) -> Result<()> {
        self.session
            .insert(&session_keys::draft(&self.store.profile.id), &self.draft)
            .await?;
        Ok(())
    }

    /// Persist the draft and answer a successful change.
    async fn changed(self) -> Result<Response> {
        self.save_draft().await?;

        if !self.fetch {
            return Ok(Redirect::to(&self.builder_path()).into_response());
        }

        match self.draft.change_response() {
            ChangeResponse::Preview => Ok(Html(self.render_preview()?).into_response()),
            ChangeResponse::Ack => Ok(Json(json!({
                "ok": true,
                "dirty": self.draft.dirty,
            }))
            .into_response()),
        }
    }

    /// Render the preview fragment for the current draft.
    ///
    /// # Errors
    ///
    /// Returns an error if a section fails to render.
    pub fn render_preview(&self) -> Result<String> {
        let t = self.state.translations();
        let profile = &self.store.profile;
        let settings = &self.draft.settings;
        let ctx = SectionContext {
            t,
            base_path: format!(
                "{}/stores/{}",
                self.state.config().storefront_url,
                profile.id
            ),
            catalog: &self.store,
            settings,
            cart_count: 0,
            customer_name: None,
            wishlist: &[],
        };

        let custom_css = settings.advanced.safe_css();
        Ok(PreviewTemplate {
            lang: t.locale().code(),
            dir: t.direction().attr(),
            device: self.draft.preview.device.key(),
            frame: self.draft.preview.frame(),
            theme_slug: self.draft.theme.slug(),
            css_variables: settings.css_variables(),
            body_classes: settings.body_classes(),
            custom_css: (!custom_css.trim().is_empty()).then_some(custom_css),
            sections: render_layout(&self.draft.layout, &ctx)?,
        }
        .render()?)
    }
}

// =============================================================================
// Templates
// =============================================================================

/// The live preview: the draft's sections inside a fixed-size device frame.
#[derive(Template)]
#[template(path = "builder/preview.html")]
pub struct PreviewTemplate {
    pub lang: &'static str,
    pub dir: &'static str,
    pub device: &'static str,
    pub frame: PreviewFrame,
    pub theme_slug: &'static str,
    pub css_variables: String,
    pub body_classes: String,
    pub custom_css: Option<String>,
    pub sections: Vec<RenderedSection>,
}

/// The builder page.
#[derive(Template, WebTemplate)]
#[template(path = "builder/index.html")]
pub struct BuilderTemplate {
    pub store_id: String,
    pub store_name: String,
    pub storefront_href: String,
    pub action_base: String,
    pub themes: Vec<ChoiceView>,
    pub panels: Vec<PanelView>,
    pub layout: Vec<LayoutItemView>,
    pub layout_order: String,
    pub devices: Vec<DeviceView>,
    pub scale: u8,
    pub scale_min: u8,
    pub scale_max: u8,
    pub auto_preview: bool,
    pub dirty: bool,
    pub base_version: u32,
    pub saved: Option<u32>,
    pub preview_html: String,
}

// =============================================================================
// Form Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub category: String,
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderForm {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub order: String,
}

#[derive(Debug, Deserialize)]
pub struct DeviceForm {
    pub device: String,
}

#[derive(Debug, Deserialize)]
pub struct ScaleForm {
    pub scale: i64,
}

#[derive(Debug, Deserialize)]
pub struct AutoPreviewForm {
    #[serde(default)]
    pub enabled: Option<String>,
}

impl AutoPreviewForm {
    fn is_enabled(&self) -> bool {
        self.enabled
            .as_deref()
            .is_some_and(|v| matches!(v.trim(), "on" | "true" | "1"))
    }
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

#[derive(Debug, Deserialize)]
pub struct ImportForm {
    pub document: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BuilderQuery {
    pub saved: Option<u32>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Show the builder.
#[instrument(skip(ctx, query), fields(store = %ctx.store.profile.id))]
pub async fn show(ctx: BuilderContext, Query(query): Query<BuilderQuery>) -> Result<Response> {
    ctx.save_draft().await?;

    let draft = &ctx.draft;
    let profile = &ctx.store.profile;
    let template = BuilderTemplate {
        store_id: profile.id.to_string(),
        store_name: profile.name.clone(),
        storefront_href: format!("{}/stores/{}", ctx.state.config().storefront_url, profile.id),
        action_base: ctx.builder_path(),
        themes: theme_choices(draft.theme),
        panels: PanelView::all(&draft.settings),
        layout: LayoutItemView::list(&draft.layout),
        layout_order: LayoutItemView::order(&draft.layout),
        devices: DeviceView::all(draft),
        scale: draft.preview.scale.percent(),
        scale_min: PreviewScale::MIN,
        scale_max: PreviewScale::MAX,
        auto_preview: draft.preview.auto_preview,
        dirty: draft.dirty,
        base_version: draft.base_version,
        saved: query.saved,
        preview_html: ctx.render_preview()?,
    };
    Ok(template.into_response())
}

/// The preview fragment, for a manual refresh.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn preview(ctx: BuilderContext) -> Result<Html<String>> {
    Ok(Html(ctx.render_preview()?))
}

/// Set one settings field.
#[instrument(skip(ctx, form), fields(store = %ctx.store.profile.id, category = %form.category, field = %form.field))]
pub async fn update_setting(
    mut ctx: BuilderContext,
    Form(form): Form<SettingsForm>,
) -> Result<Response> {
    if let Err(e) = ctx.draft.set_field(&form.category, &form.field, &form.value) {
        tracing::debug!("Setting rejected: {e}");
        return Err(e.into());
    }
    ctx.changed().await
}

/// Drag-and-drop move of one section.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn reorder(mut ctx: BuilderContext, Form(form): Form<ReorderForm>) -> Result<Response> {
    ctx.draft.reorder(form.from, form.to)?;
    ctx.changed().await
}

/// Replace the whole section order.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn apply_order(mut ctx: BuilderContext, Form(form): Form<OrderForm>) -> Result<Response> {
    let keys: Vec<&str> = form.order.split(',').map(str::trim).collect();
    ctx.draft.apply_order(&keys)?;
    ctx.changed().await
}

/// Switch the preview device.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn set_device(mut ctx: BuilderContext, Form(form): Form<DeviceForm>) -> Result<Response> {
    let device = PreviewDevice::from_key(&form.device)
        .ok_or_else(|| AppError::BadRequest(format!("unknown device {:?}", form.device)))?;
    ctx.draft.set_device(device);
    ctx.changed().await
}

/// Set the preview zoom; out-of-range values are clamped.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn set_scale(mut ctx: BuilderContext, Form(form): Form<ScaleForm>) -> Result<Response> {
    ctx.draft.set_scale(form.scale);
    ctx.changed().await
}

/// Turn auto preview on or off.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn set_auto_preview(
    mut ctx: BuilderContext,
    Form(form): Form<AutoPreviewForm>,
) -> Result<Response> {
    ctx.draft.set_auto_preview(form.is_enabled());
    ctx.changed().await
}

/// Switch the base theme, re-deriving settings from its tokens.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn switch_theme(mut ctx: BuilderContext, Form(form): Form<ThemeForm>) -> Result<Response> {
    let theme = ThemeKind::from_slug(&form.theme)
        .ok_or_else(|| AppError::BadRequest(format!("unknown theme {:?}", form.theme)))?;
    ctx.draft.switch_theme(theme);
    ctx.changed().await
}

/// Restore the theme defaults.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn reset(mut ctx: BuilderContext) -> Result<Response> {
    ctx.draft.reset();
    ctx.changed().await
}

/// Write the draft to disk as the next version.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn save(mut ctx: BuilderContext) -> Result<Response> {
    let store_id = ctx.store.profile.id.clone();
    let current = ctx.state.themes().current_version(&store_id).await?;
    let document = ctx.draft.to_document(store_id, current, Utc::now());
    ctx.state.themes().save(&document).await?;
    ctx.draft.mark_saved(document.version);
    ctx.save_draft().await?;

    tracing::info!(version = document.version, "Theme saved");

    if ctx.fetch {
        Ok(Json(json!({ "ok": true, "version": document.version })).into_response())
    } else {
        Ok(Redirect::to(&format!("{}?saved={}", ctx.builder_path(), document.version)).into_response())
    }
}

/// Download the draft as a JSON document.
#[instrument(skip(ctx), fields(store = %ctx.store.profile.id))]
pub async fn export(ctx: BuilderContext) -> Result<Response> {
    let store_id = ctx.store.profile.id.clone();
    let document = ThemeDocument {
        store_id: store_id.clone(),
        theme: ctx.draft.theme,
        settings: ctx.draft.settings.clone(),
        layout: ctx.draft.layout.clone(),
        version: ctx.draft.base_version,
        updated_at: Utc::now(),
    };
    let json = document.to_json_pretty()?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{store_id}-theme.json\""
    ))
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        json,
    )
        .into_response())
}

/// Replace the draft with an uploaded document.
///
/// The document must validate and belong to this store.
#[instrument(skip(ctx, form), fields(store = %ctx.store.profile.id))]
pub async fn import(mut ctx: BuilderContext, Form(form): Form<ImportForm>) -> Result<Response> {
    let document = ThemeDocument::from_json_for(&form.document, &ctx.store.profile.id)?;
    ctx.draft.import(document);
    tracing::info!("Theme document imported into draft");
    ctx.changed().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_preview_form() {
        let form = |v: Option<&str>| AutoPreviewForm {
            enabled: v.map(str::to_owned),
        };
        assert!(form(Some("on")).is_enabled());
        assert!(form(Some("true")).is_enabled());
        assert!(!form(Some("off")).is_enabled());
        assert!(!form(None).is_enabled());
    }
}
