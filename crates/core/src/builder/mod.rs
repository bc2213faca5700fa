//! Theme Builder model.
//!
//! A [`BuilderDraft`] is what the merchant edits: settings, layout and
//! preview controls for one store. The admin keeps it in the session and
//! turns it into a [`ThemeDocument`] on save.
//!
//! Every mutating operation either succeeds fully or leaves the draft as it
//! was.

pub mod document;
pub mod layout;
pub mod preview;
pub mod settings;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use document::{DocumentError, ThemeDocument};
pub use layout::{Layout, LayoutComponent, LayoutError, SectionId};
pub use preview::{PreviewDevice, PreviewFrame, PreviewOptions, PreviewScale};
pub use settings::{
    FIELDS, FieldKind, FieldSpec, HexColor, SettingsCategory, SettingsError, ThemeSettings,
};

use crate::theme::ThemeKind;
use crate::types::StoreId;

/// What a change request should send back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeResponse {
    /// Re-render the preview.
    Preview,
    /// Acknowledge only; the operator refreshes by hand.
    Ack,
}

/// Unsaved builder state for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderDraft {
    pub theme: ThemeKind,
    pub settings: ThemeSettings,
    pub layout: Layout,
    pub preview: PreviewOptions,
    /// Version of the document the draft was loaded from.
    pub base_version: u32,
    /// Whether the draft differs from what was loaded or last saved.
    pub dirty: bool,
}

impl BuilderDraft {
    #[must_use]
    pub fn from_document(document: &ThemeDocument) -> Self {
        Self {
            theme: document.theme,
            settings: document.settings.clone(),
            layout: document.layout.clone(),
            preview: PreviewOptions::default(),
            base_version: document.version,
            dirty: false,
        }
    }

    /// What a successful change should return.
    #[must_use]
    pub const fn change_response(&self) -> ChangeResponse {
        if self.preview.auto_preview {
            ChangeResponse::Preview
        } else {
            ChangeResponse::Ack
        }
    }

    /// Set one settings field from form input.
    ///
    /// # Errors
    ///
    /// See [`ThemeSettings::set_field`].
    pub fn set_field(&mut self, category: &str, field: &str, value: &str) -> Result<(), SettingsError> {
        self.settings.set_field(category, field, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Drag-and-drop reorder.
    ///
    /// # Errors
    ///
    /// See [`Layout::reorder`].
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), LayoutError> {
        self.layout.reorder(from, to)?;
        self.dirty = true;
        Ok(())
    }

    /// Apply a full submitted order.
    ///
    /// # Errors
    ///
    /// See [`Layout::apply_order`].
    pub fn apply_order<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<(), LayoutError> {
        self.layout.apply_order(keys)?;
        self.dirty = true;
        Ok(())
    }

    pub fn set_device(&mut self, device: PreviewDevice) {
        self.preview.device = device;
    }

    pub fn set_scale(&mut self, percent: i64) {
        self.preview.scale = PreviewScale::new(percent);
    }

    pub fn set_auto_preview(&mut self, enabled: bool) {
        self.preview.auto_preview = enabled;
    }

    /// Switch the base theme and re-derive settings from its tokens.
    ///
    /// The layout is kept.
    pub fn switch_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
        self.settings = ThemeSettings::for_theme(theme);
        self.dirty = true;
    }

    /// Restore theme defaults for settings and layout.
    pub fn reset(&mut self) {
        self.settings = ThemeSettings::for_theme(self.theme);
        self.layout = Layout::default();
        self.dirty = true;
    }

    /// Replace theme, settings and layout from an imported document.
    pub fn import(&mut self, document: ThemeDocument) {
        self.theme = document.theme;
        self.settings = document.settings;
        self.layout = document.layout;
        self.dirty = true;
    }

    /// Document to persist, one version past `current_version`.
    #[must_use]
    pub fn to_document(
        &self,
        store_id: StoreId,
        current_version: u32,
        now: DateTime<Utc>,
    ) -> ThemeDocument {
        ThemeDocument {
            store_id,
            theme: self.theme,
            settings: self.settings.clone(),
            layout: self.layout.clone(),
            version: current_version.saturating_add(1),
            updated_at: now,
        }
    }

    /// Mark the draft as saved at `version`.
    pub fn mark_saved(&mut self, version: u32) {
        self.base_version = version;
        self.dirty = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> BuilderDraft {
        let doc = ThemeDocument::defaults(
            StoreId::parse("modern-living").unwrap(),
            ThemeKind::Modern,
            Utc::now(),
        );
        BuilderDraft::from_document(&doc)
    }

    #[test]
    fn test_auto_preview_controls_response() {
        let mut draft = draft();
        assert_eq!(draft.change_response(), ChangeResponse::Preview);
        draft.set_auto_preview(false);
        assert_eq!(draft.change_response(), ChangeResponse::Ack);
    }

    #[test]
    fn test_failed_change_keeps_draft_clean() {
        let mut draft = draft();
        assert!(draft.set_field("colors", "accent", "pink").is_err());
        assert!(draft.reorder(0, 9).is_err());
        assert!(!draft.dirty);
        assert_eq!(draft, self::draft());
    }

    #[test]
    fn test_switch_theme_rederives_settings_keeps_layout() {
        let mut draft = draft();
        draft.reorder(0, 5).unwrap();
        let layout = draft.layout.clone();
        draft.switch_theme(ThemeKind::Luxe);
        assert_eq!(draft.settings, ThemeSettings::for_theme(ThemeKind::Luxe));
        assert_eq!(draft.layout, layout);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = draft();
        draft.set_field("spacing", "radius_px", "2").unwrap();
        draft.reorder(1, 2).unwrap();
        draft.reset();
        assert_eq!(draft.settings, ThemeSettings::for_theme(ThemeKind::Modern));
        assert_eq!(draft.layout, Layout::default());
    }

    #[test]
    fn test_save_increments_version() {
        let mut draft = draft();
        draft.set_field("colors", "primary", "#000000").unwrap();
        let store = StoreId::parse("modern-living").unwrap();
        let doc = draft.to_document(store, draft.base_version, Utc::now());
        assert_eq!(doc.version, 1);
        draft.mark_saved(doc.version);
        assert!(!draft.dirty);
        assert_eq!(draft.base_version, 1);
    }

    #[test]
    fn test_device_and_scale() {
        let mut draft = draft();
        draft.set_device(PreviewDevice::Tablet);
        draft.set_scale(5);
        let frame = draft.preview.frame();
        assert_eq!((frame.width, frame.height), (768, 1024));
        assert_eq!(frame.scale.percent(), 25);
    }
}
