//! The saved unit: one store's theme, settings and layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::Layout;
use super::settings::{SettingsError, ThemeSettings};
use crate::theme::ThemeKind;
use crate::types::StoreId;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid theme document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("document is for store {found}, expected {expected}")]
    StoreMismatch { expected: StoreId, found: StoreId },
}

/// A store's saved theme customization.
///
/// `version` starts at 0 for unsaved defaults and increases by one on every
/// save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub store_id: StoreId,
    pub theme: ThemeKind,
    pub settings: ThemeSettings,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub version: u32,
    pub updated_at: DateTime<Utc>,
}

impl ThemeDocument {
    /// Unsaved defaults for a store running `theme`.
    #[must_use]
    pub fn defaults(store_id: StoreId, theme: ThemeKind, now: DateTime<Utc>) -> Self {
        Self {
            store_id,
            theme,
            settings: ThemeSettings::for_theme(theme),
            layout: Layout::default(),
            version: 0,
            updated_at: now,
        }
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or out-of-bounds settings.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json)?;
        document.settings.validate()?;
        Ok(document)
    }

    /// Parse for a specific store.
    ///
    /// # Errors
    ///
    /// As [`from_json`](Self::from_json), plus `StoreMismatch`.
    pub fn from_json_for(json: &str, expected: &StoreId) -> Result<Self, DocumentError> {
        let document = Self::from_json(json)?;
        if &document.store_id != expected {
            return Err(DocumentError::StoreMismatch {
                expected: expected.clone(),
                found: document.store_id,
            });
        }
        Ok(document)
    }

    /// Pretty JSON for export and storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> StoreId {
        StoreId::parse("tech-hub").unwrap()
    }

    #[test]
    fn test_json_roundtrip_preserves_layout_order() {
        let mut doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        doc.layout.reorder(5, 0).unwrap();
        doc.version = 3;
        let json = doc.to_json_pretty().unwrap();
        assert_eq!(ThemeDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_rejects_bad_color() {
        let doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        let json = doc.to_json_pretty().unwrap().replace("#2563eb", "blue");
        assert!(matches!(
            ThemeDocument::from_json(&json),
            Err(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_setting() {
        let mut doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        doc.settings.widgets.featured_count = 500;
        let json = serde_json::to_string(&doc).unwrap();
        assert!(matches!(
            ThemeDocument::from_json(&json),
            Err(DocumentError::Settings(_))
        ));
    }

    #[test]
    fn test_rejects_other_store() {
        let doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        let json = doc.to_json_pretty().unwrap();
        let other = StoreId::parse("toy-land").unwrap();
        assert!(matches!(
            ThemeDocument::from_json_for(&json, &other),
            Err(DocumentError::StoreMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_layout_defaults() {
        let doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        let mut value = serde_json::to_value(&doc).unwrap();
        value.as_object_mut().unwrap().remove("layout");
        let parsed = ThemeDocument::from_json(&value.to_string()).unwrap();
        assert_eq!(parsed.layout, Layout::default());
    }

    #[test]
    fn test_rejects_partial_layout() {
        let doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        for layout in [serde_json::json!([]), serde_json::json!([{"id": "footer", "name": "x"}])] {
            let mut value = serde_json::to_value(&doc).unwrap();
            value["layout"] = layout;
            assert!(matches!(
                ThemeDocument::from_json_for(&value.to_string(), &store()),
                Err(DocumentError::Parse(_))
            ));
        }
    }
}
