//! Application state shared across handlers.

use std::sync::Arc;

use dukkan_core::StoreId;
use dukkan_core::catalog::{StoreCatalog, StoreDirectory};
use dukkan_core::i18n::{Locale, Translations};

use crate::config::AdminConfig;
use crate::db::ThemeStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    stores: StoreDirectory,
    themes: ThemeStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let themes = ThemeStore::new(config.theme_data_dir.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                stores: StoreDirectory::demo(),
                themes,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn stores(&self) -> &StoreDirectory {
        &self.inner.stores
    }

    /// Look up a demo store by its route parameter.
    #[must_use]
    pub fn store(&self, raw_id: &str) -> Option<&Arc<StoreCatalog>> {
        StoreId::parse(raw_id)
            .ok()
            .and_then(|id| self.inner.stores.get(&id))
    }

    #[must_use]
    pub fn themes(&self) -> &ThemeStore {
        &self.inner.themes
    }

    /// Preview pages render in the storefront's default locale.
    #[must_use]
    pub const fn translations(&self) -> Translations {
        Translations::new(Locale::Ar)
    }
}
