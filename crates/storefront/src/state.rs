//! Application state shared across handlers.

use std::sync::Arc;

use dukkan_core::catalog::StoreDirectory;
use dukkan_core::i18n::Translations;

use crate::config::StorefrontConfig;
use crate::db::accounts::AccountStore;
use crate::db::themes::ThemeRepository;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the store directory and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    stores: StoreDirectory,
    themes: ThemeRepository,
    accounts: AccountStore,
}

impl AppState {
    /// Create application state with the demo store directory.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let themes = ThemeRepository::new(config.theme_data_dir.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                stores: StoreDirectory::demo(),
                themes,
                accounts: AccountStore::new(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// All demo stores.
    #[must_use]
    pub fn stores(&self) -> &StoreDirectory {
        &self.inner.stores
    }

    #[must_use]
    pub fn themes(&self) -> &ThemeRepository {
        &self.inner.themes
    }

    #[must_use]
    pub fn accounts(&self) -> &AccountStore {
        &self.inner.accounts
    }

    /// Translations for the configured locale.
    #[must_use]
    pub fn translations(&self) -> Translations {
        Translations::new(self.inner.config.locale)
    }
}
