//! Saved theme documents, read from disk and cached.
//!
//! Documents are written by the admin as `{dir}/{store_id}.json`. A store
//! with no saved document renders its base theme defaults. Entries are cached
//! for 30 seconds, so an admin save shows up on the storefront within that
//! window.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use tracing::{debug, instrument, warn};

use dukkan_core::StoreId;
use dukkan_core::builder::ThemeDocument;
use dukkan_core::theme::ThemeKind;

use super::RepositoryError;

/// How long a loaded document is served before re-reading the file.
pub const THEME_CACHE_TTL: Duration = Duration::from_secs(30);

/// Read-only theme document repository.
#[derive(Clone)]
pub struct ThemeRepository {
    inner: Arc<ThemeRepositoryInner>,
}

struct ThemeRepositoryInner {
    dir: PathBuf,
    cache: Cache<StoreId, Arc<ThemeDocument>>,
}

impl ThemeRepository {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let cache = Cache::builder()
            .max_capacity(256)
            .time_to_live(THEME_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ThemeRepositoryInner {
                dir: dir.into(),
                cache,
            }),
        }
    }

    /// Directory documents are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.inner.dir
    }

    /// Load the document for a store, falling back to `theme` defaults.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file exists but cannot be read,
    /// or `RepositoryError::DataCorruption` if it does not validate.
    #[instrument(skip(self), fields(store = %store_id))]
    pub async fn load(
        &self,
        store_id: &StoreId,
        theme: ThemeKind,
    ) -> Result<Arc<ThemeDocument>, RepositoryError> {
        if let Some(document) = self.inner.cache.get(store_id).await {
            debug!("Cache hit for theme document");
            return Ok(document);
        }

        let path = self.inner.dir.join(format!("{store_id}.json"));
        let document = match tokio::fs::read_to_string(&path).await {
            Ok(json) => ThemeDocument::from_json_for(&json, store_id)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved theme document, using defaults");
                ThemeDocument::defaults(store_id.clone(), theme, Utc::now())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read theme document");
                return Err(e.into());
            }
        };

        let document = Arc::new(document);
        self.inner
            .cache
            .insert(store_id.clone(), Arc::clone(&document))
            .await;
        Ok(document)
    }

    /// Drop a cached document so the next load re-reads the file.
    pub async fn invalidate(&self, store_id: &StoreId) {
        self.inner.cache.invalidate(store_id).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> StoreId {
        StoreId::parse("luxe-boutique").unwrap()
    }

    #[tokio::test]
    async fn test_missing_document_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ThemeRepository::new(dir.path());
        let doc = repo.load(&store(), ThemeKind::Luxe).await.unwrap();
        assert_eq!(doc.version, 0);
        assert_eq!(doc.theme, ThemeKind::Luxe);
    }

    #[tokio::test]
    async fn test_reads_saved_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut saved = ThemeDocument::defaults(store(), ThemeKind::Luxe, Utc::now());
        saved.version = 4;
        saved.layout.reorder(5, 0).unwrap();
        std::fs::write(
            dir.path().join("luxe-boutique.json"),
            saved.to_json_pretty().unwrap(),
        )
        .unwrap();

        let repo = ThemeRepository::new(dir.path());
        let doc = repo.load(&store(), ThemeKind::Luxe).await.unwrap();
        assert_eq!(*doc, saved);
    }

    #[tokio::test]
    async fn test_cached_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ThemeRepository::new(dir.path());
        let first = repo.load(&store(), ThemeKind::Luxe).await.unwrap();

        let mut saved = (*first).clone();
        saved.version = 9;
        std::fs::write(
            dir.path().join("luxe-boutique.json"),
            saved.to_json_pretty().unwrap(),
        )
        .unwrap();

        assert_eq!(repo.load(&store(), ThemeKind::Luxe).await.unwrap().version, 0);
        repo.invalidate(&store()).await;
        assert_eq!(repo.load(&store(), ThemeKind::Luxe).await.unwrap().version, 9);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("luxe-boutique.json"), "{ not json").unwrap();
        let repo = ThemeRepository::new(dir.path());
        assert!(matches!(
            repo.load(&store(), ThemeKind::Luxe).await,
            Err(RepositoryError::DataCorruption(_))
        ));
    }

    #[tokio::test]
    async fn test_partial_layout_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let saved = ThemeDocument::defaults(store(), ThemeKind::Luxe, Utc::now());
        let mut value = serde_json::to_value(&saved).unwrap();
        value["layout"] = serde_json::json!([{ "id": "footer", "name": "x" }]);
        std::fs::write(dir.path().join("luxe-boutique.json"), value.to_string()).unwrap();

        let repo = ThemeRepository::new(dir.path());
        assert!(matches!(
            repo.load(&store(), ThemeKind::Luxe).await,
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
