//! Saved theme documents on disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use dukkan_core::StoreId;
use dukkan_core::builder::ThemeDocument;
use dukkan_core::theme::ThemeKind;

use super::RepositoryError;

/// Read/write access to the theme document directory.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a store's document.
    #[must_use]
    pub fn path_for(&self, store_id: &StoreId) -> PathBuf {
        self.dir.join(format!("{store_id}.json"))
    }

    /// The saved document, or `None` if the store was never saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file exists but cannot be read,
    /// or `RepositoryError::DataCorruption` if it does not validate.
    #[instrument(skip(self), fields(store = %store_id))]
    pub async fn load_saved(
        &self,
        store_id: &StoreId,
    ) -> Result<Option<ThemeDocument>, RepositoryError> {
        match tokio::fs::read_to_string(self.path_for(store_id)).await {
            Ok(json) => Ok(Some(ThemeDocument::from_json_for(&json, store_id)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The saved document, falling back to `theme` defaults at version 0.
    ///
    /// # Errors
    ///
    /// See [`load_saved`](Self::load_saved).
    pub async fn load_or_default(
        &self,
        store_id: &StoreId,
        theme: ThemeKind,
        now: DateTime<Utc>,
    ) -> Result<ThemeDocument, RepositoryError> {
        Ok(self
            .load_saved(store_id)
            .await?
            .unwrap_or_else(|| ThemeDocument::defaults(store_id.clone(), theme, now)))
    }

    /// Version currently on disk, 0 if never saved.
    ///
    /// # Errors
    ///
    /// See [`load_saved`](Self::load_saved).
    pub async fn current_version(&self, store_id: &StoreId) -> Result<u32, RepositoryError> {
        Ok(self
            .load_saved(store_id)
            .await?
            .map_or(0, |doc| doc.version))
    }

    /// Write a document atomically: temp file in the same directory, then rename.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the directory cannot be created or
    /// the file cannot be written or renamed.
    #[instrument(skip(self, document), fields(store = %document.store_id, version = document.version))]
    pub async fn save(&self, document: &ThemeDocument) -> Result<(), RepositoryError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let json = document.to_json_pretty()?;
        let target = self.path_for(&document.store_id);
        let temp = self
            .dir
            .join(format!(".{}.{}.tmp", document.store_id, Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&temp, json).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        debug!(path = %target.display(), "Theme document written");
        info!("Theme document saved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> StoreId {
        StoreId::parse("tech-hub").unwrap()
    }

    #[tokio::test]
    async fn test_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let themes = ThemeStore::new(dir.path());
        assert!(themes.load_saved(&store()).await.unwrap().is_none());
        assert_eq!(themes.current_version(&store()).await.unwrap(), 0);

        let doc = themes
            .load_or_default(&store(), ThemeKind::Tech, Utc::now())
            .await
            .unwrap();
        assert_eq!(doc.theme, ThemeKind::Tech);
        assert_eq!(doc.version, 0);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let themes = ThemeStore::new(dir.path().join("nested"));
        let mut doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        doc.version = 3;
        themes.save(&doc).await.unwrap();

        assert_eq!(themes.load_saved(&store()).await.unwrap(), Some(doc));
        assert_eq!(themes.current_version(&store()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let themes = ThemeStore::new(dir.path());
        let doc = ThemeDocument::defaults(store(), ThemeKind::Tech, Utc::now());
        themes.save(&doc).await.unwrap();
        themes.save(&doc).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["tech-hub.json"]);
    }

    #[tokio::test]
    async fn test_document_for_other_store_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let other = ThemeDocument::defaults(
            StoreId::parse("toy-land").unwrap(),
            ThemeKind::Toys,
            Utc::now(),
        );
        std::fs::write(
            dir.path().join("tech-hub.json"),
            other.to_json_pretty().unwrap(),
        )
        .unwrap();

        let themes = ThemeStore::new(dir.path());
        assert!(matches!(
            themes.load_saved(&store()).await,
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
