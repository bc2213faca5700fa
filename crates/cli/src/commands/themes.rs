//! Theme document management commands.
//!
//! # Usage
//!
//! ```bash
//! # Saved version and theme of every demo store
//! dukkan-cli themes list
//!
//! # One store's document
//! dukkan-cli themes show tech-hub
//!
//! # Restore theme defaults (optionally switching theme)
//! dukkan-cli themes reset tech-hub --theme modern
//!
//! # Load a JSON or YAML document
//! dukkan-cli themes import tech-hub tech-hub.yaml
//!
//! # Write the current document to stdout or a file
//! dukkan-cli themes export tech-hub --format yaml -o tech-hub.yaml
//! ```
//!
//! Every write goes through the admin's [`ThemeStore`], so the CLI bumps
//! the version and replaces the file atomically exactly as the Theme
//! Builder does.
//!
//! # Environment Variables
//!
//! - `THEME_DATA_DIR` - Theme document directory (default: data/themes)

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::ValueEnum;
use thiserror::Error;

use dukkan_admin::db::{RepositoryError, ThemeStore};
use dukkan_core::StoreId;
use dukkan_core::builder::{DocumentError, ThemeDocument};
use dukkan_core::catalog::{StoreCatalog, StoreDirectory};
use dukkan_core::theme::ThemeKind;

/// Errors that can occur during theme operations.
#[derive(Debug, Error)]
pub enum ThemesError {
    /// Store id is not one of the demo stores.
    #[error("Unknown store: {0}")]
    UnknownStore(String),

    /// Theme slug is not recognised.
    #[error("Unknown theme: {0}. Valid themes: {1}")]
    UnknownTheme(String, String),

    /// Reading or writing the theme directory failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The document failed to parse or validate.
    #[error("Invalid document: {0}")]
    Document(#[from] DocumentError),

    /// YAML input or output failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON conversion failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input file or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Guess the format from a file extension; JSON unless it says YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Theme directory plus the demo store list.
pub struct Themes {
    store: ThemeStore,
    directory: StoreDirectory,
}

impl Themes {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: ThemeStore::new(dir),
            directory: StoreDirectory::demo(),
        }
    }

    /// Open the directory named by `THEME_DATA_DIR`.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let dir = std::env::var("THEME_DATA_DIR").unwrap_or_else(|_| "data/themes".to_string());
        Self::new(dir)
    }

    fn catalog(&self, raw: &str) -> Result<&StoreCatalog, ThemesError> {
        StoreId::parse(raw)
            .ok()
            .and_then(|id| self.directory.get(&id))
            .map(|catalog| &**catalog)
            .ok_or_else(|| ThemesError::UnknownStore(raw.to_owned()))
    }

    /// One line per store: id, saved theme and version.
    ///
    /// # Errors
    ///
    /// Returns an error if a saved document cannot be read.
    pub async fn list(&self, out: &mut impl Write) -> Result<(), ThemesError> {
        for catalog in self.directory.iter() {
            let profile = &catalog.profile;
            match self.store.load_saved(&profile.id).await? {
                Some(doc) => writeln!(
                    out,
                    "{:<18} {:<10} v{:<4} {}",
                    profile.id,
                    doc.theme.slug(),
                    doc.version,
                    doc.updated_at.format("%Y-%m-%d %H:%M")
                )?,
                None => writeln!(
                    out,
                    "{:<18} {:<10} (defaults)",
                    profile.id,
                    profile.theme.slug()
                )?,
            }
        }
        Ok(())
    }

    /// The store's current document, saved or default.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown store or an unreadable document.
    pub async fn current(&self, store: &str) -> Result<ThemeDocument, ThemesError> {
        let catalog = self.catalog(store)?;
        let profile = &catalog.profile;
        Ok(self
            .store
            .load_or_default(&profile.id, profile.theme, Utc::now())
            .await?)
    }

    /// Human-readable summary of one store's document.
    ///
    /// # Errors
    ///
    /// See [`current`](Self::current).
    pub async fn show(&self, store: &str, out: &mut impl Write) -> Result<(), ThemesError> {
        let doc = self.current(store).await?;
        let colors = &doc.settings.colors;
        let order: Vec<&str> = doc.layout.ids().map(|id| id.key()).collect();

        writeln!(out, "store:    {}", doc.store_id)?;
        writeln!(out, "theme:    {} ({})", doc.theme.slug(), doc.theme.display_name())?;
        if doc.version == 0 {
            writeln!(out, "version:  unsaved (theme defaults)")?;
        } else {
            writeln!(out, "version:  {}", doc.version)?;
            writeln!(out, "updated:  {}", doc.updated_at.to_rfc3339())?;
        }
        writeln!(out, "primary:  {}", colors.primary)?;
        writeln!(out, "accent:   {}", colors.accent)?;
        writeln!(out, "layout:   {}", order.join(" > "))?;
        Ok(())
    }

    /// Save theme defaults as the next version.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown store or theme, or a failed write.
    pub async fn reset(
        &self,
        store: &str,
        theme: Option<&str>,
    ) -> Result<ThemeDocument, ThemesError> {
        let catalog = self.catalog(store)?;
        let profile = &catalog.profile;
        let theme = match theme {
            Some(slug) => ThemeKind::from_slug(slug).ok_or_else(|| {
                ThemesError::UnknownTheme(slug.to_owned(), theme_slugs())
            })?,
            None => profile.theme,
        };

        let current = self.store.current_version(&profile.id).await?;
        let mut doc = ThemeDocument::defaults(profile.id.clone(), theme, Utc::now());
        doc.version = current.saturating_add(1);
        self.store.save(&doc).await?;

        tracing::info!(store = %profile.id, theme = theme.slug(), version = doc.version, "Theme reset");
        Ok(doc)
    }

    /// Validate a document and save it as the next version.
    ///
    /// The document must name `store`. Its own version and timestamp are
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not validate, or
    /// belongs to another store.
    pub async fn import(&self, store: &str, path: &Path) -> Result<ThemeDocument, ThemesError> {
        let catalog = self.catalog(store)?;
        let profile = &catalog.profile;

        let raw = tokio::fs::read_to_string(path).await?;
        let mut doc = parse_document(&raw, Format::from_path(path), &profile.id)?;

        let current = self.store.current_version(&profile.id).await?;
        doc.version = current.saturating_add(1);
        doc.updated_at = Utc::now();
        self.store.save(&doc).await?;

        tracing::info!(store = %profile.id, version = doc.version, file = %path.display(), "Theme imported");
        Ok(doc)
    }

    /// Serialize the store's current document.
    ///
    /// # Errors
    ///
    /// See [`current`](Self::current).
    pub async fn export(&self, store: &str, format: Format) -> Result<String, ThemesError> {
        let doc = self.current(store).await?;
        Ok(match format {
            Format::Json => doc.to_json_pretty()?,
            Format::Yaml => serde_yaml::to_string(&doc)?,
        })
    }
}

/// Parse JSON or YAML and validate for `store`.
///
/// YAML is converted to JSON first so both formats share one validation
/// path.
///
/// # Errors
///
/// Returns an error if the input does not parse or validate.
pub fn parse_document(
    raw: &str,
    format: Format,
    store: &StoreId,
) -> Result<ThemeDocument, ThemesError> {
    let json = match format {
        Format::Json => raw.to_owned(),
        Format::Yaml => {
            let value: serde_json::Value = serde_yaml::from_str(raw)?;
            serde_json::to_string(&value)?
        }
    };
    Ok(ThemeDocument::from_json_for(&json, store)?)
}

fn theme_slugs() -> String {
    ThemeKind::ALL
        .iter()
        .map(|t| t.slug())
        .collect::<Vec<_>>()
        .join(", ")
}
