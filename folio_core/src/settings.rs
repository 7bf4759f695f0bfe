//! # Page Settings
//!
//! Optional TOML configuration. Every field has a default, so an empty file
//! (or no file at all) gives the stock page.
//!
//! ```toml
//! [selection]
//! expiry_ms = 800
//!
//! [motion]
//! base_delay_ms = 150
//! stagger_ms = 140
//! reduced_motion = false
//!
//! [catalog]
//! path = "content/projects.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{load_catalog, Catalog};
use crate::errors::{FolioError, FolioResult};
use crate::motion::MotionSettings;
use crate::selection::DEFAULT_EXPIRY;

/// Root settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub selection: SelectionSettings,
    pub motion: MotionSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// How long a card stays highlighted after being selected (ms)
    pub expiry_ms: u64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        SelectionSettings {
            expiry_ms: DEFAULT_EXPIRY.as_millis() as u64,
        }
    }
}

impl SelectionSettings {
    pub fn expiry(&self) -> Duration {
        Duration::from_millis(self.expiry_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// External catalog file. `None` uses the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl PageSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(contents: &str) -> FolioResult<Self> {
        let settings: PageSettings = toml::from_str(contents)
            .map_err(|e| FolioError::serialization(format!("Invalid settings TOML: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// A relative `catalog.path` is resolved against the settings file's
    /// directory.
    pub fn load(path: &Path) -> FolioResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FolioError::file_error("read", path.display().to_string(), e.to_string()))?;
        let mut settings = Self::from_toml_str(&contents)?;

        if let (Some(catalog_path), Some(dir)) = (&settings.catalog.path, path.parent()) {
            if catalog_path.is_relative() {
                settings.catalog.path = Some(dir.join(catalog_path));
            }
        }

        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load the configured catalog, falling back to the built-in one.
    pub fn load_catalog(&self) -> FolioResult<Catalog> {
        match &self.catalog.path {
            Some(path) => load_catalog(path),
            None => Catalog::embedded(),
        }
    }

    fn validate(&self) -> FolioResult<()> {
        if self.selection.expiry_ms == 0 {
            return Err(FolioError::invalid_input(
                "selection.expiry_ms",
                "0",
                "Expiry delay must be positive",
            ));
        }
        Ok(())
    }
}
