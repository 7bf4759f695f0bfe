//! # Project Catalog
//!
//! The static, ordered list of projects the page displays. A catalog is
//! loaded once at startup and never changes afterwards.
//!
//! ## File Format
//!
//! Catalogs are JSON:
//!
//! ```text
//! {
//!   "version": "0.1.0",
//!   "projects": [
//!     { "id": 1, "slug": "harbour-house", "title": "Harbour House",
//!       "category": "Architecture", "image": "/img/harbour.jpg" }
//!   ]
//! }
//! ```
//!
//! A default catalog is compiled into the binary from `data/projects.json`.
//!
//! ## Example
//!
//! ```rust
//! use folio_core::catalog::Catalog;
//! use folio_core::project::Category;
//!
//! let catalog = Catalog::embedded().unwrap();
//! assert!(catalog.count_in(Category::All) > 0);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{FolioError, FolioResult};
use crate::project::{Category, Project};

/// Current schema version for catalog files
pub const CATALOG_VERSION: &str = "0.1.0";

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogAssets;

const EMBEDDED_CATALOG_FILE: &str = "projects.json";

static EMBEDDED: Lazy<FolioResult<Catalog>> = Lazy::new(|| -> FolioResult<Catalog> {
    let file = CatalogAssets::get(EMBEDDED_CATALOG_FILE).ok_or_else(|| FolioError::Internal {
        message: format!("embedded asset '{}' is missing", EMBEDDED_CATALOG_FILE),
    })?;
    let contents = std::str::from_utf8(&file.data)
        .map_err(|e| FolioError::serialization(format!("embedded catalog is not UTF-8: {}", e)))?;
    Catalog::from_json_str(contents)
});

/// Ordered, read-only collection of projects.
///
/// Only constructed through validating constructors, so slugs are always
/// non-empty and unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    /// Schema version (for compatibility checks)
    version: String,

    /// Projects in display order
    projects: Vec<Project>,
}

/// On-disk shape, checked before it becomes a [`Catalog`]
#[derive(Deserialize)]
struct CatalogFile {
    version: String,
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from projects already in memory.
    ///
    /// Slugs must be non-empty and unique since selection is keyed by them.
    pub fn new(projects: Vec<Project>) -> FolioResult<Self> {
        let catalog = Catalog {
            version: CATALOG_VERSION.to_string(),
            projects,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// A catalog with no projects; every filter shows the empty message.
    pub fn empty() -> Self {
        Catalog {
            version: CATALOG_VERSION.to_string(),
            projects: Vec::new(),
        }
    }

    /// The catalog shipped inside the binary.
    pub fn embedded() -> FolioResult<Self> {
        EMBEDDED.clone()
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(contents: &str) -> FolioResult<Self> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| FolioError::serialization(format!("Invalid catalog JSON: {}", e)))?;
        validate_version(&file.version)?;

        let catalog = Catalog {
            version: file.version,
            projects: file.projects,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of projects shown under a filter
    pub fn count_in(&self, category: Category) -> usize {
        self.projects.iter().filter(|p| p.is_in(category)).count()
    }

    /// Look up a project by slug
    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    fn validate(&self) -> FolioResult<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.slug.trim().is_empty() {
                return Err(FolioError::invalid_input(
                    "slug",
                    project.id.to_string(),
                    "Project slug must not be empty",
                ));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(FolioError::invalid_input(
                    "slug",
                    project.slug.clone(),
                    "Duplicate project slug",
                ));
            }
            if !project.category.is_known() {
                warn!(
                    slug = %project.slug,
                    category = project.category.label(),
                    "unrecognized category, project will only appear under All"
                );
            }
        }
        Ok(())
    }
}

/// Load a catalog from a JSON file.
///
/// # Returns
///
/// * `Ok(Catalog)` - Successfully loaded catalog
/// * `Err(FolioError::FileError)` - I/O error
/// * `Err(FolioError::SerializationError)` - Invalid JSON
/// * `Err(FolioError::VersionMismatch)` - File version is incompatible
/// * `Err(FolioError::InvalidInput)` - Empty or duplicate slugs
///
/// # Example
///
/// ```rust,no_run
/// use folio_core::catalog::load_catalog;
/// use std::path::Path;
///
/// let catalog = load_catalog(Path::new("projects.json"))?;
/// println!("Loaded {} projects", catalog.len());
/// # Ok::<(), folio_core::errors::FolioError>(())
/// ```
pub fn load_catalog(path: &Path) -> FolioResult<Catalog> {
    let contents = fs::read_to_string(path)
        .map_err(|e| FolioError::file_error("read", path.display().to_string(), e.to_string()))?;

    let catalog = Catalog::from_json_str(&contents).map_err(|e| match e {
        FolioError::SerializationError { reason } => FolioError::SerializationError {
            reason: format!("{} ({})", reason, path.display()),
        },
        other => other,
    })?;

    debug!(path = %path.display(), projects = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> FolioResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = CATALOG_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || FolioError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: CATALOG_VERSION.to_string(),
    };

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::CategoryTag;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_catalog_path(name: &str) -> PathBuf {
        temp_dir().join(format!("folio_test_{}.json", name))
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.version(), CATALOG_VERSION);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.count_in(Category::All), catalog.len());
    }

    #[test]
    fn test_embedded_catalog_has_no_objects() {
        // The shipped content has no Object work yet; the page shows the fallback
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.count_in(Category::Object), 0);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let projects = vec![
            Project::new(1, "same", "First", Category::Urban),
            Project::new(2, "same", "Second", Category::Urban),
        ];
        let err = Catalog::new(projects).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_empty_slug_rejected() {
        let err = Catalog::new(vec![Project::new(1, "  ", "Blank", Category::Urban)]).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput { .. }));
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let json = r#"{
            "version": "0.1.0",
            "projects": [
                {"id": 1, "slug": "garden", "title": "Garden", "category": "Landscape"}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(
            catalog.projects()[0].category,
            CategoryTag::Unrecognized("Landscape".to_string())
        );
        assert_eq!(catalog.count_in(Category::All), 1);
        assert_eq!(catalog.count_in(Category::Urban), 0);
    }

    #[test]
    fn test_near_miss_categories_only_show_under_all() {
        let json = r#"{
            "version": "0.1.0",
            "projects": [
                {"id": 1, "slug": "stool", "title": "Stool", "category": "objects"},
                {"id": 2, "slug": "loft", "title": "Loft", "category": "interior"},
                {"id": 3, "slug": "tower", "title": "Tower", "category": " ARCHITECTURE "},
                {"id": 4, "slug": "hall", "title": "Hall", "category": "architecture"}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();

        assert_eq!(catalog.count_in(Category::All), 4);
        for category in &Category::ALL[1..] {
            assert_eq!(catalog.count_in(*category), 0, "{}", category);
        }

        let reserialized = serde_json::to_value(&catalog).unwrap();
        assert_eq!(reserialized["projects"][0]["category"], "objects");
        assert_eq!(reserialized["projects"][2]["category"], " ARCHITECTURE ");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.version(), CATALOG_VERSION);
        assert_eq!(catalog, Catalog::new(Vec::new()).unwrap());
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(CATALOG_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = temp_catalog_path("load");
        let catalog = Catalog::new(vec![
            Project::new(1, "a", "A", Category::Architecture),
            Project::new(2, "b", "B", Category::Interiors),
        ])
        .unwrap();
        fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);
        assert_eq!(loaded.find("b").map(|p| p.title.as_str()), Some("B"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(&temp_catalog_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
