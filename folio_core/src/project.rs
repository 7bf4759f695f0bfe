//! # Project Records
//!
//! A `Project` is one case study shown on the portfolio page. Records are
//! read-only: they come from the catalog and the page only ever borrows them.
//!
//! ## Categories
//!
//! Filtering uses a closed set of categories. `Category::All` is the
//! "no filter" sentinel and is never a project's own category. A project
//! whose label is not one of the known disciplines keeps that label as
//! `CategoryTag::Unrecognized` and only shows up under `All`.
//!
//! ```rust
//! use folio_core::project::{Category, CategoryTag};
//!
//! assert_eq!(CategoryTag::from("Interiors".to_string()), CategoryTag::Known(Category::Interiors));
//! assert!(!CategoryTag::from("Landscape".to_string()).is_known());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Filter category for the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// No filter applied
    #[default]
    All,
    Architecture,
    Interiors,
    Urban,
    Object,
}

impl Category {
    /// All categories in button order
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Architecture,
        Category::Interiors,
        Category::Urban,
        Category::Object,
    ];

    /// Label shown on the filter button and used in catalog files
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Architecture => "Architecture",
            Category::Interiors => "Interiors",
            Category::Urban => "Urban",
            Category::Object => "Object",
        }
    }

    /// Match a catalog discipline label.
    ///
    /// Exact comparison against [`Category::label`]. "All" is a filter
    /// sentinel rather than a discipline, so it never matches.
    pub fn discipline_from_label(label: &str) -> Option<Self> {
        Category::ALL[1..]
            .iter()
            .copied()
            .find(|category| category.label() == label)
    }

    /// Parse typed user input, including "All".
    ///
    /// Case-insensitive and tolerant of surrounding whitespace and
    /// singular/plural spellings. Not used for catalog data.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "all" => Some(Category::All),
            "architecture" => Some(Category::Architecture),
            "interiors" | "interior" => Some(Category::Interiors),
            "urban" => Some(Category::Urban),
            "object" | "objects" => Some(Category::Object),
            _ => None,
        }
    }

    /// Whether this is the "no filter" sentinel
    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A project's own category as it appears in the catalog.
///
/// Serializes as the plain label string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryTag {
    /// One of the filterable disciplines (never `Category::All`)
    Known(Category),
    /// Label outside the closed set, kept verbatim
    Unrecognized(String),
}

impl CategoryTag {
    pub fn is_known(&self) -> bool {
        matches!(self, CategoryTag::Known(_))
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryTag::Known(category) => category.label(),
            CategoryTag::Unrecognized(label) => label,
        }
    }
}

impl From<String> for CategoryTag {
    fn from(label: String) -> Self {
        match Category::discipline_from_label(&label) {
            Some(category) => CategoryTag::Known(category),
            None => CategoryTag::Unrecognized(label),
        }
    }
}

impl From<CategoryTag> for String {
    fn from(tag: CategoryTag) -> Self {
        match tag {
            CategoryTag::Known(category) => category.label().to_string(),
            CategoryTag::Unrecognized(label) => label,
        }
    }
}

/// A single portfolio case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric identifier from the content source
    pub id: u32,

    /// URL-safe identifier, unique within a catalog. Selection is keyed by it.
    pub slug: String,

    /// Display title
    pub title: String,

    pub category: CategoryTag,

    /// Hero image path or URL, passed through to the card renderer
    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// One-line teaser
    #[serde(default)]
    pub summary: String,
}

impl Project {
    /// Create a project with the required fields; the rest start empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_core::project::{Category, Project};
    ///
    /// let project = Project::new(1, "harbour-house", "Harbour House", Category::Architecture);
    /// assert!(project.is_in(Category::Architecture));
    /// assert!(project.is_in(Category::All));
    /// ```
    pub fn new(id: u32, slug: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Project {
            id,
            slug: slug.into(),
            title: title.into(),
            category: CategoryTag::from(category.label().to_string()),
            image: String::new(),
            location: None,
            year: None,
            summary: String::new(),
        }
    }

    /// Whether this project shows up under the given filter.
    ///
    /// `All` matches everything, including unrecognized categories.
    pub fn is_in(&self, filter: Category) -> bool {
        filter.is_all() || self.category == CategoryTag::Known(filter)
    }

    /// Subtitle line for cards, e.g. "Lisbon, 2021"
    pub fn caption(&self) -> String {
        match (&self.location, self.year) {
            (Some(location), Some(year)) => format!("{}, {}", location, year),
            (Some(location), None) => location.clone(),
            (None, Some(year)) => year.to_string(),
            (None, None) => String::new(),
        }
    }
}
