//! # Category Filter
//!
//! Holds the selected category and derives the visible project list from a
//! catalog slice. The derived list is recomputed on demand; nothing is
//! cached between calls.

use tracing::debug;

use crate::project::{Category, Project};

/// Currently selected filter category. Starts at `Category::All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: Category,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    /// Replace the current selection.
    ///
    /// Returns `true` if the value changed, meaning rows must be regrouped.
    pub fn set_category(&mut self, category: Category) -> bool {
        if self.selected == category {
            return false;
        }
        debug!(from = %self.selected, to = %category, "category changed");
        self.selected = category;
        true
    }

    /// Projects visible under the current selection, in catalog order.
    ///
    /// With `All` this is every project, unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_core::filter::FilterState;
    /// use folio_core::project::{Category, Project};
    ///
    /// let projects = vec![
    ///     Project::new(1, "a", "A", Category::Urban),
    ///     Project::new(2, "b", "B", Category::Object),
    /// ];
    /// let mut filter = FilterState::new();
    /// filter.set_category(Category::Object);
    /// let visible = filter.filtered_projects(&projects);
    /// assert_eq!(visible.len(), 1);
    /// assert_eq!(visible[0].slug, "b");
    /// ```
    pub fn filtered_projects<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        if self.selected.is_all() {
            return projects.iter().collect();
        }
        projects.iter().filter(|p| p.is_in(self.selected)).collect()
    }
}
