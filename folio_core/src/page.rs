//! # Portfolio Page Session
//!
//! `PortfolioPage` owns all page state for one session: the catalog, the
//! filter selection, the active-card controller and the motion settings.
//! Hosts mutate it through explicit methods and read a fresh [`PageView`]
//! after each change.
//!
//! ```text
//! set_category ─▶ FilterState ─▶ filtered projects ─▶ group_rows ─▶ compose_grid ─▶ PageView
//! select/expire ─▶ SelectionController ─────────────────────────────────┘
//! ```
//!
//! The host is responsible for running the timer behind each
//! [`ExpiryTicket`] returned by [`PortfolioPage::select`], cancelling the
//! previous one, and calling [`PortfolioPage::expire`] when it fires.

use std::time::Instant;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::FolioResult;
use crate::filter::FilterState;
use crate::motion::MotionSettings;
use crate::presentation::{compose_grid, GridView};
use crate::project::{Category, Project};
use crate::selection::{ExpiryTicket, SelectionController, SelectionState};
use crate::settings::PageSettings;

/// One filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub category: Category,
    pub selected: bool,
    /// Projects shown if this button is picked
    pub count: usize,
}

/// Everything a renderer needs for one frame of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    pub categories: Vec<CategoryButton>,
    pub grid: GridView<'a>,
}

impl PageView<'_> {
    /// The one button marked selected
    pub fn selected_category(&self) -> Option<Category> {
        self.categories.iter().find(|b| b.selected).map(|b| b.category)
    }
}

/// Page state for one session.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    catalog: Catalog,
    filter: FilterState,
    selection: SelectionController,
    motion: MotionSettings,
}

impl PortfolioPage {
    /// Create a page over `catalog` with default timing.
    pub fn new(catalog: Catalog) -> Self {
        PortfolioPage {
            catalog,
            filter: FilterState::new(),
            selection: SelectionController::default(),
            motion: MotionSettings::default(),
        }
    }

    /// Create a page from settings, loading the configured catalog.
    pub fn from_settings(settings: &PageSettings) -> FolioResult<Self> {
        let catalog = settings.load_catalog()?;
        Ok(Self::with_catalog(catalog, settings))
    }

    /// Create a page over `catalog` with timing taken from `settings`.
    pub fn with_catalog(catalog: Catalog, settings: &PageSettings) -> Self {
        PortfolioPage {
            catalog,
            filter: FilterState::new(),
            selection: SelectionController::new(settings.selection.expiry()),
            motion: settings.motion,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn motion(&self) -> &MotionSettings {
        &self.motion
    }

    pub fn set_motion(&mut self, motion: MotionSettings) {
        self.motion = motion;
    }

    pub fn category(&self) -> Category {
        self.filter.selected()
    }

    /// Switch the filter. Returns `true` if the grid changed.
    pub fn set_category(&mut self, category: Category) -> bool {
        self.filter.set_category(category)
    }

    /// Projects visible under the current filter, in catalog order
    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.filter.filtered_projects(self.catalog.projects())
    }

    pub fn selection(&self) -> SelectionState<'_> {
        self.selection.state()
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.selection.active_slug()
    }

    /// A card reported a selection. See [`SelectionController::select`].
    pub fn select(&mut self, slug: impl Into<String>, now: Instant) -> Option<ExpiryTicket> {
        self.selection.select(slug, now)
    }

    pub fn clear_selection(&mut self) -> Option<ExpiryTicket> {
        self.selection.clear()
    }

    /// A scheduled expiry fired. Stale tickets are ignored.
    pub fn expire(&mut self, ticket: ExpiryTicket) -> bool {
        self.selection.expire(ticket)
    }

    pub fn expire_due(&mut self, now: Instant) -> bool {
        self.selection.expire_due(now)
    }

    /// Compose the current page.
    pub fn view(&self) -> PageView<'_> {
        let selected = self.filter.selected();
        let categories = Category::ALL
            .iter()
            .map(|&category| CategoryButton {
                category,
                selected: category == selected,
                count: self.catalog.count_in(category),
            })
            .collect();

        let visible = self.filtered_projects();
        let grid = compose_grid(&visible, self.selection.active_slug(), &self.motion);

        PageView { categories, grid }
    }
}
