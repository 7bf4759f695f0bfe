//! # folio_core - Portfolio Page Engine
//!
//! `folio_core` holds all the logic behind the Folio portfolio page: a
//! filterable grid of architecture and design projects laid out in a
//! staggered 3-2-2 row pattern, with a card highlight that expires on its
//! own. Rendering lives in the host (`folio_gui`, `folio_cli`); this crate
//! produces a JSON-serializable view model for it.
//!
//! ## Design Philosophy
//!
//! - **Pure layout**: grouping and composition are plain functions
//! - **Explicit state**: filter and selection live on an owned session object
//! - **Host-driven time**: callers pass `Instant`s in and run the timers
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use folio_core::{Catalog, Category, PortfolioPage};
//!
//! let mut page = PortfolioPage::new(Catalog::embedded().unwrap());
//! page.set_category(Category::Architecture);
//! page.select("harbour-house", Instant::now());
//!
//! let view = page.view();
//! let json = serde_json::to_string_pretty(&view).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project records and categories
//! - [`catalog`] - Loading and validating the project list
//! - [`filter`] - Category filter state
//! - [`layout`] - 3-2-2 row grouping
//! - [`selection`] - Active card with cancellable expiry
//! - [`presentation`] - Offset tags, size hints, grid view model
//! - [`motion`] - Reveal delay schedule
//! - [`settings`] - TOML configuration
//! - [`page`] - Session object tying it together
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod filter;
pub mod layout;
pub mod motion;
pub mod page;
pub mod presentation;
pub mod project;
pub mod selection;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use catalog::{load_catalog, Catalog};
pub use errors::{FolioError, FolioResult};
pub use layout::{group_rows, RowPattern};
pub use page::{PageView, PortfolioPage};
pub use presentation::{CardSize, GridView, OffsetTag};
pub use project::{Category, Project};
pub use selection::{ExpiryTicket, SelectionController, SelectionState};
pub use settings::PageSettings;
