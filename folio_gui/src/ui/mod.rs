//! UI module for Folio GUI
//!
//! # Layout
//! - `header` - Page title and motion toggle
//! - `filter_bar` - Category filter buttons
//! - `project_grid` - Staggered rows, or the fallback message
//! - `project_card` - A single project card
//! - `status_bar` - Bottom summary line

pub mod filter_bar;
pub mod header;
pub mod project_card;
pub mod project_grid;
pub mod status_bar;
