//! # Grid Composition
//!
//! Turns grouped rows into render-ready view data for the card renderer.
//! Each card gets:
//!
//! - a size hint: three-card rows use compact cards, all other rows large
//! - a vertical offset tag from its position in the row
//! - whether it is the active card
//! - its reveal delay
//!
//! ```text
//! 3-card row:   up     neutral   down      (down shifts further than up)
//! 2-card row:   up     down                (symmetric)
//! ```
//!
//! Everything here is recomputed per render and holds no state.

use std::time::Duration;

use serde::Serialize;

use crate::layout::group_rows;
use crate::motion::MotionSettings;
use crate::project::Project;

/// Fallback text when no project matches the filter
pub const EMPTY_MESSAGE: &str = "No projects found in this category.";

/// Card size hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSize {
    Compact,
    Large,
}

impl CardSize {
    /// Three-card rows are compact; two-card and short rows are large.
    pub fn for_row_len(len: usize) -> Self {
        if len == 3 {
            CardSize::Compact
        } else {
            CardSize::Large
        }
    }

    pub fn is_large(&self) -> bool {
        matches!(self, CardSize::Large)
    }
}

/// Cosmetic vertical position of a card within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetTag {
    Up,
    Neutral,
    Down,
}

impl OffsetTag {
    /// Tag for the card at `position` in a row of `row_len` cards.
    pub fn for_position(row_len: usize, position: usize) -> Self {
        match (row_len, position) {
            (3, 0) => OffsetTag::Up,
            (3, 1) => OffsetTag::Neutral,
            (3, _) => OffsetTag::Down,
            (_, 0) => OffsetTag::Up,
            _ => OffsetTag::Down,
        }
    }

    /// Vertical shift in logical pixels; negative is up.
    pub fn shift(&self, size: CardSize) -> f32 {
        match (self, size) {
            (OffsetTag::Neutral, _) => 0.0,
            (OffsetTag::Up, CardSize::Compact) => -40.0,
            (OffsetTag::Down, CardSize::Compact) => 64.0,
            (OffsetTag::Up, CardSize::Large) => -48.0,
            (OffsetTag::Down, CardSize::Large) => 48.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetTag::Up => "up",
            OffsetTag::Neutral => "neutral",
            OffsetTag::Down => "down",
        }
    }
}

/// One card, ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView<'a> {
    pub project: &'a Project,
    pub offset: OffsetTag,
    pub is_active: bool,
    pub reveal_delay_ms: u64,
}

impl CardView<'_> {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// One row of the staggered grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView<'a> {
    /// Position of the row in the grid; rows are revealed in this order
    pub reveal_order: usize,
    pub size: CardSize,
    pub cards: Vec<CardView<'a>>,
}

impl RowView<'_> {
    /// Largest upward shift in this row, as a positive number
    pub fn max_lift(&self) -> f32 {
        self.cards
            .iter()
            .map(|c| -c.offset.shift(self.size))
            .fold(0.0, f32::max)
    }
}

/// What the grid section shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView<'a> {
    Rows { rows: Vec<RowView<'a>> },
    Empty { message: &'static str },
}

impl<'a> GridView<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, GridView::Empty { .. })
    }

    pub fn rows(&self) -> &[RowView<'a>] {
        match self {
            GridView::Rows { rows } => rows,
            GridView::Empty { .. } => &[],
        }
    }
}

/// Build the grid for the visible projects.
///
/// An empty list skips grouping and yields [`GridView::Empty`].
///
/// # Example
///
/// ```rust
/// use folio_core::motion::MotionSettings;
/// use folio_core::presentation::{compose_grid, CardSize, OffsetTag};
/// use folio_core::project::{Category, Project};
///
/// let projects: Vec<Project> = (0..5)
///     .map(|i| Project::new(i, format!("p{}", i), format!("P{}", i), Category::Urban))
///     .collect();
/// let visible: Vec<&Project> = projects.iter().collect();
///
/// let grid = compose_grid(&visible, Some("p4"), &MotionSettings::default());
/// let rows = grid.rows();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].size, CardSize::Compact);
/// assert_eq!(rows[1].size, CardSize::Large);
/// assert_eq!(rows[1].cards[1].offset, OffsetTag::Down);
/// assert!(rows[1].cards[1].is_active);
/// ```
pub fn compose_grid<'a>(
    visible: &[&'a Project],
    active_slug: Option<&str>,
    motion: &MotionSettings,
) -> GridView<'a> {
    if visible.is_empty() {
        return GridView::Empty {
            message: EMPTY_MESSAGE,
        };
    }

    let rows = group_rows(visible)
        .into_iter()
        .enumerate()
        .map(|(reveal_order, row)| compose_row(reveal_order, row, active_slug, motion))
        .collect();

    GridView::Rows { rows }
}

fn compose_row<'a>(
    reveal_order: usize,
    row: &[&'a Project],
    active_slug: Option<&str>,
    motion: &MotionSettings,
) -> RowView<'a> {
    let cards = row
        .iter()
        .copied()
        .enumerate()
        .map(|(position, project)| CardView {
            project,
            offset: OffsetTag::for_position(row.len(), position),
            is_active: active_slug == Some(project.slug.as_str()),
            reveal_delay_ms: motion.reveal_delay(position).as_millis() as u64,
        })
        .collect();

    RowView {
        reveal_order,
        size: CardSize::for_row_len(row.len()),
        cards,
    }
}
