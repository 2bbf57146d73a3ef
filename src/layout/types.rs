//! Output types of the masonry layout.

use serde::Serialize;

/// Invalid layout input.
///
/// Every variant is a caller bug: these values come from configuration or code, never from
/// runtime data such as a container measurement.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("gap must be a non-negative finite number, got {0}")]
    InvalidGap(f64),
    #[error("item {index} has invalid intrinsic height {height}")]
    InvalidHeight { index: usize, height: f64 },
    #[error("item {index} reuses the id of item {first}")]
    DuplicateId { first: usize, index: usize },
}

/// A tile placed by the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedTile<Id> {
    pub id: Id,
    /// Index of the item in the input list.
    ///
    /// This is the tile's identity for click handling; the position is derived data.
    pub index: usize,
    /// Column the tile was placed in, from 0 at the left.
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl<Id> PlacedTile<Id> {
    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the point lies within the tile.
    ///
    /// The top and left edges are inclusive, the bottom and right edges are exclusive, so that
    /// adjacent tiles never both claim a point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasonryLayout<Id> {
    /// Tiles in input order.
    tiles: Vec<PlacedTile<Id>>,
    column_count: usize,
    /// Width shared by every tile of this pass.
    column_width: f64,
    gap: f64,
    /// Height of the content, without a trailing gap.
    total_height: f64,
}

impl<Id> MasonryLayout<Id> {
    pub(super) fn new(
        tiles: Vec<PlacedTile<Id>>,
        column_count: usize,
        column_width: f64,
        gap: f64,
        total_height: f64,
    ) -> Self {
        Self {
            tiles,
            column_count,
            column_width,
            gap,
            total_height,
        }
    }

    /// An empty layout, as produced for an unmeasured container or an empty item list.
    pub fn empty(column_count: usize, gap: f64) -> Self {
        Self::new(Vec::new(), column_count, 0., gap, 0.)
    }

    pub fn tiles(&self) -> &[PlacedTile<Id>] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Returns the tile of the item with the given input index.
    pub fn tile(&self, index: usize) -> Option<&PlacedTile<Id>> {
        // Tiles are stored in input order, one per item.
        self.tiles.get(index)
    }

    /// Tiles of one column, from top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &PlacedTile<Id>> + '_ {
        self.tiles.iter().filter(move |tile| tile.column == column)
    }

    /// X coordinate of the left edge of the given column.
    pub fn column_x(&self, column: usize) -> f64 {
        column as f64 * (self.column_width + self.gap)
    }
}

impl<Id: PartialEq> MasonryLayout<Id> {
    pub fn tile_by_id(&self, id: &Id) -> Option<&PlacedTile<Id>> {
        self.tiles.iter().find(|tile| &tile.id == id)
    }
}
