//! Snapshot types for golden testing.
//!
//! These types capture layout state in a stable text form so that golden tests can pin down the
//! exact placements produced for the gallery catalog.

use std::fmt;

use super::{MasonryLayout, PlacedTile};

/// Snapshot of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub column_count: usize,
    pub column_width: f64,
    pub total_height: f64,
    /// Tiles in input order.
    pub tiles: Vec<TileSnapshot>,
}

/// Snapshot of a single tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSnapshot {
    pub id: String,
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl<Id: fmt::Display> From<&PlacedTile<Id>> for TileSnapshot {
    fn from(tile: &PlacedTile<Id>) -> Self {
        Self {
            id: tile.id.to_string(),
            column: tile.column,
            x: tile.x,
            y: tile.y,
            width: tile.width,
            height: tile.height,
        }
    }
}

impl<Id: fmt::Display> MasonryLayout<Id> {
    /// Create a snapshot of this layout for golden testing.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            column_count: self.column_count(),
            column_width: self.column_width(),
            total_height: self.total_height(),
            tiles: self.tiles().iter().map(TileSnapshot::from).collect(),
        }
    }
}

impl fmt::Display for LayoutSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "columns: {}, column width: {:.1}, total height: {:.1}",
            self.column_count, self.column_width, self.total_height
        )?;
        for tile in &self.tiles {
            writeln!(
                f,
                "{} col {} at ({:.1}, {:.1}) size {:.1}x{:.1}",
                tile.id, tile.column, tile.x, tile.y, tile.width, tile.height
            )?;
        }
        Ok(())
    }
}
