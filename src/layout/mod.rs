//! Masonry tile layout.
//!
//! The gallery packs fixed-width, variable-height tiles into columns. Every tile goes into the
//! column that is currently the shortest, with ties going to the leftmost column. This greedy
//! single pass is O(n·C) and fully deterministic: the same items, container width, column count
//! and gap always produce the same placements, down to the bit.
//!
//! There is no incremental update. Whenever any input changes, the layout is recomputed from
//! scratch and replaces the previous one wholesale. Consumers that want to animate between two
//! layouts match tiles by their stable ids (see [`crate::animation`]).
//!
//! Coordinates are logical pixels relative to the top-left corner of the gallery container.
//!
//! A few inputs are treated as caller bugs rather than runtime conditions: a zero column count, a
//! negative (or non-finite) gap and a negative (or non-finite) intrinsic height. These are
//! rejected with a [`LayoutError`]. A container with no usable width, on the other hand, is a
//! normal transient state (it has not been measured yet) and simply produces an empty layout.

use cafe_gallery_config::{Animations, Config};
use tracing::trace;

pub mod breakpoints;
mod column;
pub mod types;

#[cfg(test)]
pub mod snapshot;

#[cfg(test)]
pub(crate) mod tests;

pub use self::breakpoints::Breakpoints;
use self::column::ColumnHeights;
pub use self::types::{LayoutError, MasonryLayout, PlacedTile};

pub trait LayoutElement {
    /// Type that can be used as a unique ID of this element.
    type Id: PartialEq + std::fmt::Debug + Clone;

    /// Unique ID of this element.
    ///
    /// Must stay the same across layout passes so that tiles can be matched between layouts.
    fn id(&self) -> &Self::Id;

    /// Height of the tile in logical pixels.
    ///
    /// Tiles are never scaled: every tile in a column gets the column width and keeps this
    /// height.
    fn intrinsic_height(&self) -> f64;
}

/// Configurable properties of the gallery layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Spacing between tiles, both horizontally and vertically.
    pub gap: f64,
    pub breakpoints: Breakpoints,
    /// Height reserved for the container while there is nothing to lay out.
    pub placeholder_height: f64,
    pub animations: Animations,
}

impl Default for Options {
    fn default() -> Self {
        let layout = cafe_gallery_config::Layout::default();
        Self {
            gap: f64::from(layout.gap),
            breakpoints: Breakpoints::from_config(&layout),
            placeholder_height: f64::from(layout.placeholder_height),
            animations: Animations::default(),
        }
    }
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        let layout = &config.layout;
        Self {
            gap: f64::from(layout.gap),
            breakpoints: Breakpoints::from_config(layout),
            placeholder_height: f64::from(layout.placeholder_height),
            animations: config.animations.clone(),
        }
    }
}

/// Validates the inputs that can only be wrong because of a caller bug.
pub fn validate<W: LayoutElement>(
    items: &[W],
    column_count: usize,
    gap: f64,
) -> Result<(), LayoutError> {
    if column_count == 0 {
        return Err(LayoutError::ZeroColumns);
    }

    if !gap.is_finite() || gap < 0. {
        return Err(LayoutError::InvalidGap(gap));
    }

    for (index, item) in items.iter().enumerate() {
        let height = item.intrinsic_height();
        if !height.is_finite() || height < 0. {
            return Err(LayoutError::InvalidHeight { index, height });
        }

        // Tiles are matched between layouts by id.
        if let Some(first) = items[..index].iter().position(|prev| prev.id() == item.id()) {
            return Err(LayoutError::DuplicateId { first, index });
        }
    }

    Ok(())
}

/// Computes the masonry placement of `items` inside a container of the given width.
///
/// Tiles are returned in input order. A container narrower than the gaps between its columns
/// (including a zero-width, unmeasured container) yields an empty layout.
pub fn compute<W: LayoutElement>(
    items: &[W],
    container_width: f64,
    column_count: usize,
    gap: f64,
) -> Result<MasonryLayout<W::Id>, LayoutError> {
    let _span = tracy_client::span!("layout::compute");

    validate(items, column_count, gap)?;

    if items.is_empty() || !container_width.is_finite() || container_width <= 0. {
        return Ok(MasonryLayout::empty(column_count, gap));
    }

    let gaps = (column_count - 1) as f64 * gap;
    let column_width = (container_width - gaps) / column_count as f64;
    if column_width <= 0. {
        trace!("container width {container_width} leaves no room for {column_count} columns");
        return Ok(MasonryLayout::empty(column_count, gap));
    }

    let mut heights = ColumnHeights::new(column_count, gap);
    let mut tiles = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let height = item.intrinsic_height();
        let column = heights.shortest();
        let y = heights.push(column, height);

        tiles.push(PlacedTile {
            id: item.id().clone(),
            index,
            column,
            x: column as f64 * (column_width + gap),
            y,
            width: column_width,
            height,
        });
    }

    let total_height = heights.total_height();
    trace!(
        "laid out {} tiles in {column_count} columns of width {column_width}, \
         total height {total_height}",
        tiles.len()
    );

    Ok(MasonryLayout::new(tiles, column_count, column_width, gap, total_height))
}
