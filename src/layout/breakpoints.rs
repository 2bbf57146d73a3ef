//! Responsive column count.
//!
//! Breakpoints behave like a list of `min-width` media queries: they are checked from the widest
//! to the narrowest and the first one the viewport satisfies decides the column count. A viewport
//! narrower than every breakpoint gets the default count.

use super::LayoutError;

#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    /// `(min_width, columns)` sorted by decreasing `min_width`.
    rules: Vec<(f64, usize)>,
    default_columns: usize,
}

impl Breakpoints {
    /// Creates breakpoints from `(min_width, columns)` pairs.
    ///
    /// Among pairs with the same `min_width`, the one given first wins.
    pub fn new(
        rules: impl IntoIterator<Item = (f64, usize)>,
        default_columns: usize,
    ) -> Result<Self, LayoutError> {
        if default_columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }

        let mut rules: Vec<_> = rules.into_iter().collect();
        if rules.iter().any(|&(_, columns)| columns == 0) {
            return Err(LayoutError::ZeroColumns);
        }

        // Stable sort keeps the given order among equal widths.
        rules.sort_by(|a, b| b.0.total_cmp(&a.0));

        Ok(Self {
            rules,
            default_columns,
        })
    }

    pub fn from_config(layout: &cafe_gallery_config::Layout) -> Self {
        let mut rules: Vec<_> = layout
            .breakpoints
            .iter()
            .map(|bp| (f64::from(bp.min_width), bp.columns.get()))
            .collect();
        rules.sort_by(|a, b| b.0.total_cmp(&a.0));

        Self {
            rules,
            default_columns: layout.default_columns.get(),
        }
    }

    /// A single breakpoint-less column count for every viewport.
    pub fn fixed(columns: usize) -> Result<Self, LayoutError> {
        Self::new([], columns)
    }

    /// Resolves the column count for a viewport of the given width.
    pub fn columns_for(&self, viewport_width: f64) -> usize {
        self.rules
            .iter()
            .find(|&&(min_width, _)| min_width <= viewport_width)
            .map_or(self.default_columns, |&(_, columns)| columns)
    }

    pub fn default_columns(&self) -> usize {
        self.default_columns
    }

    /// The largest column count any viewport can resolve to.
    pub fn max_columns(&self) -> usize {
        self.rules
            .iter()
            .map(|&(_, columns)| columns)
            .fold(self.default_columns, usize::max)
    }
}
