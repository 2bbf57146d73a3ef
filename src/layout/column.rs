/// Running heights of the columns during a layout pass.
///
/// Every column height includes the trailing gap after its last tile, which is the y coordinate
/// of the next tile placed there.
#[derive(Debug)]
pub(super) struct ColumnHeights {
    heights: Vec<f64>,
    gap: f64,
}

impl ColumnHeights {
    pub fn new(column_count: usize, gap: f64) -> Self {
        Self {
            heights: vec![0.; column_count],
            gap,
        }
    }

    /// Index of the shortest column, the leftmost one among equals.
    pub fn shortest(&self) -> usize {
        let mut idx = 0;
        let mut best = self.heights[0];
        for (i, &height) in self.heights.iter().enumerate().skip(1) {
            if height < best {
                best = height;
                idx = i;
            }
        }
        idx
    }

    /// Stacks a tile of the given height onto the column and returns its y coordinate.
    pub fn push(&mut self, column: usize, height: f64) -> f64 {
        let y = self.heights[column];
        self.heights[column] += height + self.gap;
        y
    }

    /// Height of the content without the trailing gap, or 0 if nothing was placed.
    pub fn total_height(&self) -> f64 {
        let max = self.heights.iter().copied().fold(0., f64::max);
        if max == 0. {
            0.
        } else {
            f64::max(max - self.gap, 0.)
        }
    }

    #[cfg(test)]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }
}
