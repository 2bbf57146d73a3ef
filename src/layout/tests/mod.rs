use proptest::prelude::*;

use super::*;


/// Minimal layout element for tests: identified by its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub id: usize,
    pub height: f64,
}

impl LayoutElement for TestItem {
    type Id = usize;

    fn id(&self) -> &usize {
        &self.id
    }

    fn intrinsic_height(&self) -> f64 {
        self.height
    }
}

pub fn items(heights: impl IntoIterator<Item = f64>) -> Vec<TestItem> {
    heights
        .into_iter()
        .enumerate()
        .map(|(id, height)| TestItem { id, height })
        .collect()
}

impl<Id> MasonryLayout<Id> {
    pub fn verify_invariants(&self) {
        let gap = self.gap();

        if self.is_empty() {
            assert_eq!(self.total_height(), 0.);
            return;
        }

        assert!(self.column_width() > 0.);

        let mut max_bottom = 0f64;
        for (idx, tile) in self.tiles().iter().enumerate() {
            assert_eq!(tile.index, idx, "tiles must be in input order");
            assert!(tile.column < self.column_count());
            assert_eq!(tile.width, self.column_width(), "tile widths must be uniform");
            assert_eq!(tile.x, self.column_x(tile.column));
            assert!(tile.y >= 0.);
            max_bottom = max_bottom.max(tile.bottom());
        }

        for column in 0..self.column_count() {
            let tiles: Vec<_> = self.column(column).collect();
            for pair in tiles.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                // Same association as the running column height.
                assert!(
                    prev.y + (prev.height + gap) <= next.y,
                    "tiles in column {column} must not overlap: {:?} {:?}",
                    (prev.y, prev.height),
                    (next.y, next.height),
                );
            }
        }

        assert!(
            (self.total_height() - max_bottom).abs() < 1e-6,
            "total height {} must match the lowest tile bottom {max_bottom}",
            self.total_height(),
        );
    }
}

#[test]
fn two_column_example() {
    let items = items([600., 400., 700., 500.]);
    let layout = compute(&items, 620., 2, 20.).unwrap();
    layout.verify_invariants();

    assert_eq!(layout.column_width(), 300.);

    let placements: Vec<_> = layout
        .tiles()
        .iter()
        .map(|tile| (tile.column, tile.x, tile.y))
        .collect();
    assert_eq!(
        placements,
        [(0, 0., 0.), (1, 320., 0.), (1, 320., 420.), (0, 0., 620.)]
    );

    assert_eq!(layout.total_height(), 1120.);
}

#[test]
fn layout_is_deterministic() {
    let items = items([450., 650., 580., 420., 600., 400.]);

    let a = compute(&items, 1111., 3, 17.).unwrap();
    let b = compute(&items, 1111., 3, 17.).unwrap();
    assert_eq!(a, b);

    for (a, b) in a.tiles().iter().zip(b.tiles()) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.width.to_bits(), b.width.to_bits());
    }
}

#[test]
fn equal_heights_fill_left_to_right() {
    let items = items([100.; 7]);
    let layout = compute(&items, 340., 3, 20.).unwrap();
    layout.verify_invariants();

    let columns: Vec<_> = layout.tiles().iter().map(|tile| tile.column).collect();
    assert_eq!(columns, [0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(layout.total_height(), 340.);
}

#[test]
fn more_columns_than_items() {
    let items = items([300., 200.]);
    let layout = compute(&items, 960., 4, 0.).unwrap();
    layout.verify_invariants();

    assert_eq!(layout.column_width(), 240.);
    assert_eq!(layout.tile(0).unwrap().x, 0.);
    assert_eq!(layout.tile(1).unwrap().x, 240.);
    assert_eq!(layout.column(2).count(), 0);
    assert_eq!(layout.total_height(), 300.);
}

#[test]
fn single_column_stacks() {
    let items = items([100., 50., 25.]);
    let layout = compute(&items, 400., 1, 10.).unwrap();
    layout.verify_invariants();

    let ys: Vec<_> = layout.tiles().iter().map(|tile| tile.y).collect();
    assert_eq!(ys, [0., 110., 170.]);
    assert_eq!(layout.total_height(), 195.);
}

#[test]
fn empty_items() {
    let layout = compute::<TestItem>(&[], 1200., 3, 20.).unwrap();
    assert!(layout.is_empty());
    assert_eq!(layout.total_height(), 0.);
    assert_eq!(layout.column_count(), 3);
}

#[test]
fn unmeasured_container_is_empty() {
    let items = items([600., 400.]);

    for width in [0., -100., f64::NAN, f64::INFINITY] {
        let layout = compute(&items, width, 2, 20.).unwrap();
        assert!(layout.is_empty(), "width {width} must produce an empty layout");
        assert_eq!(layout.total_height(), 0.);
    }
}

#[test]
fn container_narrower_than_gaps_is_empty() {
    let items = items([600., 400.]);

    let layout = compute(&items, 40., 3, 20.).unwrap();
    assert!(layout.is_empty());

    let layout = compute(&items, 41., 3, 20.).unwrap();
    assert_eq!(layout.len(), 2);
    assert_eq!(layout.column_width(), 1. / 3.);
}

#[test]
fn reject_zero_columns() {
    let items = items([600.]);
    assert_eq!(compute(&items, 600., 0, 20.), Err(LayoutError::ZeroColumns));
}

#[test]
fn reject_invalid_gap() {
    let items = items([600.]);
    assert_eq!(
        compute(&items, 600., 2, -1.),
        Err(LayoutError::InvalidGap(-1.))
    );
    assert!(matches!(
        compute(&items, 600., 2, f64::NAN),
        Err(LayoutError::InvalidGap(_))
    ));
}

#[test]
fn reject_invalid_height() {
    let items = items([600., -5., 300.]);
    assert_eq!(
        compute(&items, 600., 2, 20.),
        Err(LayoutError::InvalidHeight {
            index: 1,
            height: -5.
        })
    );

    // Caller bugs are reported even when there is nothing to lay out yet.
    assert!(compute(&items, 0., 2, 20.).is_err());
}

#[test]
fn reject_duplicate_ids() {
    let mut items = items([600., 400., 700.]);
    items[2].id = 1;
    assert_eq!(
        compute(&items, 620., 2, 20.),
        Err(LayoutError::DuplicateId { first: 1, index: 2 })
    );
}

#[test]
fn zero_height_items_are_allowed() {
    let items = items([0., 0., 100.]);
    let layout = compute(&items, 300., 2, 20.).unwrap();
    layout.verify_invariants();

    let columns: Vec<_> = layout.tiles().iter().map(|tile| tile.column).collect();
    assert_eq!(columns, [0, 1, 0]);
    assert_eq!(layout.tile(2).unwrap().y, 20.);
}

#[test]
fn tile_by_id() {
    let items = items([600., 400., 700.]);
    let layout = compute(&items, 620., 2, 20.).unwrap();

    let tile = layout.tile_by_id(&2).unwrap();
    assert_eq!((tile.column, tile.y), (1, 420.));
    assert!(layout.tile_by_id(&3).is_none());
}

fn arbitrary_heights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..=1000).prop_map(f64::from), 0..40)
}

fn arbitrary_gap() -> impl Strategy<Value = f64> {
    (0u32..=40).prop_map(f64::from)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn random_layouts_hold_invariants(
        heights in arbitrary_heights(),
        width in 0f64..3000.,
        columns in 1usize..=6,
        gap in arbitrary_gap(),
    ) {
        let items = items(heights);
        let layout = compute(&items, width, columns, gap).unwrap();
        layout.verify_invariants();

        let column_width = (width - (columns - 1) as f64 * gap) / columns as f64;
        if items.is_empty() || column_width <= 0. {
            prop_assert!(layout.is_empty());
        } else {
            prop_assert_eq!(layout.len(), items.len());
            prop_assert_eq!(layout.column_width(), column_width);
        }
    }

    #[test]
    fn random_layouts_are_deterministic(
        heights in arbitrary_heights(),
        width in 0f64..3000.,
        columns in 1usize..=6,
        gap in arbitrary_gap(),
    ) {
        let items = items(heights);
        let a = compute(&items, width, columns, gap).unwrap();
        let b = compute(&items, width, columns, gap).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_tile_goes_to_the_shortest_column(
        heights in arbitrary_heights(),
        width in 100f64..3000.,
        columns in 1usize..=6,
        gap in arbitrary_gap(),
    ) {
        let items = items(heights);
        let layout = compute(&items, width, columns, gap).unwrap();

        // Replay the placement and check each decision against the column heights at that time.
        let mut column_heights = vec![0.; columns];
        for tile in layout.tiles() {
            let chosen = column_heights[tile.column];
            prop_assert_eq!(tile.y, chosen);

            for (column, &height) in column_heights.iter().enumerate() {
                if column < tile.column {
                    prop_assert!(chosen < height, "ties must go to the leftmost column");
                } else {
                    prop_assert!(chosen <= height);
                }
            }

            column_heights[tile.column] += tile.height + gap;
        }

        let max = column_heights.iter().copied().fold(0., f64::max);
        let expected = if layout.is_empty() { 0. } else { f64::max(max - gap, 0.) };
        prop_assert_eq!(layout.total_height(), expected);
    }
}
