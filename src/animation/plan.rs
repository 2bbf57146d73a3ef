use std::time::Duration;

use cafe_gallery_config::Animations;

use super::{Animation, Curve};
use crate::layout::{MasonryLayout, PlacedTile};

/// How the tiles of a layout pass get to their placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First visible layout: tiles fade in from below, one after another.
    Entrance,
    /// Later layouts: tiles glide from their previous placements.
    Transition,
    /// Animations are disabled: tiles jump to their placements.
    Instant,
}

impl Strategy {
    pub fn choose(has_laid_out: bool, config: &Animations) -> Self {
        if config.off {
            Self::Instant
        } else if has_laid_out {
            Self::Transition
        } else {
            Self::Entrance
        }
    }
}

/// Visual state of a tile at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    /// Blur radius in logical pixels.
    pub blur: f64,
}

impl<Id> From<&PlacedTile<Id>> for TileFrame {
    fn from(tile: &PlacedTile<Id>) -> Self {
        Self {
            x: tile.x,
            y: tile.y,
            width: tile.width,
            height: tile.height,
            opacity: 1.,
            blur: 0.,
        }
    }
}

impl TileFrame {
    fn lerp(&self, to: &TileFrame, t: f64) -> TileFrame {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        TileFrame {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
            opacity: mix(self.opacity, to.opacity),
            blur: mix(self.blur, to.blur),
        }
    }
}

/// Animation of one tile towards its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TileAnimation<Id> {
    pub id: Id,
    /// Input index of the tile's item.
    pub index: usize,
    pub from: TileFrame,
    pub to: TileFrame,
    /// Drives the interpolation between `from` and `to`.
    pub progress: Animation,
}

impl<Id> TileAnimation<Id> {
    pub fn frame_at(&self, elapsed: Duration) -> TileFrame {
        if self.progress.is_done_at(elapsed) {
            return self.to;
        }

        self.from.lerp(&self.to, self.progress.value_at(elapsed))
    }

    pub fn is_done_at(&self, elapsed: Duration) -> bool {
        self.progress.is_done_at(elapsed)
    }
}

/// Animations for every tile of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlan<Id> {
    pub strategy: Strategy,
    pub tiles: Vec<TileAnimation<Id>>,
}

impl<Id: Clone + PartialEq> AnimationPlan<Id> {
    /// Plans how the tiles of `layout` reach their placements.
    ///
    /// `previous` is the layout currently on screen; transitions start tiles from their previous
    /// placement, matched by id. Tiles that were not on screen start at their target.
    pub fn new(
        layout: &MasonryLayout<Id>,
        previous: &MasonryLayout<Id>,
        has_laid_out: bool,
        config: &Animations,
    ) -> Self {
        let strategy = Strategy::choose(has_laid_out, config);

        let tiles = layout
            .tiles()
            .iter()
            .map(|tile| {
                let to = TileFrame::from(tile);
                let (from, progress) = match strategy {
                    Strategy::Entrance => {
                        let anim = config.entrance;
                        // Only the vertical position is animated from a fixed start; x starts from
                        // the unplaced origin and size is applied right away.
                        let from = TileFrame {
                            x: 0.,
                            y: f64::from(anim.offset_y),
                            opacity: 0.,
                            blur: f64::from(anim.blur),
                            ..to
                        };
                        let delay = Duration::from_millis(u64::from(anim.stagger_ms))
                            * u32::try_from(tile.index).unwrap_or(u32::MAX);
                        let duration = Duration::from_millis(u64::from(anim.duration_ms));
                        (from, Animation::new(0., 1., delay, duration, anim.curve.into()))
                    }
                    Strategy::Transition => {
                        let anim = config.transition;
                        let from = previous.tile_by_id(&tile.id).map_or(to, TileFrame::from);
                        let duration = Duration::from_millis(u64::from(anim.duration_ms));
                        let progress =
                            Animation::new(0., 1., Duration::ZERO, duration, anim.curve.into());
                        (from, progress)
                    }
                    Strategy::Instant => {
                        let progress =
                            Animation::new(1., 1., Duration::ZERO, Duration::ZERO, Curve::Linear);
                        (to, progress)
                    }
                };

                TileAnimation {
                    id: tile.id.clone(),
                    index: tile.index,
                    from,
                    to,
                    progress,
                }
            })
            .collect();

        Self { strategy, tiles }
    }
}

impl<Id> AnimationPlan<Id> {
    /// Time until every tile has reached its placement.
    pub fn end_time(&self) -> Duration {
        self.tiles
            .iter()
            .map(|tile| tile.progress.end_time())
            .max()
            .unwrap_or_default()
    }

    pub fn is_done_at(&self, elapsed: Duration) -> bool {
        self.tiles.iter().all(|tile| tile.is_done_at(elapsed))
    }

    pub fn frames_at(&self, elapsed: Duration) -> impl Iterator<Item = TileFrame> + '_ {
        self.tiles.iter().map(move |tile| tile.frame_at(elapsed))
    }
}
