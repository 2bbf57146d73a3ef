//! Tile animations.
//!
//! The layout engine only produces final placements. How tiles get there is decided here: the
//! first time the gallery lays out anything, tiles play an entrance animation, and every later
//! layout pass moves them from their previous placement to the new one. Which of the two applies
//! is decided by the view, which owns the "has laid out before" flag.
//!
//! Animations are described by their parameters and sampled at an elapsed time, so they carry no
//! clock of their own.

use std::time::Duration;

use keyframe::functions::{EaseOutCubic, EaseOutQuad};
use keyframe::EasingFunction;

mod plan;

pub use self::plan::{AnimationPlan, Strategy, TileAnimation, TileFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseOutExpo,
}

impl Curve {
    pub fn y(self, x: f64) -> f64 {
        match self {
            Curve::Linear => x,
            Curve::EaseOutQuad => EaseOutQuad.y(x),
            Curve::EaseOutCubic => EaseOutCubic.y(x),
            Curve::EaseOutExpo => 1. - 2f64.powf(-10. * x),
        }
    }
}

impl From<cafe_gallery_config::Curve> for Curve {
    fn from(value: cafe_gallery_config::Curve) -> Self {
        match value {
            cafe_gallery_config::Curve::Linear => Self::Linear,
            cafe_gallery_config::Curve::EaseOutQuad => Self::EaseOutQuad,
            cafe_gallery_config::Curve::EaseOutCubic => Self::EaseOutCubic,
            cafe_gallery_config::Curve::EaseOutExpo => Self::EaseOutExpo,
        }
    }
}

/// A single value animating from one number to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f64,
    to: f64,
    delay: Duration,
    duration: Duration,
    curve: Curve,
}

impl Animation {
    pub fn new(from: f64, to: f64, delay: Duration, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            delay,
            duration,
            curve,
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    /// Time from the start of the animation until it reaches its target.
    pub fn end_time(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_done_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.end_time()
    }

    /// Eased progress from 0 to 1 at the given time since the animation was started.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.;
        };

        if running >= self.duration {
            return 1.;
        }

        let x = running.as_secs_f64() / self.duration.as_secs_f64();
        self.curve.y(x)
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.is_done_at(elapsed) {
            return self.to;
        }

        let progress = self.progress_at(elapsed);
        self.from + (self.to - self.from) * progress
    }
}
