use super::constants::{
    MAX_ACTIVE_MS, MAX_INTERVAL_MS, MIN_ACTIVE_MS, MIN_INTERVAL_MS, PARALLAX_FAR_PX,
    PARALLAX_NEAR_PX,
};
use glam::Vec2;
use std::time::Duration;

#[inline]
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}

/// Closed range used for the pointer-driven timings and tick rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interpolate at `t`, clamped so the result never leaves the range.
    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        lerp(self.min, self.max, t)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Pointer position in CSS px plus the viewport it was measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub viewport: Vec2,
}

impl PointerSample {
    pub fn new(pos: Vec2, viewport: Vec2) -> Self {
        Self { pos, viewport }
    }

    /// Pointer parked at the viewport centre, used before the first move.
    pub fn centered(viewport: Vec2) -> Self {
        Self {
            pos: viewport * 0.5,
            viewport,
        }
    }

    /// Position as a fraction of the viewport, clamped to [0, 1].
    #[inline]
    pub fn uv(&self) -> Vec2 {
        let size = self.viewport.max(Vec2::ONE);
        (self.pos / size).clamp(Vec2::ZERO, Vec2::ONE)
    }

    /// Displacement from centre in [-1, 1]; positive when the pointer is left
    /// of or above centre, which moves layers right/down.
    #[inline]
    pub fn centre_offset(&self) -> Vec2 {
        let half = (self.viewport * 0.5).max(Vec2::ONE);
        (half - self.pos) / half
    }
}

/// Pointer-derived tick interval and cell lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub interval_ms: f32,
    pub active_ms: f32,
}

impl Timing {
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f32(self.interval_ms / 1000.0)
    }

    pub fn active_for(&self) -> Duration {
        Duration::from_secs_f32(self.active_ms / 1000.0)
    }
}

/// Maps pointer samples to timing and per-layer parallax offsets.
#[derive(Clone, Debug)]
pub struct InputMapper {
    pub interval: Bounds,
    pub active: Bounds,
    parallax_factors: Vec<Vec2>,
}

impl InputMapper {
    pub fn new(layers: usize) -> Self {
        Self::with_ranges(
            layers,
            Bounds::new(MIN_INTERVAL_MS, MAX_INTERVAL_MS),
            Bounds::new(MIN_ACTIVE_MS, MAX_ACTIVE_MS),
        )
    }

    pub fn with_ranges(layers: usize, interval: Bounds, active: Bounds) -> Self {
        Self {
            interval,
            active,
            parallax_factors: parallax_factors(layers),
        }
    }

    /// Ticks per second at vertical fraction `y`, linear from the fastest
    /// rate at the top to the slowest at the bottom.
    #[inline]
    pub fn tick_rate(&self, y: f32) -> f32 {
        Bounds::new(1000.0 / self.interval.min, 1000.0 / self.interval.max).at(y)
    }

    /// Vertical position picks the interval, horizontal the active duration.
    pub fn timing(&self, pointer: &PointerSample) -> Timing {
        let uv = pointer.uv();
        let interval_ms =
            (1000.0 / self.tick_rate(uv.y)).clamp(self.interval.min, self.interval.max);
        Timing {
            interval_ms,
            active_ms: self.active.at(uv.x),
        }
    }

    /// Pixel offset for every layer; layer 0 is nearest and moves the most.
    pub fn parallax(&self, pointer: &PointerSample) -> impl Iterator<Item = Vec2> + '_ {
        let offset = pointer.centre_offset();
        self.parallax_factors.iter().map(move |f| offset * *f)
    }
}

/// Per-layer travel, spread linearly from the near factor to the far factor.
pub fn parallax_factors(layers: usize) -> Vec<Vec2> {
    let near = Vec2::from(PARALLAX_NEAR_PX);
    let far = Vec2::from(PARALLAX_FAR_PX);
    let span = layers.saturating_sub(1).max(1) as f32;
    (0..layers)
        .map(|i| near.lerp(far, i as f32 / span))
        .collect()
}
