// Host-side tests for pointer-driven timing and parallax.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod timing {
        include!("../src/core/timing.rs");
    }
}

use crate::core::constants::*;
use crate::core::timing::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(lerp(25.0, 5.0, 0.0), 25.0);
    assert_eq!(lerp(25.0, 5.0, 1.0), 5.0);
    assert_eq!(lerp(150.0, 1500.0, 0.5), 825.0);
}

#[test]
fn pointer_extremes_map_to_range_endpoints() {
    let mapper = InputMapper::new(CLASSIC_LAYERS);

    let top_left = mapper.timing(&PointerSample::new(Vec2::ZERO, VIEWPORT));
    assert!(close(top_left.interval_ms, MIN_INTERVAL_MS));
    assert!(close(top_left.active_ms, MIN_ACTIVE_MS));

    let bottom_right = mapper.timing(&PointerSample::new(VIEWPORT, VIEWPORT));
    assert!(close(bottom_right.interval_ms, MAX_INTERVAL_MS));
    assert!(close(bottom_right.active_ms, MAX_ACTIVE_MS));
}

#[test]
fn timing_stays_in_bounds_for_any_pointer_position() {
    let mapper = InputMapper::new(AUDIO_LAYERS);
    let mut x = -400.0;
    while x <= 1200.0 {
        let mut y = -300.0;
        while y <= 900.0 {
            let t = mapper.timing(&PointerSample::new(Vec2::new(x, y), VIEWPORT));
            assert!(
                mapper.interval.contains(t.interval_ms),
                "interval {} out of range at ({x}, {y})",
                t.interval_ms
            );
            assert!(
                mapper.active.contains(t.active_ms),
                "active {} out of range at ({x}, {y})",
                t.active_ms
            );
            y += 37.5;
        }
        x += 50.0;
    }
}

#[test]
fn tick_rate_is_linear_in_pointer_height() {
    let mapper = InputMapper::new(CLASSIC_LAYERS);
    let at_y = |y: f32| mapper.timing(&PointerSample::new(Vec2::new(400.0, y), VIEWPORT));

    // Mid-screen runs at 15 ticks per second, not halfway between the intervals.
    let mid = at_y(300.0);
    assert!(close(mid.interval_ms, 1000.0 / 15.0), "mid {}", mid.interval_ms);
    assert!(close(mapper.tick_rate(0.5), 15.0));

    // A quarter of the way down: 20 ticks per second.
    assert!(close(at_y(150.0).interval_ms, 50.0));
    assert!(close(mapper.tick_rate(0.0), MAX_TICKS_PER_SEC));
    assert!(close(mapper.tick_rate(1.0), MIN_TICKS_PER_SEC));
}

#[test]
fn zero_sized_viewport_does_not_produce_nan() {
    let mapper = InputMapper::new(CLASSIC_LAYERS);
    let t = mapper.timing(&PointerSample::new(Vec2::new(10.0, 10.0), Vec2::ZERO));
    assert!(t.interval_ms.is_finite() && t.active_ms.is_finite());
    assert!(mapper.interval.contains(t.interval_ms));
}

#[test]
fn timing_converts_to_durations() {
    let t = Timing {
        interval_ms: 200.0,
        active_ms: 1500.0,
    };
    assert_eq!(t.interval().as_millis(), 200);
    assert_eq!(t.active_for().as_millis(), 1500);
}

#[test]
fn five_layer_parallax_factors_step_evenly() {
    let factors = parallax_factors(CLASSIC_LAYERS);
    let expected = [
        [23.0, 13.0],
        [18.0, 10.0],
        [13.0, 7.0],
        [8.0, 4.0],
        [3.0, 1.0],
    ];
    assert_eq!(factors.len(), expected.len());
    for (f, e) in factors.iter().zip(expected.iter()) {
        assert!(close(f.x, e[0]) && close(f.y, e[1]), "{f:?} vs {e:?}");
    }
}

#[test]
fn farther_layers_move_less() {
    let mapper = InputMapper::new(AUDIO_LAYERS);
    let sample = PointerSample::new(Vec2::new(100.0, 50.0), VIEWPORT);
    let offsets: Vec<Vec2> = mapper.parallax(&sample).collect();
    assert_eq!(offsets.len(), AUDIO_LAYERS);
    for pair in offsets.windows(2) {
        assert!(pair[0].x > pair[1].x);
        assert!(pair[0].y > pair[1].y);
    }
}

#[test]
fn parallax_is_zero_at_centre_and_mirrors_across_it() {
    let mapper = InputMapper::new(CLASSIC_LAYERS);
    let centre: Vec<Vec2> = mapper
        .parallax(&PointerSample::centered(VIEWPORT))
        .collect();
    assert!(centre.iter().all(|o| o.length() < 1e-5));

    let top_left: Vec<Vec2> = mapper
        .parallax(&PointerSample::new(Vec2::ZERO, VIEWPORT))
        .collect();
    let bottom_right: Vec<Vec2> = mapper
        .parallax(&PointerSample::new(VIEWPORT, VIEWPORT))
        .collect();
    assert!(close(top_left[0].x, PARALLAX_NEAR_PX[0]));
    assert!(close(top_left[0].y, PARALLAX_NEAR_PX[1]));
    for (a, b) in top_left.iter().zip(bottom_right.iter()) {
        assert!((*a + *b).length() < 1e-4);
    }
}
