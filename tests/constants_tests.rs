// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_ranges_are_ordered_and_positive() {
    assert!(MIN_INTERVAL_MS > 0.0 && MIN_INTERVAL_MS < MAX_INTERVAL_MS);
    assert!(MIN_ACTIVE_MS > 0.0 && MIN_ACTIVE_MS < MAX_ACTIVE_MS);
    assert!(MAX_TICKS_PER_FRAME >= 1);

    // a frame-time clamp longer than the slowest interval would always tick
    assert!(MAX_FRAME_DT_SEC * 1000.0 >= MAX_INTERVAL_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_shape_matches_variants() {
    assert_eq!(ROWS, 9);
    assert_eq!(COLS, 16);
    assert!(CLASSIC_LAYERS >= 2);
    assert!(AUDIO_LAYERS > CLASSIC_LAYERS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_near_layer_moves_more_than_far_layer() {
    assert!(PARALLAX_NEAR_PX[0] > PARALLAX_FAR_PX[0]);
    assert!(PARALLAX_NEAR_PX[1] > PARALLAX_FAR_PX[1]);
    assert!(PARALLAX_FAR_PX.iter().all(|v| *v >= 0.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_yields_at_least_one_bin_per_column() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    // frequencyBinCount is half the FFT size
    assert!((ANALYSER_FFT_SIZE / 2) as usize >= COLS);
    assert!((0.0..=1.0).contains(&ANALYSER_SMOOTHING));
    assert!((0.0..=1.0).contains(&PLAYBACK_VOLUME));
    assert!(ZOOM_DEPTH > 0.0 && ZOOM_DEPTH < 1.0);
}
