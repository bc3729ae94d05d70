// Host-side tests for spectrum bucketing into column bars.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spectrum {
        include!("../src/core/spectrum.rs");
    }
}

use crate::core::constants::{COLS, ROWS};
use crate::core::spectrum::*;

#[test]
fn silent_spectrum_has_no_bars() {
    let frame = SpectrumFrame::from_bytes(&[0u8; 32]);
    assert_eq!(frame.heights, [0u8; COLS]);
    assert_eq!(frame.loudness, 0.0);
    for row in 0..ROWS {
        for col in 0..COLS {
            assert!(!frame.lit(row, col));
        }
    }
}

#[test]
fn full_scale_spectrum_fills_every_column() {
    let frame = SpectrumFrame::from_bytes(&[255u8; 32]);
    assert!(frame.heights.iter().all(|h| *h as usize == ROWS));
    assert!((frame.loudness - 1.0).abs() < 1e-6);
}

#[test]
fn bar_height_is_bounded_and_monotonic() {
    let mut prev = 0;
    for m in 0..=255u32 {
        let h = bar_height(m as f32);
        assert!(h as usize <= ROWS);
        assert!(h >= prev, "height dropped at magnitude {m}");
        prev = h;
    }
    assert_eq!(bar_height(-10.0), 0);
    assert_eq!(bar_height(1000.0) as usize, ROWS);
}

#[test]
fn bins_are_averaged_per_column() {
    // two bins per column: (0, 255) averages to half scale
    let mut bins = [0u8; 32];
    for col in 0..COLS {
        bins[col * 2 + 1] = 255;
    }
    let frame = SpectrumFrame::from_bytes(&bins);
    assert!(frame.heights.iter().all(|h| *h == bar_height(127.5)));
    assert!((frame.loudness - 0.5).abs() < 1e-6);
}

#[test]
fn bars_grow_up_from_the_bottom_row() {
    let mut frame = SpectrumFrame::default();
    frame.heights[3] = 3;
    assert!(frame.lit(ROWS - 1, 3));
    assert!(frame.lit(ROWS - 3, 3));
    assert!(!frame.lit(ROWS - 4, 3));
    assert!(!frame.lit(ROWS - 1, 4));
}

#[test]
fn short_spectrum_leaves_trailing_columns_empty() {
    let frame = SpectrumFrame::from_bytes(&[255u8; 8]);
    assert!(frame.heights[..8].iter().all(|h| *h as usize == ROWS));
    assert!(frame.heights[8..].iter().all(|h| *h == 0));
    assert_eq!(SpectrumFrame::from_bytes(&[]), SpectrumFrame::default());
}
