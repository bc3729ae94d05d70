use super::constants::{COLS, ROWS, SPECTRUM_FULL_SCALE};

/// Column heights and loudness derived from one analyser snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpectrumFrame {
    /// Lit cells per column, 0..=ROWS, growing up from the bottom row.
    pub heights: [u8; COLS],
    /// Mean magnitude over all bins, 0..=1.
    pub loudness: f32,
}

impl SpectrumFrame {
    /// Bucket `bins` into `COLS` equal slices and map each slice's mean to a
    /// bar height. Fewer bins than columns leaves the trailing columns empty.
    pub fn from_bytes(bins: &[u8]) -> Self {
        let mut frame = SpectrumFrame::default();
        if bins.is_empty() {
            return frame;
        }

        let total: u32 = bins.iter().map(|b| *b as u32).sum();
        frame.loudness = total as f32 / (bins.len() as f32 * SPECTRUM_FULL_SCALE);

        let per_col = (bins.len() / COLS).max(1);
        for (col, height) in frame.heights.iter_mut().enumerate() {
            let start = col * per_col;
            if start >= bins.len() {
                break;
            }
            let end = (start + per_col).min(bins.len());
            let slice = &bins[start..end];
            let mean = slice.iter().map(|b| *b as u32).sum::<u32>() as f32 / slice.len() as f32;
            *height = bar_height(mean);
        }
        frame
    }

    /// Whether the cell at (`row`, `col`) is lit by this frame's bars.
    #[inline]
    pub fn lit(&self, row: usize, col: usize) -> bool {
        row + self.heights[col] as usize >= ROWS
    }
}

/// Map a byte magnitude (0..=255) to a number of lit cells (0..=ROWS).
#[inline]
pub fn bar_height(magnitude: f32) -> u8 {
    let norm = (magnitude / SPECTRUM_FULL_SCALE).clamp(0.0, 1.0);
    (norm * ROWS as f32).round() as u8
}
