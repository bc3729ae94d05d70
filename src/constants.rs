// Host page contract and cosmetic tuning for the web frontend.

// Element ids and classes
pub const STAGE_ID: &str = "stage";
pub const LAYER_ID_PREFIX: &str = "grid"; // #grid0, #grid1, ...
pub const LAYER_CLASS: &str = "layer";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";
pub const HELP_OVERLAY_ID: &str = "help-overlay";
pub const AUDIO_ELEMENT_ID: &str = "track";
pub const CELL_CLASS: &str = "square";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const CELL_GLYPH: &str = "O";

// Body attribute naming the variant ("audio" selects the 7-layer build)
pub const VARIANT_ATTR: &str = "data-variant";

// Analyser: 64-point FFT gives 32 bins, two per column
pub const ANALYSER_FFT_SIZE: u32 = 64;
pub const ANALYSER_SMOOTHING: f64 = 0.6;
pub const PLAYBACK_VOLUME: f64 = 0.6;

// Zoom: stage scale = 1 + loudness * depth
pub const ZOOM_DEPTH: f32 = 0.35;

// Frame deltas larger than this are treated as a stall and clamped (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
