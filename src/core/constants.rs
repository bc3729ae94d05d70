// Simulation tuning constants shared by the grid, timing and mode engine.
//
// Kept free of web-only types so the host-side tests can include this file.

// Grid shape
pub const ROWS: usize = 9;
pub const COLS: usize = 16;
pub const CLASSIC_LAYERS: usize = 5;
pub const AUDIO_LAYERS: usize = 7;

// Tick rate is linear in pointer Y (top fastest); the interval is its reciprocal
pub const MAX_TICKS_PER_SEC: f32 = 25.0;
pub const MIN_TICKS_PER_SEC: f32 = 5.0;
pub const MIN_INTERVAL_MS: f32 = 1000.0 / MAX_TICKS_PER_SEC;
pub const MAX_INTERVAL_MS: f32 = 1000.0 / MIN_TICKS_PER_SEC;

// How long a randomly seeded cell stays lit (ms), driven by pointer X
pub const MIN_ACTIVE_MS: f32 = 150.0;
pub const MAX_ACTIVE_MS: f32 = 1500.0;

// Upper bound on ticks processed in one frame after a long stall (tab switch)
pub const MAX_TICKS_PER_FRAME: u32 = 4;

// Parallax travel in px for the nearest and farthest layer, [x, y]
pub const PARALLAX_NEAR_PX: [f32; 2] = [23.0, 13.0];
pub const PARALLAX_FAR_PX: [f32; 2] = [3.0, 1.0];

// Byte magnitude ceiling reported by the analyser
pub const SPECTRUM_FULL_SCALE: f32 = 255.0;
