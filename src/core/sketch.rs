use super::config::SketchConfig;
use super::constants::{COLS, MAX_TICKS_PER_FRAME, ROWS};
use super::grid::{CellIndex, CellView, GridState};
use super::mode::Mode;
use super::schedule::DeactivationSchedule;
use super::spectrum::SpectrumFrame;
use super::timing::{InputMapper, PointerSample, Timing};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// What a key press did to the sketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    ModeChanged(Mode),
    ZoomToggled(bool),
    Ignored,
}

/// All simulation state for one running sketch.
///
/// Driven from two places: the frame loop calls [`Sketch::update_pointer`]
/// and [`Sketch::advance`] every animation frame, and the audio loop calls
/// [`Sketch::apply_spectrum`] while the mode is [`Mode::Audio`].
///
/// Typical usage:
/// - Construct with `Sketch::new(config, seed)`
/// - Forward key presses to `handle_key`
/// - Each frame: `update_pointer`, `advance(dt)`, then `render_into` when
///   `advance` reports at least one tick
pub struct Sketch {
    pub config: SketchConfig,
    pub grid: GridState,
    mapper: InputMapper,
    mode: Mode,
    schedule: DeactivationSchedule,
    rng: StdRng,
    clock: Duration,
    tick_accum: Duration,
    ticks_elapsed: u64,
    timing: Timing,
    zoom_enabled: bool,
    loudness: f32,
    expired: Vec<CellIndex>,
}

impl Sketch {
    pub fn new(config: SketchConfig, seed: u64) -> Self {
        let mapper = InputMapper::with_ranges(config.layers, config.interval, config.active);
        let timing = Timing {
            interval_ms: config.interval.max,
            active_ms: config.active.min,
        };
        Self {
            grid: GridState::new(config.layers),
            mapper,
            mode: Mode::Idle,
            schedule: DeactivationSchedule::new(),
            rng: StdRng::seed_from_u64(seed),
            clock: Duration::ZERO,
            tick_accum: Duration::ZERO,
            ticks_elapsed: 0,
            timing,
            zoom_enabled: false,
            loudness: 0.0,
            expired: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[inline]
    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks_elapsed
    }

    /// Simulation time accumulated by [`Sketch::advance`].
    #[inline]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    #[inline]
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Loudness from the latest spectrum, 0 outside audio mode.
    #[inline]
    pub fn loudness(&self) -> f32 {
        self.loudness
    }

    pub fn pending_deactivations(&self) -> usize {
        self.schedule.len()
    }

    /// Switch modes. Always clears the grid and drops pending deactivations,
    /// even when re-selecting the current mode.
    pub fn set_mode(&mut self, mode: Mode) {
        let cancelled = self.schedule.len();
        self.grid.clear();
        self.schedule.cancel_all();
        self.tick_accum = Duration::ZERO;
        self.loudness = 0.0;
        log::info!(
            "[mode] {} -> {} (cancelled {} pending)",
            self.mode.label(),
            mode.label(),
            cancelled
        );
        self.mode = mode;
    }

    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if let Some(mode) = Mode::from_key(key) {
            self.set_mode(mode);
            return KeyOutcome::ModeChanged(mode);
        }
        match key {
            "z" | "Z" if self.config.audio_enabled => {
                self.zoom_enabled = !self.zoom_enabled;
                log::info!("[keys] zoom={}", self.zoom_enabled);
                KeyOutcome::ZoomToggled(self.zoom_enabled)
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Recompute interval and active duration from the pointer.
    pub fn update_pointer(&mut self, pointer: &PointerSample) -> Timing {
        self.timing = self.mapper.timing(pointer);
        self.timing
    }

    pub fn parallax<'a>(&'a self, pointer: &PointerSample) -> impl Iterator<Item = Vec2> + 'a {
        self.mapper.parallax(pointer)
    }

    /// Advance simulation time by `dt`: expire lit cells whose time is up,
    /// then run as many ticks as the current interval allows. Returns the
    /// number of ticks run; the backlog after a long stall is dropped.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.clock += dt;
        self.expire_due();

        let interval = self.timing.interval();
        if interval.is_zero() {
            return 0;
        }
        self.tick_accum += dt;
        let mut ticks = 0;
        while self.tick_accum >= interval {
            if ticks == MAX_TICKS_PER_FRAME {
                self.tick_accum = Duration::ZERO;
                break;
            }
            self.tick_accum -= interval;
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// One simulation step: seed according to the mode, then cascade.
    pub fn tick(&mut self) {
        if let Some(layer) = self.mode.seed_layer(self.grid.layer_count()) {
            self.seed_random(layer);
        }
        self.grid.shift(self.mode.shift_direction());
        self.ticks_elapsed += 1;
    }

    /// Light one random cell on `layer` and schedule it to go dark after the
    /// current active duration.
    pub fn seed_random(&mut self, layer: usize) -> CellIndex {
        let row = self.rng.gen_range(0..ROWS);
        let col = self.rng.gen_range(0..COLS);
        let cell = CellIndex::new(layer, row, col);
        self.grid.set_cell(layer, row, col, true);
        self.schedule
            .schedule(cell, self.clock + self.timing.active_for());
        cell
    }

    /// Write spectrum bars into the first layer. Ignored outside audio mode;
    /// returns whether the frame was applied.
    pub fn apply_spectrum(&mut self, bins: &[u8]) -> bool {
        if self.mode != Mode::Audio {
            return false;
        }
        let frame = SpectrumFrame::from_bytes(bins);
        self.loudness = frame.loudness;
        for row in 0..ROWS {
            for col in 0..COLS {
                self.grid.set_cell(0, row, col, frame.lit(row, col));
            }
        }
        true
    }

    /// Push changed cells to `view`; see [`GridState::render_into`].
    pub fn render_into<V: CellView>(&mut self, view: &mut V) -> usize {
        self.grid.render_into(view)
    }

    fn expire_due(&mut self) {
        self.expired.clear();
        self.schedule.drain_due(self.clock, &mut self.expired);
        for cell in &self.expired {
            self.grid.set_cell(cell.layer, cell.row, cell.col, false);
        }
    }
}
