use super::constants::{
    AUDIO_LAYERS, CLASSIC_LAYERS, MAX_ACTIVE_MS, MAX_INTERVAL_MS, MIN_ACTIVE_MS, MIN_INTERVAL_MS,
};
use super::timing::Bounds;

/// Which build of the sketch the host page asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Five layers, random seeding only.
    #[default]
    Classic,
    /// Seven layers plus the spectrum-driven mode and zoom.
    AudioReactive,
}

impl Variant {
    pub fn from_attr(v: &str) -> Variant {
        match v.trim() {
            "audio" | "audio-reactive" => Variant::AudioReactive,
            _ => Variant::Classic,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SketchConfig {
    pub variant: Variant,
    pub layers: usize,
    pub interval: Bounds,
    pub active: Bounds,
    pub audio_enabled: bool,
}

impl SketchConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let (layers, audio_enabled) = match variant {
            Variant::Classic => (CLASSIC_LAYERS, false),
            Variant::AudioReactive => (AUDIO_LAYERS, true),
        };
        Self {
            variant,
            layers,
            interval: Bounds::new(MIN_INTERVAL_MS, MAX_INTERVAL_MS),
            active: Bounds::new(MIN_ACTIVE_MS, MAX_ACTIVE_MS),
            audio_enabled,
        }
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Classic)
    }
}
