use super::grid::ShiftDirection;

/// Seeding rule selected from the keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Nothing new lights up; existing trails keep cascading.
    #[default]
    Idle,
    /// One random cell on the first layer per tick.
    Forward,
    /// One random cell on the last layer per tick, cascading back.
    Backward,
    /// Column heights from the live spectrum, written every animation frame.
    Audio,
    /// Bound to a key but seeds nothing.
    Reserved,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Idle,
        Mode::Forward,
        Mode::Backward,
        Mode::Audio,
        Mode::Reserved,
    ];

    #[inline]
    pub fn from_key(key: &str) -> Option<Mode> {
        match key {
            "s" | "S" => Some(Mode::Idle),
            "1" => Some(Mode::Forward),
            "2" => Some(Mode::Backward),
            "3" => Some(Mode::Audio),
            "4" => Some(Mode::Reserved),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Forward => "Forward",
            Mode::Backward => "Backward",
            Mode::Audio => "Audio",
            Mode::Reserved => "Reserved",
        }
    }

    #[inline]
    pub fn shift_direction(self) -> ShiftDirection {
        match self {
            Mode::Backward => ShiftDirection::TowardFirst,
            _ => ShiftDirection::TowardLast,
        }
    }

    /// Layer that receives a random cell each tick, if this mode seeds randomly.
    #[inline]
    pub fn seed_layer(self, layer_count: usize) -> Option<usize> {
        match self {
            Mode::Forward => Some(0),
            Mode::Backward => Some(layer_count - 1),
            _ => None,
        }
    }
}
