pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_overlay_toggle_h};
pub use pointer::{wire_pointermove, PointerState};
