pub mod config;
pub mod constants;
pub mod grid;
pub mod mode;
pub mod schedule;
pub mod sketch;
pub mod spectrum;
pub mod timing;

pub use config::*;
pub use grid::*;
pub use mode::*;
pub use sketch::*;
pub use timing::*;
