//! Core infrastructure: configuration, timing constants, tick scheduling.

pub mod config;
pub mod constants;
pub mod frame_clock;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
pub use frame_clock::FrameClock;
