//! Flapper - terminal arcade reflex game.
//!
//! The simulation core (`game`) is independent of the terminal; the `ui`
//! and `input` modules adapt it to ratatui/crossterm.

pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod ui;

pub use crate::core::config::{ConfigError, GameConfig};
pub use game::{FrameOutcome, GameInput, RenderSnapshot, Session, SessionPhase, SessionState};
