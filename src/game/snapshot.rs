//! Read-only frame data handed to the presentation layer.

use serde::Serialize;

/// Where one obstacle is this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f64,
    pub gap_center_y: u32,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub avatar_x: f64,
    pub avatar_y: f64,
    pub avatar_velocity: f64,
    pub avatar_radius: f64,
    /// In spawn order, which is also left-to-right on screen.
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub game_over: bool,
    /// Ticks run since the current game started.
    pub tick: u64,
}
