//! Immutable game configuration: screen geometry and physics constants.
//!
//! Every simulation type takes a `&GameConfig` explicitly, so tests can run
//! with non-default physics without touching global state.

use super::constants::DEFAULT_TICKS_PER_SECOND;
use serde::Serialize;
use thiserror::Error;

/// Reasons a configuration is rejected at session construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },

    #[error("screen height {height} is smaller than twice the gap size {gap_size}")]
    GapDoesNotFit { height: u32, gap_size: u32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("impulse velocity must point upward (negative), got {0}")]
    ImpulseNotUpward(f64),

    #[error("avatar x {avatar_x} lies outside the screen width {width}")]
    AvatarOffscreen { avatar_x: f64, width: u32 },

    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,

    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
}

/// Screen dimensions and physics constants for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    /// Logical screen width in pixels.
    pub screen_width: u32,
    /// Logical screen height in pixels. Row 0 is the top.
    pub screen_height: u32,
    /// Fixed horizontal position of the avatar.
    pub avatar_x: f64,
    /// Avatar radius; the hitbox is a square of side `2 * avatar_radius`.
    pub avatar_radius: f64,
    /// Horizontal width of every obstacle.
    pub obstacle_width: f64,
    /// Height of the passable opening in every obstacle.
    pub gap_size: u32,
    /// Pixels an obstacle moves left per tick.
    pub scroll_speed: f64,
    /// Velocity added to the avatar every tick (positive = downward).
    pub gravity: f64,
    /// Velocity the avatar is set to by an impulse (negative = upward).
    pub impulse_velocity: f64,
    /// A new obstacle spawns once the spawn timer exceeds this many ticks.
    pub spawn_interval_ticks: u32,
    /// Fixed simulation rate of the driver loop.
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 400,
            screen_height: 600,
            avatar_x: 100.0,
            avatar_radius: 30.0,
            obstacle_width: 60.0,
            gap_size: 150,
            scroll_speed: 3.0,
            gravity: 0.5,
            impulse_velocity: -8.0,
            spawn_interval_ticks: 90,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Check every construction precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if u64::from(self.screen_height) < 2 * u64::from(self.gap_size) {
            return Err(ConfigError::GapDoesNotFit {
                height: self.screen_height,
                gap_size: self.gap_size,
            });
        }

        for (field, value) in [
            ("avatar_x", self.avatar_x),
            ("avatar_radius", self.avatar_radius),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
            ("gravity", self.gravity),
            ("impulse_velocity", self.impulse_velocity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("avatar_radius", self.avatar_radius),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.impulse_velocity >= 0.0 {
            return Err(ConfigError::ImpulseNotUpward(self.impulse_velocity));
        }
        if self.avatar_x < 0.0 || self.avatar_x > f64::from(self.screen_width) {
            return Err(ConfigError::AvatarOffscreen {
                avatar_x: self.avatar_x,
                width: self.screen_width,
            });
        }
        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }

    /// Avatar start height: the vertical middle of the screen.
    pub fn avatar_start_y(&self) -> f64 {
        f64::from(self.screen_height / 2)
    }

    /// Half of the gap, measured from the gap center to either edge.
    pub fn half_gap(&self) -> f64 {
        f64::from(self.gap_size) / 2.0
    }
}
