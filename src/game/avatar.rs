//! The player-controlled avatar: falls under gravity, rises on impulse.

use super::geometry::Rect;
use crate::core::config::GameConfig;

/// Avatar position and vertical velocity. `x` is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    x: f64,
    /// Vertical position (row 0 = top of screen).
    pub y: f64,
    /// Vertical velocity in pixels per tick (positive = downward).
    pub velocity: f64,
    radius: f64,
}

impl Avatar {
    /// Create an avatar at the configured start position, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.avatar_x,
            y: config.avatar_start_y(),
            velocity: 0.0,
            radius: config.avatar_radius,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Overwrite the current velocity with the upward impulse.
    pub fn apply_impulse(&mut self, config: &GameConfig) {
        self.velocity = config.impulse_velocity;
    }

    /// One physics step: gravity, then position.
    pub fn tick(&mut self, config: &GameConfig) {
        self.velocity += config.gravity;
        self.y += self.velocity;
    }

    /// Square hitbox of side `2 * radius` centered on the avatar.
    pub fn bounding_shape(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// True when the avatar center has left the vertical range `[0, screen_height]`.
    pub fn is_out_of_bounds(&self, config: &GameConfig) -> bool {
        self.y < 0.0 || self.y > f64::from(config.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_avatar_at_start_position() {
        let config = GameConfig::default();
        let avatar = Avatar::new(&config);
        assert!((avatar.x() - 100.0).abs() < f64::EPSILON);
        assert!((avatar.y - 300.0).abs() < f64::EPSILON);
        assert_eq!(avatar.velocity, 0.0);
        assert!((avatar.radius() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_applies_gravity_then_moves() {
        let config = GameConfig::default();
        let mut avatar = Avatar::new(&config);
        avatar.tick(&config);
        assert!((avatar.velocity - 0.5).abs() < f64::EPSILON);
        assert!((avatar.y - 300.5).abs() < f64::EPSILON);

        avatar.tick(&config);
        assert!((avatar.velocity - 1.0).abs() < f64::EPSILON);
        assert!((avatar.y - 301.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        let config = GameConfig::default();
        let mut avatar = Avatar::new(&config);
        avatar.velocity = 12.0;
        avatar.apply_impulse(&config);
        assert_eq!(avatar.velocity, -8.0);

        // A second impulse does not stack
        avatar.apply_impulse(&config);
        assert_eq!(avatar.velocity, -8.0);
    }

    #[test]
    fn test_x_never_changes() {
        let config = GameConfig::default();
        let mut avatar = Avatar::new(&config);
        for i in 0..50 {
            if i % 7 == 0 {
                avatar.apply_impulse(&config);
            }
            avatar.tick(&config);
        }
        assert!((avatar.x() - config.avatar_x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounding_shape_is_exact_square() {
        let config = GameConfig::default();
        let avatar = Avatar::new(&config);
        let hitbox = avatar.bounding_shape();
        assert_eq!(hitbox, Rect::new(70.0, 270.0, 60.0, 60.0));
    }

    #[test]
    fn test_bounds_check() {
        let config = GameConfig::default();
        let mut avatar = Avatar::new(&config);

        avatar.y = 0.0;
        assert!(!avatar.is_out_of_bounds(&config));
        avatar.y = 600.0;
        assert!(!avatar.is_out_of_bounds(&config));
        avatar.y = -0.01;
        assert!(avatar.is_out_of_bounds(&config));
        avatar.y = 600.01;
        assert!(avatar.is_out_of_bounds(&config));
    }
}
