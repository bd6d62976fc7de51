//! Scrolling gated obstacle: a solid column with one passable gap.

use super::geometry::Rect;
use crate::core::config::GameConfig;
use rand::Rng;

/// A single obstacle. The gap center is drawn once at spawn and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (decreases every tick).
    pub x: f64,
    gap_center_y: u32,
    passed: bool,
}

impl Obstacle {
    /// Spawn at `x` with a gap center drawn uniformly from
    /// `[gap_size, screen_height - gap_size]` (both ends inclusive).
    pub fn spawn<R: Rng>(x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let min_center = config.gap_size;
        let max_center = config.screen_height.saturating_sub(config.gap_size).max(min_center);
        let gap_center_y = rng.gen_range(min_center..=max_center);
        Self::with_gap(x, gap_center_y)
    }

    /// Obstacle with a known gap center.
    pub fn with_gap(x: f64, gap_center_y: u32) -> Self {
        Self {
            x,
            gap_center_y,
            passed: false,
        }
    }

    pub fn gap_center_y(&self) -> u32 {
        self.gap_center_y
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Scroll left by the configured speed.
    pub fn tick(&mut self, config: &GameConfig) {
        self.x -= config.scroll_speed;
    }

    /// Trailing (right) edge.
    pub fn trailing_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.obstacle_width
    }

    /// The two solid regions: screen top down to the gap, and the gap down to
    /// the screen bottom.
    pub fn collision_shapes(&self, config: &GameConfig) -> [Rect; 2] {
        let gap_top = f64::from(self.gap_center_y) - config.half_gap();
        let gap_bottom = f64::from(self.gap_center_y) + config.half_gap();
        let screen_height = f64::from(config.screen_height);

        [
            Rect::new(self.x, 0.0, config.obstacle_width, gap_top),
            Rect::new(
                self.x,
                gap_bottom,
                config.obstacle_width,
                screen_height - gap_bottom,
            ),
        ]
    }

    /// True when any solid region overlaps `shape`.
    pub fn collides_with(&self, shape: &Rect, config: &GameConfig) -> bool {
        self.collision_shapes(config)
            .iter()
            .any(|solid| solid.intersects(shape))
    }

    /// Latch the passed flag once the trailing edge is strictly left of
    /// `avatar_x`. Returns true only on the tick the latch flips.
    pub fn check_passed(&mut self, avatar_x: f64, config: &GameConfig) -> bool {
        if self.passed || self.trailing_edge(config) >= avatar_x {
            return false;
        }
        self.passed = true;
        true
    }

    /// True once the trailing edge is left of x = 0.
    pub fn is_offscreen(&self, config: &GameConfig) -> bool {
        self.trailing_edge(config) < 0.0
    }
}
