//! Game simulation core.
//!
//! An avatar falls under gravity and must pass through gaps in obstacles
//! that scroll in from the right. Hitting an obstacle or leaving the screen
//! ends the game; the action key then starts a fresh one.

pub mod avatar;
pub mod geometry;
pub mod obstacle;
pub mod session;
pub mod snapshot;

pub use avatar::Avatar;
pub use geometry::Rect;
pub use obstacle::Obstacle;
pub use session::{FrameOutcome, GameInput, Session, SessionPhase, SessionState};
pub use snapshot::{ObstacleView, RenderSnapshot};
