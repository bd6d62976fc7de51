//! Terminal presentation layer (ratatui).

pub mod game_common;
pub mod game_scene;

use crate::core::config::GameConfig;
use crate::game::RenderSnapshot;
use ratatui::Frame;

/// Main UI drawing function: the game screen fills the whole terminal.
pub fn draw_ui(frame: &mut Frame, snapshot: &RenderSnapshot, config: &GameConfig) {
    let size = frame.size();
    game_scene::render_game(frame, size, snapshot, config);
}
