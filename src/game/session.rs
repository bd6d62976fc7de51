//! Session controller: owns the avatar, obstacles, score and the
//! playing / game-over state machine, and runs the per-tick update.

use super::avatar::Avatar;
use super::obstacle::Obstacle;
use super::snapshot::{ObstacleView, RenderSnapshot};
use crate::core::config::{ConfigError, GameConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Session lifecycle. `GameOver` is sticky until [`Session::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    GameOver,
}

/// Logical inputs from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// The single action key: impulse while playing, restart after game over.
    ImpulseOrRestart,
    /// Leave the game loop.
    QuitRequested,
}

/// Result of running one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Continue(RenderSnapshot),
    Quit,
}

/// All per-game state. Rebuilt wholesale on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub avatar: Avatar,
    /// Spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: SessionPhase,
    pub spawn_timer: u32,
    pub tick_count: u64,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            avatar: Avatar::new(config),
            obstacles: Vec::new(),
            score: 0,
            phase: SessionPhase::Playing,
            spawn_timer: 0,
            tick_count: 0,
        }
    }
}

/// One game session driven by an injected pseudo-random source.
#[derive(Debug, Clone)]
pub struct Session<R: Rng = ChaCha8Rng> {
    config: GameConfig,
    rng: R,
    state: SessionState,
}

impl Session<ChaCha8Rng> {
    /// Session with a reproducible obstacle layout.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Validate `config` and start in `Playing`.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SessionState::new(&config);
        Ok(Self { config, rng, state })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access for tests and tooling that need to stage a position.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == SessionPhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn avatar(&self) -> &Avatar {
        &self.state.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    /// Discard the current game and start a fresh one.
    pub fn reset(&mut self) {
        log::debug!(
            "session reset after {} ticks (score {})",
            self.state.tick_count,
            self.state.score
        );
        self.state = SessionState::new(&self.config);
    }

    /// Impulse while playing; ignored after game over.
    pub fn handle_impulse_request(&mut self) {
        if self.state.phase == SessionPhase::Playing {
            self.state.avatar.apply_impulse(&self.config);
        }
    }

    /// Restart after game over; ignored while playing.
    pub fn handle_restart_request(&mut self) {
        if self.state.phase == SessionPhase::GameOver {
            self.reset();
        }
    }

    /// Route one logical input. Quit is the driver's concern and is ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::ImpulseOrRestart => match self.state.phase {
                SessionPhase::Playing => self.handle_impulse_request(),
                SessionPhase::GameOver => self.handle_restart_request(),
            },
            GameInput::QuitRequested => {}
        }
    }

    /// Apply this frame's inputs in order, run one tick, and return what to draw.
    /// A quit request short-circuits the frame without ticking.
    pub fn frame(&mut self, inputs: &[GameInput]) -> FrameOutcome {
        if inputs.contains(&GameInput::QuitRequested) {
            return FrameOutcome::Quit;
        }
        for &input in inputs {
            self.apply_input(input);
        }
        self.tick();
        FrameOutcome::Continue(self.snapshot())
    }

    /// Advance the simulation by one tick. No-op after game over.
    ///
    /// Order: spawn timer and spawn, avatar physics, boundary check, then for
    /// each obstacle in spawn order: scroll, collide, score, and finally
    /// offscreen removal.
    pub fn tick(&mut self) {
        if self.state.phase == SessionPhase::GameOver {
            return;
        }
        self.state.tick_count += 1;

        // 1. Spawn
        self.state.spawn_timer += 1;
        if self.state.spawn_timer > self.config.spawn_interval_ticks {
            let obstacle = Obstacle::spawn(
                f64::from(self.config.screen_width),
                &self.config,
                &mut self.rng,
            );
            log::trace!("obstacle spawned with gap at {}", obstacle.gap_center_y());
            self.state.obstacles.push(obstacle);
            self.state.spawn_timer = 0;
        }

        // 2. Avatar physics
        self.state.avatar.tick(&self.config);

        // 3. Boundary check
        if self.state.avatar.is_out_of_bounds(&self.config) {
            self.end_game("left the screen");
        }

        // 4. Obstacles
        let hitbox = self.state.avatar.bounding_shape();
        let avatar_x = self.state.avatar.x();
        let mut collided = false;
        for obstacle in &mut self.state.obstacles {
            obstacle.tick(&self.config);

            if obstacle.collides_with(&hitbox, &self.config) {
                collided = true;
            }

            if obstacle.check_passed(avatar_x, &self.config) {
                self.state.score += 1;
            }
        }
        if collided {
            self.end_game("hit an obstacle");
        }

        let config = &self.config;
        self.state.obstacles.retain(|o| !o.is_offscreen(config));
    }

    fn end_game(&mut self, cause: &str) {
        if self.state.phase == SessionPhase::GameOver {
            return;
        }
        self.state.phase = SessionPhase::GameOver;
        log::info!("game over: {} with score {}", cause, self.state.score);
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> RenderSnapshot {
        let avatar = &self.state.avatar;
        RenderSnapshot {
            avatar_x: avatar.x(),
            avatar_y: avatar.y,
            avatar_velocity: avatar.velocity,
            avatar_radius: avatar.radius(),
            obstacles: self
                .state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_center_y: o.gap_center_y(),
                })
                .collect(),
            score: self.state.score,
            game_over: self.is_game_over(),
            tick: self.state.tick_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> Session {
        Session::with_seed(GameConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = new_session();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.state().spawn_timer, 0);
        assert_eq!(session.state(), &SessionState::new(&GameConfig::default()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            screen_height: 100,
            ..GameConfig::default()
        };
        assert!(matches!(
            Session::with_seed(config, 1),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_first_tick_physics() {
        let mut session = new_session();
        session.tick();
        assert!((session.avatar().velocity - 0.5).abs() < f64::EPSILON);
        assert!((session.avatar().y - 300.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_impulse_ignored_after_game_over() {
        let mut session = new_session();
        session.state_mut().phase = SessionPhase::GameOver;
        session.state_mut().avatar.velocity = 3.0;
        session.handle_impulse_request();
        assert_eq!(session.avatar().velocity, 3.0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut session = new_session();
        session.tick();
        let before = session.state().clone();
        session.handle_restart_request();
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_tick_is_noop_after_game_over() {
        let mut session = new_session();
        session.state_mut().obstacles.push(Obstacle::with_gap(300.0, 300));
        session.state_mut().phase = SessionPhase::GameOver;
        let before = session.state().clone();
        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_ceiling_ends_game() {
        let mut session = new_session();
        session.state_mut().avatar.y = 0.2;
        session.state_mut().avatar.velocity = -1.0;
        session.tick();
        assert!(session.is_game_over());
    }

    #[test]
    fn test_floor_ends_game() {
        let mut session = new_session();
        session.state_mut().avatar.y = 599.9;
        session.state_mut().avatar.velocity = 0.0;
        session.tick();
        assert!(session.is_game_over());
    }

    #[test]
    fn test_collision_ends_game() {
        let mut session = new_session();
        // Gap far below the avatar, column right on top of it
        session.state_mut().obstacles.push(Obstacle::with_gap(90.0, 450));
        session.tick();
        assert!(session.is_game_over());
    }

    #[test]
    fn test_passing_scores_once() {
        let mut session = new_session();
        // Trailing edge at 41 + 60 = 101, one scroll step puts it at 98 < 100
        session.state_mut().obstacles.push(Obstacle::with_gap(41.0, 300));
        session.tick();
        assert_eq!(session.score(), 1);
        assert!(session.obstacles()[0].passed());
        session.tick();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_offscreen_obstacles_removed_in_order() {
        let mut session = new_session();
        session.state_mut().obstacles.push(Obstacle::with_gap(-58.0, 300));
        session.state_mut().obstacles.push(Obstacle::with_gap(250.0, 200));
        session.state_mut().obstacles.push(Obstacle::with_gap(350.0, 400));
        session.tick();
        let xs: Vec<f64> = session.obstacles().iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![247.0, 347.0]);
    }

    #[test]
    fn test_frame_applies_input_before_tick() {
        let mut session = new_session();
        let outcome = session.frame(&[GameInput::ImpulseOrRestart]);
        let FrameOutcome::Continue(snapshot) = outcome else {
            panic!("expected a snapshot");
        };
        assert!((snapshot.avatar_velocity - (-7.5)).abs() < f64::EPSILON);
        assert!((snapshot.avatar_y - 292.5).abs() < f64::EPSILON);
        assert_eq!(snapshot.tick, 1);
    }

    #[test]
    fn test_frame_quit_does_not_tick() {
        let mut session = new_session();
        let before = session.state().clone();
        assert_eq!(
            session.frame(&[GameInput::ImpulseOrRestart, GameInput::QuitRequested]),
            FrameOutcome::Quit
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_action_key_restarts_after_game_over() {
        let mut session = new_session();
        session.state_mut().score = 4;
        session.state_mut().phase = SessionPhase::GameOver;
        session.apply_input(GameInput::ImpulseOrRestart);
        assert_eq!(session.state(), &SessionState::new(&GameConfig::default()));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = new_session();
        session.state_mut().obstacles.push(Obstacle::with_gap(200.0, 321));
        session.state_mut().score = 3;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.score, 3);
        assert!(!snapshot.game_over);
        assert_eq!(
            snapshot.obstacles,
            vec![ObstacleView {
                x: 200.0,
                gap_center_y: 321
            }]
        );
        assert!((snapshot.avatar_x - 100.0).abs() < f64::EPSILON);
        assert!((snapshot.avatar_radius - 30.0).abs() < f64::EPSILON);
    }
}
