//! Game state and core simulation types
//!
//! `GameState` owns everything that changes during a run. Fields are
//! crate-private: the outside world advances it through [`super::tick`] and
//! [`GameState::restart`], and reads it through accessors or a [`Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::jump::{JumpController, JumpPhase};
use super::spawner::Spawner;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{log_spawn_origin, player_origin};

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Sprite top-left corner; x never changes after layout
    pub pos: Vec2,
    /// Vertical velocity (negative = up)
    pub velocity: f32,
    pub jump: JumpController,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: player_origin(),
            velocity: 0.0,
            jump: JumpController::new(),
        }
    }
}

/// A scrolling choco log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Sprite top-left corner
    pub pos: Vec2,
    /// Horizontal velocity (negative = leftward)
    pub velocity: f32,
}

impl Obstacle {
    /// A log entering at the right edge of the screen
    pub fn spawn(velocity: f32) -> Self {
        Self {
            pos: log_spawn_origin(),
            velocity,
        }
    }

    /// Right edge of the sprite
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + LOG_W
    }

    /// True once the whole sprite has scrolled past the left edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() <= 0.0
    }
}

/// Read-only view of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Vec2,
    pub obstacles: Vec<Vec2>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

/// Complete run/session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) tuning: Tuning,
    pub(crate) player: Player,
    /// Active logs in spawn order (also left-to-right order)
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) spawner: Spawner,
    pub(crate) score: u32,
    /// Best score this process has seen; survives restarts
    pub(crate) high_score: u32,
    pub(crate) game_over: bool,
    /// Simulation tick counter (never reset)
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with the given seed and balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let spawner = Spawner::seeded(seed, &tuning);
        log::info!("New game (seed {})", seed);
        Self {
            tuning,
            player: Player::default(),
            obstacles: Vec::new(),
            spawner,
            score: 0,
            high_score: 0,
            game_over: false,
            time_ticks: 0,
        }
    }

    /// Start a new run. The high score is kept.
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.spawner.reset(&self.tuning);
        self.score = 0;
        self.player.velocity = 0.0;
        self.player.pos = player_origin();
        self.player.jump.force_idle();
        self.game_over = false;
        log::info!("Restarted (high score {})", self.high_score);
    }

    /// Award one point, raising the high score if it is beaten
    pub(crate) fn award_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.player.jump.phase()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Current base speed (velocity of the most recent spawn)
    pub fn base_speed(&self) -> f32 {
        self.spawner.base_speed()
    }

    /// Ticks until the next spawn
    pub fn spawn_countdown(&self) -> i32 {
        self.spawner.countdown()
    }

    /// Copy out the render surface for this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.pos,
            obstacles: self.obstacles.iter().map(|o| o.pos).collect(),
            score: self.score,
            high_score: self.high_score,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(1);
        assert_eq!(state.player().pos, Vec2::new(436.0, 474.0));
        assert_eq!(state.player().velocity, 0.0);
        assert_eq!(state.jump_phase(), JumpPhase::Idle);
        assert!(state.obstacles().is_empty());
        assert_eq!(state.score(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.base_speed(), -4.0);
    }

    #[test]
    fn test_custom_tuning_drives_run() {
        let tuning = Tuning {
            start_speed: -6.0,
            ..Default::default()
        };
        let state = GameState::with_tuning(1, tuning.clone());
        assert_eq!(state.tuning(), &tuning);
        assert_eq!(state.base_speed(), -6.0);
    }

    #[test]
    fn test_spawn_position_and_velocity() {
        let log = Obstacle::spawn(-5.0);
        assert_eq!(log.pos, Vec2::new(SCREEN_W - LOG_W, SCREEN_H - LOG_H - 35.0));
        assert_eq!(log.velocity, -5.0);
    }

    #[test]
    fn test_restart_resets_run_but_keeps_high_score() {
        let mut state = GameState::new(7);
        state.score = 10;
        state.high_score = 20;
        state.obstacles.push(Obstacle::spawn(-6.0));
        state.game_over = true;
        state.player.pos.y = 12.0;
        state.player.velocity = -40.0;
        state.player.jump.request(&mut state.player.velocity, &Tuning::default());

        state.restart();

        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 20);
        assert!(!state.is_game_over());
        assert!(state.obstacles().is_empty());
        assert_eq!(state.player().pos, player_origin());
        assert_eq!(state.player().velocity, 0.0);
        assert_eq!(state.jump_phase(), JumpPhase::Idle);
        assert_eq!(state.base_speed(), -4.0);
        assert!((60..120).contains(&state.spawn_countdown()));
    }

    #[test]
    fn test_award_point_tracks_high_score() {
        let mut state = GameState::new(1);
        state.high_score = 2;
        state.award_point();
        state.award_point();
        assert_eq!(state.high_score(), 2);
        state.award_point();
        assert_eq!(state.score(), 3);
        assert_eq!(state.high_score(), 3);
    }

    #[test]
    fn test_off_screen_boundary() {
        let mut log = Obstacle::spawn(-4.0);
        log.pos.x = -LOG_W;
        assert!(log.is_off_screen());
        log.pos.x = -LOG_W + 0.5;
        assert!(!log.is_off_screen());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(3);
        state.obstacles.push(Obstacle::spawn(-4.5));
        state.obstacles.push(Obstacle::spawn(-5.0));
        state.obstacles[0].pos.x = 100.0;
        state.score = 4;
        state.high_score = 9;

        let snap = state.snapshot();
        assert_eq!(snap.player, player_origin());
        assert_eq!(snap.obstacles.len(), 2);
        assert_eq!(snap.obstacles[0].x, 100.0);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.high_score, 9);
        assert!(!snap.game_over);
    }
}
