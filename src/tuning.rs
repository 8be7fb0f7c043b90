//! Data-driven game balance
//!
//! Every gameplay constant that shapes the jump arc or the obstacle stream.
//! Defaults reproduce the classic feel; overrides come from the settings file.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Balance values for one process lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Most negative velocity reached before the arc turns (must be < 0)
    pub jump_apex: f32,
    /// Velocity set on the tick a jump starts
    pub jump_seed_velocity: f32,
    /// Velocity removed per tick while ascending
    pub ascend_step: f32,
    /// Velocity added per tick while descending
    pub descend_step: f32,

    /// Base ticks between spawns (jitter is added on top)
    pub spawn_interval: i32,
    /// Base ticks before the first spawn after a restart
    pub restart_spawn_delay: i32,
    /// Exclusive upper bound of the random spawn jitter
    pub spawn_jitter: i32,

    /// Base obstacle speed at run start (negative = leftward)
    pub start_speed: f32,
    /// Speed magnitude added on every spawn
    pub speed_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_apex: -150.0,
            jump_seed_velocity: 0.5,
            ascend_step: 4.0,
            descend_step: 3.0,

            spawn_interval: 120,
            restart_spawn_delay: 60,
            spawn_jitter: 60,

            start_speed: -4.0,
            speed_step: 0.5,
        }
    }
}

impl Tuning {
    /// Reject values that would stall the jump state machine or the spawner
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::InvalidTuning { field, reason });

        if self.jump_apex.is_nan() || self.jump_apex >= 0.0 {
            return invalid("jump_apex", "must be negative");
        }
        if self.ascend_step.is_nan() || self.ascend_step <= 0.0 {
            return invalid("ascend_step", "must be positive");
        }
        if self.descend_step.is_nan() || self.descend_step <= 0.0 {
            return invalid("descend_step", "must be positive");
        }
        if self.spawn_interval <= 0 {
            return invalid("spawn_interval", "must be positive");
        }
        if self.restart_spawn_delay < 0 {
            return invalid("restart_spawn_delay", "must not be negative");
        }
        if self.spawn_jitter <= 0 {
            return invalid("spawn_jitter", "must be positive");
        }
        if self.start_speed.is_nan() || self.start_speed >= 0.0 {
            return invalid("start_speed", "must be negative (leftward)");
        }
        if self.speed_step.is_nan() || self.speed_step <= 0.0 {
            return invalid("speed_step", "must be positive");
        }
        Ok(())
    }
}
