//! Choco Jump - an endless log-jumping runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump arc, spawner, collisions, scoring)
//! - `renderer`: Backend-agnostic draw list built from simulation snapshots
//! - `assets`: Asset manifest and fail-fast loading
//! - `settings` / `tuning`: Process configuration and data-driven game balance

pub mod assets;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{AssetError, ConfigError};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per displayed frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Logical screen size in pixels
    pub const SCREEN_W: f32 = 1000.0;
    pub const SCREEN_H: f32 = 667.0;

    /// Player sprite size
    pub const PLAYER_W: f32 = 128.0;
    pub const PLAYER_H: f32 = 128.0;
    /// Player baseline distance from the bottom of the screen
    pub const PLAYER_BOTTOM_OFFSET: f32 = 65.0;

    /// Choco log sprite size
    pub const LOG_W: f32 = 128.0;
    pub const LOG_H: f32 = 128.0;
    /// Log baseline distance from the bottom of the screen
    pub const LOG_BOTTOM_OFFSET: f32 = 35.0;

    /// Player hitbox, relative to the sprite's top-left corner
    pub const PLAYER_HITBOX_OFFSET_X: f32 = 40.0;
    pub const PLAYER_HITBOX_OFFSET_Y: f32 = 25.0;
    pub const PLAYER_HITBOX_W: f32 = 88.0;
    pub const PLAYER_HITBOX_H: f32 = 100.0;

    /// Log hitbox, relative to the sprite's top-left corner
    pub const LOG_HITBOX_OFFSET_X: f32 = 30.0;
    pub const LOG_HITBOX_OFFSET_Y: f32 = 50.0;
    pub const LOG_HITBOX_W: f32 = 40.0;
    pub const LOG_HITBOX_H: f32 = 60.0;
}

/// Player sprite origin after layout: horizontally centred, resting on the baseline
#[inline]
pub fn player_origin() -> Vec2 {
    use consts::*;
    Vec2::new(
        SCREEN_W / 2.0 - PLAYER_W / 2.0,
        SCREEN_H - PLAYER_H - PLAYER_BOTTOM_OFFSET,
    )
}

/// Spawn point for new logs: flush with the right edge of the screen
#[inline]
pub fn log_spawn_origin() -> Vec2 {
    use consts::*;
    Vec2::new(SCREEN_W - LOG_W, SCREEN_H - LOG_H - LOG_BOTTOM_OFFSET)
}

/// Seed derived from the wall clock, for runs that are not meant to be reproducible
pub fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED_C0C0)
}
