//! Hitbox geometry and overlap detection
//!
//! Hitboxes are smaller than the sprites they belong to, which gives the
//! player a forgiving margin when brushing past a log.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Hitbox {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Hitbox of the player sprite whose top-left corner is at `pos`
    #[inline]
    pub fn player(pos: Vec2) -> Self {
        Self::new(
            pos.x + PLAYER_HITBOX_OFFSET_X,
            pos.y + PLAYER_HITBOX_OFFSET_Y,
            PLAYER_HITBOX_W,
            PLAYER_HITBOX_H,
        )
    }

    /// Hitbox of a log sprite whose top-left corner is at `pos`
    #[inline]
    pub fn choco_log(pos: Vec2) -> Self {
        Self::new(
            pos.x + LOG_HITBOX_OFFSET_X,
            pos.y + LOG_HITBOX_OFFSET_Y,
            LOG_HITBOX_W,
            LOG_HITBOX_H,
        )
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
