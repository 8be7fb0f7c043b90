//! Jump controller
//!
//! A jump is a two-phase velocity ramp rather than integrated gravity:
//! velocity is pushed down by a fixed step until it passes the apex
//! threshold, then pulled back up by another fixed step until it returns to
//! zero. Jump duration and height are therefore fixed for a given tuning.
//!
//! Landing only re-arms the controller; whatever velocity the last descending
//! step produced is left in place.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Where the player is within a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpPhase {
    /// On the baseline; the only phase that accepts a new jump
    #[default]
    Idle,
    /// Velocity ramping toward the apex threshold
    Ascending,
    /// Velocity ramping back toward zero
    Descending,
}

/// Per-player jump state machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JumpController {
    phase: JumpPhase,
    /// Velocity the current phase ramps toward
    threshold: f32,
}

impl JumpController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == JumpPhase::Idle
    }

    /// Start a jump. Ignored (returns false) unless the controller is idle.
    pub fn request(&mut self, velocity: &mut f32, tuning: &Tuning) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.threshold = tuning.jump_apex;
        *velocity = tuning.jump_seed_velocity;
        self.phase = JumpPhase::Ascending;
        true
    }

    /// Advance the ramp by one tick. The caller applies `y += velocity` afterwards.
    pub fn step(&mut self, velocity: &mut f32, tuning: &Tuning) {
        match self.phase {
            JumpPhase::Idle => return,
            JumpPhase::Ascending => {
                if *velocity > self.threshold {
                    *velocity -= tuning.ascend_step;
                }
                if *velocity <= self.threshold {
                    self.threshold = 0.0;
                    self.phase = JumpPhase::Descending;
                }
            }
            JumpPhase::Descending => {}
        }

        // Runs on the apex tick too
        if self.phase == JumpPhase::Descending {
            if *velocity < self.threshold {
                *velocity += tuning.descend_step;
            }
            if *velocity >= self.threshold {
                self.phase = JumpPhase::Idle;
            }
        }
    }

    /// Abandon any in-flight jump so a new one is accepted immediately
    pub fn force_idle(&mut self) {
        self.phase = JumpPhase::Idle;
        self.threshold = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a full jump, returning (ticks until idle, velocity after each tick)
    fn run_jump(tuning: &Tuning) -> (u32, Vec<f32>) {
        let mut jump = JumpController::new();
        let mut velocity = 0.0;
        assert!(jump.request(&mut velocity, tuning));

        let mut trace = Vec::new();
        let mut ticks = 0;
        while !jump.is_idle() {
            jump.step(&mut velocity, tuning);
            trace.push(velocity);
            ticks += 1;
            assert!(ticks < 10_000, "jump never landed");
        }
        (ticks, trace)
    }

    #[test]
    fn test_request_seeds_velocity() {
        let tuning = Tuning::default();
        let mut jump = JumpController::new();
        let mut velocity = 0.0;

        assert!(jump.request(&mut velocity, &tuning));
        assert_eq!(velocity, 0.5);
        assert_eq!(jump.phase(), JumpPhase::Ascending);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let mut jump = JumpController::new();
        let mut velocity = 0.0;
        jump.request(&mut velocity, &tuning);
        jump.step(&mut velocity, &tuning);
        jump.step(&mut velocity, &tuning);
        let before = velocity;

        assert!(!jump.request(&mut velocity, &tuning));
        assert_eq!(velocity, before);
        assert_eq!(jump.phase(), JumpPhase::Ascending);
    }

    #[test]
    fn test_default_jump_duration() {
        // 38 ticks to pass the apex (0.5 - 4n < -150), 50 more to climb back above zero
        let (ticks, trace) = run_jump(&Tuning::default());
        assert_eq!(ticks, 88);
        assert_eq!(trace[0], -3.5);
        assert_eq!(trace[37], -148.5);
        assert_eq!(*trace.last().unwrap(), 1.5);
    }

    #[test]
    fn test_phases_are_ordered() {
        let tuning = Tuning::default();
        let mut jump = JumpController::new();
        let mut velocity = 0.0;
        jump.request(&mut velocity, &tuning);

        let mut seen_descending = false;
        while !jump.is_idle() {
            jump.step(&mut velocity, &tuning);
            match jump.phase() {
                JumpPhase::Ascending => assert!(!seen_descending, "ascending after descending"),
                JumpPhase::Descending => seen_descending = true,
                JumpPhase::Idle => {}
            }
        }
        assert!(seen_descending);
    }

    #[test]
    fn test_idle_keeps_residual_velocity() {
        let tuning = Tuning::default();
        let (_, trace) = run_jump(&tuning);
        let landed = *trace.last().unwrap();
        assert!(landed > 0.0);

        let mut jump = JumpController::new();
        let mut velocity = landed;
        jump.step(&mut velocity, &tuning);
        assert_eq!(velocity, landed);
    }

    #[test]
    fn test_force_idle_mid_air() {
        let tuning = Tuning::default();
        let mut jump = JumpController::new();
        let mut velocity = 0.0;
        jump.request(&mut velocity, &tuning);
        for _ in 0..10 {
            jump.step(&mut velocity, &tuning);
        }
        assert!(!jump.is_idle());

        jump.force_idle();
        assert!(jump.is_idle());
        assert!(jump.request(&mut velocity, &tuning));
    }

    #[test]
    fn test_seed_below_apex_still_lands() {
        let tuning = Tuning {
            jump_seed_velocity: -200.0,
            ..Default::default()
        };
        let (ticks, _) = run_jump(&tuning);
        // No ascent steps needed; descent from -200 by 3s takes 67 ticks
        assert_eq!(ticks, 67);
    }

    #[test]
    fn test_idle_step_without_jump_stays_still() {
        let tuning = Tuning::default();
        let mut jump = JumpController::new();
        let mut velocity = 0.0;
        for _ in 0..5 {
            jump.step(&mut velocity, &tuning);
        }
        assert_eq!(velocity, 0.0);
        assert!(jump.is_idle());
    }
}
