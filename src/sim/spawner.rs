//! Obstacle spawner
//!
//! Counts ticks down to the next log, jitters the gap with a seeded PRNG,
//! and ratchets the base speed up on every spawn until the run restarts.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Timer-driven log factory
#[derive(Debug, Clone)]
pub struct Spawner<R = Pcg32> {
    rng: R,
    /// Ticks until the next spawn (spawns when it reaches zero or below)
    countdown: i32,
    /// Velocity given to the next log (negative, grows in magnitude)
    base_speed: f32,
}

impl Spawner<Pcg32> {
    /// Spawner driven by a PCG stream seeded with `seed`
    pub fn seeded(seed: u64, tuning: &Tuning) -> Self {
        Self::new(Pcg32::seed_from_u64(seed), tuning)
    }
}

impl<R: Rng> Spawner<R> {
    /// Fresh spawner; the first log appears on the first tick
    pub fn new(rng: R, tuning: &Tuning) -> Self {
        Self {
            rng,
            countdown: 0,
            base_speed: tuning.start_speed,
        }
    }

    pub fn countdown(&self) -> i32 {
        self.countdown
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Advance one tick, returning the new log if one is due
    pub fn tick(&mut self, tuning: &Tuning) -> Option<Obstacle> {
        self.countdown -= 1;
        if self.countdown > 0 {
            return None;
        }

        let jitter = self.draw_jitter(tuning);
        self.base_speed -= tuning.speed_step;
        self.countdown = tuning.spawn_interval + jitter;

        log::debug!(
            "Spawning log at speed {:.1}, next in {} ticks",
            self.base_speed,
            self.countdown
        );
        Some(Obstacle::spawn(self.base_speed))
    }

    /// Restore run-start speed and schedule the first log of a new run
    pub fn reset(&mut self, tuning: &Tuning) {
        self.countdown = tuning.restart_spawn_delay + self.draw_jitter(tuning);
        self.base_speed = tuning.start_speed;
    }

    fn draw_jitter(&mut self, tuning: &Tuning) -> i32 {
        if tuning.spawn_jitter <= 0 {
            return 0;
        }
        self.rng.random_range(0..tuning.spawn_jitter)
    }
}
