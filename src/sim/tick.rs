//! Per-frame simulation tick
//!
//! Advances the world by exactly one displayed frame. The order of the steps
//! matters: scoring compares positions across the movement step, removal
//! happens before collision, and the first collision ends the tick.

use super::hitbox::Hitbox;
use super::state::GameState;

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump key freshly pressed this frame
    pub jump: bool,
    /// Restart key freshly pressed this frame (only read while game over)
    pub restart: bool,
}

/// What happened during one tick, for drivers that log or play sounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A jump started this tick
    pub jumped: bool,
    /// A new log entered the screen
    pub spawned: bool,
    /// Points awarded for logs passed this tick
    pub points: u32,
    /// The player hit a log; the run is over
    pub collided: bool,
    /// A game-over state was restarted
    pub restarted: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Frozen until restarted
    if state.game_over {
        if input.restart {
            state.restart();
            outcome.restarted = true;
        }
        return outcome;
    }

    state.time_ticks += 1;

    // Jump arc
    let player = &mut state.player;
    if input.jump {
        outcome.jumped = player.jump.request(&mut player.velocity, &state.tuning);
    }
    player.jump.step(&mut player.velocity, &state.tuning);
    player.pos.y += player.velocity;

    // Spawn
    if let Some(log) = state.spawner.tick(&state.tuning) {
        state.obstacles.push(log);
        outcome.spawned = true;
    }

    // Move logs, scoring those whose trailing edge crossed the player this tick
    let player_x = state.player.pos.x;
    for log in &mut state.obstacles {
        let before = log.trailing_edge();
        log.pos.x += log.velocity;
        if before > player_x && log.trailing_edge() <= player_x {
            outcome.points += 1;
        }
    }
    for _ in 0..outcome.points {
        state.award_point();
    }
    if outcome.points > 0 {
        log::debug!("Score {} (high {})", state.score, state.high_score);
    }

    // Drop logs that have fully left the screen
    state.obstacles.retain(|log| !log.is_off_screen());

    // Collisions
    let player_box = Hitbox::player(state.player.pos);
    let hit = state
        .obstacles
        .iter()
        .any(|log| player_box.overlaps(&Hitbox::choco_log(log.pos)));
    if hit {
        log::info!("Collision detected! Final score {}", state.score);
        state.game_over = true;
        state.player.jump.force_idle();
        outcome.collided = true;
    }

    outcome
}
