//! Demo autopilot
//!
//! Produces the input a player would give: jump when a log in the player's
//! lane is about to reach the player's hitbox, restart when the run ends.

use super::hitbox::Hitbox;
use super::state::GameState;
use super::tick::TickInput;

/// How many ticks before contact the autopilot presses jump
pub const LEAD_TICKS: f32 = 6.0;

/// Decide this tick's input from the current state
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.is_game_over() {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = Hitbox::player(state.player().pos);
    let jump = state.player().jump.is_idle()
        && state.obstacles().iter().any(|log| {
            let hb = Hitbox::choco_log(log.pos);
            let in_lane = player.y < hb.y + hb.h && player.y + player.h > hb.y;
            let gap = hb.x - (player.x + player.w);
            in_lane && gap >= 0.0 && gap <= -log.velocity * LEAD_TICKS
        });

    TickInput {
        jump,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::sim::tick::tick;

    #[test]
    fn test_no_jump_with_clear_lane() {
        let state = GameState::new(1);
        assert!(!autopilot_input(&state).jump);
    }

    #[test]
    fn test_jumps_before_contact() {
        let mut state = GameState::new(1);
        let mut log = Obstacle::spawn(-5.0);
        // Log hitbox starts 20px right of the player hitbox (564 + 20 - 30)
        log.pos.x = 554.0;
        state.obstacles.push(log);
        assert!(autopilot_input(&state).jump);
    }

    #[test]
    fn test_ignores_log_behind_player() {
        let mut state = GameState::new(1);
        let mut log = Obstacle::spawn(-5.0);
        log.pos.x = 100.0;
        state.obstacles.push(log);
        assert!(!autopilot_input(&state).jump);
    }

    #[test]
    fn test_restarts_after_game_over() {
        let mut state = GameState::new(1);
        state.game_over = true;
        let input = autopilot_input(&state);
        assert!(input.restart);
        assert!(!input.jump);
    }

    #[test]
    fn test_autopilot_survives_first_log() {
        let mut state = GameState::new(2024);
        for _ in 0..300 {
            let input = autopilot_input(&state);
            tick(&mut state, &input);
        }
        assert!(!state.is_game_over());
    }
}
