//! Choco Jump entry point
//!
//! Headless native driver: loads settings, verifies assets when an asset
//! directory is configured, then runs the simulation one tick per frame with
//! the autopilot at the controls.

use anyhow::Context;

use choco_jump::Settings;
use choco_jump::assets::{AssetManifest, Assets, FsAssetSource};
use choco_jump::renderer::{DrawList, LogBackend, RenderBackend};
use choco_jump::sim::{GameState, TickInput, autopilot_input, tick};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Choco Jump (headless) starting...");

    let settings = Settings::load().context("failed to load settings")?;

    if let Some(dir) = &settings.asset_dir {
        let mut source = FsAssetSource::new(dir);
        Assets::load(&mut source, &AssetManifest::default())
            .with_context(|| format!("failed to load assets from {}", dir.display()))?;
    }

    let seed = settings.effective_seed();
    let mut state = GameState::with_tuning(seed, settings.tuning.clone());
    let mut backend = LogBackend::default();
    let mut runs = 1u32;

    for _ in 0..settings.demo_ticks {
        let input = frame_input(&settings, &state);
        let outcome = tick(&mut state, &input);
        if outcome.collided {
            log::info!(
                "Run {} over at tick {}: score {}",
                runs,
                state.time_ticks(),
                state.score()
            );
        }
        if outcome.restarted {
            runs += 1;
        }

        backend.draw(&DrawList::from_snapshot(&state.snapshot()));
    }

    log::info!(
        "Done after {} frames: {} run(s), high score {}",
        backend.frames,
        runs,
        state.high_score()
    );
    Ok(())
}

/// This frame's input: autopilot presses (if enabled), restart per `auto_restart`
fn frame_input(settings: &Settings, state: &GameState) -> TickInput {
    let mut input = if settings.autopilot {
        autopilot_input(state)
    } else {
        TickInput::default()
    };
    input.restart = state.is_game_over() && settings.auto_restart;
    input
}
