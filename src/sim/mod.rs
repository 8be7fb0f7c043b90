//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per displayed frame, no wall-clock time
//! - Seeded RNG only, owned by the spawner
//! - Stable iteration order (logs kept in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod hitbox;
pub mod jump;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use hitbox::Hitbox;
pub use jump::{JumpController, JumpPhase};
pub use spawner::Spawner;
pub use state::{GameState, Obstacle, Player, Snapshot};
pub use tick::{TickInput, TickOutcome, tick};
