pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Result of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminated,
}

/// Advance the simulation by `time.dt` seconds.
///
/// The caller clamps `dt` to a sane per-frame maximum; negative values are
/// treated as zero.
#[allow(clippy::too_many_arguments)]
pub fn advance(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    spawner: &mut PipeSpawner,
    rng: &mut GameRng,
) -> Outcome {
    let step_time = Time {
        dt: time.dt.max(0.0),
        now: time.now,
    };

    // Clear events at start of tick
    events.clear();

    // 1. Gravity and bird motion
    move_bird(world, &step_time, config);

    // 2. Spawn timer
    spawn_pipes(world, &step_time, config, spawner, events, rng);

    // 3. Scroll pipes, drop the ones that left the screen
    move_pipes(world, &step_time, config);
    despawn_offscreen_pipes(world, config);

    time.now += step_time.dt;

    // 4-5. Boundaries, pipes and scoring
    check_collisions(world, config, score, events)
}

/// Helper to create the bird entity
pub fn create_bird(world: &mut World, bird: Bird) -> hecs::Entity {
    world.spawn((bird,))
}
