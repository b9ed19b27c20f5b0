use crate::{Config, Events, GameRng, Pipe, PipeSpawner, Time};
use hecs::World;
use rand::Rng;

/// Build a pipe just off the right edge with a uniformly random gap centre
pub fn create_pipe<R: Rng + ?Sized>(config: &Config, rng: &mut R, seq: u64) -> Pipe {
    let gap_y = rng.gen_range(config.min_gap_center..=config.max_gap_center);
    Pipe::new(config.pipe_spawn_x(), gap_y, seq)
}

/// Spawn the next pipe and return its entity
pub fn spawn_pipe(
    world: &mut World,
    config: &Config,
    spawner: &mut PipeSpawner,
    rng: &mut GameRng,
) -> hecs::Entity {
    let seq = spawner.next_seq();
    world.spawn((create_pipe(config, &mut rng.0, seq),))
}

/// Advance the spawn timer and add a pipe when it fires
pub fn spawn_pipes(
    world: &mut World,
    time: &Time,
    config: &Config,
    spawner: &mut PipeSpawner,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if spawner.update(time.dt, config.pipe_spawn_seconds) {
        spawn_pipe(world, config, spawner, rng);
        events.pipes_spawned += 1;
    }
}

/// Snapshot of all pipes, ordered by spawn sequence
pub fn pipes_in_spawn_order(world: &World) -> Vec<(hecs::Entity, Pipe)> {
    let mut pipes: Vec<(hecs::Entity, Pipe)> = world
        .query::<&Pipe>()
        .iter()
        .map(|(entity, pipe)| (entity, *pipe))
        .collect();
    pipes.sort_by_key(|(_, pipe)| pipe.seq);
    pipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_created_pipe_gap_stays_in_range() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        for seq in 0..1000 {
            let pipe = create_pipe(&config, &mut rng.0, seq);
            assert!(pipe.gap_y >= config.min_gap_center);
            assert!(pipe.gap_y <= config.max_gap_center);
            assert_eq!(pipe.x, config.width + 48.0);
            assert!(!pipe.scored);
        }
    }

    #[test]
    fn test_injected_source_controls_gap() {
        let config = Config::new();
        let mut zeros = StepRng::new(0, 0);
        let pipe = create_pipe(&config, &mut zeros, 3);
        assert_eq!(pipe.gap_y, config.min_gap_center);
        assert_eq!(pipe.seq, 3);
    }

    #[test]
    fn test_spawn_pipes_waits_for_interval() {
        let mut world = World::new();
        let config = Config::new();
        let mut spawner = PipeSpawner::new();
        let mut events = Events::new();
        let mut rng = GameRng::default();

        spawn_pipes(&mut world, &Time::new(1.0, 0.0), &config, &mut spawner, &mut events, &mut rng);
        assert_eq!(world.len(), 0);

        spawn_pipes(&mut world, &Time::new(0.4, 1.0), &config, &mut spawner, &mut events, &mut rng);
        assert_eq!(world.len(), 1);
        assert_eq!(events.pipes_spawned, 1);
    }

    #[test]
    fn test_pipes_in_spawn_order() {
        let mut world = World::new();
        let config = Config::new();
        let mut spawner = PipeSpawner::new();
        let mut rng = GameRng::default();
        let first = spawn_pipe(&mut world, &config, &mut spawner, &mut rng);
        let second = spawn_pipe(&mut world, &config, &mut spawner, &mut rng);
        // Recycle an entity slot so storage order diverges from spawn order
        world.despawn(first).unwrap();
        let third = spawn_pipe(&mut world, &config, &mut spawner, &mut rng);

        let order: Vec<hecs::Entity> = pipes_in_spawn_order(&world)
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        assert_eq!(order, vec![second, third]);
    }
}
