use crate::{Bird, Config, Pipe, Time};
use hecs::World;

/// Apply gravity to the bird, then move it (semi-implicit Euler)
pub fn move_bird(world: &mut World, time: &Time, config: &Config) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.vel += config.gravity * time.dt;
        bird.pos.y += bird.vel * time.dt;
    }
}

/// Scroll every pipe left at the configured speed
pub fn move_pipes(world: &mut World, time: &Time, config: &Config) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        pipe.x -= config.pipe_speed * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_bird, Config};
    use glam::Vec2;

    #[test]
    fn test_bird_velocity_integrates_before_position() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_bird(&mut world, Bird::new(Vec2::new(100.0, 200.0)));

        move_bird(&mut world, &Time::new(0.1, 0.0), &config);

        let bird = *world.get::<&Bird>(entity).unwrap();
        assert!((bird.vel - 145.0).abs() < 1e-3);
        // Position uses the updated velocity
        assert!((bird.pos.y - 214.5).abs() < 1e-3);
        assert_eq!(bird.pos.x, 100.0, "x never changes");
    }

    #[test]
    fn test_zero_dt_leaves_bird_unchanged() {
        let mut world = World::new();
        let config = Config::new();
        let start = Bird::new(Vec2::new(100.0, 200.0));
        let entity = create_bird(&mut world, start);

        move_bird(&mut world, &Time::new(0.0, 0.0), &config);

        assert_eq!(*world.get::<&Bird>(entity).unwrap(), start);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut world = World::new();
        let config = Config::new();
        let entity = world.spawn((Pipe::new(300.0, 200.0, 0),));

        move_pipes(&mut world, &Time::new(0.5, 0.0), &config);

        let pipe = *world.get::<&Pipe>(entity).unwrap();
        assert!((pipe.x - 207.5).abs() < 1e-3);
        assert_eq!(pipe.gap_y, 200.0, "gap centre is fixed");
    }
}
