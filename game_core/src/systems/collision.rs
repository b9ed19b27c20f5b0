use crate::{pipes_in_spawn_order, Bird, Config, Events, Outcome, Pipe, Score};
use hecs::World;

/// Check the bird against the surface top, the ground and every pipe.
///
/// Pipes are visited in spawn order and scored in the same pass. A collision
/// ends the pass at once; pipes already scored earlier in the pass keep their
/// points.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Outcome {
    let bird = match world.query::<&Bird>().iter().next() {
        Some((_e, bird)) => *bird,
        None => return Outcome::Continue, // No bird in world
    };
    let bird_box = bird.bounds(config.bird_radius);

    // Surface top and ground band
    if bird_box.min.y < 0.0 || bird_box.max.y >= config.ground_top() {
        events.hit_boundary = true;
        return Outcome::Terminated;
    }

    for (entity, pipe) in pipes_in_spawn_order(world) {
        if bird_box.overlaps_x(&pipe.bounds(config)) {
            let (gap_top, gap_bottom) = config.gap_bounds(pipe.gap_y);
            if bird_box.escapes_span(gap_top, gap_bottom) {
                events.hit_pipe = true;
                return Outcome::Terminated;
            }
        }

        if !pipe.scored && pipe.right(config) < config.bird_x {
            if let Ok(mut stored) = world.get::<&mut Pipe>(entity) {
                stored.scored = true;
            }
            score.increment();
            events.pipes_scored += 1;
        }
    }

    Outcome::Continue
}
