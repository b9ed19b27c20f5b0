use hecs::World;

use crate::components::*;
use crate::Config;

/// Garbage collection: despawn pipes that have scrolled fully offscreen
pub fn despawn_offscreen_pipes(world: &mut World, config: &Config) {
    let to_remove: Vec<hecs::Entity> = world
        .query::<&Pipe>()
        .iter()
        .filter(|(_, pipe)| pipe.is_offscreen(config))
        .map(|(entity, _)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}
