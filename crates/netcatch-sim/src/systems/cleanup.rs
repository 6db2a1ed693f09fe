//! Cleanup system: removes butterflies that have flown off after crossing.

use hecs::{Entity, World};

use netcatch_core::components::Butterfly;

/// Despawn every butterfly flagged `should_remove`.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, butterfly) in world.query_mut::<&Butterfly>() {
        if butterfly.should_remove {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcatch_core::enums::MovementPattern;
    use netcatch_core::types::Level;

    #[test]
    fn test_only_flagged_removed() {
        let mut world = World::new();
        for flagged in [true, false, true] {
            world.spawn((Butterfly {
                level: Level::FIRST,
                width: 1.0,
                height: 1.0,
                base_speed: 1.0,
                speed: 1.0,
                direction: 0.0,
                initial_direction: 0.0,
                catch_radius: 1.0,
                pattern: MovementPattern::Direct,
                wing_phase: 0.0,
                has_crossed_screen: flagged,
                should_remove: flagged,
            },));
        }

        let mut buffer = Vec::new();
        assert_eq!(run(&mut world, &mut buffer), 2);
        assert_eq!(world.len(), 1);
        assert_eq!(run(&mut world, &mut buffer), 0);
    }
}
