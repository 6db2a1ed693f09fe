//! Entity spawn factories for the simulation world.

use hecs::{Entity, World};

use netcatch_core::components::SpawnSerial;

use crate::spawn_queue::ButterflyBlueprint;

/// Insert one butterfly (and its `Boss` marker, if any) into the world.
pub fn spawn_butterfly(world: &mut World, blueprint: ButterflyBlueprint, serial: SpawnSerial) -> Entity {
    let ButterflyBlueprint {
        position,
        velocity,
        butterfly,
        boss,
    } = blueprint;

    match boss {
        Some(boss) => world.spawn((position, velocity, butterfly, serial, boss)),
        None => world.spawn((position, velocity, butterfly, serial)),
    }
}

/// Number of live butterflies.
pub fn live_count(world: &World) -> usize {
    world.len() as usize
}
