//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use netcatch_core::components::*;
use netcatch_core::events::GameEvent;
use netcatch_core::state::*;
use netcatch_core::types::{Position, SimTime};

use crate::progression::LevelState;

/// Build a complete GameStateSnapshot from the current world and level state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    level_state: &LevelState,
    pursuer: &Pursuer,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase: level_state.phase.kind(),
        level: level_state.level,
        score: level_state.score,
        level_timer: level_state.level_timer,
        countdown: level_state.countdown(),
        transition_progress: level_state.transition_progress(),
        butterflies: build_butterflies(world),
        pursuer: PursuerView {
            position: pursuer.position,
            radius: pursuer.radius,
        },
        catch_counts: level_state.catch_counts,
        events,
    }
}

/// Build ButterflyView list, oldest first.
fn build_butterflies(world: &World) -> Vec<ButterflyView> {
    let mut butterflies: Vec<ButterflyView> = world
        .query::<(&Position, &Butterfly, &SpawnSerial, Option<&Boss>)>()
        .iter()
        .map(|(_, (pos, butterfly, serial, boss))| ButterflyView {
            serial: serial.0,
            position: *pos,
            width: butterfly.width,
            height: butterfly.height,
            rotation: butterfly.direction,
            wing_phase: butterfly.wing_phase,
            art_level: butterfly.level,
            is_boss: boss.is_some(),
            health: boss.map(|b| b.health),
        })
        .collect();

    butterflies.sort_by_key(|b| b.serial);
    butterflies
}
