//! Click hit-testing.
//!
//! A click is tested against live butterflies newest-first and resolves
//! against at most one of them.

use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use netcatch_core::components::{Boss, Butterfly, SpawnSerial};
use netcatch_core::constants::BOSS_HIT_SPEED_FACTOR;
use netcatch_core::enums::CatchOutcome;
use netcatch_core::types::{Level, Position, Velocity};

/// What a click hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickResolution {
    pub level: Level,
    pub is_boss: bool,
    pub outcome: CatchOutcome,
}

/// Test one butterfly against a click.
///
/// A boss with more than one health point absorbs the hit: it loses a point,
/// turns to a random heading and speeds up by 10 %.
pub fn check_catch(
    pos: &Position,
    vel: &mut Velocity,
    butterfly: &mut Butterfly,
    boss: Option<&mut Boss>,
    click: &Position,
    pursuer_radius: f64,
    rng: &mut ChaCha8Rng,
) -> CatchOutcome {
    if pos.distance_to(click) > butterfly.catch_radius + pursuer_radius {
        return CatchOutcome::Miss;
    }

    let Some(boss) = boss else {
        return CatchOutcome::Caught;
    };

    if boss.health > 1 {
        boss.health -= 1;
        butterfly.direction = rng.gen_range(0.0..TAU);
        butterfly.initial_direction = butterfly.direction;
        butterfly.speed *= BOSS_HIT_SPEED_FACTOR;
        *vel = Velocity::from_heading(butterfly.direction, butterfly.speed);
        CatchOutcome::Wounded {
            remaining: boss.health,
        }
    } else {
        boss.health = 0;
        CatchOutcome::Caught
    }
}

/// Resolve a click against the world. Caught butterflies are despawned.
/// Returns `None` when nothing was hit.
pub fn resolve_click(
    world: &mut World,
    click: &Position,
    pursuer_radius: f64,
    rng: &mut ChaCha8Rng,
) -> Option<ClickResolution> {
    let mut candidates: Vec<(SpawnSerial, Entity)> = world
        .query::<&SpawnSerial>()
        .iter()
        .map(|(entity, serial)| (*serial, entity))
        .collect();
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    for (_, entity) in candidates {
        let resolution = {
            let Ok((pos, vel, butterfly, boss)) = world
                .query_one_mut::<(&Position, &mut Velocity, &mut Butterfly, Option<&mut Boss>)>(
                    entity,
                )
            else {
                continue;
            };
            let is_boss = boss.is_some();
            let outcome = check_catch(pos, vel, butterfly, boss, click, pursuer_radius, rng);
            ClickResolution {
                level: butterfly.level,
                is_boss,
                outcome,
            }
        };

        if !resolution.outcome.is_hit() {
            continue;
        }
        if resolution.outcome.is_caught() {
            let _ = world.despawn(entity);
        }
        return Some(resolution);
    }

    None
}
