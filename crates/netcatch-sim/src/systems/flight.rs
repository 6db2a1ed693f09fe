//! Butterfly flight: wing flap, bounded wander, integration, screen crossing
//! and off-screen pruning.

use std::f64::consts::{PI, TAU};

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use netcatch_core::components::Butterfly;
use netcatch_core::constants::*;
use netcatch_core::enums::MovementPattern;
use netcatch_core::types::{Canvas, Position, Velocity};

/// Run one frame of flight for every butterfly.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, canvas: &Canvas, margin: f64, dt: f64) {
    for (_entity, (pos, vel, butterfly)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Butterfly)>()
    {
        update_butterfly(pos, vel, butterfly, canvas, margin, dt, rng);
    }
}

/// Advance a single butterfly by `dt` seconds.
pub fn update_butterfly(
    pos: &mut Position,
    vel: &mut Velocity,
    butterfly: &mut Butterfly,
    canvas: &Canvas,
    margin: f64,
    dt: f64,
    rng: &mut ChaCha8Rng,
) {
    butterfly.wing_phase = (butterfly.wing_phase + WING_FLAP_RATE * dt).rem_euclid(TAU);

    if butterfly.pattern == MovementPattern::Direct && rng.gen_bool(WANDER_CHANCE) {
        let step = rng.gen_range(-WANDER_STEP..=WANDER_STEP);
        let deviation = wrap_angle(butterfly.direction + step - butterfly.initial_direction)
            .clamp(-WANDER_MAX_DEVIATION, WANDER_MAX_DEVIATION);
        butterfly.direction = butterfly.initial_direction + deviation;
        *vel = Velocity::from_heading(butterfly.direction, butterfly.speed);
    }

    pos.x += vel.x * dt;
    pos.y += vel.y * dt;

    if !butterfly.has_crossed_screen && canvas.contains(pos) {
        butterfly.has_crossed_screen = true;
        butterfly.speed *= CROSSING_SPEED_BOOST;
        *vel = Velocity::from_heading(butterfly.direction, butterfly.speed);
    }

    if butterfly.has_crossed_screen && canvas.is_beyond(pos, margin) {
        butterfly.should_remove = true;
    }
}

/// Wrap an angle into `[-PI, PI)`.
fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}
