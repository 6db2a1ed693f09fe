//! Spawn planning: edges, crossing points, headings and level wave layouts.
//!
//! Planning is pure with respect to the world: every function returns
//! `(delay_secs, blueprint)` pairs that the engine schedules on the spawn queue.
//! All randomness flows through the session RNG, so a fixed seed fixes layouts.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use netcatch_core::components::{Boss, Butterfly};
use netcatch_core::constants::*;
use netcatch_core::enums::{Edge, Formation, MovementPattern};
use netcatch_core::types::{Canvas, Level, Position, Velocity};

use crate::profiles::LevelProfile;
use crate::spawn_queue::ButterflyBlueprint;

/// Where a butterfly starts and which way it heads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub direction: f64,
    pub edge: Edge,
    /// Interior point the heading was aimed through (before jitter).
    pub crossing_point: Position,
}

/// A planned insertion: delay from now (seconds) and what to insert.
pub type PlannedSpawn = (f64, ButterflyBlueprint);

/// The one formation selection policy.
pub fn pick_formation(rng: &mut ChaCha8Rng) -> Formation {
    Formation::ALL[rng.gen_range(0..Formation::ALL.len())]
}

/// Uniformly random canvas edge.
pub fn pick_edge(rng: &mut ChaCha8Rng) -> Edge {
    Edge::ALL[rng.gen_range(0..Edge::ALL.len())]
}

/// Edge override for member `index` of a group sharing `group_edge`.
/// `None` lets `position_in_formation` apply the formation's own rule.
pub fn group_edge_for(formation: Formation, group_edge: Edge, index: u32) -> Option<Edge> {
    match formation {
        Formation::Stream => Some(group_edge),
        Formation::Pincer if index % 2 == 0 => Some(group_edge),
        Formation::Pincer => Some(group_edge.opposite()),
        Formation::Scatter | Formation::Ring => None,
    }
}

/// Place one butterfly of the given `size` just outside a canvas edge, aimed
/// through a random interior crossing point.
pub fn position_in_formation(
    size: f64,
    formation: Formation,
    index: u32,
    count: u32,
    edge_override: Option<Edge>,
    canvas: &Canvas,
    rng: &mut ChaCha8Rng,
) -> Placement {
    let edge = edge_override.unwrap_or_else(|| match formation {
        Formation::Ring => Edge::ALL[index as usize % Edge::ALL.len()],
        Formation::Scatter | Formation::Stream | Formation::Pincer => pick_edge(rng),
    });

    let crossing_point = Position::new(
        rng.gen_range(canvas.width * CROSSING_MIN_FRACTION..=canvas.width * CROSSING_MAX_FRACTION),
        rng.gen_range(
            canvas.height * CROSSING_MIN_FRACTION..=canvas.height * CROSSING_MAX_FRACTION,
        ),
    );

    // Streams spread members over equal slots along the shared edge.
    let along = if formation == Formation::Stream && count > 1 {
        let slot = 1.0 / count as f64;
        (index.min(count - 1) as f64 + rng.gen_range(0.0..1.0)) * slot
    } else {
        rng.gen_range(0.0..1.0)
    };

    let offset = size * SPAWN_EDGE_OFFSET_FACTOR;
    let position = match edge {
        Edge::Top => Position::new(along * canvas.width, -offset),
        Edge::Bottom => Position::new(along * canvas.width, canvas.height + offset),
        Edge::Left => Position::new(-offset, along * canvas.height),
        Edge::Right => Position::new(canvas.width + offset, along * canvas.height),
    };

    let direction =
        position.angle_to(&crossing_point) + rng.gen_range(-HEADING_JITTER..=HEADING_JITTER);

    Placement {
        position,
        direction,
        edge,
        crossing_point,
    }
}

/// First (and only) wave of a level.
pub fn plan_level_wave(
    level: Level,
    wave_size: u32,
    canvas: &Canvas,
    rng: &mut ChaCha8Rng,
) -> Vec<PlannedSpawn> {
    if level.is_max() {
        plan_boss_wave(canvas, rng)
    } else {
        plan_regular_wave(level, wave_size, canvas, rng)
    }
}

/// `wave_size` same-level butterflies in one formation, staggered 50 ms apart.
fn plan_regular_wave(
    level: Level,
    wave_size: u32,
    canvas: &Canvas,
    rng: &mut ChaCha8Rng,
) -> Vec<PlannedSpawn> {
    let profile = LevelProfile::for_level(level);
    let formation = pick_formation(rng);
    let group_edge = pick_edge(rng);

    (0..wave_size)
        .map(|i| {
            let edge = group_edge_for(formation, group_edge, i);
            let placement =
                position_in_formation(profile.size(), formation, i, wave_size, edge, canvas, rng);
            let speed = profile.base_speed
                * rng.gen_range(SPEED_VARIANCE_MIN..=SPEED_VARIANCE_MAX)
                * profile.speed_scale();
            let blueprint =
                blueprint(&profile, placement.position, placement.direction, speed, MovementPattern::Direct);
            (WAVE_STAGGER_SECS * i as f64, blueprint)
        })
        .collect()
}

/// The queen plus a ring of level-9 minions flying outward from the centre.
fn plan_boss_wave(canvas: &Canvas, rng: &mut ChaCha8Rng) -> Vec<PlannedSpawn> {
    let mut planned = Vec::with_capacity(MINION_COUNT as usize + 1);

    let minion_profile = LevelProfile::for_level(Level::MAX.previous());
    let center = canvas.center();
    for i in 0..MINION_COUNT {
        let angle = TAU * i as f64 / MINION_COUNT as f64;
        let position = Position::new(
            center.x + MINION_RING_RADIUS * angle.cos(),
            center.y + MINION_RING_RADIUS * angle.sin(),
        );
        let speed = minion_profile.base_speed
            * rng.gen_range(SPEED_VARIANCE_MIN..=SPEED_VARIANCE_MAX)
            * minion_profile.speed_scale();
        let delay = MINION_BASE_DELAY_SECS + MINION_STAGGER_SECS * i as f64;
        planned.push((
            delay,
            blueprint(&minion_profile, position, angle, speed, MovementPattern::Straight),
        ));
    }

    let base = LevelProfile::for_level(Level::MAX);
    let queen = LevelProfile {
        width: base.width * BOSS_SIZE_FACTOR,
        height: base.height * BOSS_SIZE_FACTOR,
        catch_radius: base.catch_radius * BOSS_CATCH_RADIUS_FACTOR,
        ..base
    };
    let placement =
        position_in_formation(queen.size(), Formation::Scatter, 0, 1, None, canvas, rng);
    let speed = queen.base_speed * queen.speed_scale() * BOSS_SPEED_FACTOR;
    let mut queen_blueprint = blueprint(
        &queen,
        placement.position,
        placement.direction,
        speed,
        MovementPattern::Direct,
    );
    queen_blueprint.boss = Some(Boss {
        health: BOSS_HEALTH,
    });
    planned.push((BOSS_SPAWN_DELAY_SECS, queen_blueprint));

    planned
}

/// A small extra group of current-level butterflies with a speed boost.
pub fn plan_opportunistic_group(
    level: Level,
    canvas: &Canvas,
    rng: &mut ChaCha8Rng,
) -> Vec<PlannedSpawn> {
    let profile = LevelProfile::for_level(level);
    let count = rng.gen_range(OPPORTUNISTIC_GROUP_MIN..=OPPORTUNISTIC_GROUP_MAX);
    let formation = pick_formation(rng);
    let group_edge = pick_edge(rng);

    (0..count)
        .map(|i| {
            let edge = group_edge_for(formation, group_edge, i);
            let placement =
                position_in_formation(profile.size(), formation, i, count, edge, canvas, rng);
            let speed = profile.base_speed
                * rng.gen_range(SPEED_VARIANCE_MIN..=SPEED_VARIANCE_MAX)
                * profile.speed_scale()
                * OPPORTUNISTIC_SPEED_BOOST;
            let blueprint =
                blueprint(&profile, placement.position, placement.direction, speed, MovementPattern::Direct);
            (WAVE_STAGGER_SECS * i as f64, blueprint)
        })
        .collect()
}

/// Build a blueprint from a profile and an initial heading.
pub fn blueprint(
    profile: &LevelProfile,
    position: Position,
    direction: f64,
    speed: f64,
    pattern: MovementPattern,
) -> ButterflyBlueprint {
    ButterflyBlueprint {
        position,
        velocity: Velocity::from_heading(direction, speed),
        butterfly: Butterfly {
            level: profile.level,
            width: profile.width,
            height: profile.height,
            base_speed: speed,
            speed,
            direction,
            initial_direction: direction,
            catch_radius: profile.catch_radius,
            pattern,
            wing_phase: 0.0,
            has_crossed_screen: false,
            should_remove: false,
        },
        boss: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_placement_outside_chosen_edge() {
        let canvas = Canvas::new(1000.0, 500.0);
        let mut rng = rng();
        for edge in Edge::ALL {
            for _ in 0..50 {
                let p = position_in_formation(20.0, Formation::Scatter, 0, 1, Some(edge), &canvas, &mut rng);
                assert_eq!(p.edge, edge);
                match edge {
                    Edge::Top => assert_eq!(p.position.y, -40.0),
                    Edge::Bottom => assert_eq!(p.position.y, 540.0),
                    Edge::Left => assert_eq!(p.position.x, -40.0),
                    Edge::Right => assert_eq!(p.position.x, 1040.0),
                }
                assert!(!canvas.contains(&p.position));
            }
        }
    }

    #[test]
    fn test_crossing_point_in_central_band_and_heading_jitter_bounded() {
        let canvas = Canvas::new(1000.0, 500.0);
        let mut rng = rng();
        for i in 0..200 {
            let p = position_in_formation(30.0, Formation::Ring, i, 200, None, &canvas, &mut rng);
            assert!((200.0..=800.0).contains(&p.crossing_point.x));
            assert!((100.0..=400.0).contains(&p.crossing_point.y));

            let aim = p.position.angle_to(&p.crossing_point);
            let diff = (p.direction - aim + std::f64::consts::PI)
                .rem_euclid(TAU)
                - std::f64::consts::PI;
            assert!(diff.abs() <= HEADING_JITTER + 1e-9);
        }
    }

    #[test]
    fn test_ring_cycles_edges() {
        let canvas = Canvas::default();
        let mut rng = rng();
        let edges: Vec<Edge> = (0..8)
            .map(|i| position_in_formation(10.0, Formation::Ring, i, 8, None, &canvas, &mut rng).edge)
            .collect();
        assert_eq!(&edges[..4], &Edge::ALL);
        assert_eq!(&edges[4..], &Edge::ALL);
    }

    #[test]
    fn test_group_edges() {
        assert_eq!(group_edge_for(Formation::Stream, Edge::Left, 3), Some(Edge::Left));
        assert_eq!(group_edge_for(Formation::Pincer, Edge::Top, 0), Some(Edge::Top));
        assert_eq!(group_edge_for(Formation::Pincer, Edge::Top, 1), Some(Edge::Bottom));
        assert_eq!(group_edge_for(Formation::Scatter, Edge::Top, 1), None);
    }

    #[test]
    fn test_regular_wave_layout() {
        let canvas = Canvas::default();
        let level = Level::new(4).unwrap();
        let profile = LevelProfile::for_level(level);
        let wave = plan_level_wave(level, WAVE_SIZE, &canvas, &mut rng());

        assert_eq!(wave.len(), WAVE_SIZE as usize);
        for (i, (delay, bp)) in wave.iter().enumerate() {
            assert!((delay - 0.05 * i as f64).abs() < 1e-12);
            assert_eq!(bp.butterfly.level, level);
            assert!(bp.boss.is_none());
            assert_eq!(bp.butterfly.pattern, MovementPattern::Direct);
            let min = profile.base_speed * SPEED_VARIANCE_MIN * profile.speed_scale();
            let max = profile.base_speed * SPEED_VARIANCE_MAX * profile.speed_scale();
            assert!(bp.butterfly.speed >= min - 1e-9 && bp.butterfly.speed <= max + 1e-9);
            assert!((bp.velocity.speed() - bp.butterfly.speed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let canvas = Canvas::default();
        let a = plan_level_wave(Level::FIRST, WAVE_SIZE, &canvas, &mut rng());
        let b = plan_level_wave(Level::FIRST, WAVE_SIZE, &canvas, &mut rng());
        for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.butterfly.direction, y.butterfly.direction);
        }
    }

    #[test]
    fn test_boss_wave_layout() {
        let canvas = Canvas::default();
        let wave = plan_level_wave(Level::MAX, WAVE_SIZE, &canvas, &mut rng());
        assert_eq!(wave.len(), MINION_COUNT as usize + 1);

        let bosses: Vec<&PlannedSpawn> = wave.iter().filter(|(_, bp)| bp.boss.is_some()).collect();
        assert_eq!(bosses.len(), 1);
        let (delay, queen) = bosses[0];
        assert_eq!(*delay, BOSS_SPAWN_DELAY_SECS);
        assert_eq!(queen.boss, Some(Boss { health: BOSS_HEALTH }));
        assert_eq!(queen.butterfly.level, Level::MAX);

        let base = LevelProfile::for_level(Level::MAX);
        assert!((queen.butterfly.width - base.width * 2.5).abs() < 1e-9);
        assert!((queen.butterfly.catch_radius - base.catch_radius * 0.7).abs() < 1e-9);
        assert!(
            (queen.butterfly.speed - base.base_speed * base.speed_scale() * 0.8).abs() < 1e-9
        );

        let center = canvas.center();
        let minions: Vec<&PlannedSpawn> = wave.iter().filter(|(_, bp)| bp.boss.is_none()).collect();
        assert_eq!(minions.len(), MINION_COUNT as usize);
        for (i, (delay, bp)) in minions.iter().enumerate() {
            assert!((delay - (0.5 + 0.1 * i as f64)).abs() < 1e-12);
            assert_eq!(bp.butterfly.level.get(), 9);
            assert_eq!(bp.butterfly.pattern, MovementPattern::Straight);
            assert!((bp.position.distance_to(&center) - MINION_RING_RADIUS).abs() < 1e-9);
            // Heading points away from the centre.
            let outward = center.angle_to(&bp.position);
            assert!((outward.sin() - bp.butterfly.direction.sin()).abs() < 1e-9);
            assert!((outward.cos() - bp.butterfly.direction.cos()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_opportunistic_group() {
        let canvas = Canvas::default();
        let mut rng = rng();
        let level = Level::new(2).unwrap();
        let profile = LevelProfile::for_level(level);
        for _ in 0..20 {
            let group = plan_opportunistic_group(level, &canvas, &mut rng);
            assert!((3..=5).contains(&group.len()));
            for (_, bp) in &group {
                assert_eq!(bp.butterfly.level, level);
                assert!(bp.butterfly.speed >= profile.base_speed * 0.8 * profile.speed_scale() * 1.2 - 1e-9);
            }
        }
    }
}
