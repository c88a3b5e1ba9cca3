use std::f64::consts::TAU;
use log::{debug, trace};
use rand::Rng;
use crate::entity::ParticleId;
use crate::entity::particle::sample;
use crate::math::Vec2;
use crate::sim::Simulation;

/// Start `extensions` new lines from `source`, each toward a fresh pending
/// particle at a random angle and distance.
pub fn expand_from(sim: &mut Simulation, source: ParticleId, extensions: usize) {
    let origin = sim.particle(source).position;
    let speed = sim.particle(source).growth_speed;
    let length = sim.params.branch_length.clone();

    for _ in 0..extensions {
        let angle = sim.rng().gen::<f64>() * TAU;
        let distance = sample(sim.rng(), &length);
        let end = origin + Vec2::from_angle(angle) * distance;

        let target = sim.spawn_particle(end, speed);
        sim.connect(source, target);
    }
}

/// One spawn cycle: a new branch from every active particle, plus density
/// relief once the population has hit its cap.
///
/// Returns the relief center placed this cycle, if any.
pub fn add_branches(sim: &mut Simulation) -> Option<ParticleId> {
    let active: Vec<ParticleId> = sim
        .live_particles()
        .filter(|(_, p)| p.is_active())
        .map(|(id, _)| id)
        .collect();

    for id in active {
        expand_from(sim, id, 1);
    }

    let crowded = sim.live_count() >= sim.params.max_particles;
    if crowded && sim.expanded_centers().len() < sim.params.max_expanded_centers {
        find_empty_spot_and_expand(sim)
    } else {
        None
    }
}

/// Look for a point far from every live particle and grow toward it from
/// the nearest one. The new particle becomes an expanded center; afterwards
/// only expanded centers keep normal speed and everything else is slowed.
///
/// Finding no sparse point is not an error, the next cycle tries again.
pub fn find_empty_spot_and_expand(sim: &mut Simulation) -> Option<ParticleId> {
    let spot = find_empty_spot(sim)?;

    let Some(nearest) = nearest_live(sim, spot) else {
        trace!("no live particle to grow toward ({:.1}, {:.1})", spot.x, spot.y);
        return None;
    };

    let normal = sim.params.normal_growth_speed;
    let slow = sim.params.slow_growth_speed;

    let center = sim.spawn_particle(spot, normal);
    sim.connect(nearest, center);
    sim.add_expanded_center(center);

    let live = sim.live_ids().to_vec();
    for id in live {
        let speed = if sim.expanded_centers().contains(&id) { normal } else { slow };
        sim.set_growth_speed(id, speed);
    }

    debug!(
        "expanded center #{} at ({:.1}, {:.1}) from particle {}",
        sim.expanded_centers().len(),
        spot.x,
        spot.y,
        nearest.0
    );
    Some(center)
}

fn find_empty_spot(sim: &mut Simulation) -> Option<Vec2> {
    let clearance = sim.params.relief_clearance;

    for _ in 0..sim.params.relief_attempts {
        let candidate = sim.random_point();
        let clear = sim
            .live_particles()
            .all(|(_, p)| p.position.distance(&candidate) > clearance);
        if clear {
            return Some(candidate);
        }
    }

    trace!("no sparse spot found in {} attempts", sim.params.relief_attempts);
    None
}

/// Closest live particle; the first one encountered wins ties
fn nearest_live(sim: &Simulation, point: Vec2) -> Option<ParticleId> {
    let mut best = None;
    let mut best_d2 = f64::INFINITY;
    for (id, p) in sim.live_particles() {
        let d2 = (p.position - point).length_squared();
        if d2 < best_d2 {
            best_d2 = d2;
            best = Some(id);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::GrowthParams;

    fn sim_with(params: GrowthParams) -> Simulation {
        Simulation::new(params, 800.0, 600.0, 5)
    }

    fn seeded() -> Simulation {
        sim_with(GrowthParams { rng_seed: Some(42), ..Default::default() })
    }

    #[test]
    fn test_expand_from_appends_lines() {
        let mut sim = seeded();
        let seed = sim.spawn_seed(Vec2::new(400.0, 300.0));
        sim.set_growth_speed(seed, 0.7);

        expand_from(&mut sim, seed, 4);

        assert_eq!(sim.lines().len(), 4);
        for line in sim.lines() {
            assert_eq!(line.start, seed);
            assert_eq!(line.current, Vec2::new(400.0, 300.0));
            assert_eq!(line.growth_speed, 0.7);

            let end = sim.particle(line.end);
            let d = end.position.distance(&Vec2::new(400.0, 300.0));
            assert!(d >= 20.0 - 1e-9 && d < 320.0 + 1e-9, "distance {} out of range", d);
            assert_eq!(end.growth_speed, 0.7);
            assert!(!end.is_active());
        }
        assert_eq!(sim.live_count(), 1);
    }

    #[test]
    fn test_expand_from_zero() {
        let mut sim = seeded();
        let seed = sim.spawn_seed(Vec2::ZERO);
        expand_from(&mut sim, seed, 0);
        assert!(sim.lines().is_empty());
    }

    #[test]
    fn test_add_branches_one_per_active() {
        let mut sim = seeded();
        sim.spawn_seed(Vec2::new(100.0, 100.0));
        sim.spawn_seed(Vec2::new(500.0, 400.0));
        let pending = sim.spawn_particle(Vec2::new(10.0, 10.0), 0.3);

        let relief = add_branches(&mut sim);

        assert!(relief.is_none());
        assert_eq!(sim.lines().len(), 2);
        assert!(sim.lines().iter().all(|l| l.start != pending));
    }

    #[test]
    fn test_relief_point_is_sparse() {
        let mut sim = seeded();
        sim.spawn_seed(Vec2::new(50.0, 50.0));
        sim.spawn_seed(Vec2::new(400.0, 300.0));
        sim.spawn_seed(Vec2::new(750.0, 550.0));

        let center = find_empty_spot_and_expand(&mut sim).expect("plenty of room");
        let spot = sim.particle(center).position;

        for (_, p) in sim.live_particles() {
            assert!(p.position.distance(&spot) > 100.0);
        }
        assert!(sim.expanded_centers().contains(&center));
        assert_eq!(sim.lines().len(), 1);
        assert_eq!(sim.lines()[0].end, center);
    }

    #[test]
    fn test_relief_grows_from_nearest() {
        let mut sim = seeded();
        let ids = [
            sim.spawn_seed(Vec2::new(0.0, 0.0)),
            sim.spawn_seed(Vec2::new(800.0, 0.0)),
            sim.spawn_seed(Vec2::new(0.0, 600.0)),
            sim.spawn_seed(Vec2::new(800.0, 600.0)),
        ];

        let center = find_empty_spot_and_expand(&mut sim).expect("room in the middle");
        let spot = sim.particle(center).position;
        let expected = ids
            .iter()
            .copied()
            .min_by(|a, b| {
                let da = sim.particle(*a).position.distance(&spot);
                let db = sim.particle(*b).position.distance(&spot);
                da.total_cmp(&db)
            })
            .unwrap();

        assert_eq!(sim.lines()[0].start, expected);
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        let mut sim = seeded();
        let first = sim.spawn_seed(Vec2::new(0.0, 0.0));
        sim.spawn_seed(Vec2::new(20.0, 0.0));

        assert_eq!(nearest_live(&sim, Vec2::new(10.0, 0.0)), Some(first));
    }

    #[test]
    fn test_relief_throttles_everything_else() {
        let mut sim = seeded();
        let a = sim.spawn_seed(Vec2::new(10.0, 10.0));
        let b = sim.spawn_seed(Vec2::new(20.0, 20.0));
        // An earlier relief center that has since become live
        sim.add_expanded_center(b);

        let center = find_empty_spot_and_expand(&mut sim).expect("room");

        assert_eq!(sim.particle(a).growth_speed, 0.01);
        assert_eq!(sim.particle(b).growth_speed, 0.3);
        assert_eq!(sim.particle(center).growth_speed, 0.3);
        // The line took the nearest particle's speed before throttling
        assert_eq!(sim.lines()[0].growth_speed, 0.3);
    }

    #[test]
    fn test_relief_gives_up_when_crowded() {
        let mut sim = sim_with(GrowthParams { rng_seed: Some(1), ..Default::default() });
        sim.set_bounds(100.0, 100.0);
        sim.spawn_seed(Vec2::new(50.0, 50.0));

        assert!(find_empty_spot_and_expand(&mut sim).is_none());
        assert!(sim.lines().is_empty());
        assert!(sim.expanded_centers().is_empty());
    }

    #[test]
    fn test_relief_needs_a_live_particle() {
        let mut sim = seeded();
        assert!(find_empty_spot_and_expand(&mut sim).is_none());
    }

    #[test]
    fn test_add_branches_triggers_relief_at_cap() {
        let mut sim = sim_with(GrowthParams {
            rng_seed: Some(3),
            max_particles: 2,
            ..Default::default()
        });
        sim.spawn_seed(Vec2::new(10.0, 10.0));
        sim.spawn_seed(Vec2::new(30.0, 30.0));

        let relief = add_branches(&mut sim);

        assert!(relief.is_some());
        assert_eq!(sim.lines().len(), 3);
        assert_eq!(sim.expanded_centers().len(), 1);
    }

    #[test]
    fn test_add_branches_respects_center_limit() {
        let mut sim = sim_with(GrowthParams {
            rng_seed: Some(3),
            max_particles: 1,
            max_expanded_centers: 1,
            ..Default::default()
        });
        let seed = sim.spawn_seed(Vec2::new(10.0, 10.0));
        sim.add_expanded_center(seed);

        assert!(add_branches(&mut sim).is_none());
        assert_eq!(sim.lines().len(), 1);
    }
}
