use std::collections::HashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::entity::{GrowStep, Line, Particle, ParticleId};
use crate::growth::GrowthParams;
use crate::math::Vec2;

/// All mutable state of one running growth simulation.
///
/// Particles live in an arena indexed by [`ParticleId`]. Particles at the
/// far end of a still-growing line sit in the arena but are not yet part of
/// the live population.
pub struct Simulation {
    pub params: GrowthParams,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    live: Vec<ParticleId>,
    lines: Vec<Line>,
    expanded_centers: HashSet<ParticleId>,
    rng: StdRng,
}

impl Simulation {
    /// Empty simulation; RNG seeded from `params.rng_seed` or `fallback_seed`
    pub fn new(params: GrowthParams, width: f64, height: f64, fallback_seed: u64) -> Self {
        let seed = params.rng_seed.unwrap_or(fallback_seed);
        let mut sim = Self {
            params,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            live: Vec::new(),
            lines: Vec::new(),
            expanded_centers: HashSet::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        sim.set_bounds(width, height);
        sim
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Update the viewport size; unusable dimensions collapse to zero
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Uniformly random point inside the viewport
    pub fn random_point(&mut self) -> Vec2 {
        let x = self.rng.gen::<f64>() * self.width;
        let y = self.rng.gen::<f64>() * self.height;
        Vec2::new(x, y)
    }

    pub fn particle(&self, id: ParticleId) -> &Particle {
        &self.particles[id.0]
    }

    /// Every particle ever created since the last reset, pending ones included
    pub fn arena_len(&self) -> usize {
        self.particles.len()
    }

    /// Ids of the live population, in activation order
    pub fn live_ids(&self) -> &[ParticleId] {
        &self.live
    }

    pub fn live_particles(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.live.iter().map(move |&id| (id, &self.particles[id.0]))
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn expanded_centers(&self) -> &HashSet<ParticleId> {
        &self.expanded_centers
    }

    /// Create an inactive particle with random radius and color
    pub fn spawn_particle(&mut self, position: Vec2, growth_speed: f64) -> ParticleId {
        let particle = Particle::new(&mut self.rng, position, growth_speed, &self.params.particle_radius);
        let id = ParticleId(self.particles.len());
        self.particles.push(particle);
        id
    }

    /// Create a particle that is active and live from the start
    pub fn spawn_seed(&mut self, position: Vec2) -> ParticleId {
        let id = self.spawn_particle(position, self.params.normal_growth_speed);
        self.activate(id);
        id
    }

    /// Start a line growing from `start` toward `end`
    pub fn connect(&mut self, start: ParticleId, end: ParticleId) {
        let line = Line::new(start, &self.particles[start.0], end);
        self.lines.push(line);
    }

    /// Activate a particle and add it to the live population.
    ///
    /// A particle joins the population at most once.
    pub fn activate(&mut self, id: ParticleId) -> bool {
        let newly = self.particles[id.0].activate();
        if newly {
            self.live.push(id);
        }
        newly
    }

    /// Grow one line a single step, activating its end particle on completion
    pub fn grow_line(&mut self, index: usize) -> GrowStep {
        let end = self.lines[index].end;
        let target = self.particles[end.0].position;
        let step = self.lines[index].grow(target);
        if step == GrowStep::Completed {
            self.activate(end);
        }
        step
    }

    /// Grow every line one step; returns how many completed this step
    pub fn advance_lines(&mut self) -> usize {
        let mut completed = 0;
        for index in 0..self.lines.len() {
            if self.grow_line(index) == GrowStep::Completed {
                completed += 1;
            }
        }
        completed
    }

    pub fn set_growth_speed(&mut self, id: ParticleId, speed: f64) {
        self.particles[id.0].growth_speed = speed;
    }

    pub fn add_expanded_center(&mut self, id: ParticleId) -> bool {
        self.expanded_centers.insert(id)
    }

    /// Drop every particle, line and expanded center
    pub fn clear(&mut self) {
        self.particles.clear();
        self.live.clear();
        self.lines.clear();
        self.expanded_centers.clear();
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
