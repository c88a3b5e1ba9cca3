use std::ops::Range;
use rand::Rng;
use crate::math::Vec2;
use crate::render::Surface;
use super::color::Color;

/// Index of a particle in the simulation's particle arena.
///
/// Only meaningful for the arena it was handed out by; a reset discards
/// the arena and every id along with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub usize);

/// A node in the growth structure
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f64,
    pub color: Color,
    /// Speed handed to lines that grow out of this particle
    pub growth_speed: f64,
    active: bool,
}

impl Particle {
    /// New inactive particle with random radius and color
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        position: Vec2,
        growth_speed: f64,
        radius: &Range<f64>,
    ) -> Self {
        Self {
            position,
            radius: sample(rng, radius),
            color: Color::warm(rng),
            growth_speed,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the particle active; returns false if it already was
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, self.radius, self.color);
    }
}

/// Uniform sample from `range` that never panics on an empty range
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    range.start + rng.gen::<f64>() * (range.end - range.start)
}
