use crate::math::Vec2;
use crate::render::Surface;
use super::color::Color;
use super::particle::{Particle, ParticleId};

/// Result of one grow step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowStep {
    /// Already complete, nothing changed
    Idle,
    /// Moved one step closer to the end particle
    Advanced,
    /// Reached the end particle on this step
    Completed,
}

/// Animated edge from a source particle to a destination particle
#[derive(Debug, Clone)]
pub struct Line {
    pub start: ParticleId,
    pub end: ParticleId,
    /// Tip of the line as drawn this frame
    pub current: Vec2,
    /// Copied from the start particle at creation
    pub growth_speed: f64,
    complete: bool,
}

impl Line {
    pub fn new(start_id: ParticleId, start: &Particle, end_id: ParticleId) -> Self {
        Self {
            start: start_id,
            end: end_id,
            current: start.position,
            growth_speed: start.growth_speed,
            complete: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Move the tip one step toward `target`, snapping onto it once the
    /// remaining distance is shorter than a step.
    pub fn grow(&mut self, target: Vec2) -> GrowStep {
        if self.complete {
            return GrowStep::Idle;
        }

        let delta = target - self.current;
        let distance = delta.length();

        if distance < self.growth_speed {
            self.current = target;
            self.complete = true;
            GrowStep::Completed
        } else {
            self.current = self.current + delta.normalize().scale(self.growth_speed);
            GrowStep::Advanced
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, from: Vec2, color: Color) {
        surface.stroke_segment(from, self.current, color);
    }
}
