//! Particles and the lines that grow between them

pub mod color;
pub mod line;
pub mod particle;

pub use color::Color;
pub use line::{GrowStep, Line};
pub use particle::{Particle, ParticleId};
