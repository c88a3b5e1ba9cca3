//! Branch growth and density relief
//!
//! New lines branch out of active particles at random angles. Once the live
//! population reaches its cap, growth is steered into sparse regions by
//! seeding "expanded centers" and throttling every other particle.

pub mod engine;
pub mod params;

pub use engine::{add_branches, expand_from, find_empty_spot_and_expand};
pub use params::GrowthParams;
