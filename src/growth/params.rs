use std::ops::Range;
use serde::{Deserialize, Serialize};
use crate::entity::Color;

/// Parameters controlling growth, density relief and regeneration timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    /// Seed particles created on every reset
    pub seed_count: usize,
    /// Branches started from each seed
    pub initial_branches: usize,
    /// Live population at which density relief kicks in
    pub max_particles: usize,
    /// Relief centers allowed before relief stops
    pub max_expanded_centers: usize,
    /// Pixels per frame for lines growing at full speed
    pub normal_growth_speed: f64,
    /// Pixels per frame for throttled particles once relief is active
    pub slow_growth_speed: f64,
    /// Branch length range (pixels)
    pub branch_length: Range<f64>,
    /// Particle radius range (pixels)
    pub particle_radius: Range<f64>,
    /// Candidate points tried per relief cycle
    pub relief_attempts: usize,
    /// A relief candidate must be further than this from every live particle
    pub relief_clearance: f64,
    /// Milliseconds between branch spawns
    pub spawn_interval_ms: f64,
    /// Milliseconds from the first completed line to a full reset
    pub idle_reset_ms: f64,
    /// Stroke color for lines
    pub line_color: Color,
    /// Fixed RNG seed; random when unset
    pub rng_seed: Option<u64>,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            seed_count: 3,
            initial_branches: 3,
            max_particles: 2000,
            max_expanded_centers: 100,
            normal_growth_speed: 0.3,
            slow_growth_speed: 0.01,
            branch_length: 20.0..320.0,
            particle_radius: 1.0..6.0,
            relief_attempts: 100,
            relief_clearance: 100.0,
            spawn_interval_ms: 1800.0,
            idle_reset_ms: 45000.0,
            line_color: Color::new(255, 215, 0, 0.8),
            rng_seed: None,
        }
    }
}

impl GrowthParams {
    /// Parse from YAML; missing keys fall back to defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let params: GrowthParams = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), String> {
        check_range("branch_length", &self.branch_length)?;
        check_range("particle_radius", &self.particle_radius)?;

        if self.branch_length.start <= 0.0 {
            return Err("branch_length must start above zero".to_string());
        }
        if !(self.normal_growth_speed > 0.0 && self.normal_growth_speed.is_finite()) {
            return Err(format!("normal_growth_speed must be positive, got {}", self.normal_growth_speed));
        }
        if !(self.slow_growth_speed > 0.0 && self.slow_growth_speed.is_finite()) {
            return Err(format!("slow_growth_speed must be positive, got {}", self.slow_growth_speed));
        }
        if !(self.spawn_interval_ms > 0.0 && self.spawn_interval_ms.is_finite()) {
            return Err(format!("spawn_interval_ms must be positive, got {}", self.spawn_interval_ms));
        }
        if !(self.idle_reset_ms > 0.0 && self.idle_reset_ms.is_finite()) {
            return Err(format!("idle_reset_ms must be positive, got {}", self.idle_reset_ms));
        }
        if !(self.relief_clearance >= 0.0 && self.relief_clearance.is_finite()) {
            return Err(format!("relief_clearance must be non-negative, got {}", self.relief_clearance));
        }
        Ok(())
    }
}

fn check_range(name: &str, range: &Range<f64>) -> Result<(), String> {
    if range.start.is_finite() && range.end.is_finite() && range.start < range.end && range.start >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be a non-empty range, got {}..{}", name, range.start, range.end))
    }
}
