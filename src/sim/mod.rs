mod context;

pub use context::Simulation;
