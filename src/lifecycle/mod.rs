//! Seeding, driving and regenerating the growth simulation

mod controller;

pub use controller::GrowthController;
