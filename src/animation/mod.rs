//! Simulation clock
//!
//! Frame-driven timing for line growth, branch spawning and idle resets.

mod scheduler;

pub use scheduler::{Scheduler, Task, TaskHandle};
