use log::info;
use crate::animation::{Scheduler, Task, TaskHandle};
use crate::growth::{self, GrowthParams};
use crate::render::{draw_frame, Surface};
use crate::sim::Simulation;

/// Owns the simulation and its clock; seeds, drives and regenerates growth
pub struct GrowthController {
    sim: Simulation,
    scheduler: Scheduler,
    /// Pending idle reset, armed by the first line to complete
    idle_reset: Option<TaskHandle>,
}

impl GrowthController {
    /// Build a controller for a `width` x `height` viewport and seed it
    pub fn new(params: GrowthParams, width: f64, height: f64, fallback_seed: u64) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.every(Task::SpawnBranches, params.spawn_interval_ms);

        let mut controller = Self {
            sim: Simulation::new(params, width, height, fallback_seed),
            scheduler,
            idle_reset: None,
        };
        controller.initialize_centers();
        controller
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_reset_pending(&self) -> bool {
        self.idle_reset.is_some()
    }

    /// Seed the (assumed empty) simulation with active particles, each
    /// already branching.
    pub fn initialize_centers(&mut self) {
        let branches = self.sim.params.initial_branches;
        for _ in 0..self.sim.params.seed_count {
            let position = self.sim.random_point();
            let seed = self.sim.spawn_seed(position);
            growth::expand_from(&mut self.sim, seed, branches);
        }
    }

    /// Discard everything, cancel any pending idle reset and reseed
    pub fn reset_simulation(&mut self) {
        let discarded = self.sim.arena_len();
        self.sim.clear();
        if let Some(handle) = self.idle_reset.take() {
            self.scheduler.cancel(handle);
        }
        self.initialize_centers();
        info!(
            "growth reset: discarded {} particles, reseeded {}x{}",
            discarded,
            self.sim.width(),
            self.sim.height()
        );
    }

    /// Adopt a new viewport size and start over
    pub fn resize(&mut self, width: f64, height: f64) {
        self.sim.set_bounds(width, height);
        info!("viewport resized to {}x{}", self.sim.width(), self.sim.height());
        self.reset_simulation();
    }

    /// Advance simulated time by `dt_ms`, run everything that fell due, grow
    /// all lines one step and draw the result.
    pub fn frame(&mut self, dt_ms: f64, surface: &mut dyn Surface) {
        self.step(dt_ms);
        draw_frame(&self.sim, surface);
    }

    /// [`frame`](Self::frame) without drawing
    pub fn step(&mut self, dt_ms: f64) {
        let mut due = self.scheduler.advance(dt_ms);
        due.push(Task::AdvanceLines);
        for task in due {
            self.dispatch(task);
        }
    }

    pub fn dispatch(&mut self, task: Task) {
        match task {
            Task::AdvanceLines => {
                if self.sim.advance_lines() > 0 {
                    self.arm_idle_reset();
                }
            }
            Task::SpawnBranches => {
                growth::add_branches(&mut self.sim);
            }
            Task::IdleReset => {
                // The one-shot has fired; drop the stale handle before resetting
                self.idle_reset = None;
                self.reset_simulation();
            }
        }
    }

    fn arm_idle_reset(&mut self) {
        if self.idle_reset.is_none() {
            let delay = self.sim.params.idle_reset_ms;
            self.idle_reset = Some(self.scheduler.after(Task::IdleReset, delay));
        }
    }
}
