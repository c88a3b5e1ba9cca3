//! Simulated-time task scheduler
//!
//! Replaces browser timers with plain records: every scheduled task carries
//! an operation tag, a due time and an optional period. The host advances
//! the clock once per frame and gets back the tasks that fell due.

/// Work the simulation performs on a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Grow every line one step (once per frame)
    AdvanceLines,
    /// Branch out of every active particle
    SpawnBranches,
    /// Throw the whole structure away and reseed
    IdleReset,
}

/// Handle to a scheduled task, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledTask {
    handle: TaskHandle,
    task: Task,
    due_ms: f64,
    period_ms: Option<f64>,
}

/// Clock plus pending timed tasks
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: f64,
    next_handle: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated milliseconds elapsed since creation
    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Run `task` every `period_ms`, first after one full period
    pub fn every(&mut self, task: Task, period_ms: f64) -> TaskHandle {
        self.push(task, period_ms, Some(period_ms))
    }

    /// Run `task` once after `delay_ms`
    pub fn after(&mut self, task: Task, delay_ms: f64) -> TaskHandle {
        self.push(task, delay_ms, None)
    }

    fn push(&mut self, task: Task, delay_ms: f64, period_ms: Option<f64>) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(ScheduledTask {
            handle,
            task,
            due_ms: self.now_ms + delay_ms.max(0.0),
            period_ms,
        });
        handle
    }

    /// Remove a pending task; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Advance the clock by `dt_ms` and collect the tasks now due, earliest
    /// first.
    ///
    /// A repeating task fires at most once per call; periods missed during a
    /// long gap are skipped rather than replayed. One-shot tasks are removed.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<Task> {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
        let now = self.now_ms;

        let mut due: Vec<(f64, u64, Task)> = Vec::new();
        self.tasks.retain_mut(|t| {
            if t.due_ms > now {
                return true;
            }
            due.push((t.due_ms, t.handle.0, t.task));
            match t.period_ms {
                Some(period) if period > 0.0 => {
                    let missed = ((now - t.due_ms) / period).floor() + 1.0;
                    t.due_ms += missed * period;
                    true
                }
                _ => false,
            }
        });

        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        due.into_iter().map(|(_, _, task)| task).collect()
    }
}
