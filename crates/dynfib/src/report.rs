//! Driver report and its text rendering.

use serde::Serialize;

use dynfib_core::BufferStats;

/// One completed driver step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// Short step name.
    pub step: &'static str,
    /// What was observed.
    pub detail: String,
}

impl StepOutcome {
    /// Record a completed step.
    #[must_use]
    pub fn new(step: &'static str, detail: String) -> Self {
        Self { step, detail }
    }
}

/// Everything the driver observed during a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Capacity of the caches the driver built.
    pub capacity: usize,
    /// Index queried at every step.
    pub index: usize,
    /// F(index) as returned by the first cache.
    pub value: u64,
    /// Completed steps, in order.
    pub steps: Vec<StepOutcome>,
    /// Buffer counters accumulated over the run.
    pub stats: BufferStats,
}

impl ScenarioReport {
    /// Human-readable multi-line summary.
    #[must_use]
    pub fn render(&self) -> String {
        let header = format!(
            "F({}) = {} (capacity {})",
            self.index, self.value, self.capacity
        );
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(n, outcome)| format!("  {}. {:<10} {}", n + 1, outcome.step, outcome.detail));
        let footer = format!(
            "buffers: {} allocated, {} released ({} bytes)",
            self.stats.allocations, self.stats.releases, self.stats.bytes_released
        );
        std::iter::once(header)
            .chain(steps)
            .chain(std::iter::once(footer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
