//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and population data for a single step.
//! The world populates it after each successful `advance()`; consumers read
//! it from [`RaceWorld::last_metrics`](crate::world::RaceWorld::last_metrics).

/// Timing and population metrics collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Number of live opponents after culling.
    pub opponent_count: usize,
    /// Number of opponents culled during this step.
    pub culled: usize,
}
