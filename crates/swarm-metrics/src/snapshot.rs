//! Plain data row sampled once per tick.

use swarm_core::SimTime;

/// Aggregate statistics at one tick boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    /// Simulated time of the tick this row describes.
    pub time: SimTime,
    /// Mean energy across the whole population.
    pub mean_energy: f64,
    /// Agents parked in the station's wait queue.
    pub queue_len: usize,
    /// Station slots held at sampling time.
    pub occupied: usize,
}
