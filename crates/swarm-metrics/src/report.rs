//! `SimReport` — end-of-run aggregates and their textual rendering.

use std::fmt;

use swarm_agent::AgentStore;

use crate::MetricsSnapshot;

/// Final aggregates of a completed run.
///
/// Derived from the metrics series and the agent store; the series itself
/// remains available through the collector for finer-grained analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// Completed recharges summed over all agents.
    pub total_recharges: u64,
    /// Mean over ticks of the per-tick mean energy.
    pub mean_energy: f64,
    /// Mean observed wait-queue length.
    pub mean_queue_len: f64,
    /// Maximum observed wait-queue length.
    pub max_queue_len: usize,
    /// Maximum slots observed in use at once.
    pub max_occupied: usize,
}

impl SimReport {
    /// Aggregate a finished run.  An empty series (zero ticks) yields an
    /// all-zero report.
    pub fn from_run(samples: &[MetricsSnapshot], agents: &AgentStore) -> Self {
        let ticks = samples.len();
        let (mean_energy, mean_queue_len) = if ticks == 0 {
            (0.0, 0.0)
        } else {
            (
                samples.iter().map(|s| s.mean_energy).sum::<f64>() / ticks as f64,
                samples.iter().map(|s| s.queue_len as f64).sum::<f64>() / ticks as f64,
            )
        };
        Self {
            total_recharges: agents.total_recharges(),
            mean_energy,
            mean_queue_len,
            max_queue_len: samples.iter().map(|s| s.queue_len).max().unwrap_or(0),
            max_occupied:  samples.iter().map(|s| s.occupied).max().unwrap_or(0),
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Hybrid swarm results ===")?;
        writeln!(f, "Total recharges completed: {}", self.total_recharges)?;
        writeln!(f, "Global mean energy: {:.2}", self.mean_energy)?;
        writeln!(f, "Mean recharge queue length: {:.2}", self.mean_queue_len)?;
        writeln!(f, "Max recharge queue length: {}", self.max_queue_len)?;
        write!(f, "Max slots in service: {}", self.max_occupied)
    }
}
