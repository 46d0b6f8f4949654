//! `MetricsCollector` — the append-only per-tick time series.

use swarm_agent::AgentStore;
use swarm_core::SimTime;
use swarm_station::ChargeStation;

use crate::MetricsSnapshot;

/// Collects one [`MetricsSnapshot`] per tick.
///
/// The scheduler calls [`sample`][Self::sample] exactly once per tick, after
/// all agent updates for that tick and before the clock advances.  Rows are
/// never mutated after recording.
#[derive(Default)]
pub struct MetricsCollector {
    samples: Vec<MetricsSnapshot>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append this tick's row and return a copy of it.
    pub fn sample(
        &mut self,
        time:    SimTime,
        agents:  &AgentStore,
        station: &ChargeStation,
    ) -> MetricsSnapshot {
        let row = MetricsSnapshot {
            time,
            mean_energy: agents.mean_energy(),
            queue_len:   station.queue_len(),
            occupied:    station.occupied(),
        };
        self.samples.push(row);
        row
    }

    /// The full series in tick order.
    pub fn samples(&self) -> &[MetricsSnapshot] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
