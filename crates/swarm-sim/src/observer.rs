//! Simulation observer trait for progress reporting and test probes.

use swarm_agent::AgentStore;
use swarm_core::Tick;
use swarm_metrics::MetricsSnapshot;
use swarm_station::ChargeStation;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, requests: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {requests} recharge requests");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's metrics row is recorded, with read-only
    /// access to the full state.  Fires every tick.
    fn on_snapshot(
        &mut self,
        _snapshot: &MetricsSnapshot,
        _agents:   &AgentStore,
        _station:  &ChargeStation,
    ) {}

    /// Called at the end of each tick, before the clock advances.
    ///
    /// `requests` is the number of agents that started a recharge task this
    /// tick.
    fn on_tick_end(&mut self, _tick: Tick, _requests: usize) {}

    /// Called once after the final tick's event drain completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
