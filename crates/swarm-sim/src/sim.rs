//! The `Sim` struct and its tick loop.

use swarm_agent::AgentStore;
use swarm_core::{AgentId, SimClock, SimConfig, SimRng, SimTime};
use swarm_metrics::{MetricsCollector, SimReport};
use swarm_schedule::{EventKind, EventQueue, RechargeState};
use swarm_spatial::InteractionEngine;
use swarm_station::{Admission, ChargeStation};

use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim` owns every piece of mutable run state — agents, station, event
/// queue, task states, metrics, clock, and RNG.  Nothing lives in ambient
/// or static storage, so two `Sim` instances never interfere.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration, validated at build time and immutable after.
    pub config: SimConfig,

    /// Fixed-step clock.  Tick boundaries are exact multiples of the step.
    pub clock: SimClock,

    /// SoA agent state.
    pub agents: AgentStore,

    /// The capacity-bounded recharge resource.
    pub station: ChargeStation,

    /// Pairwise interaction engine.
    pub field: InteractionEngine,

    /// Pending timed events: slot grants and hold expiries.
    pub events: EventQueue,

    /// Per-agent recharge task states, indexed by `AgentId`.
    pub tasks: Vec<RechargeState>,

    /// Append-only per-tick statistics.
    pub metrics: MetricsCollector,

    /// The run's deterministic generator.  Owned here and threaded
    /// explicitly into every drawing call.
    pub(crate) rng: SimRng,

    /// Per-tick effect accumulators, reused across ticks.
    pub(crate) effects: Vec<f64>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to the end of `config.total_time`, then
    /// aggregate the final report.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimReport {
        let end = self.config.total_ticks();
        while self.clock.current_tick.0 < end {
            self.step_once(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        self.report()
    }

    /// Run exactly `n` ticks from the current position (ignores the
    /// configured total).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_once(observer);
        }
    }

    /// Aggregate the report for the series recorded so far.
    pub fn report(&self) -> SimReport {
        SimReport::from_run(self.metrics.samples(), &self.agents)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_once<O: SimObserver>(&mut self, observer: &mut O) {
        let tick = self.clock.current_tick;
        let now = self.clock.now();
        observer.on_tick_start(tick);

        // ── Phase 1+2: effects, then agent updates in ascending id order ──
        let requests = self.tick_agents(now);

        // ── Phase 3: sample metrics (after updates, before advancing) ─────
        let snapshot = self.metrics.sample(now, &self.agents, &self.station);
        observer.on_snapshot(&snapshot, &self.agents, &self.station);
        observer.on_tick_end(tick, requests);

        // ── Phase 4: advance, then drain events due at or before the new
        //    boundary, in global (due, seq) order ─────────────────────────
        self.clock.advance();
        self.drain_due(self.clock.now());
    }

    /// Compute interaction effects and update every agent once.
    ///
    /// Returns the number of recharge tasks started this tick.
    fn tick_agents(&mut self, now: SimTime) -> usize {
        self.field.compute_into(&self.agents, &mut self.rng, &mut self.effects);

        let mut requests = 0;
        for i in 0..self.agents.count {
            let agent = AgentId(i as u32);
            if self.agents.update(agent, self.effects[i], &self.config) {
                self.begin_recharge(agent, now);
                requests += 1;
            }
        }
        requests
    }

    /// Start a recharge task: flag the agent, then request a slot — all in
    /// one uninterrupted span, so the flag is visible before any suspension
    /// and re-entry is impossible.
    fn begin_recharge(&mut self, agent: AgentId, now: SimTime) {
        let i = agent.index();
        assert!(
            self.tasks[i].can_request(),
            "recharge re-entry for {agent}: task is {:?}",
            self.tasks[i]
        );
        self.agents.mark_recharging(agent);
        match self.station.request(agent) {
            Admission::Occupied => {
                self.tasks[i] = RechargeState::Holding;
                self.events
                    .push(now + self.config.recharge_hold, EventKind::HoldExpired { agent });
            }
            Admission::Enqueued => {
                // Open-ended wait: resumed only by a release, via SlotGranted.
                self.tasks[i] = RechargeState::WaitingForSlot;
            }
        }
    }

    /// Process every pending event with `due <= horizon` in time order,
    /// FIFO on ties.
    fn drain_due(&mut self, horizon: SimTime) {
        while let Some(ev) = self.events.pop_due(horizon) {
            match ev.kind {
                EventKind::SlotGranted { agent } => self.on_slot_granted(agent, ev.due),
                EventKind::HoldExpired { agent } => self.on_hold_expired(agent, ev.due),
            }
        }
    }

    /// A waiting task received the slot transferred by a release: its hold
    /// starts at the grant instant.
    fn on_slot_granted(&mut self, agent: AgentId, now: SimTime) {
        let i = agent.index();
        assert!(
            self.tasks[i] == RechargeState::WaitingForSlot,
            "slot granted to {agent} whose task is {:?}",
            self.tasks[i]
        );
        self.tasks[i] = RechargeState::Holding;
        self.events
            .push(now + self.config.recharge_hold, EventKind::HoldExpired { agent });
    }

    /// A hold ran to completion: restore the agent, release the slot, and —
    /// if anyone is waiting — schedule their grant at this same instant
    /// (ordered after this event by the stable tie-break).
    fn on_hold_expired(&mut self, agent: AgentId, now: SimTime) {
        let i = agent.index();
        assert!(
            self.tasks[i] == RechargeState::Holding,
            "hold expired for {agent} whose task is {:?}",
            self.tasks[i]
        );
        self.agents.finish_recharge(agent, self.config.energy_max);
        self.tasks[i] = RechargeState::Done;

        if let Some(next) = self.station.release() {
            self.events.push(now, EventKind::SlotGranted { agent: next });
        }
    }
}
