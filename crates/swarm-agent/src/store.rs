//! Structure-of-Arrays storage for all agent state.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let e = store.energy[agent.index()];  // O(1), cache-friendly
//! ```

use std::f64::consts::TAU;

use swarm_core::{AgentId, SimConfig, SimRng, Vec2};

// Spawn velocity bounds carried over from the validated scenario: a uniform
// heading with speed in [0.5, 1.5) world units per unit time.
const MIN_SPAWN_SPEED: f64 = 0.5;
const MAX_SPAWN_SPEED: f64 = 1.5;

/// SoA storage for the whole population.
///
/// Fields are `pub` for direct indexed access; components stay in lock-step
/// because agents are never created or destroyed mid-run.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Position, confined to the world rectangle `[0, w] × [0, h]`.
    pub position: Vec<Vec2>,

    /// Velocity.  A component sign-flips when its coordinate hits a world
    /// boundary.
    pub velocity: Vec<Vec2>,

    /// Energy reserve, clamped to `[0, energy_max]` on every update.
    pub energy: Vec<f64>,

    /// `true` from the instant a recharge is requested until its hold
    /// completes.  While set, the per-tick update is a no-op for this agent.
    pub recharging: Vec<bool>,

    /// Completed-recharge counter.  Monotonically non-decreasing.
    pub recharges: Vec<u32>,
}

impl AgentStore {
    /// Spawn `cfg.population` agents at uniform random positions with random
    /// headings, all starting at the energy ceiling.
    ///
    /// Draw order per agent is position-x, position-y, heading, speed —
    /// callers that need reproducible placement pass a dedicated child RNG.
    pub fn spawn(cfg: &SimConfig, rng: &mut SimRng) -> Self {
        let mut store = Self::with_capacity(cfg.population);
        for _ in 0..cfg.population {
            let pos = Vec2::new(
                rng.gen_range(0.0..cfg.world_width),
                rng.gen_range(0.0..cfg.world_height),
            );
            let heading = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(MIN_SPAWN_SPEED..MAX_SPAWN_SPEED);
            let vel = Vec2::new(heading.cos() * speed, heading.sin() * speed);
            store.push(pos, vel, cfg.energy_max);
        }
        store
    }

    /// Build a store from explicit positions and velocities (tests and
    /// scripted scenarios).  All agents start at the energy ceiling.
    ///
    /// # Panics
    /// Panics if the two slices differ in length.
    pub fn from_states(positions: Vec<Vec2>, velocities: Vec<Vec2>, energy_max: f64) -> Self {
        assert_eq!(positions.len(), velocities.len(), "position/velocity length mismatch");
        let count = positions.len();
        Self {
            count,
            position:   positions,
            velocity:   velocities,
            energy:     vec![energy_max; count],
            recharging: vec![false; count],
            recharges:  vec![0; count],
        }
    }

    fn with_capacity(count: usize) -> Self {
        Self {
            count:      0,
            position:   Vec::with_capacity(count),
            velocity:   Vec::with_capacity(count),
            energy:     Vec::with_capacity(count),
            recharging: Vec::with_capacity(count),
            recharges:  Vec::with_capacity(count),
        }
    }

    fn push(&mut self, position: Vec2, velocity: Vec2, energy: f64) {
        self.position.push(position);
        self.velocity.push(velocity);
        self.energy.push(energy);
        self.recharging.push(false);
        self.recharges.push(0);
        self.count += 1;
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Mean energy across the population.  Returns 0 for an empty store.
    pub fn mean_energy(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.energy.iter().sum::<f64>() / self.count as f64
    }

    /// Sum of completed recharges over all agents.
    pub fn total_recharges(&self) -> u64 {
        self.recharges.iter().map(|&n| n as u64).sum()
    }

    /// Set the recharging flag.  Called by the scheduler in the same
    /// uninterrupted span as the station request, before any suspension.
    #[inline]
    pub fn mark_recharging(&mut self, agent: AgentId) {
        self.recharging[agent.index()] = true;
    }

    /// Complete a recharge: restore energy to the ceiling, bump the counter,
    /// clear the flag.  This is the only path that clears `recharging`.
    pub fn finish_recharge(&mut self, agent: AgentId, energy_max: f64) {
        let i = agent.index();
        self.energy[i] = energy_max;
        self.recharges[i] += 1;
        self.recharging[i] = false;
    }
}
