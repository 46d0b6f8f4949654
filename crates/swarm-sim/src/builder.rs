//! Fluent builder for constructing a [`Sim`].

use swarm_agent::AgentStore;
use swarm_core::{SimConfig, SimRng};
use swarm_metrics::MetricsCollector;
use swarm_schedule::{EventQueue, RechargeState};
use swarm_spatial::InteractionEngine;
use swarm_station::ChargeStation;

use crate::{Sim, SimError, SimResult};

/// Seed offset of the stream that places spawned agents, kept separate from
/// the root stream so scenario setup never shifts the per-tick draws.
const SPAWN_STREAM: u64 = 1;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population, world, energy dynamics, station, timing, seed.
///
/// # Optional inputs
///
/// | Method       | Default                                             |
/// |--------------|-----------------------------------------------------|
/// | `.agents(s)` | Uniform random spawn from the config's seed         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::baseline()).build()?;
/// let report = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    agents: Option<AgentStore>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, agents: None }
    }

    /// Supply a pre-built agent store (scripted scenarios and tests) instead
    /// of spawning at random.  Must hold exactly `config.population` agents.
    pub fn agents(mut self, store: AgentStore) -> Self {
        self.agents = Some(store);
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Sim`].
    ///
    /// Rejects invalid configs before any simulated time advances; nothing
    /// is partially constructed on error.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let mut spawn_rng = rng.child(SPAWN_STREAM);

        let agents = match self.agents {
            Some(store) => {
                if store.count != self.config.population {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.config.population,
                        got:      store.count,
                    });
                }
                store
            }
            None => AgentStore::spawn(&self.config, &mut spawn_rng),
        };

        let station = ChargeStation::new(self.config.station_capacity)?;
        let field = InteractionEngine::new(&self.config);
        let tasks = vec![RechargeState::Idle; agents.count];
        let effects = Vec::with_capacity(agents.count);

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            agents,
            station,
            field,
            events: EventQueue::new(),
            tasks,
            metrics: MetricsCollector::new(),
            rng,
            effects,
        })
    }
}
