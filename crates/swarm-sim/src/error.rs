use swarm_core::ConfigError;
use swarm_station::StationError;
use thiserror::Error;

/// Construction-time failures.  All are fatal before any simulated time
/// advances; a running simulation signals broken scheduling invariants by
/// panicking instead (they are programming defects, not run states).
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("recharge station error: {0}")]
    Station(#[from] StationError),

    #[error("agent store has {got} agents but config.population is {expected}")]
    AgentCountMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;
