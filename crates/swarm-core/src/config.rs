//! Top-level simulation configuration.
//!
//! A single immutable `SimConfig` value is constructed once (in code or
//! deserialized from JSON/TOML by the application crate), validated, and then
//! passed by reference to the scheduler and every component.  No field is
//! read from ambient/static state, so two simulations with different configs
//! can coexist in one process.

use thiserror::Error;

use crate::time::SimClock;

/// Errors rejected before any simulated time advances.
///
/// These are fatal at construction: there is no partial or recovered
/// execution with an invalid config.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("population must be at least 1")]
    EmptyPopulation,

    #[error("tick step must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("world bounds must be positive, got {0} x {1}")]
    NonPositiveWorld(f64, f64),

    #[error("recharge station capacity must be at least 1")]
    ZeroCapacity,
}

/// All tunable parameters of a run.  Every field is required — there are no
/// hidden defaults beyond the [`baseline`][SimConfig::baseline] scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of agents.  Fixed for the whole run — agents are neither
    /// created nor destroyed.
    pub population: usize,

    /// World rectangle extent along x.  Positions are confined to
    /// `[0, world_width]`.
    pub world_width: f64,

    /// World rectangle extent along y.
    pub world_height: f64,

    /// Energy ceiling.  Agent energy is clamped to `[0, energy_max]` and a
    /// completed recharge restores it to exactly this value.
    pub energy_max: f64,

    /// Passive energy inflow per unit time while not recharging.
    pub recovery_rate: f64,

    /// Energy outflow per unit time spent moving.
    pub movement_cost: f64,

    /// Absolute magnitude of one pairwise interaction contribution.  The
    /// sign is drawn uniformly per in-radius pair per tick.
    pub interaction_effect: f64,

    /// Pairs farther apart than this contribute nothing.
    pub interaction_radius: f64,

    /// Number of recharge slots the station can occupy simultaneously.
    pub station_capacity: usize,

    /// Energy level strictly below which an agent must request a recharge.
    pub critical_energy: f64,

    /// Simulated time a granted slot is held before the recharge completes.
    /// Need not be a multiple of `step`.
    pub recharge_hold: f64,

    /// Total simulated time to run.
    pub total_time: f64,

    /// Fixed step of the main loop.
    pub step: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Reject invalid parameter combinations before the run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population < 1 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(self.step > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(ConfigError::NonPositiveWorld(self.world_width, self.world_height));
        }
        if self.station_capacity < 1 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// How many fixed steps cover `total_time`.
    ///
    /// The last tick may start strictly before `total_time` and end at or
    /// past it; events due up to that final boundary are still processed.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        (self.total_time / self.step).ceil() as u64
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.step)
    }

    /// The canonical 50-agent scenario: a 100×100 world, five recharge
    /// slots, and an energy budget that keeps roughly a tenth of the
    /// population queued at the station at any time.
    pub fn baseline() -> Self {
        Self {
            population:         50,
            world_width:        100.0,
            world_height:       100.0,
            energy_max:         10.0,
            recovery_rate:      0.2,
            movement_cost:      0.3,
            interaction_effect: 0.4,
            interaction_radius: 10.0,
            station_capacity:   5,
            critical_energy:    2.0,
            recharge_hold:      10.0,
            total_time:         200.0,
            step:               1.0,
            seed:               42,
        }
    }
}
