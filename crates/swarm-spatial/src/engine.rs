//! The pairwise effect computation.

use swarm_agent::AgentStore;
use swarm_core::{SimConfig, SimRng};

/// Computes one effect value per agent per tick from all in-radius pairs.
///
/// For each unordered pair `(i, j)` with Euclidean distance `<= radius`, one
/// sign is drawn (uniform ±) and `±magnitude` is added to *both* agents'
/// accumulators.  Pairs beyond the radius contribute nothing and consume no
/// RNG draw, so sparse populations leave the random stream untouched.
///
/// Recharging agents still participate as partners — their neighbours feel
/// the effect; only their own accumulator is discarded by their frozen
/// update.
pub struct InteractionEngine {
    radius:    f64,
    magnitude: f64,
}

impl InteractionEngine {
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            radius:    cfg.interaction_radius,
            magnitude: cfg.interaction_effect,
        }
    }

    /// Fill `effects` with this tick's per-agent accumulators.
    ///
    /// The buffer is cleared and resized to the population; callers reuse
    /// one allocation across ticks.  Pair order is fixed ascending `(i, j)`,
    /// which pins the RNG draw order for reproducible runs.
    pub fn compute_into(&self, agents: &AgentStore, rng: &mut SimRng, effects: &mut Vec<f64>) {
        effects.clear();
        effects.resize(agents.count, 0.0);

        for i in 0..agents.count {
            for j in (i + 1)..agents.count {
                let dist = agents.position[i].distance(agents.position[j]);
                if dist <= self.radius {
                    let delta = if rng.gen_bool(0.5) {
                        -self.magnitude
                    } else {
                        self.magnitude
                    };
                    effects[i] += delta;
                    effects[j] += delta;
                }
            }
        }
    }
}
