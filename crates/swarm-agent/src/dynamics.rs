//! The per-tick agent update: energy flow, motion, boundary reflection.
//!
//! # Update order
//!
//! 1. Energy: `energy += (recovery + effect - movement_cost) * step`,
//!    clamped to `[0, energy_max]`.  Out-of-range intermediates are a normal
//!    transient, corrected by the clamp rather than raised as errors.
//! 2. Motion: `position += velocity * step`, then per-axis reflection —
//!    a coordinate past `[0, bound]` is clamped to the bound and the
//!    matching velocity component negated (at most one flip per axis per
//!    tick).
//! 3. Critical check: energy strictly below the threshold reports a recharge
//!    request to the caller.
//!
//! A recharging agent is frozen: its position, velocity, and energy are
//! untouched until the recharge task completes, and it can never report a
//! second request while frozen.

use swarm_core::{AgentId, SimConfig};

use crate::AgentStore;

impl AgentStore {
    /// Advance one agent by one tick under the given interaction `effect`.
    ///
    /// Returns `true` when the update left the agent strictly below the
    /// critical energy threshold — the caller must start its recharge task.
    /// No-op (returning `false`) while the agent is recharging.
    pub fn update(&mut self, agent: AgentId, effect: f64, cfg: &SimConfig) -> bool {
        let i = agent.index();
        if self.recharging[i] {
            return false;
        }

        let inflow = cfg.recovery_rate + effect;
        let outflow = cfg.movement_cost;
        self.energy[i] = (self.energy[i] + (inflow - outflow) * cfg.step)
            .clamp(0.0, cfg.energy_max);

        self.position[i] += self.velocity[i].scale(cfg.step);
        reflect_axis(&mut self.position[i].x, &mut self.velocity[i].x, cfg.world_width);
        reflect_axis(&mut self.position[i].y, &mut self.velocity[i].y, cfg.world_height);

        self.energy[i] < cfg.critical_energy && !self.recharging[i]
    }
}

/// Clamp one coordinate to `[0, bound]`, negating its velocity component on
/// contact.  Reflection never touches the energy account.
fn reflect_axis(pos: &mut f64, vel: &mut f64, bound: f64) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = -*vel;
    } else if *pos > bound {
        *pos = bound;
        *vel = -*vel;
    }
}
