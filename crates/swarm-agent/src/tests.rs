//! Unit tests for agent storage and dynamics.

use swarm_core::{AgentId, SimConfig, SimRng, Vec2};

use crate::AgentStore;

fn test_config() -> SimConfig {
    SimConfig::baseline()
}

fn single_agent(pos: Vec2, vel: Vec2, cfg: &SimConfig) -> AgentStore {
    AgentStore::from_states(vec![pos], vec![vel], cfg.energy_max)
}

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn population_and_initial_state() {
        let cfg = test_config();
        let mut rng = SimRng::new(cfg.seed);
        let store = AgentStore::spawn(&cfg, &mut rng);

        assert_eq!(store.count, cfg.population);
        for id in store.agent_ids() {
            let i = id.index();
            let p = store.position[i];
            assert!(p.x >= 0.0 && p.x <= cfg.world_width);
            assert!(p.y >= 0.0 && p.y <= cfg.world_height);
            let speed = store.velocity[i].norm();
            assert!(speed >= 0.5 && speed < 1.5, "speed {speed} out of spawn range");
            assert_eq!(store.energy[i], cfg.energy_max);
            assert!(!store.recharging[i]);
            assert_eq!(store.recharges[i], 0);
        }
    }

    #[test]
    fn spawn_is_deterministic() {
        let cfg = test_config();
        let a = AgentStore::spawn(&cfg, &mut SimRng::new(cfg.seed));
        let b = AgentStore::spawn(&cfg, &mut SimRng::new(cfg.seed));
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }
}

#[cfg(test)]
mod energy {
    use super::*;

    #[test]
    fn net_flow_applied_per_step() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(50.0, 50.0), Vec2::ZERO, &cfg);
        store.update(AgentId(0), 0.0, &cfg);
        // recovery 0.2 - movement 0.3 = -0.1 per unit time
        assert!((store.energy[0] - (cfg.energy_max - 0.1)).abs() < 1e-12);
    }

    #[test]
    fn clamped_to_ceiling() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(50.0, 50.0), Vec2::ZERO, &cfg);
        // Large positive effect would overshoot the ceiling without the clamp.
        store.update(AgentId(0), 100.0, &cfg);
        assert_eq!(store.energy[0], cfg.energy_max);
    }

    #[test]
    fn clamped_to_zero() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(50.0, 50.0), Vec2::ZERO, &cfg);
        store.update(AgentId(0), -100.0, &cfg);
        assert_eq!(store.energy[0], 0.0);
    }

    #[test]
    fn critical_threshold_is_strict() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(50.0, 50.0), Vec2::ZERO, &cfg);

        // Land exactly on the threshold: 2.1 - 0.1 = 2.0, not strictly below.
        store.energy[0] = cfg.critical_energy + 0.1;
        assert!(!store.update(AgentId(0), 0.0, &cfg));

        // One more step goes strictly below.
        assert!(store.update(AgentId(0), 0.0, &cfg));
    }
}

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn advances_by_velocity_times_step() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(10.0, 20.0), Vec2::new(1.0, -0.5), &cfg);
        store.update(AgentId(0), 0.0, &cfg);
        assert_eq!(store.position[0], Vec2::new(11.0, 19.5));
    }

    #[test]
    fn reflects_off_all_four_edges() {
        let cfg = test_config();
        let cases = [
            // (start, velocity, expected position, expected velocity)
            (Vec2::new(0.5, 50.0), Vec2::new(-1.0, 0.0), Vec2::new(0.0, 50.0), Vec2::new(1.0, 0.0)),
            (Vec2::new(99.5, 50.0), Vec2::new(1.0, 0.0), Vec2::new(100.0, 50.0), Vec2::new(-1.0, 0.0)),
            (Vec2::new(50.0, 0.5), Vec2::new(0.0, -1.0), Vec2::new(50.0, 0.0), Vec2::new(0.0, 1.0)),
            (Vec2::new(50.0, 99.5), Vec2::new(0.0, 1.0), Vec2::new(50.0, 100.0), Vec2::new(0.0, -1.0)),
        ];
        for (start, vel, want_pos, want_vel) in cases {
            let mut store = single_agent(start, vel, &cfg);
            let energy_before = store.energy[0];
            store.update(AgentId(0), 0.0, &cfg);
            assert_eq!(store.position[0], want_pos);
            assert_eq!(store.velocity[0], want_vel);
            // Reflection does not touch the energy account: the change is
            // exactly the net flow, same as a mid-world tick.
            let net = (cfg.recovery_rate - cfg.movement_cost) * cfg.step;
            assert!((store.energy[0] - (energy_before + net)).abs() < 1e-12);
        }
    }

    #[test]
    fn corner_reflects_both_axes() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(0.5, 0.5), Vec2::new(-1.0, -1.0), &cfg);
        store.update(AgentId(0), 0.0, &cfg);
        assert_eq!(store.position[0], Vec2::ZERO);
        assert_eq!(store.velocity[0], Vec2::new(1.0, 1.0));
    }
}

#[cfg(test)]
mod recharge {
    use super::*;

    #[test]
    fn update_is_noop_while_recharging() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0), &cfg);
        store.energy[0] = 1.0;
        store.mark_recharging(AgentId(0));

        let pos = store.position[0];
        let vel = store.velocity[0];
        assert!(!store.update(AgentId(0), 5.0, &cfg));
        assert_eq!(store.position[0], pos);
        assert_eq!(store.velocity[0], vel);
        assert_eq!(store.energy[0], 1.0);
    }

    #[test]
    fn finish_restores_ceiling_and_counts() {
        let cfg = test_config();
        let mut store = single_agent(Vec2::new(50.0, 50.0), Vec2::ZERO, &cfg);
        store.energy[0] = 0.0;
        store.mark_recharging(AgentId(0));

        store.finish_recharge(AgentId(0), cfg.energy_max);
        assert_eq!(store.energy[0], cfg.energy_max);
        assert_eq!(store.recharges[0], 1);
        assert!(!store.recharging[0]);
        assert_eq!(store.total_recharges(), 1);
    }
}

#[cfg(test)]
mod aggregates {
    use super::*;

    #[test]
    fn mean_energy() {
        let cfg = test_config();
        let mut store = AgentStore::from_states(
            vec![Vec2::ZERO, Vec2::ZERO],
            vec![Vec2::ZERO, Vec2::ZERO],
            cfg.energy_max,
        );
        store.energy[0] = 4.0;
        store.energy[1] = 6.0;
        assert!((store.mean_energy() - 5.0).abs() < 1e-12);
    }
}
