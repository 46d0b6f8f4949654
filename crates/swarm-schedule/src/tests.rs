//! Unit tests for event ordering and task states.

use swarm_core::{AgentId, SimTime};

use crate::{EventKind, EventQueue, RechargeState};

fn hold(agent: u32) -> EventKind {
    EventKind::HoldExpired { agent: AgentId(agent) }
}

fn grant(agent: u32) -> EventKind {
    EventKind::SlotGranted { agent: AgentId(agent) }
}

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(SimTime(13.0), hold(0));
        q.push(SimTime(10.5), hold(1));
        q.push(SimTime(12.0), hold(2));

        assert_eq!(q.next_due(), Some(SimTime(10.5)));
        let order: Vec<_> = std::iter::from_fn(|| q.pop_due(SimTime(f64::MAX)))
            .map(|ev| ev.due)
            .collect();
        assert_eq!(order, vec![SimTime(10.5), SimTime(12.0), SimTime(13.0)]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_due_times_resolve_by_scheduling_order() {
        let mut q = EventQueue::new();
        q.push(SimTime(5.0), hold(7));
        q.push(SimTime(5.0), grant(3));
        q.push(SimTime(5.0), hold(1));

        let kinds: Vec<_> = std::iter::from_fn(|| q.pop_due(SimTime(5.0)))
            .map(|ev| ev.kind)
            .collect();
        assert_eq!(kinds, vec![hold(7), grant(3), hold(1)]);
    }

    #[test]
    fn horizon_is_inclusive() {
        let mut q = EventQueue::new();
        q.push(SimTime(2.0), hold(0));
        q.push(SimTime(2.5), hold(1));

        assert_eq!(q.pop_due(SimTime(2.0)).map(|ev| ev.kind), Some(hold(0)));
        // 2.5 lies beyond the horizon: stays queued.
        assert_eq!(q.pop_due(SimTime(2.0)), None);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn interleaved_push_pop_keeps_global_order() {
        let mut q = EventQueue::new();
        q.push(SimTime(10.0), hold(0));
        assert_eq!(q.pop_due(SimTime(10.0)).map(|ev| ev.kind), Some(hold(0)));
        // A grant scheduled at the pop's own due time drains in the same pass.
        q.push(SimTime(10.0), grant(1));
        assert_eq!(q.pop_due(SimTime(10.0)).map(|ev| ev.kind), Some(grant(1)));
    }
}

#[cfg(test)]
mod task {
    use super::*;

    #[test]
    fn admission_guard() {
        assert!(RechargeState::Idle.can_request());
        assert!(RechargeState::Done.can_request());
        assert!(!RechargeState::WaitingForSlot.can_request());
        assert!(!RechargeState::Holding.can_request());
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(RechargeState::default(), RechargeState::Idle);
    }
}
