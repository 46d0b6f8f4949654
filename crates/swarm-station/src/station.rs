//! `ChargeStation` — slot accounting and the FIFO wait queue.

use std::collections::VecDeque;

use swarm_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StationError {
    #[error("station capacity must be at least 1")]
    ZeroCapacity,
}

/// Outcome of a slot request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// A slot was free; the agent occupies it as of this instant.
    Occupied,
    /// All slots busy; the agent joined the tail of the wait queue.
    Enqueued,
}

/// A capacity-bounded resource with a first-come-first-served wait queue.
///
/// Invariant: `occupied <= capacity` at every observable point.  A violation
/// is a scheduling defect and panics immediately rather than being clamped.
#[derive(Debug)]
pub struct ChargeStation {
    capacity: usize,
    occupied: usize,
    waiting:  VecDeque<AgentId>,
}

impl ChargeStation {
    /// Create a station with `capacity` slots.  Capacity is fixed for the
    /// station's lifetime.
    pub fn new(capacity: usize) -> Result<Self, StationError> {
        if capacity < 1 {
            return Err(StationError::ZeroCapacity);
        }
        Ok(Self { capacity, occupied: 0, waiting: VecDeque::new() })
    }

    /// Request a slot for `agent`.
    ///
    /// Returns [`Admission::Occupied`] when a slot was free (the agent holds
    /// it immediately) or [`Admission::Enqueued`] when it joined the wait
    /// queue.  Entry to the queue happens only through this call.
    pub fn request(&mut self, agent: AgentId) -> Admission {
        if self.occupied < self.capacity {
            self.occupied += 1;
            Admission::Occupied
        } else {
            self.waiting.push_back(agent);
            Admission::Enqueued
        }
    }

    /// Release one occupied slot.
    ///
    /// If the wait queue is non-empty the freed slot transfers atomically to
    /// the queue head, which is returned so the scheduler can resume that
    /// agent's task.  Occupancy never dips visibly between release and grant.
    ///
    /// # Panics
    /// Panics if no slot is occupied — releasing an unheld slot means the
    /// scheduler lost track of a hold.
    pub fn release(&mut self) -> Option<AgentId> {
        assert!(self.occupied > 0, "release with no occupied slot");
        match self.waiting.pop_front() {
            Some(next) => Some(next), // slot transfers; occupied count unchanged
            None => {
                self.occupied -= 1;
                None
            }
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.  Always `<= capacity`.
    #[inline]
    pub fn occupied(&self) -> usize {
        debug_assert!(self.occupied <= self.capacity);
        self.occupied
    }

    /// Agents waiting for a slot, in arrival order.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// `true` when at least one slot is free.
    #[inline]
    pub fn has_free_slot(&self) -> bool {
        self.occupied < self.capacity
    }
}
