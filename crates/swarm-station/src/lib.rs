//! `swarm-station` — the capacity-bounded recharge resource.
//!
//! A station hands out up to `capacity` slots.  Requests beyond capacity
//! join a strict arrival-order wait queue; a freed slot always goes to the
//! queue head.  No preemption, no priorities, no cancellation: a granted
//! hold runs to completion.
//!
//! The station itself is passive — it tracks occupancy and the queue, and
//! reports who to resume.  Timing (when a hold expires, when a resumed task
//! runs) belongs to the scheduler in `swarm-sim`.

pub mod station;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use station::{Admission, ChargeStation, StationError};
