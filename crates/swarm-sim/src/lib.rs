//! `swarm-sim` — the hybrid scheduler for the rust_swarm framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks():
//!   ① Effects   — O(N²) pairwise interaction accumulators (previous-tick
//!                 positions; one ± draw per in-radius pair).
//!   ② Updates   — each agent's energy/motion update in ascending AgentId
//!                 order; an update that crosses the critical threshold
//!                 starts a recharge task in the same span.
//!   ③ Sample    — metrics row appended; observer snapshot hook fires.
//!   ④ Advance   — clock moves to the next boundary, then every pending
//!                 event with due <= boundary is processed in (due, seq)
//!                 order:
//!                   SlotGranted(a)  → task a starts its hold
//!                   HoldExpired(a)  → recharge completes; slot released
//!                                     (possibly granting the next waiter
//!                                     at the same due time)
//! ```
//!
//! "Concurrency" here is interleaved suspension on a single thread: at most
//! one task's code runs at any instant, so agent and station state have
//! exactly one mutating owner at a time by construction — no locks.  All
//! suspended tasks resume in non-decreasing simulated-time order with stable
//! FIFO ties; that ordering plus the seeded RNG makes runs byte-identical
//! for a given configuration.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_core::SimConfig;
//! use swarm_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::baseline()).build()?;
//! let report = sim.run(&mut NoopObserver);
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
