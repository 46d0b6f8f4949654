//! `swarm-agent` — agent state storage and per-tick dynamics.
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`store`]    | `AgentStore` — SoA arrays for the whole population   |
//! | [`dynamics`] | The per-tick update: energy flow, motion, reflection |
//!
//! # Ownership discipline
//!
//! `AgentStore` is owned by the scheduler.  An agent's entries are mutated
//! only during that agent's own update call or its own recharge-task
//! transitions — never by two tasks in the same span.  The cooperative
//! scheduler enforces this by construction; no locks are involved.

pub mod dynamics;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use store::AgentStore;
