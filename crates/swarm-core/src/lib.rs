//! `swarm-core` — foundational types for the `rust_swarm` hybrid simulation
//! framework.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It intentionally
//! has no `swarm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `AgentId`                                         |
//! | [`vec2`]   | `Vec2` — planar position/velocity vector          |
//! | [`time`]   | `Tick`, `SimTime`, `SimClock`                     |
//! | [`rng`]    | `SimRng` — seeded deterministic generator         |
//! | [`config`] | `SimConfig`, `ConfigError`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |
//!           | Lets applications load `SimConfig` from JSON/TOML.      |

pub mod config;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConfigError, SimConfig};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, SimTime, Tick};
pub use vec2::Vec2;
