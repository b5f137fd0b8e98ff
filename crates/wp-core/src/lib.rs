//! `wp-core`: foundational types for the `rust_wp` waypoint simulation.
//!
//! This crate is a dependency of every other `wp-*` crate.  It has no `wp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`geo`]         | `Point` (normalized 2-D coordinate), `lerp`           |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`, `FaultPolicy`        |
//! | [`rng`]         | `RandomSource`, `AgentRng` (per-agent)                |
//! | [`error`]       | `WpError`, `WpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WpError, WpResult};
pub use geo::Point;
pub use ids::{AgentId, NodeId};
pub use rng::{AgentRng, RandomSource};
pub use time::{FaultPolicy, SimClock, SimConfig, Tick};
