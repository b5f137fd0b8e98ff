//! `wp-agent`: agent state and the simulation state container.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`agent`]      | `Agent` (mutable motion state), `Facing`, `Speech`          |
//! | [`profile`]    | `AgentProfile`, `QuotePool`, `Visibility`, `Dimension`      |
//! | [`store`]      | `SimulationState` (agents + profiles + frozen flags), `AgentRngs` |
//!
//! # Why split motion from profile?
//!
//! The engine rewrites every `Agent` every tick; an agent's name, quote
//! lines and visibility never change.  Keeping them in separate parallel
//! vectors means a per-tick copy of an `Agent` never touches the static
//! strings.

pub mod agent;
pub mod profile;
pub mod store;


pub use agent::{Agent, Facing, Speech};
pub use profile::{AgentProfile, Dimension, QuotePool, Visibility};
pub use store::{AgentRngs, SimulationState};
