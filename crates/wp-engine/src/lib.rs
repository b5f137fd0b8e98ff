//! `wp-engine`: advances every agent by one discrete step per tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`selector`] | `RouteSelector` trait, `UniformRandom`, `AvoidBacktrack`     |
//! | [`engine`]   | `Engine<S>`, `EngineParams`, `advance` (functional form)     |
//! | [`report`]   | `TickReport`, `Arrival`, `StepOutcome`                       |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                             |
//!
//! # Movement model
//!
//! Each agent runs the same five steps every tick:
//!
//! 1. `progress += speed`.
//! 2. If `progress >= 1`: arrive (`current = target`, `progress = 0`) and ask
//!    the [`RouteSelector`] for a new target among the arrival node's
//!    neighbors.  Doubling back is allowed.
//! 3. Interpolate `position` along `current -> target`.
//! 4. Derive `facing` from the edge's horizontal direction; vertical edges
//!    keep the previous facing.
//! 5. Count down an active speech bubble, or roll for a new one.
//!
//! Every agent's update is computed on a copy and committed only if all of
//! its graph lookups succeed, so a bad node reference never leaves an agent
//! half-updated.  What happens next is the [`FaultPolicy`][wp_core::FaultPolicy]'s call.

pub mod engine;
pub mod error;
pub mod report;
pub mod selector;


pub use engine::{advance, Engine, EngineParams};
pub use error::{EngineError, EngineResult};
pub use report::{Arrival, SpeechChange, StepOutcome, TickReport};
pub use selector::{AvoidBacktrack, RouteSelector, UniformRandom};
