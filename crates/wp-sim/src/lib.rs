//! `wp-sim`: scene assembly and the frame-driven loop for the rust_wp
//! simulation.
//!
//! # Loop
//!
//! ```text
//! while source.wait_for_tick():
//!   observer.on_tick_start(tick)
//!   if not paused:
//!     report = engine.tick(state, graph, rngs)   // every agent, in id order
//!     observer.on_tick_end(report)
//!   if observer.wants_frames():
//!     observer.on_frame(project_frame(state, …))
//! observer.on_sim_end(tick)
//! ```
//!
//! The tick source decides *when* ticks happen ([`FixedTicks`] for batch
//! runs and tests, [`FrameTimer`] for wall-clock pacing).  Agent speed is
//! progress per tick, so a faster source simply animates faster.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wp_core::SimConfig;
//! use wp_sim::{preset, FixedTicks, NoopObserver};
//!
//! let mut sim = preset::hawkins(SimConfig::default()).into_builder().build()?;
//! sim.drive(&mut FixedTicks::new(600), &mut NoopObserver)?;
//! let frame = sim.frame();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod preset;
pub mod scene;
pub mod sim;
pub mod source;

#[cfg(test)]
mod tests;

pub use builder::{SimBuilder, DEFAULT_VIEWPORT};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scene::{AgentSpec, SceneSpec};
pub use sim::Sim;
pub use source::{FixedTicks, FrameTimer, TickSource};
