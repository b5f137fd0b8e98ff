//! `wp-render`: read-only projection of simulation state onto a screen.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`viewport`]   | `Viewport`, `ProjectionConfig`, `bounce_offset`            |
//! | [`projection`] | `SpriteView`, `LandmarkView`, `RenderFrame`, `project_*`   |
//! | [`landmark`]   | `Landmark`, static labelled map locations                   |
//!
//! Nothing here mutates the simulation.  A renderer (terminal, canvas, GPU)
//! calls [`project_frame`] after each tick and draws what it gets back; the
//! engine never sees any of it.

pub mod landmark;
pub mod projection;
pub mod viewport;


pub use landmark::Landmark;
pub use projection::{project_agent, project_frame, LandmarkView, RenderFrame, SceneView, SpriteView};
pub use viewport::{bounce_offset, ProjectionConfig, Viewport};
