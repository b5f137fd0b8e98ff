//! `wp-graph`: the static waypoint graph agents travel on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`graph`]    | `WaypointGraph` (CSR adjacency + R-tree), `WaypointGraphBuilder` |
//! | [`validate`] | strong-connectivity, dead-end, and self-loop checks          |
//! | [`spec`]     | `GraphSpec`, a declarative node list (serde-friendly)       |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                               |
//!
//! The graph is immutable once built.  Every lookup is fallible: asking for a
//! node that is not in the graph returns [`GraphError::UnknownNode`] instead
//! of panicking, so callers decide how loudly to fail.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GraphSpec`.            |

pub mod error;
pub mod graph;
pub mod spec;
pub mod validate;


pub use error::{GraphError, GraphResult};
pub use graph::{WaypointGraph, WaypointGraphBuilder};
pub use spec::{GraphSpec, NodeSpec};
pub use validate::validate;
