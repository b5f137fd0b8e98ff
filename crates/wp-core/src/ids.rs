//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helpers for clarity.
//!
//! Human-readable names ("TL", "mike", …) are interned to these dense indices
//! when a graph or scene is built; the hot tick loop only ever sees integers.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Build from a dense `Vec` index.  Indices past the inner
            /// integer's range are a construction bug, not a runtime case.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                debug_assert!(index <= <$inner>::MAX as usize);
                $name(index as $inner)
            }

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the simulation state.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a waypoint node in a `WaypointGraph`.
    pub struct NodeId(u32);
}
