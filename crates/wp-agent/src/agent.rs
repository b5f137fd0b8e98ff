//! Per-agent motion state.

use wp_core::{NodeId, Point};

/// Which way the sprite looks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal delta.
    ///
    /// A purely vertical edge (`dx == 0`) keeps `prev` so the sprite does not
    /// flicker when the agent turns onto it.
    #[inline]
    pub fn from_dx(dx: f64, prev: Facing) -> Facing {
        if dx > 0.0 {
            Facing::Right
        } else if dx < 0.0 {
            Facing::Left
        } else {
            prev
        }
    }
}

/// An active speech bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speech {
    pub text: String,
    /// Ticks left before the bubble disappears.
    pub timer: u32,
}

/// The movement state for a single agent.
///
/// An agent is always travelling: it sits on the edge
/// `current_node -> target_node`, `progress` of the way along.  Arrival is
/// instantaneous (the engine swaps nodes and picks a new target in the same
/// tick), so there is no "stationary" state to represent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// The node the agent last departed from.
    pub current_node: NodeId,

    /// The node the agent is walking toward.
    pub target_node: NodeId,

    /// Fraction of the current edge completed, in `[0, 1)` between ticks.
    pub progress: f64,

    /// Progress added per tick.
    pub speed: f64,

    /// Interpolated normalized position, refreshed every tick.
    pub position: Point,

    pub facing: Facing,

    pub speech: Option<Speech>,
}

impl Agent {
    /// A fresh agent at the start of the edge `current -> target`.
    ///
    /// `position` and `facing` are placeholders until the engine places the
    /// agent against a graph.
    pub fn new(current: NodeId, target: NodeId, speed: f64) -> Self {
        Self {
            current_node: current,
            target_node:  target,
            progress:     0.0,
            speed,
            position:     Point::default(),
            facing:       Facing::default(),
            speech:       None,
        }
    }

    /// Text of the active speech bubble, if any.
    #[inline]
    pub fn speech_text(&self) -> Option<&str> {
        self.speech.as_ref().map(|s| s.text.as_str())
    }

    #[inline]
    pub fn is_speaking(&self) -> bool {
        self.speech.is_some()
    }
}
