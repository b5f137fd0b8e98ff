//! Declarative graph description.
//!
//! `GraphSpec` mirrors the way a waypoint map is written by hand: a list of
//! nodes, each with a name, a normalized position, and an ordered neighbor
//! list.  With the `serde` feature it round-trips through JSON, which is how
//! the demo driver loads custom maps.

use wp_core::Point;

use crate::{GraphResult, WaypointGraph, WaypointGraphBuilder};

/// One node of a [`GraphSpec`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSpec {
    pub id:        String,
    pub x:         f64,
    pub y:         f64,
    pub neighbors: Vec<String>,
}

impl NodeSpec {
    pub fn new(id: &str, x: f64, y: f64, neighbors: &[&str]) -> Self {
        Self {
            id: id.to_owned(),
            x,
            y,
            neighbors: neighbors.iter().map(|n| (*n).to_owned()).collect(),
        }
    }
}

/// A whole graph as plain data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
}

impl GraphSpec {
    /// Build the graph.  Same failure modes as [`WaypointGraphBuilder::build`].
    pub fn build(&self) -> GraphResult<WaypointGraph> {
        let mut b = WaypointGraphBuilder::new();
        for node in &self.nodes {
            b.add_node(node.id.as_str(), Point::new(node.x, node.y));
            for n in &node.neighbors {
                b.add_neighbor(node.id.as_str(), n.as_str());
            }
        }
        b.build()
    }
}
