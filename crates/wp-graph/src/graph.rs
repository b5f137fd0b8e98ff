//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing neighbor lists use **Compressed Sparse Row (CSR)** format.  Given
//! a `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! adjacency[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Neighbor order inside a node's slice is the order the edges were added.
//! Route selection draws an index into this slice, so keeping the order
//! stable keeps seeded runs reproducible.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a normalized `(x, y)` to the nearest
//! `NodeId`.  Used to resolve landmarks and pointer positions to waypoints.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use wp_core::{NodeId, Point};

use crate::{GraphError, GraphResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── WaypointGraph ─────────────────────────────────────────────────────────────

/// Immutable waypoint graph in CSR format plus a spatial index.
///
/// Do not construct directly; use [`WaypointGraphBuilder`] or
/// [`GraphSpec::build`](crate::GraphSpec::build).
pub struct WaypointGraph {
    /// Human-readable node names, indexed by `NodeId`.
    names: Vec<String>,

    /// Normalized position of each node.  Indexed by `NodeId`.
    positions: Vec<Point>,

    /// CSR row pointer.  Length = `node_count + 1`.
    adj_start: Vec<u32>,

    /// Concatenated neighbor lists.
    adjacency: Vec<NodeId>,

    name_index: FxHashMap<String, NodeId>,

    spatial_idx: RTree<NodeEntry>,
}

impl WaypointGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of directed edges (an undirected road counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.positions.len()
    }

    /// All node ids in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.positions.len() as u32).map(NodeId)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Ordered neighbor list of `node`.
    #[inline]
    pub fn neighbors_of(&self, node: NodeId) -> GraphResult<&[NodeId]> {
        if !self.contains(node) {
            return Err(GraphError::UnknownNode(node));
        }
        let start = self.adj_start[node.index()] as usize;
        let end   = self.adj_start[node.index() + 1] as usize;
        Ok(&self.adjacency[start..end])
    }

    /// Normalized position of `node`.
    #[inline]
    pub fn position_of(&self, node: NodeId) -> GraphResult<Point> {
        self.positions
            .get(node.index())
            .copied()
            .ok_or(GraphError::UnknownNode(node))
    }

    /// Resolve a node name to its id.
    pub fn node_id(&self, name: &str) -> GraphResult<NodeId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNodeName(name.to_owned()))
    }

    /// Name of `node`.
    pub fn name(&self, node: NodeId) -> GraphResult<&str> {
        self.names
            .get(node.index())
            .map(String::as_str)
            .ok_or(GraphError::UnknownNode(node))
    }

    /// `true` if `to` appears in `from`'s neighbor list.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors_of(from)
            .map(|n| n.contains(&to))
            .unwrap_or(false)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node closest to `point`.  `None` only if the graph is empty.
    pub fn nearest_node(&self, point: Point) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[point.x, point.y])
            .map(|e| e.id)
    }

    /// Up to `k` nodes nearest to `point`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, point: Point, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[point.x, point.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

impl std::fmt::Debug for WaypointGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaypointGraph")
            .field("nodes", &self.names)
            .field("edges", &self.adjacency.len())
            .finish()
    }
}

// ── WaypointGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WaypointGraph`] incrementally, then call [`build`](Self::build).
///
/// Edges are declared by node name and may reference nodes added later, the
/// same way a hand-written literal lists neighbors before every node exists.
/// `build()` resolves names, rejects bad data, and lays out the CSR arrays.
///
/// # Example
///
/// ```
/// use wp_core::Point;
/// use wp_graph::WaypointGraphBuilder;
///
/// let mut b = WaypointGraphBuilder::new();
/// b.add_node("X", Point::new(0.2, 0.5));
/// b.add_node("Y", Point::new(0.8, 0.5));
/// b.add_road("X", "Y");
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// ```
#[derive(Default)]
pub struct WaypointGraphBuilder {
    nodes:     Vec<(String, Point)>,
    raw_edges: Vec<(String, String)>,
}

impl WaypointGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a waypoint and return the `NodeId` it will have (sequential from 0).
    pub fn add_node(&mut self, name: impl Into<String>, pos: Point) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push((name.into(), pos));
        id
    }

    /// Add a **directed** edge `from -> to`, appended to `from`'s neighbor list.
    pub fn add_neighbor(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.raw_edges.push((from.into(), to.into()));
    }

    /// Convenience: add edges in both directions.
    pub fn add_road(&mut self, a: &str, b: &str) {
        self.add_neighbor(a, b);
        self.add_neighbor(b, a);
    }

    /// Add a node together with its ordered outgoing neighbor list.
    pub fn add_node_with_neighbors(&mut self, name: &str, pos: Point, neighbors: &[&str]) -> NodeId {
        let id = self.add_node(name, pos);
        for &n in neighbors {
            self.add_neighbor(name, n);
        }
        id
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`WaypointGraph`].
    ///
    /// Fails on duplicate node names, positions outside `[0, 1]²`, edges to
    /// unknown names, and repeated edges.  Topology checks (dead ends,
    /// connectivity) live in [`validate`](crate::validate) so callers can
    /// inspect a broken graph before rejecting it.
    pub fn build(self) -> GraphResult<WaypointGraph> {
        let node_count = self.nodes.len();

        let mut name_index: FxHashMap<String, NodeId> = FxHashMap::default();
        name_index.reserve(node_count);
        for (i, (name, pos)) in self.nodes.iter().enumerate() {
            if !pos.is_normalized() {
                return Err(GraphError::PositionOutOfRange {
                    node: name.clone(),
                    x:    pos.x,
                    y:    pos.y,
                });
            }
            if name_index.insert(name.clone(), NodeId::from_index(i)).is_some() {
                return Err(GraphError::DuplicateNode(name.clone()));
            }
        }

        let resolve = |name: &str| {
            name_index
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::UnknownNodeName(name.to_owned()))
        };

        let mut edges: Vec<(NodeId, NodeId)> = Vec::with_capacity(self.raw_edges.len());
        for (from, to) in &self.raw_edges {
            let edge = (resolve(from)?, resolve(to)?);
            if edges.contains(&edge) {
                return Err(GraphError::DuplicateEdge { from: from.clone(), to: to.clone() });
            }
            edges.push(edge);
        }

        // Stable sort keeps each node's neighbors in insertion order.
        edges.sort_by_key(|&(from, _)| from.0);

        let adjacency: Vec<NodeId> = edges.iter().map(|&(_, to)| to).collect();

        let mut adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &edges {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[node_count] as usize, adjacency.len());

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, (_, pos))| NodeEntry {
                point: [pos.x, pos.y],
                id:    NodeId::from_index(i),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let (names, positions): (Vec<String>, Vec<Point>) = self.nodes.into_iter().unzip();

        Ok(WaypointGraph {
            names,
            positions,
            adj_start,
            adjacency,
            name_index,
            spatial_idx,
        })
    }
}
