//! Topology checks run once at startup.
//!
//! Route selection has no fallback: an agent that reaches a node with no
//! outgoing edges can never leave, and a region that cannot reach the rest
//! of the map traps every agent that wanders in.  `validate` rejects both.

use std::collections::VecDeque;

use wp_core::NodeId;

use crate::{GraphError, GraphResult, WaypointGraph};

/// Check that `graph` is non-empty, has no self loops, no dead ends, and is
/// strongly connected (every node reachable from every other).
///
/// Errors name the first offending node in index order.
pub fn validate(graph: &WaypointGraph) -> GraphResult<()> {
    if graph.is_empty() {
        return Err(GraphError::Empty);
    }

    for node in graph.nodes() {
        let neighbors = graph.neighbors_of(node)?;
        if neighbors.is_empty() {
            return Err(GraphError::DeadEnd(graph.name(node)?.to_owned()));
        }
        if neighbors.contains(&node) {
            return Err(GraphError::SelfLoop(graph.name(node)?.to_owned()));
        }
    }

    let root = NodeId(0);

    // Forward: everything reachable from root.
    let forward = reachable(graph.node_count(), root, |n| {
        graph.neighbors_of(n).map(<[NodeId]>::to_vec).unwrap_or_default()
    });
    if let Some(missing) = first_unvisited(&forward) {
        return Err(GraphError::Disconnected {
            from: graph.name(root)?.to_owned(),
            to:   graph.name(missing)?.to_owned(),
        });
    }

    // Reverse: root reachable from everything.
    let mut reverse: Vec<Vec<NodeId>> = vec![Vec::new(); graph.node_count()];
    for from in graph.nodes() {
        for &to in graph.neighbors_of(from)? {
            reverse[to.index()].push(from);
        }
    }
    let backward = reachable(graph.node_count(), root, |n| reverse[n.index()].clone());
    if let Some(missing) = first_unvisited(&backward) {
        return Err(GraphError::Disconnected {
            from: graph.name(missing)?.to_owned(),
            to:   graph.name(root)?.to_owned(),
        });
    }

    Ok(())
}

/// Breadth-first reachability from `start`.
fn reachable<F>(node_count: usize, start: NodeId, mut next: F) -> Vec<bool>
where
    F: FnMut(NodeId) -> Vec<NodeId>,
{
    let mut seen = vec![false; node_count];
    let mut queue = VecDeque::new();
    seen[start.index()] = true;
    queue.push_back(start);
    while let Some(n) = queue.pop_front() {
        for m in next(n) {
            if !seen[m.index()] {
                seen[m.index()] = true;
                queue.push_back(m);
            }
        }
    }
    seen
}

fn first_unvisited(seen: &[bool]) -> Option<NodeId> {
    seen.iter().position(|&s| !s).map(|i| NodeId(i as u32))
}
