//! Route selection: which neighbor an agent heads for after arriving.

use wp_core::{NodeId, RandomSource};

/// Picks the next target when an agent arrives at a node.
///
/// Implementations must return an element of `neighbors` (or `None` if it
/// is empty).  The engine treats `None` as a fault.
///
/// `came_from` is the node the agent just left.  `UniformRandom` ignores it;
/// it is there for policies that want to avoid doubling back.
pub trait RouteSelector {
    fn select<R: RandomSource>(
        &self,
        at:        NodeId,
        came_from: NodeId,
        neighbors: &[NodeId],
        rng:       &mut R,
    ) -> Option<NodeId>;
}

/// Uniform choice among all neighbors, including the one just departed.
///
/// On a node with a single neighbor this forces the agent straight back,
/// which is how a two-node map produces its back-and-forth pacing.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformRandom;

impl RouteSelector for UniformRandom {
    #[inline]
    fn select<R: RandomSource>(
        &self,
        _at:        NodeId,
        _came_from: NodeId,
        neighbors:  &[NodeId],
        rng:        &mut R,
    ) -> Option<NodeId> {
        rng.choose(neighbors).copied()
    }
}

/// Uniform choice that never doubles back unless the node is a dead end
/// apart from the edge just travelled.
///
/// Draws exactly one index per arrival, same as [`UniformRandom`], so
/// swapping policies keeps every agent's RNG stream aligned.
#[derive(Copy, Clone, Debug, Default)]
pub struct AvoidBacktrack;

impl RouteSelector for AvoidBacktrack {
    fn select<R: RandomSource>(
        &self,
        _at:       NodeId,
        came_from: NodeId,
        neighbors: &[NodeId],
        rng:       &mut R,
    ) -> Option<NodeId> {
        let forward = neighbors.iter().filter(|&&n| n != came_from).count();
        if forward == 0 {
            return rng.choose(neighbors).copied();
        }
        let pick = rng.pick_index(forward);
        neighbors.iter().copied().filter(|&n| n != came_from).nth(pick)
    }
}
