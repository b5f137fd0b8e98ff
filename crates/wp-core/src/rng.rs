//! Deterministic per-agent RNG and the `RandomSource` injection seam.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so one agent's draws (route picks, speech
//!   rolls) never shift another agent's sequence.
//! - Adding agents at the end of the scene does not disturb the seeds of
//!   existing agents.
//!
//! # Injection
//!
//! The engine never calls an ambient RNG.  Every random draw goes through the
//! [`RandomSource`] trait, so tests can substitute a scripted source and the
//! host can swap in any seeded generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The two random draws the simulation needs.
pub trait RandomSource {
    /// A uniformly distributed index in `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `true` with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool;

    /// Choose a uniformly random element of `slice`, or `None` if it is empty.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if slice.is_empty() {
            return None;
        }
        slice.get(self.pick_index(slice.len()))
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent at simulation init and keep it in a `Vec<AgentRng>`
/// parallel to the agent list.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        // NaN never fires; `gen_bool` would panic on it.
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
