//! Core agent storage: `SimulationState` (what the engine mutates) and
//! `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! A tick needs `&mut SimulationState` and, for each agent, `&mut` to that
//! agent's RNG.  Keeping the RNGs in a separate `AgentRngs` lets the host
//! hand the engine any `RandomSource` slice (seeded generators in
//! production, scripted sources in tests) without touching the state type.

use wp_core::{AgentId, AgentRng, Tick, WpError, WpResult};

use crate::{Agent, AgentProfile};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, parallel to `SimulationState::agents`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [AgentRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// All mutable simulation state, owned by whatever drives the frame loop.
///
/// `agents`, `profiles` and `frozen` are parallel vectors indexed by
/// `AgentId`.  Agents are only ever appended, never removed, so ids stay
/// stable for the life of the scene.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    /// Ticks applied so far.
    pub tick: Tick,

    /// Motion state, rewritten every tick.
    pub agents: Vec<Agent>,

    /// Static name / quotes / visibility.
    pub profiles: Vec<AgentProfile>,

    /// `true` for agents the engine has stopped updating after a fault.
    pub frozen: Vec<bool>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an agent and return its id.
    pub fn push(&mut self, agent: Agent, profile: AgentProfile) -> AgentId {
        let id = AgentId::from_index(self.agents.len());
        self.agents.push(agent);
        self.profiles.push(profile);
        self.frozen.push(false);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agent ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn agent(&self, id: AgentId) -> WpResult<&Agent> {
        self.agents.get(id.index()).ok_or(WpError::AgentNotFound(id))
    }

    pub fn agent_mut(&mut self, id: AgentId) -> WpResult<&mut Agent> {
        self.agents.get_mut(id.index()).ok_or(WpError::AgentNotFound(id))
    }

    pub fn profile(&self, id: AgentId) -> WpResult<&AgentProfile> {
        self.profiles.get(id.index()).ok_or(WpError::AgentNotFound(id))
    }

    /// Look an agent up by its profile name.
    pub fn find(&self, name: &str) -> WpResult<AgentId> {
        self.profiles
            .iter()
            .position(|p| p.name == name)
            .map(|i| AgentId::from_index(i))
            .ok_or_else(|| WpError::UnknownAgent(name.to_owned()))
    }

    #[inline]
    pub fn is_frozen(&self, id: AgentId) -> bool {
        self.frozen.get(id.index()).copied().unwrap_or(false)
    }

    /// Stop updating `id`.  Its last good state stays visible.
    pub fn freeze(&mut self, id: AgentId) -> WpResult<()> {
        let slot = self.frozen.get_mut(id.index()).ok_or(WpError::AgentNotFound(id))?;
        *slot = true;
        Ok(())
    }

    pub fn frozen_count(&self) -> usize {
        self.frozen.iter().filter(|&&f| f).count()
    }
}
