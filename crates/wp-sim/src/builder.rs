//! Fluent builder for constructing a [`Sim`].

use rustc_hash::FxHashSet;
use tracing::info;

use wp_agent::{Agent, AgentRngs, Dimension, SimulationState};
use wp_core::SimConfig;
use wp_engine::{Engine, EngineParams, RouteSelector, UniformRandom};
use wp_graph::{validate, GraphSpec, WaypointGraph};
use wp_render::{Landmark, ProjectionConfig, Viewport};

use crate::{AgentSpec, Sim, SimError, SimResult};

/// Viewport used when none is supplied.
pub const DEFAULT_VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

enum GraphInput {
    Built(WaypointGraph),
    Spec(GraphSpec),
}

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, speech tuning, fault policy, …
/// - a graph, via [`graph`](Self::graph) or [`graph_spec`](Self::graph_spec)
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                       |
/// |-------------------|-------------------------------|
/// | `.agent(a)`       | no agents                     |
/// | `.landmarks(v)`   | none                          |
/// | `.viewport(v)`    | [`DEFAULT_VIEWPORT`]          |
/// | `.projection(p)`  | `ProjectionConfig::default()` |
/// | `.selector(s)`    | [`UniformRandom`]             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .graph_spec(spec)
///     .agent(AgentSpec::new("mike", "ML", "C", 0.0015))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: RouteSelector = UniformRandom> {
    config:     SimConfig,
    graph:      Option<GraphInput>,
    agents:     Vec<AgentSpec>,
    landmarks:  Vec<Landmark>,
    viewport:   Viewport,
    projection: ProjectionConfig,
    selector:   S,
}

impl SimBuilder<UniformRandom> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            graph:      None,
            agents:     Vec::new(),
            landmarks:  Vec::new(),
            viewport:   DEFAULT_VIEWPORT,
            projection: ProjectionConfig::default(),
            selector:   UniformRandom,
        }
    }
}

impl<S: RouteSelector> SimBuilder<S> {
    /// Use an already-built graph.  It is still validated in `build`.
    pub fn graph(mut self, graph: WaypointGraph) -> Self {
        self.graph = Some(GraphInput::Built(graph));
        self
    }

    /// Build the graph from plain data during `build`.
    pub fn graph_spec(mut self, spec: GraphSpec) -> Self {
        self.graph = Some(GraphInput::Spec(spec));
        self
    }

    pub fn agent(mut self, agent: AgentSpec) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn agents(mut self, agents: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.agents.extend(agents);
        self
    }

    pub fn landmarks(mut self, landmarks: Vec<Landmark>) -> Self {
        self.landmarks = landmarks;
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn projection(mut self, projection: ProjectionConfig) -> Self {
        self.projection = projection;
        self
    }

    /// Swap the route-selection policy.
    pub fn selector<S2: RouteSelector>(self, selector: S2) -> SimBuilder<S2> {
        SimBuilder {
            config:     self.config,
            graph:      self.graph,
            agents:     self.agents,
            landmarks:  self.landmarks,
            viewport:   self.viewport,
            projection: self.projection,
            selector,
        }
    }

    /// Validate the graph and every agent, place agents on their starting
    /// edges, and return a ready-to-run [`Sim`].
    ///
    /// Every configuration problem is reported here, so a built `Sim` never
    /// freezes an agent on its first tick.
    pub fn build(self) -> SimResult<Sim<S>> {
        // ── Graph ─────────────────────────────────────────────────────────
        let graph = match self.graph {
            Some(GraphInput::Built(g)) => g,
            Some(GraphInput::Spec(spec)) => spec.build()?,
            None => return Err(SimError::Config("no waypoint graph supplied".into())),
        };
        validate(&graph)?;

        let chance = self.config.speech_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(SimError::InvalidSpeechChance(chance));
        }

        // ── Agents ────────────────────────────────────────────────────────
        let mut seen = FxHashSet::default();
        let mut state = SimulationState::new();
        for spec in &self.agents {
            if !seen.insert(spec.name.as_str()) {
                return Err(SimError::DuplicateAgent(spec.name.clone()));
            }
            if !spec.speed.is_finite() || spec.speed < 0.0 {
                return Err(SimError::InvalidSpeed {
                    agent: spec.name.clone(),
                    speed: spec.speed,
                });
            }
            let start  = graph.node_id(&spec.start)?;
            let target = graph.node_id(&spec.target)?;
            if !graph.has_edge(start, target) {
                return Err(SimError::InvalidEdge {
                    agent: spec.name.clone(),
                    from:  spec.start.clone(),
                    to:    spec.target.clone(),
                });
            }
            state.push(Agent::new(start, target, spec.speed), spec.profile());
        }

        // ── Engine and initial placement ──────────────────────────────────
        let engine = Engine::new(self.selector, EngineParams::from(&self.config));
        engine.place_all(&mut state, &graph)?;
        let rngs = AgentRngs::new(state.len(), self.config.seed);

        info!(
            nodes  = graph.node_count(),
            edges  = graph.edge_count(),
            agents = state.len(),
            seed   = self.config.seed,
            "sim_built"
        );

        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            graph,
            state,
            rngs,
            engine,
            landmarks:  self.landmarks,
            viewport:   self.viewport,
            projection: self.projection,
            paused:     false,
            dimension:  Dimension::Normal,
        })
    }
}
