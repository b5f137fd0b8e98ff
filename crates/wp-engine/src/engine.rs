//! The tick engine.

use tracing::{error, trace, warn};

use wp_agent::{Agent, Facing, QuotePool, SimulationState, Speech};
use wp_core::{AgentId, FaultPolicy, RandomSource, SimConfig};
use wp_core::time::{DEFAULT_SPEECH_CHANCE, DEFAULT_SPEECH_DURATION_TICKS};
use wp_graph::WaypointGraph;

use crate::{
    EngineError, EngineResult, RouteSelector, SpeechChange, StepOutcome, TickReport, UniformRandom,
};

/// Tunables the engine reads every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineParams {
    /// Chance per tick that a silent agent with quotes starts speaking.
    pub speech_chance: f64,
    /// Ticks a new speech bubble stays up.  Zero disables speech.
    pub speech_duration_ticks: u32,
    pub fault_policy: FaultPolicy,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            speech_chance:         DEFAULT_SPEECH_CHANCE,
            speech_duration_ticks: DEFAULT_SPEECH_DURATION_TICKS,
            fault_policy:          FaultPolicy::Freeze,
        }
    }
}

impl From<&SimConfig> for EngineParams {
    fn from(cfg: &SimConfig) -> Self {
        Self {
            speech_chance:         cfg.speech_chance,
            speech_duration_ticks: cfg.speech_duration_ticks,
            fault_policy:          cfg.fault_policy,
        }
    }
}

/// Advances agents along a [`WaypointGraph`].
///
/// # Type parameter
///
/// `S` must implement [`RouteSelector`].  The default is [`UniformRandom`];
/// swap it at compile time for a different policy with no runtime overhead.
///
/// The engine itself holds no per-agent state.  Everything it mutates lives
/// in the [`SimulationState`] and the RNG slice passed to [`tick`](Self::tick).
#[derive(Clone, Debug, Default)]
pub struct Engine<S: RouteSelector = UniformRandom> {
    pub selector: S,
    pub params:   EngineParams,
}

impl<S: RouteSelector> Engine<S> {
    pub fn new(selector: S, params: EngineParams) -> Self {
        Self { selector, params }
    }

    /// Recompute `position` and `facing` from the agent's edge and progress.
    pub fn place(&self, agent: &mut Agent, graph: &WaypointGraph) -> EngineResult<()> {
        let from = graph.position_of(agent.current_node)?;
        let to   = graph.position_of(agent.target_node)?;
        agent.position = from.lerp(to, agent.progress);
        agent.facing   = Facing::from_dx(to.x - from.x, agent.facing);
        Ok(())
    }

    /// Place every agent in `state` on its configured edge.
    ///
    /// Called once at startup so the first rendered frame is correct before
    /// any tick has run.
    pub fn place_all(&self, state: &mut SimulationState, graph: &WaypointGraph) -> EngineResult<()> {
        for (i, agent) in state.agents.iter_mut().enumerate() {
            self.place(agent, graph).map_err(|e| EngineError::Agent {
                agent:  AgentId::from_index(i),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    /// Compute one agent's next state without committing it.
    pub fn step_agent<R: RandomSource>(
        &self,
        agent:  &Agent,
        quotes: &QuotePool,
        graph:  &WaypointGraph,
        rng:    &mut R,
    ) -> EngineResult<StepOutcome> {
        let mut next = agent.clone();
        let mut arrival = None;

        next.progress += next.speed;

        if next.progress >= 1.0 {
            let came_from = next.current_node;
            next.current_node = next.target_node;
            next.progress = 0.0;

            let neighbors = graph.neighbors_of(next.current_node)?;
            let target = self
                .selector
                .select(next.current_node, came_from, neighbors, rng)
                .ok_or(EngineError::NoRoute(next.current_node))?;
            debug_assert!(neighbors.contains(&target), "selector returned a non-neighbor");
            next.target_node = target;
            arrival = Some((next.current_node, target));
        }

        self.place(&mut next, graph)?;

        let speech = self.step_speech(&mut next, quotes, rng);

        Ok(StepOutcome { agent: next, arrival, speech })
    }

    fn step_speech<R: RandomSource>(
        &self,
        agent:  &mut Agent,
        quotes: &QuotePool,
        rng:    &mut R,
    ) -> Option<SpeechChange> {
        if let Some(speech) = agent.speech.as_mut() {
            speech.timer = speech.timer.saturating_sub(1);
            if speech.timer == 0 {
                agent.speech = None;
                return Some(SpeechChange::Ended);
            }
            return None;
        }

        if quotes.is_empty() || self.params.speech_duration_ticks == 0 {
            return None;
        }
        if !rng.chance(self.params.speech_chance) {
            return None;
        }
        let line = rng.choose(quotes.lines())?;
        agent.speech = Some(Speech {
            text:  line.clone(),
            timer: self.params.speech_duration_ticks,
        });
        Some(SpeechChange::Started)
    }

    /// Advance every non-frozen agent by exactly one step.
    ///
    /// `rngs` must be parallel to `state.agents`.  Each agent draws only from
    /// its own source, so agent order never affects another agent's
    /// randomness.
    ///
    /// Every outcome is computed before any is committed, so an aborted tick
    /// leaves `state` exactly as it was.
    pub fn tick<R: RandomSource>(
        &self,
        state: &mut SimulationState,
        graph: &WaypointGraph,
        rngs:  &mut [R],
    ) -> EngineResult<TickReport> {
        let agents = state.agents.len();
        if state.profiles.len() != agents || state.frozen.len() != agents {
            return Err(EngineError::StateShapeMismatch {
                agents,
                profiles: state.profiles.len(),
                frozen:   state.frozen.len(),
            });
        }
        if rngs.len() != agents {
            return Err(EngineError::RngCountMismatch { agents, rngs: rngs.len() });
        }

        let mut report = TickReport::new(state.tick);
        let mut pending = Vec::with_capacity(agents);
        let mut newly_frozen = Vec::new();

        for (i, rng) in rngs.iter_mut().enumerate() {
            if state.frozen[i] {
                continue;
            }
            let id = AgentId::from_index(i);

            match self.step_agent(&state.agents[i], &state.profiles[i].quotes, graph, rng) {
                Ok(outcome) => pending.push((i, outcome)),
                Err(err) => match self.params.fault_policy {
                    FaultPolicy::Freeze => {
                        warn!(
                            agent = %id,
                            name  = %state.profiles[i].name,
                            error = %err,
                            "agent_frozen"
                        );
                        newly_frozen.push(i);
                    }
                    FaultPolicy::Abort => {
                        error!(agent = %id, error = %err, "tick_aborted");
                        return Err(EngineError::Agent { agent: id, source: Box::new(err) });
                    }
                },
            }
        }

        for (i, outcome) in pending {
            let id = AgentId::from_index(i);
            if let Some((node, next)) = outcome.arrival {
                trace!(agent = %id, node = %node, next = %next, "agent_arrived");
            }
            report.record(id, &outcome);
            state.agents[i] = outcome.agent;
        }
        for i in newly_frozen {
            state.frozen[i] = true;
            report.frozen.push(AgentId::from_index(i));
        }

        state.tick = state.tick.offset(1);
        Ok(report)
    }
}

/// Functional form of [`Engine::tick`] with the default engine: consume a
/// state, return the next one.
pub fn advance<R: RandomSource>(
    mut state: SimulationState,
    graph:     &WaypointGraph,
    rngs:      &mut [R],
) -> EngineResult<SimulationState> {
    Engine::<UniformRandom>::default().tick(&mut state, graph, rngs)?;
    Ok(state)
}
