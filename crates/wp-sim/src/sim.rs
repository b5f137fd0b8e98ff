//! The `Sim` struct and its driver loop.

use tracing::{debug, info};

use wp_agent::{Agent, AgentRngs, Dimension, SimulationState};
use wp_core::{NodeId, Point, SimClock, SimConfig, Tick};
use wp_engine::{Engine, RouteSelector, TickReport, UniformRandom};
use wp_graph::WaypointGraph;
use wp_render::{project_frame, Landmark, ProjectionConfig, RenderFrame, SceneView, Viewport};

use crate::{SimError, SimObserver, SimResult, TickSource};

/// A running scene: graph, agents, RNGs, and the host-side display mode.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// `Sim` owns everything a tick touches, so stepping it needs nothing but
/// `&mut self`.  Rendering goes through [`frame`](Self::frame), which only
/// borrows.
pub struct Sim<S: RouteSelector = UniformRandom> {
    /// Seed, speech tuning, fault policy, …
    pub config: SimConfig,

    /// Counts ticks that actually ran and maps them to nominal seconds.
    pub clock: SimClock,

    /// Validated at build time and never mutated afterwards.
    pub graph: WaypointGraph,

    pub state: SimulationState,

    /// Per-agent deterministic RNGs, parallel to `state.agents`.
    pub rngs: AgentRngs,

    pub engine: Engine<S>,

    pub landmarks:  Vec<Landmark>,
    pub viewport:   Viewport,
    pub projection: ProjectionConfig,

    pub(crate) paused:    bool,
    pub(crate) dimension: Dimension,
}

impl<S: RouteSelector> std::fmt::Debug for Sim<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("tick", &self.state.tick)
            .field("agents", &self.state.len())
            .field("nodes", &self.graph.node_count())
            .field("paused", &self.paused)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl<S: RouteSelector> Sim<S> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one tick.  Returns `None` without touching any agent while
    /// paused.
    pub fn step(&mut self) -> SimResult<Option<TickReport>> {
        if self.paused {
            return Ok(None);
        }
        let report = self
            .engine
            .tick(&mut self.state, &self.graph, self.rngs.as_mut_slice())?;
        self.clock.advance();
        if !report.frozen.is_empty() {
            debug!(tick = %report.tick, frozen = report.frozen.len(), "tick_froze_agents");
        }
        Ok(Some(report))
    }

    /// Attempt exactly `n` ticks (paused attempts count but change nothing).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer)?;
        }
        Ok(())
    }

    /// Run until `config.total_ticks` have been applied.
    ///
    /// Errors if `total_ticks` is unset or the sim is paused, since neither
    /// would ever finish.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick().ok_or_else(|| {
            SimError::Config("total_ticks is unset; use `drive` with a tick source".into())
        })?;
        if self.paused {
            return Err(SimError::Config("cannot run a paused simulation to completion".into()));
        }
        while self.state.tick < end {
            self.step_observed(observer)?;
        }
        self.finish(observer);
        Ok(())
    }

    /// Tick once per beat of `source` until it stops.
    pub fn drive<T: TickSource, O: SimObserver>(
        &mut self,
        source:   &mut T,
        observer: &mut O,
    ) -> SimResult<()> {
        while source.wait_for_tick() {
            self.step_observed(observer)?;
        }
        self.finish(observer);
        Ok(())
    }

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.state.tick);
        if let Some(report) = self.step()? {
            observer.on_tick_end(&report);
        }
        if observer.wants_frames() {
            observer.on_frame(&self.frame());
        }
        Ok(())
    }

    fn finish<O: SimObserver>(&self, observer: &mut O) {
        info!(
            clock  = %self.clock,
            frozen = self.state.frozen_count(),
            "sim_finished"
        );
        observer.on_sim_end(self.state.tick);
    }

    // ── Display mode ──────────────────────────────────────────────────────

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, tick = %self.state.tick, "pause_changed");
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn set_dimension(&mut self, dimension: Dimension) {
        if self.dimension != dimension {
            info!(dimension = ?dimension, "dimension_changed");
        }
        self.dimension = dimension;
    }

    pub fn toggle_dimension(&mut self) -> Dimension {
        self.set_dimension(self.dimension.toggled());
        self.dimension
    }

    pub fn scene_view(&self) -> SceneView {
        SceneView { paused: self.paused, dimension: self.dimension }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Ticks applied so far.
    pub fn tick(&self) -> Tick {
        self.state.tick
    }

    /// Look up an agent's motion state by name.
    pub fn agent(&self, name: &str) -> SimResult<&Agent> {
        let id = self.state.find(name)?;
        Ok(self.state.agent(id)?)
    }

    /// Project the current state with the sim's viewport and display mode.
    pub fn frame(&self) -> RenderFrame<'_> {
        project_frame(
            &self.state,
            &self.landmarks,
            &self.viewport,
            &self.projection,
            self.scene_view(),
        )
    }

    /// Waypoint closest to a pixel position on the viewport.
    pub fn node_at_screen(&self, screen_x: f64, screen_y: f64) -> Option<NodeId> {
        self.graph.nearest_node(self.viewport.to_normalized(screen_x, screen_y))
    }

    /// Waypoint closest to each landmark, in landmark order.
    pub fn landmark_nodes(&self) -> Vec<(&str, Option<NodeId>)> {
        self.landmarks
            .iter()
            .map(|l| (l.id.as_str(), self.graph.nearest_node(l.position)))
            .collect()
    }

    /// Waypoint closest to a normalized point.
    pub fn nearest_node(&self, point: Point) -> Option<NodeId> {
        self.graph.nearest_node(point)
    }
}
