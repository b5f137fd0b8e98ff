//! Declarative scene description: graph, agents, landmarks and config.
//!
//! Everything references nodes by name.  Names are resolved to ids once, in
//! [`SimBuilder::build`](crate::SimBuilder::build).

use wp_agent::{AgentProfile, QuotePool, Visibility};
use wp_core::SimConfig;
use wp_graph::GraphSpec;
use wp_render::{Landmark, ProjectionConfig, Viewport};

use crate::SimBuilder;

/// One agent's starting edge, speed and personality.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub name:   String,
    /// Node the agent starts on.
    pub start:  String,
    /// First target; must be a neighbor of `start`.
    pub target: String,
    /// Edge fraction per tick.
    pub speed:  f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quotes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Visibility,
}

impl AgentSpec {
    pub fn new(name: &str, start: &str, target: &str, speed: f64) -> Self {
        Self {
            name:       name.to_owned(),
            start:      start.to_owned(),
            target:     target.to_owned(),
            speed,
            quotes:     Vec::new(),
            visibility: Visibility::Always,
        }
    }

    pub fn with_quotes(mut self, quotes: &[&str]) -> Self {
        self.quotes = quotes.iter().map(|q| (*q).to_owned()).collect();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub(crate) fn profile(&self) -> AgentProfile {
        AgentProfile::new(self.name.as_str())
            .with_quotes(QuotePool::new(self.quotes.iter().cloned()))
            .with_visibility(self.visibility)
    }
}

/// A complete scene as plain data, loadable from JSON with the `serde`
/// feature.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: SimConfig,
    pub graph:  GraphSpec,
    pub agents: Vec<AgentSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub landmarks: Vec<Landmark>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub projection: ProjectionConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub viewport: Option<Viewport>,
}

impl SceneSpec {
    /// Turn the scene into a builder with the default route selector.
    pub fn into_builder(self) -> SimBuilder {
        let mut b = SimBuilder::new(self.config)
            .graph_spec(self.graph)
            .agents(self.agents)
            .landmarks(self.landmarks)
            .projection(self.projection);
        if let Some(vp) = self.viewport {
            b = b.viewport(vp);
        }
        b
    }
}
