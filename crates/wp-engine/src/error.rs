use thiserror::Error;
use wp_core::{AgentId, NodeId};
use wp_graph::GraphError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("graph lookup failed: {0}")]
    Graph(#[from] GraphError),

    #[error("route selection found no neighbor of {0}")]
    NoRoute(NodeId),

    #[error("agent {agent} update failed: {source}")]
    Agent {
        agent:  AgentId,
        #[source]
        source: Box<EngineError>,
    },

    #[error("{rngs} random sources supplied for {agents} agents")]
    RngCountMismatch { agents: usize, rngs: usize },

    #[error("state columns disagree: {agents} agents, {profiles} profiles, {frozen} frozen flags")]
    StateShapeMismatch { agents: usize, profiles: usize, frozen: usize },
}

pub type EngineResult<T> = Result<T, EngineError>;
