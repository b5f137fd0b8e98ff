//! Graph error type.

use thiserror::Error;

use wp_core::{NodeId, WpError};

/// Errors produced by `wp-graph`.
///
/// Every variant describes broken configuration data.  None of them is
/// transient, so callers should surface them rather than retry.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),

    #[error("no node named {0:?}")]
    UnknownNodeName(String),

    #[error("node {0:?} defined twice")]
    DuplicateNode(String),

    #[error("edge {from:?} -> {to:?} listed twice")]
    DuplicateEdge { from: String, to: String },

    #[error("node {node:?} at ({x}, {y}) is outside the unit square")]
    PositionOutOfRange { node: String, x: f64, y: f64 },

    #[error("node {0:?} lists itself as a neighbor")]
    SelfLoop(String),

    #[error("node {0:?} has no neighbors; agents arriving there would stall")]
    DeadEnd(String),

    #[error("node {to:?} is not reachable from {from:?}")]
    Disconnected { from: String, to: String },

    #[error("graph has no nodes")]
    Empty,
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for WpError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownNode(id)         => WpError::UnknownNode(id),
            GraphError::UnknownNodeName(name)   => WpError::UnknownNodeName(name),
            other                               => WpError::Config(other.to_string()),
        }
    }
}
