//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `WpError` via `From` impls or wrap `WpError` as one variant.

use thiserror::Error;

use crate::{AgentId, NodeId};

/// The top-level error type for `wp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WpError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("unknown node name {0:?}")]
    UnknownNodeName(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("no agent named {0:?}")]
    UnknownAgent(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wp-*` crates.
pub type WpResult<T> = Result<T, WpError>;
