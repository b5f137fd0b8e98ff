use thiserror::Error;

use wp_core::WpError;
use wp_engine::EngineError;
use wp_graph::GraphError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Core(#[from] WpError),

    #[error("agent `{0}` is defined more than once")]
    DuplicateAgent(String),

    #[error("agent `{agent}` has invalid speed {speed} (must be finite and >= 0)")]
    InvalidSpeed { agent: String, speed: f64 },

    #[error("speech chance {0} must be within [0, 1]")]
    InvalidSpeechChance(f64),

    #[error("agent `{agent}` starts on `{from}` -> `{to}`, which is not an edge")]
    InvalidEdge { agent: String, from: String, to: String },
}

pub type SimResult<T> = Result<T, SimError>;
