//! What happened during a tick.

use wp_agent::Agent;
use wp_core::{AgentId, NodeId, Tick};

/// An agent reached `node` and chose `next_target`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrival {
    pub agent:       AgentId,
    pub node:        NodeId,
    pub next_target: NodeId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeechChange {
    Started,
    Ended,
}

/// Result of stepping a single agent.  `agent` is the new state, not yet
/// committed.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub agent:   Agent,
    pub arrival: Option<(NodeId, NodeId)>,
    pub speech:  Option<SpeechChange>,
}

/// Summary of one tick across all agents.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// The tick these events belong to (the state's tick before advancing).
    pub tick: Tick,
    pub arrivals:       Vec<Arrival>,
    pub speech_started: Vec<AgentId>,
    pub speech_ended:   Vec<AgentId>,
    /// Agents frozen during this tick.
    pub frozen:         Vec<AgentId>,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }

    pub(crate) fn record(&mut self, agent: AgentId, outcome: &StepOutcome) {
        if let Some((node, next_target)) = outcome.arrival {
            self.arrivals.push(Arrival { agent, node, next_target });
        }
        match outcome.speech {
            Some(SpeechChange::Started) => self.speech_started.push(agent),
            Some(SpeechChange::Ended)   => self.speech_ended.push(agent),
            None => {}
        }
    }

    /// `true` if nothing but plain movement happened.
    pub fn is_quiet(&self) -> bool {
        self.arrivals.is_empty()
            && self.speech_started.is_empty()
            && self.speech_ended.is_empty()
            && self.frozen.is_empty()
    }
}
