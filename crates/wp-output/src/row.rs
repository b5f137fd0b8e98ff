//! Plain data row types written by output backends.

use serde::Serialize;

use wp_engine::TickReport;
use wp_render::{RenderFrame, SpriteView};

/// One visible agent in one projected frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteRow {
    pub tick:      u64,
    pub agent_id:  u32,
    pub name:      String,
    pub screen_x:  f64,
    pub screen_y:  f64,
    pub flip_x:    bool,
    pub bounce_px: f64,
    /// Empty when the agent is silent.
    pub speech:    String,
}

impl SpriteRow {
    pub fn from_view(frame: &RenderFrame<'_>, view: &SpriteView<'_>) -> Self {
        Self {
            tick:      frame.tick.0,
            agent_id:  view.agent.0,
            name:      view.name.to_owned(),
            screen_x:  view.screen_x,
            screen_y:  view.screen_y,
            flip_x:    view.flip_x,
            bounce_px: view.bounce_px,
            speech:    view.speech.unwrap_or_default().to_owned(),
        }
    }
}

/// Event counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub arrivals:       u32,
    pub speech_started: u32,
    pub speech_ended:   u32,
    pub frozen:         u32,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:           r.tick.0,
            arrivals:       r.arrivals.len() as u32,
            speech_started: r.speech_started.len() as u32,
            speech_ended:   r.speech_ended.len() as u32,
            frozen:         r.frozen.len() as u32,
        }
    }
}
