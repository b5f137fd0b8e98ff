//! Pure state → frame projection.
//!
//! Every view borrows from the state it was built from, so a frame is cheap
//! to produce and cannot outlive (or mutate) the tick it describes.

use wp_agent::{Agent, AgentProfile, Dimension, Facing, SimulationState};
use wp_core::{AgentId, Tick};

use crate::{bounce_offset, Landmark, ProjectionConfig, Viewport};

/// Host-side display mode.  Not simulation state: toggling either field
/// never changes what the engine does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneView {
    pub paused:    bool,
    pub dimension: Dimension,
}

/// Everything a renderer needs to draw one agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpriteView<'a> {
    pub agent:    AgentId,
    pub name:     &'a str,
    pub screen_x: f64,
    pub screen_y: f64,
    /// Mirror the sprite horizontally (agent is heading left).
    pub flip_x:   bool,
    /// Upward lift in pixels; subtract from `screen_y` when drawing.
    pub bounce_px: f64,
    pub speech:   Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LandmarkView<'a> {
    pub id:       &'a str,
    pub label:    &'a str,
    pub screen_x: f64,
    pub screen_y: f64,
}

/// One drawable frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderFrame<'a> {
    pub tick:      Tick,
    pub dimension: Dimension,
    pub paused:    bool,
    pub sprites:   Vec<SpriteView<'a>>,
    pub landmarks: Vec<LandmarkView<'a>>,
}

impl RenderFrame<'_> {
    pub fn sprite(&self, name: &str) -> Option<&SpriteView<'_>> {
        self.sprites.iter().find(|s| s.name == name)
    }
}

/// Project a single agent.  Returns `None` when the agent is hidden in the
/// current dimension.
pub fn project_agent<'a>(
    id:       AgentId,
    agent:    &'a Agent,
    profile:  &'a AgentProfile,
    viewport: &Viewport,
    cfg:      &ProjectionConfig,
    scene:    SceneView,
) -> Option<SpriteView<'a>> {
    if !profile.visibility.is_visible_in(scene.dimension) {
        return None;
    }
    let (screen_x, screen_y) = viewport.to_screen(agent.position);
    let bounce_px = if scene.paused { 0.0 } else { bounce_offset(agent.progress, cfg) };

    Some(SpriteView {
        agent: id,
        name: &profile.name,
        screen_x,
        screen_y,
        flip_x: agent.facing == Facing::Left,
        bounce_px,
        speech: agent.speech_text(),
    })
}

/// Project the whole scene.  Sprites come out in agent-id order, which is
/// also draw order.
pub fn project_frame<'a>(
    state:     &'a SimulationState,
    landmarks: &'a [Landmark],
    viewport:  &Viewport,
    cfg:       &ProjectionConfig,
    scene:     SceneView,
) -> RenderFrame<'a> {
    let sprites = state
        .agents
        .iter()
        .zip(&state.profiles)
        .enumerate()
        .filter_map(|(i, (agent, profile))| {
            project_agent(AgentId(i as u32), agent, profile, viewport, cfg, scene)
        })
        .collect();

    let landmarks = landmarks
        .iter()
        .map(|l| {
            let (screen_x, screen_y) = viewport.to_screen(l.position);
            LandmarkView { id: &l.id, label: &l.label, screen_x, screen_y }
        })
        .collect();

    RenderFrame {
        tick: state.tick,
        dimension: scene.dimension,
        paused: scene.paused,
        sprites,
        landmarks,
    }
}
