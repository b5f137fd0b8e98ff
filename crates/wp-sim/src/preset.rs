//! The Hawkins scene: a 3×3 street grid, three walkers and eight buildings.

use wp_agent::Visibility;
use wp_core::SimConfig;
use wp_graph::{GraphSpec, NodeSpec};
use wp_render::{Landmark, ProjectionConfig};

use crate::{AgentSpec, SceneSpec};

/// The street grid.  Top / middle / bottom rows at y = 0.25 / 0.55 / 0.80,
/// left / middle / right columns at x = 0.15 / 0.50 / 0.85.
pub fn hawkins_graph() -> GraphSpec {
    GraphSpec {
        nodes: vec![
            NodeSpec::new("TL", 0.15, 0.25, &["TM", "ML"]),
            NodeSpec::new("TM", 0.50, 0.25, &["TL", "TR", "C"]),
            NodeSpec::new("TR", 0.85, 0.25, &["TM", "MR"]),
            NodeSpec::new("ML", 0.15, 0.55, &["TL", "BL", "C"]),
            NodeSpec::new("C",  0.50, 0.55, &["TM", "BM", "ML", "MR"]),
            NodeSpec::new("MR", 0.85, 0.55, &["TR", "BR", "C"]),
            NodeSpec::new("BL", 0.15, 0.80, &["ML", "BM"]),
            NodeSpec::new("BM", 0.50, 0.80, &["BL", "BR", "C"]),
            NodeSpec::new("BR", 0.85, 0.80, &["MR", "BM"]),
        ],
    }
}

pub fn hawkins_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new("mike", "ML", "C", 0.0015).with_quotes(&[
            "El, I love you!",
            "Friends don't lie.",
            "You're my superhero.",
            "I never gave up on you.",
            "You're the most important thing to me.",
            "I love you more than anything.",
            "We aren't kids anymore.",
            "I promise.",
            "Crazy together.",
        ]),
        AgentSpec::new("eleven", "TR", "TM", 0.0015).with_quotes(&[
            "Me too.",
            "I love you, Mike.",
            "You are my home.",
            "Better... together.",
            "Friends don't lie.",
            "Mike...",
            "Halfway happy.",
            "Promise?",
        ]),
        AgentSpec::new("demogorgon", "C", "BM", 0.002)
            .with_quotes(&[
                "RRRAAAARRGGHH!",
                "*screeching*",
                "*guttural growl*",
                "*hiss*",
                "...",
            ])
            .with_visibility(Visibility::UpsideDownOnly),
    ]
}

pub fn hawkins_landmarks() -> Vec<Landmark> {
    vec![
        Landmark::new("hospital",   "Hawkins Memorial Hospital", 0.10, 0.70),
        Landmark::new("library",    "Hawkins Public Library",    0.45, 0.40),
        Landmark::new("school",     "Hawkins Middle School",     0.10, 0.15),
        Landmark::new("arcade",     "The Palace Arcade",         0.90, 0.70),
        Landmark::new("police",     "Police Station",            0.60, 0.82),
        Landmark::new("store",      "Melvald's General Store",   0.40, 0.15),
        Landmark::new("pizza",      "Surfer Boy Pizza",          0.35, 0.82),
        Landmark::new("house_mike", "Wheeler's House",           0.85, 0.45),
    ]
}

/// The full Hawkins scene with the given config.
pub fn hawkins(config: SimConfig) -> SceneSpec {
    SceneSpec {
        config,
        graph:      hawkins_graph(),
        agents:     hawkins_agents(),
        landmarks:  hawkins_landmarks(),
        projection: ProjectionConfig::default(),
        viewport:   None,
    }
}
