//! Integration tests for wp-sim.

use std::time::{Duration, Instant};

use wp_agent::{Dimension, Facing};
use wp_core::{AgentId, NodeId, SimConfig, Tick, WpError};
use wp_engine::{AvoidBacktrack, TickReport};
use wp_graph::{GraphError, GraphSpec, NodeSpec};
use wp_render::RenderFrame;

use crate::{
    preset, AgentSpec, FixedTicks, FrameTimer, NoopObserver, Sim, SimBuilder, SimError,
    SimObserver, TickSource,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        seed: 42,
        total_ticks: Some(total_ticks),
        ..SimConfig::default()
    }
}

fn hawkins_sim(config: SimConfig) -> Sim {
    preset::hawkins(config).into_builder().build().unwrap()
}

/// A ↔ B ↔ C in a line.
fn line_spec() -> GraphSpec {
    GraphSpec {
        nodes: vec![
            NodeSpec::new("A", 0.1, 0.5, &["B"]),
            NodeSpec::new("B", 0.5, 0.5, &["A", "C"]),
            NodeSpec::new("C", 0.9, 0.5, &["B"]),
        ],
    }
}

#[derive(Default)]
struct Counter {
    starts:   u64,
    ends:     u64,
    frames:   u64,
    finished: Option<Tick>,
    reports:  Vec<TickReport>,
    capture:  bool,
}

impl SimObserver for Counter {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.ends += 1;
        self.reports.push(report.clone());
    }

    fn wants_frames(&self) -> bool {
        self.capture
    }

    fn on_frame(&mut self, _frame: &RenderFrame<'_>) {
        self.frames += 1;
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn hawkins_preset_builds() {
        let sim = hawkins_sim(test_config(10));
        assert_eq!(sim.graph.node_count(), 9);
        assert_eq!(sim.graph.edge_count(), 24);
        assert_eq!(sim.state.len(), 3);
        assert_eq!(sim.rngs.len(), 3);
        assert_eq!(sim.landmarks.len(), 8);
        assert_eq!(sim.tick(), Tick(0));
        assert!(!sim.is_paused());
        assert_eq!(sim.dimension(), Dimension::Normal);
    }

    #[test]
    fn agents_placed_before_first_tick() {
        let sim = hawkins_sim(test_config(10));

        let mike = sim.agent("mike").unwrap();
        assert_eq!(mike.position, sim.graph.position_of(mike.current_node).unwrap());
        assert_eq!(mike.facing, Facing::Right);

        let eleven = sim.agent("eleven").unwrap();
        assert_eq!(sim.graph.name(eleven.current_node).unwrap(), "TR");
        assert_eq!(sim.graph.name(eleven.target_node).unwrap(), "TM");
        assert_eq!(eleven.facing, Facing::Left);
    }

    #[test]
    fn missing_graph_is_config_error() {
        let err = SimBuilder::new(SimConfig::default()).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn duplicate_agent_rejected() {
        let err = SimBuilder::new(SimConfig::default())
            .graph_spec(line_spec())
            .agent(AgentSpec::new("mike", "A", "B", 0.1))
            .agent(AgentSpec::new("mike", "B", "C", 0.1))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::DuplicateAgent(ref name) if name == "mike"));
    }

    #[test]
    fn negative_or_nan_speed_rejected() {
        for speed in [-0.1, f64::NAN, f64::INFINITY] {
            let err = SimBuilder::new(SimConfig::default())
                .graph_spec(line_spec())
                .agent(AgentSpec::new("mike", "A", "B", speed))
                .build()
                .unwrap_err();
            assert!(matches!(err, SimError::InvalidSpeed { .. }), "speed {speed}");
        }
    }

    #[test]
    fn bad_speech_chance_rejected() {
        for chance in [f64::NAN, -0.5, 1.5] {
            let config = SimConfig { speech_chance: chance, ..SimConfig::default() };
            let err = SimBuilder::new(config)
                .graph_spec(line_spec())
                .agent(AgentSpec::new("mike", "A", "B", 0.01))
                .build()
                .unwrap_err();
            assert!(matches!(err, SimError::InvalidSpeechChance(_)), "chance {chance}");
        }
    }

    #[test]
    fn zero_speed_allowed() {
        let sim = SimBuilder::new(SimConfig::default())
            .graph_spec(line_spec())
            .agent(AgentSpec::new("statue", "A", "B", 0.0))
            .build();
        assert!(sim.is_ok());
    }

    #[test]
    fn start_target_must_be_an_edge() {
        let err = SimBuilder::new(SimConfig::default())
            .graph_spec(line_spec())
            .agent(AgentSpec::new("mike", "A", "C", 0.1))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidEdge { ref from, ref to, .. } if from == "A" && to == "C"));
    }

    #[test]
    fn unknown_start_node_rejected() {
        let err = SimBuilder::new(SimConfig::default())
            .graph_spec(line_spec())
            .agent(AgentSpec::new("mike", "Z", "A", 0.1))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Graph(GraphError::UnknownNodeName(ref n)) if n == "Z"));
    }

    #[test]
    fn disconnected_graph_rejected() {
        let spec = GraphSpec {
            nodes: vec![
                NodeSpec::new("A", 0.1, 0.1, &["B"]),
                NodeSpec::new("B", 0.2, 0.1, &["A"]),
                NodeSpec::new("X", 0.8, 0.8, &["Y"]),
                NodeSpec::new("Y", 0.9, 0.8, &["X"]),
            ],
        };
        let err = SimBuilder::new(SimConfig::default())
            .graph_spec(spec)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Graph(GraphError::Disconnected { .. })));
    }

    #[test]
    fn dead_end_rejected() {
        let spec = GraphSpec {
            nodes: vec![
                NodeSpec::new("A", 0.1, 0.1, &["B"]),
                NodeSpec::new("B", 0.2, 0.1, &[]),
            ],
        };
        let err = SimBuilder::new(SimConfig::default())
            .graph_spec(spec)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Graph(GraphError::DeadEnd(ref n)) if n == "B"));
    }

    #[test]
    fn agent_ids_follow_declaration_order() {
        let sim = hawkins_sim(SimConfig::default());
        assert_eq!(sim.state.find("mike").unwrap(), AgentId(0));
        assert_eq!(sim.state.find("demogorgon").unwrap(), AgentId(2));
    }

    #[test]
    fn custom_selector_never_doubles_back() {
        let mut sim = preset::hawkins(SimConfig::default())
            .into_builder()
            .selector(AvoidBacktrack)
            .build()
            .unwrap();
        let mut obs = Counter::default();
        sim.run_ticks(5_000, &mut obs).unwrap();

        let mut last_node = vec![None; sim.state.len()];
        let mut arrivals = 0;
        for report in &obs.reports {
            for a in &report.arrivals {
                // Every hawkins node has 2+ neighbors, so no forced turnarounds.
                assert_ne!(Some(a.next_target), last_node[a.agent.index()]);
                last_node[a.agent.index()] = Some(a.node);
                arrivals += 1;
            }
        }
        assert!(arrivals > 0);
    }

    #[test]
    fn prebuilt_graph_accepted() {
        let graph = line_spec().build().unwrap();
        let sim = SimBuilder::new(SimConfig::default())
            .graph(graph)
            .agent(AgentSpec::new("mike", "B", "C", 0.25))
            .build()
            .unwrap();
        assert_eq!(sim.state.len(), 1);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_total_ticks() {
        let mut sim = hawkins_sim(test_config(120));
        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(sim.tick(), Tick(120));
        assert_eq!(sim.clock.current_tick, Tick(120));
        assert_eq!(obs.starts, 120);
        assert_eq!(obs.ends, 120);
        assert_eq!(obs.frames, 0);
        assert_eq!(obs.finished, Some(Tick(120)));
    }

    #[test]
    fn run_without_total_ticks_errors() {
        let mut sim = hawkins_sim(SimConfig::default());
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::Config(_))));
    }

    #[test]
    fn run_while_paused_errors() {
        let mut sim = hawkins_sim(test_config(10));
        sim.set_paused(true);
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::Config(_))));
    }

    #[test]
    fn drive_with_fixed_ticks() {
        let mut sim = hawkins_sim(SimConfig::default());
        let mut obs = Counter { capture: true, ..Counter::default() };
        sim.drive(&mut FixedTicks::new(50), &mut obs).unwrap();
        assert_eq!(sim.tick(), Tick(50));
        assert_eq!(obs.frames, 50);
        assert_eq!(obs.reports.first().map(|r| r.tick), Some(Tick(0)));
        assert_eq!(obs.reports.last().map(|r| r.tick), Some(Tick(49)));
    }

    #[test]
    fn run_ticks_counts_attempts() {
        let mut sim = hawkins_sim(SimConfig::default());
        sim.run_ticks(7, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick(), Tick(7));
    }

    #[test]
    fn all_agents_speak_with_certain_chance() {
        let config = SimConfig { speech_chance: 1.0, ..test_config(1) };
        let mut sim = hawkins_sim(config);
        let report = sim.step().unwrap().unwrap();
        assert_eq!(report.speech_started.len(), 3);
        for name in ["mike", "eleven", "demogorgon"] {
            assert!(sim.agent(name).unwrap().is_speaking(), "{name}");
        }
    }

    #[test]
    fn unknown_agent_lookup() {
        let sim = hawkins_sim(SimConfig::default());
        let err = sim.agent("hopper").unwrap_err();
        assert!(matches!(err, SimError::Core(WpError::UnknownAgent(ref n)) if n == "hopper"));
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = hawkins_sim(test_config(3_000));
        let mut b = hawkins_sim(test_config(3_000));
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(a.state.agents, b.state.agents);
    }

    #[test]
    fn corrupted_agent_frozen_others_continue() {
        let mut sim = hawkins_sim(SimConfig::default());
        let eleven = sim.state.find("eleven").unwrap();
        sim.state.agents[eleven.index()].target_node = NodeId(99);

        let report = sim.step().unwrap().unwrap();
        assert_eq!(report.frozen, vec![eleven]);
        assert!(sim.state.is_frozen(eleven));

        let before = sim.state.agents[eleven.index()].clone();
        sim.run_ticks(100, &mut NoopObserver).unwrap();
        assert_eq!(sim.state.agents[eleven.index()], before);
        assert!(sim.agent("mike").unwrap().progress > 0.0);
        assert_eq!(sim.state.frozen_count(), 1);
    }
}

// ── Pause & dimension ─────────────────────────────────────────────────────────

#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn paused_step_changes_nothing() {
        let mut sim = hawkins_sim(SimConfig::default());
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        let before = sim.state.agents.clone();

        assert!(sim.toggle_pause());
        assert!(sim.step().unwrap().is_none());

        let mut obs = Counter { capture: true, ..Counter::default() };
        sim.drive(&mut FixedTicks::new(30), &mut obs).unwrap();
        assert_eq!(sim.state.agents, before);
        assert_eq!(sim.tick(), Tick(10));
        assert_eq!(obs.starts, 30);
        assert_eq!(obs.ends, 0);
        assert_eq!(obs.frames, 30);
    }

    #[test]
    fn resume_continues_where_it_stopped() {
        let mut paused = hawkins_sim(SimConfig::default());
        let mut straight = hawkins_sim(SimConfig::default());

        paused.run_ticks(20, &mut NoopObserver).unwrap();
        paused.set_paused(true);
        paused.run_ticks(500, &mut NoopObserver).unwrap();
        paused.set_paused(false);
        paused.run_ticks(20, &mut NoopObserver).unwrap();

        straight.run_ticks(40, &mut NoopObserver).unwrap();
        assert_eq!(paused.state.agents, straight.state.agents);
    }

    #[test]
    fn paused_frame_has_no_bounce() {
        let mut sim = hawkins_sim(SimConfig::default());
        sim.run_ticks(21, &mut NoopObserver).unwrap();
        sim.set_paused(true);
        let frame = sim.frame();
        assert!(frame.paused);
        assert!(frame.sprites.iter().all(|s| s.bounce_px == 0.0));
    }

    #[test]
    fn demogorgon_only_in_upside_down() {
        let mut sim = hawkins_sim(SimConfig::default());
        assert!(sim.frame().sprite("demogorgon").is_none());
        assert_eq!(sim.frame().sprites.len(), 2);

        assert_eq!(sim.toggle_dimension(), Dimension::UpsideDown);
        let frame = sim.frame();
        assert!(frame.sprite("demogorgon").is_some());
        assert_eq!(frame.dimension, Dimension::UpsideDown);

        assert_eq!(sim.toggle_dimension(), Dimension::Normal);
    }

    #[test]
    fn hidden_agents_keep_moving() {
        let mut sim = hawkins_sim(SimConfig::default());
        let start = sim.agent("demogorgon").unwrap().position;
        sim.run_ticks(100, &mut NoopObserver).unwrap();
        assert_ne!(sim.agent("demogorgon").unwrap().position, start);
    }
}

// ── Spatial queries ───────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial_tests {
    use super::*;

    #[test]
    fn click_resolves_to_nearest_waypoint() {
        let sim = hawkins_sim(SimConfig::default());
        // Default viewport is 800×600: (400, 330) → (0.5, 0.55) = C.
        let c = sim.graph.node_id("C").unwrap();
        assert_eq!(sim.node_at_screen(400.0, 330.0), Some(c));
        let br = sim.graph.node_id("BR").unwrap();
        assert_eq!(sim.node_at_screen(790.0, 590.0), Some(br));
    }

    #[test]
    fn landmarks_resolve_to_corner_nodes() {
        let sim = hawkins_sim(SimConfig::default());
        let nodes = sim.landmark_nodes();
        let lookup = |id: &str| nodes.iter().find(|(l, _)| *l == id).and_then(|(_, n)| *n);
        assert_eq!(lookup("hospital"), Some(sim.graph.node_id("BL").unwrap()));
        assert_eq!(lookup("school"), Some(sim.graph.node_id("TL").unwrap()));
        assert_eq!(lookup("arcade"), Some(sim.graph.node_id("BR").unwrap()));
    }
}

// ── Tick sources ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod source_tests {
    use super::*;

    #[test]
    fn fixed_ticks_yields_exactly_n() {
        let mut src = FixedTicks::new(3);
        assert!(src.wait_for_tick());
        assert!(src.wait_for_tick());
        assert_eq!(src.remaining(), 1);
        assert!(src.wait_for_tick());
        assert!(!src.wait_for_tick());
        assert!(!src.wait_for_tick());
    }

    #[test]
    fn frame_timer_paces_and_stops() {
        let mut timer = FrameTimer::new(500).with_max_frames(4);
        assert_eq!(timer.interval(), Duration::from_millis(2));

        let start = Instant::now();
        let mut n = 0;
        while timer.wait_for_tick() {
            n += 1;
        }
        assert_eq!(n, 4);
        assert_eq!(timer.frames_emitted(), 4);
        // First frame is immediate, the remaining three wait one interval each.
        assert!(start.elapsed() >= Duration::from_millis(6));
    }

    #[test]
    fn zero_rate_clamped() {
        assert_eq!(FrameTimer::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn drive_with_frame_timer() {
        let mut sim = hawkins_sim(SimConfig::default());
        let mut timer = FrameTimer::new(1_000).with_max_frames(5);
        sim.drive(&mut timer, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick(), Tick(5));
    }
}

// ── Scene files ───────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod scene_tests {
    use super::*;
    use crate::SceneSpec;

    #[test]
    fn minimal_json_scene() {
        let json = r#"{
            "config": { "seed": 7, "speech_chance": 0.0 },
            "graph": { "nodes": [
                { "id": "A", "x": 0.2, "y": 0.5, "neighbors": ["B"] },
                { "id": "B", "x": 0.8, "y": 0.5, "neighbors": ["A"] }
            ]},
            "agents": [
                { "name": "walker", "start": "A", "target": "B", "speed": 0.5 }
            ]
        }"#;
        let scene: SceneSpec = serde_json::from_str(json).unwrap();
        assert_eq!(scene.config.seed, 7);
        assert_eq!(scene.config.speech_duration_ticks, 240);

        let mut sim = scene.into_builder().build().unwrap();
        sim.run_ticks(2, &mut NoopObserver).unwrap();
        let walker = sim.agent("walker").unwrap();
        assert_eq!(sim.graph.name(walker.current_node).unwrap(), "B");
        assert_eq!(walker.progress, 0.0);
        assert_eq!(walker.target_node, sim.graph.node_id("A").unwrap());
    }

    #[test]
    fn hawkins_scene_round_trips_through_json() {
        let scene = preset::hawkins(SimConfig::default());
        let json = serde_json::to_string(&scene).unwrap();
        let back: SceneSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn visibility_parsed_snake_case() {
        let json = r#"{ "name": "d", "start": "C", "target": "BM", "speed": 0.002,
                        "visibility": "upside_down_only" }"#;
        let spec: AgentSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.visibility, wp_agent::Visibility::UpsideDownOnly);
    }
}
