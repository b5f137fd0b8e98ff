//! hawkins: headless driver for the Hawkins waypoint scene.
//!
//! Builds the scene (the built-in preset, or a JSON scene file), runs it for
//! a fixed number of ticks, and writes projected frames plus per-tick event
//! counts to an output directory as CSV or JSON lines.
//!
//! ```text
//! hawkins --ticks 3600 --format jsonl --out ./trace
//! hawkins --scene my_town.json --realtime --upside-down
//! RUST_LOG=debug hawkins
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wp_core::SimConfig;
use wp_output::{CsvWriter, FrameObserver, JsonLinesWriter, OutputWriter};
use wp_sim::{preset, FrameTimer, SceneSpec, Sim};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Jsonl,
}

#[derive(Debug, Parser)]
#[command(name = "hawkins", about = "Run a waypoint scene and write frame traces")]
struct Args {
    /// JSON scene file.  Defaults to the built-in Hawkins scene.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Override the scene's RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory (created if missing).
    #[arg(long, default_value = "output")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Record every Nth frame; 0 writes tick summaries only.
    #[arg(long, default_value_t = 1)]
    frame_interval: u64,

    /// Start in the upside-down dimension.
    #[arg(long)]
    upside_down: bool,

    /// Pace ticks at the scene's frame rate instead of running flat out.
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut scene = load_scene(args.scene.as_deref())?;
    if let Some(seed) = args.seed {
        scene.config.seed = seed;
    }
    scene.config.total_ticks = Some(args.ticks);

    let mut sim = scene.into_builder().build().context("building scene")?;
    if args.upside_down {
        sim.toggle_dimension();
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    info!(
        agents = sim.state.len(),
        ticks  = args.ticks,
        seed   = sim.config.seed,
        out    = %args.out.display(),
        format = ?args.format,
        "run_starting"
    );

    let started = Instant::now();
    match args.format {
        Format::Csv   => run(&mut sim, CsvWriter::new(&args.out)?, &args)?,
        Format::Jsonl => run(&mut sim, JsonLinesWriter::new(&args.out)?, &args)?,
    }

    for (id, agent) in sim.state.ids().zip(&sim.state.agents) {
        let profile = sim.state.profile(id)?;
        info!(
            agent    = %profile.name,
            at       = sim.graph.name(agent.current_node)?,
            heading  = sim.graph.name(agent.target_node)?,
            progress = agent.progress,
            frozen   = sim.state.is_frozen(id),
            "final_state"
        );
    }
    info!(
        ticks   = sim.tick().0,
        wall_ms = started.elapsed().as_millis() as u64,
        "run_complete"
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_scene(path: Option<&Path>) -> Result<SceneSpec> {
    let Some(path) = path else {
        return Ok(preset::hawkins(SimConfig::default()));
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scene file {}", path.display()))?;
    let scene: SceneSpec = serde_json::from_str(&text)
        .with_context(|| format!("parsing scene file {}", path.display()))?;
    if scene.agents.is_empty() {
        bail!("scene file {} defines no agents", path.display());
    }
    Ok(scene)
}

fn run<W: OutputWriter>(sim: &mut Sim, writer: W, args: &Args) -> Result<()> {
    let mut observer = FrameObserver::new(writer, args.frame_interval);
    if args.realtime {
        let mut timer = FrameTimer::new(sim.config.frame_rate_hz).with_max_frames(args.ticks);
        sim.drive(&mut timer, &mut observer)?;
    } else {
        sim.run(&mut observer)?;
    }
    if let Some(err) = observer.take_error() {
        return Err(err).context("writing frame trace");
    }
    Ok(())
}
