//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick corresponds to
//! one rendered animation frame.  Agent speeds are expressed as
//! progress-per-tick, so a faster driver simply animates faster.  `SimClock`
//! only maps ticks to seconds for logging, using the nominal frame rate:
//!
//!   elapsed_secs = tick / frame_rate_hz
//!
//! The default frame rate is 60 Hz, which is what the speech constants
//! (240 ticks ≈ 4 s) were tuned against.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to nominal seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Nominal ticks per second of the host frame loop.  Default: 60.
    pub frame_rate_hz: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(frame_rate_hz: u32) -> Self {
        Self {
            frame_rate_hz,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// Nominal seconds elapsed since tick 0.  Zero if the frame rate is zero.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        if self.frame_rate_hz == 0 {
            return 0.0;
        }
        self.current_tick.0 as f64 / self.frame_rate_hz as f64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── FaultPolicy ───────────────────────────────────────────────────────────────

/// What a tick does when one agent's update fails (e.g. it references a node
/// that is not in the graph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FaultPolicy {
    /// Leave the agent exactly as it was, mark it frozen, and keep ticking
    /// every other agent.
    #[default]
    Freeze,
    /// Stop the tick and return the error to the caller.  No agent's state
    /// changes and the tick counter does not advance.
    Abort,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Chance per tick that a quiet agent starts talking.
pub const DEFAULT_SPEECH_CHANCE: f64 = 0.0012;

/// Ticks a speech bubble stays up (~4 s at 60 Hz).
pub const DEFAULT_SPEECH_DURATION_TICKS: u32 = 240;

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from JSON by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks to run when driven by `Sim::run`.  `None` runs until the tick
    /// source stops.
    pub total_ticks: Option<u64>,

    /// Nominal host frame rate, only used for clock display.
    pub frame_rate_hz: u32,

    /// Probability per tick that a silent agent with quotes starts speaking.
    pub speech_chance: f64,

    /// How many ticks a started speech stays visible.
    pub speech_duration_ticks: u32,

    /// Per-agent failure handling inside a tick.
    pub fault_policy: FaultPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  0,
            total_ticks:           None,
            frame_rate_hz:         60,
            speech_chance:         DEFAULT_SPEECH_CHANCE,
            speech_duration_ticks: DEFAULT_SPEECH_DURATION_TICKS,
            fault_policy:          FaultPolicy::Freeze,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound), if any.
    #[inline]
    pub fn end_tick(&self) -> Option<Tick> {
        self.total_ticks.map(Tick)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.frame_rate_hz)
    }
}
