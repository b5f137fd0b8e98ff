//! Simulation observer trait for progress reporting and frame capture.

use wp_core::Tick;
use wp_engine::TickReport;
use wp_render::RenderFrame;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::drive`][crate::Sim::drive] around every tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival logger
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         self.0 += report.arrivals.len();
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each tick, including ticks swallowed by a pause.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick that actually ran (not while paused).
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Return `true` to receive a projected frame after every tick.
    ///
    /// Projection is skipped entirely when this is `false`.
    fn wants_frames(&self) -> bool {
        false
    }

    /// Called with the projected scene after each tick when
    /// [`wants_frames`](Self::wants_frames) is `true`.
    fn on_frame(&mut self, _frame: &RenderFrame<'_>) {}

    /// Called once when `run`/`drive` returns normally.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
