//! `FrameObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use wp_core::Tick;
use wp_engine::TickReport;
use wp_render::RenderFrame;
use wp_sim::SimObserver;

use crate::row::{SpriteRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick summaries and projected frames to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct FrameObserver<W: OutputWriter> {
    writer:         W,
    frame_interval: u64,
    frames_seen:    u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> FrameObserver<W> {
    /// Record every `frame_interval`-th frame.  Zero disables frame output;
    /// tick summaries are always written.
    pub fn new(writer: W, frame_interval: u64) -> Self {
        Self {
            writer,
            frame_interval,
            frames_seen: 0,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after the sim returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for FrameObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);
    }

    fn wants_frames(&self) -> bool {
        self.frame_interval > 0
    }

    fn on_frame(&mut self, frame: &RenderFrame<'_>) {
        let due = self.frames_seen % self.frame_interval.max(1) == 0;
        self.frames_seen += 1;
        if !due || frame.sprites.is_empty() {
            return;
        }
        let rows: Vec<SpriteRow> = frame
            .sprites
            .iter()
            .map(|s| SpriteRow::from_view(frame, s))
            .collect();
        let result = self.writer.write_sprites(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
