//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, SpriteRow, TickSummaryRow};

/// Trait implemented by the CSV and JSON-lines writers.
///
/// Errors surface through [`FrameObserver::take_error`][crate::FrameObserver::take_error]
/// when the writer is driven by a simulation.
pub trait OutputWriter {
    /// Write every sprite of one frame.
    fn write_sprites(&mut self, rows: &[SpriteRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
