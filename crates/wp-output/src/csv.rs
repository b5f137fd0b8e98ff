//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SpriteRow, TickSummaryRow};

/// Writes frame traces to two CSV files.
pub struct CsvWriter {
    frames:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record([
            "tick", "agent_id", "name", "screen_x", "screen_y", "flip_x", "bounce_px", "speech",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "arrivals", "speech_started", "speech_ended", "frozen"])?;

        Ok(Self {
            frames,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_sprites(&mut self, rows: &[SpriteRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.name.clone(),
                format!("{:.3}", row.screen_x),
                format!("{:.3}", row.screen_y),
                (row.flip_x as u8).to_string(),
                format!("{:.3}", row.bounce_px),
                row.speech.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.arrivals.to_string(),
            row.speech_started.to_string(),
            row.speech_ended.to_string(),
            row.frozen.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
