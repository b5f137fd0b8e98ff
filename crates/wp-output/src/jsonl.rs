//! JSON-lines output backend: one JSON object per line.
//!
//! Creates `frames.jsonl` and `tick_summaries.jsonl`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::writer::OutputWriter;
use crate::{OutputResult, SpriteRow, TickSummaryRow};

pub struct JsonLinesWriter {
    frames:    BufWriter<File>,
    summaries: BufWriter<File>,
    finished:  bool,
}

impl JsonLinesWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            frames:    BufWriter::new(File::create(dir.join("frames.jsonl"))?),
            summaries: BufWriter::new(File::create(dir.join("tick_summaries.jsonl"))?),
            finished:  false,
        })
    }
}

fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> OutputResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    Ok(())
}

impl OutputWriter for JsonLinesWriter {
    fn write_sprites(&mut self, rows: &[SpriteRow]) -> OutputResult<()> {
        for row in rows {
            write_line(&mut self.frames, row)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        write_line(&mut self.summaries, row)
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
