//! `wp-output`: frame-trace writers for the rust_wp simulation.
//!
//! Two backends are provided:
//!
//! | Backend       | Files created                                    |
//! |---------------|--------------------------------------------------|
//! | CSV           | `frames.csv`, `tick_summaries.csv`               |
//! | JSON lines    | `frames.jsonl`, `tick_summaries.jsonl`           |
//!
//! Both implement [`OutputWriter`] and are driven by [`FrameObserver`],
//! which implements `wp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wp_output::{CsvWriter, FrameObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FrameObserver::new(writer, 1);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod jsonl;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use jsonl::JsonLinesWriter;
pub use observer::FrameObserver;
pub use row::{SpriteRow, TickSummaryRow};
pub use writer::OutputWriter;
