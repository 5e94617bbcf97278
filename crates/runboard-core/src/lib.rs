//! runboard-core: CSV-backed run metrics logging.
//!
//! A limited, flat-file take on the usual experiment-tracking summary
//! writer: scalar values, text events, and histograms land in per-tag
//! append-only CSV files under a run directory. One file per tag, a
//! slash-delimited tag hierarchy mapped to subdirectories, and a no-op
//! mode that keeps call sites unchanged when disk writing is off.
//!
//! ```no_run
//! use runboard_core::{SummaryWriter, WriterConfig};
//!
//! # fn main() -> runboard_core::Result<()> {
//! let mut writer = SummaryWriter::new(WriterConfig::new().with_comment("_baseline"))?;
//! writer.add_scalar("train/loss", 0.25, Some(0), None)?;
//! writer.close()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hist;
pub mod models;
pub mod writer;

mod sink;
mod tag;

pub use error::{Result, RunboardError};
pub use hist::Histogram;
pub use models::{HistogramOptions, WriterConfig};
pub use writer::SummaryWriter;
