//! The summary writer: a tag-indexed registry of CSV sinks.
//!
//! `SummaryWriter` lazily opens one CSV file per metric tag on first write,
//! emits the format header followed by data rows, and manages flush/close
//! across every open sink. With disk writing disabled every tag is backed
//! by a no-op sink and the filesystem is never touched.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{Result, RunboardError};
use crate::hist;
use crate::models::{HistogramOptions, WriterConfig};
use crate::sink::{CsvSink, NullSink, Sink};
use crate::tag;

const STEP_COLUMN: &str = "global_step";
const BINS_COLUMN: &str = "bins";
const TIME_COLUMN: &str = "t";

/// Writes scalar, text, and histogram entries to per-tag CSV files under a
/// run directory.
///
/// Files are opened in append mode on the first write to each tag, so
/// re-running against an existing directory appends rather than truncates.
/// The writer is single-threaded; every call completes (or fails) on the
/// caller's thread before returning.
pub struct SummaryWriter {
    /// Run directory for this session; `None` when disk writing is disabled.
    log_dir: Option<PathBuf>,
    sinks: HashMap<String, Box<dyn Sink>>,
    closed: bool,
}

impl SummaryWriter {
    /// Create a writer for `config`.
    ///
    /// When disk writing is enabled the run directory is created eagerly;
    /// an existing directory is reused so logging can resume into it.
    pub fn new(config: WriterConfig) -> Result<Self> {
        let log_dir = if config.write_to_disk {
            let dir = config.resolve_log_dir();
            fs::create_dir_all(&dir).map_err(|source| RunboardError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            info!(log_dir = %dir.display(), "summary writer initialized");
            Some(dir)
        } else {
            info!("summary writer initialized without disk writing");
            None
        };

        Ok(Self {
            log_dir,
            sinks: HashMap::new(),
            closed: false,
        })
    }

    /// Convenience constructor for an explicit run directory.
    pub fn from_log_dir(log_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::new(WriterConfig::new().with_log_dir(log_dir))
    }

    /// Directory where CSV files are written, `None` when disk writing is
    /// disabled.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    /// Add scalar data to summary.
    pub fn add_scalar(
        &mut self,
        tag: &str,
        value: f64,
        step: Option<u64>,
        walltime: Option<f64>,
    ) -> Result<()> {
        self.ensure_open()?;
        let leaf = tag::leaf(tag)?;
        let header = [
            STEP_COLUMN.to_string(),
            leaf.to_string(),
            TIME_COLUMN.to_string(),
        ];
        let row = [format_step(step), value.to_string(), format_walltime(walltime)];

        let sink = self.sink_for(tag)?;
        sink.write_header(&header)?;
        sink.write_row(&row)?;
        Ok(())
    }

    /// Add text data to summary. The value column holds the text payload;
    /// commas, quotes, and newlines survive CSV quoting.
    pub fn add_text(
        &mut self,
        tag: &str,
        text: &str,
        step: Option<u64>,
        walltime: Option<f64>,
    ) -> Result<()> {
        self.ensure_open()?;
        let leaf = tag::leaf(tag)?;
        let header = [
            STEP_COLUMN.to_string(),
            leaf.to_string(),
            TIME_COLUMN.to_string(),
        ];
        let row = [format_step(step), text.to_string(), format_walltime(walltime)];

        let sink = self.sink_for(tag)?;
        sink.write_header(&header)?;
        sink.write_row(&row)?;
        Ok(())
    }

    /// Add a histogram of `values` to summary.
    ///
    /// One row is written per bin, pairing each bin's occurrence count with
    /// its left edge; the rightmost edge is dropped. The requested bin
    /// count is clamped to `options.max_bins` when a ceiling is supplied.
    pub fn add_histogram(
        &mut self,
        tag: &str,
        values: &[f64],
        step: Option<u64>,
        walltime: Option<f64>,
        options: HistogramOptions,
    ) -> Result<()> {
        self.ensure_open()?;
        let leaf = tag::leaf(tag)?;
        let header = [
            STEP_COLUMN.to_string(),
            BINS_COLUMN.to_string(),
            leaf.to_string(),
            TIME_COLUMN.to_string(),
        ];
        let histogram = hist::histogram(values, options.effective_bins(), options.range);
        let step_field = format_step(step);
        let time_field = format_walltime(walltime);

        let sink = self.sink_for(tag)?;
        sink.write_header(&header)?;
        for (count, edge) in histogram.bins() {
            sink.write_row(&[
                step_field.clone(),
                count.to_string(),
                edge.to_string(),
                time_field.clone(),
            ])?;
        }
        Ok(())
    }

    /// Flush buffered rows for every open sink without closing any of them.
    /// Callers may keep writing afterward.
    pub fn flush(&mut self) -> Result<()> {
        for sink in self.sinks.values_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Flush and release every open sink.
    ///
    /// Idempotent; after the first call any `add_*` fails with
    /// [`RunboardError::Closed`].
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.flush()?;
        self.sinks.clear();
        self.closed = true;
        if let Some(dir) = &self.log_dir {
            info!(log_dir = %dir.display(), "summary writer closed");
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(RunboardError::Closed);
        }
        Ok(())
    }

    /// Return the sink registered for `tag`, opening it on first use.
    ///
    /// The tag is validated before any filesystem access; a failed open
    /// leaves no registry entry behind, so the next call starts clean.
    fn sink_for(&mut self, tag_str: &str) -> Result<&mut Box<dyn Sink>> {
        let (prefix, _) = tag::split(tag_str)?;
        match self.sinks.entry(tag_str.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let sink: Box<dyn Sink> = match &self.log_dir {
                    Some(root) => {
                        if !prefix.is_empty() {
                            let dir = root.join(prefix);
                            fs::create_dir_all(&dir).map_err(|source| {
                                RunboardError::CreateDir {
                                    path: dir.clone(),
                                    source,
                                }
                            })?;
                        }
                        let path = tag::file_path(root, tag_str);
                        debug!(tag = tag_str, path = %path.display(), "opening csv sink");
                        Box::new(CsvSink::open(&path)?)
                    }
                    None => Box::new(NullSink),
                };
                Ok(entry.insert(sink))
            }
        }
    }
}

impl Drop for SummaryWriter {
    fn drop(&mut self) {
        // Best-effort close so buffered rows survive an unclosed writer.
        let _ = self.close();
    }
}

fn format_step(step: Option<u64>) -> String {
    step.map(|s| s.to_string()).unwrap_or_default()
}

fn format_walltime(walltime: Option<f64>) -> String {
    walltime.unwrap_or_else(now_seconds).to_string()
}

/// Wall-clock seconds since the unix epoch, fractional part included.
fn now_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 * 1e-6
}
