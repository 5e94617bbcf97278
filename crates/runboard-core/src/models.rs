//! Configuration models for runboard-core.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for one logging session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Explicit run directory. When `None`, a timestamped name under
    /// `runs/` is derived at construction.
    pub log_dir: Option<PathBuf>,
    /// Suffix appended to the derived directory name. Ignored when
    /// `log_dir` is explicit.
    pub comment: String,
    /// When false, every sink is a no-op and nothing touches the filesystem.
    pub write_to_disk: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            comment: String::new(),
            write_to_disk: true,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[must_use]
    pub fn without_disk(mut self) -> Self {
        self.write_to_disk = false;
        self
    }

    /// Run directory this session will write under: the explicit `log_dir`,
    /// or `runs/<time>_<hostname><comment>` when none was given.
    pub fn resolve_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => default_log_dir(&self.comment),
        }
    }
}

fn default_log_dir(comment: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%b%d_%H-%M-%S");
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "localhost".to_string());
    PathBuf::from("runs").join(format!("{stamp}_{host}{comment}"))
}

/// Binning parameters for one `add_histogram` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramOptions {
    /// Requested number of equal-width bins.
    pub bins: usize,
    /// Ceiling on the bin count. The request is clamped down when it
    /// exceeds this; no ceiling is applied when absent.
    pub max_bins: Option<usize>,
    /// Explicit `(min, max)` range. The observed extent of the values is
    /// used when absent.
    pub range: Option<(f64, f64)>,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            max_bins: None,
            range: None,
        }
    }
}

impl HistogramOptions {
    #[must_use]
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    #[must_use]
    pub fn with_max_bins(mut self, max_bins: usize) -> Self {
        self.max_bins = Some(max_bins);
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Bin count after the optional ceiling is applied.
    pub(crate) fn effective_bins(&self) -> usize {
        match self.max_bins {
            Some(max) if self.bins > max => max,
            _ => self.bins,
        }
    }
}
