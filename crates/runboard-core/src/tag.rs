//! Tag parsing: hierarchical tag strings to on-disk paths.
//!
//! A tag like `train/loss` names the metric `loss` inside the `train/`
//! subdirectory of the run root; its rows land in `{root}/train/loss.csv`.

use std::path::{Path, PathBuf};

use crate::error::{Result, RunboardError};

/// Split a tag into its directory prefix and metric leaf name.
///
/// Everything before the last `/` is the prefix (possibly empty); the rest
/// is the leaf used as the value column header. A tag with an empty leaf
/// only names a directory and is rejected.
pub fn split(tag: &str) -> Result<(&str, &str)> {
    let (prefix, leaf) = match tag.rsplit_once('/') {
        Some((prefix, leaf)) => (prefix, leaf),
        None => ("", tag),
    };
    if leaf.is_empty() {
        return Err(RunboardError::InvalidTag(tag.to_string()));
    }
    Ok((prefix, leaf))
}

/// Metric name of a tag: its final path segment.
pub fn leaf(tag: &str) -> Result<&str> {
    split(tag).map(|(_, leaf)| leaf)
}

/// The CSV file backing `tag` under `root`: `{root}/{tag}.csv`.
pub fn file_path(root: &Path, tag: &str) -> PathBuf {
    root.join(format!("{tag}.csv"))
}
