//! Loading taxonomy labels from line-based sources.
//!
//! Taxonomy files hold one label per line, e.g.
//! ```text
//! 1 Universe, creation
//! 1.1 Sky
//! 1.1.1 Sun
//! ```
//! Lines are trimmed and blank lines skipped. No further validation is
//! done here; see [split_label](crate::parser::label_grammar::split_label).

use crate::parser::parsing_error::{LabelTreeError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads labels from any buffered reader, one per line.
///
/// # Errors
/// Returns [LabelTreeError::Stream] if reading fails (including invalid UTF-8).
///
/// # Examples
/// ```
/// # use labeltree::parser::label_source::read_labels;
/// let input = "1 Universe\n\n  1.1 Sky  \n";
/// let labels = read_labels(input.as_bytes()).unwrap();
/// assert_eq!(labels, vec!["1 Universe", "1.1 Sky"]);
/// ```
pub fn read_labels<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            labels.push(label.to_string());
        }
    }
    Ok(labels)
}

/// Reads labels from a taxonomy file, one per line.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// Returns [LabelTreeError::Io] carrying the path if the file cannot be
/// opened or read.
pub fn read_label_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LabelTreeError::io(path, e))?;
    let labels = read_labels(BufReader::new(file)).map_err(|e| match e {
        LabelTreeError::Stream(source) => LabelTreeError::io(path, source),
        other => other,
    })?;
    debug!(path = %path.display(), count = labels.len(), "read taxonomy labels");
    Ok(labels)
}
