//! Error types for loading taxonomy labels and writing results.
//!
//! Building and rendering a label tree cannot fail; malformed labels
//! degrade to flat trees. Only reading and writing files and exporting
//! overly deep outlines can go wrong, which is reported through
//! [LabelTreeError].

use std::path::PathBuf;
use thiserror::Error;

// =#========================================================================#=
// LABEL TREE ERROR
// =#========================================================================#=
/// Errors raised while reading label files or writing output.
#[derive(Error, Debug)]
pub enum LabelTreeError {
    /// Reading or writing a file failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a non-file source failed
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),

    /// Serializing an outline failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tree nests too deep to be exported as JSON
    #[error("outline depth {depth} exceeds the maximum of {max}")]
    OutlineTooDeep { depth: usize, max: usize },
}

impl LabelTreeError {
    /// Wraps an IO error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LabelTreeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, LabelTreeError>;
