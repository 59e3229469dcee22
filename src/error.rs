//! Fatal error conditions
//!
//! Per-word rejections are not errors; see [`crate::filter::Rejection`].

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort an import run
#[derive(Debug, Error)]
pub enum ImportError {
    /// Layout file missing or unreadable
    #[error("Cannot read keyboard layout {path:?}")]
    LayoutRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Layout file is not an array of arrays of strings
    #[error("Keyboard layout {path:?} is not a list of character rows")]
    LayoutParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Word list missing or unreadable
    #[error("Cannot read word list {path:?}")]
    WordListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bucket file could not be written
    #[error("Cannot write bucket file {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
