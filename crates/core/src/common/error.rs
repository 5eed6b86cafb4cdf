//! Error definitions.
//!
//! Every failure of a conversion run is fatal, so a single error enum covers the
//! whole crate. It provides:
//! 1. **I/O failures:** Reading the input or writing the output, tagged with the path.
//! 2. **Empty images:** The input contained no address records.
//! 3. **Configuration:** A JSON configuration that could not be deserialized.
//!
//! Lines that fail to parse are not errors; see [`crate::parser::LineKind::Ignored`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Message shown when an input yields no words.
pub const EMPTY_IMAGE_MESSAGE: &str =
    "No words parsed. Is the input file in Logisim 'v3.0 hex words addressed' format?";

/// Errors produced while loading, converting or writing a memory image.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading from or writing to `path` failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying platform error.
        #[source]
        source: io::Error,
    },

    /// No word was parsed from the input.
    #[error("{}", EMPTY_IMAGE_MESSAGE)]
    EmptyImage,

    /// A JSON configuration could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
