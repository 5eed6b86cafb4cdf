//! File loading and the end-to-end conversion.
//!
//! This module ties the parser and the window emitter to the filesystem. It performs:
//! 1. **Loading:** Reads the whole input into memory and parses it.
//! 2. **Validation:** Rejects empty images before the output path is touched.
//! 3. **Writing:** Writes the rendered window in one go.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::{Error, Result};
use crate::config::Config;
use crate::parser::{self, ParsedImage};
use crate::stats::ConvertStats;
use crate::window;

/// Reads a text file whole.
///
/// Byte sequences that are not valid UTF-8 are dropped rather than rejected, so hex
/// digits on either side of one join up.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}

/// Reads and parses a Logisim image file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read. An input without any record is
/// not an error here; it yields an empty image.
pub fn load_image(path: &Path) -> Result<ParsedImage> {
    let text = read_source(path)?;
    let parsed = parser::parse_str(&text);
    info!(
        path = %path.display(),
        lines = parsed.stats.lines_read,
        records = parsed.stats.records,
        words = parsed.image.len(),
        "loaded image"
    );
    Ok(parsed)
}

/// Writes `text` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Outcome of a successful conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Where the output was written.
    pub output: PathBuf,
    /// Number of lines written.
    pub lines_written: usize,
    /// Counters for the whole run.
    pub stats: ConvertStats,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} lines to {}",
            self.lines_written,
            self.output.display()
        )
    }
}

/// Converts the image at `input` into a word list at `output`.
///
/// Nothing is written if the input holds no words.
///
/// # Errors
///
/// Returns [`Error::Io`] if the input cannot be read or the output cannot be written,
/// and [`Error::EmptyImage`] if no word was parsed.
pub fn convert(input: &Path, output: &Path, config: &Config) -> Result<Summary> {
    let ParsedImage { image, mut stats } = load_image(input)?;
    let emission = window::emit(&image, config)?;
    write_output(output, &emission.render())?;

    stats.lines_emitted = emission.len() as u64;
    stats.lines_filled = emission.filled;
    Ok(Summary {
        output: output.to_path_buf(),
        lines_written: emission.len(),
        stats,
    })
}
