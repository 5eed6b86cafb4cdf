//! Logisim memory image converter library.
//!
//! This crate turns a Logisim `v3.0 hex words addressed` export into a flat list of
//! 32-bit words, one per line, ready for `$readmemh`-style memory initialisation:
//! 1. **Parser:** Classifies each input line and builds a sparse word image.
//! 2. **Image:** Ordered word-address to word mapping with last-writer-wins stores.
//! 3. **Window:** Selects the output address range and renders its words.
//! 4. **Loader:** Reads input, validates, and writes output for a whole run.

/// Common types (word addresses, constants, errors).
pub mod common;
/// Conversion options.
pub mod config;
/// Sparse memory image.
pub mod image;
/// File loading and end-to-end conversion.
pub mod loader;
/// Line classifier and image parser.
pub mod parser;
/// Conversion statistics.
pub mod stats;
/// Output window selection and rendering.
pub mod window;

/// Conversion options; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Crate-wide error type.
pub use crate::common::{Error, Result, WordAddr};
/// Sparse word image produced by the parser.
pub use crate::image::MemoryImage;
/// Runs a whole conversion from input path to output path.
pub use crate::loader::convert;
