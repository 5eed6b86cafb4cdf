//! Conversion configuration.
//!
//! This module defines the options that shape the output window. It provides:
//! 1. **Defaults:** Start address, count and fill policy used when nothing is specified.
//! 2. **Structure:** A [`Config`] built from CLI flags or deserialized from JSON.
//!
//! Configuration is built by the CLI from its flags, or use `Config::from_json` when
//! embedding the converter in another tool.

use serde::Deserialize;

use crate::common::{Result, WordAddr};

/// Default configuration constants for the converter.
mod defaults {
    /// First word address of the output window.
    pub const START: u64 = 0;

    /// Fill gaps with the zero word.
    pub const FILL_MISSING: bool = false;

    pub const fn start() -> u64 {
        START
    }

    pub const fn fill_missing() -> bool {
        FILL_MISSING
    }
}

/// Options controlling which words are emitted.
///
/// The window runs from `start` to `start + count - 1` inclusive. Without a
/// `count` it runs up to the highest address present in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// First word address of the output window.
    #[serde(default = "defaults::start")]
    pub start: u64,

    /// Number of addresses in the window. Zero or negative yields an empty window.
    #[serde(default)]
    pub count: Option<i64>,

    /// Emit `00000000` for unset addresses instead of skipping them.
    #[serde(default = "defaults::fill_missing")]
    pub fill_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: defaults::START,
            count: None,
            fill_missing: defaults::FILL_MISSING,
        }
    }
}

impl Config {
    /// Deserializes a configuration from a JSON object.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::Error::Config`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// First word address of the output window.
    pub const fn start_addr(&self) -> WordAddr {
        WordAddr::new(self.start)
    }
}
