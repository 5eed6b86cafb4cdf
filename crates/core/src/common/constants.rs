//! Format constants.
//!
//! This module defines the constants shared by the parser and the window emitter:
//! 1. **Header:** The tokens of the optional Logisim header line.
//! 2. **Words:** Width, mask and rendering of a 32-bit memory word.

/// Tokens of the Logisim header line, compared case-insensitively.
pub const HEADER_TOKENS: [&str; 4] = ["v3.0", "hex", "words", "addressed"];

/// Canonical spelling of the header line.
pub const HEADER_LINE: &str = "v3.0 hex words addressed";

/// Maximum number of hex digits in a single word token.
pub const WORD_HEX_DIGITS: usize = 8;

/// Mask applied to every parsed word value.
pub const WORD_MASK: u64 = 0xFFFF_FFFF;

/// Rendering of an unset word when gaps are filled.
pub const ZERO_WORD: &str = "00000000";
