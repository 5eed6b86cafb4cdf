//! Common types shared by the parser, image and emitter.
//!
//! This module provides the building blocks used across the crate:
//! 1. **Address Types:** A strong type for word addresses.
//! 2. **Constants:** Header tokens, word width and mask.
//! 3. **Error Handling:** The crate-wide error enum and result alias.

/// Word address type.
pub mod addr;

/// Format constants.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::WordAddr;
pub use constants::{WORD_HEX_DIGITS, WORD_MASK, ZERO_WORD};
pub use error::{Error, Result};
