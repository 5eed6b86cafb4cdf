//! Word address type.
//!
//! Logisim images are addressed in 32-bit words, not bytes. Wrapping the raw value
//! keeps word addresses from being mixed up with byte offsets, token offsets or
//! window counts.

use std::fmt;

/// A word address in a memory image.
///
/// Word `n` covers bytes `4n..4n + 4` of the equivalent byte-addressed memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordAddr(pub u64);

impl WordAddr {
    /// Creates a new word address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw word index.
    ///
    /// # Returns
    ///
    /// A new `WordAddr` wrapping the provided index.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit word index.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the address `offset` words past this one, or `None` on overflow.
    pub const fn checked_offset(self, offset: u64) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }
}

impl From<u64> for WordAddr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Display for WordAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
