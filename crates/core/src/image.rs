//! Sparse memory image.
//!
//! A [`MemoryImage`] maps word addresses to 32-bit words. Images exported by
//! Logisim are usually dense near address zero with long unset gaps elsewhere, so
//! the mapping is an ordered map rather than a flat array: the highest address is
//! not bounded by the size of the input.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::RangeInclusive;

use crate::common::{WORD_MASK, WordAddr};

/// An ordered, sparse mapping from word address to 32-bit value.
///
/// Writes follow last-writer-wins semantics: storing to an address that already
/// holds a word replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryImage {
    words: BTreeMap<WordAddr, u32>,
}

impl MemoryImage {
    /// Creates an empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` at `addr`, returning the word it replaced, if any.
    pub fn store(&mut self, addr: WordAddr, value: u32) -> Option<u32> {
        self.words.insert(addr, value)
    }

    /// Stores a raw parsed value at `addr`, keeping only its low 32 bits.
    pub fn store_masked(&mut self, addr: WordAddr, value: u64) -> Option<u32> {
        self.store(addr, (value & WORD_MASK) as u32)
    }

    /// Returns the word stored at `addr`.
    pub fn get(&self, addr: WordAddr) -> Option<u32> {
        self.words.get(&addr).copied()
    }

    /// Number of distinct addresses holding a word.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Highest address holding a word.
    pub fn max_addr(&self) -> Option<WordAddr> {
        self.words.keys().next_back().copied()
    }

    /// Iterates over all stored words in ascending address order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.words.range::<WordAddr, _>(..),
        }
    }

    /// Iterates over the stored words whose address lies in `range`.
    ///
    /// A range whose start lies past its end yields nothing.
    pub fn range(&self, range: RangeInclusive<WordAddr>) -> Iter<'_> {
        let (start, end) = range.into_inner();
        let inner = if start > end {
            self.words.range(start..start)
        } else {
            self.words.range(start..=end)
        };
        Iter { inner }
    }
}

/// Ascending iterator over `(address, word)` pairs of a [`MemoryImage`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Range<'a, WordAddr, u32>,
}

impl Iterator for Iter<'_> {
    type Item = (WordAddr, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(addr, word)| (*addr, *word))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a MemoryImage {
    type Item = (WordAddr, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(WordAddr, u32)> for MemoryImage {
    fn from_iter<T: IntoIterator<Item = (WordAddr, u32)>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
