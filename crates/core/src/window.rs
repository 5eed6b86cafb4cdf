//! Output window selection and rendering.
//!
//! The window is the inclusive address range `[start, end]` copied to the output:
//! `end` is `start + count - 1` when a count is given, otherwise the highest address
//! in the image. Every address in the window produces one line when it holds a word,
//! a zero line when it is unset and gaps are filled, and nothing otherwise.

use std::ops::RangeInclusive;

use tracing::info;

use crate::common::{Error, Result, WordAddr, ZERO_WORD};
use crate::config::Config;
use crate::image::MemoryImage;

/// An inclusive range of word addresses selected for output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    start: WordAddr,
    /// `None` when the requested count was zero or negative.
    end: Option<WordAddr>,
}

impl Window {
    /// Resolves the window for `image` from a start address and optional count.
    ///
    /// A count of zero or less selects nothing. `start + count - 1` saturates at the
    /// top of the address space. Without a count the window ends at the highest
    /// address in the whole image, so a start beyond it selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] if the image holds no words.
    pub fn resolve(image: &MemoryImage, start: WordAddr, count: Option<i64>) -> Result<Self> {
        let max_addr = image.max_addr().ok_or(Error::EmptyImage)?;
        let end = match count {
            None => Some(max_addr),
            Some(count) => u64::try_from(count)
                .ok()
                .filter(|&count| count > 0)
                .map(|count| WordAddr::new(start.val().saturating_add(count - 1))),
        };
        Ok(Self { start, end })
    }

    /// Resolves the window described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] if the image holds no words.
    pub fn from_config(image: &MemoryImage, config: &Config) -> Result<Self> {
        Self::resolve(image, config.start_addr(), config.count)
    }

    /// First address of the window.
    pub const fn start(&self) -> WordAddr {
        self.start
    }

    /// The covered address range, or `None` if the window is empty.
    pub fn bounds(&self) -> Option<RangeInclusive<WordAddr>> {
        self.end
            .filter(|&end| end >= self.start)
            .map(|end| self.start..=end)
    }

    /// Returns `true` if the window covers no address.
    pub fn is_empty(&self) -> bool {
        self.bounds().is_none()
    }

    /// Number of addresses covered, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        self.bounds().map_or(0, |range| {
            (range.end().val() - range.start().val()).saturating_add(1)
        })
    }

    /// Iterates over every address of the window with the word stored there, if any.
    pub fn slots<'a>(
        &self,
        image: &'a MemoryImage,
    ) -> impl Iterator<Item = (WordAddr, Option<u32>)> + 'a {
        let addrs = self
            .bounds()
            .map_or(1..=0, |range| range.start().val()..=range.end().val());
        addrs.map(move |addr| {
            let addr = WordAddr::new(addr);
            (addr, image.get(addr))
        })
    }
}

/// Formats one word as eight lowercase hex digits.
pub fn format_word(word: u32) -> String {
    format!("{word:08x}")
}

/// Lines produced for a window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Emission {
    /// One formatted word per line, in address order.
    pub lines: Vec<String>,
    /// How many of `lines` are zero fills for unset addresses.
    pub filled: u64,
}

impl Emission {
    /// Joins the lines with `\n`, adding a trailing newline unless there are none.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Number of lines produced.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Produces the output lines of `window`.
///
/// Without `fill_missing` only stored words are visited, so sparse images with huge
/// windows stay cheap.
pub fn emit_window(image: &MemoryImage, window: &Window, fill_missing: bool) -> Emission {
    let mut emission = Emission::default();
    if fill_missing {
        for (_, word) in window.slots(image) {
            match word {
                Some(word) => emission.lines.push(format_word(word)),
                None => {
                    emission.lines.push(ZERO_WORD.to_owned());
                    emission.filled += 1;
                }
            }
        }
    } else if let Some(range) = window.bounds() {
        emission.lines = image.range(range).map(|(_, word)| format_word(word)).collect();
    }
    emission
}

/// Resolves the window described by `config` and produces its lines.
///
/// # Errors
///
/// Returns [`Error::EmptyImage`] if the image holds no words.
pub fn emit(image: &MemoryImage, config: &Config) -> Result<Emission> {
    let window = Window::from_config(image, config)?;
    let emission = emit_window(image, &window, config.fill_missing);
    info!(
        start = %window.start(),
        window_len = window.len(),
        lines = emission.len(),
        filled = emission.filled,
        "emitted window"
    );
    Ok(emission)
}
