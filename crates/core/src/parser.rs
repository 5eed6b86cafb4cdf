//! Logisim "v3.0 hex words addressed" parser.
//!
//! Parsing happens in two steps. Every line is first classified into a [`LineKind`]
//! without touching any state, then the classified records are applied to a
//! [`MemoryImage`] in input order. The format is tolerant: lines that are not address
//! records are ignored rather than rejected, because exported images are often
//! hand-edited and carry comments.
//!
//! A record line has the shape `<hex-address>: <word> <word> ...`. Word `k` of the
//! line lands at `address + k`. A word is a run of one to eight hex digits that is
//! not glued to any other letter, digit or underscore.

use std::fmt;

use tracing::{debug, warn};

use crate::common::constants::HEADER_TOKENS;
use crate::common::{WORD_HEX_DIGITS, WordAddr};
use crate::image::MemoryImage;
use crate::stats::ConvertStats;

/// One address-prefixed line: a base address and the words that follow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRecord {
    /// Word address of the first word on the line.
    pub base: WordAddr,
    /// Word values in line order, as parsed. Masked to 32 bits when stored.
    pub words: Vec<u64>,
}

impl AddressRecord {
    /// Iterates over `(address, word)` pairs, stopping before the first address that
    /// would overflow the address space.
    pub fn placements(&self) -> impl Iterator<Item = (WordAddr, u64)> + '_ {
        self.words
            .iter()
            .zip(0_u64..)
            .map_while(|(&word, offset)| self.base.checked_offset(offset).map(|addr| (addr, word)))
    }

    /// Number of words that cannot be placed because `base + offset` overflows.
    pub fn overflowing_words(&self) -> usize {
        let room = u64::MAX - self.base.val();
        let placeable = usize::try_from(room).map_or(usize::MAX, |r| r.saturating_add(1));
        self.words.len().saturating_sub(placeable)
    }
}

/// Why a non-blank line was not used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The line does not start with a hex address.
    NoAddress,
    /// The hex address is not followed by a colon.
    MissingColon,
    /// The hex address does not fit in 64 bits.
    AddressOverflow,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAddress => write!(f, "no leading hex address"),
            Self::MissingColon => write!(f, "address not followed by ':'"),
            Self::AddressOverflow => write!(f, "address wider than 64 bits"),
        }
    }
}

/// Classification of a single input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// The `v3.0 hex words addressed` header. Only recognised on the first line.
    Header,
    /// Empty or whitespace-only line.
    Blank,
    /// An address record.
    Record(AddressRecord),
    /// Anything else: comments, garbage, malformed records.
    Ignored(IgnoreReason),
}

/// Result of parsing a whole input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedImage {
    /// The words that were placed.
    pub image: MemoryImage,
    /// Input and word counters. Output counters are left at zero.
    pub stats: ConvertStats,
}

/// Returns `true` if `line` is the Logisim header, ignoring case and whitespace.
///
/// Case folding covers the non-ASCII letters that fold onto ASCII ones
/// (`ſ`, `K`, `İ`, `ı`), so `addreſſed` is accepted.
pub fn is_header(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    HEADER_TOKENS
        .iter()
        .all(|want| {
            tokens
                .next()
                .is_some_and(|tok| tok.chars().map(fold_case).eq(want.chars()))
        })
        && tokens.next().is_none()
}

fn fold_case(c: char) -> char {
    match c {
        '\u{17f}' => 's',
        '\u{212a}' => 'k',
        '\u{130}' | '\u{131}' => 'i',
        _ => c.to_ascii_lowercase(),
    }
}

/// Classifies one line. `first` marks the first line of the input, the only place a
/// header is accepted.
pub fn classify_line(line: &str, first: bool) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if first && is_header(line) {
        return LineKind::Header;
    }

    let digits = line.bytes().take_while(u8::is_ascii_hexdigit).count();
    if digits == 0 {
        return LineKind::Ignored(IgnoreReason::NoAddress);
    }
    let (addr_hex, tail) = line.split_at(digits);
    let Some(rest) = tail.trim_start().strip_prefix(':') else {
        return LineKind::Ignored(IgnoreReason::MissingColon);
    };
    let Ok(base) = u64::from_str_radix(addr_hex, 16) else {
        return LineKind::Ignored(IgnoreReason::AddressOverflow);
    };

    LineKind::Record(AddressRecord {
        base: WordAddr::new(base),
        words: word_tokens(rest).filter_map(parse_word).collect(),
    })
}

/// Iterates over the word tokens in the data part of a record line.
///
/// A token is a maximal run of word characters (alphanumerics and `_`) made only of
/// ASCII hex digits and at most [`WORD_HEX_DIGITS`] long. Longer runs, and hex runs
/// touching other word characters, produce nothing.
pub fn word_tokens(data: &str) -> impl Iterator<Item = &str> {
    data.split(|c: char| !is_word_char(c)).filter(|run| {
        !run.is_empty()
            && run.len() <= WORD_HEX_DIGITS
            && run.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn parse_word(token: &str) -> Option<u64> {
    u64::from_str_radix(token, 16).ok()
}

/// Splits text into lines, accepting `\n`, `\r\n` and lone `\r` terminators.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}

/// Parses a sequence of lines into a memory image.
///
/// Never fails: lines that are not address records are counted and skipped.
pub fn parse_lines<'a, I>(lines: I) -> ParsedImage
where
    I: IntoIterator<Item = &'a str>,
{
    let mut image = MemoryImage::new();
    let mut stats = ConvertStats::default();

    for (index, line) in lines.into_iter().enumerate() {
        stats.lines_read += 1;
        let line_no = index + 1;
        match classify_line(line, index == 0) {
            LineKind::Header => stats.header_seen = true,
            LineKind::Blank => stats.blank_lines += 1,
            LineKind::Ignored(reason) => {
                stats.ignored_lines += 1;
                debug!(line = line_no, %reason, "ignoring line");
            }
            LineKind::Record(record) => {
                stats.records += 1;
                apply_record(&mut image, &record, &mut stats, line_no);
            }
        }
    }

    ParsedImage { image, stats }
}

/// Parses a whole input text.
pub fn parse_str(text: &str) -> ParsedImage {
    parse_lines(split_lines(text))
}

fn apply_record(
    image: &mut MemoryImage,
    record: &AddressRecord,
    stats: &mut ConvertStats,
    line_no: usize,
) {
    for (addr, word) in record.placements() {
        stats.words_parsed += 1;
        if let Some(previous) = image.store_masked(addr, word) {
            stats.overwrites += 1;
            debug!(line = line_no, %addr, previous, word, "overwriting word");
        }
    }

    let dropped = record.overflowing_words();
    if dropped > 0 {
        stats.words_overflowed += dropped as u64;
        warn!(
            line = line_no,
            base = %record.base,
            dropped,
            "words past the end of the address space were dropped"
        );
    }
}
