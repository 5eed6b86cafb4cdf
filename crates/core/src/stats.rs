//! Conversion statistics.
//!
//! This module tracks what happened to the input during a conversion run. It provides:
//! 1. **Input breakdown:** Lines read, header detection, records, blanks and ignored lines.
//! 2. **Word accounting:** Words parsed, addresses overwritten and words dropped on overflow.
//! 3. **Output accounting:** Lines emitted and how many of them were gap fills.

use std::fmt;

/// Counters collected by the parser and the window emitter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Physical lines in the input.
    pub lines_read: u64,
    /// Whether the first line was the Logisim header.
    pub header_seen: bool,
    /// Lines that matched `<address>: <words>`.
    pub records: u64,
    /// Lines that were empty after trimming.
    pub blank_lines: u64,
    /// Lines that were neither blank, header nor record.
    pub ignored_lines: u64,
    /// Word tokens stored into the image.
    pub words_parsed: u64,
    /// Stores that replaced a word already present at the same address.
    pub overwrites: u64,
    /// Word tokens dropped because `base + offset` overflowed the address space.
    pub words_overflowed: u64,
    /// Lines written to the output.
    pub lines_emitted: u64,
    /// Emitted lines that were zero fills for unset addresses.
    pub lines_filled: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `render_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["input", "words", "output"];

impl ConvertStats {
    /// Renders the requested sections as a column-aligned report.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Unknown names
    /// are skipped.
    pub fn render_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let mut out = String::new();

        out.push_str("==========================================================\n");
        out.push_str("LOGISIM IMAGE CONVERSION STATISTICS\n");
        out.push_str("==========================================================\n");
        if want("input") {
            push_row(&mut out, "input_lines", self.lines_read);
            push_row(&mut out, "input_header", u64::from(self.header_seen));
            push_row(&mut out, "input_records", self.records);
            push_row(&mut out, "input_blank", self.blank_lines);
            push_row(&mut out, "input_ignored", self.ignored_lines);
            out.push_str("----------------------------------------------------------\n");
        }
        if want("words") {
            push_row(&mut out, "words_parsed", self.words_parsed);
            push_row(&mut out, "words_overwritten", self.overwrites);
            push_row(&mut out, "words_overflowed", self.words_overflowed);
            out.push_str("----------------------------------------------------------\n");
        }
        if want("output") {
            push_row(&mut out, "output_lines", self.lines_emitted);
            push_row(&mut out, "output_filled", self.lines_filled);
            out.push_str("----------------------------------------------------------\n");
        }
        out
    }

    /// Renders every section.
    pub fn render(&self) -> String {
        self.render_sections(&[])
    }
}

fn push_row(out: &mut String, name: &str, value: u64) {
    out.push_str(&format!("{name:<25}{value}\n"));
}

impl fmt::Display for ConvertStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines ({} records, {} ignored), {} words, {} overwritten, {} emitted ({} filled)",
            self.lines_read,
            self.records,
            self.ignored_lines,
            self.words_parsed,
            self.overwrites,
            self.lines_emitted,
            self.lines_filled
        )
    }
}
