use std::fmt::Write;

use logihex_core::common::constants::HEADER_LINE;

/// Builds Logisim `v3.0 hex words addressed` text line by line.
#[derive(Debug, Clone)]
pub struct HexImageBuilder {
    lines: Vec<String>,
}

impl Default for HexImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HexImageBuilder {
    /// Starts an image with the standard header line.
    pub fn new() -> Self {
        Self {
            lines: vec![HEADER_LINE.to_string()],
        }
    }

    /// Starts an image without a header line.
    pub fn headerless() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends an address record, formatting words as 8 hex digits.
    pub fn record(mut self, base: u64, words: &[u32]) -> Self {
        let mut line = format!("{base:x}:");
        for word in words {
            write!(line, " {word:08x}").unwrap();
        }
        self.lines.push(line);
        self
    }

    /// Appends a line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Appends an empty line.
    pub fn blank(self) -> Self {
        self.raw("")
    }

    /// Joins all lines with `\n` and a trailing newline.
    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
