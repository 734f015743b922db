//! Indent-aware string builder for text reports.
//!
//! Reports use 2-space indentation.

pub struct ReportWriter {
    buf: String,
    indent_level: usize,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
            indent_level: 0,
        }
    }

    /// Write a complete line (appends newline).
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Consume the writer and return the report text.
    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
