//! Failure report value object - the parsed content of the error sentinel
//!
//! The external build writes one or more lines on failure. Blank lines are
//! dropped; the first remaining line is the summary and every remaining line
//! belongs to the trace.

/// Parsed content of a build error sentinel file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FailureReport {
    lines: Vec<String>,
}

impl FailureReport {
    /// Parse raw sentinel content
    pub fn parse(content: &str) -> Self {
        let lines = content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();
        Self { lines }
    }

    /// First non-blank line, or an empty string when the file held only whitespace
    pub fn summary(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    /// All non-blank lines in file order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Split into `(summary, trace)`
    pub fn into_parts(self) -> (String, Vec<String>) {
        let summary = self.summary().to_string();
        (summary, self.lines)
    }
}
