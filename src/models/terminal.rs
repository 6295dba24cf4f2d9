//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keying in For loops
    pub id: usize,
    pub data: OutputLineData,
}

/// The content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Echo of a submitted input, rendered after the `$` prompt
    Command(String),
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Error,
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn command(input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command(input.into()))
    }

    pub fn kind(&self) -> LineKind {
        match self.data {
            OutputLineData::Command(_) => LineKind::Command,
            OutputLineData::Text(_) => LineKind::Output,
            OutputLineData::Error(_) => LineKind::Error,
        }
    }

    pub fn as_str(&self) -> &str {
        match &self.data {
            OutputLineData::Command(s) | OutputLineData::Text(s) | OutputLineData::Error(s) => s,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are per-instance; compare content only
        self.data == other.data
    }
}
