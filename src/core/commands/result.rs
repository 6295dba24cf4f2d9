//! Command execution result type.

use crate::models::OutputLine;

/// Result of interpreting one input line.
///
/// Created fresh per line; the terminal renders it and drops it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    /// Output lines to display, in order
    pub output: Vec<OutputLine>,
    /// Discard everything already on screen instead of appending
    pub clears_screen: bool,
}

impl CommandResult {
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            clears_screen: false,
        }
    }

    /// No output, screen untouched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// No output, screen wiped.
    pub fn clear() -> Self {
        Self {
            output: vec![],
            clears_screen: true,
        }
    }
}
