//! Data models shared by the core and the components.
//!
//! - [`OutputLine`], [`OutputLineData`], [`LineKind`] - Terminal output types

mod terminal;

pub use terminal::{LineKind, OutputLine, OutputLineData};
