//! Mock terminal: output history plus a single-line input.

mod input;
mod output;
#[allow(clippy::module_inception)]
mod terminal;

pub use input::Input;
pub use output::Output;
pub use terminal::Terminal;
