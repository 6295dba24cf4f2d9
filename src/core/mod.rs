//! Core logic for the developer portal.
//!
//! This module provides:
//! - [`render_tree`] turning a [`TreeNode`] forest into a [`RenderedTree`]
//! - [`interpret`] running one terminal line into a [`CommandResult`]
//! - [`chat`], [`editor`], [`theme`] for the smaller widgets
//! - [`prefs`] for the persisted theme

pub mod chat;
pub mod clock;
mod commands;
pub mod editor;
pub mod error;
pub mod prefs;
pub mod theme;
pub mod tree;

pub use clock::{BrowserClock, Clock, LocalDateTime};
pub use commands::{COMMANDS, Command, CommandResult, execute_command, interpret};
pub use theme::Theme;
pub use tree::{NodeKind, RenderedNode, RenderedTree, TreeNode, parse_forest, render_tree};
