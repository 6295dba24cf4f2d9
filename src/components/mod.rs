//! UI components built with Leptos.
//!
//! - [`header`] - Title bar with the theme toggle
//! - [`chat`] - Scripted chat widget
//! - [`explorer`] - Read-only project tree
//! - [`editor`] - Code display with line numbers
//! - [`terminal`] - Mock command terminal
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod chat;
pub mod editor;
pub mod explorer;
pub mod header;
pub mod icons;
pub mod terminal;
