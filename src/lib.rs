//! CodeLab developer portal.
//!
//! A client-side demo page: theme toggle, scripted chat, read-only project
//! tree, code display with line numbers, and a mock terminal. The logic lives
//! in [`core`]; [`components`] binds it to the DOM with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
