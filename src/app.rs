//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! terminal screen state, following Leptos conventions.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::components::chat::Chat;
use crate::components::editor::Editor;
use crate::components::explorer::Explorer;
use crate::components::header::Header;
use crate::components::terminal::Terminal;
use crate::config::terminal::{HELP_HINT, MAX_HISTORY};
use crate::config::{APP_NAME, APP_VERSION};
use crate::core::{CommandResult, Theme, prefs};
use crate::models::OutputLine;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// Screen
// ============================================================================

/// Lines currently shown in the terminal, oldest first.
///
/// Bounded by `capacity`; the oldest lines are dropped first.
#[derive(Clone, Debug)]
pub struct Screen {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl Screen {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Wipe or append, as the result asks.
    pub fn apply(&mut self, result: CommandResult) {
        if result.clears_screen {
            self.clear();
        }
        self.extend(result.output);
    }

    pub fn to_vec(&self) -> Vec<OutputLine> {
        self.lines.iter().cloned().collect()
    }
}

/// Banner printed when the terminal opens.
pub fn welcome_lines() -> Vec<OutputLine> {
    vec![
        OutputLine::text(format!(
            "Bienvenue dans le terminal {} v{}",
            APP_NAME, APP_VERSION
        )),
        OutputLine::text(HELP_HINT),
    ]
}

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// `Copy` because its only field is a signal.
#[derive(Clone, Copy)]
pub struct TerminalState {
    pub screen: RwSignal<Screen>,
}

impl TerminalState {
    /// Starts with the welcome banner on screen.
    pub fn new() -> Self {
        let mut screen = Screen::new(MAX_HISTORY);
        screen.extend(welcome_lines());
        Self {
            screen: RwSignal::new(screen),
        }
    }

    pub fn push_output(&self, line: OutputLine) {
        self.screen.update(|s| s.push(line));
    }

    pub fn apply(&self, result: CommandResult) {
        self.screen.update(|s| s.apply(result));
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from children with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active theme, loaded from localStorage on startup.
    pub theme: RwSignal<Theme>,
    pub terminal: TerminalState,
}

impl AppContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(theme),
            terminal: TerminalState::new(),
        }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggle();
        self.theme.set(next);
        if let Err(e) = prefs::save_theme(next) {
            web_sys::console::warn_1(&e.to_string().into());
        }
    }
}

/// Root application component.
///
/// Creates the global AppContext, keeps the `<body>` theme class in sync,
/// and lays out the five panels.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(prefs::load_theme());
    provide_context(ctx);

    Effect::new(move || prefs::apply_theme(ctx.theme.get()));

    view! {
        <div class=css::page>
            <Header />
            <main class=css::grid>
                <section class=css::chat><Chat /></section>
                <section class=css::explorer><Explorer /></section>
                <section class=css::editor><Editor /></section>
                <section class=css::terminal><Terminal /></section>
            </main>
        </div>
    }
}
